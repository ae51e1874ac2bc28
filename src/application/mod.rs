//! Application layer.
//!
//! Response reducers, the capture flow state machine, and submit reporting.
//! Nothing here depends on the screen store or a rendering backend.

pub mod capture;
pub mod responses;
pub mod submit;
