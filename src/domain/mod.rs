//! Domain types for the form screen.
//! Posts, the ordered post store, and the error taxonomy.

pub mod error;
pub mod post;
pub mod store;

pub use error::*;
pub use post::*;
pub use store::*;
