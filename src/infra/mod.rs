//! Infrastructure layer (adapters/implementations).
//!
//! Host-facing integrations: bundled/on-disk assets, the permission
//! subsystem, capture targets and the camera, and app configuration.

pub mod app_config;
pub mod assets;
pub mod camera;
pub mod permissions;
