//! UI layer - the form screen store and its headless views

pub mod app;
pub mod views;
