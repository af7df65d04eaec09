//! Page components for the web interface

pub mod admin;
pub mod not_found;
pub mod submit;
