//! Error types

mod config;
mod form;

pub use config::*;
pub use form::*;
