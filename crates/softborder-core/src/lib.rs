//! Softborder Core - configuration model, naming, and error handling

pub mod config;
pub mod error;
pub mod names;
pub mod serde_integral;

pub use config::*;
pub use error::{Error, Result};
pub use names::*;
