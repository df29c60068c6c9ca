//! Data types for the table model.

mod column;
mod config;
mod data_source;

pub use column::*;
pub use config::*;
pub use data_source::*;
