pub mod config;
pub mod formatting;
pub mod validation;

pub use config::*;
pub use formatting::*;
pub use validation::*;
