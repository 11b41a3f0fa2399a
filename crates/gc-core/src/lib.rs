pub mod config;
pub mod error;
pub mod types;

pub use config::GrievanceConfig;
pub use error::{GcError, Result};
pub use types::{BaseClassification, Classification, Explanation, Severity};
