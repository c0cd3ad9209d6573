pub mod aggregator;
pub mod api;
pub mod normalizer;
pub mod types;

pub use aggregator::{average_salary, SalaryStats};
pub use api::SalaryExtractor;
pub use normalizer::{estimate_salary, REFERENCE_CURRENCIES};
pub use types::{LanguageAggregate, SalaryRange};
