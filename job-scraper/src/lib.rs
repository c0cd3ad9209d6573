pub mod api;
pub mod config;
mod de;
pub mod headhunter;
pub mod pipeline;
pub mod superjob;

pub use api::{Error, Result, VacancyPage, VacancySource};
pub use config::Config;
