pub mod scraper;
pub mod types;

pub use scraper::HeadHunter;
