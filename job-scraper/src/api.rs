use async_trait::async_trait;
use salary_analyzer::SalaryExtractor;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request to '{url}' not successful, status code: {status}")]
    RequestNotOk { url: String, status: u16 },
}

/// One page of search results as reported by a job site.
#[derive(Debug)]
pub struct VacancyPage<R> {
    pub items: Vec<R>,
    /// total number of matches for the search, not just this page
    pub found: u64,
    /// number of pages the site is willing to serve for the search
    pub pages: u32,
}

/// A job site that can be searched page by page.
/// Paired with [`SalaryExtractor`] so the pipeline can read salaries out of its records.
#[async_trait]
pub trait VacancySource: SalaryExtractor + Send + Sync {
    fn name(&self) -> &'static str;
    async fn fetch_page(&self, keyword: &str, page: u32) -> Result<VacancyPage<Self::Record>>;
}
