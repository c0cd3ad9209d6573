use async_trait::async_trait;
use reqwest::Client;
use salary_analyzer::{SalaryExtractor, SalaryRange};

use crate::api::{Error, Result, VacancyPage, VacancySource};
use crate::config::Config;
use crate::superjob::types::{ApiResponse, SearchParams, Vacancy};

pub const VACANCIES_URL: &str = "https://api.superjob.ru/2.0/vacancies/";
const API_KEY_HEADER: &str = "X-Api-App-Id";
/// Moscow
const TOWN: u32 = 4;
/// "Development, programming"
const CATALOGUE: u32 = 48;
const PAGE_SIZE: u32 = 20;

pub struct SuperJob {
    client: Client,
    url: String,
    config: Config,
}

impl SuperJob {
    pub fn new(config: Config) -> Self {
        Self::with_base_url(config, VACANCIES_URL)
    }

    pub fn with_base_url(config: Config, url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            config,
        }
    }
}

/// SuperJob does not report a page count, it is derived from the total.
fn page_count(total: u64) -> u32 {
    (total / PAGE_SIZE as u64 + 1) as u32
}

impl SalaryExtractor for SuperJob {
    type Record = Vacancy;

    fn extract_range(&self, vacancy: &Vacancy) -> Option<SalaryRange> {
        let from = vacancy.payment_from.filter(|p| *p != 0.0);
        let to = vacancy.payment_to.filter(|p| *p != 0.0);
        if from.is_none() && to.is_none() {
            return None;
        }
        Some(SalaryRange::new(
            vacancy.currency.clone().unwrap_or_default(),
            from,
            to,
        ))
    }
}

#[async_trait]
impl VacancySource for SuperJob {
    fn name(&self) -> &'static str {
        "SuperJob"
    }

    async fn fetch_page(&self, keyword: &str, page: u32) -> Result<VacancyPage<Vacancy>> {
        let params = SearchParams {
            town: TOWN,
            catalogue: CATALOGUE,
            keyword,
            count: PAGE_SIZE,
            page,
        };
        log::debug!("requesting vacancies from superjob, page: {}, search: {}", page, keyword);
        let resp = self
            .client
            .get(&self.url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .query(&params)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let url = resp.url().to_string();
            let error_body = resp.text().await;
            log::error!(
                "failed to retrieve results for page: {}, search: {}, error resp body: {:?}",
                page,
                keyword,
                error_body,
            );
            return Err(Error::RequestNotOk {
                url,
                status: status.as_u16(),
            });
        }
        let body: ApiResponse = resp.json().await?;
        let pages = page_count(body.total);
        log::debug!(
            "successfully retrieved {} vacancies for page: {}/{}, search: {}",
            body.objects.len(),
            page,
            pages,
            keyword
        );
        Ok(VacancyPage {
            items: body.objects,
            found: body.total,
            pages,
        })
    }
}
