use async_trait::async_trait;
use reqwest::Client;
use salary_analyzer::{SalaryExtractor, SalaryRange};

use crate::api::{Error, Result, VacancyPage, VacancySource};
use crate::headhunter::types::{ApiResponse, SearchParams, Vacancy};

pub const VACANCIES_URL: &str = "https://api.hh.ru/vacancies/";
/// hh.ru rejects requests without a descriptive agent
const USER_AGENT: &str = concat!("job-analytics/", env!("CARGO_PKG_VERSION"));
/// Moscow
const AREA: u32 = 1;
/// only vacancies published within the last month
const PERIOD_DAYS: u32 = 30;

pub struct HeadHunter {
    client: Client,
    url: String,
}

impl HeadHunter {
    pub fn new() -> Result<Self> {
        Self::with_base_url(VACANCIES_URL)
    }

    pub fn with_base_url(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl SalaryExtractor for HeadHunter {
    type Record = Vacancy;

    fn extract_range(&self, vacancy: &Vacancy) -> Option<SalaryRange> {
        let salary = vacancy.salary.as_ref()?;
        Some(SalaryRange::new(
            salary.currency.clone().unwrap_or_default(),
            salary.from,
            salary.to,
        ))
    }
}

#[async_trait]
impl VacancySource for HeadHunter {
    fn name(&self) -> &'static str {
        "HeadHunter"
    }

    async fn fetch_page(&self, keyword: &str, page: u32) -> Result<VacancyPage<Vacancy>> {
        let params = SearchParams {
            text: keyword,
            period: PERIOD_DAYS,
            area: AREA,
            page,
        };
        log::debug!("requesting vacancies from hh, page: {}, search: {}", page, keyword);
        let resp = self.client.get(&self.url).query(&params).send().await?;
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
        log::debug!(
            "successfully retrieved {} vacancies for page: {}/{}, search: {}",
            body.items.len(),
            page,
            body.pages,
            keyword
        );
        Ok(VacancyPage {
            items: body.items,
            found: body.found,
            pages: body.pages,
        })
    }
}
