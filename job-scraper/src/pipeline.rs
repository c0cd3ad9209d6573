use std::collections::HashMap;

use salary_analyzer::{average_salary, estimate_salary, LanguageAggregate, SalaryExtractor};

use crate::api::{Result, VacancySource};

const KEYWORD_PREFIX: &str = "программист";

/// All vacancies fetched for one search.
#[derive(Debug)]
pub struct LanguageVacancies<R> {
    pub items: Vec<R>,
    pub vacancies_found: u64,
}

pub fn search_keyword(language: &str) -> String {
    format!("{} {}", KEYWORD_PREFIX, language)
}

/// Fetch every page for the search, one request at a time, until the site
/// reports no more pages. The found count is taken from the last page.
pub async fn fetch_vacancies<S: VacancySource>(
    source: &S,
    keyword: &str,
) -> Result<LanguageVacancies<S::Record>> {
    let mut items = Vec::new();
    let mut vacancies_found = 0;
    let mut page = 0;
    let mut pages = 1;
    while page < pages {
        let result = source.fetch_page(keyword, page).await?;
        items.extend(result.items);
        vacancies_found = result.found;
        pages = result.pages;
        page += 1;
    }
    log::debug!(
        "fetched {} of {} vacancies from {} in {} pages, search: {}",
        items.len(),
        vacancies_found,
        source.name(),
        page,
        keyword
    );
    Ok(LanguageVacancies {
        items,
        vacancies_found,
    })
}

/// Reduce the fetched vacancies of one language to its aggregate.
pub fn aggregate_language<E: SalaryExtractor>(
    extractor: &E,
    vacancies: &LanguageVacancies<E::Record>,
) -> LanguageAggregate {
    let estimates = vacancies
        .items
        .iter()
        .map(|vacancy| extractor.extract_range(vacancy))
        .map(|range| range.as_ref().and_then(estimate_salary));
    let stats = average_salary(estimates);
    LanguageAggregate::new(vacancies.vacancies_found, stats.count, stats.average)
}

/// Run the whole pipeline for every language against one site.
/// Any failed request aborts the run.
pub async fn collect_salary_stats<S: VacancySource>(
    source: &S,
    languages: &[&str],
) -> Result<HashMap<String, LanguageAggregate>> {
    let mut salary_by_language = HashMap::with_capacity(languages.len());
    for language in languages {
        let vacancies = fetch_vacancies(source, &search_keyword(language)).await?;
        let aggregate = aggregate_language(source, &vacancies);
        match aggregate.average_salary {
            Some(average) => log::info!(
                "{}: {} found, {} processed, average salary {}",
                language,
                aggregate.vacancies_found,
                aggregate.vacancies_processed,
                average
            ),
            None => log::warn!(
                "{}: {} found on {}, none with a salary in rubles",
                language,
                aggregate.vacancies_found,
                source.name()
            ),
        }
        salary_by_language.insert(language.to_string(), aggregate);
    }
    Ok(salary_by_language)
}

#[cfg(test)]
mod test {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use salary_analyzer::SalaryRange;

    use super::*;
    use crate::api::{Error, VacancyPage};

    #[derive(Debug, Clone)]
    struct Listing {
        currency: &'static str,
        from: Option<f64>,
        to: Option<f64>,
    }

    fn listing(currency: &'static str, from: Option<f64>, to: Option<f64>) -> Listing {
        Listing { currency, from, to }
    }

    /// Serves the same pages for every keyword and records each request.
    struct PagedSource {
        pages: Vec<Vec<Listing>>,
        found: u64,
        requests: Mutex<Vec<(String, u32)>>,
        fail_on_page: Option<u32>,
    }

    impl PagedSource {
        fn new(pages: Vec<Vec<Listing>>, found: u64) -> Self {
            Self {
                pages,
                found,
                requests: Mutex::new(Vec::new()),
                fail_on_page: None,
            }
        }
    }

    impl SalaryExtractor for PagedSource {
        type Record = Listing;

        fn extract_range(&self, record: &Listing) -> Option<SalaryRange> {
            if record.from.is_none() && record.to.is_none() {
                return None;
            }
            Some(SalaryRange::new(record.currency.to_owned(), record.from, record.to))
        }
    }

    #[async_trait]
    impl VacancySource for PagedSource {
        fn name(&self) -> &'static str {
            "paged"
        }

        async fn fetch_page(&self, keyword: &str, page: u32) -> Result<VacancyPage<Listing>> {
            self.requests
                .lock()
                .unwrap()
                .push((keyword.to_owned(), page));
            if self.fail_on_page == Some(page) {
                return Err(Error::RequestNotOk {
                    url: format!("paged://{}", page),
                    status: 500,
                });
            }
            Ok(VacancyPage {
                items: self.pages[page as usize].clone(),
                found: self.found,
                pages: self.pages.len() as u32,
            })
        }
    }

    fn two_pages() -> Vec<Vec<Listing>> {
        vec![
            vec![
                listing("RUR", Some(100000.0), Some(200000.0)),
                listing("USD", Some(3000.0), Some(5000.0)),
                listing("RUR", None, None),
            ],
            vec![
                listing("rub", None, Some(100000.0)),
                listing("rub", Some(100000.0), None),
                listing("EUR", None, Some(4000.0)),
            ],
        ]
    }

    #[tokio::test]
    async fn test_fetch_all_pages() {
        let source = PagedSource::new(two_pages(), 250);
        let vacancies = fetch_vacancies(&source, "программист rust")
            .await
            .expect("fetch failed");
        assert_eq!(vacancies.items.len(), 6);
        assert_eq!(vacancies.vacancies_found, 250);
        let requests = source.requests.lock().unwrap();
        assert_eq!(
            *requests,
            vec![
                ("программист rust".to_owned(), 0),
                ("программист rust".to_owned(), 1)
            ]
        );
    }

    #[tokio::test]
    async fn test_collect_salary_stats() {
        let _ = env_logger::builder().is_test(true).try_init();
        let source = PagedSource::new(two_pages(), 250);
        let stats = collect_salary_stats(&source, &["python", "go"])
            .await
            .expect("pipeline failed");

        assert_eq!(stats.len(), 2);
        let python = &stats["python"];
        assert_eq!(python.vacancies_found, 250);
        // (150000 + 80000 + 120000) / 3
        assert_eq!(python.vacancies_processed, 3);
        assert_eq!(python.average_salary, Some(116666));
        assert_eq!(stats["go"], *python);
        assert_eq!(source.requests.lock().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_language_without_rub_salaries() {
        let source = PagedSource::new(
            vec![vec![
                listing("USD", Some(1000.0), None),
                listing("rub", Some(0.0), Some(0.0)),
            ]],
            2,
        );
        let stats = collect_salary_stats(&source, &["c"]).await.unwrap();
        assert_eq!(stats["c"], LanguageAggregate::new(2, 0, None));
    }

    #[tokio::test]
    async fn test_failed_page_aborts() {
        let mut source = PagedSource::new(two_pages(), 250);
        source.fail_on_page = Some(1);
        let res = collect_salary_stats(&source, &["java", "php"]).await;
        assert!(matches!(res, Err(Error::RequestNotOk { status: 500, .. })));
        assert_eq!(source.requests.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_search_keyword() {
        assert_eq!(search_keyword("c++"), "программист c++");
    }
}
