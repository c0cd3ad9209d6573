/// An employer stated salary range.
/// Either bound may be missing, a range without both bounds carries no data.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryRange {
    pub currency: String,
    pub lower_bound: Option<f64>,
    pub upper_bound: Option<f64>,
}

impl SalaryRange {
    pub fn new(currency: String, lower_bound: Option<f64>, upper_bound: Option<f64>) -> Self {
        Self {
            currency,
            lower_bound,
            upper_bound,
        }
    }
}

/// Per language result of one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageAggregate {
    /// total match count reported by the site, can exceed the fetched records
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    /// `None` when no vacancy yielded a usable estimate
    pub average_salary: Option<u64>,
}

impl LanguageAggregate {
    pub fn new(vacancies_found: u64, vacancies_processed: u64, average_salary: Option<u64>) -> Self {
        Self {
            vacancies_found,
            vacancies_processed,
            average_salary,
        }
    }
}
