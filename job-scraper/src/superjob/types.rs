use serde::{Deserialize, Serialize};

use crate::de::{lenient, lenient_or_default};

/// SuperJob reports unset payments as `0` or `null`, and leaves the currency
/// `null` on vacancies without pay. Malformed values are read as missing.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Vacancy {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub profession: String,
    #[serde(default, deserialize_with = "lenient")]
    pub payment_from: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub payment_to: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub currency: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ApiResponse {
    pub(crate) objects: Vec<Vacancy>,
    pub(crate) total: u64,
}

#[derive(Serialize, Debug)]
pub(crate) struct SearchParams<'a> {
    pub(crate) town: u32,
    pub(crate) catalogue: u32,
    pub(crate) keyword: &'a str,
    pub(crate) count: u32,
    pub(crate) page: u32,
}
