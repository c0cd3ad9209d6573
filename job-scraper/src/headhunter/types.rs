use serde::{Deserialize, Serialize};

use crate::de::{lenient, lenient_or_default};

/// Every field is optional on hh.ru, malformed values are read as missing.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Salary {
    #[serde(default, deserialize_with = "lenient")]
    pub from: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub to: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub currency: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Vacancy {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub salary: Option<Salary>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ApiResponse {
    pub(crate) items: Vec<Vacancy>,
    pub(crate) found: u64,
    pub(crate) pages: u32,
}

#[derive(Serialize, Debug)]
pub(crate) struct SearchParams<'a> {
    pub(crate) text: &'a str,
    pub(crate) period: u32,
    pub(crate) area: u32,
    pub(crate) page: u32,
}
