use crate::types::SalaryRange;

/// Both spellings the sites use for rubles. Matched literally.
pub const REFERENCE_CURRENCIES: [&str; 2] = ["RUR", "rub"];

const UPPER_ONLY_FACTOR: f64 = 0.8;
const LOWER_ONLY_FACTOR: f64 = 1.2;

/// Estimate a single monthly salary in rubles from a stated range.
///
/// A bound of exactly zero counts as not stated. With one bound known the
/// estimate leans 20% towards the known side.
pub fn estimate_salary(range: &SalaryRange) -> Option<f64> {
    if !REFERENCE_CURRENCIES.contains(&range.currency.as_str()) {
        return None;
    }
    let lower = range.lower_bound.filter(|v| *v != 0.0);
    let upper = range.upper_bound.filter(|v| *v != 0.0);
    match (lower, upper) {
        (Some(lower), Some(upper)) => Some((lower + upper) / 2.0),
        (None, Some(upper)) => Some(upper * UPPER_ONLY_FACTOR),
        (Some(lower), None) => Some(lower * LOWER_ONLY_FACTOR),
        (None, None) => None,
    }
}
