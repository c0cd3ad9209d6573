use crate::types::SalaryRange;

/// Trait for pulling the stated salary range out of a site specific vacancy record.
///
/// Missing or malformed salary data is never an error, the extractor just
/// reports that the record has no usable range.
pub trait SalaryExtractor {
    type Record;
    fn extract_range(&self, record: &Self::Record) -> Option<SalaryRange>;
}
