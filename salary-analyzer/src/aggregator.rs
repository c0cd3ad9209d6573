/// Mean of the usable estimates of one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryStats {
    pub count: u64,
    /// floor of the mean, `None` when nothing was counted
    pub average: Option<u64>,
}

/// Reduce per vacancy estimates into a count and a floored mean.
/// Absent and non-positive entries are skipped, an empty input yields no
/// average instead of failing.
pub fn average_salary<I>(estimates: I) -> SalaryStats
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = estimates
        .into_iter()
        .flatten()
        .filter(|salary| *salary > 0.0)
        .fold((0.0_f64, 0_u64), |(sum, count), salary| (sum + salary, count + 1));
    if count == 0 {
        return SalaryStats {
            count,
            average: None,
        };
    }
    let average = (sum / count as f64).floor() as u64;
    SalaryStats {
        count,
        average: Some(average),
    }
}
