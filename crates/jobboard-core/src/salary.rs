//! # Salary Display
//!
//! Salaries are optional bounds in lakhs per annum (LPA) by default. A job
//! with neither bound is "Not Disclosed"; the filter engine never excludes
//! such a job on salary grounds.
//!
//! A bound of `0` carries no information and is treated exactly like an
//! absent one, both when rows are loaded and when bands are rendered.

use serde::{Deserialize, Deserializer};

/// Unit suffix shown after salary figures unless configured otherwise.
pub const DEFAULT_SALARY_UNIT: &str = "LPA";

/// Label shown when a posting carries no salary data.
pub const NOT_DISCLOSED: &str = "Not Disclosed";

/// A salary bound as disclosed: `0` and NaN mean "not disclosed".
pub fn disclosed(bound: Option<f64>) -> Option<f64> {
    bound.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Deserialise a salary bound, mapping `0` to `None`.
pub(crate) fn disclosed_bound<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(disclosed)
}

/// Render a salary band for a job card.
///
/// | min | max | result |
/// |-----|-----|--------|
/// | - or 0 | - or 0 | `Not Disclosed` |
/// | 10 | - | `10+ LPA` |
/// | - | 20 | `Up to 20 LPA` |
/// | 10 | 20 | `10 - 20 LPA` |
///
/// Figures print without a trailing `.0` for whole numbers.
pub fn format_salary(min: Option<f64>, max: Option<f64>, unit: &str) -> String {
    match (disclosed(min), disclosed(max)) {
        (None, None) => NOT_DISCLOSED.to_string(),
        (Some(min), None) => format!("{min}+ {unit}"),
        (None, Some(max)) => format!("Up to {max} {unit}"),
        (Some(min), Some(max)) => format!("{min} - {max} {unit}"),
    }
}
