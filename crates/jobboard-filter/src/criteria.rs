//! # Criteria
//!
//! A criterion decides whether one record belongs in the result. Criteria
//! report whether they are active; an inactive criterion must match every
//! record, which lets the engine skip the scan entirely.

use serde::{Deserialize, Serialize};

use jobboard_core::salary::disclosed;
use jobboard_core::JobPosting;

/// A predicate over records of type `T`.
pub trait Criteria<T: ?Sized> {
    /// Whether `record` satisfies this criterion.
    fn matches(&self, record: &T) -> bool;

    /// Whether this criterion constrains anything at all.
    fn is_active(&self) -> bool;

    /// Conjunction: a record must satisfy both `self` and `other`.
    fn and<C>(self, other: C) -> And<Self, C>
    where
        Self: Sized,
        C: Criteria<T>,
    {
        And(self, other)
    }
}

/// An absent criterion imposes no constraint.
impl<T: ?Sized, C: Criteria<T>> Criteria<T> for Option<C> {
    fn matches(&self, record: &T) -> bool {
        self.as_ref().map_or(true, |c| c.matches(record))
    }

    fn is_active(&self) -> bool {
        self.as_ref().is_some_and(|c| c.is_active())
    }
}

impl<T: ?Sized, C: Criteria<T> + ?Sized> Criteria<T> for &C {
    fn matches(&self, record: &T) -> bool {
        (**self).matches(record)
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}

/// Both criteria must hold. Built with [`Criteria::and`].
#[derive(Debug, Clone, PartialEq)]
pub struct And<A, B>(pub A, pub B);

impl<T: ?Sized, A: Criteria<T>, B: Criteria<T>> Criteria<T> for And<A, B> {
    fn matches(&self, record: &T) -> bool {
        self.0.matches(record) && self.1.matches(record)
    }

    fn is_active(&self) -> bool {
        self.0.is_active() || self.1.is_active()
    }
}

/// An ad-hoc criterion from a closure. Always active.
pub struct Where<F>(pub F);

impl<T: ?Sized, F: Fn(&T) -> bool> Criteria<T> for Where<F> {
    fn matches(&self, record: &T) -> bool {
        (self.0)(record)
    }

    fn is_active(&self) -> bool {
        true
    }
}

/// Multi-select: the value must be one of the selected options.
/// An empty selection admits everything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OneOf<V>(Vec<V>);

impl<V: PartialEq> OneOf<V> {
    /// Select the given options. Duplicates are dropped.
    pub fn new(options: impl IntoIterator<Item = V>) -> Self {
        let mut selected = Self(Vec::new());
        for option in options {
            if !selected.contains(&option) {
                selected.0.push(option);
            }
        }
        selected
    }

    /// Whether `value` passes the selection.
    pub fn admits(&self, value: &V) -> bool {
        self.0.is_empty() || self.0.contains(value)
    }

    /// Whether `value` is explicitly selected.
    pub fn contains(&self, value: &V) -> bool {
        self.0.contains(value)
    }

    /// Select `value` if unselected, deselect it otherwise.
    /// Matches checkbox behaviour in the filter panel.
    pub fn toggle(&mut self, value: V) {
        if let Some(pos) = self.0.iter().position(|v| *v == value) {
            self.0.remove(pos);
        } else {
            self.0.push(value);
        }
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The selected options in selection order.
    pub fn selected(&self) -> &[V] {
        &self.0
    }
}

impl<V> Default for OneOf<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

/// Inclusive salary window, serialized as `[low, high]`.
///
/// A job passes when its `salary_min` is absent or `>= low`, and its
/// `salary_max` is absent or `<= high`. A bound of `0` counts as absent.
/// Jobs with no salary data always pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct SalaryRange {
    /// Lowest acceptable `salary_min`.
    pub low: f64,
    /// Highest acceptable `salary_max`.
    pub high: f64,
}

impl SalaryRange {
    /// Build a range. Bounds given in the wrong order are swapped.
    pub fn new(low: f64, high: f64) -> Self {
        if low <= high {
            Self { low, high }
        } else {
            Self {
                low: high,
                high: low,
            }
        }
    }

    /// Whether a job with these bounds passes.
    pub fn admits(&self, salary_min: Option<f64>, salary_max: Option<f64>) -> bool {
        disclosed(salary_min).map_or(true, |min| min >= self.low)
            && disclosed(salary_max).map_or(true, |max| max <= self.high)
    }
}

impl From<(f64, f64)> for SalaryRange {
    fn from((low, high): (f64, f64)) -> Self {
        Self::new(low, high)
    }
}

impl From<SalaryRange> for (f64, f64) {
    fn from(range: SalaryRange) -> Self {
        (range.low, range.high)
    }
}

impl Criteria<JobPosting> for SalaryRange {
    fn matches(&self, job: &JobPosting) -> bool {
        self.admits(job.salary_min, job.salary_max)
    }

    fn is_active(&self) -> bool {
        true
    }
}
