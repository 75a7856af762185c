//! Closed numeric intervals used as brush selections on an axis.

use serde::{Deserialize, Serialize};

/// A closed interval `[start, end]` on one axis, in data units.
///
/// Endpoints may be ±∞ and compare numerically. An interval built with
/// [`Interval::new`] is always ascending; one built from a raw pair keeps the
/// endpoints as given until [`Interval::normalize`] is called.
///
/// Serializes as a two-element array `[start, end]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Interval {
    /// Lower bound in data units. Can be -∞.
    pub start: f64,
    /// Upper bound in data units. Can be +∞.
    pub end: f64,
}

impl Interval {
    /// Create a new ascending interval from two endpoints given in any order.
    #[inline]
    pub fn new(a: f64, b: f64) -> Self {
        let mut interval = Self::from_raw([a, b]);
        interval.normalize();
        interval
    }

    /// Keep both endpoints exactly as given, even when `end < start`.
    #[inline]
    pub const fn from_raw([start, end]: [f64; 2]) -> Self {
        Self { start, end }
    }

    /// Reorder the endpoints in place so that `start <= end`.
    ///
    /// A NaN endpoint never compares, so the pair is left untouched.
    #[inline]
    pub fn normalize(&mut self) {
        if self.end < self.start {
            std::mem::swap(&mut self.start, &mut self.end);
        }
    }

    /// `true` for a single-point interval such as `[3, 3]`.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if the scalar `x` lies within `[start, end]`.
    ///
    /// Plain IEEE comparisons: anything involving NaN is outside.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.start <= x && x <= self.end
    }

    #[inline]
    pub fn to_pair(self) -> [f64; 2] {
        [self.start, self.end]
    }
}

impl From<[f64; 2]> for Interval {
    #[inline]
    fn from(pair: [f64; 2]) -> Self {
        Self::from_raw(pair)
    }
}

impl From<&[f64; 2]> for Interval {
    #[inline]
    fn from(pair: &[f64; 2]) -> Self {
        Self::from_raw(*pair)
    }
}

impl From<(f64, f64)> for Interval {
    #[inline]
    fn from((start, end): (f64, f64)) -> Self {
        Self::from_raw([start, end])
    }
}

impl From<&Interval> for Interval {
    #[inline]
    fn from(interval: &Interval) -> Self {
        *interval
    }
}

impl From<Interval> for [f64; 2] {
    #[inline]
    fn from(interval: Interval) -> Self {
        interval.to_pair()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sorts_endpoints() {
        assert_eq!(Interval::new(5.0, 1.0), Interval::from_raw([1.0, 5.0]));
        assert_eq!(Interval::new(1.0, 5.0), Interval::from_raw([1.0, 5.0]));
    }

    #[test]
    fn raw_pair_is_kept_until_normalized() {
        let mut interval = Interval::from([5.0, 1.0]);
        assert_eq!(interval.start, 5.0);
        assert_eq!(interval.end, 1.0);

        interval.normalize();
        assert_eq!(interval.to_pair(), [1.0, 5.0]);
    }

    #[test]
    fn normalize_leaves_nan_pairs_alone() {
        let mut interval = Interval::from_raw([f64::NAN, 1.0]);
        interval.normalize();
        assert!(interval.start.is_nan());
        assert_eq!(interval.end, 1.0);
    }

    #[test]
    fn contains_is_inclusive() {
        let interval = Interval::new(1.0, 5.0);
        assert!(interval.contains(1.0));
        assert!(interval.contains(5.0));
        assert!(interval.contains(3.0));
        assert!(!interval.contains(0.999));
        assert!(!interval.contains(f64::NAN));
    }

    #[test]
    fn degenerate_interval_contains_its_point() {
        let point = Interval::new(3.0, 3.0);
        assert!(point.is_degenerate());
        assert!(point.contains(3.0));
        assert!(!point.contains(3.000001));
    }

    #[test]
    fn serializes_as_pair() {
        let json = serde_json::to_string(&Interval::from_raw([5.0, 1.0])).unwrap();
        assert_eq!(json, "[5.0,1.0]");
        let back: Interval = serde_json::from_str("[2, 7.5]").unwrap();
        assert_eq!(back, Interval::from_raw([2.0, 7.5]));
    }
}
