//! Brush state of one axis and classification of data values against it.
//!
//! An axis holds an ordered set of active intervals. While that set is empty
//! the axis is in "normal" mode and every value is [`ActiveState::Normal`].
//! Once the set is non-empty, every value is either [`ActiveState::Active`]
//! (inside at least one interval, bounds inclusive) or
//! [`ActiveState::Inactive`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Interval;

/// Highlight state of a data value relative to the brush on its axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveState {
    /// No interval is active on the axis.
    Normal,

    /// The value lies within at least one active interval.
    Active,

    /// Intervals are active but the value is outside all of them, or is not a number.
    Inactive,
}

impl ActiveState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for ActiveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered OR-combination of intervals. Serializes as `[[lo, hi], ...]`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveIntervals(Vec<Interval>);

impl ActiveIntervals {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Interval] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Interval> + '_ {
        self.0.iter()
    }

    /// Endpoint pairs in stored order.
    pub fn to_pairs(&self) -> Vec<[f64; 2]> {
        self.0.iter().map(|interval| interval.to_pair()).collect()
    }
}

impl<'a> IntoIterator for &'a ActiveIntervals {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The activation state owned by one parallel axis.
///
/// Starts empty, so every value is [`ActiveState::Normal`] until the first
/// [`Self::set_active_intervals`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisActivation {
    intervals: ActiveIntervals,
}

impl AxisActivation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state with the given intervals already applied.
    pub fn with_intervals<I>(intervals: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Interval>,
    {
        let mut activation = Self::new();
        activation.set_active_intervals(intervals);
        activation
    }

    /// The current set, for persisting the selection across option updates.
    #[inline]
    pub fn active_intervals(&self) -> &ActiveIntervals {
        &self.intervals
    }

    /// `true` while at least one interval is active.
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.intervals.is_empty()
    }

    /// Replace the whole set.
    ///
    /// Every interval is copied out of `intervals` and normalized so that
    /// `start <= end`. An empty input clears the selection (every value
    /// becomes [`ActiveState::Normal`]), it does not reject everything.
    pub fn set_active_intervals<I>(&mut self, intervals: I)
    where
        I: IntoIterator,
        I::Item: Into<Interval>,
    {
        let mut copied: Vec<Interval> = intervals.into_iter().map(Into::into).collect();
        for interval in copied.iter_mut().rev() {
            interval.normalize();
        }

        tracing::trace!(
            count = copied.len(),
            cleared = copied.is_empty(),
            "replaced active intervals"
        );
        self.intervals = ActiveIntervals(copied);
    }

    /// Drop the selection.
    pub fn clear(&mut self) {
        self.set_active_intervals(std::iter::empty::<Interval>());
    }

    /// Classify `value` against the active set.
    ///
    /// `None` and NaN are [`ActiveState::Inactive`] whenever a selection exists.
    /// ±∞ is classified numerically like any other value, so `[0, +∞]`
    /// contains `+∞`. With no selection the value is not inspected at all.
    pub fn active_state(&self, value: impl Into<Option<f64>>) -> ActiveState {
        let value = match self.checked_value(value.into()) {
            Ok(value) => value,
            Err(state) => return state,
        };

        let intervals = self.intervals.as_slice();
        // Single brush is by far the common case.
        let hit = if let [only] = intervals {
            only.contains(value)
        } else {
            intervals.iter().any(|interval| interval.contains(value))
        };

        if hit {
            ActiveState::Active
        } else {
            ActiveState::Inactive
        }
    }

    /// Same result as [`Self::active_state`], always scanning every interval.
    pub fn scan_active_state(&self, value: impl Into<Option<f64>>) -> ActiveState {
        let value = match self.checked_value(value.into()) {
            Ok(value) => value,
            Err(state) => return state,
        };

        for interval in &self.intervals {
            if interval.start <= value && value <= interval.end {
                return ActiveState::Active;
            }
        }
        ActiveState::Inactive
    }

    /// Classify a raw data value, coercing it to a number first.
    pub fn active_state_of<V: NumericValue + ?Sized>(&self, value: &V) -> ActiveState {
        self.active_state(value.to_numeric())
    }

    fn checked_value(&self, value: Option<f64>) -> Result<f64, ActiveState> {
        if self.intervals.is_empty() {
            return Err(ActiveState::Normal);
        }
        match value {
            Some(value) if !value.is_nan() => Ok(value),
            _ => Err(ActiveState::Inactive),
        }
    }
}

/// Coercion of a raw data value to a number for classification.
///
/// `None` means "no value". Text that does not parse becomes NaN.
pub trait NumericValue {
    fn to_numeric(&self) -> Option<f64>;
}

macro_rules! impl_numeric_value {
    ($($t:ty),*) => {
        $(
            impl NumericValue for $t {
                #[inline]
                fn to_numeric(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_numeric_value!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl NumericValue for str {
    fn to_numeric(&self) -> Option<f64> {
        Some(self.trim().parse::<f64>().unwrap_or(f64::NAN))
    }
}

impl NumericValue for String {
    fn to_numeric(&self) -> Option<f64> {
        self.as_str().to_numeric()
    }
}

impl<T: NumericValue> NumericValue for Option<T> {
    fn to_numeric(&self) -> Option<f64> {
        self.as_ref().and_then(NumericValue::to_numeric)
    }
}

impl<T: NumericValue + ?Sized> NumericValue for &T {
    fn to_numeric(&self) -> Option<f64> {
        (**self).to_numeric()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_normal_mode() {
        let activation = AxisActivation::new();
        assert!(!activation.is_active());
        assert_eq!(activation.active_state(3.0), ActiveState::Normal);
        assert_eq!(activation.active_state(None), ActiveState::Normal);
    }

    #[test]
    fn empty_set_is_normal_for_every_value() {
        let mut activation = AxisActivation::with_intervals([[0.0, 1.0]]);
        activation.set_active_intervals(Vec::<[f64; 2]>::new());

        for v in [f64::NEG_INFINITY, -1.0, 0.0, 0.5, 1e300, f64::NAN] {
            assert_eq!(activation.active_state(v), ActiveState::Normal);
        }
        assert_eq!(activation.active_state(None), ActiveState::Normal);
    }

    #[test]
    fn reversed_interval_is_normalized() {
        let mut activation = AxisActivation::new();
        activation.set_active_intervals([[5.0, 1.0]]);

        assert_eq!(activation.active_intervals().to_pairs(), vec![[1.0, 5.0]]);
        assert_eq!(activation.active_state(3.0), ActiveState::Active);
        assert_eq!(activation.active_state(0.0), ActiveState::Inactive);
        assert_eq!(activation.active_state(1.0), ActiveState::Active);
        assert_eq!(activation.active_state(5.0), ActiveState::Active);
    }

    #[test]
    fn stored_set_does_not_alias_input() {
        let mut input = vec![[1.0, 2.0], [4.0, 3.0]];
        let mut activation = AxisActivation::new();
        activation.set_active_intervals(&input);

        input[0][0] = 100.0;
        input.clear();

        assert_eq!(
            activation.active_intervals().to_pairs(),
            vec![[1.0, 2.0], [3.0, 4.0]]
        );
    }

    #[test]
    fn missing_or_nan_value_is_inactive_under_selection() {
        let activation = AxisActivation::with_intervals([[0.0, 10.0]]);
        assert_eq!(activation.active_state(None), ActiveState::Inactive);
        assert_eq!(activation.active_state(f64::NAN), ActiveState::Inactive);

        let activation = AxisActivation::with_intervals([[0.0, 1.0], [2.0, 3.0]]);
        assert_eq!(activation.active_state(None), ActiveState::Inactive);
        assert_eq!(activation.active_state(f64::NAN), ActiveState::Inactive);
    }

    #[test]
    fn any_interval_activates() {
        let activation = AxisActivation::with_intervals([[0.0, 1.0], [5.0, 6.0]]);
        assert_eq!(activation.active_state(0.5), ActiveState::Active);
        assert_eq!(activation.active_state(3.0), ActiveState::Inactive);
        assert_eq!(activation.active_state(6.0), ActiveState::Active);
    }

    #[test]
    fn order_is_preserved() {
        let activation = AxisActivation::with_intervals([[9.0, 7.0], [0.0, 1.0], [4.0, 4.0]]);
        assert_eq!(
            activation.active_intervals().to_pairs(),
            vec![[7.0, 9.0], [0.0, 1.0], [4.0, 4.0]]
        );
        assert_eq!(activation.active_state(4.0), ActiveState::Active);
    }

    #[test]
    fn replacement_is_wholesale() {
        let mut activation = AxisActivation::with_intervals([[0.0, 1.0]]);
        activation.set_active_intervals([(10.0, 20.0)]);
        assert_eq!(activation.active_state(0.5), ActiveState::Inactive);
        assert_eq!(activation.active_state(15.0), ActiveState::Active);

        activation.clear();
        assert_eq!(activation.active_state(0.5), ActiveState::Normal);
    }

    #[test]
    fn nan_endpoint_never_matches() {
        let activation = AxisActivation::with_intervals([[f64::NAN, 1.0]]);
        assert_eq!(activation.active_state(0.0), ActiveState::Inactive);
        assert_eq!(activation.active_state(1.0), ActiveState::Inactive);
    }

    #[test]
    fn infinite_bounds_compare_numerically() {
        let activation = AxisActivation::with_intervals([[f64::INFINITY, 0.0]]);
        assert_eq!(activation.active_intervals().to_pairs(), vec![[0.0, f64::INFINITY]]);
        assert_eq!(activation.active_state(f64::INFINITY), ActiveState::Active);
        assert_eq!(activation.active_state(-1.0), ActiveState::Inactive);
        assert_eq!(activation.active_state(f64::NEG_INFINITY), ActiveState::Inactive);

        let everything = AxisActivation::with_intervals([[f64::NEG_INFINITY, f64::INFINITY]]);
        assert_eq!(everything.active_state(f64::NEG_INFINITY), ActiveState::Active);
        assert_eq!(everything.active_state(f64::INFINITY), ActiveState::Active);
        assert_eq!(everything.active_state(f64::NAN), ActiveState::Inactive);
    }

    #[test]
    fn raw_values_are_coerced() {
        let activation = AxisActivation::with_intervals([[1.0, 5.0]]);
        assert_eq!(activation.active_state_of(&3_i32), ActiveState::Active);
        assert_eq!(activation.active_state_of(" 4.5 "), ActiveState::Active);
        assert_eq!(activation.active_state_of("seven"), ActiveState::Inactive);
        assert_eq!(activation.active_state_of(&None::<f64>), ActiveState::Inactive);
        assert_eq!(activation.active_state_of(&Some(2_u8)), ActiveState::Active);
    }

    #[test]
    fn state_names() {
        assert_eq!(ActiveState::Normal.to_string(), "normal");
        assert_eq!(
            serde_json::to_string(&ActiveState::Inactive).unwrap(),
            "\"inactive\""
        );
        let back: ActiveState = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(back, ActiveState::Active);
    }

    #[test]
    fn intervals_round_trip_in_order() {
        let activation = AxisActivation::with_intervals([[3.0, 2.0], [0.0, 1.0]]);
        let json = serde_json::to_string(activation.active_intervals()).unwrap();
        assert_eq!(json, "[[2.0,3.0],[0.0,1.0]]");

        let restored: ActiveIntervals = serde_json::from_str(&json).unwrap();
        let mut again = AxisActivation::new();
        again.set_active_intervals(&restored);
        assert_eq!(again, activation);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn value() -> impl Strategy<Value = f64> {
            prop_oneof![
                8 => -1e6..1e6_f64,
                1 => Just(f64::NAN),
                1 => Just(f64::INFINITY),
                1 => Just(f64::NEG_INFINITY),
            ]
        }

        proptest! {
            #[test]
            fn single_interval_fast_path_matches_scan(a in value(), b in value(), v in value()) {
                let activation = AxisActivation::with_intervals([[a, b]]);
                prop_assert_eq!(activation.active_state(v), activation.scan_active_state(v));
            }

            #[test]
            fn fast_path_matches_scan_with_endpoint_hits(a in -100.0..100.0_f64, b in -100.0..100.0_f64, pick in 0usize..3) {
                let activation = AxisActivation::with_intervals([[a, b]]);
                let v = [a, b, (a + b) / 2.0][pick];
                prop_assert_eq!(activation.active_state(v), ActiveState::Active);
                prop_assert_eq!(activation.scan_active_state(v), ActiveState::Active);
            }

            #[test]
            fn any_set_matches_scan(
                pairs in prop::collection::vec((value(), value()), 0..6),
                v in prop::option::of(value()),
            ) {
                let activation = AxisActivation::with_intervals(pairs);
                prop_assert_eq!(activation.active_state(v), activation.scan_active_state(v));
            }

            #[test]
            fn stored_intervals_are_ascending(pairs in prop::collection::vec((-1e6..1e6_f64, -1e6..1e6_f64), 0..8)) {
                let activation = AxisActivation::with_intervals(pairs.clone());
                prop_assert_eq!(activation.active_intervals().len(), pairs.len());
                for (stored, (a, b)) in activation.active_intervals().iter().zip(pairs) {
                    prop_assert!(stored.start <= stored.end);
                    prop_assert_eq!(stored.start, a.min(b));
                    prop_assert_eq!(stored.end, a.max(b));
                }
            }
        }
    }
}
