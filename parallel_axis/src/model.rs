//! The model object behind one parallel axis.

use crate::{
    ActiveIntervals, ActiveState, AreaSelectStyle, AreaSelectStyleOptions, AxisActivation,
    AxisValueType, Interval, NumericValue, OptionsError, ParallelAxisOptions,
    ParallelAxisOptionsPatch,
};

/// Behavior every axis model shares, independent of the axis kind.
pub trait AxisCommon {
    fn options(&self) -> &ParallelAxisOptions;

    fn axis_type(&self) -> AxisValueType {
        self.options().axis_type
    }

    fn area_select_options(&self) -> &AreaSelectStyleOptions {
        &self.options().area_select_style
    }

    fn realtime(&self) -> bool {
        self.options().realtime
    }

    fn z(&self) -> i32 {
        self.options().z
    }
}

impl AxisCommon for ParallelAxisOptions {
    #[inline]
    fn options(&self) -> &ParallelAxisOptions {
        self
    }
}

/// Model of one axis in a parallel coordinate system.
///
/// The brush state lives here and not on the laid-out axis: the model
/// survives chart option updates while views and layout are rebuilt, and the
/// selection must survive with it.
#[derive(Clone, Debug, Default)]
pub struct ParallelAxisModel<C = ParallelAxisOptions> {
    common: C,
    activation: AxisActivation,
}

impl ParallelAxisModel {
    pub const TYPE: &'static str = "baseParallelAxis";
    pub const MAIN_TYPE: &'static str = "parallelAxis";

    pub fn from_options(options: ParallelAxisOptions) -> Self {
        Self::new(options)
    }

    /// Merge an option update. The brush state is kept as is.
    ///
    /// A rejected update leaves the current options in place.
    pub fn update_options(&mut self, patch: &ParallelAxisOptionsPatch) -> Result<(), OptionsError> {
        match self.common.merge(patch) {
            Ok(merged) => {
                self.common = merged;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "rejected parallel axis option update");
                Err(err)
            }
        }
    }
}

impl<C: AxisCommon> ParallelAxisModel<C> {
    pub fn new(common: C) -> Self {
        Self {
            common,
            activation: AxisActivation::new(),
        }
    }

    #[inline]
    pub fn common(&self) -> &C {
        &self.common
    }

    #[inline]
    pub fn options(&self) -> &ParallelAxisOptions {
        self.common.options()
    }

    #[inline]
    pub fn activation(&self) -> &AxisActivation {
        &self.activation
    }

    /// The current brush, e.g. to carry it over into a rebuilt chart.
    #[inline]
    pub fn active_intervals(&self) -> &ActiveIntervals {
        self.activation.active_intervals()
    }

    /// Replace the brush. An empty input clears it.
    pub fn set_active_intervals<I>(&mut self, intervals: I)
    where
        I: IntoIterator,
        I::Item: Into<Interval>,
    {
        self.activation.set_active_intervals(intervals);
    }

    /// `value` may be left out when only asking whether a brush exists.
    pub fn active_state(&self, value: impl Into<Option<f64>>) -> ActiveState {
        self.activation.active_state(value)
    }

    pub fn active_state_of<V: NumericValue + ?Sized>(&self, value: &V) -> ActiveState {
        self.activation.active_state_of(value)
    }

    pub fn area_select_style(&self) -> AreaSelectStyle {
        AreaSelectStyle::from_options(self.common.area_select_options())
    }
}
