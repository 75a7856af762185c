//! Brush state for the axes of a parallel-coordinates chart.
//!
//! Each axis model owns an [`AxisActivation`]: the set of intervals the user
//! brushed on that axis. The interaction layer replaces the set with
//! [`ParallelAxisModel::set_active_intervals`]; the renderer asks
//! [`ParallelAxisModel::active_state`] for every data value during a redraw
//! and styles the brush overlay with [`ParallelAxisModel::area_select_style`].
//!
//! ```
//! use parallel_axis::{ActiveState, ParallelAxisModel, ParallelAxisOptions};
//!
//! let mut axis = ParallelAxisModel::from_options(ParallelAxisOptions::default());
//! assert_eq!(axis.active_state(3.0), ActiveState::Normal);
//!
//! axis.set_active_intervals([[5.0, 1.0]]);
//! assert_eq!(axis.active_state(3.0), ActiveState::Active);
//! assert_eq!(axis.active_state(0.0), ActiveState::Inactive);
//! ```

mod activation;
mod color;
mod interval;
mod model;
mod options;
pub mod registry;
mod shared;
mod style;

pub use crate::{
    activation::{ActiveIntervals, ActiveState, AxisActivation, NumericValue},
    color::{Color, ColorParseError, parse_css_color},
    interval::Interval,
    model::{AxisCommon, ParallelAxisModel},
    options::{
        AreaSelectStylePatch, AxisValueType, OptionsError, ParallelAxisOptions,
        ParallelAxisOptionsPatch,
    },
    registry::{AxisModelRegistry, RegistryBuilder, RegistryError, init},
    shared::SharedActivation,
    style::{
        AREA_SELECT_STYLE_MAPPING, AreaSelectStyle, AreaSelectStyleOptions, map_style_attributes,
    },
};
