//! Recognized options of a parallel axis and their defaults.
//!
//! Every field has a default, so a partial JSON object merges over the
//! defaults field by field. Unknown fields are rejected so that typos in
//! chart options surface as errors instead of silently falling back.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::{AreaSelectStyleOptions, Color};

#[derive(Debug, Error)]
pub enum OptionsError {
    /// Malformed JSON, or a field of the wrong type. `path` points at the field.
    #[error("invalid axis options at {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("option {field} = {value} is out of range, expected {expected}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        expected: &'static str,
    },
}

/// Value type of the axis. Only consumed by the scale machinery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisValueType {
    #[default]
    Value,
    Category,
    Time,
    Log,
}

impl AxisValueType {
    pub const ALL: [Self; 4] = [Self::Value, Self::Category, Self::Time, Self::Log];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Category => "category",
            Self::Time => "time",
            Self::Log => "log",
        }
    }
}

/// Options of one parallel axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ParallelAxisOptions {
    #[serde(rename = "type")]
    pub axis_type: AxisValueType,

    /// Data dimension shown on this axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dim: Option<usize>,

    /// Index of the parallel coordinate system the axis belongs to.
    pub parallel_index: usize,

    pub area_select_style: AreaSelectStyleOptions,

    /// Whether views update while the user is still brushing.
    /// Not interpreted here; passed through to whoever drives re-rendering.
    pub realtime: bool,

    /// Render order hint.
    pub z: i32,
}

impl Default for ParallelAxisOptions {
    fn default() -> Self {
        Self {
            axis_type: AxisValueType::Value,
            dim: None,
            parallel_index: 0,
            area_select_style: AreaSelectStyleOptions::default(),
            realtime: true,
            z: 10,
        }
    }
}

impl ParallelAxisOptions {
    pub fn from_json(text: &str) -> Result<Self, OptionsError> {
        let options: Self = from_json_text(text)?;
        options.validate()?;
        Ok(options)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, OptionsError> {
        let options: Self = with_path(serde_path_to_error::deserialize(value))?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        let style = &self.area_select_style;
        non_negative("areaSelectStyle.width", style.width)?;
        non_negative("areaSelectStyle.borderWidth", style.border_width)?;
        if !(0.0..=1.0).contains(&style.opacity) {
            return Err(OptionsError::OutOfRange {
                field: "areaSelectStyle.opacity",
                value: style.opacity,
                expected: "a number in 0..=1",
            });
        }
        Ok(())
    }

    /// Apply an update on top of these options. The result is validated; on
    /// error nothing is returned and `self` is unchanged.
    pub fn merge(&self, patch: &ParallelAxisOptionsPatch) -> Result<Self, OptionsError> {
        let mut merged = self.clone();
        if let Some(axis_type) = patch.axis_type {
            merged.axis_type = axis_type;
        }
        if let Some(dim) = patch.dim {
            merged.dim = Some(dim);
        }
        if let Some(parallel_index) = patch.parallel_index {
            merged.parallel_index = parallel_index;
        }
        if let Some(style) = &patch.area_select_style {
            style.apply_to(&mut merged.area_select_style);
        }
        if let Some(realtime) = patch.realtime {
            merged.realtime = realtime;
        }
        if let Some(z) = patch.z {
            merged.z = z;
        }
        merged.validate()?;
        Ok(merged)
    }
}

/// A partial update of [`ParallelAxisOptions`]; absent fields keep their current value.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ParallelAxisOptionsPatch {
    #[serde(rename = "type")]
    pub axis_type: Option<AxisValueType>,
    pub dim: Option<usize>,
    pub parallel_index: Option<usize>,
    pub area_select_style: Option<AreaSelectStylePatch>,
    pub realtime: Option<bool>,
    pub z: Option<i32>,
}

impl ParallelAxisOptionsPatch {
    pub fn from_json(text: &str) -> Result<Self, OptionsError> {
        from_json_text(text)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct AreaSelectStylePatch {
    pub width: Option<f32>,
    pub border_width: Option<f32>,
    pub border_color: Option<Color>,
    pub color: Option<Color>,
    pub opacity: Option<f32>,
}

impl AreaSelectStylePatch {
    fn apply_to(&self, style: &mut AreaSelectStyleOptions) {
        if let Some(width) = self.width {
            style.width = width;
        }
        if let Some(border_width) = self.border_width {
            style.border_width = border_width;
        }
        if let Some(border_color) = &self.border_color {
            style.border_color = border_color.clone();
        }
        if let Some(color) = &self.color {
            style.color = color.clone();
        }
        if let Some(opacity) = self.opacity {
            style.opacity = opacity;
        }
    }
}

/// Deserialize one JSON document; trailing text after it is an error.
fn from_json_text<T: DeserializeOwned>(text: &str) -> Result<T, OptionsError> {
    let de = &mut serde_json::Deserializer::from_str(text);
    let value = with_path(serde_path_to_error::deserialize(&mut *de))?;
    de.end().map_err(|source| OptionsError::Parse {
        path: ".".to_owned(),
        source,
    })?;
    Ok(value)
}

fn with_path<T: DeserializeOwned>(
    result: Result<T, serde_path_to_error::Error<serde_json::Error>>,
) -> Result<T, OptionsError> {
    result.map_err(|err| OptionsError::Parse {
        path: err.path().to_string(),
        source: err.into_inner(),
    })
}

fn non_negative(field: &'static str, value: f32) -> Result<(), OptionsError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(OptionsError::OutOfRange {
            field,
            value,
            expected: "a finite number >= 0",
        })
    }
}
