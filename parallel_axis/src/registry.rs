//! Process-wide table of axis model constructors, keyed by type string.
//!
//! The table is built once, either with [`init`] (built-in entries only) or
//! with [`install`] (custom entries), and is read-only afterwards.

use std::collections::HashMap;

use once_cell::sync::OnceCell;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{AxisValueType, OptionsError, ParallelAxisModel, ParallelAxisOptions};

/// Builds an axis model from the user's (partial) options object.
pub type AxisModelFactory = fn(Value) -> Result<ParallelAxisModel, OptionsError>;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("axis model type {0:?} is registered twice")]
    Duplicate(String),

    #[error("axis model registry is already installed")]
    AlreadyInstalled,

    #[error("axis model registry is not installed, call `parallel_axis::init` first")]
    NotInstalled,

    #[error("unknown axis model type {0:?}")]
    UnknownType(String),

    #[error(transparent)]
    Options(#[from] OptionsError),
}

static GLOBAL: OnceCell<AxisModelRegistry> = OnceCell::new();

#[derive(Clone, Debug, Default)]
pub struct RegistryBuilder {
    factories: HashMap<String, AxisModelFactory>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        mut self,
        key: impl Into<String>,
        factory: AxisModelFactory,
    ) -> Result<Self, RegistryError> {
        let key = key.into();
        if self.factories.contains_key(&key) {
            return Err(RegistryError::Duplicate(key));
        }
        self.factories.insert(key, factory);
        Ok(self)
    }

    /// Add the entries [`init`] installs.
    pub fn with_builtin(self) -> Result<Self, RegistryError> {
        builtin_entries()
            .into_iter()
            .try_fold(self, |builder, (key, factory)| builder.register(key, factory))
    }

    pub fn build(self) -> AxisModelRegistry {
        AxisModelRegistry {
            factories: self.factories,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AxisModelRegistry {
    factories: HashMap<String, AxisModelFactory>,
}

impl AxisModelRegistry {
    fn builtin() -> Self {
        Self {
            factories: builtin_entries().into_iter().collect(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.factories.contains_key(key)
    }

    /// Registered type strings, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn create(&self, key: &str, options: Value) -> Result<ParallelAxisModel, RegistryError> {
        let factory = self
            .factories
            .get(key)
            .ok_or_else(|| RegistryError::UnknownType(key.to_owned()))?;
        let model = factory(options)?;
        tracing::debug!(key, axis_type = model.options().axis_type.as_str(), "created axis model");
        Ok(model)
    }
}

/// Install the built-in registry, or return the one already installed.
pub fn init() -> &'static AxisModelRegistry {
    GLOBAL.get_or_init(|| {
        let registry = AxisModelRegistry::builtin();
        tracing::debug!(entries = registry.factories.len(), "installed built-in axis models");
        registry
    })
}

/// Install a custom registry. Fails if one is already installed.
pub fn install(builder: RegistryBuilder) -> Result<&'static AxisModelRegistry, RegistryError> {
    let registry = builder.build();
    let entries = registry.factories.len();
    let installed = GLOBAL
        .try_insert(registry)
        .map_err(|_| RegistryError::AlreadyInstalled)?;
    tracing::debug!(entries, "installed axis model registry");
    Ok(installed)
}

pub fn global() -> Result<&'static AxisModelRegistry, RegistryError> {
    GLOBAL.get().ok_or(RegistryError::NotInstalled)
}

/// Create a model through the installed registry.
pub fn create(key: &str, options: Value) -> Result<ParallelAxisModel, RegistryError> {
    global()?.create(key, options)
}

fn builtin_entries() -> [(String, AxisModelFactory); 5] {
    [
        ("parallel".to_owned(), create_untyped),
        (typed_key(AxisValueType::Value), |v| create_typed(AxisValueType::Value, v)),
        (typed_key(AxisValueType::Category), |v| create_typed(AxisValueType::Category, v)),
        (typed_key(AxisValueType::Time), |v| create_typed(AxisValueType::Time, v)),
        (typed_key(AxisValueType::Log), |v| create_typed(AxisValueType::Log, v)),
    ]
}

fn typed_key(axis_type: AxisValueType) -> String {
    format!("{}.{}", ParallelAxisModel::MAIN_TYPE, axis_type.as_str())
}

fn create_untyped(options: Value) -> Result<ParallelAxisModel, OptionsError> {
    ParallelAxisOptions::from_value(object_or_empty(options)).map(ParallelAxisModel::from_options)
}

fn create_typed(axis_type: AxisValueType, options: Value) -> Result<ParallelAxisModel, OptionsError> {
    let mut options = object_or_empty(options);
    if let Value::Object(map) = &mut options {
        map.entry("type")
            .or_insert_with(|| Value::from(axis_type.as_str()));
    }
    create_untyped(options)
}

fn object_or_empty(options: Value) -> Value {
    if options.is_null() {
        Value::Object(Map::new())
    } else {
        options
    }
}
