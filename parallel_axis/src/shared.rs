//! Activation state shared between an interaction thread and render threads.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::{ActiveState, AxisActivation, Interval};

/// Single-writer, many-reader handle to an [`AxisActivation`].
///
/// Writers build the replacement state outside the lock and swap it in, so a
/// reader holding a [`Self::snapshot`] always sees one complete set for the
/// whole render pass. Clones share the same state.
#[derive(Clone, Debug, Default)]
pub struct SharedActivation {
    current: Arc<RwLock<Arc<AxisActivation>>>,
}

impl SharedActivation {
    pub fn new(activation: AxisActivation) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(activation))),
        }
    }

    /// The state as of now. Later writes do not affect the returned snapshot.
    pub fn snapshot(&self) -> Arc<AxisActivation> {
        Arc::clone(&self.current.read())
    }

    /// Replace the whole set. Last write wins.
    pub fn set_active_intervals<I>(&self, intervals: I)
    where
        I: IntoIterator,
        I::Item: Into<Interval>,
    {
        let next = Arc::new(AxisActivation::with_intervals(intervals));
        *self.current.write() = next;
    }

    /// Swap in a state that was prepared elsewhere, e.g. restored from persistence.
    pub fn replace(&self, activation: AxisActivation) -> Arc<AxisActivation> {
        std::mem::replace(&mut *self.current.write(), Arc::new(activation))
    }

    pub fn clear(&self) {
        self.replace(AxisActivation::new());
    }

    /// Classify against the current state. Prefer one [`Self::snapshot`] per
    /// render pass when classifying many values.
    pub fn active_state(&self, value: impl Into<Option<f64>>) -> ActiveState {
        self.snapshot().active_state(value)
    }
}

impl From<AxisActivation> for SharedActivation {
    fn from(activation: AxisActivation) -> Self {
        Self::new(activation)
    }
}
