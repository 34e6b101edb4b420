use std::{
    marker::PhantomData,
    sync::{Arc, PoisonError, RwLock},
};

use serde_json::Value;

use crate::report::OverlayReport;

/// A named, closed set of configurable values with compile-time defaults.
pub trait ConfigDomain {
    /// Name of the domain, used in diagnostics.
    const NAME: &'static str;

    /// Fully resolved configuration handed out to readers.
    type Resolved: Send + Sync + 'static;

    /// Strongly typed partial override where every field is optional.
    type Override;

    /// Builds the configuration holding only default values.
    fn defaults() -> Self::Resolved;

    /// Applies an untrusted override document onto `resolved`.
    ///
    /// Entries with an unexpected shape are skipped and recorded in `report`;
    /// this never fails.
    fn apply_value(resolved: &mut Self::Resolved, overrides: &Value, report: &mut OverlayReport);

    /// Applies a typed partial override onto `resolved`.
    fn apply_override(resolved: &mut Self::Resolved, overrides: &Self::Override);
}

/// Registry owning the resolved configuration of one [`ConfigDomain`].
///
/// The registry starts uninitialized. Every call to one of the `initialize*`
/// methods rebuilds the configuration from defaults, applies the supplied
/// override and swaps the result in with a single write, so readers only
/// ever see complete snapshots.
pub struct ConfigOverlay<D: ConfigDomain> {
    resolved: RwLock<Option<Arc<D::Resolved>>>,
    domain: PhantomData<fn() -> D>,
}

impl<D: ConfigDomain> ConfigOverlay<D> {
    /// Creates an uninitialized registry.
    pub const fn new() -> Self {
        Self {
            resolved: RwLock::new(None),
            domain: PhantomData,
        }
    }

    /// Resets the configuration to defaults and applies `overrides`.
    ///
    /// Invalid entries are discarded silently; use
    /// [`ConfigOverlay::initialize_with_report`] to find out which.
    pub fn initialize(&self, overrides: Option<&Value>) {
        let _ = self.initialize_with_report(overrides);
    }

    /// Same as [`ConfigOverlay::initialize`], returning the discarded entries.
    pub fn initialize_with_report(&self, overrides: Option<&Value>) -> OverlayReport {
        let mut report = OverlayReport::new(D::NAME);
        let mut resolved = D::defaults();
        if let Some(overrides) = overrides {
            D::apply_value(&mut resolved, overrides, &mut report);
        }
        self.store(resolved);
        report
    }

    /// Resets the configuration to defaults and applies a typed override.
    pub fn initialize_typed(&self, overrides: Option<&D::Override>) {
        let mut resolved = D::defaults();
        if let Some(overrides) = overrides {
            D::apply_override(&mut resolved, overrides);
        }
        self.store(resolved);
    }

    /// Returns the resolved configuration, or `None` before initialization.
    pub fn get_configuration(&self) -> Option<Arc<D::Resolved>> {
        self.resolved
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_initialized(&self) -> bool {
        self.resolved
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn store(&self, resolved: D::Resolved) {
        let snapshot = Arc::new(resolved);
        // The slot only ever holds complete snapshots, so a poisoned lock is safe to reuse.
        *self
            .resolved
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(snapshot);
    }
}

impl<D: ConfigDomain> Default for ConfigOverlay<D> {
    fn default() -> Self {
        Self::new()
    }
}
