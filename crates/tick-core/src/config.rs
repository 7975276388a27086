// File: crates/tick-core/src/config.rs
// Summary: Bulk configuration protocol shared by locators and labelers.

use crate::labeler::NumberFormat;
use thiserror::Error;

/// Rejection reason returned by the direct setters.
///
/// The bulk [`TickOptions`] path drops these for parity with interactive
/// reconfiguration, where a bad value must not derail a drawing pass; call
/// the setter directly when the status matters.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("tick count must be at least 2 (got {0})")]
    CountTooSmall(usize),
    #[error("spacing base must be finite and positive (got {0})")]
    BadSpacing(f64),
    #[error("log base must be finite, positive and not 1 (got {0})")]
    BadLogBase(f64),
    #[error("anchor must be finite (got {0})")]
    BadAnchor(f64),
}

/// Tri-state field update.
///
/// A plain `Option` cannot distinguish "leave this setting alone" from
/// "clear it"; fields where both are meaningful (anchor, tick limit,
/// format) use this instead.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Update<T> {
    /// Field not supplied; keep the current value.
    #[default]
    Keep,
    /// Explicitly clear the setting.
    Clear,
    /// Set a new value.
    Set(T),
}

impl<T> Update<T> {
    /// Collapse into the `Option` the target field stores, given its
    /// current value. `Keep` returns `current` unchanged.
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Update::Keep => current,
            Update::Clear => None,
            Update::Set(v) => Some(v),
        }
    }
}

/// One generic options bag applicable to any locator or labeler variant.
///
/// Each variant's `configure` reads only the fields it recognizes and
/// ignores the rest, so a caller can build a single `TickOptions` and apply
/// it across heterogeneous variants without inspecting their types first.
/// Absent fields (`None` / `Update::Keep`) never change anything.
///
/// Both the spacing base of [`SpacedLocator`](crate::SpacedLocator) and the
/// logarithm base of [`LogLocator`](crate::LogLocator) read from `base`,
/// mirroring the single keyword they historically shared.
#[derive(Clone, Debug, Default)]
pub struct TickOptions {
    /// Linear: number of major ticks.
    pub count: Option<usize>,
    /// Fixed: explicit tick positions, order preserved as given.
    pub positions: Option<Vec<f64>>,
    /// Fixed: subsampling limit; `Clear` removes the limit.
    pub tick_limit: Update<usize>,
    /// Spaced / Log: step spacing or logarithm base.
    pub base: Option<f64>,
    /// Spaced: anchor position; `Clear` reverts to edge-anchored stepping.
    pub anchor: Update<f64>,
    /// Log: within-decade multipliers.
    pub subdivisions: Option<Vec<f64>>,
    /// String labeler: explicit label list.
    pub labels: Option<Vec<String>>,
    /// Format labeler: number format; `Clear` reverts to default rendering.
    pub format: Update<NumberFormat>,
}
