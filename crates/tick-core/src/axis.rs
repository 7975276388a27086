// File: crates/tick-core/src/axis.rs
// Summary: Axis-level types: tick level flag and locator/labeler pairing.

use crate::labeler::Labeler;
use crate::locator::Locator;

/// Which tick level of an axis is being generated.
///
/// Some locators densify their output for the minor level; the rest accept
/// the flag and ignore it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisKind {
    #[default]
    Major,
    Minor,
}

/// One locator paired with one labeler, the unit an axis holds per tick
/// level. Produces the (position, label) pairs a drawing backend consumes.
#[derive(Clone, Debug)]
pub struct Ticker {
    pub locator: Locator,
    pub labeler: Labeler,
}

impl Ticker {
    pub fn new(locator: Locator, labeler: Labeler) -> Self {
        Self { locator, labeler }
    }

    /// Locate ticks over `[start, end]` and label them in one pass.
    /// The labeler's length invariant guarantees the zip is lossless.
    pub fn ticks(&self, start: f64, end: f64, kind: AxisKind) -> Vec<(f64, String)> {
        let locs = self.locator.locations(start, end, kind);
        let texts = self.labeler.labels(&locs);
        locs.into_iter().zip(texts).collect()
    }
}

impl Default for Ticker {
    /// Five evenly spaced ticks labeled with their values.
    fn default() -> Self {
        Self::new(Locator::default(), Labeler::default())
    }
}
