// File: crates/tick-core/src/locator.rs
// Summary: Tick locators: choose axis tick positions for a data range.

use crate::axis::AxisKind;
use crate::config::{ConfigError, TickOptions, Update};

/// The closed set of tick locators.
///
/// `locations` is a pure function of the current configuration and its
/// arguments; calling it repeatedly (or from several readers at once) with
/// the same inputs yields the same output.
#[derive(Clone, Debug, PartialEq)]
pub enum Locator {
    /// No ticks at all; suppresses a tick level entirely.
    Null,
    Linear(LinearLocator),
    Fixed(FixedLocator),
    Spaced(SpacedLocator),
    Log(LogLocator),
}

impl Locator {
    /// Tick positions for the data range `[start, end]`.
    pub fn locations(&self, start: f64, end: f64, kind: AxisKind) -> Vec<f64> {
        match self {
            Locator::Null => Vec::new(),
            Locator::Linear(l) => l.locations(start, end, kind),
            Locator::Fixed(l) => l.locations(start, end, kind),
            Locator::Spaced(l) => l.locations(start, end, kind),
            Locator::Log(l) => l.locations(start, end, kind),
        }
    }

    /// Apply the fields of `opts` this variant recognizes; everything else
    /// is ignored, and rejected values leave the previous setting in place.
    pub fn configure(&mut self, opts: &TickOptions) {
        match self {
            Locator::Null => {}
            Locator::Linear(l) => {
                if let Some(count) = opts.count {
                    let _ = l.set_count(count);
                }
            }
            Locator::Fixed(l) => {
                if let Some(positions) = &opts.positions {
                    l.set_positions(positions.clone());
                }
                match opts.tick_limit {
                    Update::Keep => {}
                    Update::Clear => l.set_tick_limit(None),
                    Update::Set(n) => l.set_tick_limit(Some(n)),
                }
            }
            Locator::Spaced(l) => {
                if let Some(base) = opts.base {
                    let _ = l.set_base(base);
                }
                match opts.anchor {
                    Update::Keep => {}
                    Update::Clear => {
                        let _ = l.set_anchor(None);
                    }
                    Update::Set(a) => {
                        let _ = l.set_anchor(Some(a));
                    }
                }
            }
            Locator::Log(l) => {
                if let Some(base) = opts.base {
                    let _ = l.set_base(base);
                }
                if let Some(subs) = &opts.subdivisions {
                    l.set_subdivisions(subs.clone());
                }
            }
        }
    }
}

impl Default for Locator {
    fn default() -> Self {
        Locator::Linear(LinearLocator::default())
    }
}

/// Evenly spaces a fixed number of ticks over the data range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinearLocator {
    count: usize,
}

impl LinearLocator {
    /// A locator with `count` major ticks. Invalid counts fall back to the
    /// default of 5.
    pub fn new(count: usize) -> Self {
        let mut l = Self::default();
        let _ = l.set_count(count);
        l
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Set the number of major ticks. Counts below 2 are rejected (the
    /// spacing formula divides by `count - 1`) and the previous value is
    /// kept.
    pub fn set_count(&mut self, count: usize) -> Result<(), ConfigError> {
        if count < 2 {
            return Err(ConfigError::CountTooSmall(count));
        }
        self.count = count;
        Ok(())
    }

    /// `count` evenly spaced positions from `start` to `end` inclusive
    /// (`count + 2` for the minor level).
    ///
    /// The final position is the literal `end`, not the accumulated
    /// `start + (n-1)*delta`: accumulation can round past `end` and drop
    /// the last tick.
    pub fn locations(&self, start: f64, end: f64, kind: AxisKind) -> Vec<f64> {
        let n = match kind {
            AxisKind::Major => self.count,
            AxisKind::Minor => self.count + 2,
        };

        let delta = (end - start) / (n - 1) as f64;

        let mut locs = Vec::with_capacity(n);
        let mut loc = start;
        for _ in 0..n - 1 {
            locs.push(loc);
            loc += delta;
        }
        locs.push(end);

        locs
    }
}

impl Default for LinearLocator {
    fn default() -> Self {
        Self { count: 5 }
    }
}

/// Ticks at explicit, caller-supplied positions.
///
/// Positions are kept in the order given; they are not sorted. They may be
/// any cloneable value — the [`Locator`] enum uses `f64`, but a standalone
/// `FixedLocator<String>` (say, category names) works the same way.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedLocator<T = f64> {
    positions: Vec<T>,
    tick_limit: Option<usize>,
}

impl<T: Clone> FixedLocator<T> {
    pub fn new(positions: Vec<T>, tick_limit: Option<usize>) -> Self {
        let mut l = Self { positions: Vec::new(), tick_limit: None };
        l.set_positions(positions);
        l.set_tick_limit(tick_limit);
        l
    }

    pub fn positions(&self) -> &[T] {
        &self.positions
    }

    pub fn tick_limit(&self) -> Option<usize> {
        self.tick_limit
    }

    pub fn set_positions(&mut self, positions: Vec<T>) {
        self.positions = positions;
    }

    /// Set the subsampling limit. `None` disables subsampling; limits below
    /// 2 are clamped to 2 so the two endpoints always survive.
    pub fn set_tick_limit(&mut self, tick_limit: Option<usize>) {
        self.tick_limit = tick_limit.map(|n| n.max(2));
    }

    /// The configured positions, subsampled down to `tick_limit` entries
    /// when a limit is set. The data range is disregarded.
    ///
    /// Subsampling always keeps the first and last position and picks the
    /// interior at evenly rounded indices; any index the rounding repeats
    /// is emitted as-is, not deduplicated.
    pub fn locations(&self, _start: f64, _end: f64, _kind: AxisKind) -> Vec<T> {
        let len = self.positions.len();
        let limit = match self.tick_limit {
            Some(limit) if limit < len => limit,
            _ => return self.positions.clone(),
        };

        let n = limit - 1;
        let stride = (len - 1) as f64 / n as f64;

        let mut locs = Vec::with_capacity(limit);
        for i in 0..n {
            let idx = (i as f64 * stride).round() as usize;
            locs.push(self.positions[idx].clone());
        }
        locs.push(self.positions[len - 1].clone());

        locs
    }
}

impl<T> Default for FixedLocator<T> {
    fn default() -> Self {
        Self { positions: Vec::new(), tick_limit: None }
    }
}

/// Ticks every `base` data units, optionally anchored at a fixed position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpacedLocator {
    base: f64,
    anchor: Option<f64>,
}

impl SpacedLocator {
    /// A locator stepping by `base`, anchored at `anchor` when given.
    /// Invalid values fall back to the defaults (base 1.0, no anchor).
    pub fn new(base: f64, anchor: Option<f64>) -> Self {
        let mut l = Self::default();
        let _ = l.set_base(base);
        let _ = l.set_anchor(anchor);
        l
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn anchor(&self) -> Option<f64> {
        self.anchor
    }

    /// Set the tick spacing. Must be finite and positive; anything else is
    /// rejected and the previous spacing kept.
    pub fn set_base(&mut self, base: f64) -> Result<(), ConfigError> {
        if !base.is_finite() || base <= 0.0 {
            return Err(ConfigError::BadSpacing(base));
        }
        self.base = base;
        Ok(())
    }

    /// Set or clear the anchor. A non-finite anchor is rejected.
    pub fn set_anchor(&mut self, anchor: Option<f64>) -> Result<(), ConfigError> {
        if let Some(a) = anchor {
            if !a.is_finite() {
                return Err(ConfigError::BadAnchor(a));
            }
        }
        self.anchor = anchor;
        Ok(())
    }

    /// Positions spaced by `base` across `[start, end]`.
    ///
    /// Without an anchor the walk starts at `start` and the last emitted
    /// position is the first step `>= end`. With an anchor the walk runs
    /// backward from the anchor until it crosses `start` and forward until
    /// it crosses `end`, so both edges are covered by one position at or
    /// beyond them and the anchor itself is always included.
    pub fn locations(&self, start: f64, end: f64, _kind: AxisKind) -> Vec<f64> {
        let base = self.base;
        let mut locs = Vec::new();

        match self.anchor {
            None => {
                let mut loc = start;
                while loc < end {
                    locs.push(loc);
                    loc += base;
                }
                locs.push(loc);
            }
            Some(anchor) => {
                let mut loc = anchor;
                while loc > start {
                    locs.push(loc);
                    loc -= base;
                }
                locs.push(loc);
                locs.reverse();

                let mut loc = anchor + base;
                while loc < end {
                    locs.push(loc);
                    loc += base;
                }
                locs.push(loc);
            }
        }

        locs
    }
}

impl Default for SpacedLocator {
    fn default() -> Self {
        Self { base: 1.0, anchor: None }
    }
}

/// Ticks at subdivision multiples of powers of `base`.
///
/// With subdivisions `[1, 2, 5]` over `[1, 100]` the positions are
/// `1, 2, 5, 10, 20, 50, 100, 200, 500`. Major and minor levels run the
/// same algorithm; a denser minor level is built by configuring a second
/// instance with more subdivisions.
#[derive(Clone, Debug, PartialEq)]
pub struct LogLocator {
    base: f64,
    subdivisions: Vec<f64>,
}

impl LogLocator {
    /// A locator for logarithm `base` with the given within-decade
    /// multipliers. An invalid base falls back to 10.
    pub fn new(base: f64, subdivisions: Vec<f64>) -> Self {
        let mut l = Self::default();
        let _ = l.set_base(base);
        l.set_subdivisions(subdivisions);
        l
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn subdivisions(&self) -> &[f64] {
        &self.subdivisions
    }

    /// Set the logarithm base. Must be finite, positive and not 1 (the
    /// logarithm is undefined otherwise); rejected values keep the
    /// previous base.
    pub fn set_base(&mut self, base: f64) -> Result<(), ConfigError> {
        if !base.is_finite() || base <= 0.0 || base == 1.0 {
            return Err(ConfigError::BadLogBase(base));
        }
        self.base = base;
        Ok(())
    }

    pub fn set_subdivisions(&mut self, subdivisions: Vec<f64>) {
        self.subdivisions = subdivisions;
    }

    /// Every subdivision multiple of `base^e` for exponents spanning the
    /// data range: `floor(log_base(start))` through `ceil(log_base(end))`
    /// inclusive.
    ///
    /// A non-positive endpoint has no logarithm; its exponent falls back
    /// to 0 rather than erroring, so a range dipping to or below zero
    /// still produces ticks from `base^0` outward.
    pub fn locations(&self, start: f64, end: f64, _kind: AxisKind) -> Vec<f64> {
        let first = if start > 0.0 {
            start.log(self.base).floor() as i32
        } else {
            0
        };
        let last = if end > 0.0 {
            end.log(self.base).ceil() as i32
        } else {
            0
        };

        let mut locs = Vec::new();
        let mut exponent = first;
        while exponent <= last {
            let magnitude = self.base.powi(exponent);
            locs.extend(self.subdivisions.iter().map(|s| s * magnitude));
            exponent += 1;
        }

        locs
    }
}

impl Default for LogLocator {
    fn default() -> Self {
        Self { base: 10.0, subdivisions: vec![1.0] }
    }
}
