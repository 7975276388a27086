// File: crates/tick-core/src/labeler.rs
// Summary: Tick labelers: render tick positions as display strings.

use crate::config::{TickOptions, Update};

/// The closed set of tick labelers.
///
/// Every variant upholds one invariant: the output has exactly one string
/// per input position.
#[derive(Clone, Debug, PartialEq)]
pub enum Labeler {
    /// One empty string per position; suppresses label text while keeping
    /// the tick marks.
    Null,
    String(StringLabeler),
    Format(FormatLabeler),
}

impl Labeler {
    /// Display strings for `positions`, one per position.
    pub fn labels(&self, positions: &[f64]) -> Vec<String> {
        match self {
            Labeler::Null => vec![String::new(); positions.len()],
            Labeler::String(l) => l.labels(positions),
            Labeler::Format(l) => l.labels(positions),
        }
    }

    /// Apply the fields of `opts` this variant recognizes, ignoring the
    /// rest. Same partial-update contract as the locators.
    pub fn configure(&mut self, opts: &TickOptions) {
        match self {
            Labeler::Null => {}
            Labeler::String(l) => {
                if let Some(labels) = &opts.labels {
                    l.set_labels(labels.clone());
                }
            }
            Labeler::Format(l) => match opts.format {
                Update::Keep => {}
                Update::Clear => l.set_format(None),
                Update::Set(f) => l.set_format(Some(f)),
            },
        }
    }
}

impl Default for Labeler {
    fn default() -> Self {
        Labeler::Format(FormatLabeler::default())
    }
}

/// Labels spelled out by the caller, matched to positions by index.
///
/// The list is applied in order to whatever positions come in — labels are
/// never looked up by tick value, so the caller must request positions in
/// the order it configured the labels. A short list is padded with empty
/// strings; a long one is truncated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StringLabeler {
    labels: Vec<String>,
}

impl StringLabeler {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    pub fn set_labels(&mut self, labels: Vec<String>) {
        self.labels = labels;
    }

    /// The configured labels, padded or truncated to the length of
    /// `positions`. Position values are ignored; only the count matters.
    pub fn labels<T>(&self, positions: &[T]) -> Vec<String> {
        let mut out: Vec<String> = self.labels.iter().take(positions.len()).cloned().collect();
        out.resize(positions.len(), String::new());
        out
    }
}

/// How [`FormatLabeler`] renders a numeric position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberFormat {
    /// Nearest whole number, no fractional part.
    Integer,
    /// Fixed number of decimal places.
    Precision(usize),
    /// Scientific notation with the given mantissa precision.
    Scientific(usize),
}

impl NumberFormat {
    fn render(&self, value: f64) -> String {
        match *self {
            NumberFormat::Integer => format!("{}", value.round() as i64),
            NumberFormat::Precision(p) => format!("{value:.p$}"),
            NumberFormat::Scientific(p) => format!("{value:.p$e}"),
        }
    }
}

/// Labels each position with its own value.
///
/// With no format configured, positions render in their shortest `Display`
/// form (`25` for a whole number, `2.5` otherwise); a [`NumberFormat`]
/// pins the style down instead.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FormatLabeler {
    format: Option<NumberFormat>,
}

impl FormatLabeler {
    pub fn new(format: Option<NumberFormat>) -> Self {
        Self { format }
    }

    pub fn format(&self) -> Option<NumberFormat> {
        self.format
    }

    pub fn set_format(&mut self, format: Option<NumberFormat>) {
        self.format = format;
    }

    pub fn labels(&self, positions: &[f64]) -> Vec<String> {
        match self.format {
            None => positions.iter().map(|p| p.to_string()).collect(),
            Some(fmt) => positions.iter().map(|p| fmt.render(*p)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_format_renders_integers_and_floats() {
        assert_eq!(NumberFormat::Integer.render(24.6), "25");
        assert_eq!(NumberFormat::Integer.render(-3.0), "-3");
        assert_eq!(NumberFormat::Precision(2).render(2.5), "2.50");
        assert_eq!(NumberFormat::Precision(0).render(2.5), "2");
        assert_eq!(NumberFormat::Scientific(1).render(1500.0), "1.5e3");
    }

    #[test]
    fn default_format_uses_shortest_display() {
        let l = FormatLabeler::default();
        assert_eq!(l.labels(&[25.0, 2.5, -1.0]), vec!["25", "2.5", "-1"]);
    }

    #[test]
    fn string_labeler_ignores_position_values() {
        let l = StringLabeler::new(vec!["lo".into(), "hi".into()]);
        // Same labels no matter which positions come in.
        assert_eq!(l.labels(&[0.0, 100.0]), vec!["lo", "hi"]);
        assert_eq!(l.labels(&[-5.0, 42.0]), vec!["lo", "hi"]);
    }
}
