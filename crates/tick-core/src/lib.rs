// File: crates/tick-core/src/lib.rs
// Summary: Core library entry point; exports tick locators, labelers and
// the configuration protocol.

pub mod axis;
pub mod config;
pub mod labeler;
pub mod locator;

pub use axis::{AxisKind, Ticker};
pub use config::{ConfigError, TickOptions, Update};
pub use labeler::{FormatLabeler, Labeler, NumberFormat, StringLabeler};
pub use locator::{FixedLocator, LinearLocator, Locator, LogLocator, SpacedLocator};
