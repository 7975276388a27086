// File: crates/demo/src/main.rs
// Summary: Demo drives every locator/labeler variant over a CLI range and
// prints the resulting tick tables.

use anyhow::{Context, Result, bail};
use tick_core::{
    AxisKind, FixedLocator, FormatLabeler, Labeler, LinearLocator, Locator, LogLocator,
    NumberFormat, SpacedLocator, StringLabeler, TickOptions, Ticker, Update,
};

fn main() -> Result<()> {
    // Accept "start end" from the CLI or fall back to a sample range.
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (start, end) = match args.as_slice() {
        [] => (0.0, 100.0),
        [s, e] => (parse_num(s)?, parse_num(e)?),
        _ => bail!("usage: tickline-demo [START END]"),
    };
    if start > end {
        bail!("start ({start}) must not exceed end ({end})");
    }
    println!("Axis range: [{start}, {end}]");

    let mut tickers = [
        (
            "linear / default format",
            Ticker::new(
                Locator::Linear(LinearLocator::default()),
                Labeler::Format(FormatLabeler::default()),
            ),
        ),
        (
            "spaced (base 10, anchor mid) / 1 decimal",
            Ticker::new(
                Locator::Spaced(SpacedLocator::new(10.0, Some((start + end) / 2.0))),
                Labeler::Format(FormatLabeler::new(Some(NumberFormat::Precision(1)))),
            ),
        ),
        (
            "log (base 10, subdivisions 1,2,5) / scientific",
            Ticker::new(
                Locator::Log(LogLocator::new(10.0, vec![1.0, 2.0, 5.0])),
                Labeler::Format(FormatLabeler::new(Some(NumberFormat::Scientific(1)))),
            ),
        ),
        (
            "fixed quartiles / named labels",
            Ticker::new(
                Locator::Fixed(FixedLocator::new(quartiles(start, end), None)),
                Labeler::String(StringLabeler::new(vec![
                    "min".into(),
                    "q1".into(),
                    "median".into(),
                    "q3".into(),
                    "max".into(),
                ])),
            ),
        ),
    ];

    for (name, ticker) in &tickers {
        print_table(name, ticker, start, end);
    }

    // One options bag reconfigures heterogeneous tickers in a single pass.
    println!("\nReconfiguring (count 3, base 25, no anchor) ...");
    let opts = TickOptions {
        count: Some(3),
        base: Some(25.0),
        anchor: Update::Clear,
        ..Default::default()
    };
    for (name, ticker) in &mut tickers {
        ticker.locator.configure(&opts);
        ticker.labeler.configure(&opts);
        print_table(name, ticker, start, end);
    }

    Ok(())
}

fn parse_num(s: &str) -> Result<f64> {
    s.parse::<f64>()
        .with_context(|| format!("not a number: '{s}'"))
}

fn quartiles(start: f64, end: f64) -> Vec<f64> {
    LinearLocator::default().locations(start, end, AxisKind::Major)
}

fn print_table(name: &str, ticker: &Ticker, start: f64, end: f64) {
    println!("\n{name}");
    let major = ticker.ticks(start, end, AxisKind::Major);
    for (pos, label) in &major {
        println!("  {pos:>12.4}  {label}");
    }
    let minor = ticker.locator.locations(start, end, AxisKind::Minor);
    println!("  ({} major, {} minor)", major.len(), minor.len());
}
