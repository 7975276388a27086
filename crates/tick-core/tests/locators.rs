// File: crates/tick-core/tests/locators.rs
// Purpose: Validate tick positions produced by every locator variant.

use tick_core::{AxisKind, FixedLocator, LinearLocator, Locator, LogLocator, SpacedLocator};

#[test]
fn null_locator_is_always_empty() {
    let l = Locator::Null;
    assert!(l.locations(0.0, 100.0, AxisKind::Major).is_empty());
    assert!(l.locations(-5.0, 5.0, AxisKind::Minor).is_empty());
}

#[test]
fn linear_major_is_evenly_spaced() {
    let l = LinearLocator::default();
    assert_eq!(
        l.locations(0.0, 100.0, AxisKind::Major),
        vec![0.0, 25.0, 50.0, 75.0, 100.0]
    );
}

#[test]
fn linear_minor_adds_two_ticks_and_ends_exactly_at_end() {
    let l = LinearLocator::default();
    let locs = l.locations(0.0, 100.0, AxisKind::Minor);
    assert_eq!(locs.len(), 7);
    assert_eq!(locs[0], 0.0);
    // The step 100/6 does not accumulate back to 100 exactly; the last
    // position must still be the literal end value.
    assert_eq!(*locs.last().unwrap(), 100.0);
    for w in locs.windows(2) {
        assert!((w[1] - w[0] - 100.0 / 6.0).abs() < 1e-9);
    }
}

#[test]
fn linear_spans_a_negative_to_positive_range() {
    let l = LinearLocator::new(3);
    assert_eq!(l.locations(-10.0, 10.0, AxisKind::Major), vec![-10.0, 0.0, 10.0]);
}

#[test]
fn fixed_without_limit_passes_positions_through() {
    let positions: Vec<f64> = (1..=10).map(f64::from).collect();
    let l = FixedLocator::new(positions.clone(), None);
    // start/end are disregarded entirely.
    assert_eq!(l.locations(0.0, 0.0, AxisKind::Major), positions);
    assert_eq!(l.locations(-1e9, 1e9, AxisKind::Major), positions);
}

#[test]
fn fixed_limit_subsamples_keeping_both_ends() {
    let positions: Vec<f64> = (1..=10).map(f64::from).collect();
    let l = FixedLocator::new(positions, Some(3));
    // Interior index round(1 * 9/2) = 5 -> position 6.
    assert_eq!(l.locations(0.0, 0.0, AxisKind::Major), vec![1.0, 6.0, 10.0]);
}

#[test]
fn fixed_limit_at_or_above_length_is_a_passthrough() {
    let l = FixedLocator::new(vec![1.0, 2.0, 3.0], Some(3));
    assert_eq!(l.locations(0.0, 0.0, AxisKind::Major), vec![1.0, 2.0, 3.0]);
}

#[test]
fn fixed_does_not_sort_unordered_input() {
    // Order is the caller's: positions come back exactly as configured.
    let l = FixedLocator::new(vec![9.0, 1.0, 7.0, 3.0], None);
    assert_eq!(l.locations(0.0, 10.0, AxisKind::Major), vec![9.0, 1.0, 7.0, 3.0]);
}

#[test]
fn spaced_without_anchor_steps_from_start_past_end() {
    let l = SpacedLocator::new(2.0, None);
    assert_eq!(
        l.locations(0.0, 10.0, AxisKind::Major),
        vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]
    );

    // When the range is not a multiple of base, the last tick overshoots.
    let l = SpacedLocator::new(3.0, None);
    assert_eq!(l.locations(0.0, 10.0, AxisKind::Major), vec![0.0, 3.0, 6.0, 9.0, 12.0]);
}

#[test]
fn spaced_with_anchor_walks_both_directions() {
    let l = SpacedLocator::new(5.0, Some(3.0));
    let locs = l.locations(0.0, 20.0, AxisKind::Major);
    assert_eq!(locs, vec![-2.0, 3.0, 8.0, 13.0, 18.0, 23.0]);

    // Anchor included, edges covered from both sides.
    assert!(locs.contains(&3.0));
    assert!(locs[0] <= 0.0);
    assert!(*locs.last().unwrap() >= 20.0);
}

#[test]
fn spaced_anchor_outside_range_still_covers_it() {
    // Anchor below start: the backward walk stops immediately and the
    // forward walk sweeps the whole range.
    let l = SpacedLocator::new(4.0, Some(-10.0));
    let locs = l.locations(0.0, 10.0, AxisKind::Major);
    assert_eq!(locs[0], -10.0);
    assert!(*locs.last().unwrap() >= 10.0);
    for w in locs.windows(2) {
        assert_eq!(w[1] - w[0], 4.0);
    }
}

#[test]
fn log_covers_whole_decades_with_subdivisions() {
    let l = LogLocator::new(10.0, vec![1.0, 5.0]);
    assert_eq!(
        l.locations(1.0, 100.0, AxisKind::Major),
        vec![1.0, 5.0, 10.0, 50.0, 100.0, 500.0]
    );
}

#[test]
fn log_major_and_minor_run_the_same_algorithm() {
    let l = LogLocator::default();
    assert_eq!(
        l.locations(1.0, 1000.0, AxisKind::Major),
        l.locations(1.0, 1000.0, AxisKind::Minor)
    );
}

#[test]
fn log_base_two_spans_binary_magnitudes() {
    let l = LogLocator::new(2.0, vec![1.0]);
    assert_eq!(
        l.locations(1.0, 16.0, AxisKind::Major),
        vec![1.0, 2.0, 4.0, 8.0, 16.0]
    );
}

#[test]
fn locations_are_referentially_transparent() {
    let locators = [
        Locator::Null,
        Locator::Linear(LinearLocator::new(7)),
        Locator::Fixed(FixedLocator::new(vec![1.0, 4.0, 9.0], Some(2))),
        Locator::Spaced(SpacedLocator::new(2.5, Some(1.0))),
        Locator::Log(LogLocator::new(10.0, vec![1.0, 2.0, 5.0])),
    ];
    for l in &locators {
        let a = l.locations(0.5, 42.0, AxisKind::Major);
        let b = l.locations(0.5, 42.0, AxisKind::Major);
        assert_eq!(a, b, "repeat query changed output for {l:?}");
    }
}
