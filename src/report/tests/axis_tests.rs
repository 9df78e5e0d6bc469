use crate::report::{linear_fit, nice_ticks, LinearScale};

#[test]
fn test_nice_ticks_cover_range() {
    let ticks = nice_ticks(0.0, 0.93, 6);
    assert_eq!(ticks.first(), Some(&0.0));
    assert!(*ticks.last().unwrap() >= 0.93);
    assert_eq!(ticks, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
}

#[test]
fn test_nice_ticks_degenerate_range() {
    let ticks = nice_ticks(5.0, 5.0, 6);
    assert!(ticks.first().unwrap() <= &4.0);
    assert!(ticks.last().unwrap() >= &6.0);
}

#[test]
fn test_linear_scale_inverts_y() {
    let scale = LinearScale::new((0.0, 10.0), (500.0, 100.0));
    assert_eq!(scale.map(0.0), 500.0);
    assert_eq!(scale.map(10.0), 100.0);
    assert_eq!(scale.map(5.0), 300.0);
}

#[test]
fn test_linear_fit_exact_line() {
    let trend = linear_fit(&[(1.0, 3.0), (2.0, 5.0), (4.0, 9.0)]).unwrap();
    assert!((trend.slope - 2.0).abs() < 1e-12);
    assert!((trend.intercept - 1.0).abs() < 1e-12);
    assert!((trend.at(10.0) - 21.0).abs() < 1e-9);
}

#[test]
fn test_linear_fit_needs_distinct_x() {
    assert!(linear_fit(&[]).is_none());
    assert!(linear_fit(&[(1.0, 2.0)]).is_none());
    assert!(linear_fit(&[(3.0, 1.0), (3.0, 2.0)]).is_none());
}
