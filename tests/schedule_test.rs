use pixswap::{temperature, PixswapError, Schedule};

#[test]
fn endpoints_hit_initial_and_final_temperature() {
    for &steps in &[2usize, 3, 10, 40_000_000] {
        assert_eq!(temperature(0, steps, 2.0, 1e-3), 2.0);
        assert_eq!(temperature(steps - 1, steps, 2.0, 1e-3), 1e-3);
    }
}

#[test]
fn midpoint_is_geometric_mean() {
    let t = temperature(50, 101, 4.0, 1.0);
    assert!((t - 2.0).abs() < 1e-12, "{t}");
}

#[test]
fn temperature_decreases_monotonically() {
    let steps = 1000;
    let temps: Vec<f64> = (0..steps).map(|s| temperature(s, steps, 2.0, 1e-3)).collect();
    assert!(temps.windows(2).all(|w| w[1] < w[0]));
    assert!(temps.iter().all(|&t| t > 0.0));
}

#[test]
#[should_panic(expected = "at least 2 steps")]
fn single_step_schedule_panics() {
    temperature(0, 1, 2.0, 1e-3);
}

#[test]
fn schedule_rejects_bad_parameters() {
    assert!(matches!(Schedule::new(1, 2.0, 1e-3), Err(PixswapError::Config(_))));
    assert!(matches!(Schedule::new(0, 2.0, 1e-3), Err(PixswapError::Config(_))));
    assert!(matches!(Schedule::new(10, 0.0, 1e-3), Err(PixswapError::Config(_))));
    assert!(matches!(Schedule::new(10, 2.0, -1.0), Err(PixswapError::Config(_))));
    assert!(matches!(Schedule::new(10, f64::NAN, 1e-3), Err(PixswapError::Config(_))));
    assert!(matches!(Schedule::new(10, 2.0, f64::INFINITY), Err(PixswapError::Config(_))));
}

#[test]
fn schedule_delegates_to_temperature() {
    let schedule = Schedule::new(500, 2.0, 1e-3).expect("valid schedule");
    assert_eq!(schedule.total_steps(), 500);
    for step in [0, 1, 250, 498, 499] {
        assert_eq!(schedule.at(step), temperature(step, 500, 2.0, 1e-3));
    }
}
