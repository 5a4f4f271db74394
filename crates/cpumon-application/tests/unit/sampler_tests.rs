//! Sampler tests driven by scripted host counters

use cpumon_application::{Sampler, SamplerState};
use cpumon_domain::value_objects::TimeSnapshot;
use cpumon_infrastructure::host::ScriptedTimeSource;
use std::sync::Arc;
use std::time::Duration;

fn sampler_over(snapshots: Vec<TimeSnapshot>) -> (Sampler, Arc<ScriptedTimeSource>) {
    let source = Arc::new(ScriptedTimeSource::new(snapshots));
    (Sampler::new(source.clone()), source)
}

/// Snapshot sequence with strictly increasing total time and varying load
fn rising_sequence(len: u64) -> Vec<TimeSnapshot> {
    let (mut idle, mut kernel, mut user) = (0u64, 0u64, 0u64);
    (0..len)
        .map(|i| {
            let idle_step = (i * 37) % 11;
            let busy_step = (i * 13) % 7 + 1;
            idle += idle_step;
            kernel += idle_step + busy_step / 2;
            user += busy_step - busy_step / 2;
            TimeSnapshot::new(idle, kernel, user)
        })
        .collect()
}

#[test]
fn test_reference_interval_reports_eighty_percent() {
    // system 100 -> 140, idle 100 -> 110
    let (sampler, _) = sampler_over(vec![
        TimeSnapshot::new(100, 150, 50),
        TimeSnapshot::new(110, 180, 70),
    ]);

    let first = sampler.sample();
    let second = sampler.sample();

    assert!((0.0..=100.0).contains(&first));
    assert!((second - 80.0).abs() < f64::EPSILON);
    assert_eq!(
        sampler.baseline(),
        SamplerState {
            last_idle: 110,
            last_total: 140
        }
    );
}

#[test]
fn test_utilization_always_in_range() {
    let snapshots = rising_sequence(200);
    let (sampler, _) = sampler_over(snapshots);

    for _ in 0..200 {
        let value = sampler.try_sample().unwrap();
        assert!((0.0..=100.0).contains(&value), "out of range: {value}");
    }
}

#[test]
fn test_non_positive_system_delta_returns_exactly_zero() {
    let (sampler, _) = sampler_over(vec![
        TimeSnapshot::new(100, 300, 100),
        // Same tick
        TimeSnapshot::new(100, 300, 100),
        // Counter reset
        TimeSnapshot::new(5, 10, 5),
    ]);

    sampler.sample();
    assert_eq!(sampler.sample().to_bits(), 0.0f64.to_bits());
    assert_eq!(sampler.sample().to_bits(), 0.0f64.to_bits());

    // Baseline follows the reset counters
    assert_eq!(
        sampler.baseline(),
        SamplerState {
            last_idle: 5,
            last_total: 10
        }
    );
}

#[test]
fn test_first_sample_measures_since_boot() {
    let (sampler, _) = sampler_over(vec![TimeSnapshot::new(300, 400, 100)]);

    // 200 busy vs 300 idle since boot
    assert!((sampler.sample() - 40.0).abs() < f64::EPSILON);
}

#[test]
fn test_zero_processor_count_is_tolerated() {
    let source = Arc::new(ScriptedTimeSource::new(rising_sequence(10)).with_processor_count(0));
    let sampler = Sampler::new(source);

    for _ in 0..10 {
        assert!((0.0..=100.0).contains(&sampler.sample()));
    }
}

#[test]
fn test_failed_read_keeps_baseline_and_reports_error() {
    let (sampler, source) = sampler_over(vec![TimeSnapshot::new(100, 150, 50)]);
    sampler.sample();
    let before = sampler.baseline();

    source.push_failure("GetSystemTimes failed");
    let usage = sampler.measure();

    assert!(usage.is_failure());
    assert_eq!(usage.utilization.to_bits(), 0.0f64.to_bits());
    assert!(usage.error.unwrap().contains("GetSystemTimes failed"));
    assert_eq!(sampler.baseline(), before);

    // The next good read measures against the preserved baseline
    source.push(TimeSnapshot::new(110, 180, 70));
    assert!((sampler.sample() - 80.0).abs() < f64::EPSILON);
}

#[test]
fn test_try_sample_surfaces_failure() {
    let (sampler, _) = sampler_over(Vec::new());

    let err = sampler.try_sample().unwrap_err();
    assert!(err.is_host_time());
}

#[tokio::test]
async fn test_prime_establishes_baseline() {
    let (sampler, source) = sampler_over(vec![
        TimeSnapshot::new(1_000, 1_500, 500),
        TimeSnapshot::new(1_010, 1_530, 520),
        TimeSnapshot::new(1_020, 1_560, 540),
    ]);

    sampler.prime(Duration::from_millis(100)).await;

    assert_eq!(source.reads(), 2);
    assert_eq!(
        sampler.baseline(),
        SamplerState {
            last_idle: 1_010,
            last_total: 1_040
        }
    );
    // 40 busy vs 10 idle over the first client-visible interval
    assert!((sampler.sample() - 80.0).abs() < f64::EPSILON);
}

#[test]
fn test_concurrent_samples_match_a_serial_order() {
    const CALLERS: usize = 16;
    const PER_CALLER: usize = 25;
    let total = (CALLERS * PER_CALLER) as u64;

    let snapshots = rising_sequence(total);
    let last = *snapshots.last().unwrap();

    let (serial, _) = sampler_over(snapshots.clone());
    let mut expected: Vec<f64> = (0..total).map(|_| serial.sample()).collect();

    let (sampler, _) = sampler_over(snapshots);
    let sampler = Arc::new(sampler);
    let handles: Vec<_> = (0..CALLERS)
        .map(|_| {
            let sampler = Arc::clone(&sampler);
            std::thread::spawn(move || {
                (0..PER_CALLER)
                    .map(|_| sampler.try_sample().unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    let mut observed: Vec<f64> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();

    expected.sort_by(f64::total_cmp);
    observed.sort_by(f64::total_cmp);
    assert_eq!(observed, expected);

    let baseline = sampler.baseline();
    assert_eq!(baseline.last_idle, last.idle);
    assert_eq!(baseline.last_total, last.system_time());
}
