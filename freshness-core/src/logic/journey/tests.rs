use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::generator::{generate_batch_id, generate_journey, perturb, round2, JourneyInput};
use super::stage::Stage;
use crate::logic::model::{FreshnessLabel, FreshnessStatus};
use crate::logic::sensor::{validate, SensorForm, SensorReading};

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 17)
        .unwrap()
        .and_hms_milli_opt(14, 30, 15, 750)
        .unwrap()
}

fn reading() -> SensorReading {
    SensorReading::new(4.0, 60.0, 500.0, 0.5)
}

fn input(reading: &SensorReading, label: FreshnessLabel) -> JourneyInput<'_> {
    JourneyInput {
        reading,
        food_name: "Apple",
        batch_id: "BATCH-ABC123",
        label,
    }
}

fn is_two_decimals(value: f64) -> bool {
    ((value * 100.0).round() - value * 100.0).abs() < 1e-6
}

#[test]
fn test_four_records_in_stage_order() {
    let mut rng = StdRng::seed_from_u64(7);
    let r = reading();
    let records = generate_journey(input(&r, FreshnessLabel::Fresh), fixed_now(), &mut rng);

    let stages: Vec<Stage> = records.iter().map(|rec| rec.stage).collect();
    assert_eq!(stages, Stage::ALL.to_vec());

    for rec in &records {
        assert_eq!(rec.batch_id, "BATCH-ABC123");
        assert_eq!(rec.food_name, "Apple");
    }
}

#[test]
fn test_only_supermarket_is_assessed() {
    let mut rng = StdRng::seed_from_u64(1);
    let r = reading();
    let records = generate_journey(input(&r, FreshnessLabel::Spoiled), fixed_now(), &mut rng);

    for rec in &records[..3] {
        assert_eq!(rec.freshness_status, FreshnessStatus::InTransit);
        assert_eq!(rec.freshness_status.as_str(), "In-Transit");
    }
    assert_eq!(
        records[3].freshness_status,
        FreshnessStatus::Assessed(FreshnessLabel::Spoiled)
    );
}

#[test]
fn test_timestamps_walk_back_from_now() {
    let mut rng = StdRng::seed_from_u64(2);
    let r = reading();
    let now = fixed_now();
    let records = generate_journey(input(&r, FreshnessLabel::Fresh), now, &mut rng);

    let whole_seconds = NaiveDate::from_ymd_opt(2024, 5, 17)
        .unwrap()
        .and_hms_opt(14, 30, 15)
        .unwrap();

    assert_eq!(records[0].timestamp, whole_seconds - Duration::days(2));
    assert_eq!(records[1].timestamp, whole_seconds - Duration::days(1));
    assert_eq!(records[2].timestamp, whole_seconds - Duration::hours(12));
    assert_eq!(records[3].timestamp, whole_seconds);
    assert_eq!(records[3].timestamp_string(), "2024-05-17 14:30:15");

    for pair in records.windows(2) {
        assert!(pair[0].timestamp <= pair[1].timestamp);
    }
}

#[test]
fn test_perturbation_bounds_and_rounding() {
    let r = reading();
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let records = generate_journey(input(&r, FreshnessLabel::Fresh), fixed_now(), &mut rng);

        for rec in &records {
            assert!((2.0..=6.0).contains(&rec.temperature), "temperature {}", rec.temperature);
            assert!((55.0..=65.0).contains(&rec.humidity), "humidity {}", rec.humidity);
            assert!((400.0..=600.0).contains(&rec.co2_level), "co2 {}", rec.co2_level);
            assert!((0.3..=0.7).contains(&rec.gas_reading), "gas {}", rec.gas_reading);

            assert!(is_two_decimals(rec.temperature));
            assert!(is_two_decimals(rec.humidity));
            assert!(is_two_decimals(rec.co2_level));
            assert!(is_two_decimals(rec.gas_reading));
        }
    }
}

#[test]
fn test_same_seed_same_journey() {
    let r = reading();
    let a = generate_journey(input(&r, FreshnessLabel::Fresh), fixed_now(), &mut StdRng::seed_from_u64(99));
    let b = generate_journey(input(&r, FreshnessLabel::Fresh), fixed_now(), &mut StdRng::seed_from_u64(99));
    assert_eq!(a, b);
}

#[test]
fn test_record_markers_are_unique_uuids() {
    let mut rng = StdRng::seed_from_u64(3);
    let r = reading();
    let records = generate_journey(input(&r, FreshnessLabel::Fresh), fixed_now(), &mut rng);

    let mut markers: Vec<&str> = records.iter().map(|rec| rec.record_marker.as_str()).collect();
    for marker in &markers {
        let parsed = uuid::Uuid::parse_str(marker).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }
    markers.sort();
    markers.dedup();
    assert_eq!(markers.len(), 4);
}

#[test]
fn test_batch_id_format() {
    let mut rng = StdRng::seed_from_u64(5);
    let id = generate_batch_id(&mut rng);

    assert!(id.starts_with("BATCH-"));
    let suffix = &id["BATCH-".len()..];
    assert_eq!(suffix.len(), 6);
    assert!(suffix.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    assert_ne!(id, generate_batch_id(&mut rng));
}

#[test]
fn test_round2() {
    assert_eq!(round2(4.126), 4.13);
    assert_eq!(round2(-1.004), -1.0);
    assert_eq!(round2(500.0), 500.0);
}

#[test]
fn test_zero_spread_only_rounds() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(perturb(1.23456, 0.0, &mut rng), 1.23);
}

#[test]
fn test_json_shape() {
    let mut rng = StdRng::seed_from_u64(11);
    let r = reading();
    let records = generate_journey(input(&r, FreshnessLabel::SemiSpoiled), fixed_now(), &mut rng);
    let json = serde_json::to_value(&records[3]).unwrap();

    assert_eq!(json["stage"], "Supermarket");
    assert_eq!(json["freshness_status"], "Semi-Spoiled");
    assert_eq!(json["timestamp"], "2024-05-17 14:30:15");
    assert!(json["record_marker"].is_string());
}

#[test]
fn test_huge_finite_readings_stay_finite() {
    assert_eq!(round2(1e307), 1e307);
    assert_eq!(round2(-1e307), -1e307);

    let form = SensorForm::new("1e307", "-1e307", "1.7e308", "1e306");
    let r = validate(&form).unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let records = generate_journey(input(&r, FreshnessLabel::Spoiled), fixed_now(), &mut rng);

    for rec in &records {
        assert!(rec.temperature.is_finite());
        assert!(rec.humidity.is_finite());
        assert!(rec.co2_level.is_finite());
        assert!(rec.gas_reading.is_finite());
    }
}
