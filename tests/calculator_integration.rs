use approx::assert_abs_diff_eq;
use geo_distance::{haversine_distance, Coordinate, DistanceCalculator, GeoError, Unit};

const NEW_YORK: (f64, f64) = (40.7128, -74.0060);
const LONDON: (f64, f64) = (51.5074, -0.1278);
const CENTRAL_PARK: (f64, f64) = (40.7829, -73.9654);
const TIMES_SQUARE: (f64, f64) = (40.7580, -73.9855);

fn coord(pair: (f64, f64)) -> Coordinate {
    Coordinate::new(pair.0, pair.1).expect("Known-good coordinate")
}

#[test]
fn test_new_york_to_london_in_both_units() {
    let calc = DistanceCalculator::new(coord(NEW_YORK), coord(LONDON));
    assert_eq!(calc.distance().unwrap(), 3461.39);

    let calc = DistanceCalculator::with_unit(coord(NEW_YORK), coord(LONDON), Unit::Kilometers);
    assert_eq!(calc.distance().unwrap(), 5570.22);
}

#[test]
fn test_distance_is_symmetric() {
    for unit in [Unit::Miles, Unit::Kilometers] {
        let there = haversine_distance(coord(NEW_YORK), coord(LONDON), unit).unwrap();
        let back = haversine_distance(coord(LONDON), coord(NEW_YORK), unit).unwrap();
        assert_eq!(there, back, "Asymmetric distance in {}", unit);
    }
}

#[test]
fn test_distance_to_self_is_zero() {
    for pair in [NEW_YORK, LONDON, CENTRAL_PARK, (0.0, 0.0), (-90.0, 180.0)] {
        let d = haversine_distance(coord(pair), coord(pair), Unit::Miles).unwrap();
        assert_eq!(d, 0.0, "Nonzero self-distance at {:?}", pair);
    }
}

#[test]
fn test_unit_conversion_consistency() {
    let km = haversine_distance(coord(NEW_YORK), coord(LONDON), Unit::Kilometers).unwrap();
    let mi = haversine_distance(coord(NEW_YORK), coord(LONDON), Unit::Miles).unwrap();

    // Ratio of the two Earth-radius constants, up to 2-decimal rounding
    assert_abs_diff_eq!(km / mi, 6371.0 / 3959.0, epsilon = 1e-4);
}

#[test]
fn test_mutation_round_trip() {
    let mut calc = DistanceCalculator::new(coord(NEW_YORK), coord(LONDON));

    calc.set_point_a(CENTRAL_PARK.0, CENTRAL_PARK.1).unwrap();
    assert_eq!(calc.point_a().latitude, CENTRAL_PARK.0);
    assert_eq!(calc.point_a().longitude, CENTRAL_PARK.1);

    calc.set_point_b(TIMES_SQUARE.0, TIMES_SQUARE.1).unwrap();
    assert_eq!(calc.point_b(), coord(TIMES_SQUARE));

    assert_eq!(calc.distance().unwrap(), 2.02);
}

#[test]
fn test_invalid_latitude_on_construction_and_mutation() {
    let err = DistanceCalculator::from_degrees(95.0, 0.0, 0.0, 0.0).unwrap_err();
    assert!(matches!(err, GeoError::InvalidLatitude { .. }));
    assert_eq!(err.kind(), "invalid_latitude");

    let mut calc = DistanceCalculator::new(coord(NEW_YORK), coord(LONDON));
    let before = calc.point_a();
    assert!(calc.set_point_a(95.0, 0.0).is_err());
    assert_eq!(calc.point_a(), before, "Failed setter must not mutate state");
}

#[test]
fn test_invalid_longitude_on_construction() {
    let err = DistanceCalculator::from_degrees(40.0, 200.0, 51.0, 0.0).unwrap_err();
    assert!(matches!(err, GeoError::InvalidLongitude { .. }));
    assert_eq!(err.kind(), "invalid_longitude");
}

#[test]
fn test_invalid_unit_string_keeps_current_unit() {
    let mut calc = DistanceCalculator::new(coord(NEW_YORK), coord(LONDON));

    let err = calc.set_unit_str("furlongs").unwrap_err();
    assert_eq!(err.kind(), "invalid_unit");
    assert_eq!(calc.unit(), Unit::Miles);
    assert_eq!(calc.last_error(), Some(&err));

    calc.set_unit_str("kilometers").unwrap();
    assert_eq!(calc.unit(), Unit::Kilometers);
    assert!(calc.last_error().is_none());
}

#[test]
fn test_radius_check_does_not_mutate_point_b() {
    let calc = DistanceCalculator::new(coord(CENTRAL_PARK), coord(LONDON));
    let point_b_before = calc.point_b();

    let within = calc
        .is_within_radius(TIMES_SQUARE.0, TIMES_SQUARE.1, 2.5)
        .unwrap();
    assert!(within, "Times Square is 2.02 mi from Central Park");
    assert_eq!(calc.point_b(), point_b_before);

    let within = calc
        .is_within_radius(TIMES_SQUARE.0, TIMES_SQUARE.1, 1.5)
        .unwrap();
    assert!(!within);
    assert_eq!(calc.point_b(), point_b_before);
}

#[test]
fn test_radius_interpreted_in_current_unit() {
    // Central Park -> Times Square: 2.02 mi, 3.25 km
    let mut calc = DistanceCalculator::new(coord(CENTRAL_PARK), coord(LONDON));

    // 3.0 is a generous radius in miles...
    assert!(calc
        .is_within_radius(TIMES_SQUARE.0, TIMES_SQUARE.1, 3.0)
        .unwrap());

    // ...but too tight once the same number means kilometers
    calc.set_unit(Unit::Kilometers);
    assert!(!calc
        .is_within_radius(TIMES_SQUARE.0, TIMES_SQUARE.1, 3.0)
        .unwrap());
    assert!(calc
        .is_within_radius(TIMES_SQUARE.0, TIMES_SQUARE.1, 3.25)
        .unwrap());
}

#[test]
fn test_error_kinds_are_programmatically_distinct() {
    let bad_unit = "furlongs".parse::<Unit>().unwrap_err();
    let bad_lat = Coordinate::new(95.0, 0.0).unwrap_err();

    assert_ne!(bad_unit.kind(), bad_lat.kind());
    assert!(matches!(bad_unit, GeoError::InvalidUnit { .. }));
    assert!(matches!(bad_lat, GeoError::InvalidLatitude { .. }));
}

#[test]
fn test_coordinate_string_parsing_end_to_end() {
    let a: Coordinate = "40.7128,-74.0060".parse().unwrap();
    let b: Coordinate = "51.5074,-0.1278".parse().unwrap();

    let calc = DistanceCalculator::new(a, b);
    assert_eq!(calc.distance().unwrap(), 3461.39);

    let err = "40.7128".parse::<Coordinate>().unwrap_err();
    assert_eq!(err.kind(), "invalid_coordinates");
}

#[test]
fn test_extreme_but_valid_coordinates() {
    // Antipodal equator points: half the circumference
    let d = haversine_distance(coord((0.0, 0.0)), coord((0.0, 180.0)), Unit::Kilometers).unwrap();
    assert_eq!(d, 20015.09);

    // Pole to pole is the same arc
    let d = haversine_distance(coord((90.0, 0.0)), coord((-90.0, 0.0)), Unit::Kilometers).unwrap();
    assert_eq!(d, 20015.09);
}
