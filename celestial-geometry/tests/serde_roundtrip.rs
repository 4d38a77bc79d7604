#![cfg(feature = "serde")]

use celestial_geometry::test_helpers::assert_matrix_close;
use celestial_geometry::{rotation_matrix, LonLat, Matrix3, Vector3};

#[test]
fn test_vector3_json_shape() {
    let v = Vector3::new(1.0, -2.5, 0.125);
    let json = serde_json::to_value(v).unwrap();
    assert_eq!(json, serde_json::json!({ "x": 1.0, "y": -2.5, "z": 0.125 }));

    let back: Vector3 = serde_json::from_value(json).unwrap();
    assert_eq!(back, v);
}

#[test]
fn test_lonlat_from_json() {
    let ll: LonLat = serde_json::from_str(r#"{"lon": -73.9857, "lat": 40.7484}"#).unwrap();
    assert_eq!(ll, LonLat::new(-73.9857, 40.7484));
}

#[test]
fn test_matrix3_survives_json() {
    let m = rotation_matrix(&Vector3::new(0.0, 0.6, 0.8), 1.1);
    let text = serde_json::to_string(&m).unwrap();
    let back: Matrix3 = serde_json::from_str(&text).unwrap();
    assert_matrix_close(back, m, 1e-15);
}
