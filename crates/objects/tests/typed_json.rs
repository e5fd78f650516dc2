//! Round trips through JSON into concrete types.

use objects::{ObjectError, Rectangle, from_json, to_json};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Circle {
    radius: f64,
}

impl Circle {
    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

#[derive(Debug, PartialEq, Deserialize)]
struct MockType {
    a: i32,
    b: i32,
    c: i32,
}

#[test]
fn test_circle_from_json_has_methods() {
    let circle: Circle = from_json(r#"{"radius":10}"#).unwrap();
    assert_eq!(circle, Circle { radius: 10.0 });
    assert!((circle.area() - 314.159_265).abs() < 1e-5);
}

#[test]
fn test_rectangle_from_json() {
    let r: Rectangle = from_json(r#"{ "width": 10, "height": 20 }"#).unwrap();
    assert_eq!(r.area(), 200.0);
}

#[test]
fn test_extra_fields_are_ignored() {
    let value: MockType = from_json(r#"{"a":1,"b":2,"c":3,"d":4}"#).unwrap();
    assert_eq!(value, MockType { a: 1, b: 2, c: 3 });
}

#[test]
fn test_missing_field_is_an_error() {
    let err = from_json::<MockType>(r#"{"a":1}"#).unwrap_err();
    assert!(matches!(err, ObjectError::Deserialize(_)));
}

#[test]
fn test_whole_rectangle_matches_plain_json_numbers() {
    assert_eq!(
        to_json(&Rectangle::new(10.0, 20.0)).unwrap(),
        r#"{"width":10,"height":20}"#
    );
}

#[test]
fn test_rectangle_round_trip() {
    let r = Rectangle::new(10.0, 2.5);
    let back: Rectangle = from_json(&to_json(&r).unwrap()).unwrap();
    assert_eq!(back, r);
}

#[test]
fn test_rectangle_to_json_field_order() {
    let json = to_json(&Rectangle::new(1.5, 2.0)).unwrap();
    assert_eq!(json, r#"{"width":1.5,"height":2}"#);
}

#[test]
fn test_strings_and_nested_values() {
    let value = serde_json::json!({ "name": "x", "tags": ["a", "b"], "n": null });
    assert_eq!(
        to_json(&value).unwrap(),
        r#"{"name":"x","tags":["a","b"],"n":null}"#
    );
}
