use crate::TagColor;

use std::str::FromStr;

#[test]
fn test_tag_color_round_trip() {
    for color in [
        TagColor::Blue,
        TagColor::Green,
        TagColor::Orange,
        TagColor::Purple,
        TagColor::Pink,
    ] {
        assert_eq!(TagColor::from_str(color.as_str()).unwrap(), color);
    }
}

#[test]
fn test_tag_color_rejects_unknown() {
    assert!(TagColor::from_str("red").is_err());
    assert!(TagColor::from_str("Blue").is_err());
}

#[test]
fn test_tag_color_wire_format() {
    let json = serde_json::to_string(&TagColor::Purple).unwrap();
    assert_eq!(json, "\"purple\"");
}
