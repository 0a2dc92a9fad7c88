//! Tests for color parsing.

use super::*;

#[test]
fn parse_hex_lowercase() {
    let c = parse_color("#00008b").unwrap();
    assert_eq!(c, Color::from_rgb(0, 0, 139));
}

#[test]
fn parse_hex_uppercase() {
    let c = parse_color("#FFD700").unwrap();
    assert_eq!(c, Color::from_rgb(255, 215, 0));
}

#[test]
fn parse_hex_with_surrounding_whitespace() {
    let c = parse_color("  #1E90FF \n").unwrap();
    assert_eq!(c, Color::from_rgb(30, 144, 255));
}

#[test]
fn parse_color_invalid_format() {
    assert!(parse_color("").is_err());
    assert!(parse_color("not-a-color").is_err());
    assert!(parse_color("FFD700").is_err());
    assert!(parse_color("#f00").is_err());
    assert!(parse_color("#00d4ff80").is_err());
    assert!(parse_color("#gggggg").is_err());
    assert!(parse_color("rgba(0,0,0,1.0)").is_err());
}

#[test]
fn parse_error_names_the_input() {
    let err = parse_color("#12").unwrap_err().to_string();
    assert!(err.contains("#12"), "{err}");
}

#[test]
fn parse_all_default_colors() {
    let colors = [
        "#FFD700", "#FFFF00", "#FFA500", "#1E90FF", "#00008B", "#FFFFFF", "#FF7F50", "#6A5ACD",
    ];
    for c in &colors {
        assert!(parse_color(c).is_ok(), "failed to parse default color: {c}");
    }
}
