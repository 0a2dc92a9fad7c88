mod color;

pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#ff8800").unwrap();
        assert_eq!(c, Color::from_rgb(255, 136, 0));
    }

    #[test]
    fn color_from_hex_uppercase() {
        let c = Color::from_hex("#FFD700").unwrap();
        assert_eq!(c, Color::from_rgb(0xff, 0xd7, 0x00));
    }

    #[test]
    fn color_from_hex_no_hash() {
        let c = Color::from_hex("00ff00").unwrap();
        assert_eq!(c, Color::from_rgb(0, 255, 0));
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("#ff880080").is_none());
        assert!(Color::from_hex("#+12345").is_none());
        assert!(Color::from_hex("").is_none());
    }

    #[test]
    fn color_to_hex_is_lowercase_and_padded() {
        assert_eq!(Color::from_rgb(0, 0, 0x8b).to_hex(), "#00008b");
        assert_eq!(Color::from_rgb(0xff, 0xd7, 0).to_string(), "#ffd700");
    }

    #[test]
    fn color_u24_round_trip() {
        let c = Color::from_u24(0x1e90ff);
        assert_eq!(c, Color::from_rgb(0x1e, 0x90, 0xff));
        assert_eq!(c.to_u24(), 0x1e90ff);
        // Bits above the low 24 are ignored.
        assert_eq!(Color::from_u24(0x0100_0000 | 0x123456).to_u24(), 0x123456);
    }

    #[test]
    fn color_from_str_requires_hash() {
        assert!("#6a5acd".parse::<Color>().is_ok());
        assert!("6a5acd".parse::<Color>().is_err());
        assert!("#6a5ac".parse::<Color>().is_err());
    }

    #[test]
    fn color_serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::from_rgb(0xff, 0x7f, 0x50)).unwrap();
        assert_eq!(json, "\"#ff7f50\"");
        let back: Color = serde_json::from_str("\"#FF7F50\"").unwrap();
        assert_eq!(back, Color::from_rgb(0xff, 0x7f, 0x50));
    }

    #[test]
    fn color_deserialize_rejects_garbage() {
        assert!(serde_json::from_str::<Color>("\"not-a-color\"").is_err());
        assert!(serde_json::from_str::<Color>("42").is_err());
    }

    #[test]
    fn default_color_is_white() {
        assert_eq!(Color::default(), Color::WHITE);
        assert_eq!(Color::WHITE.to_hex(), "#ffffff");
    }
}
