#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    /// Accepts `#RRGGBB`, `#RGB` and a handful of color names.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some(hex) = value.strip_prefix('#') {
            let expanded: String = match hex.len() {
                3 => hex.chars().flat_map(|c| [c, c]).collect(),
                6 => hex.to_string(),
                _ => return None,
            };
            let channel = |i: usize| {
                u8::from_str_radix(expanded.get(i..i + 2)?, 16).ok().map(|v| f32::from(v) / 255.0)
            };
            return Some(Self { r: channel(0)?, g: channel(2)?, b: channel(4)? });
        }

        match value.to_ascii_lowercase().as_str() {
            "black" => Some(Self::BLACK),
            "white" => Some(Self::WHITE),
            "red" => Self::parse("#FF0000"),
            "green" => Self::parse("#008000"),
            "blue" => Self::parse("#0000FF"),
            "gray" | "grey" => Self::parse("#808080"),
            "whitesmoke" => Self::parse("#F5F5F5"),
            _ => None,
        }
    }

    pub fn hex(value: &str) -> Self {
        Self::parse(value).unwrap_or(Self::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(Rgb::parse("#FFF"), Some(Rgb::WHITE));
        let blue = Rgb::parse("#1A4B7C").unwrap();
        assert!((blue.r - 26.0 / 255.0).abs() < f32::EPSILON);
        assert_eq!(Rgb::parse("#12"), None);
        assert_eq!(Rgb::parse("Red"), Rgb::parse("#ff0000"));
    }
}
