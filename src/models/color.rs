//! Display colors attached to each currency's metadata.

use crate::error::{Error, Result};
use serde::{Serialize, Deserialize};
use std::fmt;

/// An opaque RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const BLACK: Color = Color { red: 0, green: 0, blue: 0 };

    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse a six digit hex color, with or without a leading `#`.
    pub fn from_hex(val: &str) -> Result<Self> {
        let digits = val.trim().trim_start_matches('#');
        if digits.len() != 6 {
            Err(Error::InvalidHexColor(val.into()))?;
        }
        let bytes = hex::decode(digits).map_err(|_| Error::InvalidHexColor(val.into()))?;
        Ok(Self::new(bytes[0], bytes[1], bytes[2]))
    }

    /// Hex encode this color as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{}", hex::encode([self.red, self.green, self.blue]))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Primary and secondary color for a currency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorPair {
    pub primary: Color,
    pub secondary: Color,
}

impl ColorPair {
    pub fn new(primary: Color, secondary: Color) -> Self {
        Self { primary, secondary }
    }

    /// What we show when a currency's colors are missing or garbage.
    pub fn black() -> Self {
        Self::new(Color::BLACK, Color::BLACK)
    }

    /// Parse a wire color list. Anything other than exactly two hex strings is
    /// an error.
    pub fn from_hex_list(vals: &[String]) -> Result<Self> {
        match vals {
            [primary, secondary] => Ok(Self::new(Color::from_hex(primary)?, Color::from_hex(secondary)?)),
            _ => Err(Error::InvalidColors(format!("{} values", vals.len()))),
        }
    }

    pub fn to_hex_list(&self) -> Vec<String> {
        vec![self.primary.to_hex(), self.secondary.to_hex()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex() {
        assert_eq!(Color::from_hex("#f29500").unwrap(), Color::new(0xf2, 0x95, 0x00));
        assert_eq!(Color::from_hex("F29500").unwrap(), Color::new(0xf2, 0x95, 0x00));
        assert_eq!(Color::from_hex("#000000").unwrap(), Color::BLACK);
    }

    #[test]
    fn rejects_bad_hex() {
        assert_eq!(Color::from_hex("#f2950"), Err(Error::InvalidHexColor("#f2950".into())));
        assert_eq!(Color::from_hex("#f2950000"), Err(Error::InvalidHexColor("#f2950000".into())));
        assert_eq!(Color::from_hex("#zz9500"), Err(Error::InvalidHexColor("#zz9500".into())));
        assert_eq!(Color::from_hex(""), Err(Error::InvalidHexColor("".into())));
    }

    #[test]
    fn hex_round_trips() {
        for val in &["#f29500", "#ffffff", "#000000", "#5e6fa5", "#0a0b0c"] {
            let color = Color::from_hex(val).unwrap();
            assert_eq!(&color.to_hex(), val);
            assert_eq!(Color::from_hex(&color.to_hex()).unwrap(), color);
        }
        assert_eq!(format!("{}", Color::new(255, 0, 16)), "#ff0010");
    }

    #[test]
    fn pairs() {
        let pair = ColorPair::from_hex_list(&["#f29500".to_string(), "#ffffff".to_string()]).unwrap();
        assert_eq!(pair.primary, Color::new(0xf2, 0x95, 0x00));
        assert_eq!(pair.secondary, Color::new(0xff, 0xff, 0xff));
        assert_eq!(pair.to_hex_list(), vec!["#f29500".to_string(), "#ffffff".to_string()]);

        let empty: Vec<String> = vec![];
        assert_eq!(ColorPair::from_hex_list(&empty), Err(Error::InvalidColors("0 values".into())));
        assert_eq!(ColorPair::from_hex_list(&["#f29500".to_string()]), Err(Error::InvalidColors("1 values".into())));
        let three = vec!["#f29500".to_string(), "#f29500".to_string(), "#f29500".to_string()];
        assert_eq!(ColorPair::from_hex_list(&three), Err(Error::InvalidColors("3 values".into())));
        assert_eq!(ColorPair::black(), ColorPair::new(Color::BLACK, Color::BLACK));
    }
}
