use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Context, Error, Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// RGB color, (de)serialized as `#RRGGBB`
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color(0xFF, 0xFF, 0xFF);
    pub const RED: Color = Color(0xFF, 0x00, 0x00);
    pub const GREEN: Color = Color(0x00, 0x80, 0x00);
    pub const BLUE: Color = Color(0x00, 0x00, 0xFF);
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "invalid color: {s:?}, expected #RRGGBB"
        );
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).with_context(|| format!("invalid color: {s:?}"))
        };
        Ok(Color(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
