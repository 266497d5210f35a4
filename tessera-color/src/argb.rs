//! Packed 32-bit colors.
//!
//! [`Argb`] is the boundary type of this crate: seeds come in as `Argb`,
//! resolved roles go out as `Argb`. Each channel is 8 bits, laid out as
//! `0xAARRGGBB`.
//!
//! ```
//! use tessera_color::Argb;
//!
//! let seed: Argb = "#6750a4".parse().unwrap();
//! assert_eq!(seed, Argb(0xff6750a4));
//! assert_eq!(seed.red(), 0x67);
//! assert_eq!(seed.to_string(), "#ff6750a4");
//! ```

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::cie;

/// A color packed as `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque black.
    pub const BLACK: Argb = Argb(0xff00_0000);
    /// Opaque white.
    pub const WHITE: Argb = Argb(0xffff_ffff);

    /// Creates an opaque color from red, green and blue channels.
    #[inline]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::from_argb(0xff, red, green, blue)
    }

    /// Creates a color from all four channels.
    #[inline]
    pub const fn from_argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Argb(((alpha as u32) << 24) | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Alpha channel.
    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Returns `true` when the alpha channel is `0xff`.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0xff
    }

    /// The same color with alpha forced to `0xff`.
    ///
    /// Seeds are taken through this before any color math, so a translucent
    /// seed behaves exactly like its opaque counterpart.
    #[inline]
    pub const fn opaque(self) -> Self {
        Argb(self.0 | 0xff00_0000)
    }

    /// Returns a copy with the given alpha channel.
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Argb((self.0 & 0x00ff_ffff) | ((alpha as u32) << 24))
    }

    /// The red, green and blue channels as an array.
    #[inline]
    pub const fn to_rgb(self) -> [u8; 3] {
        [self.red(), self.green(), self.blue()]
    }

    /// CIE L* (perceptual lightness, 0 to 100) of this color.
    ///
    /// This is the "tone" of the color in HCT.
    pub fn lstar(self) -> f64 {
        cie::lstar_from_argb(self)
    }
}

impl From<u32> for Argb {
    #[inline]
    fn from(value: u32) -> Self {
        Argb(value)
    }
}

impl From<Argb> for u32 {
    #[inline]
    fn from(argb: Argb) -> Self {
        argb.0
    }
}

impl From<[u8; 3]> for Argb {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_rgb(r, g, b)
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

impl fmt::LowerHex for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

/// Errors produced when parsing an [`Argb`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseArgbError {
    /// The input was empty after trimming the prefix.
    #[error("empty color string")]
    Empty,
    /// The number of hex digits was not 3, 6 or 8.
    #[error("invalid hex length {0}, expected 3, 6 or 8 digits")]
    InvalidLength(usize),
    /// A character was not a hex digit.
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

impl FromStr for Argb {
    type Err = ParseArgbError;

    /// Parses `#rgb`, `#rrggbb` or `#aarrggbb`; the `#` may also be `0x` or
    /// absent. Six and three digit forms are opaque.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.is_empty() {
            return Err(ParseArgbError::Empty);
        }

        let mut nibbles = Vec::with_capacity(8);
        for c in digits.chars() {
            let value = c.to_digit(16).ok_or(ParseArgbError::InvalidDigit(c))?;
            nibbles.push(value);
        }

        let packed = |ns: &[u32]| ns.iter().fold(0u32, |acc, n| (acc << 4) | n);
        match nibbles.len() {
            3 => {
                let expand = |n: u32| (n * 17) as u8;
                Ok(Argb::from_rgb(
                    expand(nibbles[0]),
                    expand(nibbles[1]),
                    expand(nibbles[2]),
                ))
            }
            6 => Ok(Argb(0xff00_0000 | packed(&nibbles))),
            8 => Ok(Argb(packed(&nibbles))),
            len => Err(ParseArgbError::InvalidLength(len)),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Argb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Argb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        let c = Argb(0x80123456);
        assert_eq!(c.alpha(), 0x80);
        assert_eq!(c.red(), 0x12);
        assert_eq!(c.green(), 0x34);
        assert_eq!(c.blue(), 0x56);
        assert!(!c.is_opaque());
        assert_eq!(c.opaque(), Argb(0xff123456));
        assert_eq!(c.with_alpha(0x01), Argb(0x01123456));
        assert_eq!(Argb::from_rgb(0x12, 0x34, 0x56), Argb(0xff123456));
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!("#0000ff".parse::<Argb>(), Ok(Argb(0xff0000ff)));
        assert_eq!("0xff0000ff".parse::<Argb>(), Ok(Argb(0xff0000ff)));
        assert_eq!("80FF0000".parse::<Argb>(), Ok(Argb(0x80ff0000)));
        assert_eq!("#f0a".parse::<Argb>(), Ok(Argb(0xffff00aa)));
        assert_eq!(" #6750A4 ".parse::<Argb>(), Ok(Argb(0xff6750a4)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("#".parse::<Argb>(), Err(ParseArgbError::Empty));
        assert_eq!("#12345".parse::<Argb>(), Err(ParseArgbError::InvalidLength(5)));
        assert_eq!("#12345g".parse::<Argb>(), Err(ParseArgbError::InvalidDigit('g')));
    }

    #[test]
    fn test_display_round_trips() {
        let c = Argb(0xff6750a4);
        assert_eq!(c.to_string(), "#ff6750a4");
        assert_eq!(c.to_string().parse::<Argb>(), Ok(c));
        assert_eq!(format!("{c:x}"), "ff6750a4");
    }

    #[test]
    fn test_lstar_extremes() {
        assert!(Argb::BLACK.lstar().abs() < 1e-9);
        assert!((Argb::WHITE.lstar() - 100.0).abs() < 1e-4);
    }
}
