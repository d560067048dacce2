//! The r/place color palette.
//!
//! This module provides the [`Color`] enum covering the 32 colors of the
//! canvas palette. [`PlaceClient::write_pixel`](crate::PlaceClient::write_pixel)
//! accepts either a [`Color`] or a raw palette index.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A color of the r/place palette.
///
/// Each variant maps to its palette index, which is what the canvas
/// mutation expects, and to its RGB hex value.
///
/// # Example
///
/// ```rust
/// use reddit_place::Color;
///
/// assert_eq!(Color::Red.index(), 2);
/// assert_eq!(Color::Red.hex(), "#FF4500");
///
/// let color: Color = "dark_blue".parse().unwrap();
/// assert_eq!(color, Color::DarkBlue);
/// assert_eq!(Color::try_from(31).unwrap(), Color::White);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    /// `#6D001A`
    Burgundy,
    /// `#BE0039`
    DarkRed,
    /// `#FF4500`
    Red,
    /// `#FFA800`
    Orange,
    /// `#FFD635`
    Yellow,
    /// `#FFF8B8`
    PaleYellow,
    /// `#00A368`
    DarkGreen,
    /// `#00CC78`
    Green,
    /// `#7EED56`
    LightGreen,
    /// `#00756F`
    DarkTeal,
    /// `#009EAA`
    Teal,
    /// `#00CCC0`
    LightTeal,
    /// `#2450A4`
    DarkBlue,
    /// `#3690EA`
    Blue,
    /// `#51E9F4`
    LightBlue,
    /// `#493AC1`
    Indigo,
    /// `#6A5CFF`
    Periwinkle,
    /// `#94B3FF`
    Lavender,
    /// `#811E9F`
    DarkPurple,
    /// `#B44AC0`
    Purple,
    /// `#E4ABFF`
    PalePurple,
    /// `#DE107F`
    Magenta,
    /// `#FF3881`
    Pink,
    /// `#FF99AA`
    LightPink,
    /// `#6D482F`
    DarkBrown,
    /// `#9C6926`
    Brown,
    /// `#FFB470`
    Beige,
    /// `#000000`
    Black,
    /// `#515252`
    DarkGray,
    /// `#898D90`
    Gray,
    /// `#D4D7D9`
    LightGray,
    /// `#FFFFFF`
    White,
}

/// Error returned when a value does not name a palette color.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnknownColorError {
    /// The index is outside the palette.
    #[error("Color index {index} is outside the palette (0-31)")]
    Index {
        /// The rejected index.
        index: i64,
    },

    /// The name matches no palette color.
    #[error("Unknown color name '{name}'")]
    Name {
        /// The rejected name.
        name: String,
    },
}

impl Color {
    /// All palette colors, ordered by index.
    pub const ALL: [Self; 32] = [
        Self::Burgundy,
        Self::DarkRed,
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::PaleYellow,
        Self::DarkGreen,
        Self::Green,
        Self::LightGreen,
        Self::DarkTeal,
        Self::Teal,
        Self::LightTeal,
        Self::DarkBlue,
        Self::Blue,
        Self::LightBlue,
        Self::Indigo,
        Self::Periwinkle,
        Self::Lavender,
        Self::DarkPurple,
        Self::Purple,
        Self::PalePurple,
        Self::Magenta,
        Self::Pink,
        Self::LightPink,
        Self::DarkBrown,
        Self::Brown,
        Self::Beige,
        Self::Black,
        Self::DarkGray,
        Self::Gray,
        Self::LightGray,
        Self::White,
    ];

    /// Returns the palette index sent to the canvas.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the color for a palette index, if any.
    #[must_use]
    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Returns the RGB value as an uppercase `#RRGGBB` string.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Burgundy => "#6D001A",
            Self::DarkRed => "#BE0039",
            Self::Red => "#FF4500",
            Self::Orange => "#FFA800",
            Self::Yellow => "#FFD635",
            Self::PaleYellow => "#FFF8B8",
            Self::DarkGreen => "#00A368",
            Self::Green => "#00CC78",
            Self::LightGreen => "#7EED56",
            Self::DarkTeal => "#00756F",
            Self::Teal => "#009EAA",
            Self::LightTeal => "#00CCC0",
            Self::DarkBlue => "#2450A4",
            Self::Blue => "#3690EA",
            Self::LightBlue => "#51E9F4",
            Self::Indigo => "#493AC1",
            Self::Periwinkle => "#6A5CFF",
            Self::Lavender => "#94B3FF",
            Self::DarkPurple => "#811E9F",
            Self::Purple => "#B44AC0",
            Self::PalePurple => "#E4ABFF",
            Self::Magenta => "#DE107F",
            Self::Pink => "#FF3881",
            Self::LightPink => "#FF99AA",
            Self::DarkBrown => "#6D482F",
            Self::Brown => "#9C6926",
            Self::Beige => "#FFB470",
            Self::Black => "#000000",
            Self::DarkGray => "#515252",
            Self::Gray => "#898D90",
            Self::LightGray => "#D4D7D9",
            Self::White => "#FFFFFF",
        }
    }

    /// Returns the snake_case name of the color.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Burgundy => "burgundy",
            Self::DarkRed => "dark_red",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::PaleYellow => "pale_yellow",
            Self::DarkGreen => "dark_green",
            Self::Green => "green",
            Self::LightGreen => "light_green",
            Self::DarkTeal => "dark_teal",
            Self::Teal => "teal",
            Self::LightTeal => "light_teal",
            Self::DarkBlue => "dark_blue",
            Self::Blue => "blue",
            Self::LightBlue => "light_blue",
            Self::Indigo => "indigo",
            Self::Periwinkle => "periwinkle",
            Self::Lavender => "lavender",
            Self::DarkPurple => "dark_purple",
            Self::Purple => "purple",
            Self::PalePurple => "pale_purple",
            Self::Magenta => "magenta",
            Self::Pink => "pink",
            Self::LightPink => "light_pink",
            Self::DarkBrown => "dark_brown",
            Self::Brown => "brown",
            Self::Beige => "beige",
            Self::Black => "black",
            Self::DarkGray => "dark_gray",
            Self::Gray => "gray",
            Self::LightGray => "light_gray",
            Self::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = UnknownColorError;

    /// Parses a color name, ignoring case and accepting `-` or space for `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|color| color.name() == normalized)
            .ok_or_else(|| UnknownColorError::Name {
                name: s.to_string(),
            })
    }
}

impl TryFrom<i64> for Color {
    type Error = UnknownColorError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(UnknownColorError::Index { index })
    }
}

impl From<Color> for i64 {
    fn from(color: Color) -> Self {
        Self::from(color.index())
    }
}
