//! Closed note color palette.
//!
//! # Invariants
//! - Persisted colors are signed 32-bit packed ARGB values.
//! - Any value outside the palette resolves to `NoteColor::Default`.

/// Luminance below this threshold is rendered with light text.
const DARK_LUMINANCE_THRESHOLD: f64 = 0.3;

/// Palette entries available for note tagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NoteColor {
    #[default]
    Default,
    Red,
    Green,
    Blue,
    Yellow,
    Black,
    Purple,
    Orange,
    Gray,
    PurpleLight,
}

/// Text tone that stays readable on top of a note color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTone {
    /// Light text, used on dark backgrounds.
    Light,
    /// Dark text, used on light backgrounds.
    Dark,
}

impl NoteColor {
    /// Every palette entry in display order.
    pub const ALL: [NoteColor; 10] = [
        NoteColor::Default,
        NoteColor::Red,
        NoteColor::Green,
        NoteColor::Blue,
        NoteColor::Yellow,
        NoteColor::Black,
        NoteColor::Purple,
        NoteColor::Orange,
        NoteColor::Gray,
        NoteColor::PurpleLight,
    ];

    /// Returns the unsigned packed ARGB value.
    pub const fn argb_u32(self) -> u32 {
        match self {
            NoteColor::Default => 0xFFFF_FFFF,
            NoteColor::Red => 0xFFE5_7373,
            NoteColor::Green => 0xFF81_C784,
            NoteColor::Blue => 0xFF64_B5F6,
            NoteColor::Yellow => 0xFFFF_D54F,
            NoteColor::Black => 0xFF00_0000,
            NoteColor::Purple => 0xFFBA_68C8,
            NoteColor::Orange => 0xFFFF_8A65,
            NoteColor::Gray => 0xFF90_A4AE,
            NoteColor::PurpleLight => 0xFFD8_D8F6,
        }
    }

    /// Returns the value in its persisted (signed) form.
    pub const fn to_argb(self) -> i32 {
        self.argb_u32() as i32
    }

    /// Resolves a persisted value to a palette entry.
    ///
    /// Unknown, transparent or unspecified values fall back to `Default`.
    pub fn from_argb(argb: i32) -> Self {
        Self::ALL
            .into_iter()
            .find(|color| color.to_argb() == argb)
            .unwrap_or_default()
    }

    /// Stable upper-case label (`DEFAULT`, `RED`, ...).
    pub fn label(self) -> &'static str {
        match self {
            NoteColor::Default => "DEFAULT",
            NoteColor::Red => "RED",
            NoteColor::Green => "GREEN",
            NoteColor::Blue => "BLUE",
            NoteColor::Yellow => "YELLOW",
            NoteColor::Black => "BLACK",
            NoteColor::Purple => "PURPLE",
            NoteColor::Orange => "ORANGE",
            NoteColor::Gray => "GRAY",
            NoteColor::PurpleLight => "PURPLE_LIGHT",
        }
    }

    /// Parses a label produced by [`NoteColor::label`], case-insensitively.
    pub fn from_label(value: &str) -> Option<Self> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|color| color.label().eq_ignore_ascii_case(normalized))
    }

    /// Relative luminance in `[0, 1]` using linearized sRGB channels.
    pub fn luminance(self) -> f64 {
        let argb = self.argb_u32();
        let red = linearize((argb >> 16) & 0xFF);
        let green = linearize((argb >> 8) & 0xFF);
        let blue = linearize(argb & 0xFF);
        0.2126 * red + 0.7152 * green + 0.0722 * blue
    }

    /// Returns whether text on this color should be light.
    pub fn is_dark(self) -> bool {
        self.luminance() < DARK_LUMINANCE_THRESHOLD
    }

    /// Text tone readable on this color.
    pub fn text_tone(self) -> TextTone {
        if self.is_dark() {
            TextTone::Light
        } else {
            TextTone::Dark
        }
    }
}

fn linearize(channel: u32) -> f64 {
    let value = f64::from(channel) / 255.0;
    if value <= 0.040_45 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::{NoteColor, TextTone};

    #[test]
    fn every_palette_entry_round_trips_through_argb() {
        for color in NoteColor::ALL {
            assert_eq!(NoteColor::from_argb(color.to_argb()), color);
        }
    }

    #[test]
    fn default_is_opaque_white() {
        assert_eq!(NoteColor::Default.to_argb(), -1);
    }

    #[test]
    fn dark_colors_get_light_text() {
        assert_eq!(NoteColor::Black.text_tone(), TextTone::Light);
        assert_eq!(NoteColor::Purple.text_tone(), TextTone::Light);
        assert_eq!(NoteColor::Default.text_tone(), TextTone::Dark);
        assert_eq!(NoteColor::Yellow.text_tone(), TextTone::Dark);
    }

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!(
            NoteColor::from_label(" purple_light "),
            Some(NoteColor::PurpleLight)
        );
        assert_eq!(NoteColor::from_label("teal"), None);
    }
}
