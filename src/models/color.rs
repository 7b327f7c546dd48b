use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to `0.0..=1.0` for PDF operators.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }

    pub fn luminance(self) -> f32 {
        0.299 * f32::from(self.r) + 0.587 * f32::from(self.g) + 0.114 * f32::from(self.b)
    }

    /// Black text on light fills, white text on dark fills.
    pub fn contrast_text(self) -> Rgb {
        if self.luminance() > 127.5 {
            Rgb::new(0, 0, 0)
        } else {
            Rgb::new(255, 255, 255)
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Preset {
    EtsuGold,
    EtsuBlue,
    Blue,
    Orange,
    Green,
    Purple,
    Red,
    Teal,
    Yellow,
    Gray,
}

impl Preset {
    pub const ALL: [Preset; 10] = [
        Preset::EtsuGold,
        Preset::EtsuBlue,
        Preset::Blue,
        Preset::Orange,
        Preset::Green,
        Preset::Purple,
        Preset::Red,
        Preset::Teal,
        Preset::Yellow,
        Preset::Gray,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::EtsuGold => "ETSU Gold",
            Preset::EtsuBlue => "ETSU Blue",
            Preset::Blue => "Blue",
            Preset::Orange => "Orange",
            Preset::Green => "Green",
            Preset::Purple => "Purple",
            Preset::Red => "Red",
            Preset::Teal => "Teal",
            Preset::Yellow => "Yellow",
            Preset::Gray => "Gray",
        }
    }

    pub fn rgb(&self) -> Rgb {
        match self {
            Preset::EtsuGold => Rgb::new(0xff, 0xc4, 0x23),
            Preset::EtsuBlue => Rgb::new(0x00, 0x2d, 0x62),
            Preset::Blue => Rgb::new(0x34, 0x98, 0xdb),
            Preset::Orange => Rgb::new(0xe6, 0x7e, 0x22),
            Preset::Green => Rgb::new(0x27, 0xae, 0x60),
            Preset::Purple => Rgb::new(0x9b, 0x59, 0xb6),
            Preset::Red => Rgb::new(0xe7, 0x4c, 0x3c),
            Preset::Teal => Rgb::new(0x1a, 0xbc, 0x9c),
            Preset::Yellow => Rgb::new(0xf1, 0xc4, 0x0f),
            Preset::Gray => Rgb::new(0x7f, 0x8c, 0x8d),
        }
    }

    /// Case-insensitive, ignores spaces, dashes and underscores: "etsu-gold" == "ETSU Gold".
    pub fn from_name(name: &str) -> Option<Self> {
        let key = normalize(name);
        Preset::ALL.into_iter().find(|p| normalize(p.name()) == key)
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Preset(Preset),
    Custom(Rgb),
}

impl Color {
    pub fn resolve(&self) -> Rgb {
        match self {
            Color::Preset(p) => p.rgb(),
            Color::Custom(rgb) => *rgb,
        }
    }

    /// Preset name, or `#rrggbb` / `rrggbb` for a custom color.
    pub fn parse(input: &str) -> Option<Self> {
        let s = input.trim();
        if let Some(p) = Preset::from_name(s) {
            return Some(Color::Preset(p));
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Color::Custom(Rgb::new(channel(0)?, channel(2)?, channel(4)?)))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Preset(Preset::Blue)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Preset(p) => f.write_str(p.name()),
            Color::Custom(rgb) => f.write_str(&rgb.to_hex()),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
