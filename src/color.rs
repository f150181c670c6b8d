use std::collections::BTreeMap;
use std::fmt;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Rgb – a serializable sRGB colour
// ---------------------------------------------------------------------------

/// An 8-bit sRGB colour. Serialized as a `#rrggbb` string so the browser
/// front end can hand it straight to the charting library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Error, Debug)]
#[error("'{0}' is not a #rrggbb colour")]
pub struct ParseColorError(String);

impl Rgb {
    pub const GRAY: Rgb = Rgb::new(160, 160, 160);
    pub const SUCCESS: Rgb = Rgb::new(46, 160, 67);
    pub const FAILURE: Rgb = Rgb::new(214, 39, 40);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let err = || ParseColorError(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_string()
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&s)
    }
}

impl From<Rgb> for Color32 {
    fn from(c: Rgb) -> Self {
        Color32::from_rgb(c.r, c.g, c.b)
    }
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Rgb> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Rgb::new(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: category label → Rgb
// ---------------------------------------------------------------------------

/// Maps the labels of one categorical column to distinct colours.
///
/// Built over the whole table so a label keeps its colour whatever the
/// current filter is.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Rgb>,
    default_color: Rgb,
}

impl ColorMap {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        labels.sort();
        labels.dedup();

        let palette = generate_palette(labels.len());
        let mapping = labels.into_iter().zip(palette).collect();

        ColorMap {
            mapping,
            default_color: Rgb::GRAY,
        }
    }

    /// Look up the colour for a label; unknown labels are gray.
    pub fn color_for(&self, label: &str) -> Rgb {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Return the legend entries (label → colour).
    pub fn legend_entries(&self) -> Vec<(String, Rgb)> {
        self.mapping
            .iter()
            .map(|(label, c)| (label.clone(), *c))
            .collect()
    }
}
