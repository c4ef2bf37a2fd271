//! Font description strings.
//!
//! Config scripts give the font as a single Pango-style string:
//! `[FAMILY-LIST] [STYLE-OPTIONS] [SIZE]`, for example `"Monospace 12"`,
//! `"Fira Code, DejaVu Sans Mono Bold 11"` or `"Iosevka Italic 14px"`.
//! Parsing never fails; unrecognized words are treated as part of the family.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Family used when the description names none.
pub const DEFAULT_FAMILY: &str = "Monospace";

/// Slant of the font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Oblique,
    Italic,
}

/// Weight of the font, numbered like CSS/OpenType weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Thin = 100,
    UltraLight = 200,
    Light = 300,
    Book = 380,
    #[default]
    Normal = 400,
    Medium = 500,
    SemiBold = 600,
    Bold = 700,
    UltraBold = 800,
    Heavy = 900,
}

impl FontWeight {
    pub fn css_weight(self) -> u16 {
        self as u16
    }

    fn keyword(self) -> &'static str {
        match self {
            FontWeight::Thin => "Thin",
            FontWeight::UltraLight => "Ultra-Light",
            FontWeight::Light => "Light",
            FontWeight::Book => "Book",
            FontWeight::Normal => "Normal",
            FontWeight::Medium => "Medium",
            FontWeight::SemiBold => "Semi-Bold",
            FontWeight::Bold => "Bold",
            FontWeight::UltraBold => "Ultra-Bold",
            FontWeight::Heavy => "Heavy",
        }
    }
}

/// Requested size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Points(f64),
    Pixels(f64),
}

/// A parsed font description ready to hand to the terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontDescription {
    /// Family names in fallback order; never empty.
    pub families: Vec<String>,
    pub style: FontStyle,
    pub weight: FontWeight,
    /// `None` leaves the size to the terminal.
    pub size: Option<FontSize>,
}

impl Default for FontDescription {
    fn default() -> Self {
        Self {
            families: vec![DEFAULT_FAMILY.to_string()],
            style: FontStyle::default(),
            weight: FontWeight::default(),
            size: None,
        }
    }
}

enum StyleWord {
    Style(FontStyle),
    Weight(FontWeight),
}

fn style_word(word: &str) -> Option<StyleWord> {
    let word = word.to_ascii_lowercase();
    let parsed = match word.as_str() {
        "normal" | "roman" | "regular" => StyleWord::Weight(FontWeight::Normal),
        "italic" => StyleWord::Style(FontStyle::Italic),
        "oblique" => StyleWord::Style(FontStyle::Oblique),
        "thin" => StyleWord::Weight(FontWeight::Thin),
        "ultra-light" | "extra-light" => StyleWord::Weight(FontWeight::UltraLight),
        "light" => StyleWord::Weight(FontWeight::Light),
        "book" => StyleWord::Weight(FontWeight::Book),
        "medium" => StyleWord::Weight(FontWeight::Medium),
        "semi-bold" | "demi-bold" | "semibold" => StyleWord::Weight(FontWeight::SemiBold),
        "bold" => StyleWord::Weight(FontWeight::Bold),
        "ultra-bold" | "extra-bold" => StyleWord::Weight(FontWeight::UltraBold),
        "heavy" | "black" => StyleWord::Weight(FontWeight::Heavy),
        _ => return None,
    };
    Some(parsed)
}

fn parse_size(word: &str) -> Option<FontSize> {
    let (number, pixels) = match word.strip_suffix("px") {
        Some(number) => (number, true),
        None => (word, false),
    };
    let value: f64 = number.parse().ok()?;
    if !value.is_finite() || value <= 0.0 {
        return None;
    }
    Some(if pixels {
        FontSize::Pixels(value)
    } else {
        FontSize::Points(value)
    })
}

impl FontDescription {
    /// Parse a Pango-style description string.
    pub fn parse(text: &str) -> Self {
        let mut words: Vec<&str> = text.split_whitespace().collect();
        let mut description = Self::default();

        if let Some(size) = words.last().and_then(|w| parse_size(w)) {
            description.size = Some(size);
            words.pop();
        }

        // Style options sit between the family list and the size.
        while let Some(word) = words.last() {
            match style_word(word) {
                Some(StyleWord::Style(style)) => description.style = style,
                Some(StyleWord::Weight(weight)) => description.weight = weight,
                None => break,
            }
            words.pop();
        }

        let families: Vec<String> = words
            .join(" ")
            .split(',')
            .map(str::trim)
            .filter(|family| !family.is_empty())
            .map(str::to_string)
            .collect();
        if !families.is_empty() {
            description.families = families;
        }

        description
    }

    /// First family in the fallback list.
    pub fn primary_family(&self) -> &str {
        self.families
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_FAMILY)
    }
}

impl fmt::Display for FontDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.families.join(", "))?;
        if self.weight != FontWeight::Normal {
            write!(f, " {}", self.weight.keyword())?;
        }
        match self.style {
            FontStyle::Normal => {}
            FontStyle::Italic => write!(f, " Italic")?,
            FontStyle::Oblique => write!(f, " Oblique")?,
        }
        match self.size {
            Some(FontSize::Points(points)) => write!(f, " {points}")?,
            Some(FontSize::Pixels(pixels)) => write!(f, " {pixels}px")?,
            None => {}
        }
        Ok(())
    }
}
