//! Text measurement backed by real font metrics
//!
//! Labels need advance widths before anything is drawn, so the driver
//! carries a [`TextMeasurer`]. [`FontMeasurer`] reads widths out of a
//! parsed face; [`EstimatedMeasurer`] is the zero-dependency fallback
//! when no face is available, good enough for layout roughing.

use std::fs;
use std::path::Path;

use strobe_core::TextMeasurer;
use ttf_parser::Face;

use crate::error::{AppError, Result};

/// Average glyph width as a fraction of the font size. Used by the
/// estimating measurer and for glyphs a loaded face is missing.
const ESTIMATE_ADVANCE_RATIO: f32 = 0.55;

/// Candidate faces probed by [`FontMeasurer::system`], first parseable
/// file wins.
const SYSTEM_FONT_PATHS: &[&str] = &[
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    // macOS
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/SFNS.ttf",
    // Windows
    "C:\\Windows\\Fonts\\segoeui.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

fn estimate_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * ESTIMATE_ADVANCE_RATIO
}

/// Character-count estimate, no font required.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedMeasurer;

impl TextMeasurer for EstimatedMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> f32 {
        estimate_width(text, font_size)
    }
}

/// Measures through a real face's horizontal advances.
///
/// The raw font bytes are owned here and the face is re-parsed per
/// measurement; parsing is a zero-copy header read, and it keeps the
/// type free of self-references. Construction validates the data once
/// so later parses cannot fail on the same bytes.
pub struct FontMeasurer {
    data: Vec<u8>,
    index: u32,
}

impl FontMeasurer {
    /// Validate and take ownership of raw font bytes.
    pub fn from_data(data: Vec<u8>) -> Result<Self> {
        Self::from_data_with_index(data, 0)
    }

    /// Like [`from_data`](Self::from_data), selecting a face inside a
    /// collection file.
    pub fn from_data_with_index(data: Vec<u8>, index: u32) -> Result<Self> {
        Face::parse(&data, index)?;
        Ok(Self { data, index })
    }

    /// Read a face from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read(path)?;
        Self::from_data(data)
    }

    /// Probe the usual system font locations.
    pub fn system() -> Result<Self> {
        for candidate in SYSTEM_FONT_PATHS {
            let path = Path::new(candidate);
            if !path.exists() {
                continue;
            }
            if let Ok(data) = fs::read(path) {
                if let Ok(font) = Self::from_data(data) {
                    return Ok(font);
                }
            }
        }
        Err(AppError::NoSystemFont)
    }
}

impl TextMeasurer for FontMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> f32 {
        let Ok(face) = Face::parse(&self.data, self.index) else {
            return estimate_width(text, font_size);
        };
        let scale = font_size / face.units_per_em() as f32;

        text.chars()
            .map(|ch| {
                let advance = face
                    .glyph_index(ch)
                    .and_then(|glyph| face.glyph_hor_advance(glyph));
                match advance {
                    Some(units) => units as f32 * scale,
                    // The face lacks this glyph; estimate like the
                    // fallback measurer would.
                    None => font_size * ESTIMATE_ADVANCE_RATIO,
                }
            })
            .sum()
    }
}
