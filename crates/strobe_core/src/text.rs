//! Text measurement seam
//!
//! Labels size themselves when they are built, so the builder needs a
//! width oracle before anything is drawn. The engine does not rasterize
//! text; it only asks how wide a run would be.

/// Measures the advance width of a single-line text run.
pub trait TextMeasurer {
    /// Width in logical pixels of `text` rendered at `font_size`.
    /// The empty string measures zero.
    fn measure(&self, text: &str, font_size: f32) -> f32;
}
