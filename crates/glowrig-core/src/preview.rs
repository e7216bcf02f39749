//! Local preview formatting for the panel's form state.
//!
//! Pure string builders, no device effect. The panel re-renders these every
//! frame; unchanged inputs always produce identical output.

/// CSS-style color string for the preview swatch, e.g. `rgb(10,20,30)`.
pub fn css_color(r: u8, g: u8, b: u8) -> String {
    format!("rgb({},{},{})", r, g, b)
}

/// Channel readout under the swatch, e.g. `R: 10 G: 20 B: 30`.
pub fn channel_text(r: u8, g: u8, b: u8) -> String {
    format!("R: {} G: {} B: {}", r, g, b)
}

/// Stepper preview, e.g. `Steps: 5`.
pub fn steps_text(steps: i64) -> String {
    format!("Steps: {}", steps)
}
