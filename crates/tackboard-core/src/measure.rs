//! Text measurement and the dynamic width-constraint computation.

/// Horizontal padding added around measured text.
pub const TEXT_PADDING: f64 = 20.0;
/// Minimum width a field may request.
pub const MIN_FIELD_WIDTH: f64 = 50.0;
/// Margin kept between a field and the host view edges.
pub const HOST_MARGIN: f64 = 40.0;

/// Measures rendered text width for a given font size.
///
/// The real measurement lives in the host text stack; implementations only
/// need to be monotone in the rendered width.
pub trait TextMeasurer {
    /// Width of `text` when rendered at `font_size`.
    fn text_width(&self, text: &str, font_size: f64) -> f64;
}

/// Approximate measurer based on character count.
///
/// Average character width is an empirically determined fraction of the
/// font size; the widest line governs multi-line content.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharWidthMeasurer;

impl TextMeasurer for CharWidthMeasurer {
    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        let max_line_len = text
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        max_line_len as f64 * font_size * 0.55
    }
}

/// Compute the width-constraint value for a rendered text width.
///
/// The result stays within `[MIN_FIELD_WIDTH, host_width - HOST_MARGIN]`
/// and grows with the rendered width inside that range.
pub fn constraint_width(rendered_width: f64, host_width: f64) -> f64 {
    let mut width = (rendered_width + TEXT_PADDING).max(MIN_FIELD_WIDTH);
    if width > host_width - HOST_MARGIN {
        width = host_width - HOST_MARGIN;
    }
    width
}
