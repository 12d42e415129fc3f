/// Horizontal padding kept between fallback text and the avatar edge, in pixels.
pub const DEFAULT_GAP: f64 = 4.0;

/// Scale factor that fits text `text_width` wide inside a node `node_width` wide,
/// leaving `gap` pixels on each side. Never scales up.
pub fn text_scale(text_width: f64, node_width: f64, gap: f64) -> f64 {
    if !text_width.is_finite() || !node_width.is_finite() || text_width <= 0.0 || node_width <= 0.0
    {
        return 1.0;
    }
    let gap = if gap.is_finite() { gap.max(0.0) } else { 0.0 };
    let available = node_width - gap * 2.0;
    if available < text_width {
        (available / text_width).max(0.0)
    } else {
        1.0
    }
}

/// Inline transform for the text fallback span.
pub fn scale_style(scale: f64) -> String {
    format!("transform:scale({})", trim_float(scale))
}

fn trim_float(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    format!("{rounded}")
}
