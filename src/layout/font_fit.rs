//! Font-fit solver: the largest font-size multiplier that keeps a text
//! block inside its bounding box.
//!
//! This is an estimate built on average glyph widths, not a pixel-true
//! measurement. Hosts that need pixel truth re-measure after layout and
//! may re-invoke; the solver itself is deterministic and side-effect
//! free for identical inputs, and it never fails — only approximates.

/// Lower bound of the binary search.
const SEARCH_MIN: f64 = 0.3;
/// Result range (spec: `[0.4, 2.5]`).
pub const MIN_SCALE: f64 = 0.4;
pub const MAX_SCALE: f64 = 2.5;

const ITERATIONS: u32 = 15;
/// Line height as a multiple of font size.
const LINE_HEIGHT: f64 = 1.35;
/// Text may occupy at most this fraction of the box height.
const FILL_FRACTION: f64 = 0.85;
/// Safety buffer on the estimated wrapped-line count.
const WRAP_BUFFER: f64 = 1.10;
/// Average glyph width as a fraction of font size, per script.
/// Hebrew/Arabic glyphs run wider than Latin.
const GLYPH_FRAC_RTL: f64 = 0.58;
const GLYPH_FRAC_LATIN: f64 = 0.50;

/// Estimated wrapped-line count for `text` at the given effective font
/// size, including the safety buffer.
fn lines_needed(text: &str, font_px: f64, box_w_px: f64, glyph_frac: f64) -> f64 {
    let glyph_w = font_px * glyph_frac;
    let chars_per_line = if glyph_w > 0.0 {
        (box_w_px / glyph_w).floor().max(1.0)
    } else {
        1.0
    };
    let mut lines = 0.0;
    for line in text.split('\n') {
        let chars = line.chars().count().max(1) as f64;
        lines += (chars / chars_per_line).ceil();
    }
    lines * WRAP_BUFFER
}

/// Compute the scale factor in `[0.4, 2.5]` to multiply onto the
/// requested font size so the estimated wrapped text fits within 85% of
/// the box height. `rtl` selects the script-dependent glyph width.
pub fn font_fit_scale(text: &str, font_px: f64, box_w_px: f64, box_h_px: f64, rtl: bool) -> f64 {
    if font_px <= 0.0 {
        // nothing to fit; neutral scale
        return 1.0;
    }
    if box_w_px <= 0.0 || box_h_px <= 0.0 {
        return MIN_SCALE;
    }
    let glyph_frac = if rtl { GLYPH_FRAC_RTL } else { GLYPH_FRAC_LATIN };
    let budget = FILL_FRACTION * box_h_px;

    let feasible = |scale: f64| {
        let eff_font = font_px * scale;
        lines_needed(text, eff_font, box_w_px, glyph_frac) * eff_font * LINE_HEIGHT <= budget
    };

    // the search interval is open at the top; test the cap directly
    if feasible(MAX_SCALE) {
        return MAX_SCALE;
    }

    let mut lo = SEARCH_MIN;
    let mut hi = MAX_SCALE;
    let mut best = SEARCH_MIN;
    for _ in 0..ITERATIONS {
        let mid = (lo + hi) / 2.0;
        if feasible(mid) {
            best = mid;
            lo = mid;
        } else {
            hi = mid;
        }
    }
    best.clamp(MIN_SCALE, MAX_SCALE)
}
