//! Built-in default Position/Style tables per line role.
//!
//! Loaded once at first use into process-wide read-only maps; every
//! supported role is always renderable even when absent from the theme.
//! Merging a theme patch over these defaults is the explicit override
//! contract: a present patch field replaces the default field wholesale.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::theme::{
    HAlign, LineRole, Position, PositionMode, PositionPatch, Style, StylePatch, VAlign,
};
use crate::types::{Percent, Sides};

/// Render order used when a theme supplies no `lineOrder`.
/// `translationOverflow` is deliberately absent: its text is appended to
/// `translation` unless a legacy theme lists it explicitly.
pub const DEFAULT_LINE_ORDER: [LineRole; 12] = [
    LineRole::Title,
    LineRole::TitleTranslation,
    LineRole::Subtitle,
    LineRole::SubtitleTranslation,
    LineRole::Description,
    LineRole::DescriptionTranslation,
    LineRole::Original,
    LineRole::Transliteration,
    LineRole::Translation,
    LineRole::Reference,
    LineRole::ReferenceTranslation,
    LineRole::ReferenceEnglish,
];

fn absolute(x: f64, y: f64, width: f64, height: f64) -> Position {
    Position {
        x: Percent(x),
        y: Percent(y),
        width: Percent(width),
        height: Percent(height),
        padding: Sides::default(),
        align_h: HAlign::Center,
        align_v: VAlign::Middle,
        position_mode: PositionMode::Absolute,
        flow_anchor: None,
        flow_gap: Percent::ZERO,
        auto_height: false,
    }
}

fn flow(anchor: LineRole, gap: f64, height: f64) -> Position {
    Position {
        position_mode: PositionMode::Flow,
        flow_anchor: Some(anchor),
        flow_gap: Percent(gap),
        auto_height: true,
        ..absolute(0.0, 0.0, 100.0, height)
    }
}

fn build_position(role: LineRole) -> Position {
    match role {
        LineRole::Title => absolute(0.0, 3.0, 100.0, 8.0),
        LineRole::TitleTranslation => absolute(0.0, 11.0, 100.0, 6.0),
        LineRole::Subtitle => absolute(0.0, 17.0, 100.0, 5.0),
        LineRole::SubtitleTranslation => absolute(0.0, 22.0, 100.0, 4.0),
        LineRole::Description => absolute(0.0, 26.0, 100.0, 4.0),
        LineRole::DescriptionTranslation => absolute(0.0, 30.0, 100.0, 4.0),
        LineRole::Original => Position {
            auto_height: true,
            ..absolute(0.0, 35.0, 100.0, 18.0)
        },
        LineRole::Transliteration => flow(LineRole::Original, 1.5, 14.0),
        LineRole::Translation => flow(LineRole::Transliteration, 1.5, 14.0),
        LineRole::TranslationOverflow => flow(LineRole::Translation, 1.0, 10.0),
        LineRole::Reference => absolute(0.0, 86.0, 100.0, 5.0),
        LineRole::ReferenceTranslation => absolute(0.0, 91.0, 100.0, 4.0),
        LineRole::ReferenceEnglish => absolute(0.0, 95.0, 100.0, 4.0),
    }
}

fn style(font_size: f64, weight: u16) -> Style {
    Style {
        font_size,
        weight,
        color: "#ffffff".to_string(),
        opacity: 1.0,
        visible: true,
        background: None,
        background_opacity: 1.0,
        border: None,
        corner_radius: 0.0,
    }
}

fn build_style(role: LineRole) -> Style {
    match role {
        LineRole::Title => style(120.0, 700),
        LineRole::TitleTranslation => style(80.0, 400),
        LineRole::Subtitle => style(70.0, 400),
        LineRole::SubtitleTranslation => style(55.0, 400),
        LineRole::Description => style(55.0, 400),
        LineRole::DescriptionTranslation => style(45.0, 400),
        LineRole::Original => style(100.0, 700),
        LineRole::Transliteration => style(75.0, 400),
        LineRole::Translation => style(85.0, 400),
        LineRole::TranslationOverflow => style(85.0, 400),
        LineRole::Reference => style(60.0, 400),
        LineRole::ReferenceTranslation => style(50.0, 400),
        LineRole::ReferenceEnglish => style(50.0, 400),
    }
}

static DEFAULT_POSITIONS: LazyLock<HashMap<LineRole, Position>> =
    LazyLock::new(|| LineRole::ALL.iter().map(|&r| (r, build_position(r))).collect());

static DEFAULT_STYLES: LazyLock<HashMap<LineRole, Style>> =
    LazyLock::new(|| LineRole::ALL.iter().map(|&r| (r, build_style(r))).collect());

/// Built-in default Position for a role.
pub fn default_position(role: LineRole) -> &'static Position {
    &DEFAULT_POSITIONS[&role]
}

/// Built-in default Style for a role.
pub fn default_style(role: LineRole) -> &'static Style {
    &DEFAULT_STYLES[&role]
}

/// Merge a theme patch over the role's default Position.
pub fn merge_position(role: LineRole, patch: Option<&PositionPatch>) -> Position {
    let base = default_position(role);
    let Some(p) = patch else {
        return base.clone();
    };
    Position {
        x: p.x.unwrap_or(base.x),
        y: p.y.unwrap_or(base.y),
        width: p.width.unwrap_or(base.width),
        height: p.height.unwrap_or(base.height),
        padding: p.padding.unwrap_or(base.padding),
        align_h: p.align_h.unwrap_or(base.align_h),
        align_v: p.align_v.unwrap_or(base.align_v),
        position_mode: p.position_mode.unwrap_or(base.position_mode),
        // a patch that sets positionMode without an anchor keeps the
        // default anchor; an explicit anchor always wins
        flow_anchor: p.flow_anchor.or(base.flow_anchor),
        flow_gap: p.flow_gap.unwrap_or(base.flow_gap),
        auto_height: p.auto_height.unwrap_or(base.auto_height),
    }
}

/// Merge a theme patch over the role's default Style. The font-size
/// multiplier is clamped to be non-negative.
pub fn merge_style(role: LineRole, patch: Option<&StylePatch>) -> Style {
    let base = default_style(role);
    let Some(p) = patch else {
        return base.clone();
    };
    Style {
        font_size: p.font_size.unwrap_or(base.font_size).max(0.0),
        weight: p.weight.unwrap_or(base.weight),
        color: p.color.clone().unwrap_or_else(|| base.color.clone()),
        opacity: p.opacity.unwrap_or(base.opacity),
        visible: p.visible.unwrap_or(base.visible),
        background: match &p.background {
            Some(over) => over.clone(),
            None => base.background.clone(),
        },
        background_opacity: p.background_opacity.unwrap_or(base.background_opacity),
        border: match &p.border {
            Some(over) => over.clone(),
            None => base.border.clone(),
        },
        corner_radius: p.corner_radius.unwrap_or(base.corner_radius),
    }
}
