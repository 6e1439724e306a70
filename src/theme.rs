//! Theme data model: semantic line roles, per-role positions and styles,
//! decorative background boxes, and the slide background.
//!
//! A theme never stores resolved values. Per-role entries are *patches*
//! (every field optional) that are merged over the built-in defaults by
//! [`crate::layout::defaults::merge_position`] and
//! [`crate::layout::defaults::merge_style`], making override precedence an
//! explicit contract: a field present in the patch replaces the default
//! field wholesale (shallow merge, nested objects replaced as a unit).

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Canvas, Percent, Rect, Sides};

/// Semantic role of a text line on a themed slide.
///
/// Roles are the only indirection between slide content and theme
/// geometry: content supplies text per role, the theme supplies a
/// Position and Style per role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineRole {
    Original,
    Transliteration,
    Translation,
    TranslationOverflow,
    Title,
    TitleTranslation,
    Subtitle,
    SubtitleTranslation,
    Description,
    DescriptionTranslation,
    Reference,
    ReferenceTranslation,
    ReferenceEnglish,
}

impl LineRole {
    /// Every role the engine knows how to render.
    pub const ALL: [LineRole; 13] = [
        LineRole::Original,
        LineRole::Transliteration,
        LineRole::Translation,
        LineRole::TranslationOverflow,
        LineRole::Title,
        LineRole::TitleTranslation,
        LineRole::Subtitle,
        LineRole::SubtitleTranslation,
        LineRole::Description,
        LineRole::DescriptionTranslation,
        LineRole::Reference,
        LineRole::ReferenceTranslation,
        LineRole::ReferenceEnglish,
    ];

    /// Role-name RTL fallback, used only when the rendered text is empty
    /// (editor/sample mode). Source-language roles lean RTL because the
    /// product's source material is Hebrew.
    pub fn rtl_hint(self) -> bool {
        matches!(
            self,
            LineRole::Original
                | LineRole::Title
                | LineRole::Subtitle
                | LineRole::Description
                | LineRole::Reference
        )
    }

    /// True for the scripture-reference roles, which render above content
    /// lines in the z-order.
    pub fn is_reference(self) -> bool {
        matches!(
            self,
            LineRole::Reference | LineRole::ReferenceTranslation | LineRole::ReferenceEnglish
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineRole::Original => "original",
            LineRole::Transliteration => "transliteration",
            LineRole::Translation => "translation",
            LineRole::TranslationOverflow => "translationOverflow",
            LineRole::Title => "title",
            LineRole::TitleTranslation => "titleTranslation",
            LineRole::Subtitle => "subtitle",
            LineRole::SubtitleTranslation => "subtitleTranslation",
            LineRole::Description => "description",
            LineRole::DescriptionTranslation => "descriptionTranslation",
            LineRole::Reference => "reference",
            LineRole::ReferenceTranslation => "referenceTranslation",
            LineRole::ReferenceEnglish => "referenceEnglish",
        }
    }
}

impl fmt::Display for LineRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal text alignment within a line's box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical text alignment within a line's box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// How a line's vertical position is determined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionMode {
    /// `y` is used as stored.
    #[default]
    Absolute,
    /// `y` is derived from an anchor line's resolved bottom edge plus a gap.
    Flow,
}

/// Fully-resolved geometry for one line role. All coordinates are
/// percentages of the reference canvas; `x + width` may intentionally
/// exceed 100 (themes are allowed to overflow).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub x: Percent,
    pub y: Percent,
    pub width: Percent,
    pub height: Percent,
    pub padding: Sides<Percent>,
    pub align_h: HAlign,
    pub align_v: VAlign,
    pub position_mode: PositionMode,
    /// Role whose resolved bottom edge this line flows below.
    pub flow_anchor: Option<LineRole>,
    /// Vertical gap between the anchor's bottom edge and this line.
    pub flow_gap: Percent,
    /// When set, the line's effective height is its measured rendered
    /// height rather than the stored `height`.
    pub auto_height: bool,
}

/// Theme-supplied partial Position; `None` fields fall back to defaults.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PositionPatch {
    pub x: Option<Percent>,
    pub y: Option<Percent>,
    pub width: Option<Percent>,
    pub height: Option<Percent>,
    pub padding: Option<Sides<Percent>>,
    pub align_h: Option<HAlign>,
    pub align_v: Option<VAlign>,
    pub position_mode: Option<PositionMode>,
    pub flow_anchor: Option<LineRole>,
    pub flow_gap: Option<Percent>,
    pub auto_height: Option<bool>,
}

/// Border drawn around a line's box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Border {
    /// Width in reference-canvas pixels.
    pub width: f64,
    pub color: String,
}

/// Fully-resolved visual style for one line role.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    /// Font-size multiplier: 100 = 5% of canvas height.
    pub font_size: f64,
    /// CSS font weight (400 normal, 700 bold).
    pub weight: u16,
    pub color: String,
    /// Text opacity, `0.0..=1.0`.
    pub opacity: f64,
    pub visible: bool,
    /// Box background color; `None` means no background.
    pub background: Option<String>,
    /// Background opacity, independent of text opacity.
    pub background_opacity: f64,
    pub border: Option<Border>,
    /// Corner radius in reference-canvas pixels.
    pub corner_radius: f64,
}

/// Theme-supplied partial Style; `None` fields fall back to defaults.
///
/// `background` and `border` are double-optional: the outer `None` means
/// "not overridden", `Some(None)` means "explicitly remove the default".
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StylePatch {
    pub font_size: Option<f64>,
    pub weight: Option<u16>,
    pub color: Option<String>,
    pub opacity: Option<f64>,
    pub visible: Option<bool>,
    #[serde(with = "double_option", skip_serializing_if = "Option::is_none")]
    pub background: Option<Option<String>>,
    pub background_opacity: Option<f64>,
    #[serde(with = "double_option", skip_serializing_if = "Option::is_none")]
    pub border: Option<Option<Border>>,
    pub corner_radius: Option<f64>,
}

/// Serde helper: a present-but-null field deserializes to `Some(None)`.
mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &Option<Option<T>>, ser: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(inner) => inner.serialize(ser),
            None => ser.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(de).map(Some)
    }
}

/// One of the five built-in seamless tile patterns for background boxes.
/// Painters blend the tile over the box color with overlay compositing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TexturePattern {
    Dots,
    DiagonalStripes,
    Grid,
    Crosshatch,
    Waves,
}

/// Decorative rectangle painted behind all content lines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundBox {
    #[serde(flatten)]
    pub rect: Rect,
    pub color: String,
    #[serde(default = "opaque")]
    pub opacity: f64,
    #[serde(default)]
    pub corner_radius: f64,
    #[serde(default)]
    pub texture: Option<TexturePattern>,
}

fn opaque() -> f64 {
    1.0
}

/// Slide background specification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Background {
    Color {
        color: String,
    },
    Gradient {
        from: String,
        to: String,
        /// Gradient direction in degrees, 0 = top-to-bottom.
        #[serde(default)]
        angle: f64,
    },
    Image {
        url: String,
        #[serde(default = "opaque")]
        opacity: f64,
    },
}

/// A complete theme: canvas, per-role patches, line order, decoration.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub canvas: Canvas,
    pub positions: HashMap<LineRole, PositionPatch>,
    pub styles: HashMap<LineRole, StylePatch>,
    /// Render order of roles; `None` uses the built-in default order.
    pub line_order: Option<Vec<LineRole>>,
    pub background_boxes: Vec<BackgroundBox>,
    pub background: Option<Background>,
}

impl Theme {
    pub fn position_patch(&self, role: LineRole) -> Option<&PositionPatch> {
        self.positions.get(&role)
    }

    pub fn style_patch(&self, role: LineRole) -> Option<&StylePatch> {
        self.styles.get(&role)
    }
}
