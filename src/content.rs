//! Slide content shapes: themed content (text per line role) and
//! free-form "quick mode" presentation slides that carry their own
//! geometry and styling with no theme indirection.

use serde::{Deserialize, Serialize};

use crate::theme::{HAlign, VAlign};
use crate::types::{Corners, Percent, Rect, Sides};

/// The single control that gates per-role visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Original,
    Translation,
    #[default]
    Bilingual,
}

/// Themed slide content: a bag of optional text fields keyed by line
/// role, plus language metadata.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SlideContent {
    #[serde(alias = "originalText")]
    pub original: Option<String>,
    pub transliteration: Option<String>,
    pub translation: Option<String>,
    pub translation_overflow: Option<String>,
    pub title: Option<String>,
    pub title_translation: Option<String>,
    pub subtitle: Option<String>,
    pub subtitle_translation: Option<String>,
    pub description: Option<String>,
    pub description_translation: Option<String>,
    /// Raw scripture reference, e.g. `"Genesis 1:1"` or a Hebrew book name.
    pub reference: Option<String>,
    pub reference_translation: Option<String>,
    pub reference_english: Option<String>,
    /// ISO language code of the source text. Languages outside the
    /// projector's transliterated-language list collapse their
    /// transliteration/translation roles into `original`.
    pub original_language: Option<String>,
}

/// Per-side border for free-form boxes: width in reference-canvas
/// pixels plus color. A zero width means no border on that side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BorderSide {
    pub width: f64,
    pub color: String,
}

impl Default for BorderSide {
    fn default() -> Self {
        BorderSide {
            width: 0.0,
            color: "#000000".to_string(),
        }
    }
}

/// Complete embedded styling for a free-form text box. Quick-mode
/// slides bypass theme merging entirely, so every channel lives here:
/// independent per-side borders, per-corner radii, per-side padding,
/// and separate text vs. background opacity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoxStyle {
    /// Font-size multiplier: 100 = 5% of canvas height.
    pub font_size: f64,
    pub weight: u16,
    pub color: String,
    pub text_opacity: f64,
    pub background: Option<String>,
    pub background_opacity: f64,
    pub borders: Sides<BorderSide>,
    pub corner_radii: Corners<f64>,
    pub padding: Sides<Percent>,
    pub align_h: HAlign,
    pub align_v: VAlign,
}

impl Default for BoxStyle {
    fn default() -> Self {
        BoxStyle {
            font_size: 100.0,
            weight: 400,
            color: "#ffffff".to_string(),
            text_opacity: 1.0,
            background: None,
            background_opacity: 1.0,
            borders: Sides::default(),
            corner_radii: Corners::default(),
            padding: Sides::default(),
            align_h: HAlign::Center,
            align_v: VAlign::Middle,
        }
    }
}

/// Free-form text box with absolute geometry and embedded style.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBox {
    #[serde(flatten)]
    pub rect: Rect,
    pub text: String,
    #[serde(default)]
    pub style: BoxStyle,
}

/// Free-form image box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBox {
    #[serde(flatten)]
    pub rect: Rect,
    pub url: String,
    #[serde(default = "full_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub corner_radii: Corners<f64>,
}

fn full_opacity() -> f64 {
    1.0
}

/// "Quick mode" slide: an unordered set of self-contained boxes,
/// authored directly rather than through a themed template.
#[derive(Clone, Debug, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationSlide {
    pub background_boxes: Vec<crate::theme::BackgroundBox>,
    pub text_boxes: Vec<TextBox>,
    pub image_boxes: Vec<ImageBox>,
}

/// Hand-written so the untagged [`SlideInput`] decode stays unambiguous:
/// a quick-mode slide must name at least one box array (possibly empty),
/// and unknown fields are rejected. `{}` or a bag of role texts falls
/// through to [`SlideContent`] instead of decoding as an empty slide.
impl<'de> Deserialize<'de> for PresentationSlide {
    fn deserialize<D>(de: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        struct Repr {
            background_boxes: Option<Vec<crate::theme::BackgroundBox>>,
            text_boxes: Option<Vec<TextBox>>,
            image_boxes: Option<Vec<ImageBox>>,
        }
        let r = Repr::deserialize(de)?;
        if r.background_boxes.is_none() && r.text_boxes.is_none() && r.image_boxes.is_none() {
            return Err(serde::de::Error::custom(
                "quick-mode slide names no box arrays",
            ));
        }
        Ok(PresentationSlide {
            background_boxes: r.background_boxes.unwrap_or_default(),
            text_boxes: r.text_boxes.unwrap_or_default(),
            image_boxes: r.image_boxes.unwrap_or_default(),
        })
    }
}

/// Either content shape accepted by the render entry point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlideInput {
    Presentation(PresentationSlide),
    Themed(SlideContent),
}

impl From<SlideContent> for SlideInput {
    fn from(c: SlideContent) -> Self {
        SlideInput::Themed(c)
    }
}

impl From<PresentationSlide> for SlideInput {
    fn from(p: PresentationSlide) -> Self {
        SlideInput::Presentation(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_accepts_original_text_alias() {
        let c: SlideContent =
            serde_json::from_str(r#"{ "originalText": "שלום", "translation": "Peace" }"#).unwrap();
        assert_eq!(c.original.as_deref(), Some("שלום"));
        assert_eq!(c.translation.as_deref(), Some("Peace"));
    }

    #[test]
    fn display_mode_lowercase() {
        let m: DisplayMode = serde_json::from_str("\"bilingual\"").unwrap();
        assert_eq!(m, DisplayMode::Bilingual);
    }

    #[test]
    fn text_box_flattens_rect() {
        let b: TextBox = serde_json::from_str(
            r#"{ "x": 10.0, "y": 20.0, "width": 40.0, "height": 15.0, "text": "hi" }"#,
        )
        .unwrap();
        assert_eq!(b.rect, Rect::new(10.0, 20.0, 40.0, 15.0));
        assert_eq!(b.style.font_size, 100.0);
    }

    #[test]
    fn slide_input_untagged_distinguishes_shapes() {
        let quick: SlideInput =
            serde_json::from_str(r#"{ "textBoxes": [], "imageBoxes": [] }"#).unwrap();
        assert!(matches!(quick, SlideInput::Presentation(_)));
        let themed: SlideInput = serde_json::from_str(r#"{ "title": "Psalm" }"#).unwrap();
        assert!(matches!(themed, SlideInput::Themed(_)));
    }

    #[test]
    fn empty_object_is_themed_content() {
        // an empty themed slide still gets its theme decoration; it must
        // not decode as a boxless quick-mode slide
        let input: SlideInput = serde_json::from_str("{}").unwrap();
        assert!(matches!(input, SlideInput::Themed(c) if c == SlideContent::default()));
    }

    #[test]
    fn presentation_slide_requires_a_box_array() {
        assert!(serde_json::from_str::<PresentationSlide>("{}").is_err());
        let slide: PresentationSlide =
            serde_json::from_str(r#"{ "textBoxes": [] }"#).unwrap();
        assert!(slide.text_boxes.is_empty());
    }
}
