//! The geometry tree emitted by the compositor.
//!
//! Nodes are typed, absolutely positioned in canvas percentages, and
//! ordered by z-index: background nodes, content lines, reference lines,
//! then free-form boxes. The tree plus the single scale value is
//! language-agnostic enough to be painted by any 2D renderer (DOM/CSS,
//! canvas, or a native toolkit); it serializes with a `kind` tag for the
//! browser-overlay surface.

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

use crate::content::BoxStyle;
use crate::theme::{Background, Border, HAlign, LineRole, TexturePattern, VAlign};
use crate::types::{Canvas, Corners, Percent, Rect, Scale, Sides};

/// Base z-index per node band.
pub const Z_BACKGROUND: i32 = 0;
pub const Z_LINE: i32 = 10;
pub const Z_REFERENCE: i32 = 20;
pub const Z_FREEFORM: i32 = 30;

/// Geometry accessors shared by every node kind.
#[enum_dispatch]
pub trait SceneItem {
    fn rect(&self) -> Rect;
    fn z_index(&self) -> i32;
}

/// Slide background or decorative background box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundNode {
    #[serde(flatten)]
    pub rect: Rect,
    pub z_index: i32,
    pub fill: Background,
    pub opacity: f64,
    pub corner_radius: f64,
    /// Seamless tile blended over the fill with overlay compositing.
    pub texture: Option<TexturePattern>,
}

impl SceneItem for BackgroundNode {
    fn rect(&self) -> Rect {
        self.rect
    }
    fn z_index(&self) -> i32 {
        self.z_index
    }
}

/// A themed content line, fully resolved and styled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineNode {
    pub role: LineRole,
    #[serde(flatten)]
    pub rect: Rect,
    pub z_index: i32,
    pub text: String,
    /// True when the rendered text contains Hebrew/Arabic script.
    pub rtl: bool,
    /// Final font size in reference-canvas pixels (base size times the
    /// font-fit factor); the surface scale is applied on top by the painter.
    pub font_px: f64,
    pub weight: u16,
    pub color: String,
    pub opacity: f64,
    pub align_h: HAlign,
    pub align_v: VAlign,
    pub padding: Sides<Percent>,
    pub background: Option<String>,
    pub background_opacity: f64,
    pub border: Option<Border>,
    pub corner_radius: f64,
}

impl SceneItem for LineNode {
    fn rect(&self) -> Rect {
        self.rect
    }
    fn z_index(&self) -> i32 {
        self.z_index
    }
}

/// A scripture-reference line; identical payload to [`LineNode`] but a
/// distinct kind, rendered above content lines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLineNode {
    #[serde(flatten)]
    pub line: LineNode,
}

impl SceneItem for ReferenceLineNode {
    fn rect(&self) -> Rect {
        self.line.rect
    }
    fn z_index(&self) -> i32 {
        self.line.z_index
    }
}

/// Free-form image box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBoxNode {
    #[serde(flatten)]
    pub rect: Rect,
    pub z_index: i32,
    pub url: String,
    pub opacity: f64,
    pub corner_radii: Corners<f64>,
}

impl SceneItem for ImageBoxNode {
    fn rect(&self) -> Rect {
        self.rect
    }
    fn z_index(&self) -> i32 {
        self.z_index
    }
}

/// Free-form text box with its embedded style.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBoxNode {
    #[serde(flatten)]
    pub rect: Rect,
    pub z_index: i32,
    pub text: String,
    pub rtl: bool,
    /// Final font size in reference-canvas pixels.
    pub font_px: f64,
    pub style: BoxStyle,
}

impl SceneItem for TextBoxNode {
    fn rect(&self) -> Rect {
        self.rect
    }
    fn z_index(&self) -> i32 {
        self.z_index
    }
}

/// One node of the geometry tree.
#[enum_dispatch(SceneItem)]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SceneNode {
    Background(BackgroundNode),
    Line(LineNode),
    ReferenceLine(ReferenceLineNode),
    ImageBox(ImageBoxNode),
    TextBox(TextBoxNode),
}

/// The full output of one resolution pass: an ordered geometry tree and
/// the single uniform scale to apply when painting it. Discarded after
/// the caller paints.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub scale: Scale,
    pub canvas: Canvas,
    pub nodes: Vec<SceneNode>,
    /// Flow roles whose auto-height anchors had no measurement this
    /// pass; hosts measure these and re-render (two-phase flow).
    pub pending_measurements: Vec<LineRole>,
}

impl Scene {
    /// Nodes of a given band, in emission order.
    pub fn lines(&self) -> impl Iterator<Item = &LineNode> {
        self.nodes.iter().filter_map(|n| match n {
            SceneNode::Line(l) => Some(l),
            _ => None,
        })
    }

    pub fn line_for(&self, role: LineRole) -> Option<&LineNode> {
        self.lines().find(|l| l.role == role)
    }

    pub fn reference_lines(&self) -> impl Iterator<Item = &ReferenceLineNode> {
        self.nodes.iter().filter_map(|n| match n {
            SceneNode::ReferenceLine(r) => Some(r),
            _ => None,
        })
    }
}
