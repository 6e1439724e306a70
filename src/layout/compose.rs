//! The compositor: merges theme overrides with defaults and emits the
//! final ordered, styled geometry tree.
//!
//! Fixed z-order: background nodes, content lines, reference lines,
//! then free-form quick-mode boxes. Right-to-left direction is decided
//! per line from the actual rendered text; the role-name hint only
//! applies when the text is empty in editor/sample mode.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::content::{DisplayMode, PresentationSlide, SlideContent, SlideInput};
use crate::layout::defaults::{self, DEFAULT_LINE_ORDER};
use crate::layout::flow::{self, Measurer};
use crate::layout::font_fit::font_fit_scale;
use crate::layout::project::{self, ProjectorConfig, ProjectorInput};
use crate::layout::types::{
    BackgroundNode, ImageBoxNode, LineNode, ReferenceLineNode, Scene, SceneNode, TextBoxNode,
    Z_BACKGROUND, Z_FREEFORM, Z_LINE, Z_REFERENCE,
};
use crate::scale::{Surface, compute_scale};
use crate::theme::{Background, LineRole, Position, Style, Theme};
use crate::types::{Canvas, Rect};

/// True when `text` contains Hebrew or Arabic script characters
/// (including presentation forms). Neutral characters never flip a line.
pub fn is_rtl_text(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(c,
            '\u{0590}'..='\u{05FF}'   // Hebrew
            | '\u{0600}'..='\u{06FF}' // Arabic
            | '\u{0750}'..='\u{077F}' // Arabic Supplement
            | '\u{FB1D}'..='\u{FB4F}' // Hebrew presentation forms
            | '\u{FB50}'..='\u{FDFF}' // Arabic presentation forms A
            | '\u{FE70}'..='\u{FEFF}' // Arabic presentation forms B
        )
    })
}

/// Everything one compositor pass consumes.
pub struct ComposeInput<'a> {
    pub theme: Option<&'a Theme>,
    pub content: Option<&'a SlideInput>,
    pub mode: DisplayMode,
    pub surface: Surface,
    pub editor_mode: bool,
    /// Placeholder text per role, shown in the editor when content has
    /// no text for a role.
    pub sample_text: &'a HashMap<LineRole, String>,
    /// In original mode, source slides reviewed together.
    pub combined_originals: &'a [String],
    pub measurer: &'a dyn Measurer,
    pub projector: &'a ProjectorConfig,
}

/// One full resolution pass: scale, project, flow-resolve, composite.
/// Pure given its inputs and the measurement map; never faults on
/// malformed-but-well-typed themes or content.
pub fn compose(input: ComposeInput<'_>) -> Scene {
    let default_theme = Theme::default();
    let theme = input.theme.unwrap_or(&default_theme);
    let canvas = Canvas::sanitized(Some(theme.canvas.width), Some(theme.canvas.height));
    let scale = compute_scale(&canvas, input.surface);

    match input.content {
        Some(SlideInput::Presentation(slide)) => {
            compose_presentation(slide, &canvas, scale, input.mode)
        }
        Some(SlideInput::Themed(content)) => {
            compose_themed(theme, content, &canvas, scale, &input)
        }
        None => {
            // theme preview: decoration plus sample lines in editor mode
            let empty = SlideContent::default();
            compose_themed(theme, &empty, &canvas, scale, &input)
        }
    }
}

fn theme_background_nodes(theme: &Theme, nodes: &mut Vec<SceneNode>) {
    let mut z = Z_BACKGROUND;
    if let Some(bg) = &theme.background {
        nodes.push(SceneNode::Background(BackgroundNode {
            rect: Rect::new(0.0, 0.0, 100.0, 100.0),
            z_index: z,
            fill: bg.clone(),
            opacity: 1.0,
            corner_radius: 0.0,
            texture: None,
        }));
    }
    for bx in &theme.background_boxes {
        // decoration never climbs into the content-line band
        z = (z + 1).min(Z_LINE - 1);
        nodes.push(SceneNode::Background(BackgroundNode {
            rect: bx.rect,
            z_index: z,
            fill: Background::Color {
                color: bx.color.clone(),
            },
            opacity: bx.opacity,
            corner_radius: bx.corner_radius,
            texture: bx.texture,
        }));
    }
}

fn compose_themed(
    theme: &Theme,
    content: &SlideContent,
    canvas: &Canvas,
    scale: crate::types::Scale,
    input: &ComposeInput<'_>,
) -> Scene {
    let line_order: Vec<LineRole> = theme
        .line_order
        .clone()
        .unwrap_or_else(|| DEFAULT_LINE_ORDER.to_vec());

    let projection = project::project(
        ProjectorInput {
            content,
            mode: input.mode,
            line_order: &line_order,
            combined_originals: input.combined_originals,
        },
        input.projector,
    );

    // Merge every role so anchors outside the line order still resolve.
    let positions: BTreeMap<LineRole, Position> = LineRole::ALL
        .iter()
        .map(|&role| (role, defaults::merge_position(role, theme.position_patch(role))))
        .collect();
    let resolution = flow::resolve_flow(&positions, input.measurer);

    let mut nodes = Vec::new();
    theme_background_nodes(theme, &mut nodes);

    let mut content_lines: Vec<LineNode> = Vec::new();
    let mut reference_lines: Vec<LineNode> = Vec::new();
    let mut seen: HashSet<LineRole> = HashSet::new();

    for &role in &line_order {
        if !seen.insert(role) {
            continue;
        }
        let Some(proj) = projection.get(&role) else {
            continue;
        };
        if !proj.visible {
            continue;
        }
        let style = defaults::merge_style(role, theme.style_patch(role));
        if !style.visible {
            continue;
        }
        // a role with no resolved text and no editor-sample fallback is
        // omitted entirely, never rendered as an empty box
        let text = match &proj.text {
            Some(t) => t.clone(),
            None if input.editor_mode => match input.sample_text.get(&role) {
                Some(sample) => sample.clone(),
                None => continue,
            },
            None => continue,
        };

        let pos = &positions[&role];
        let line = build_line(role, pos, &style, text, canvas, input.measurer, &resolution);
        if role.is_reference() {
            reference_lines.push(line);
        } else {
            content_lines.push(line);
        }
    }

    for (i, mut line) in content_lines.into_iter().enumerate() {
        line.z_index = Z_LINE + i as i32;
        nodes.push(SceneNode::Line(line));
    }
    for (i, mut line) in reference_lines.into_iter().enumerate() {
        line.z_index = Z_REFERENCE + i as i32;
        nodes.push(SceneNode::ReferenceLine(ReferenceLineNode { line }));
    }

    Scene {
        scale,
        canvas: *canvas,
        nodes,
        pending_measurements: resolution.pending_measurements,
    }
}

fn build_line(
    role: LineRole,
    pos: &Position,
    style: &Style,
    text: String,
    canvas: &Canvas,
    measurer: &dyn Measurer,
    resolution: &flow::FlowResolution,
) -> LineNode {
    let y = resolution.y.get(&role).copied().unwrap_or(pos.y);
    let height = if pos.auto_height {
        measurer.measure(role).unwrap_or(pos.height)
    } else {
        pos.height
    };
    let rect = Rect {
        x: pos.x,
        y,
        width: pos.width,
        height,
    };

    let rtl = if text.trim().is_empty() {
        role.rtl_hint()
    } else {
        is_rtl_text(&text)
    };

    let base_font = canvas.font_px(style.font_size);
    let avail_w =
        canvas.x_px(rect.width) - canvas.x_px(pos.padding.left) - canvas.x_px(pos.padding.right);
    let avail_h =
        canvas.y_px(rect.height) - canvas.y_px(pos.padding.top) - canvas.y_px(pos.padding.bottom);
    let fit = font_fit_scale(&text, base_font, avail_w, avail_h, rtl);

    LineNode {
        role,
        rect,
        z_index: Z_LINE,
        text,
        rtl,
        font_px: base_font * fit,
        weight: style.weight,
        color: style.color.clone(),
        opacity: style.opacity,
        align_h: pos.align_h,
        align_v: pos.align_v,
        padding: pos.padding,
        background: style.background.clone(),
        background_opacity: style.background_opacity,
        border: style.border.clone(),
        corner_radius: style.corner_radius,
    }
}

/// Quick-mode slides bypass the theme entirely: every box carries its
/// own geometry and full styling.
fn compose_presentation(
    slide: &PresentationSlide,
    canvas: &Canvas,
    scale: crate::types::Scale,
    _mode: DisplayMode,
) -> Scene {
    let mut nodes = Vec::new();

    for (i, bx) in slide.background_boxes.iter().enumerate() {
        nodes.push(SceneNode::Background(BackgroundNode {
            rect: bx.rect,
            z_index: (Z_BACKGROUND + i as i32).min(Z_LINE - 1),
            fill: Background::Color {
                color: bx.color.clone(),
            },
            opacity: bx.opacity,
            corner_radius: bx.corner_radius,
            texture: bx.texture,
        }));
    }

    let mut z = Z_FREEFORM;
    for img in &slide.image_boxes {
        nodes.push(SceneNode::ImageBox(ImageBoxNode {
            rect: img.rect,
            z_index: z,
            url: img.url.clone(),
            opacity: img.opacity,
            corner_radii: img.corner_radii,
        }));
        z += 1;
    }
    for tb in &slide.text_boxes {
        let rtl = is_rtl_text(&tb.text);
        let base_font = canvas.font_px(tb.style.font_size);
        let avail_w = canvas.x_px(tb.rect.width)
            - canvas.x_px(tb.style.padding.left)
            - canvas.x_px(tb.style.padding.right);
        let avail_h = canvas.y_px(tb.rect.height)
            - canvas.y_px(tb.style.padding.top)
            - canvas.y_px(tb.style.padding.bottom);
        let fit = font_fit_scale(&tb.text, base_font, avail_w, avail_h, rtl);
        nodes.push(SceneNode::TextBox(TextBoxNode {
            rect: tb.rect,
            z_index: z,
            text: tb.text.clone(),
            rtl,
            font_px: base_font * fit,
            style: tb.style.clone(),
        }));
        z += 1;
    }

    Scene {
        scale,
        canvas: *canvas,
        nodes,
        pending_measurements: Vec::new(),
    }
}
