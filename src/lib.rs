//! selah: the slide layout and compositing engine behind a worship
//! presentation system.
//!
//! Given a theme (positions/styles per semantic text role), slide
//! content (possibly bilingual, possibly right-to-left), a display mode,
//! and the physical size of a render target, the engine deterministically
//! produces an ordered tree of absolutely-positioned, correctly-scaled
//! geometry nodes — independent of the surface it is painted on. The
//! same tree drives the editing canvas, the operator preview, and the
//! audience output.
//!
//! The engine fetches nothing, persists nothing, and decides nothing
//! about *what* to show; it is a pure in-process library boundary.
//!
//! ```
//! use selah::{DisplayMode, RenderRequest, SlideContent, SlideInput};
//!
//! let content = SlideInput::from(SlideContent {
//!     title: Some("הבדלה".to_string()),
//!     reference: Some("Genesis 1:1".to_string()),
//!     ..Default::default()
//! });
//! let scene = selah::render(&RenderRequest::new(
//!     None,
//!     Some(&content),
//!     DisplayMode::Bilingual,
//! ));
//! assert!(scene.line_for(selah::LineRole::Title).is_some());
//! ```

pub mod content;
pub mod hebrew;
pub mod layout;
pub mod log;
pub mod scale;
pub mod theme;
pub mod types;

use std::collections::HashMap;

pub use content::{
    BorderSide, BoxStyle, DisplayMode, ImageBox, PresentationSlide, SlideContent, SlideInput,
    TextBox,
};
pub use layout::{
    ComposeInput, Measurer, NoMeasurements, ProjectorConfig, Scene, SceneItem, SceneNode,
};
pub use scale::{ResizeThrottle, Surface, compute_scale};
pub use theme::{
    Background, BackgroundBox, Border, HAlign, LineRole, Position, PositionMode, PositionPatch,
    Style, StylePatch, TexturePattern, Theme, VAlign,
};
pub use types::{Canvas, Percent, Rect, Scale};

static NO_MEASUREMENTS: NoMeasurements = NoMeasurements;

/// Input contract for one render pass.
///
/// Theme and content are supplied fresh on every call; the engine never
/// mutates them, and the returned [`Scene`] is discarded after painting.
pub struct RenderRequest<'a> {
    pub theme: Option<&'a Theme>,
    pub content: Option<&'a SlideInput>,
    pub mode: DisplayMode,
    pub surface: Surface,
    pub editor_mode: bool,
    /// Placeholder text per role for the editor surface.
    pub sample_text: HashMap<LineRole, String>,
    /// In original mode, source slides reviewed together; their original
    /// texts replace the current slide's.
    pub combined_originals: Vec<String>,
    /// Host-measured rendered heights for the two-phase flow pass.
    pub measurer: &'a dyn Measurer,
    pub projector: ProjectorConfig,
}

impl<'a> RenderRequest<'a> {
    /// A request with no surface (1:1 scale), no measurements, and
    /// default projection policy.
    pub fn new(
        theme: Option<&'a Theme>,
        content: Option<&'a SlideInput>,
        mode: DisplayMode,
    ) -> Self {
        RenderRequest {
            theme,
            content,
            mode,
            surface: Surface::Native,
            editor_mode: false,
            sample_text: HashMap::new(),
            combined_originals: Vec::new(),
            measurer: &NO_MEASUREMENTS,
            projector: ProjectorConfig::default(),
        }
    }
}

/// Run one full resolution pass: scale, project, flow-resolve,
/// composite. Pure given its inputs and the measurement map.
pub fn render(req: &RenderRequest<'_>) -> Scene {
    layout::compose(ComposeInput {
        theme: req.theme,
        content: req.content,
        mode: req.mode,
        surface: req.surface,
        editor_mode: req.editor_mode,
        sample_text: &req.sample_text,
        combined_originals: &req.combined_originals,
        measurer: req.measurer,
        projector: &req.projector,
    })
}
