//! Slide layout: defaults, font fitting, flow resolution, content
//! projection, and the compositor that ties them together.
//!
//! This module is organized into submodules:
//! - `defaults`: built-in Position/Style tables and the default line order
//! - `font_fit`: binary-search font-size fitting
//! - `flow`: flow-position resolution over the role dependency graph
//! - `project`: display-mode visibility and text projection
//! - `types`: the emitted scene tree
//! - `compose`: the compositor pass

pub mod compose;
pub mod defaults;
pub mod flow;
pub mod font_fit;
pub mod project;
pub mod types;

pub use compose::{ComposeInput, compose, is_rtl_text};
pub use flow::{FlowResolution, Measurer, NoMeasurements, resolve_flow};
pub use font_fit::{MAX_SCALE, MIN_SCALE, font_fit_scale};
pub use project::{Projection, ProjectorConfig, ProjectorInput, project};
pub use types::*;
