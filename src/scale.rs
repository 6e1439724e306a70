//! Uniform scale computation and resize throttling.
//!
//! The engine always lays the full reference canvas out at 1:1 and
//! applies a single scale transform, so percentage-based coordinates are
//! computed once regardless of final pixel size. That single scalar is
//! what guarantees pixel-identical layout across the editing canvas, the
//! operator preview, and the audience output.

use std::time::{Duration, Instant};

use glam::DVec2;

use crate::types::{Canvas, Scale};

/// The render target the scale maps the canvas onto.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Surface {
    /// No physical target: render at 1:1 (scale 1.0).
    Native,
    /// Explicit container size in physical pixels.
    Fixed(DVec2),
    /// Fill the viewport; the host supplies the live viewport size and
    /// re-invokes on viewport resize.
    FillViewport(DVec2),
}

impl Surface {
    fn size(self) -> Option<DVec2> {
        match self {
            Surface::Native => None,
            Surface::Fixed(s) | Surface::FillViewport(s) => Some(s),
        }
    }
}

/// Compute the uniform scale mapping `canvas` onto `surface`.
///
/// `scale = min(container.w / canvas.w, container.h / canvas.h)`:
/// aspect-preserving, never stretching. Degenerate container sizes clamp
/// to zero (an invisible surface renders nothing, it does not fault).
pub fn compute_scale(canvas: &Canvas, surface: Surface) -> Scale {
    let Some(container) = surface.size() else {
        return Scale::IDENTITY;
    };
    let container = container.max(DVec2::ZERO);
    // canvas dimensions are sanitized to >= 1, so this never divides by zero
    let ratio = container / canvas.size();
    Scale(ratio.min_element())
}

/// Ceiling for resize recomputation, matching a 60 Hz paint cycle.
pub const RESIZE_MIN_INTERVAL: Duration = Duration::from_millis(16);

/// Throttles container-resize events to the paint cycle.
///
/// Leading-edge: the first event after a quiet period passes through.
/// Events arriving faster than the interval are coalesced into a pending
/// value that [`ResizeThrottle::settle`] drains once the resize stops,
/// so the converged size is always applied before the next paint.
/// Superseded pending values are simply overwritten; there is no timer
/// to cancel beyond draining or dropping the pending slot.
///
/// Time is injected as [`Instant`] arguments to keep the type
/// deterministic under test.
#[derive(Debug)]
pub struct ResizeThrottle {
    min_interval: Duration,
    last_emit: Option<Instant>,
    pending: Option<DVec2>,
}

impl ResizeThrottle {
    pub fn new(min_interval: Duration) -> Self {
        ResizeThrottle {
            min_interval,
            last_emit: None,
            pending: None,
        }
    }

    /// Offer a new container size observed at `now`. Returns the size to
    /// recompute with, or `None` if the event was coalesced.
    pub fn submit(&mut self, size: DVec2, now: Instant) -> Option<DVec2> {
        match self.last_emit {
            Some(prev) if now.duration_since(prev) < self.min_interval => {
                self.pending = Some(size);
                None
            }
            _ => {
                self.last_emit = Some(now);
                self.pending = None;
                Some(size)
            }
        }
    }

    /// Drain the coalesced trailing value, if any. Hosts call this when
    /// the resize settles (or on their next frame tick).
    pub fn settle(&mut self) -> Option<DVec2> {
        self.pending.take()
    }

    /// Discard any pending value without emitting it. Used when a stale
    /// scheduled recompute would otherwise land after newer state.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl Default for ResizeThrottle {
    fn default() -> Self {
        ResizeThrottle::new(RESIZE_MIN_INTERVAL)
    }
}
