//! Flow position resolution: declarative "below that line, with a gap"
//! positions become absolute coordinates.
//!
//! Roles form a small dependency graph (a role node per Position,
//! `flow_anchor` as the edge). Resolution walks each anchor chain
//! iteratively and unwinds it bottom-up, so cycle handling is an
//! explicit code path rather than a recursion guard: a revisited role
//! is pinned at its stored `y` and everything downstream still resolves.
//! No input can cause non-termination.

use std::collections::{BTreeMap, HashMap};

use crate::log::warn;
use crate::theme::{LineRole, Position, PositionMode};
use crate::types::Percent;

/// Host-injected capability supplying measured rendered heights
/// (percent of canvas height) for roles that have already been painted.
///
/// Flow resolution is inherently two-phase in hosts that measure after
/// layout: render unresolved, measure, re-render resolved. The resolver
/// tolerates an incomplete measurement map throughout.
pub trait Measurer {
    fn measure(&self, role: LineRole) -> Option<Percent>;
}

/// The empty measurement map (first phase of a two-phase render).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMeasurements;

impl Measurer for NoMeasurements {
    fn measure(&self, _role: LineRole) -> Option<Percent> {
        None
    }
}

impl Measurer for HashMap<LineRole, Percent> {
    fn measure(&self, role: LineRole) -> Option<Percent> {
        self.get(&role).copied()
    }
}

impl Measurer for BTreeMap<LineRole, Percent> {
    fn measure(&self, role: LineRole) -> Option<Percent> {
        self.get(&role).copied()
    }
}

/// Output of one resolution pass.
#[derive(Debug, Clone, Default)]
pub struct FlowResolution {
    /// Resolved absolute `y` per role. Absolute-mode roles map to their
    /// stored `y`; flow-mode roles to their computed position.
    pub y: HashMap<LineRole, Percent>,
    /// Auto-height anchors that had no measurement and were treated as
    /// height 0. Hosts measure these and re-run the pass.
    pub pending_measurements: Vec<LineRole>,
}

/// Resolve every role's absolute `y` in one pass. Results are cached per
/// pass; callers re-run the pass when content, sample text, or theme
/// positions change (not on every paint).
pub fn resolve_flow(
    positions: &BTreeMap<LineRole, Position>,
    measurer: &dyn Measurer,
) -> FlowResolution {
    let mut res = FlowResolution::default();
    for &role in positions.keys() {
        resolve_role(role, positions, measurer, &mut res);
    }
    res
}

fn resolve_role(
    role: LineRole,
    positions: &BTreeMap<LineRole, Position>,
    measurer: &dyn Measurer,
    res: &mut FlowResolution,
) {
    if res.y.contains_key(&role) {
        return;
    }

    // Walk the anchor chain until a base case, an already-resolved role,
    // a missing anchor, or a cycle.
    let mut chain = vec![role];
    while let Some(&cur) = chain.last() {
        let pos = &positions[&cur];
        let next = match (pos.position_mode, pos.flow_anchor) {
            (PositionMode::Flow, Some(anchor)) => anchor,
            _ => break,
        };
        if res.y.contains_key(&next) || !positions.contains_key(&next) {
            break;
        }
        if chain.contains(&next) {
            warn!(
                "flow anchor cycle at {} -> {}; pinning {} to its stored y",
                cur, next, next
            );
            res.y.insert(next, positions[&next].y);
            break;
        }
        chain.push(next);
    }

    // Unwind bottom-up: every role on the chain can now see its anchor.
    while let Some(cur) = chain.pop() {
        if res.y.contains_key(&cur) {
            continue;
        }
        let pos = &positions[&cur];
        let resolved = match (pos.position_mode, pos.flow_anchor) {
            (PositionMode::Flow, Some(anchor)) => match positions.get(&anchor) {
                Some(anchor_pos) => {
                    let anchor_y = res.y.get(&anchor).copied().unwrap_or(anchor_pos.y);
                    let anchor_height = effective_height(anchor, anchor_pos, measurer, res);
                    anchor_y + anchor_height + pos.flow_gap
                }
                None => {
                    warn!("flow anchor {} of {} is unknown; using stored y", anchor, cur);
                    pos.y
                }
            },
            // no anchor: the stored y is the base offset, not "below" anything
            _ => pos.y,
        };
        res.y.insert(cur, resolved);
    }
}

/// An anchor's effective height: a measurement wins whenever one exists;
/// a declared-autoHeight anchor with no measurement means its content is
/// absent (height 0, flagged for measurement); otherwise the stored
/// height stands.
fn effective_height(
    anchor: LineRole,
    anchor_pos: &Position,
    measurer: &dyn Measurer,
    res: &mut FlowResolution,
) -> Percent {
    match measurer.measure(anchor) {
        Some(h) => h,
        None if anchor_pos.auto_height => {
            if !res.pending_measurements.contains(&anchor) {
                res.pending_measurements.push(anchor);
            }
            Percent::ZERO
        }
        None => anchor_pos.height,
    }
}
