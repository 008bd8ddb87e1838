//! Lane geometry
//!
//! The playfield is split into three vertical lanes; the player and every
//! obstacle sit exactly on a lane center. Lane math mirrors the original
//! layout (integer division, so lane 0 is at 66 for a 400-wide screen).

use serde::{Deserialize, Serialize};

/// Number of lanes
pub const LANE_COUNT: usize = 3;

/// A lane-change intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaneShift {
    Left,
    Right,
}

/// Lane center x-coordinates for a given playfield width
///
/// Matches the source layout: `[lane_width/2, width/2, width - lane_width/2]`
/// with truncating division. Any three evenly spaced positions would do; the
/// exact values are kept for visual fidelity.
pub fn lane_centers(width: f32) -> [f32; LANE_COUNT] {
    let lane_width = (width / 3.0).floor();
    let half = (lane_width / 2.0).floor();
    [half, (width / 2.0).floor(), width - half]
}

/// Clamp a lane change: no wraparound, boundary moves are no-ops
pub fn shift_lane(lane: usize, shift: LaneShift) -> usize {
    match shift {
        LaneShift::Left => lane.saturating_sub(1),
        LaneShift::Right => (lane + 1).min(LANE_COUNT - 1),
    }
}
