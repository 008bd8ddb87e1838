//! Collision detection between the player and falling obstacles
//!
//! The test is a per-axis proximity check, not a true circle-rectangle
//! intersection: the x axis allows the obstacle radius plus half the player
//! width, the y axis the radius alone. This is the defined collision policy,
//! kept exactly as the game has always felt.

use glam::Vec2;

use super::state::{Obstacle, Player};
use crate::consts::*;

/// Check whether an obstacle overlaps the player hitbox
pub fn player_hits_obstacle(player: &Player, obstacle: &Obstacle) -> bool {
    overlaps(player.center(), obstacle.pos)
}

/// Axis-aligned proximity test between the player center and a circle center
#[inline]
pub fn overlaps(player_center: Vec2, obstacle_center: Vec2) -> bool {
    let dx = (player_center.x - obstacle_center.x).abs();
    let dy = (player_center.y - obstacle_center.y).abs();
    dx < OBSTACLE_RADIUS + PLAYER_WIDTH / 2.0 && dy < OBSTACLE_RADIUS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::ObstacleKind;

    fn obstacle_at(x: f32, y: f32) -> Obstacle {
        Obstacle {
            pos: Vec2::new(x, y),
            kind: ObstacleKind::Oxygen,
        }
    }

    #[test]
    fn test_hit_same_lane_at_player_height() {
        // Player center is (200, 550) in the middle lane
        let player = Player::default();
        assert!(player_hits_obstacle(&player, &obstacle_at(200.0, 550.0)));
        assert!(player_hits_obstacle(&player, &obstacle_at(200.0, 560.0)));
    }

    #[test]
    fn test_miss_above_player() {
        let player = Player::default();
        // Same lane but 20px or more above the center: y threshold is the radius
        assert!(!player_hits_obstacle(&player, &obstacle_at(200.0, 530.0)));
        assert!(!player_hits_obstacle(&player, &obstacle_at(200.0, 100.0)));
    }

    #[test]
    fn test_miss_adjacent_lane() {
        let player = Player::default();
        // Lane 0 center is 134px away, well past the 40px x threshold
        assert!(!player_hits_obstacle(&player, &obstacle_at(66.0, 550.0)));
        assert!(!player_hits_obstacle(&player, &obstacle_at(334.0, 550.0)));
    }

    #[test]
    fn test_x_threshold_includes_player_half_width() {
        let player = Player::default();
        // Threshold is radius + half width = 40
        assert!(overlaps(player.center(), Vec2::new(239.0, 550.0)));
        assert!(!overlaps(player.center(), Vec2::new(240.0, 550.0)));
    }

    #[test]
    fn test_y_threshold_boundary() {
        let player = Player::default();
        assert!(overlaps(player.center(), Vec2::new(200.0, 569.0)));
        assert!(!overlaps(player.center(), Vec2::new(200.0, 570.0)));
    }
}
