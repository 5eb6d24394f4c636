//! Collision detection and response
//!
//! The puck is a circle but is tested against walls, goal lines and paddles
//! by its bounding square. Paddle response ignores the incoming angle: the
//! outgoing angle depends only on where the puck meets the paddle face.

use glam::Vec2;

use super::config::Config;
use super::state::{Paddle, Puck, Side};
use crate::consts::*;
use crate::launch_velocity;

/// Result of a puck/paddle contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleHit {
    /// Paddle that was struck
    pub side: Side,
    /// Contact offset from paddle center, scaled by half the paddle height (-1..=1)
    pub offset: f32,
    /// Outgoing angle from horizontal (radians)
    pub angle: f32,
    /// Contact landed within the clean zone
    pub clean: bool,
    /// Outgoing speed
    pub speed: f32,
}

/// Bounce the puck off the top/bottom walls
///
/// Only reflects while the puck is still moving toward the wall, so a puck
/// that is already receding is never flipped back. Returns true on a bounce.
pub fn reflect_off_walls(puck: &mut Puck, config: &Config) -> bool {
    let radius = config.puck.radius;
    let top = config.rink.wall_inset;
    let bottom = config.rink.height - config.rink.wall_inset;

    if puck.pos.y - radius <= top && puck.vel.y < 0.0 {
        puck.pos.y = top + radius;
        puck.vel.y = -puck.vel.y;
        return true;
    }
    if puck.pos.y + radius >= bottom && puck.vel.y > 0.0 {
        puck.pos.y = bottom - radius;
        puck.vel.y = -puck.vel.y;
        return true;
    }
    false
}

/// Side that scores if the puck has fully left the rink horizontally
pub fn goal_scored(puck: &Puck, config: &Config) -> Option<Side> {
    let radius = config.puck.radius;
    if puck.pos.x + radius < 0.0 {
        Some(Side::Right)
    } else if puck.pos.x - radius > config.rink.width {
        Some(Side::Left)
    } else {
        None
    }
}

/// Bounding-square overlap between puck and paddle (touching counts)
pub fn overlaps(puck: &Puck, paddle: &Paddle, config: &Config) -> bool {
    let radius = config.puck.radius;
    !(puck.pos.x + radius < paddle.left()
        || puck.pos.x - radius > paddle.right(config)
        || puck.pos.y + radius < paddle.top()
        || puck.pos.y - radius > paddle.bottom(config))
}

/// Outgoing speed for a paddle hit, capped at `max_speed`
pub fn bounce_speed(incoming: f32, clean: bool, max_speed: f32) -> f32 {
    let (multiplier, bonus) = if clean {
        (CLEAN_HIT_MULTIPLIER, CLEAN_HIT_BONUS)
    } else {
        (HIT_MULTIPLIER, HIT_BONUS)
    };
    (incoming * multiplier + bonus).min(max_speed)
}

/// Resolve a puck/paddle contact
///
/// Pushes the puck flush against the paddle's facing edge and replaces its
/// velocity with one leaving the paddle at an angle set by the contact offset.
pub fn paddle_collision(puck: &mut Puck, paddle: &Paddle, config: &Config) -> Option<PaddleHit> {
    if !overlaps(puck, paddle, config) {
        return None;
    }

    let radius = config.puck.radius;
    let facing = paddle.side.facing();

    // Flush against the face so the next tick starts clear of the paddle
    puck.pos.x = if facing > 0.0 {
        paddle.right(config) + radius
    } else {
        paddle.left() - radius
    };
    puck.vel.x = puck.vel.x.abs() * facing;

    let half_height = config.paddle.height / 2.0;
    let offset = ((puck.pos.y - paddle.center_y(config)) / half_height).clamp(-1.0, 1.0);
    let angle = offset * BOUNCE_SPREAD;
    let clean = offset.abs() < CLEAN_HIT_ZONE;
    let speed = bounce_speed(puck.speed(), clean, config.puck.max_speed);

    puck.vel = launch_velocity(angle, speed, facing);

    Some(PaddleHit {
        side: paddle.side,
        offset,
        angle,
        clean,
        speed,
    })
}

/// Rescale a slow velocity up to `min_speed`
///
/// A zero vector has no direction, so it gets `fallback_angle` instead.
pub fn enforce_min_speed(vel: Vec2, min_speed: f32, fallback_angle: f32) -> Vec2 {
    let speed = vel.length();
    if speed >= min_speed {
        vel
    } else if speed == 0.0 {
        crate::unit_at(fallback_angle) * min_speed
    } else {
        vel * (min_speed / speed)
    }
}
