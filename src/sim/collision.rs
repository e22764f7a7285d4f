//! Ball-pin and wall collision response
//!
//! Pin hits are not reflections: the ball is pushed out to the contact
//! distance and given a fresh velocity along the contact angle, plus jitter.

use glam::Vec2;

use super::random::RandomSource;

/// Result of a ball-pin overlap check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Angle from pin center to ball center (radians)
    pub angle: f32,
    /// Overlap depth
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            angle: 0.0,
            penetration: 0.0,
        }
    }
}

/// Rebound tuning shared by every pin
#[derive(Debug, Clone, Copy)]
pub struct Rebound {
    /// Ball radius + pin radius
    pub contact_distance: f32,
    pub speed: f32,
    pub bounce: f32,
    pub jitter: f32,
}

/// Check whether a ball overlaps a pin
///
/// A ball centered exactly on the pin resolves to angle 0 (pushed right).
pub fn ball_pin_collision(ball_pos: Vec2, pin_pos: Vec2, contact_distance: f32) -> CollisionResult {
    let delta = ball_pos - pin_pos;
    let distance = delta.length();

    if distance >= contact_distance {
        return CollisionResult::miss();
    }

    let angle = if delta == Vec2::ZERO { 0.0 } else { delta.y.atan2(delta.x) };
    CollisionResult {
        hit: true,
        angle,
        penetration: contact_distance - distance,
    }
}

/// Resolve a pin hit: place the ball on the contact circle and overwrite its velocity
///
/// Returns the new `(pos, vel)`.
pub fn resolve_pin_hit(
    pin_pos: Vec2,
    angle: f32,
    rebound: &Rebound,
    rng: &mut impl RandomSource,
) -> (Vec2, Vec2) {
    let dir = Vec2::new(angle.cos(), angle.sin());
    let pos = pin_pos + dir * rebound.contact_distance;
    let jitter = rng.uniform(-rebound.jitter, rebound.jitter);
    let vel = Vec2::new(
        dir.x * rebound.speed + jitter,
        dir.y * rebound.speed * rebound.bounce,
    );
    (pos, vel)
}

/// Clamp a ball inside the side walls, inverting and damping `vx` on contact
///
/// Returns true if a wall was hit.
pub fn clamp_to_walls(
    pos: &mut Vec2,
    vel: &mut Vec2,
    ball_radius: f32,
    canvas_width: f32,
    bounce: f32,
) -> bool {
    let mut hit = false;
    if pos.x < ball_radius {
        pos.x = ball_radius;
        vel.x *= -bounce;
        hit = true;
    }
    if pos.x > canvas_width - ball_radius {
        pos.x = canvas_width - ball_radius;
        vel.x *= -bounce;
        hit = true;
    }
    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::{ScriptedSource, SimRng};
    use std::f32::consts::PI;

    fn rebound() -> Rebound {
        Rebound {
            contact_distance: 12.0,
            speed: 3.0,
            bounce: 0.7,
            jitter: 1.0,
        }
    }

    #[test]
    fn test_miss_outside_contact() {
        let result = ball_pin_collision(Vec2::new(20.0, 0.0), Vec2::ZERO, 12.0);
        assert!(!result.hit);
        // Exactly touching is not an overlap
        let result = ball_pin_collision(Vec2::new(12.0, 0.0), Vec2::ZERO, 12.0);
        assert!(!result.hit);
    }

    #[test]
    fn test_hit_angle() {
        let result = ball_pin_collision(Vec2::new(0.0, 10.0), Vec2::ZERO, 12.0);
        assert!(result.hit);
        assert!((result.angle - PI / 2.0).abs() < 0.0001);
        assert!((result.penetration - 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_concentric_ball_is_not_nan() {
        let pin = Vec2::new(50.0, 50.0);
        let result = ball_pin_collision(pin, pin, 12.0);
        assert!(result.hit);
        assert_eq!(result.angle, 0.0);

        let mut rng = ScriptedSource::constant(0.5);
        let (pos, vel) = resolve_pin_hit(pin, result.angle, &rebound(), &mut rng);
        assert!(pos.is_finite() && vel.is_finite());
        assert!((pos - Vec2::new(62.0, 50.0)).length() < 0.0001);
        assert!((vel - Vec2::new(3.0, 0.0)).length() < 0.0001);
    }

    #[test]
    fn test_resolved_ball_sits_on_contact_circle() {
        let pin = Vec2::new(300.0, 100.0);
        let mut rng = SimRng::from_seed(3);
        for i in 0..32 {
            let ball = pin + Vec2::from_angle(i as f32 * 0.2) * (i as f32 * 0.3);
            let result = ball_pin_collision(ball, pin, 12.0);
            assert!(result.hit);
            let (pos, _) = resolve_pin_hit(pin, result.angle, &rebound(), &mut rng);
            assert!(((pos - pin).length() - 12.0).abs() < 0.001);
        }
    }

    #[test]
    fn test_rebound_velocity_bounds() {
        // Ball hit from directly above: angle = -PI/2
        let mut rng = SimRng::from_seed(11);
        for _ in 0..200 {
            let (_, vel) = resolve_pin_hit(Vec2::ZERO, -PI / 2.0, &rebound(), &mut rng);
            assert!(vel.x >= -1.0 - 0.001 && vel.x <= 1.0 + 0.001);
            assert!((vel.y - (-3.0 * 0.7)).abs() < 0.001);
        }
    }

    #[test]
    fn test_left_wall_clamp() {
        let mut pos = Vec2::new(0.0, 200.0);
        let mut vel = Vec2::new(-2.0, 1.0);
        assert!(clamp_to_walls(&mut pos, &mut vel, 8.0, 600.0, 0.7));
        assert_eq!(pos.x, 8.0);
        assert!((vel.x - 1.4).abs() < 0.0001);
        assert_eq!(vel.y, 1.0);
    }

    #[test]
    fn test_right_wall_clamp() {
        let mut pos = Vec2::new(598.0, 200.0);
        let mut vel = Vec2::new(2.0, 0.0);
        assert!(clamp_to_walls(&mut pos, &mut vel, 8.0, 600.0, 0.7));
        assert_eq!(pos.x, 592.0);
        assert!((vel.x + 1.4).abs() < 0.0001);
    }

    #[test]
    fn test_no_wall_contact() {
        let mut pos = Vec2::new(300.0, 200.0);
        let mut vel = Vec2::new(2.0, 0.0);
        assert!(!clamp_to_walls(&mut pos, &mut vel, 8.0, 600.0, 0.7));
        assert_eq!(vel.x, 2.0);
    }
}
