//! Steering behaviors
//!
//! Pure velocity-update functions: given the current velocity and
//! positions, produce the next velocity toward a target. The host loop is
//! responsible for applying the returned velocity to whatever body it
//! moves; see [`Agent`] for a ready-made controller.

mod agent;

pub use agent::{Agent, AgentEvent, Behavior};

use glam::Vec2;
use thiserror::Error;

/// Default steering mass
pub const DEFAULT_MASS: f32 = 2.0;

/// Default maximum speed, in units per second
pub const DEFAULT_MAX_SPEED: f32 = 400.0;

/// Default slowdown radius for [`arrive_to`]
pub const DEFAULT_SLOWDOWN_RADIUS: f32 = 200.0;

/// Distance at which an agent counts as arrived
pub const DISTANCE_THRESHOLD: f32 = 3.0;

/// Fraction of max speed kept as the slowdown ramp bottoms out.
///
/// The ramp floors at 20% rather than zero so an agent still crosses the
/// arrived-distance threshold instead of crawling toward it forever.
const SLOWDOWN_FLOOR: f32 = 0.2;

/// Reasons a steering parameter bundle is unusable
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SteeringError {
    #[error("mass must be positive, got {0}")]
    NonPositiveMass(f32),

    #[error("max speed must be positive, got {0}")]
    NonPositiveMaxSpeed(f32),

    #[error("slowdown radius must be positive, got {0}")]
    NonPositiveSlowdownRadius(f32),
}

/// Steering tuning parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringParams {
    /// Speed cap for the desired velocity, units per second
    pub max_speed: f32,
    /// Divisor applied to the steering correction; heavier turns slower
    pub mass: f32,
    /// Distance inside which [`arrive_to`] ramps the speed down
    pub slowdown_radius: f32,
}

impl Default for SteeringParams {
    fn default() -> Self {
        Self {
            max_speed: DEFAULT_MAX_SPEED,
            mass: DEFAULT_MASS,
            slowdown_radius: DEFAULT_SLOWDOWN_RADIUS,
        }
    }
}

impl SteeringParams {
    /// Reject non-positive tuning values before they reach the math
    pub fn validate(&self) -> Result<(), SteeringError> {
        if !(self.mass > 0.0) {
            return Err(SteeringError::NonPositiveMass(self.mass));
        }
        if !(self.max_speed > 0.0) {
            return Err(SteeringError::NonPositiveMaxSpeed(self.max_speed));
        }
        if !(self.slowdown_radius > 0.0) {
            return Err(SteeringError::NonPositiveSlowdownRadius(
                self.slowdown_radius,
            ));
        }
        Ok(())
    }
}

/// Velocity update steering toward `target` at full speed.
///
/// The desired velocity points from `position` to `target` at `max_speed`;
/// the difference to the current velocity, divided by `mass`, turns the
/// velocity toward it a little more each call. Caller guarantees
/// `mass > 0`; see [`SteeringParams::validate`].
pub fn follow(velocity: Vec2, position: Vec2, target: Vec2, max_speed: f32, mass: f32) -> Vec2 {
    let desired = (target - position).normalize_or_zero() * max_speed;
    let steering = (desired - velocity) / mass;
    velocity + steering
}

/// Like [`follow`], but ramps the desired speed down inside
/// `slowdown_radius` so the agent decelerates into the target.
pub fn arrive_to(
    velocity: Vec2,
    position: Vec2,
    target: Vec2,
    max_speed: f32,
    slowdown_radius: f32,
    mass: f32,
) -> Vec2 {
    let distance = position.distance(target);
    let mut desired = (target - position).normalize_or_zero() * max_speed;
    if distance < slowdown_radius {
        desired *= slowdown_scale(distance, slowdown_radius);
    }
    let steering = (desired - velocity) / mass;
    velocity + steering
}

/// Linear ramp from full speed at the radius edge down to the 20% floor
/// at distance zero
pub fn slowdown_scale(distance: f32, slowdown_radius: f32) -> f32 {
    (distance / slowdown_radius) * (1.0 - SLOWDOWN_FLOOR) + SLOWDOWN_FLOOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    #[test]
    fn test_follow_with_unit_mass_reaches_desired_velocity() {
        // With mass 1 the steering correction is applied in full
        let velocity = vec2(10.0, -5.0);
        let position = vec2(0.0, 0.0);
        let target = vec2(100.0, 0.0);

        let next = follow(velocity, position, target, 400.0, 1.0);
        assert_eq!(next, vec2(400.0, 0.0));
    }

    #[test]
    fn test_follow_turns_velocity_toward_target() {
        let velocity = vec2(0.0, 100.0);
        let next = follow(velocity, vec2(0.0, 0.0), vec2(50.0, 0.0), 400.0, 2.0);

        // Halfway between current and desired
        assert_eq!(next, vec2(200.0, 50.0));
    }

    #[test]
    fn test_follow_at_target_decays_velocity() {
        // Desired velocity is zero when already on the target
        let velocity = vec2(80.0, 0.0);
        let position = vec2(5.0, 5.0);
        let next = follow(velocity, position, position, 400.0, 2.0);
        assert_eq!(next, vec2(40.0, 0.0));
    }

    #[test]
    fn test_slowdown_scale_floor() {
        assert_eq!(slowdown_scale(0.0, 200.0), 0.2);
    }

    #[test]
    fn test_slowdown_scale_at_radius_edge() {
        let scale = slowdown_scale(200.0, 200.0);
        assert!((scale - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_arrive_beyond_radius_matches_follow() {
        let velocity = vec2(20.0, 30.0);
        let position = vec2(0.0, 0.0);
        let target = vec2(500.0, 0.0);

        let arrived = arrive_to(velocity, position, target, 400.0, 200.0, 2.0);
        let followed = follow(velocity, position, target, 400.0, 2.0);
        assert_eq!(arrived, followed);
    }

    #[test]
    fn test_arrive_slows_inside_radius() {
        let position = vec2(0.0, 0.0);
        let target = vec2(100.0, 0.0);

        // Distance 100 inside radius 200: scale = 0.5 * 0.8 + 0.2 = 0.6
        let next = arrive_to(Vec2::ZERO, position, target, 400.0, 200.0, 1.0);
        assert!((next.x - 240.0).abs() < 1e-3, "got {}", next.x);
        assert_eq!(next.y, 0.0);
    }

    #[test]
    fn test_params_validation() {
        assert!(SteeringParams::default().validate().is_ok());

        let bad_mass = SteeringParams {
            mass: 0.0,
            ..Default::default()
        };
        assert_eq!(
            bad_mass.validate(),
            Err(SteeringError::NonPositiveMass(0.0))
        );

        let bad_speed = SteeringParams {
            max_speed: -1.0,
            ..Default::default()
        };
        assert_eq!(
            bad_speed.validate(),
            Err(SteeringError::NonPositiveMaxSpeed(-1.0))
        );

        let bad_radius = SteeringParams {
            slowdown_radius: 0.0,
            ..Default::default()
        };
        assert_eq!(
            bad_radius.validate(),
            Err(SteeringError::NonPositiveSlowdownRadius(0.0))
        );
    }

    #[test]
    fn test_params_reject_nan() {
        let params = SteeringParams {
            mass: f32::NAN,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }
}
