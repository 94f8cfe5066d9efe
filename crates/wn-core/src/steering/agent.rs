//! Agent motion controller
//!
//! Engine-free wrapper over the steering functions: the host loop calls
//! [`Agent::update`] once per tick, and interested parties register plain
//! callbacks instead of listening on a signal bus.

use core::fmt;

use glam::Vec2;

use super::{DISTANCE_THRESHOLD, SteeringError, SteeringParams, arrive_to, follow};

/// Which steering function drives the agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Behavior {
    /// Full speed all the way to the target
    Follow,
    /// Slow down inside the slowdown radius
    #[default]
    Arrive,
}

/// Notifications emitted by [`Agent::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentEvent {
    /// A new target was taken and the agent began moving
    StartedMoving,
    /// The agent came within the arrived-distance threshold
    Arrived,
}

type Observer = Box<dyn FnMut(AgentEvent)>;

/// A steering-driven agent advanced by an external host loop
pub struct Agent {
    position: Vec2,
    velocity: Vec2,
    behavior: Behavior,
    params: SteeringParams,
    target: Option<Vec2>,
    /// StartedMoving is pending for the next update
    started: bool,
    observers: Vec<Observer>,
}

impl fmt::Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("position", &self.position)
            .field("velocity", &self.velocity)
            .field("behavior", &self.behavior)
            .field("target", &self.target)
            .finish()
    }
}

impl Agent {
    /// Create an agent at `position`; rejects invalid tuning parameters
    pub fn new(
        position: Vec2,
        behavior: Behavior,
        params: SteeringParams,
    ) -> Result<Self, SteeringError> {
        params.validate()?;
        Ok(Self {
            position,
            velocity: Vec2::ZERO,
            behavior,
            params,
            target: None,
            started: false,
            observers: Vec::new(),
        })
    }

    /// Current position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Current velocity
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Active behavior
    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    /// Switch the steering behavior; takes effect on the next update
    pub fn set_behavior(&mut self, behavior: Behavior) {
        self.behavior = behavior;
    }

    /// Target the agent is moving toward, if any
    pub fn target(&self) -> Option<Vec2> {
        self.target
    }

    /// Teleport the agent and stop it, dropping any target
    pub fn place_at(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::ZERO;
        self.target = None;
        self.started = false;
    }

    /// Point the agent at a new target.
    ///
    /// `StartedMoving` fires on the next update, not immediately.
    pub fn set_target(&mut self, target: Vec2) {
        self.target = Some(target);
        self.started = true;
    }

    /// Register a callback for agent events
    pub fn on_event(&mut self, observer: impl FnMut(AgentEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn emit(&mut self, event: AgentEvent) {
        for observer in &mut self.observers {
            observer(event);
        }
    }

    /// Advance one host tick of `delta` seconds.
    ///
    /// Does nothing without a target. Within the arrived-distance
    /// threshold the agent stops and drops its target.
    pub fn update(&mut self, delta: f32) {
        let Some(target) = self.target else {
            return;
        };

        if self.started {
            self.started = false;
            self.emit(AgentEvent::StartedMoving);
        }

        if self.position.distance(target) < DISTANCE_THRESHOLD {
            self.target = None;
            self.velocity = Vec2::ZERO;
            self.emit(AgentEvent::Arrived);
            return;
        }

        self.velocity = match self.behavior {
            Behavior::Follow => follow(
                self.velocity,
                self.position,
                target,
                self.params.max_speed,
                self.params.mass,
            ),
            Behavior::Arrive => arrive_to(
                self.velocity,
                self.position,
                target,
                self.params.max_speed,
                self.params.slowdown_radius,
                self.params.mass,
            ),
        };
        self.position += self.velocity * delta;
    }
}
