//! Application state and main UI controller

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::Event;
use glam::vec2;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use wn_core::dungeon::{Level, LevelConfig, Point, generate_random};
use wn_core::steering::{Agent, AgentEvent, Behavior, SteeringError, SteeringParams};

use crate::glyphs::GlyphMode;
use crate::input::{Command, key_to_command};
use crate::widgets::MapWidget;

/// Steering tuning in cell units rather than the pixel-scale defaults
const AGENT_MAX_SPEED: f32 = 30.0;
const AGENT_MASS: f32 = 2.0;
const AGENT_SLOWDOWN_RADIUS: f32 = 9.0;

/// Application state
pub struct App {
    config: LevelConfig,
    level: Level,
    agent: Agent,
    /// Shared sink the agent's observer callback writes into
    agent_events: Rc<RefCell<Vec<AgentEvent>>>,
    /// Target marker the arrow keys move
    target: Point,
    glyphs: GlyphMode,
    status: String,
    should_quit: bool,
}

impl App {
    /// Create the viewer around an already-generated level
    pub fn new(config: LevelConfig, level: Level, glyphs: GlyphMode) -> Result<Self, SteeringError> {
        let spawn = spawn_cell(&level);
        let mut agent = Agent::new(
            vec2(spawn.x as f32, spawn.y as f32),
            Behavior::Arrive,
            SteeringParams {
                max_speed: AGENT_MAX_SPEED,
                mass: AGENT_MASS,
                slowdown_radius: AGENT_SLOWDOWN_RADIUS,
            },
        )?;

        let agent_events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&agent_events);
        agent.on_event(move |event| sink.borrow_mut().push(event));

        let target = target_cell(&level);
        Ok(Self {
            config,
            level,
            agent,
            agent_events,
            target,
            glyphs,
            status: String::from("space sends the agent to the marker"),
            should_quit: false,
        })
    }

    /// True once the user asked to quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event
            && let Some(command) = key_to_command(key)
        {
            self.apply(command);
        }
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Quit => self.should_quit = true,
            Command::Regenerate => self.regenerate(),
            Command::ToggleBehavior => {
                let behavior = match self.agent.behavior() {
                    Behavior::Follow => Behavior::Arrive,
                    Behavior::Arrive => Behavior::Follow,
                };
                self.agent.set_behavior(behavior);
                self.status = format!("behavior: {}", behavior_name(behavior));
            }
            Command::MoveTarget(dx, dy) => {
                self.target = Point::new(
                    (self.target.x + dx).clamp(0, self.level.width() - 1),
                    (self.target.y + dy).clamp(0, self.level.height() - 1),
                );
            }
            Command::SendAgent => {
                self.agent
                    .set_target(vec2(self.target.x as f32, self.target.y as f32));
            }
        }
    }

    /// Advance the agent by one host tick of `delta` seconds
    pub fn tick(&mut self, delta: f32) {
        self.agent.update(delta);
        for event in self.agent_events.borrow_mut().drain(..) {
            self.status = match event {
                AgentEvent::StartedMoving => format!("agent heading for {}", self.target),
                AgentEvent::Arrived => String::from("agent arrived"),
            };
        }
    }

    fn regenerate(&mut self) {
        match generate_random(&self.config) {
            Ok(level) => {
                let spawn = spawn_cell(&level);
                self.agent.place_at(vec2(spawn.x as f32, spawn.y as f32));
                self.target = target_cell(&level);
                self.status = format!("generated seed {}", level.seed());
                self.level = level;
            }
            Err(e) => self.status = e.to_string(),
        }
    }

    /// Draw the whole frame
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(2)])
            .split(frame.area());

        let agent_pos = self.agent.position();
        let agent_cell = Point::new(agent_pos.x.round() as i32, agent_pos.y.round() as i32);
        frame.render_widget(
            MapWidget::new(&self.level, agent_cell, self.target, self.glyphs),
            chunks[0],
        );

        let summary = Line::from(vec![
            Span::styled(
                format!(
                    " rooms {}  floor {}  behavior {} ",
                    self.level.rooms().len(),
                    self.level.floor().len(),
                    behavior_name(self.agent.behavior()),
                ),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(self.status.clone()),
        ]);
        let help = Line::from(Span::styled(
            " q quit  r regenerate  arrows/hjkl move marker  space send agent  b behavior ",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(vec![summary, help]), chunks[1]);
    }
}

fn behavior_name(behavior: Behavior) -> &'static str {
    match behavior {
        Behavior::Follow => "follow",
        Behavior::Arrive => "arrive",
    }
}

/// Agent spawn: center of the first accepted room
fn spawn_cell(level: &Level) -> Point {
    level
        .rooms()
        .first()
        .map(|room| room.center())
        .unwrap_or_default()
}

/// Initial target marker: center of the last accepted room
fn target_cell(level: &Level) -> Point {
    level
        .rooms()
        .last()
        .map(|room| room.center())
        .unwrap_or_default()
}
