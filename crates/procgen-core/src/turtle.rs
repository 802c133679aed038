//! Turtle interpretation of tree strings.
//!
//! | symbol   | effect                                        |
//! |----------|-----------------------------------------------|
//! | `a`, `d` | draw one step, move to its end                |
//! | `b`      | save position and heading                     |
//! | `c`      | turn by `+angle` about `axis`                 |
//! | `e`      | turn by `-angle` about `axis`                 |
//! | `f`      | restore the most recent save                  |
//!
//! Any other symbol is ignored.

use glam::Vec3;

use crate::error::{ProcgenError, Result};
use crate::math::{rotate_about, LineSegment};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurtleConfig {
    /// Initial heading; its length is the step length.
    pub step: Vec3,
    pub angle: f32,
    pub axis: Vec3,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            step: Vec3::new(0.0, 15.0, 0.0),
            angle: std::f32::consts::PI / 7.0,
            axis: Vec3::Z,
        }
    }
}

impl TurtleConfig {
    pub fn with_step(mut self, step: Vec3) -> Self {
        self.step = step;
        self
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurtleState {
    pub position: Vec3,
    pub heading: Vec3,
}

#[derive(Clone, Debug)]
pub struct Turtle {
    pub state: TurtleState,
    stack: Vec<TurtleState>,
    config: TurtleConfig,
}

impl Turtle {
    pub fn new(origin: Vec3, config: TurtleConfig) -> Self {
        Self {
            state: TurtleState {
                position: origin,
                heading: config.step,
            },
            stack: Vec::new(),
            config,
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Apply one symbol. `position` is its index in the source string, used
    /// only for error reporting. Returns the drawn segment, if any.
    pub fn step(&mut self, symbol: char, position: usize) -> Result<Option<LineSegment>> {
        match symbol {
            'a' | 'd' => {
                let start = self.state.position;
                let end = start + self.state.heading;
                self.state.position = end;
                return Ok(Some(LineSegment::new(start, end)));
            }
            'b' => self.stack.push(self.state),
            'c' => {
                self.state.heading =
                    rotate_about(self.state.heading, self.config.axis, self.config.angle)
            }
            'e' => {
                self.state.heading =
                    rotate_about(self.state.heading, self.config.axis, -self.config.angle)
            }
            'f' => {
                self.state = self
                    .stack
                    .pop()
                    .ok_or(ProcgenError::UnbalancedRestore { position })?;
            }
            _ => {}
        }
        Ok(None)
    }
}

/// Walk `symbols` from `origin` and collect the drawn segments in order.
/// Fails on a restore with nothing saved.
pub fn interpret(symbols: &str, origin: Vec3, config: &TurtleConfig) -> Result<Vec<LineSegment>> {
    let mut turtle = Turtle::new(origin, *config);
    let mut lines = Vec::new();
    for (position, symbol) in symbols.chars().enumerate() {
        if let Some(seg) = turtle.step(symbol, position)? {
            lines.push(seg);
        }
    }
    Ok(lines)
}
