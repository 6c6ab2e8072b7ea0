//! Paint controller: decides whether and how a cell interaction paints

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::app::state::{PaintEvent, PaintState, StateMachine};
use crate::domain::{CellCoords, ColorChoice, Rgb, random_rgb};

/// Outcome of a cell interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintDecision {
    Paint { coords: CellCoords, color: ColorChoice },
    NoPaint,
}

impl PaintDecision {
    pub fn color(&self) -> Option<ColorChoice> {
        match self {
            PaintDecision::Paint { color, .. } => Some(*color),
            PaintDecision::NoPaint => None,
        }
    }

    pub fn is_paint(&self) -> bool {
        matches!(self, PaintDecision::Paint { .. })
    }
}

/// Owns pen and rainbow state for one drawing session
#[derive(Debug, Clone)]
pub struct PaintController {
    state: PaintState,
    pen_color: Rgb,
    rng: StdRng,
}

impl Default for PaintController {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PEN_COLOR)
    }
}

impl PaintController {
    pub const DEFAULT_PEN_COLOR: Rgb = Rgb::BLACK;

    /// Creates a controller seeded from the operating system
    pub fn new(pen_color: Rgb) -> Self {
        Self::with_rng(pen_color, StdRng::from_os_rng())
    }

    /// Creates a controller with a reproducible colour sequence
    pub fn with_seed(pen_color: Rgb, seed: u64) -> Self {
        Self::with_rng(pen_color, StdRng::seed_from_u64(seed))
    }

    fn with_rng(pen_color: Rgb, rng: StdRng) -> Self {
        Self {
            state: PaintState::default(),
            pen_color,
            rng,
        }
    }

    pub fn state(&self) -> PaintState {
        self.state
    }

    pub fn is_pen_down(&self) -> bool {
        self.state.is_pen_down()
    }

    pub fn is_rainbow_enabled(&self) -> bool {
        self.state.is_rainbow()
    }

    pub fn pen_color(&self) -> Rgb {
        self.pen_color
    }

    /// Toggles the pen and paints the clicked cell if the pen went down
    pub fn on_cell_clicked(&mut self, coords: CellCoords) -> PaintDecision {
        self.state = StateMachine::process_event(self.state, PaintEvent::Click);
        log::debug!("click at {coords}: pen {:?}", self.state.pen);
        self.paint_if_down(coords)
    }

    /// Paints the hovered cell while the pen is down
    pub fn on_cell_hovered(&mut self, coords: CellCoords) -> PaintDecision {
        self.paint_if_down(coords)
    }

    /// Flips rainbow mode and lifts the pen
    ///
    /// # Returns
    /// Whether rainbow mode is now enabled
    pub fn on_rainbow_toggled(&mut self) -> bool {
        self.state = StateMachine::process_event(self.state, PaintEvent::RainbowToggle);
        log::debug!("rainbow mode {:?}, pen lifted", self.state.mode);
        self.state.is_rainbow()
    }

    /// Returns to `(Up, Normal)` after the board is rebuilt
    pub fn on_grid_rebuilt(&mut self) {
        self.state = StateMachine::process_event(self.state, PaintEvent::GridRebuild);
    }

    /// Picks the colour for a stroke under the current mode
    pub fn decide_color(&mut self, _coords: CellCoords) -> ColorChoice {
        if self.state.is_rainbow() {
            ColorChoice::Random(random_rgb(&mut self.rng))
        } else {
            ColorChoice::Pen(self.pen_color)
        }
    }

    fn paint_if_down(&mut self, coords: CellCoords) -> PaintDecision {
        if !self.state.is_pen_down() {
            return PaintDecision::NoPaint;
        }
        let color = self.decide_color(coords);
        PaintDecision::Paint { coords, color }
    }
}
