//! Paint state machine
//!
//! The drawing state has two independent axes: whether the pen is on the
//! board and which colouring mode is active. Events move between the four
//! combinations; there is no terminal state.

/// Whether hovering paints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PenState {
    #[default]
    Up,
    Down,
}

impl PenState {
    pub fn toggled(self) -> Self {
        match self {
            PenState::Up => PenState::Down,
            PenState::Down => PenState::Up,
        }
    }
}

/// Colouring policy applied to painted cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Normal,
    Rainbow,
}

impl ColorMode {
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Normal => ColorMode::Rainbow,
            ColorMode::Rainbow => ColorMode::Normal,
        }
    }
}

/// Combined drawing state; the default is `(Up, Normal)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaintState {
    pub pen: PenState,
    pub mode: ColorMode,
}

impl PaintState {
    pub fn is_pen_down(&self) -> bool {
        self.pen == PenState::Down
    }

    pub fn is_rainbow(&self) -> bool {
        self.mode == ColorMode::Rainbow
    }
}

/// Events that change the drawing state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintEvent {
    /// A cell was clicked
    Click,
    /// The rainbow control was pressed
    RainbowToggle,
    /// The board was rebuilt
    GridRebuild,
}

/// State machine for paint state transitions
pub struct StateMachine;

impl StateMachine {
    /// Processes an event and returns the next state
    ///
    /// # Arguments
    /// * `current` - Current drawing state
    /// * `event` - Event to apply
    pub fn process_event(current: PaintState, event: PaintEvent) -> PaintState {
        match event {
            PaintEvent::Click => PaintState {
                pen: current.pen.toggled(),
                ..current
            },
            // Changing mode lifts the pen so a stroke never spans two modes
            PaintEvent::RainbowToggle => PaintState {
                pen: PenState::Up,
                mode: current.mode.toggled(),
            },
            PaintEvent::GridRebuild => PaintState::default(),
        }
    }
}
