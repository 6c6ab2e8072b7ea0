//! Sketch session controller
//!
//! Wires the grid configuration, the paint controller and the board together
//! through the notifier, and exposes the inbound operations a front-end calls.
//! Board rebuild and paint reset both subscribe to `DimensionChanged`, in that
//! order, so any later subscriber sees an already rebuilt board.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use thiserror::Error;

use crate::app::notifier::{EventKind, Notifier, SketchEvent, SubscriptionId};
use crate::app::paint::{PaintController, PaintDecision};
use crate::app::state::PaintState;
use crate::config::{ConfigError, GridConfig, parse_dimension_input};
use crate::domain::{Board, BoardError, CellCoords, Rgb};

/// Session errors
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("invalid starting dimension: {0}")]
    InvalidDefault(#[from] ConfigError),
    #[error("board setup failed: {0}")]
    Board(#[from] BoardError),
}

/// Startup settings for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SketchSettings {
    /// Cells per side for the first board
    pub default_cells: u32,
    /// Fixed pen colour used outside rainbow mode
    pub pen_color: Rgb,
    /// Seed for rainbow colours; None draws from the OS
    pub seed: Option<u64>,
    /// Side of the rendered board in pixels
    pub board_pixel_size: u32,
}

impl Default for SketchSettings {
    fn default() -> Self {
        Self {
            default_cells: GridConfig::DEFAULT_CELLS,
            pen_color: PaintController::DEFAULT_PEN_COLOR,
            seed: None,
            board_pixel_size: 550,
        }
    }
}

/// One interactive drawing session
pub struct SketchController {
    config: GridConfig,
    notifier: Notifier,
    board: Rc<RefCell<Board>>,
    paint: Rc<RefCell<PaintController>>,
    settings: SketchSettings,
}

impl SketchController {
    /// Creates a session and announces the starting dimension
    ///
    /// # Returns
    /// SketchController instance or SketchError if the default is not a valid dimension
    pub fn new(settings: SketchSettings) -> Result<Self, SketchError> {
        let paint = match settings.seed {
            Some(seed) => PaintController::with_seed(settings.pen_color, seed),
            None => PaintController::new(settings.pen_color),
        };
        let paint = Rc::new(RefCell::new(paint));
        let board = Rc::new(RefCell::new(Board::new(GridConfig::DEFAULT_CELLS)?));

        let mut notifier = Notifier::new();

        let board_sink = Rc::clone(&board);
        notifier.subscribe(EventKind::DimensionChanged, move |event| {
            if let SketchEvent::DimensionChanged { cells_per_side } = *event {
                match board_sink.borrow_mut().rebuild(cells_per_side) {
                    Ok(()) => log::debug!("board rebuilt at {cells_per_side}x{cells_per_side}"),
                    Err(e) => log::error!("board rebuild failed: {e}"),
                }
            }
        });

        let paint_sink = Rc::clone(&paint);
        notifier.subscribe(EventKind::DimensionChanged, move |_| {
            paint_sink.borrow_mut().on_grid_rebuilt();
        });

        let mut config = GridConfig::new();
        // Zero would only re-announce; a session must start from an explicit size
        let start = GridConfig::validate(f64::from(settings.default_cells))?;
        config.initialize(start, &mut notifier)?;

        Ok(Self {
            config,
            notifier,
            board,
            paint,
            settings,
        })
    }

    pub fn settings(&self) -> &SketchSettings {
        &self.settings
    }

    pub fn cells_per_side(&self) -> u32 {
        self.config.cells_per_side()
    }

    /// Borrows the board for rendering
    pub fn board(&self) -> Ref<'_, Board> {
        self.board.borrow()
    }

    pub fn paint_state(&self) -> PaintState {
        self.paint.borrow().state()
    }

    /// Registers a presentation-layer handler
    pub fn subscribe<F>(&mut self, kind: EventKind, handler: F) -> SubscriptionId
    where
        F: FnMut(&SketchEvent) + 'static,
    {
        self.notifier.subscribe(kind, handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Handles a free-text answer to the "new size" prompt
    pub fn request_dimension_change(&mut self, raw: &str) -> Result<u32, ConfigError> {
        self.set_dimension(parse_dimension_input(raw))
    }

    /// Applies an already numeric dimension request
    pub fn set_dimension(&mut self, candidate: f64) -> Result<u32, ConfigError> {
        self.config.set_dimension(candidate, &mut self.notifier)
    }

    /// Handles a click on a cell
    pub fn cell_clicked(&mut self, coords: CellCoords) -> PaintDecision {
        if !self.board.borrow().contains(coords) {
            log::debug!("click at {coords} ignored: outside board");
            return PaintDecision::NoPaint;
        }
        let decision = self.paint.borrow_mut().on_cell_clicked(coords);
        self.apply(coords, decision)
    }

    /// Handles the pointer entering a cell
    pub fn cell_hovered(&mut self, coords: CellCoords) -> PaintDecision {
        if !self.board.borrow().contains(coords) {
            log::debug!("hover at {coords} ignored: outside board");
            return PaintDecision::NoPaint;
        }
        let decision = self.paint.borrow_mut().on_cell_hovered(coords);
        self.apply(coords, decision)
    }

    /// Handles the rainbow control
    ///
    /// # Returns
    /// Whether rainbow mode is now enabled
    pub fn rainbow_button_clicked(&mut self) -> bool {
        let enabled = self.paint.borrow_mut().on_rainbow_toggled();
        self.notifier.publish(&SketchEvent::RainbowToggled { enabled });
        enabled
    }

    /// Replays a drag: click `from`, hover every cell on the way to `to`, click `to`
    ///
    /// The path steps one cell at a time along both axes, so rows, columns
    /// and diagonals are traced exactly. Both ends must lie on the board;
    /// otherwise nothing is replayed.
    pub fn stroke(&mut self, from: CellCoords, to: CellCoords) -> Result<Vec<PaintDecision>, BoardError> {
        {
            let board = self.board.borrow();
            for end in [from, to] {
                if !board.contains(end) {
                    return Err(BoardError::OutOfBounds {
                        coords: end,
                        cells_per_side: board.cells_per_side(),
                    });
                }
            }
        }

        let mut decisions = vec![self.cell_clicked(from)];
        let mut current = from;
        while current != to {
            current = CellCoords::new(step_toward(current.row, to.row), step_toward(current.col, to.col));
            decisions.push(self.cell_hovered(current));
        }
        decisions.push(self.cell_clicked(to));
        Ok(decisions)
    }

    fn apply(&mut self, coords: CellCoords, decision: PaintDecision) -> PaintDecision {
        if let PaintDecision::Paint { color, .. } = decision {
            if let Err(e) = self.board.borrow_mut().paint(coords, color) {
                log::error!("paint failed: {e}");
            }
        }
        self.notifier.publish(&SketchEvent::CellPainted {
            coords,
            color: decision.color(),
        });
        decision
    }
}

fn step_toward(from: u32, to: u32) -> u32 {
    match from.cmp(&to) {
        std::cmp::Ordering::Less => from + 1,
        std::cmp::Ordering::Greater => from - 1,
        std::cmp::Ordering::Equal => from,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{ColorMode, PenState};
    use crate::domain::{ColorChoice, PaintTag};

    fn session() -> SketchController {
        SketchController::new(SketchSettings {
            seed: Some(42),
            ..SketchSettings::default()
        })
        .unwrap()
    }

    fn rebuild_counter(session: &mut SketchController) -> Rc<RefCell<Vec<u32>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        session.subscribe(EventKind::DimensionChanged, move |event| {
            if let SketchEvent::DimensionChanged { cells_per_side } = event {
                sink.borrow_mut().push(*cells_per_side);
            }
        });
        seen
    }

    #[test]
    fn starts_at_default_dimension() {
        let session = session();
        assert_eq!(session.cells_per_side(), 16);
        assert_eq!(session.board().cells_per_side(), 16);
        assert_eq!(session.paint_state(), PaintState::default());
    }

    #[test]
    fn custom_starting_dimension() {
        let session = SketchController::new(SketchSettings {
            default_cells: 32,
            ..SketchSettings::default()
        })
        .unwrap();
        assert_eq!(session.board().cell_count(), 32 * 32);
    }

    #[test]
    fn invalid_starting_dimension_is_rejected() {
        for default_cells in [0, 65] {
            let result = SketchController::new(SketchSettings {
                default_cells,
                ..SketchSettings::default()
            });
            assert!(matches!(result, Err(SketchError::InvalidDefault(_))));
        }
    }

    #[test]
    fn drawing_scenario() {
        let mut session = session();
        let origin = CellCoords::new(3, 3);

        let decision = session.cell_clicked(origin);
        assert_eq!(decision, PaintDecision::Paint { coords: origin, color: ColorChoice::Pen(Rgb::BLACK) });

        let decision = session.cell_hovered(CellCoords::new(3, 4));
        assert_eq!(decision.color(), Some(ColorChoice::Pen(Rgb::BLACK)));

        assert_eq!(session.cell_clicked(origin), PaintDecision::NoPaint);
        assert_eq!(session.paint_state().pen, PenState::Up);

        assert!(session.rainbow_button_clicked());
        assert_eq!(session.paint_state(), PaintState { pen: PenState::Up, mode: ColorMode::Rainbow });

        let decision = session.cell_clicked(origin);
        assert!(matches!(decision.color(), Some(ColorChoice::Random(_))));
        assert_eq!(session.board().cell(origin).unwrap().tag(), PaintTag::Random);

        let rebuilds = rebuild_counter(&mut session);
        assert_eq!(session.request_dimension_change("8"), Ok(8));
        assert_eq!(*rebuilds.borrow(), vec![8]);
        assert_eq!(session.paint_state(), PaintState::default());
        assert_eq!(session.board().cells_per_side(), 8);
        assert_eq!(session.board().painted_count(), 0);
    }

    #[test]
    fn rejected_dimension_changes_nothing() {
        let mut session = session();
        session.cell_clicked(CellCoords::new(0, 0));
        let rebuilds = rebuild_counter(&mut session);

        for raw in ["65", "-3", "2.5", "lots"] {
            assert!(matches!(session.request_dimension_change(raw), Err(ConfigError::OutOfRange { .. })));
        }
        assert_eq!(session.cells_per_side(), 16);
        assert!(rebuilds.borrow().is_empty());
        assert!(session.paint_state().is_pen_down());
        assert_eq!(session.board().painted_count(), 1);
    }

    #[test]
    fn blank_answer_clears_board_at_same_size() {
        let mut session = session();
        session.set_dimension(10.0).unwrap();
        session.cell_clicked(CellCoords::new(1, 1));
        let rebuilds = rebuild_counter(&mut session);

        assert_eq!(session.request_dimension_change(""), Err(ConfigError::NoOp { current: 10 }));
        assert_eq!(*rebuilds.borrow(), vec![10]);
        assert_eq!(session.board().cells_per_side(), 10);
        assert_eq!(session.board().painted_count(), 0);
        assert_eq!(session.paint_state(), PaintState::default());
    }

    #[test]
    fn every_accepted_dimension_resets_paint_state() {
        let mut session = session();
        for n in [1u32, 2, 31, 64] {
            session.rainbow_button_clicked();
            session.cell_clicked(CellCoords::new(0, 0));
            assert_eq!(session.set_dimension(f64::from(n)), Ok(n));
            assert_eq!(session.paint_state(), PaintState::default());
            assert_eq!(session.board().cell_count(), (n * n) as usize);
        }
    }

    #[test]
    fn clicks_outside_board_are_ignored() {
        let mut session = session();
        session.set_dimension(4.0).unwrap();
        assert_eq!(session.cell_clicked(CellCoords::new(4, 0)), PaintDecision::NoPaint);
        assert_eq!(session.cell_hovered(CellCoords::new(0, 9)), PaintDecision::NoPaint);
        assert!(!session.paint_state().is_pen_down());
    }

    #[test]
    fn hovers_outside_board_publish_nothing() {
        let mut session = session();
        session.set_dimension(4.0).unwrap();
        session.cell_clicked(CellCoords::new(0, 0));
        let events = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&events);
        session.subscribe(EventKind::CellPainted, move |_| *sink.borrow_mut() += 1);

        assert_eq!(session.cell_hovered(CellCoords::new(4, 4)), PaintDecision::NoPaint);
        assert!(session.paint_state().is_pen_down());
        assert_eq!(session.board().painted_count(), 1);
        assert_eq!(*events.borrow(), 0);
    }

    #[test]
    fn cell_paint_events_are_published() {
        let mut session = session();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        session.subscribe(EventKind::CellPainted, move |event| sink.borrow_mut().push(*event));

        session.cell_hovered(CellCoords::new(0, 0));
        session.cell_clicked(CellCoords::new(0, 1));

        let events = events.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], SketchEvent::CellPainted { coords: CellCoords::new(0, 0), color: None });
        assert_eq!(
            events[1],
            SketchEvent::CellPainted {
                coords: CellCoords::new(0, 1),
                color: Some(ColorChoice::Pen(Rgb::BLACK)),
            }
        );
    }

    #[test]
    fn rainbow_events_are_published() {
        let mut session = session();
        let states = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&states);
        let id = session.subscribe(EventKind::RainbowToggled, move |event| {
            if let SketchEvent::RainbowToggled { enabled } = event {
                sink.borrow_mut().push(*enabled);
            }
        });

        session.rainbow_button_clicked();
        session.rainbow_button_clicked();
        assert!(session.unsubscribe(id));
        session.rainbow_button_clicked();
        assert_eq!(*states.borrow(), vec![true, false]);
    }

    #[test]
    fn stroke_paints_a_row_and_lifts_pen() {
        let mut session = session();
        let decisions = session.stroke(CellCoords::new(2, 0), CellCoords::new(2, 5)).unwrap();

        assert_eq!(decisions.len(), 7);
        assert!(decisions[..6].iter().all(PaintDecision::is_paint));
        assert_eq!(decisions[6], PaintDecision::NoPaint);
        assert_eq!(session.board().painted_count(), 6);
        assert!(!session.paint_state().is_pen_down());
    }

    #[test]
    fn stroke_traces_diagonal() {
        let mut session = session();
        session.stroke(CellCoords::new(3, 3), CellCoords::new(0, 0)).unwrap();
        for i in 0..=3 {
            assert!(session.board().cell(CellCoords::new(i, i)).unwrap().is_painted());
        }
        assert_eq!(session.board().painted_count(), 4);
    }

    #[test]
    fn stroke_off_the_board_does_nothing() {
        let mut session = session();
        let events = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&events);
        session.subscribe(EventKind::CellPainted, move |_| *sink.borrow_mut() += 1);

        let far = CellCoords::new(0, 70);
        assert_eq!(
            session.stroke(CellCoords::new(0, 0), far),
            Err(BoardError::OutOfBounds { coords: far, cells_per_side: 16 })
        );
        let huge = CellCoords::new(0, 4_000_000_000);
        assert!(session.stroke(huge, CellCoords::new(0, 0)).is_err());

        assert!(!session.paint_state().is_pen_down());
        assert_eq!(session.board().painted_count(), 0);
        assert_eq!(*events.borrow(), 0);
    }
}
