//! etch-grid: grid sizing and paint-state core for an etch-a-sketch board
//!
//! The crate is split the same way the application is layered:
//! `config` owns the board dimension, `domain` holds pure data (cells,
//! colours), `app` owns interaction state and event dispatch, and `ui`
//! contains the presentation collaborators that drive and render a session.

pub mod app;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ui;

pub use app::{PaintController, PaintDecision, SketchController, SketchSettings};
pub use config::{ConfigError, GridConfig};
pub use domain::{Board, CellCoords, ColorChoice, PaintTag, Rgb};
