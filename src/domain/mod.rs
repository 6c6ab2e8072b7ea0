//! Domain logic and core data structures
//!
//! Pure data with no knowledge of how a board is displayed or how input
//! arrives: cell positions, colours, and the board's per-cell paint record.

pub mod board;
pub mod color;
pub mod core;

pub use self::board::{Board, BoardError, Cell};
pub use self::color::{ColorChoice, ColorParseError, PaintTag, Rgb, random_rgb};
pub use self::core::CellCoords;
