//! Board rasterisation
//!
//! Renders a board to a pixmap with tiny-skia. Layout is computed first as
//! plain geometry so it can be tested without touching pixels.

use std::path::Path;

use tiny_skia::{Color, Paint, PathBuilder, Pixmap, Rect as SkiaRect, Stroke, Transform};

use crate::domain::{Board, CellCoords, Rgb};

/// Rendering errors
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("Failed to create pixmap for rendering")]
    PixmapCreationFailed,

    #[error("Board of {pixels}px cannot hold {cells} cells per side")]
    InvalidBoardSize { pixels: u32, cells: u32 },

    #[error("Failed to write PNG: {0}")]
    SaveFailed(String),
}

/// Filled square for one painted cell
#[derive(Debug, Clone)]
pub struct CellFill {
    pub coords: CellCoords,
    pub rect: SkiaRect,
    pub color: Color,
}

/// Grid line between cells
#[derive(Debug, Clone)]
pub struct Line {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub width: f32,
    pub color: Color,
}

/// Pre-calculated geometry for one board
#[derive(Debug, Clone)]
pub struct BoardLayout {
    /// Painted cells; unpainted cells show the background
    pub fills: Vec<CellFill>,
    pub lines: Vec<Line>,
    /// Side of the square canvas in pixels
    pub canvas_size: u32,
    /// Side of one cell in pixels (board size / cells per side)
    pub cell_size: f32,
}

impl BoardLayout {
    /// Computes the layout for `board` on a square canvas of `board_px` pixels
    pub fn from_board(board: &Board, board_px: u32, show_lines: bool) -> Result<Self, RendererError> {
        let cells = board.cells_per_side();
        if board_px < cells {
            return Err(RendererError::InvalidBoardSize { pixels: board_px, cells });
        }

        let cell_size = board_px as f32 / cells as f32;
        let mut layout = Self {
            fills: Vec::new(),
            lines: Vec::new(),
            canvas_size: board_px,
            cell_size,
        };

        for (coords, cell) in board.iter() {
            let Some(choice) = cell.paint() else { continue };
            let rect = SkiaRect::from_xywh(
                coords.col as f32 * cell_size,
                coords.row as f32 * cell_size,
                cell_size,
                cell_size,
            )
            .ok_or(RendererError::InvalidBoardSize { pixels: board_px, cells })?;
            layout.fills.push(CellFill {
                coords,
                rect,
                color: to_skia(choice.rgb()),
            });
        }

        if show_lines {
            layout.calculate_grid_lines(cells);
        }

        Ok(layout)
    }

    fn calculate_grid_lines(&mut self, cells: u32) {
        let line_color = Color::from_rgba8(0, 0, 0, 40);
        let extent = self.canvas_size as f32;

        for i in 1..cells {
            let offset = i as f32 * self.cell_size;
            self.lines.push(Line {
                x1: offset,
                y1: 0.0,
                x2: offset,
                y2: extent,
                width: 1.0,
                color: line_color,
            });
            self.lines.push(Line {
                x1: 0.0,
                y1: offset,
                x2: extent,
                y2: offset,
                width: 1.0,
                color: line_color,
            });
        }
    }
}

fn to_skia(rgb: Rgb) -> Color {
    Color::from_rgba8(rgb.r, rgb.g, rgb.b, 255)
}

/// Board renderer using tiny-skia
#[derive(Debug, Clone)]
pub struct BoardRenderer {
    background: Rgb,
}

impl BoardRenderer {
    pub fn new(background: Rgb) -> Self {
        Self { background }
    }

    /// Render a board layout to a pixmap
    pub fn render_layout(&self, layout: &BoardLayout) -> Result<Pixmap, RendererError> {
        let mut pixmap =
            Pixmap::new(layout.canvas_size, layout.canvas_size).ok_or(RendererError::PixmapCreationFailed)?;
        pixmap.fill(to_skia(self.background));

        for fill in &layout.fills {
            let mut paint = Paint::default();
            paint.set_color(fill.color);
            pixmap.fill_rect(fill.rect, &paint, Transform::identity(), None);
        }

        self.render_lines(&mut pixmap, &layout.lines);
        Ok(pixmap)
    }

    /// Lays out and renders `board` in one step
    pub fn render_board(&self, board: &Board, board_px: u32, show_lines: bool) -> Result<Pixmap, RendererError> {
        let layout = BoardLayout::from_board(board, board_px, show_lines)?;
        self.render_layout(&layout)
    }

    pub fn save_png(&self, pixmap: &Pixmap, path: &Path) -> Result<(), RendererError> {
        pixmap
            .save_png(path)
            .map_err(|e| RendererError::SaveFailed(e.to_string()))
    }

    fn render_lines(&self, pixmap: &mut Pixmap, lines: &[Line]) {
        for line in lines {
            let mut path_builder = PathBuilder::new();
            path_builder.move_to(line.x1, line.y1);
            path_builder.line_to(line.x2, line.y2);

            if let Some(path) = path_builder.finish() {
                let mut paint = Paint::default();
                paint.set_color(line.color);

                let stroke = Stroke {
                    width: line.width,
                    ..Stroke::default()
                };

                pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            }
        }
    }
}

impl Default for BoardRenderer {
    fn default() -> Self {
        Self::new(Rgb::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ColorChoice;

    fn painted_board() -> Board {
        let mut board = Board::new(4).unwrap();
        board.paint(CellCoords::new(0, 0), ColorChoice::Pen(Rgb::BLACK)).unwrap();
        board.paint(CellCoords::new(3, 2), ColorChoice::Random(Rgb::new(200, 10, 30))).unwrap();
        board
    }

    #[test]
    fn layout_has_one_fill_per_painted_cell() {
        let layout = BoardLayout::from_board(&painted_board(), 40, false).unwrap();
        assert_eq!(layout.fills.len(), 2);
        assert_eq!(layout.cell_size, 10.0);
        assert!(layout.lines.is_empty());

        let fill = &layout.fills[1];
        assert_eq!(fill.coords, CellCoords::new(3, 2));
        assert_eq!(fill.rect.x(), 20.0);
        assert_eq!(fill.rect.y(), 30.0);
    }

    #[test]
    fn grid_lines_between_cells() {
        let layout = BoardLayout::from_board(&painted_board(), 40, true).unwrap();
        // 3 inner boundaries per axis
        assert_eq!(layout.lines.len(), 6);
    }

    #[test]
    fn default_board_size_divides_evenly_enough() {
        let board = Board::new(16).unwrap();
        let layout = BoardLayout::from_board(&board, 550, false).unwrap();
        assert!((layout.cell_size - 34.375).abs() < f32::EPSILON);
    }

    #[test]
    fn too_small_canvas_is_rejected() {
        let board = Board::new(64).unwrap();
        assert!(matches!(
            BoardLayout::from_board(&board, 32, false),
            Err(RendererError::InvalidBoardSize { pixels: 32, cells: 64 })
        ));
    }

    #[test]
    fn pixels_match_cell_paint() {
        let renderer = BoardRenderer::default();
        let pixmap = renderer.render_board(&painted_board(), 40, false).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (40, 40));

        let black = pixmap.pixel(5, 5).unwrap();
        assert_eq!((black.red(), black.green(), black.blue()), (0, 0, 0));

        let random = pixmap.pixel(25, 35).unwrap();
        assert_eq!((random.red(), random.green(), random.blue()), (200, 10, 30));

        let blank = pixmap.pixel(35, 5).unwrap();
        assert_eq!((blank.red(), blank.green(), blank.blue()), (255, 255, 255));
    }

    #[test]
    fn writes_png() {
        let renderer = BoardRenderer::default();
        let pixmap = renderer.render_board(&painted_board(), 40, true).unwrap();
        let path = std::env::temp_dir().join(format!("etch-grid-render-{}.png", std::process::id()));

        renderer.save_png(&pixmap, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
