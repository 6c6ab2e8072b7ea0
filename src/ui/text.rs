//! Plain-text board view for the console front-end

use crate::domain::{Board, PaintTag};

/// Character drawn for each paint tag
pub fn tag_char(tag: PaintTag) -> char {
    match tag {
        PaintTag::Unpainted => '.',
        PaintTag::Default => '#',
        PaintTag::Random => '*',
    }
}

/// Renders the board one text line per row
pub fn render_text(board: &Board) -> String {
    let side = board.cells_per_side() as usize;
    let mut out = String::with_capacity(side * (side + 1));
    for row in board.rows() {
        out.extend(row.iter().map(|cell| tag_char(cell.tag())));
        out.push('\n');
    }
    out
}
