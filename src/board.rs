//! Whole-board view built from a snapshot
//!
//! Walks the index range once and classifies every square, so a renderer
//! only has to map states to visuals. Board indices are centered on the
//! origin: the default 41-square board runs -20..=20 on both axes.

use crate::game::model::Vector2;
use crate::game::threat::{classify_square, BoardContext, SquareState};

/// Classified grid for one snapshot
#[derive(Clone, Debug)]
pub struct BoardView {
    min_index: i64,
    size: usize,
    squares: Vec<SquareState>,
}

impl BoardView {
    /// Classify the full grid for the given context
    pub fn build(ctx: &BoardContext<'_>) -> Self {
        let min_index = ctx.config.min_index();
        let size = ctx.config.board_size as usize;
        let mut squares = Vec::with_capacity(size * size);

        for row in min_index..=ctx.config.max_index() {
            for col in min_index..=ctx.config.max_index() {
                squares.push(classify_square(Vector2::new(row, col), ctx));
            }
        }

        Self {
            min_index,
            size,
            squares,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// State at a board coordinate; `None` when off the board
    pub fn at(&self, square: Vector2) -> Option<SquareState> {
        let row = usize::try_from(square.row - self.min_index).ok()?;
        let col = usize::try_from(square.col - self.min_index).ok()?;
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.squares[row * self.size + col])
    }

    /// Iterate rows top to bottom, each as a slice of square states
    pub fn rows(&self) -> impl Iterator<Item = &[SquareState]> {
        self.squares.chunks(self.size)
    }

    /// One-character glyph per state, for terminal display
    pub fn glyph(state: SquareState) -> char {
        use crate::game::model::Side;
        match state {
            SquareState::Ship {
                under_torpedo_fire: true,
                ..
            } => 'X',
            SquareState::Ship {
                side: Side::Player1,
                ..
            } => 'R',
            SquareState::Ship {
                side: Side::Player2,
                ..
            } => 'B',
            SquareState::Torpedo { imminent: true, .. } => '!',
            SquareState::Torpedo {
                side: Side::Player1,
                ..
            } => 'r',
            SquareState::Torpedo {
                side: Side::Player2,
                ..
            } => 'b',
            SquareState::ShipNext {
                side: Side::Player1,
            } => '1',
            SquareState::ShipNext {
                side: Side::Player2,
            } => '2',
            SquareState::TorpedoNext { .. } => '+',
            SquareState::Mine { .. } => '*',
            SquareState::MineBlast { .. } => '~',
            SquareState::TorpedoRange { over_ship: true, .. } => '%',
            SquareState::TorpedoRange { .. } => ':',
            SquareState::Asteroid => '#',
            SquareState::Empty => '.',
        }
    }

    /// Render the grid as text, one row per line
    pub fn render_text(&self) -> String {
        let mut out = String::with_capacity(self.size * (self.size + 1));
        for row in self.rows() {
            for &state in row {
                out.push(Self::glyph(state));
            }
            out.push('\n');
        }
        out
    }
}
