use serde::{Deserialize, Serialize};

pub mod direction;
pub mod error;
pub mod instructions;
pub mod map;
pub mod painter;
pub mod wander;

pub use direction::Direction;
pub use error::{ErrorKind, PaintError};
pub use instructions::parse_instructions;
pub use painter::{GridPainter, MoveOutcome, PaintConfig, PaintRun, paint};
pub use wander::wander;

/// Represents a 2D coordinate. `x` is the column, `y` the row; `(0, 0)` is the
/// top left corner.
///
/// Serialized as a `[x, y]` pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl From<[usize; 2]> for Position {
    fn from([x, y]: [usize; 2]) -> Self {
        Position { x, y }
    }
}

impl From<Position> for [usize; 2] {
    fn from(position: Position) -> Self {
        [position.x, position.y]
    }
}

/// The outcome of one paint run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintResult {
    pub final_location: Position,
    /// Distinct cells visited, including the starting cell.
    pub painted_spaces: usize,
}
