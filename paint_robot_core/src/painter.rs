use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::{PaintResult, Position, direction::Direction, error::PaintError, map::Grid};

/// Largest grid a run will allocate, in cells.
pub const MAX_CELLS: usize = 1 << 28;

/// Grid dimensions for a paint job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintConfig {
    pub rows: usize,
    pub columns: usize,
}

impl Default for PaintConfig {
    fn default() -> Self {
        PaintConfig {
            rows: 10,
            columns: 10,
        }
    }
}

impl PaintConfig {
    pub fn new(rows: usize, columns: usize) -> Self {
        PaintConfig { rows, columns }
    }

    /// Checks that both dimensions are positive and the grid has at most
    /// [`MAX_CELLS`] cells.
    pub fn validate(&self) -> Result<(), PaintError> {
        let invalid = PaintError::InvalidDimensions {
            rows: self.rows,
            columns: self.columns,
        };
        if self.rows == 0 || self.columns == 0 {
            return Err(invalid);
        }
        match self.rows.checked_mul(self.columns) {
            Some(cells) if cells <= MAX_CELLS => Ok(()),
            _ => Err(invalid),
        }
    }
}

/// What a single command did to the robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Moved onto a cell that had not been painted yet.
    Painted,
    /// Moved onto a cell that was already painted.
    Revisited,
    /// The target was outside the grid; the robot stayed where it was.
    Blocked,
}

/// The mutable state of one run: where the robot is and what it has painted.
///
/// Every call to [`GridPainter::paint`] builds a fresh `PaintRun`, so nothing
/// carries over between runs.
#[derive(Debug, Clone)]
pub struct PaintRun {
    grid: Grid<bool>,
    position: Position,
    painted_spaces: usize,
}

impl PaintRun {
    /// Starts a run at the top left corner with that cell already painted.
    pub fn new(config: PaintConfig) -> Result<Self, PaintError> {
        config.validate()?;
        let mut grid = Grid::new(config.columns, config.rows);
        let origin = Position::default();
        grid[origin] = true;
        Ok(PaintRun {
            grid,
            position: origin,
            painted_spaces: 1,
        })
    }

    /// Applies one command.
    pub fn apply(&mut self, direction: Direction) -> MoveOutcome {
        let Some(target) = self.grid.step(self.position, direction) else {
            debug!(
                ?direction,
                x = self.position.x,
                y = self.position.y,
                "move blocked by grid edge"
            );
            return MoveOutcome::Blocked;
        };

        let outcome = if self.grid[target] {
            MoveOutcome::Revisited
        } else {
            self.grid[target] = true;
            self.painted_spaces += 1;
            MoveOutcome::Painted
        };
        self.position = target;
        trace!(?direction, x = target.x, y = target.y, ?outcome, "moved");
        outcome
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn painted_spaces(&self) -> usize {
        self.painted_spaces
    }

    /// Whether the robot has ever stood on `position`. Cells outside the grid are never painted.
    pub fn is_painted(&self, position: Position) -> bool {
        self.grid.get(position).copied().unwrap_or(false)
    }

    pub fn grid(&self) -> &Grid<bool> {
        &self.grid
    }

    pub fn finish(self) -> PaintResult {
        PaintResult {
            final_location: self.position,
            painted_spaces: self.painted_spaces,
        }
    }
}

/// Runs command sequences against a grid of fixed size.
///
/// The painter only holds its configuration. Each call to [`paint`](Self::paint)
/// works on its own [`PaintRun`], so one painter can be reused or shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPainter {
    config: PaintConfig,
}

impl Default for GridPainter {
    fn default() -> Self {
        GridPainter {
            config: PaintConfig::default(),
        }
    }
}

impl GridPainter {
    pub fn new(config: PaintConfig) -> Result<Self, PaintError> {
        config.validate()?;
        Ok(GridPainter { config })
    }

    pub fn config(&self) -> PaintConfig {
        self.config
    }

    /// Parses every token, then runs them in order.
    ///
    /// Tokens are trimmed and matched case-insensitively. An empty sequence or
    /// an unrecognized token fails the whole run before the robot moves.
    pub fn paint<I>(&self, commands: I) -> Result<PaintResult, PaintError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let directions = commands
            .into_iter()
            .enumerate()
            .map(|(index, token)| {
                token
                    .as_ref()
                    .parse::<Direction>()
                    .map_err(|err| PaintError::UnknownDirection {
                        token: err.0,
                        index,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.paint_directions(&directions)
    }

    /// Runs already parsed directions.
    pub fn paint_directions(&self, directions: &[Direction]) -> Result<PaintResult, PaintError> {
        if directions.is_empty() {
            return Err(PaintError::NoInstructions);
        }

        let mut run = PaintRun::new(self.config)?;
        let mut blocked = 0usize;
        for &direction in directions {
            if run.apply(direction) == MoveOutcome::Blocked {
                blocked += 1;
            }
        }

        let result = run.finish();
        info!(
            commands = directions.len(),
            blocked,
            x = result.final_location.x,
            y = result.final_location.y,
            painted_spaces = result.painted_spaces,
            "paint run finished"
        );
        Ok(result)
    }
}

/// Runs `commands` on a fresh `rows` x `columns` grid.
pub fn paint<I>(commands: I, rows: usize, columns: usize) -> Result<PaintResult, PaintError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    GridPainter::new(PaintConfig::new(rows, columns))?.paint(commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn pos(x: usize, y: usize) -> Position {
        Position { x, y }
    }

    #[test]
    fn walks_a_small_square_on_the_default_grid() {
        let result = GridPainter::default()
            .paint(["up", "right", "down", "left"])
            .unwrap();
        assert_eq!(result.final_location, pos(0, 1));
        assert_eq!(result.painted_spaces, 4);
    }

    #[test]
    fn honours_non_square_dimensions() {
        let result = paint(
            ["down", "down", "left", "right", "right", "down", "left"],
            5,
            3,
        )
        .unwrap();
        assert_eq!(result.final_location, pos(1, 3));
        assert_eq!(result.painted_spaces, 7);
    }

    #[test]
    fn empty_commands_are_invalid_input() {
        let err = GridPainter::default().paint(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, PaintError::NoInstructions);
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "no instructions provided");
    }

    #[test]
    fn unknown_token_names_its_position() {
        let err = GridPainter::default()
            .paint(["up", "Sideways ", "down"])
            .unwrap_err();
        assert_eq!(
            err,
            PaintError::UnknownDirection {
                token: "sideways".to_string(),
                index: 1
            }
        );
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn zero_dimensions_are_a_configuration_error() {
        let err = paint(["up"], 0, 3).unwrap_err();
        assert_eq!(err, PaintError::InvalidDimensions { rows: 0, columns: 3 });
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(GridPainter::new(PaintConfig::new(4, 0)).is_err());
        assert!(PaintRun::new(PaintConfig::new(usize::MAX, 2)).is_err());
    }

    #[test]
    fn oversized_grids_are_rejected_before_allocating() {
        let err = paint(["down"], 1 << 62, 2).unwrap_err();
        assert_eq!(
            err,
            PaintError::InvalidDimensions {
                rows: 1 << 62,
                columns: 2
            }
        );
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(GridPainter::new(PaintConfig::new(1 << 14, 1 << 15)).is_err());
        assert!(PaintConfig::new(1 << 14, 1 << 14).validate().is_ok());
        assert!(PaintConfig::new(MAX_CELLS, 1).validate().is_ok());
    }

    #[test]
    fn top_edge_blocks_every_up() {
        let result = paint(["up"; 11], 3, 3).unwrap();
        assert_eq!(result.final_location, pos(0, 0));
        assert_eq!(result.painted_spaces, 1);
    }

    #[test]
    fn right_edge_blocks_after_last_column() {
        let result = paint(["right"; 4], 10, 3).unwrap();
        assert_eq!(result.final_location, pos(2, 0));
        assert_eq!(result.painted_spaces, 3);
    }

    #[test]
    fn tokens_are_trimmed_and_case_folded() {
        let result = GridPainter::default()
            .paint([" DOWN", "Right\n", "\tup "])
            .unwrap();
        assert_eq!(result.final_location, pos(1, 0));
        assert_eq!(result.painted_spaces, 4);
    }

    #[test]
    fn run_reports_each_outcome() {
        let mut run = PaintRun::new(PaintConfig::new(2, 2)).unwrap();
        assert!(run.is_painted(pos(0, 0)));
        assert_eq!(run.apply(Direction::Left), MoveOutcome::Blocked);
        assert_eq!(run.apply(Direction::Right), MoveOutcome::Painted);
        assert_eq!(run.apply(Direction::Left), MoveOutcome::Revisited);
        assert_eq!(run.position(), pos(0, 0));
        assert_eq!(run.painted_spaces(), 2);
        assert!(run.is_painted(pos(1, 0)));
        assert!(!run.is_painted(pos(1, 1)));
        assert!(!run.is_painted(pos(5, 5)));
        assert_eq!(run.grid().iter().filter(|cell| **cell).count(), 2);
    }

    #[test]
    fn reused_painter_does_not_leak_state() {
        let painter = GridPainter::new(PaintConfig::new(5, 5)).unwrap();
        let first = painter.paint(["down", "down", "right"]).unwrap();
        let second = painter.paint(["down", "down", "right"]).unwrap();
        assert_eq!(first, second);
        assert_eq!(second.final_location, pos(1, 2));
        assert_eq!(second.painted_spaces, 4);
    }

    #[test]
    fn single_cell_grid_never_moves() {
        let result = paint(["up", "down", "left", "right"], 1, 1).unwrap();
        assert_eq!(result.final_location, pos(0, 0));
        assert_eq!(result.painted_spaces, 1);
    }
}
