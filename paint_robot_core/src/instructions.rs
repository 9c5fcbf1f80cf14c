use crate::{direction::Direction, error::PaintError};

/// Parses a line-oriented instruction listing, one direction per line.
///
/// Lines are trimmed and matched case-insensitively. A line that does not name
/// a direction, including a blank one, is reported with its 1-based line number.
/// The final line terminator does not start a new line.
pub fn parse_instructions(text: &str) -> Result<Vec<Direction>, PaintError> {
    let mut directions = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let direction = line
            .parse::<Direction>()
            .map_err(|err| PaintError::UnknownInstruction {
                token: err.0,
                line: idx + 1,
            })?;
        directions.push(direction);
    }

    if directions.is_empty() {
        return Err(PaintError::NoInstructions);
    }
    Ok(directions)
}
