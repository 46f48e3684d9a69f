use crate::errors::ParseError;
use super::Grid;


/// Parse a block of digit lines into a grid of per-cell costs
/// Line length is the width, line count is the height
/// Surrounding blank lines are ignored
pub fn parse_cost_grid<C>(input: &str) -> Result<Grid<C>, ParseError>
where
    C: From<u8>,
{
    parse_rows(input, |line, column, ch| {
        let digit = ch
            .to_digit(10)
            .ok_or(ParseError::InvalidDigit { line, column, found: ch })?;
        Ok(C::from(digit as u8))
    })
}


/// Split rectangular text into a grid, converting each character with `cell`
/// `cell` receives the line and column of the character
pub(crate) fn parse_rows<T, F>(input: &str, mut cell: F) -> Result<Grid<T>, ParseError>
where
    F: FnMut(usize, usize, char) -> Result<T, ParseError>,
{
    let lines: Vec<&str> = input.trim_matches(|c: char| c == '\n' || c == '\r').lines().collect();

    let width = match lines.first() {
        Some(first) if !first.is_empty() => first.chars().count(),
        _ => return Err(ParseError::Empty),
    };

    let mut cells = Vec::with_capacity(width * lines.len());
    for (line_no, line) in lines.iter().enumerate() {
        let found = line.chars().count();
        if found != width {
            return Err(ParseError::Ragged { line: line_no, expected: width, found });
        }
        for (column, ch) in line.chars().enumerate() {
            cells.push(cell(line_no, column, ch)?);
        }
    }

    Ok(Grid::from_cells(width, lines.len(), cells))
}
