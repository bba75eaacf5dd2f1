use std::str::FromStr;

use thiserror::Error;

use crate::models::{
    mower::{Direction, Instruction, Mower, Pose},
    program::{GridSize, MowingProgram},
};

/// Why a program was rejected. The whole program is refused on the first
/// failure; there is no partial acceptance. Line numbers refer to the
/// source text as the user wrote it, blank lines included.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("a program needs a grid line plus one position and one instruction line per mower ({0} usable line(s) found)")]
    TooFewLines(usize),
    #[error("line {line}: grid line '{content}' must be exactly two characters")]
    BadGridFormat { line: usize, content: String },
    #[error("line {line}: grid dimensions '{content}' must both be digits between 1 and 9")]
    BadGridDimensions { line: usize, content: String },
    #[error("line {line}: position '{content}' must be 'XY D' or 'X Y D'")]
    BadPositionFormat { line: usize, content: String },
    #[error("line {line}: coordinates in '{content}' are not numeric")]
    BadCoordinates { line: usize, content: String },
    #[error("line {line}: direction '{content}' must be one of N, E, S, W")]
    BadDirection { line: usize, content: String },
    #[error("line {line}: start position ({x}, {y}) is outside the {width}x{height} lawn")]
    PositionOutOfBounds {
        line: usize,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("line {line}: invalid instruction '{found}', expected L, R or F")]
    BadInstruction { line: usize, found: char },
    #[error("the program defines a lawn but no mowers")]
    NoMowers,
}

/// Parses raw program text into a validated [`MowingProgram`].
///
/// The first usable line gives the lawn dimensions as two glued digits
/// (`"55"` → 5×5). The rest is consumed in pairs: a position line
/// (`"40 N"` or `"4 0 N"`) followed by an instruction line over
/// `{L, R, F}`. Windows and old-Mac line endings are normalized, lines
/// are trimmed and blank lines skipped before any of this applies.
pub fn parse(text: &str) -> Result<MowingProgram, ParseError> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    // Keep 1-based source line numbers through the blank-line filter so
    // errors point at the line as the user wrote it.
    let lines: Vec<(usize, &str)> = normalized
        .lines()
        .enumerate()
        .map(|(index, raw)| (index + 1, raw.trim()))
        .filter(|(_, content)| !content.is_empty())
        .collect();

    if lines.len() < 3 {
        return Err(ParseError::TooFewLines(lines.len()));
    }

    let grid = parse_grid_line(lines[0])?;

    let mut mowers = Vec::new();
    for pair in lines[1..].chunks(2) {
        if pair.len() < 2 {
            // Trailing unpaired line: ignored for compatibility with
            // hand-edited instruction files.
            break;
        }
        let start = parse_position_line(pair[0], grid)?;
        let instructions = parse_instruction_line(pair[1])?;
        mowers.push(Mower {
            start,
            instructions,
        });
    }

    if mowers.is_empty() {
        return Err(ParseError::NoMowers);
    }

    Ok(MowingProgram { grid, mowers })
}

fn parse_grid_line((number, content): (usize, &str)) -> Result<GridSize, ParseError> {
    let chars: Vec<char> = content.chars().collect();
    if chars.len() != 2 {
        return Err(ParseError::BadGridFormat {
            line: number,
            content: content.into(),
        });
    }
    match (chars[0].to_digit(10), chars[1].to_digit(10)) {
        (Some(width), Some(height)) if width >= 1 && height >= 1 => Ok(GridSize {
            width: width as usize,
            height: height as usize,
        }),
        _ => Err(ParseError::BadGridDimensions {
            line: number,
            content: content.into(),
        }),
    }
}

/// Accepts the two surface forms of a position line and collapses them to
/// one [`Pose`]: compact (`"40 N"`, coordinate digits glued together) and
/// expanded (`"4 0 N"`, possibly multi-digit coordinates).
fn parse_position_line(
    (number, content): (usize, &str),
    grid: GridSize,
) -> Result<Pose, ParseError> {
    let parts: Vec<&str> = content.split_whitespace().collect();

    let (x, y, direction_token) = match parts.as_slice() {
        [coordinates, direction] if coordinates.chars().count() == 2 => {
            let mut digits = coordinates.chars();
            let x = digits.next().and_then(|c| c.to_digit(10));
            let y = digits.next().and_then(|c| c.to_digit(10));
            match (x, y) {
                (Some(x), Some(y)) => (x as usize, y as usize, *direction),
                _ => {
                    return Err(ParseError::BadCoordinates {
                        line: number,
                        content: content.into(),
                    })
                }
            }
        }
        [x, y, direction] => match (x.parse::<usize>(), y.parse::<usize>()) {
            (Ok(x), Ok(y)) => (x, y, *direction),
            _ => {
                return Err(ParseError::BadCoordinates {
                    line: number,
                    content: content.into(),
                })
            }
        },
        _ => {
            return Err(ParseError::BadPositionFormat {
                line: number,
                content: content.into(),
            })
        }
    };

    let direction = Direction::from_str(direction_token).map_err(|_| ParseError::BadDirection {
        line: number,
        content: direction_token.into(),
    })?;

    if !grid.contains(x, y) {
        return Err(ParseError::PositionOutOfBounds {
            line: number,
            x,
            y,
            width: grid.width,
            height: grid.height,
        });
    }

    Ok(Pose { x, y, direction })
}

fn parse_instruction_line(
    (number, content): (usize, &str),
) -> Result<Vec<Instruction>, ParseError> {
    content
        .chars()
        .map(|c| {
            Instruction::try_from(c).map_err(|_| ParseError::BadInstruction {
                line: number,
                found: c,
            })
        })
        .collect()
}
