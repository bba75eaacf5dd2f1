use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Cardinal facing of a mower. Serialized as the single letters used by
/// the instruction format (`"N"`, `"E"`, `"S"`, `"W"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Direction {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Direction {
    /// Quarter turn counter-clockwise: N→W→S→E→N.
    pub fn left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// Quarter turn clockwise: N→E→S→W→N.
    pub fn right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Unit step of a forward move, as (dx, dy). North is y+1.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    pub fn as_letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }
}

impl FromStr for Direction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Direction::North),
            "E" => Ok(Direction::East),
            "S" => Ok(Direction::South),
            "W" => Ok(Direction::West),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_letter())
    }
}

/// One command of the mowing language. Serialized as `"L"`, `"R"`, `"F"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Instruction {
    /// Rotate counter-clockwise, position unchanged.
    #[serde(rename = "L")]
    Left,
    /// Rotate clockwise, position unchanged.
    #[serde(rename = "R")]
    Right,
    /// Advance one cell in the current facing, absorbed at the lawn edge.
    #[serde(rename = "F")]
    Forward,
}

impl TryFrom<char> for Instruction {
    type Error = ();

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'L' => Ok(Instruction::Left),
            'R' => Ok(Instruction::Right),
            'F' => Ok(Instruction::Forward),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Instruction::Left => 'L',
            Instruction::Right => 'R',
            Instruction::Forward => 'F',
        };
        write!(f, "{letter}")
    }
}

/// Position and facing of a mower at one point of the replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pose {
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
}

/// One mower block of a parsed program: where it starts and what it has
/// been told to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mower {
    pub start: Pose,
    pub instructions: Vec<Instruction>,
}
