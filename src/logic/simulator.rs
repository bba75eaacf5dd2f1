use crate::models::{
    lawn::LawnGrid,
    mower::{Instruction, Mower, Pose},
    program::{GridSize, MowingProgram},
    Coordinate,
};

/// Applies one instruction to a pose. Total: rotations always succeed,
/// and a forward move into the fence leaves the pose unchanged rather
/// than failing.
pub fn apply_instruction(pose: Pose, instruction: Instruction, grid: GridSize) -> Pose {
    match instruction {
        Instruction::Left => Pose {
            direction: pose.direction.left(),
            ..pose
        },
        Instruction::Right => Pose {
            direction: pose.direction.right(),
            ..pose
        },
        Instruction::Forward => {
            let (dx, dy) = pose.direction.offset();
            let x = pose.x as i32 + dx;
            let y = pose.y as i32 + dy;
            if x >= 0 && y >= 0 && grid.contains(x as usize, y as usize) {
                Pose {
                    x: x as usize,
                    y: y as usize,
                    ..pose
                }
            } else {
                pose
            }
        }
    }
}

/// One applied instruction of a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Index of the mower in program order (0-based).
    pub mower: usize,
    pub instruction: Instruction,
    /// Pose after the instruction was applied.
    pub pose: Pose,
    /// Destination cell of a forward move that committed; `None` for
    /// rotations and absorbed moves.
    pub mowed: Option<Coordinate>,
}

/// Lazy replay of a program, one instruction per [`Iterator::next`] call.
///
/// The simulation exclusively owns its lawn and poses; mowers execute
/// strictly in program order, one at a time. Between any two calls the
/// state is fully applied, so a presentation driver can animate, pause
/// or abandon the replay at any step boundary without ever observing a
/// half-applied instruction. The core holds no timers; pacing belongs to
/// the caller.
pub struct Simulation {
    grid: GridSize,
    lawn: LawnGrid,
    mowers: Vec<Mower>,
    poses: Vec<Pose>,
    current: usize,
    cursor: usize,
}

impl Simulation {
    /// Builds the replay for a validated program. Each mower's starting
    /// cell is marked mown immediately: the machine is already standing
    /// on it.
    pub fn new(program: &MowingProgram) -> Self {
        let mut lawn = LawnGrid::new(program.grid);
        for mower in &program.mowers {
            lawn.mow(mower.start.x, mower.start.y);
        }
        Self {
            grid: program.grid,
            lawn,
            mowers: program.mowers.clone(),
            poses: program.mowers.iter().map(|m| m.start).collect(),
            current: 0,
            cursor: 0,
        }
    }

    pub fn lawn(&self) -> &LawnGrid {
        &self.lawn
    }

    /// Current pose of every mower, program order.
    pub fn poses(&self) -> &[Pose] {
        &self.poses
    }
}

impl Iterator for Simulation {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        // Move past mowers whose instruction sequence is exhausted (or
        // empty to begin with).
        while self.current < self.mowers.len()
            && self.cursor >= self.mowers[self.current].instructions.len()
        {
            self.current += 1;
            self.cursor = 0;
        }
        if self.current >= self.mowers.len() {
            return None;
        }

        let instruction = self.mowers[self.current].instructions[self.cursor];
        let before = self.poses[self.current];
        let after = apply_instruction(before, instruction, self.grid);
        self.poses[self.current] = after;

        let mowed = if instruction == Instruction::Forward && after != before {
            self.lawn.mow(after.x, after.y);
            Some(Coordinate {
                x: after.x,
                y: after.y,
            })
        } else {
            None
        };

        self.cursor += 1;
        Some(Step {
            mower: self.current,
            instruction,
            pose: after,
            mowed,
        })
    }
}

/// Everything a run produces: final poses (program order), the mown lawn
/// and the full step trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub mowers: Vec<Pose>,
    pub lawn: LawnGrid,
    pub steps: Vec<Step>,
}

/// Replays the whole program in one synchronous pass.
pub fn run(program: &MowingProgram) -> RunOutcome {
    let mut simulation = Simulation::new(program);
    let steps: Vec<Step> = simulation.by_ref().collect();
    let Simulation { lawn, poses, .. } = simulation;
    RunOutcome {
        mowers: poses,
        lawn,
        steps,
    }
}
