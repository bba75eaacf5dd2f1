//! Lawn-mowing simulation service.
//!
//! Parses a compact plain-text mowing program (a grid size line, then
//! one position line and one instruction line per mower) and replays it
//! as a deterministic state machine. The pure core lives in [`logic`];
//! the HTTP surface in [`api`] exposes it for a client to animate.

pub mod api;
pub mod logic;
pub mod models;
