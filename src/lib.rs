//! Rules engine for peg solitaire boards: holes on an irregular grid, jump
//! legality and execution, and the game sessions that drive them.

pub mod engine;
pub mod games;
