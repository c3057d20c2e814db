//! Movement validator - reachable cells and AP-bounded moves

pub mod outcome;
pub mod validator;

pub use outcome::{MoveOutcome, MoveResponse};
pub use validator::{apply_move, move_cost, valid_moves, validate_move};
