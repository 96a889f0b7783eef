//! Move resolution for completed drags.

mod operator;

pub use operator::apply_move;
