pub mod board;
pub mod form;
