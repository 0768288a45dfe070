pub mod form;
pub mod table;
