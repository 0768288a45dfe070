pub mod assignment;
pub mod list;
