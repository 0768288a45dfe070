pub mod files;
pub mod format;
pub mod storage;
pub mod time;
pub mod timers;
