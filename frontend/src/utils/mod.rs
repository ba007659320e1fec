pub mod format;
pub mod storage;
pub mod token;
