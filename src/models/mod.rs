pub mod color;
pub mod day;
pub mod event;
pub mod options;
pub mod schedule_file;
pub mod time;
