pub mod generate;
pub mod layout;
pub mod schedule;
