pub mod brief;
pub mod schedule;
