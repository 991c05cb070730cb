pub mod day;
pub mod rules;
