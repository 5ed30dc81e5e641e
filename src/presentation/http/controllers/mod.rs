pub mod articles;
pub mod dashboard;
