pub mod database;
pub mod notifier;
pub mod repositories;
pub mod security;
pub mod time;
