pub mod notifier;
pub mod security;
pub mod time;
