//! Domain entities and pure business logic.

pub mod agent;
pub mod conversation;
pub mod history;
pub mod payload;
pub mod screen;
pub mod settings;
