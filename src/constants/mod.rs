pub mod bank;
pub mod catalog;
pub mod personas;
