pub mod commands;
pub mod records;
pub mod state;
