// Library exports for the Vyra CLI
// This allows testing of internal modules

pub mod commands;
pub mod ui;
