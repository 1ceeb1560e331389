//! Vyra coaching core: athlete profiles, weekly plan generation and coach chat.

pub mod api;
pub mod config;
pub mod models;
pub mod services;
pub mod storage;
