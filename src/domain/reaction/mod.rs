pub mod handler;
pub mod service;
pub mod state;
