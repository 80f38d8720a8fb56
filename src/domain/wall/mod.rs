pub mod dto;
pub mod entity;
pub mod handler;
pub mod listing;
pub mod service;
