pub mod comment;
pub mod health;
pub mod reaction;
pub mod user;
pub mod wall;
