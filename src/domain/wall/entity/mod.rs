pub mod comment;
pub mod reaction;
pub mod reaction_set;
pub mod wall;
