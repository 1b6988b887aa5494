pub mod body;
pub mod config;
pub mod geometry;
pub mod input;
pub mod shadow;
