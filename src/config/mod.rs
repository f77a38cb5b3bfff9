pub mod env;
pub mod image;
