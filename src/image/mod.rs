pub mod attributes;
pub mod builder;
pub mod helper;
pub mod render;
