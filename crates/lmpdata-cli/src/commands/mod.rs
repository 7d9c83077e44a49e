pub mod data;
pub mod json;
