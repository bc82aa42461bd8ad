pub mod json;
pub mod logs;
pub mod text;
