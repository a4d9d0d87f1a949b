pub mod forms;
pub mod render;
