pub mod frame_writer;
pub mod lifecycle;
pub mod overlay;
pub mod scroll_input;
