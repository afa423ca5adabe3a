pub mod buffer;
pub mod protocol;
