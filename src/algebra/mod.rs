pub mod code;
pub mod ring;
