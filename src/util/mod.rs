// Utility Module
// Configuration and display helpers shared by the library and the demo binary

pub mod config;
pub mod display;

pub use config::KeyGenConfig;
pub use display::{hex_block, to_hex, HEX_LINE_WIDTH};
