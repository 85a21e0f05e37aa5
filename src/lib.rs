pub mod config;
pub mod format;
pub mod global;
pub mod http;
pub mod items;
pub mod lookup;
pub mod player;
pub mod regions;
pub mod render;
