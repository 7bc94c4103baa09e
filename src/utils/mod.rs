pub mod color;
pub mod config;
pub mod html;
pub mod logging;
pub mod middleware;
pub mod timestamp;
