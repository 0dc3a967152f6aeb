//! HTTP Handlers

mod document;
mod ping;
mod reading;
mod websocket;

pub use document::*;
pub use ping::*;
pub use reading::*;
pub use websocket::*;
