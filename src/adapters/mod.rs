// Adapters layer: concrete implementations of the domain ports.

pub mod display;
pub mod http;

pub use display::{MemoryDisplay, TerminalDisplay};
pub use http::HttpProfileSource;
