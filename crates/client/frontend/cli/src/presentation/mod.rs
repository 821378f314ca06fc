//! Presentation layer: tone styling and the terminal host.
mod terminal;
pub mod theme;

pub use terminal::TerminalIo;
pub use theme::{Style, Theme};
