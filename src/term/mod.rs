//! Terminal plumbing: framebuffer, crossterm renderer, and the game view.

pub mod fb;
pub mod renderer;
pub mod view;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::TerminalRenderer;
pub use view::{GameView, Viewport};
