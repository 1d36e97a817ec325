//! Terminal rendering: framebuffer, grid view, and the raw-mode flusher.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use game_view::{GameView, Hud, Viewport};
pub use renderer::TerminalRenderer;
