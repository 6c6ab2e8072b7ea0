pub mod console;
pub mod renderer;
pub mod text;

pub use console::{Command, CommandError, RESET_PROMPT, parse_command};
pub use renderer::{BoardLayout, BoardRenderer, RendererError};
pub use text::render_text;
