pub mod render;
pub mod theme;

pub use render::{render_history, render_history_entry, render_preview, render_submission};
pub use theme::{CalcTheme, ThemeMode};
