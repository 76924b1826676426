pub mod keybindings;
pub mod menu;
pub mod styles;

pub use keybindings::{render_hint, Hint};
pub use menu::{render_list_menu, render_main_menu, render_prompt, render_status, reset_screen};
