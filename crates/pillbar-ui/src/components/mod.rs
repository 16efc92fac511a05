//! Filter bar components

mod context_menu;
mod filter_pills;
mod pill_icon;
mod pill_label;

pub use context_menu::*;
pub use filter_pills::*;
pub use pill_icon::*;
pub use pill_label::*;
