mod component;
pub use component::{Component, ComponentType};

mod action_row;
pub use action_row::ActionRow;

pub mod select_menu;
pub use select_menu::{SelectHandler, SelectMenu, SelectOption};
