mod action_bar;
mod input;
mod saved_table;
mod status_bar;

pub use action_bar::{ActionBar, ActionButton};
pub use input::TextInput;
pub use saved_table::{SavedPanel, SavedTable};
pub use status_bar::{StatusBar, StatusLevel};
