//! UI screens and overlays.

mod alert_popup;
mod app;
mod confirm_dialog;
mod lookup_screen;
/// Display formatting helpers.
pub mod utils;

pub use alert_popup::AlertPopup;
pub use app::App;
pub use confirm_dialog::ConfirmDialog;
pub use lookup_screen::{Focus, LookupAction, LookupScreenState, SearchState};
