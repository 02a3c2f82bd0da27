//! Controller-side services.

mod alert_manager;
mod view_controller;

pub use alert_manager::AlertManager;
pub use view_controller::ViewController;
