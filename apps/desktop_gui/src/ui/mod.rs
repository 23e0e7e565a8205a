//! UI layer for the desktop app: app shell, home view, order form renderer, and themes.

pub mod app;
pub mod home;
pub mod order_form;
pub mod theme;

pub use app::PizzaApp;
