//! UI layer for the desktop form: app shell, widgets, and theme.

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::ShippingFormApp;
