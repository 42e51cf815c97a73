//! UI layer for the widget gallery: app shell and painted input widgets.

pub mod app;
pub mod widgets;

pub use app::WidgetGalleryApp;
