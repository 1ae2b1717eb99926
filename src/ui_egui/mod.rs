mod app;
pub mod color_picker;
pub mod screens;
pub mod theme;
pub mod views;

pub use app::SchedulerApp;
