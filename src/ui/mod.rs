pub mod actions;
pub mod app;
pub mod drawer;
pub mod modal;
pub mod table;
