pub mod column;
pub mod data_model;
pub mod drawer;
pub mod expansion;
pub mod i18n;
pub mod locale;
pub mod modal;
pub mod presets;
pub mod render;
pub mod table_state;
