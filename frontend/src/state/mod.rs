pub mod modal;
pub mod theme;
