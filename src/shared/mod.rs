pub mod api;
pub mod cors;
pub mod patch;
