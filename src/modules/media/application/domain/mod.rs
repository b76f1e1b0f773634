pub mod entities;
pub mod image_info;
pub mod policies;
