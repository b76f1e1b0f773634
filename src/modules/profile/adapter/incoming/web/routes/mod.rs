mod upload_profile_image;
mod upsert_profile;

pub use upload_profile_image::*;
pub use upsert_profile::*;
