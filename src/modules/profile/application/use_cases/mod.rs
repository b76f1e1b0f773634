pub mod update_profile_image;
pub mod upsert_profile;
