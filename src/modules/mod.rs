pub mod auth;
pub mod media;
pub mod message;
pub mod portfolio;
pub mod profile;
pub mod project;
pub mod skill;
pub mod visualization;
