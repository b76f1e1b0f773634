pub mod app_state_builder;
pub mod auth_helper;
pub mod fixtures;
pub mod message_test_fixtures;
pub mod profile_test_fixtures;
pub mod project_test_fixtures;
pub mod stubs;
pub mod visualization_test_fixtures;
