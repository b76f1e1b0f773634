mod create_project;
mod delete_project;
mod get_projects;
mod project_form;
mod update_project;

pub use create_project::*;
pub use delete_project::*;
pub use get_projects::*;
pub use update_project::*;
