use uuid::Uuid;

use crate::media::adapter::incoming::web::multipart::MultipartForm;
use crate::project::application::ports::incoming::use_cases::ProjectForm;

pub(super) const IMAGE_FIELD: &str = "image";

pub(super) fn project_form_from(form: &mut MultipartForm) -> ProjectForm {
    ProjectForm {
        title: form.take_text("title"),
        description: form.take_text("description"),
        technologies: form.take_text("technologies"),
        github: form.take_text("github"),
        demo: form.take_text("demo"),
        featured: form.take_text("featured"),
        order: form.take_text("order"),
    }
}

/// Malformed ids can never match a stored project.
pub(super) fn parse_project_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}
