/// Raw text fields of the admin project form, as submitted. Coercion to
/// typed values happens in the services.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
    pub featured: Option<String>,
    pub order: Option<String>,
}
