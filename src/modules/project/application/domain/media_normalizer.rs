use super::entities::ProjectRecord;

const REPORT_SUFFIX: &str = "_report.html";
const PREVIEW_SUFFIX: &str = "_preview.svg";

/// HTML report images cannot be shown in an `<img>`; every outward read
/// points at the SVG preview rendered next to the report instead. The `demo`
/// link keeps pointing at the report itself.
pub fn normalize_project_media(mut project: ProjectRecord) -> ProjectRecord {
    if let Some(stem) = project.image.strip_suffix(REPORT_SUFFIX) {
        project.image = format!("{stem}{PREVIEW_SUFFIX}");
    }
    project
}
