use actix_files::{Files, NamedFile};
use actix_web::{guard, http::Method, http::StatusCode, web, HttpRequest, HttpResponse};
use std::path::{Path, PathBuf};

use crate::media::application::domain::entities::AssetFolder;
use crate::shared::api::ApiResponse;

const INDEX_FILE: &str = "index.html";

/// Directories static content is served from. Registered as app data so
/// the fallback can find the frontend build.
#[derive(Debug, Clone)]
pub struct StaticDirs {
    pub public_dir: PathBuf,
    pub frontend_dir: PathBuf,
}

/// Registers `/uploads`, `/reports`, public assets and the frontend build,
/// in that order. Must come after every API route. Directories that do not
/// exist are not mounted.
pub fn configure_static(cfg: &mut web::ServiceConfig, dirs: &StaticDirs) {
    for folder in [AssetFolder::Uploads, AssetFolder::Reports] {
        let dir = dirs.public_dir.join(folder.dir_name());
        if dir.is_dir() {
            cfg.service(Files::new(folder.public_prefix(), dir).guard(guard::Get()));
        }
    }

    let root = |dir: &Path| {
        Files::new("/", dir)
            .index_file(INDEX_FILE)
            .guard(guard::Get())
    };

    match (dirs.public_dir.is_dir(), dirs.frontend_dir.is_dir()) {
        (true, true) => {
            cfg.service(
                root(dirs.public_dir.as_path())
                    .default_handler(root(dirs.frontend_dir.as_path()).default_handler(web::to(fallback))),
            );
        }
        (true, false) => {
            cfg.service(root(dirs.public_dir.as_path()).default_handler(web::to(fallback)));
        }
        (false, true) => {
            cfg.service(root(dirs.frontend_dir.as_path()).default_handler(web::to(fallback)));
        }
        (false, false) => {}
    }
}

/// Anything no route or static mount claimed. GETs outside `/api/` get the
/// single-page app's `index.html`.
pub async fn fallback(req: HttpRequest, dirs: web::Data<StaticDirs>) -> HttpResponse {
    if req.path().starts_with("/api/") {
        return ApiResponse::not_found("NOT_FOUND", "API endpoint not found");
    }
    if *req.method() != Method::GET {
        return ApiResponse::not_found("NOT_FOUND", "Not found");
    }

    let frontend_dir = &dirs.frontend_dir;
    if !frontend_dir.is_dir() {
        tracing::error!(path = %frontend_dir.display(), "Frontend build directory not found");
        return ApiResponse::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "FRONTEND_NOT_BUILT",
            "Frontend not built. Please run the build command first.",
        );
    }

    match NamedFile::open_async(frontend_dir.join(INDEX_FILE)).await {
        Ok(index) => index.into_response(&req),
        Err(_) => ApiResponse::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "FRONTEND_INCOMPLETE",
            "Frontend build incomplete. index.html not found.",
        ),
    }
}
