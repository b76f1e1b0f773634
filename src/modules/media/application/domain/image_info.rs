use super::entities::{ImageInfo, StorageKind, UploadDescriptor};

/// Turns backend upload metadata into the `(image_url, image_public_id)` pair
/// that entities persist.
///
/// Remote uploads prefer `secure_url`, then `path`. A remote descriptor with no
/// usable URL falls back to the local prefix and loses its public id, so a
/// record never carries an id without a URL that points at it.
pub fn extract_image_info(descriptor: Option<&UploadDescriptor>) -> ImageInfo {
    let Some(desc) = descriptor else {
        return ImageInfo::default();
    };

    match desc.backend {
        StorageKind::Remote => {
            let url = non_empty(&desc.secure_url).or_else(|| non_empty(&desc.path));
            match url {
                Some(url) => ImageInfo {
                    image_url: Some(url.to_string()),
                    image_public_id: non_empty(&desc.public_id)
                        .or_else(|| non_empty(&desc.filename))
                        .map(str::to_string),
                },
                None => local_info(desc),
            }
        }
        StorageKind::Local => local_info(desc),
    }
}

fn local_info(desc: &UploadDescriptor) -> ImageInfo {
    ImageInfo {
        image_url: non_empty(&desc.filename)
            .map(|name| format!("{}/{}", desc.local_prefix.trim_end_matches('/'), name)),
        image_public_id: None,
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
