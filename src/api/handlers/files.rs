use crate::AppState;
use crate::api::error::AppError;
use crate::models::{UploadOutcome, UploadRejected, UploadResponse, UploadSuccess};
use crate::services::storage::LocalStorageService;
use crate::utils::validation::validate_extension;
use axum::{
    Json,
    extract::{Multipart, State},
};
use futures::TryStreamExt;
use tokio_util::io::StreamReader;
use utoipa::ToSchema;

/// Form field carrying the uploaded files
pub const FILES_FIELD: &str = "files";

/// Request body shape, for the OpenAPI document only. The `files` part may repeat.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    files: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/upload/",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "All files stored, or a rejection / no-files notice in the body", body = UploadSuccess),
        (status = 400, description = "Malformed multipart body", body = UploadRejected),
        (status = 500, description = "Filesystem write failed")
    ),
    tag = "files"
)]
pub async fn upload_files(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let outcome = store_files(&state.storage, &mut multipart).await?;
    Ok(Json(outcome.into()))
}

/// Walks the multipart body in arrival order, stopping at the first file
/// whose suffix is not allowed. Files written before that point are kept.
pub async fn store_files(
    storage: &LocalStorageService,
    multipart: &mut Multipart,
) -> Result<UploadOutcome, AppError> {
    let mut stored = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILES_FIELD) {
            continue;
        }
        // Parts without a filename are plain form values, not files
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        if let Err(e) = validate_extension(&filename) {
            tracing::warn!("Upload rejected: {}", e);
            return Ok(UploadOutcome::Rejected(filename));
        }

        let body_with_io_error =
            field.map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err));
        let reader = StreamReader::new(body_with_io_error);

        let size = storage.write_stream(&filename, reader).await?;
        tracing::debug!(
            "Stored {} ({} bytes) at {}",
            filename,
            size,
            storage.path_for(&filename).display()
        );
        stored.push(filename);
    }

    if stored.is_empty() {
        return Ok(UploadOutcome::NoFiles);
    }

    tracing::info!("Uploaded {} file(s): {}", stored.len(), stored.join(", "));
    Ok(UploadOutcome::Stored(stored))
}
