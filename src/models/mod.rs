use serde::Serialize;
use utoipa::ToSchema;

pub const NO_FILES_MESSAGE: &str = "No files uploaded.";

/// Result of processing one upload request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The request carried no file parts
    NoFiles,
    /// Every file part was written, names in arrival order
    Stored(Vec<String>),
    /// Processing stopped at this filename; earlier files remain on disk
    Rejected(String),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadSuccess {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadRejected {
    pub error: String,
}

/// JSON body of `POST /upload/`. Always sent with status 200.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum UploadResponse {
    Notice(&'static str),
    Success(UploadSuccess),
    Rejected(UploadRejected),
}

impl From<UploadOutcome> for UploadResponse {
    fn from(outcome: UploadOutcome) -> Self {
        match outcome {
            UploadOutcome::NoFiles => UploadResponse::Notice(NO_FILES_MESSAGE),
            UploadOutcome::Stored(names) => UploadResponse::Success(UploadSuccess {
                message: format!("Successfully uploaded: {}", names.join(", ")),
            }),
            UploadOutcome::Rejected(name) => UploadResponse::Rejected(UploadRejected {
                error: format!("File type not supported: {}", name),
            }),
        }
    }
}
