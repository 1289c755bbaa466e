use axum::{
    extract::{
        multipart::{Field, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
};
use bytes::Bytes;

use crate::error::{ApiError, ApiResult};
use crate::models::Painting;
use crate::AppState;

pub const PICTURE_FIELD: &str = "picture";

#[derive(Debug)]
struct UploadedFile {
    filename: String,
    data: Bytes,
}

/// Fields collected from the upload form. The first occurrence of a name wins.
#[derive(Debug, Default)]
struct UploadForm {
    picture: Option<UploadedFile>,
    title: Option<String>,
    artist: Option<String>,
    year: Option<String>,
    size: Option<String>,
    sold: Option<String>,
}

impl UploadForm {
    async fn read(multipart: &mut Multipart) -> ApiResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let field_name = field.name().unwrap_or_default().to_string();
            tracing::debug!("Processing field: {}", field_name);

            match field_name.as_str() {
                PICTURE_FIELD => {
                    // A `picture` part without a filename is a plain text value, not a file
                    if form.picture.is_none() && field.file_name().is_some() {
                        form.picture = Some(read_file(field).await?);
                    }
                }
                "title" => set_text(&mut form.title, field).await?,
                "artist" => set_text(&mut form.artist, field).await?,
                "year" => set_text(&mut form.year, field).await?,
                "size" => set_text(&mut form.size, field).await?,
                "sold" => set_text(&mut form.sold, field).await?,
                _ => {}
            }
        }

        Ok(form)
    }
}

async fn read_file(field: Field<'_>) -> ApiResult<UploadedFile> {
    let filename = field.file_name().unwrap_or_default().to_string();
    let data = field.bytes().await?;
    Ok(UploadedFile { filename, data })
}

async fn set_text(slot: &mut Option<String>, field: Field<'_>) -> ApiResult<()> {
    let value = field.text().await?;
    if slot.is_none() {
        *slot = Some(value);
    }
    Ok(())
}

/// Store an uploaded painting.
///
/// Answers `200` with an empty body once the painting is persisted. A form
/// without a `picture` file is rejected with `400` and nothing is written;
/// a body over the configured cap fails with `413`.
pub async fn upload_painting(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<StatusCode> {
    let mut multipart = multipart?;
    let form = UploadForm::read(&mut multipart).await?;

    let file = form.picture.ok_or_else(|| {
        ApiError::MissingFile(format!("form has no '{}' file part", PICTURE_FIELD))
    })?;

    tracing::info!("Uploaded File: {}", file.filename);
    tracing::info!("File Size: {}", file.data.len());

    let painting = Painting {
        id: None,
        binary: file.data.to_vec(),
        title: form.title.unwrap_or_default(),
        artist: form.artist.unwrap_or_default(),
        year: form.year.unwrap_or_default(),
        size: form.size.unwrap_or_default(),
        sold: Painting::sold_from_form(form.sold.as_deref()),
    };

    let id = state.store.insert(painting).await?;
    tracing::info!(painting_id = %id, filename = %file.filename, "Painting stored");

    Ok(StatusCode::OK)
}
