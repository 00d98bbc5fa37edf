//! Form body extractor accepting both multipart and urlencoded submissions.

use std::collections::HashMap;

use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header;
use axum::Form;

use familytree_core::error::AppError;
use familytree_core::traits::storage::UploadedPhoto;

use crate::error::PageError;

/// Name of the multipart field carrying the photo.
pub const PHOTO_FIELD: &str = "image_file";

/// The raw fields of a submitted form plus the uploaded photo, if any.
#[derive(Debug, Default)]
pub struct SubmittedForm {
    fields: HashMap<String, String>,
    photo: Option<UploadedPhoto>,
}

impl SubmittedForm {
    /// Build a form from already-decoded text fields.
    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        Self {
            fields,
            photo: None,
        }
    }

    /// Raw value of a field, if it was submitted.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Take the uploaded photo out of the form, if a non-empty one was sent.
    pub fn take_photo(&mut self) -> Option<UploadedPhoto> {
        self.photo.take()
    }
}

impl<S> FromRequest<S> for SubmittedForm
where
    S: Send + Sync,
{
    type Rejection = PageError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| {
                ct.trim_start()
                    .to_ascii_lowercase()
                    .starts_with("multipart/form-data")
            });

        if !is_multipart {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(format!("Invalid form body: {e}")))?;
            return Ok(Self::from_fields(fields));
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(format!("Invalid multipart body: {e}")))?;

        let mut form = Self::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
        {
            let name = field.name().unwrap_or("").to_string();
            if name == PHOTO_FIELD {
                let file_name = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::upload(format!("Failed to read photo: {e}")))?;

                let photo = UploadedPhoto {
                    file_name,
                    data,
                };
                form.photo = (!photo.is_empty()).then_some(photo);
            } else {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?;
                form.fields.insert(name, text);
            }
        }

        Ok(form)
    }
}
