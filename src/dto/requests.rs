use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Required string fields default to empty when the key is missing, so a
/// missing field and a blank one both fail validation with a field-level
/// error instead of a body-deserialization rejection.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("This field may not be blank.".into());
        return Err(error);
    }
    Ok(())
}

/// Note: no `sentiment` field anywhere below. The label is server-computed
/// and read-only; anything a client sends under that key is dropped during
/// deserialization.
#[derive(Debug, Validate, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    #[validate(
        custom(function = not_blank),
        length(max = 200, message = "Ensure this field has no more than 200 characters.")
    )]
    pub author: String,
    #[serde(default)]
    #[validate(custom(function = not_blank))]
    pub content: String,
}

/// Partial update: absent fields are left untouched, present fields must
/// pass the same constraints as on create.
#[derive(Debug, Validate, Deserialize)]
pub struct UpdatePostRequest {
    #[validate(
        custom(function = not_blank),
        length(max = 200, message = "Ensure this field has no more than 200 characters.")
    )]
    pub author: Option<String>,
    #[validate(custom(function = not_blank))]
    pub content: Option<String>,
}

#[derive(Debug, Validate, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    #[validate(custom(function = not_blank))]
    pub text: String,
}
