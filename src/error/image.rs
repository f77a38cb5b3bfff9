use thiserror::Error;

/// Errors raised while assembling image render data.
///
/// Collaborator failures (helper, factories) are not wrapped; they propagate
/// as the [`anyhow::Error`] they were returned with.
///
/// # Example
/// ```
/// use catalog_image::error::image::ImageDataError;
///
/// let err = ImageDataError::ZeroWidth { image_id: "thumbnail".into() };
/// assert_eq!(
///     err.to_string(),
///     "image 'thumbnail' has zero width; aspect ratio is undefined"
/// );
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageDataError {
    /// The helper reported a width of 0, so `height / width` has no value.
    #[error("image '{image_id}' has zero width; aspect ratio is undefined")]
    ZeroWidth { image_id: String },
}
