#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `id` is a string because cars and violations use natural TEXT keys
    /// (plate number, violation code) rather than BIGSERIAL ids.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
