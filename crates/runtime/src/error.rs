use game_core::SetupError;

/// Errors surfaced by session orchestration.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A battle could not be assembled from the encounter definition.
    #[error("battle setup failed")]
    Setup(#[from] SetupError),
}
