/// Error types for match-service
use thiserror::Error;

/// Deck-level failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckError {
    /// Swipe attempted while the deck is empty or exhausted. Callers are
    /// expected to have disabled the control that triggered it.
    #[error("no card to swipe: deck is empty or exhausted")]
    EmptyDeck,
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Deck error: {0}")]
    Deck(#[from] DeckError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
