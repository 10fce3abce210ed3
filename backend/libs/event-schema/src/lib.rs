use chrono::{DateTime, Utc};
/// Event schema for everything a Bliss screen reports back to its owner
///
/// Screens emit a single tagged union (`ScreenEvent`) through one channel
/// instead of a family of one-method callbacks. Each event is wrapped in an
/// `EventEnvelope` carrying a schema version so observers can reject payloads
/// they do not understand.
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current schema version for all events
pub const SCHEMA_VERSION: u32 = 1;

/// Envelope for every event leaving a screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope<T> {
    /// Unique event ID
    pub event_id: Uuid,
    /// Event timestamp
    pub timestamp: DateTime<Utc>,
    /// Schema version for compatibility checking
    pub schema_version: u32,
    /// Screen that generated the event ("people", "feed", "chat", ...)
    pub source: String,
    /// Groups the events produced by one user action
    pub correlation_id: Option<Uuid>,
    /// Actual event payload
    pub data: T,
}

impl<T> EventEnvelope<T> {
    pub fn new(source: impl Into<String>, data: T) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            schema_version: SCHEMA_VERSION,
            source: source.into(),
            correlation_id: None,
            data,
        }
    }

    pub fn with_correlation_id(mut self, correlation_id: Uuid) -> Self {
        self.correlation_id = Some(correlation_id);
        self
    }
}

// ============================================================================
// DECK EVENTS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwipeOccurredEvent {
    pub profile_id: String,
    pub index: usize,
    pub direction: String, // "left", "right", "up", "down"
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwipeUndoneEvent {
    pub profile_id: String,
    pub index: usize,
    pub direction: String,
    pub undone_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckExhaustedEvent {
    pub deck_size: usize,
    pub exhausted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSelectedEvent {
    pub profile_id: String,
    pub selected_at: DateTime<Utc>,
}

// ============================================================================
// ENGAGEMENT EVENTS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikeToggledEvent {
    pub target_id: String,
    pub target_type: String, // "post", "user"
    pub user_id: String,
    pub liked: bool,
    pub like_count: usize,
    pub toggled_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentAddedEvent {
    pub comment_id: Uuid,
    pub post_id: u32,
    pub user_id: String,
    pub content: String,
    pub comment_count: usize,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// MESSAGING EVENTS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationOpenedEvent {
    pub conversation_id: Uuid,
    pub recipient_id: String,
    pub is_new: bool,
    pub opened_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageSentEvent {
    pub message_id: Uuid,
    pub conversation_id: Uuid,
    pub sender_id: String,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

/// Every outcome a screen can report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScreenEvent {
    SwipeOccurred(SwipeOccurredEvent),
    SwipeUndone(SwipeUndoneEvent),
    DeckExhausted(DeckExhaustedEvent),
    ProfileSelected(ProfileSelectedEvent),
    LikeToggled(LikeToggledEvent),
    CommentAdded(CommentAddedEvent),
    ConversationOpened(ConversationOpenedEvent),
    MessageSent(MessageSentEvent),
}

impl ScreenEvent {
    /// Stable name of the variant, matches the serialized `type` tag
    pub fn kind(&self) -> &'static str {
        match self {
            ScreenEvent::SwipeOccurred(_) => "swipe_occurred",
            ScreenEvent::SwipeUndone(_) => "swipe_undone",
            ScreenEvent::DeckExhausted(_) => "deck_exhausted",
            ScreenEvent::ProfileSelected(_) => "profile_selected",
            ScreenEvent::LikeToggled(_) => "like_toggled",
            ScreenEvent::CommentAdded(_) => "comment_added",
            ScreenEvent::ConversationOpened(_) => "conversation_opened",
            ScreenEvent::MessageSent(_) => "message_sent",
        }
    }
}

// ============================================================================
// Version compatibility helpers
// ============================================================================

pub fn is_compatible(current_version: u32, message_version: u32) -> bool {
    current_version == message_version
}
