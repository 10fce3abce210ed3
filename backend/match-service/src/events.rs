//! Screen event delivery
//!
//! Each screen owns one `EventSink`. Sending never blocks and does not need a
//! runtime; the receiving side is drained by whoever composed the screen.

use chrono::Utc;
use event_schema::{
    CommentAddedEvent, ConversationOpenedEvent, DeckExhaustedEvent, EventEnvelope,
    LikeToggledEvent, MessageSentEvent, ProfileSelectedEvent, ScreenEvent, SwipeOccurredEvent,
    SwipeUndoneEvent,
};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::models::{ChatMessage, FeedComment, Profile, UserId};
use crate::services::likes::LikeChange;
use crate::services::{SwipeOutcome, UndoOutcome};

pub type ScreenEnvelope = EventEnvelope<ScreenEvent>;
pub type EventReceiver = UnboundedReceiver<ScreenEnvelope>;

#[derive(Clone)]
pub struct EventSink {
    source: String,
    tx: UnboundedSender<ScreenEnvelope>,
}

impl EventSink {
    pub fn channel(source: impl Into<String>) -> (Self, EventReceiver) {
        let (tx, rx) = unbounded_channel();
        (
            Self {
                source: source.into(),
                tx,
            },
            rx,
        )
    }

    /// Sink for another screen sharing the same receiver
    pub fn for_source(&self, source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            tx: self.tx.clone(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Deliver `event`. A closed receiver only means nobody is listening
    /// anymore, so the event is dropped with a warning.
    pub fn emit(&self, event: ScreenEvent, correlation_id: Option<Uuid>) {
        let mut envelope = EventEnvelope::new(self.source.clone(), event);
        if let Some(id) = correlation_id {
            envelope = envelope.with_correlation_id(id);
        }

        debug!(
            source = %self.source,
            kind = envelope.data.kind(),
            event_id = %envelope.event_id,
            "Screen event"
        );

        if let Err(e) = self.tx.send(envelope) {
            warn!(
                source = %self.source,
                kind = e.0.data.kind(),
                "Event receiver dropped, discarding event"
            );
        }
    }
}

pub fn swipe_occurred(outcome: &SwipeOutcome) -> ScreenEvent {
    ScreenEvent::SwipeOccurred(SwipeOccurredEvent {
        profile_id: outcome.profile.id.to_string(),
        index: outcome.index,
        direction: outcome.direction.as_str().to_string(),
        occurred_at: Utc::now(),
    })
}

pub fn swipe_undone(outcome: &UndoOutcome) -> ScreenEvent {
    ScreenEvent::SwipeUndone(SwipeUndoneEvent {
        profile_id: outcome.profile.id.to_string(),
        index: outcome.index,
        direction: outcome.direction.as_str().to_string(),
        undone_at: Utc::now(),
    })
}

pub fn deck_exhausted(deck_size: usize) -> ScreenEvent {
    ScreenEvent::DeckExhausted(DeckExhaustedEvent {
        deck_size,
        exhausted_at: Utc::now(),
    })
}

pub fn profile_selected(profile: &Profile) -> ScreenEvent {
    ScreenEvent::ProfileSelected(ProfileSelectedEvent {
        profile_id: profile.id.to_string(),
        selected_at: Utc::now(),
    })
}

pub fn like_toggled(change: &LikeChange, user_id: &UserId) -> ScreenEvent {
    ScreenEvent::LikeToggled(LikeToggledEvent {
        target_id: change.target.target_id(),
        target_type: change.target.target_type().to_string(),
        user_id: user_id.to_string(),
        liked: change.liked,
        like_count: change.like_count,
        toggled_at: Utc::now(),
    })
}

pub fn comment_added(post_id: u32, comment: &FeedComment, comment_count: usize) -> ScreenEvent {
    ScreenEvent::CommentAdded(CommentAddedEvent {
        comment_id: comment.id,
        post_id,
        user_id: comment.author.to_string(),
        content: comment.text.clone(),
        comment_count,
        created_at: Utc::now(),
    })
}

pub fn conversation_opened(conversation_id: Uuid, recipient: &UserId, is_new: bool) -> ScreenEvent {
    ScreenEvent::ConversationOpened(ConversationOpenedEvent {
        conversation_id,
        recipient_id: recipient.to_string(),
        is_new,
        opened_at: Utc::now(),
    })
}

pub fn message_sent(conversation_id: Uuid, message: &ChatMessage) -> ScreenEvent {
    ScreenEvent::MessageSent(MessageSentEvent {
        message_id: message.id,
        conversation_id,
        sender_id: message.sender.to_string(),
        content: message.text.clone(),
        sent_at: message.sent_at,
    })
}
