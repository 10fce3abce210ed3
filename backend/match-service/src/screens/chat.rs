use uuid::Uuid;

use crate::context::AppContext;
use crate::domain::models::ChatMessage;
use crate::error::ServiceResult;
use crate::events::{self, EventSink};
use crate::services::conversations::send_message;

pub const SOURCE: &str = "chat";

/// One conversation thread
pub struct ChatScreen {
    conversation_id: Uuid,
    events: EventSink,
}

impl ChatScreen {
    pub fn open(ctx: &AppContext, conversation_id: Uuid, events: EventSink) -> ServiceResult<Self> {
        ctx.directory().conversation(conversation_id)?;
        Ok(Self {
            conversation_id,
            events,
        })
    }

    pub fn conversation_id(&self) -> Uuid {
        self.conversation_id
    }

    pub fn messages<'a>(&self, ctx: &'a AppContext) -> ServiceResult<&'a [ChatMessage]> {
        Ok(&ctx.directory().conversation(self.conversation_id)?.messages)
    }

    /// Send a text message as the signed-in user
    pub fn send(&self, ctx: &mut AppContext, text: &str) -> ServiceResult<ChatMessage> {
        let sender = ctx.current_user_id().clone();
        let conversation = ctx.directory_mut().conversation_mut(self.conversation_id)?;

        let message = send_message(conversation, &sender, text)?.clone();
        self.events
            .emit(events::message_sent(self.conversation_id, &message), None);
        Ok(message)
    }
}
