use crate::domain::models::{ChatMessage, Conversation, UserId};
use crate::error::{ServiceError, ServiceResult};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

/// Most recent thread whose primary recipient is `user_id`
pub fn find_with<'a>(conversations: &'a [Conversation], user_id: &UserId) -> Option<&'a Conversation> {
    conversations
        .iter()
        .rev()
        .find(|conversation| conversation.primary_recipient() == Some(user_id))
}

/// Return the existing thread with `user_id`, or start a new one.
/// The flag is true when a thread was created.
pub fn open_with(conversations: &mut Vec<Conversation>, user_id: &UserId) -> (Uuid, bool) {
    if let Some(existing) = find_with(conversations, user_id) {
        return (existing.id, false);
    }

    let conversation = Conversation::new(user_id.clone());
    let id = conversation.id;
    conversations.push(conversation);

    info!(conversation_id = %id, recipient_id = %user_id, "Conversation started");
    (id, true)
}

/// Append a text message from `sender`. Blank messages are rejected.
pub fn send_message<'a>(
    conversation: &'a mut Conversation,
    sender: &UserId,
    raw_text: &str,
) -> ServiceResult<&'a ChatMessage> {
    let text = raw_text.trim();
    if text.is_empty() {
        return Err(ServiceError::InvalidInput(
            "message text must not be empty".to_string(),
        ));
    }

    conversation.messages.push(ChatMessage {
        id: Uuid::new_v4(),
        sender: sender.clone(),
        text: text.to_string(),
        sent_at: Utc::now(),
    });
    conversation.last_chat = Some(text.to_string());

    conversation
        .messages
        .last()
        .ok_or_else(|| ServiceError::NotFound("message just sent".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_with_reuses_existing_thread() {
        let chelsea = UserId::from("1");
        let mut conversations = vec![Conversation::new(chelsea.clone())];
        let existing = conversations[0].id;

        assert_eq!(open_with(&mut conversations, &chelsea), (existing, false));
        assert_eq!(conversations.len(), 1);
    }

    #[test]
    fn test_open_with_starts_new_thread() {
        let mut conversations = vec![Conversation::new(UserId::from("1"))];

        let (id, is_new) = open_with(&mut conversations, &UserId::from("2"));

        assert!(is_new);
        assert_eq!(conversations.len(), 2);
        assert_eq!(find_with(&conversations, &UserId::from("2")).map(|c| c.id), Some(id));
    }

    #[test]
    fn test_send_message_updates_preview() {
        let me = UserId::from("99");
        let mut conversation = Conversation::new(UserId::from("1"));

        let sent = send_message(&mut conversation, &me, " how are you ").unwrap().clone();

        assert_eq!(sent.text, "how are you");
        assert_eq!(sent.sender, me);
        assert_eq!(conversation.last_chat.as_deref(), Some("how are you"));
        assert!(send_message(&mut conversation, &me, "  ").is_err());
        assert_eq!(conversation.messages.len(), 1);
    }
}
