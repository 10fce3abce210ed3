//! Application context
//!
//! `Directory` is the single owner of every user, feed post and conversation
//! in the session. Screens refer to entities by id and look them up here;
//! decks only hold `Profile` snapshots.
//!
//! `AppContext` pairs the directory with the signed-in user. It is built by the
//! composition root at startup and consumed by `sign_out`.

use crate::domain::models::{Conversation, FeedPost, User, UserId};
use crate::error::{ServiceError, ServiceResult};
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct Directory {
    users: Vec<User>,
    posts: Vec<FeedPost>,
    conversations: Vec<Conversation>,
}

impl Directory {
    pub fn new(users: Vec<User>, posts: Vec<FeedPost>, conversations: Vec<Conversation>) -> Self {
        Self {
            users,
            posts,
            conversations,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, id: &UserId) -> ServiceResult<&User> {
        self.users
            .iter()
            .find(|user| &user.id == id)
            .ok_or_else(|| ServiceError::NotFound(format!("user {}", id)))
    }

    pub fn user_mut(&mut self, id: &UserId) -> ServiceResult<&mut User> {
        self.users
            .iter_mut()
            .find(|user| &user.id == id)
            .ok_or_else(|| ServiceError::NotFound(format!("user {}", id)))
    }

    pub fn posts(&self) -> &[FeedPost] {
        &self.posts
    }

    pub fn post(&self, id: u32) -> ServiceResult<&FeedPost> {
        self.posts
            .iter()
            .find(|post| post.id == id)
            .ok_or_else(|| ServiceError::NotFound(format!("post {}", id)))
    }

    pub fn post_mut(&mut self, id: u32) -> ServiceResult<&mut FeedPost> {
        self.posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or_else(|| ServiceError::NotFound(format!("post {}", id)))
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn conversations_mut(&mut self) -> &mut Vec<Conversation> {
        &mut self.conversations
    }

    pub fn conversation(&self, id: Uuid) -> ServiceResult<&Conversation> {
        self.conversations
            .iter()
            .find(|conversation| conversation.id == id)
            .ok_or_else(|| ServiceError::NotFound(format!("conversation {}", id)))
    }

    pub fn conversation_mut(&mut self, id: Uuid) -> ServiceResult<&mut Conversation> {
        self.conversations
            .iter_mut()
            .find(|conversation| conversation.id == id)
            .ok_or_else(|| ServiceError::NotFound(format!("conversation {}", id)))
    }
}

pub struct AppContext {
    current_user_id: UserId,
    directory: Directory,
}

impl AppContext {
    /// Sign `current_user_id` in over `directory`. The user must exist.
    pub fn new(directory: Directory, current_user_id: UserId) -> ServiceResult<Self> {
        directory.user(&current_user_id)?;

        info!(
            user_id = %current_user_id,
            users = directory.users().len(),
            posts = directory.posts().len(),
            "Session started"
        );

        Ok(Self {
            current_user_id,
            directory,
        })
    }

    pub fn current_user_id(&self) -> &UserId {
        &self.current_user_id
    }

    pub fn current_user(&self) -> ServiceResult<&User> {
        self.directory.user(&self.current_user_id)
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn directory_mut(&mut self) -> &mut Directory {
        &mut self.directory
    }

    /// End the session, handing the directory back to the caller
    pub fn sign_out(self) -> Directory {
        info!(user_id = %self.current_user_id, "Session ended");
        self.directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_current_user_is_rejected() {
        let directory = Directory::new(vec![User::new("1")], Vec::new(), Vec::new());
        let result = AppContext::new(directory, UserId::from("99"));
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn test_lookup_by_id() {
        let directory = Directory::new(vec![User::new("1"), User::new("99")], Vec::new(), Vec::new());
        let ctx = AppContext::new(directory, UserId::from("99")).unwrap();

        assert_eq!(ctx.current_user().unwrap().id, UserId::from("99"));
        assert!(ctx.directory().user(&UserId::from("1")).is_ok());
        assert!(ctx.directory().post(5).is_err());
    }

    #[test]
    fn test_sign_out_returns_directory() {
        let directory = Directory::new(vec![User::new("99")], Vec::new(), Vec::new());
        let ctx = AppContext::new(directory, UserId::from("99")).unwrap();

        let directory = ctx.sign_out();
        assert_eq!(directory.users().len(), 1);
    }
}
