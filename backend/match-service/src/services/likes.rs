//! Like Reconciler
//!
//! Toggles a like between a user and a likeable entity (feed post or user),
//! keeping the entity's liked-by list free of duplicates and its
//! `liked_by_current_user` flag in step with the transition.

use crate::domain::models::{FeedPost, User, UserId};
use tracing::debug;

/// What a like refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LikeTarget {
    Post(u32),
    User(UserId),
}

impl LikeTarget {
    pub fn target_type(&self) -> &'static str {
        match self {
            LikeTarget::Post(_) => "post",
            LikeTarget::User(_) => "user",
        }
    }

    pub fn target_id(&self) -> String {
        match self {
            LikeTarget::Post(id) => id.to_string(),
            LikeTarget::User(id) => id.to_string(),
        }
    }
}

/// Any record that tracks who liked it
pub trait Likeable {
    fn like_target(&self) -> LikeTarget;

    /// `None` until the first like is recorded
    fn likes_mut(&mut self) -> &mut Option<Vec<UserId>>;

    fn likes(&self) -> Option<&[UserId]>;

    fn set_liked_by_current_user(&mut self, liked: bool);

    fn liked_by_current_user(&self) -> bool;
}

impl Likeable for FeedPost {
    fn like_target(&self) -> LikeTarget {
        LikeTarget::Post(self.id)
    }

    fn likes_mut(&mut self) -> &mut Option<Vec<UserId>> {
        &mut self.likes
    }

    fn likes(&self) -> Option<&[UserId]> {
        self.likes.as_deref()
    }

    fn set_liked_by_current_user(&mut self, liked: bool) {
        self.liked_by_current_user = liked;
    }

    fn liked_by_current_user(&self) -> bool {
        self.liked_by_current_user
    }
}

impl Likeable for User {
    fn like_target(&self) -> LikeTarget {
        LikeTarget::User(self.id.clone())
    }

    fn likes_mut(&mut self) -> &mut Option<Vec<UserId>> {
        &mut self.likes
    }

    fn likes(&self) -> Option<&[UserId]> {
        self.likes.as_deref()
    }

    fn set_liked_by_current_user(&mut self, liked: bool) {
        self.liked_by_current_user = liked;
    }

    fn liked_by_current_user(&self) -> bool {
        self.liked_by_current_user
    }
}

/// Summary of a reconciled like, for re-rendering and event emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeChange {
    pub target: LikeTarget,
    pub liked: bool,
    /// False when the list already reflected the transition
    pub changed: bool,
    pub like_count: usize,
}

/// Apply a like (`liked == true`) or unlike from `user_id` to `entity`.
///
/// Liking appends `user_id` unless already present. Unliking removes its
/// first occurrence if any. The current-user flag is set to `liked` in every
/// case. A `None` list is treated as empty.
pub fn set_liked<E: Likeable + ?Sized>(entity: &mut E, user_id: &UserId, liked: bool) -> LikeChange {
    let likes = entity.likes_mut();

    let changed = if liked {
        let list = likes.get_or_insert_with(Vec::new);
        if list.contains(user_id) {
            false
        } else {
            list.push(user_id.clone());
            true
        }
    } else {
        match likes.as_mut() {
            Some(list) => match list.iter().position(|id| id == user_id) {
                Some(pos) => {
                    list.remove(pos);
                    true
                }
                None => false,
            },
            None => false,
        }
    };

    entity.set_liked_by_current_user(liked);

    let change = LikeChange {
        target: entity.like_target(),
        liked,
        changed,
        like_count: like_count(entity),
    };
    debug!(
        target_type = change.target.target_type(),
        target_id = %change.target.target_id(),
        user_id = %user_id,
        liked,
        changed,
        like_count = change.like_count,
        "Like reconciled"
    );
    change
}

pub fn like_count<E: Likeable + ?Sized>(entity: &E) -> usize {
    entity.likes().map_or(0, <[UserId]>::len)
}

pub fn is_liked_by<E: Likeable + ?Sized>(entity: &E, user_id: &UserId) -> bool {
    entity.likes().is_some_and(|likes| likes.contains(user_id))
}
