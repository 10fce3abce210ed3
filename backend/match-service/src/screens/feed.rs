use tracing::info;

use crate::context::AppContext;
use crate::domain::models::{FeedComment, User};
use crate::error::ServiceResult;
use crate::events::{self, EventSink};
use crate::services::labels::{comments_label, likes_label};
use crate::services::likes::{set_liked, LikeChange};
use crate::services::{add_comment, compose_comment};

pub const SOURCE: &str = "feed";

/// Feed of posts with like toggling and comments
pub struct FeedScreen {
    events: EventSink,
}

impl FeedScreen {
    pub fn open(events: EventSink) -> Self {
        Self { events }
    }

    /// Like button tapped; `liked` is the button's new state
    pub fn toggle_like(
        &self,
        ctx: &mut AppContext,
        post_id: u32,
        liked: bool,
    ) -> ServiceResult<LikeChange> {
        let viewer = ctx.current_user_id().clone();
        let post = ctx.directory_mut().post_mut(post_id)?;

        let change = set_liked(post, &viewer, liked);
        self.events.emit(events::like_toggled(&change, &viewer), None);
        Ok(change)
    }

    pub fn add_comment(
        &self,
        ctx: &mut AppContext,
        post_id: u32,
        text: &str,
    ) -> ServiceResult<FeedComment> {
        let comment = compose_comment(ctx.current_user_id(), text)?;
        let post = ctx.directory_mut().post_mut(post_id)?;

        let count = add_comment(post, comment.clone());
        info!(post_id, comment_count = count, "Comment added");
        self.events
            .emit(events::comment_added(post_id, &comment, count), None);
        Ok(comment)
    }

    pub fn likes_label(&self, ctx: &AppContext, post_id: u32) -> ServiceResult<Option<String>> {
        Ok(likes_label(ctx.directory().post(post_id)?.like_count()))
    }

    pub fn comments_label(&self, ctx: &AppContext, post_id: u32) -> ServiceResult<Option<String>> {
        Ok(comments_label(ctx.directory().post(post_id)?.comment_count()))
    }

    /// Users who liked the post, in like order. Ids no longer in the
    /// directory are skipped.
    pub fn liked_by<'a>(&self, ctx: &'a AppContext, post_id: u32) -> ServiceResult<Vec<&'a User>> {
        let directory = ctx.directory();
        let likes = directory.post(post_id)?.likes.as_deref().unwrap_or_default();

        Ok(likes
            .iter()
            .filter_map(|id| directory.user(id).ok())
            .collect())
    }
}
