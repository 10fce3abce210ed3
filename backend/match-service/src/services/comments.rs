use crate::domain::models::{FeedComment, FeedPost, UserId};
use crate::error::{ServiceError, ServiceResult};
use uuid::Uuid;

/// Build a comment from raw input. Surrounding whitespace is trimmed and a
/// blank comment is rejected.
pub fn compose_comment(author: &UserId, raw_text: &str) -> ServiceResult<FeedComment> {
    let text = raw_text.trim();
    if text.is_empty() {
        return Err(ServiceError::InvalidInput(
            "comment text must not be empty".to_string(),
        ));
    }

    Ok(FeedComment {
        id: Uuid::new_v4(),
        text: text.to_string(),
        author: author.clone(),
    })
}

/// Append `comment` to the post, creating the list on first use.
/// Returns the new comment count.
pub fn add_comment(post: &mut FeedPost, comment: FeedComment) -> usize {
    let comments = post.comments.get_or_insert_with(Vec::new);
    comments.push(comment);
    comments.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_post() -> FeedPost {
        FeedPost {
            id: 3,
            author: UserId::from("2"),
            photo_url: None,
            created: None,
            activity: None,
            likes: None,
            comments: None,
            liked_by_current_user: false,
        }
    }

    #[test]
    fn test_first_comment_initialises_list() {
        let mut post = empty_post();
        let comment = compose_comment(&UserId::from("99"), "Nice Picture").unwrap();

        assert_eq!(add_comment(&mut post, comment.clone()), 1);
        assert_eq!(post.comments, Some(vec![comment]));
    }

    #[test]
    fn test_comments_keep_insertion_order() {
        let mut post = empty_post();
        let author = UserId::from("99");
        for text in ["first", "second", "third"] {
            add_comment(&mut post, compose_comment(&author, text).unwrap());
        }

        let texts: Vec<_> = post
            .comments
            .unwrap()
            .into_iter()
            .map(|c| c.text)
            .collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_compose_trims_and_rejects_blank() {
        let author = UserId::from("99");
        assert_eq!(compose_comment(&author, "  hi  ").unwrap().text, "hi");
        assert!(matches!(
            compose_comment(&author, "   "),
            Err(ServiceError::InvalidInput(_))
        ));
    }
}
