//! Engagement count labels for feed cells. `None` means the row is hidden.

pub fn likes_label(count: usize) -> Option<String> {
    match count {
        0 => None,
        1 => Some("1 like".to_string()),
        n => Some(format!("{} likes", n)),
    }
}

pub fn comments_label(count: usize) -> Option<String> {
    match count {
        0 => None,
        1 => Some("View 1 comment".to_string()),
        n => Some(format!("View all {} comments", n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_likes_label() {
        assert_eq!(likes_label(0), None);
        assert_eq!(likes_label(1).as_deref(), Some("1 like"));
        assert_eq!(likes_label(12).as_deref(), Some("12 likes"));
    }

    #[test]
    fn test_comments_label() {
        assert_eq!(comments_label(0), None);
        assert_eq!(comments_label(1).as_deref(), Some("View 1 comment"));
        assert_eq!(comments_label(4).as_deref(), Some("View all 4 comments"));
    }
}
