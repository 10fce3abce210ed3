use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque user identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// User entity - a member of the directory, either the viewer or a candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_picture: Option<String>,
    pub age: Option<u32>,
    pub occupation: Option<String>,
    pub gender: Option<String>,
    /// Gender the user wants to be shown
    pub preference: Option<String>,
    pub birthday: Option<String>,
    /// Users who liked this user, in the order they liked
    pub likes: Option<Vec<UserId>>,
    pub liked_by_current_user: bool,
}

impl User {
    pub fn new(id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            first_name: None,
            last_name: None,
            profile_picture: None,
            age: None,
            occupation: None,
            gender: None,
            preference: None,
            birthday: None,
            likes: None,
            liked_by_current_user: false,
        }
    }

    /// First and last name joined by a space; a missing part renders blank
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(" "),
            self.last_name.as_deref().unwrap_or(" ")
        )
    }

    pub fn like_count(&self) -> usize {
        self.likes.as_ref().map_or(0, Vec::len)
    }

    /// Snapshot of the user as a deck card
    pub fn to_profile(&self) -> Profile {
        Profile {
            id: self.id.clone(),
            display_name: self.full_name(),
            age: self.age.unwrap_or(0),
            occupation: self.occupation.clone(),
            image: self.profile_picture.clone(),
        }
    }
}

/// Card shown in a deck. Immutable once placed in a deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    pub display_name: String,
    pub age: u32,
    pub occupation: Option<String>,
    pub image: Option<String>,
}

impl Profile {
    /// Card footer title, "Name, age"
    pub fn title(&self) -> String {
        format!("{}, {}", self.display_name, self.age)
    }
}

/// Direction of a swipe gesture on the top card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

/// What a swipe direction means for the swiped candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeAction {
    Pass,
    Like,
    SuperLike,
    Inert,
}

impl SwipeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
            SwipeDirection::Up => "up",
            SwipeDirection::Down => "down",
        }
    }

    pub fn action(&self) -> SwipeAction {
        match self {
            SwipeDirection::Left => SwipeAction::Pass,
            SwipeDirection::Right => SwipeAction::Like,
            SwipeDirection::Up => SwipeAction::SuperLike,
            SwipeDirection::Down => SwipeAction::Inert,
        }
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwipeDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(SwipeDirection::Left),
            "right" => Ok(SwipeDirection::Right),
            "up" => Ok(SwipeDirection::Up),
            "down" => Ok(SwipeDirection::Down),
            other => Err(format!("unknown swipe direction '{}'", other)),
        }
    }
}

/// Feed post entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedPost {
    pub id: u32,
    pub author: UserId,
    pub photo_url: Option<String>,
    /// Relative creation time as displayed, e.g. "3 HOURS AGO"
    pub created: Option<String>,
    pub activity: Option<String>,
    pub likes: Option<Vec<UserId>>,
    pub comments: Option<Vec<FeedComment>>,
    pub liked_by_current_user: bool,
}

impl FeedPost {
    pub fn like_count(&self) -> usize {
        self.likes.as_ref().map_or(0, Vec::len)
    }

    pub fn comment_count(&self) -> usize {
        self.comments.as_ref().map_or(0, Vec::len)
    }
}

/// Comment on a feed post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedComment {
    pub id: Uuid,
    pub text: String,
    pub author: UserId,
}

/// Chat thread between the viewer and one or more recipients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    pub recipients: Vec<UserId>,
    pub messages: Vec<ChatMessage>,
    /// Preview of the most recent message
    pub last_chat: Option<String>,
}

impl Conversation {
    pub fn new(recipient: UserId) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipients: vec![recipient],
            messages: Vec::new(),
            last_chat: None,
        }
    }

    pub fn primary_recipient(&self) -> Option<&UserId> {
        self.recipients.first()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: UserId,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_blanks_missing_parts() {
        let mut user = User::new("1");
        user.first_name = Some("Chelsea".to_string());
        assert_eq!(user.full_name(), "Chelsea  ");

        user.last_name = Some("Brags".to_string());
        assert_eq!(user.full_name(), "Chelsea Brags");
    }

    #[test]
    fn test_profile_snapshot() {
        let mut user = User::new("2");
        user.first_name = Some("Josie".to_string());
        user.last_name = Some("Brags".to_string());
        user.age = Some(22);
        user.occupation = Some("Model/Photographer".to_string());

        let profile = user.to_profile();
        assert_eq!(profile.id, UserId::from("2"));
        assert_eq!(profile.title(), "Josie Brags, 22");
        assert_eq!(profile.image, None);
    }

    #[test]
    fn test_swipe_direction_actions() {
        assert_eq!(SwipeDirection::Left.action(), SwipeAction::Pass);
        assert_eq!(SwipeDirection::Right.action(), SwipeAction::Like);
        assert_eq!(SwipeDirection::Up.action(), SwipeAction::SuperLike);
        assert_eq!(SwipeDirection::Down.action(), SwipeAction::Inert);
    }

    #[test]
    fn test_swipe_direction_parse() {
        assert_eq!(" Right ".parse::<SwipeDirection>(), Ok(SwipeDirection::Right));
        assert!("sideways".parse::<SwipeDirection>().is_err());
    }
}
