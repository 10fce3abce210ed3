//! In-memory sample data for a session

use super::models::{ChatMessage, Conversation, FeedComment, FeedPost, User, UserId};
use crate::context::Directory;
use chrono::Utc;
use uuid::Uuid;

pub const CURRENT_USER_ID: &str = "99";

fn person(
    id: &str,
    first_name: &str,
    last_name: &str,
    picture: &str,
    age: u32,
    occupation: &str,
    gender: &str,
) -> User {
    let mut user = User::new(id);
    user.first_name = Some(first_name.to_string());
    user.last_name = Some(last_name.to_string());
    user.profile_picture = Some(picture.to_string());
    user.age = Some(age);
    user.occupation = Some(occupation.to_string());
    user.gender = Some(gender.to_string());
    user
}

fn post(id: u32, author: &str, photo: &str, created: &str) -> FeedPost {
    FeedPost {
        id,
        author: UserId::from(author),
        photo_url: Some(photo.to_string()),
        created: Some(created.to_string()),
        activity: Some("Added a Photo".to_string()),
        likes: None,
        comments: None,
        liked_by_current_user: false,
    }
}

fn chat(sender: &str, text: &str) -> ChatMessage {
    ChatMessage {
        id: Uuid::new_v4(),
        sender: UserId::from(sender),
        text: text.to_string(),
        sent_at: Utc::now(),
    }
}

/// Sample users, feed and one chat thread
pub fn sample_directory() -> Directory {
    let me = UserId::from(CURRENT_USER_ID);
    let chelsea = UserId::from("1");

    let mut current = person(
        CURRENT_USER_ID,
        "Edgar",
        "Balangue",
        "ic_current_user",
        33,
        "Mobile App Developer",
        "Male",
    );
    current.preference = Some("Female".to_string());
    current.birthday = Some("June 12, 1990".to_string());

    let first = person("1", "Chelsea", "Brags", "sample_user_1", 23, "Graphic Designer", "Female");
    let mut second = person(
        "2",
        "Josie",
        "Brags",
        "sample_user_2",
        22,
        "Model/Photographer",
        "Female",
    );
    second.likes = Some(vec![chelsea.clone()]);

    let mut liked_post = post(2, "1", "sample_feed_user_1_2", "JUST NOW");
    liked_post.likes = Some(vec![me.clone()]);
    liked_post.liked_by_current_user = true;

    let mut commented_post = post(3, "2", "sample_feed_user_2_1", "1 HOUR AGO");
    commented_post.likes = Some(vec![chelsea.clone()]);
    commented_post.comments = Some(vec![FeedComment {
        id: Uuid::new_v4(),
        text: "Nice Picture".to_string(),
        author: chelsea.clone(),
    }]);

    let posts = vec![
        post(1, "1", "sample_feed_user_1_1", "3 HOURS AGO"),
        liked_post,
        commented_post,
    ];

    let mut thread = Conversation::new(chelsea);
    thread.messages = vec![
        chat(CURRENT_USER_ID, "hi"),
        chat("1", "hello"),
        chat(CURRENT_USER_ID, "how are you"),
        chat("1", "im fine"),
    ];
    thread.last_chat = Some("im fine".to_string());

    Directory::new(vec![current, first, second], posts, vec![thread])
}
