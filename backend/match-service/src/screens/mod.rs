pub mod chat;
pub mod feed;
pub mod people;

pub use chat::ChatScreen;
pub use feed::FeedScreen;
pub use people::PeopleScreen;
