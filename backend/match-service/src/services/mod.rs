pub mod comments;
pub mod conversations;
pub mod deck;
pub mod discovery;
pub mod labels;
pub mod likes;

pub use comments::{add_comment, compose_comment};
pub use deck::{CardDeck, DeckState, SwipeOutcome, UndoOutcome};
pub use likes::{set_liked, LikeChange, LikeTarget, Likeable};
