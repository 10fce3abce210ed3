//! People screen
//!
//! Swipeable deck over the directory's candidates. Left passes, right likes,
//! up super-likes; a like is recorded on the candidate's user record. The
//! single-profile variant loads a one-card deck, so its first swipe exhausts
//! it and the screen is done.

use tracing::{info, warn};
use uuid::Uuid;

use crate::context::AppContext;
use crate::domain::models::{Profile, SwipeAction, SwipeDirection, UserId};
use crate::error::{DeckError, ServiceResult};
use crate::events::{self, EventSink};
use crate::services::conversations;
use crate::services::discovery::deck_candidates;
use crate::services::likes::set_liked;
use crate::services::{CardDeck, DeckState, SwipeOutcome, UndoOutcome};

pub const SOURCE: &str = "people";

pub struct PeopleScreen {
    deck: CardDeck,
    events: EventSink,
}

impl PeopleScreen {
    /// Deck of every candidate except the signed-in user
    pub fn open(
        ctx: &AppContext,
        mut deck: CardDeck,
        events: EventSink,
        shuffled: bool,
    ) -> ServiceResult<Self> {
        let viewer = ctx.current_user()?;
        deck.load(deck_candidates(ctx.directory().users(), viewer), shuffled);
        Ok(Self { deck, events })
    }

    /// One-card deck for a single profile
    pub fn for_profile(
        ctx: &AppContext,
        mut deck: CardDeck,
        events: EventSink,
        user_id: &UserId,
    ) -> ServiceResult<Self> {
        let profile = ctx.directory().user(user_id)?.to_profile();
        deck.load(vec![profile], false);
        Ok(Self { deck, events })
    }

    pub fn deck(&self) -> &CardDeck {
        &self.deck
    }

    pub fn current_card(&self) -> Option<&Profile> {
        self.deck.current_card()
    }

    /// Controls are only enabled while a card is on top
    pub fn controls_enabled(&self) -> bool {
        self.deck.state() == DeckState::Active
    }

    pub fn swipe(
        &mut self,
        ctx: &mut AppContext,
        direction: SwipeDirection,
    ) -> ServiceResult<SwipeOutcome> {
        let outcome = self.deck.swipe(direction)?;
        let correlation_id = Uuid::new_v4();
        self.events
            .emit(events::swipe_occurred(&outcome), Some(correlation_id));

        if matches!(direction.action(), SwipeAction::Like | SwipeAction::SuperLike) {
            let viewer = ctx.current_user_id().clone();
            match ctx.directory_mut().user_mut(&outcome.profile.id) {
                Ok(candidate) => {
                    let change = set_liked(candidate, &viewer, true);
                    self.events
                        .emit(events::like_toggled(&change, &viewer), Some(correlation_id));
                }
                Err(e) => {
                    warn!(profile_id = %outcome.profile.id, "Like skipped: {}", e);
                }
            }
        }

        if outcome.deck_exhausted {
            info!(cards = self.deck.len(), "Swiped all cards");
            self.events
                .emit(events::deck_exhausted(self.deck.len()), Some(correlation_id));
        }

        Ok(outcome)
    }

    pub fn pass(&mut self, ctx: &mut AppContext) -> ServiceResult<SwipeOutcome> {
        self.swipe(ctx, SwipeDirection::Left)
    }

    pub fn like(&mut self, ctx: &mut AppContext) -> ServiceResult<SwipeOutcome> {
        self.swipe(ctx, SwipeDirection::Right)
    }

    pub fn super_like(&mut self, ctx: &mut AppContext) -> ServiceResult<SwipeOutcome> {
        self.swipe(ctx, SwipeDirection::Up)
    }

    /// Bring back the last swiped card. Likes recorded by that swipe stay.
    pub fn undo(&mut self) -> Option<UndoOutcome> {
        let outcome = self.deck.undo()?;
        self.events.emit(events::swipe_undone(&outcome), None);
        Some(outcome)
    }

    pub fn shuffle(&mut self) {
        self.deck.shuffle();
    }

    /// Tap on the top card
    pub fn select_current(&self) -> Option<Profile> {
        let profile = self.deck.current_card()?.clone();
        self.events.emit(events::profile_selected(&profile), None);
        Some(profile)
    }

    /// Open (or start) a conversation with the top card's user
    pub fn message_current(&mut self, ctx: &mut AppContext) -> ServiceResult<Uuid> {
        let recipient = self
            .deck
            .current_card()
            .map(|profile| profile.id.clone())
            .ok_or(DeckError::EmptyDeck)?;

        ctx.directory().user(&recipient)?;
        let (conversation_id, is_new) =
            conversations::open_with(ctx.directory_mut().conversations_mut(), &recipient);
        self.events.emit(
            events::conversation_opened(conversation_id, &recipient, is_new),
            None,
        );
        Ok(conversation_id)
    }
}
