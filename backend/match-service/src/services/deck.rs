//! Card Deck Engine
//!
//! Ordered deck of candidate profiles with a cursor on the top card and an
//! undo history of dismissals.
//!
//! Invariants:
//! - `cursor <= cards.len()`
//! - the cursor only moves backwards on `undo`, `load` and `shuffle`
//! - `history.len()` equals the number of swipes not yet undone

use crate::domain::models::{Profile, SwipeDirection};
use crate::error::DeckError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

/// Observable deck state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckState {
    /// No cards loaded
    Empty,
    /// A card is on top
    Active,
    /// Every card has been swiped
    Exhausted,
}

/// One dismissal, recorded for undo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SwipeRecord {
    index: usize,
    direction: SwipeDirection,
}

/// Result of a successful swipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwipeOutcome {
    pub profile: Profile,
    pub direction: SwipeDirection,
    /// Deck position the swiped card occupied
    pub index: usize,
    /// Cursor after the swipe
    pub cursor: usize,
    /// True when this swipe consumed the last card
    pub deck_exhausted: bool,
}

/// Result of a successful undo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoOutcome {
    pub profile: Profile,
    pub direction: SwipeDirection,
    pub index: usize,
}

pub struct CardDeck {
    cards: Vec<Profile>,
    cursor: usize,
    history: Vec<SwipeRecord>,
    rng: StdRng,
}

impl CardDeck {
    /// Empty deck shuffled from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Empty deck with a reproducible shuffle order
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            cards: Vec::new(),
            cursor: 0,
            history: Vec::new(),
            rng,
        }
    }

    /// Replace the deck contents. Resets the cursor and clears undo history.
    pub fn load(&mut self, profiles: Vec<Profile>, shuffled: bool) {
        self.cards = profiles;
        if shuffled {
            self.cards.shuffle(&mut self.rng);
        }
        self.cursor = 0;
        self.history.clear();

        info!(cards = self.cards.len(), shuffled, "Deck loaded");
    }

    /// Profile on top of the deck, `None` once exhausted
    pub fn current_card(&self) -> Option<&Profile> {
        self.cards.get(self.cursor)
    }

    /// Dismiss the top card in `direction`
    pub fn swipe(&mut self, direction: SwipeDirection) -> Result<SwipeOutcome, DeckError> {
        let profile = self.current_card().cloned().ok_or(DeckError::EmptyDeck)?;

        let index = self.cursor;
        self.history.push(SwipeRecord { index, direction });
        self.cursor += 1;

        let deck_exhausted = self.cursor == self.cards.len();
        debug!(
            profile_id = %profile.id,
            index,
            direction = %direction,
            deck_exhausted,
            "Card swiped"
        );

        Ok(SwipeOutcome {
            profile,
            direction,
            index,
            cursor: self.cursor,
            deck_exhausted,
        })
    }

    /// Restore the most recently swiped card. `None` when there is nothing to
    /// undo; the deck is left untouched in that case.
    pub fn undo(&mut self) -> Option<UndoOutcome> {
        let record = self.history.pop()?;
        self.cursor = record.index;

        let profile = self.cards.get(record.index)?.clone();
        debug!(
            profile_id = %profile.id,
            index = record.index,
            direction = %record.direction,
            "Swipe undone"
        );

        Some(UndoOutcome {
            profile,
            direction: record.direction,
            index: record.index,
        })
    }

    /// Reorder the whole deck, including swiped cards, and start over from
    /// the top. Undo history is cleared since its indices no longer apply.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        self.cursor = 0;
        self.history.clear();

        info!(cards = self.cards.len(), "Deck reshuffled");
    }

    pub fn state(&self) -> DeckState {
        if self.cards.is_empty() {
            DeckState::Empty
        } else if self.cursor >= self.cards.len() {
            DeckState::Exhausted
        } else {
            DeckState::Active
        }
    }

    pub fn cards(&self) -> &[Profile] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }
}

impl Default for CardDeck {
    fn default() -> Self {
        Self::new()
    }
}
