use match_service::domain::models::{FeedPost, Profile, SwipeDirection, UserId};
use match_service::error::DeckError;
use match_service::services::likes::set_liked;
use match_service::services::{CardDeck, DeckState};

fn profile(id: &str) -> Profile {
    Profile {
        id: UserId::from(id),
        display_name: id.to_string(),
        age: 30,
        occupation: Some("Tester".to_string()),
        image: None,
    }
}

fn loaded(ids: &[&str]) -> CardDeck {
    let mut deck = CardDeck::with_seed(1);
    deck.load(ids.iter().map(|id| profile(id)).collect(), false);
    deck
}

#[test]
fn swipe_undo_reswipe_scenario() {
    let mut deck = loaded(&["A", "B", "C"]);

    let first = deck.swipe(SwipeDirection::Right).unwrap();
    assert_eq!(first.profile, profile("A"));
    assert_eq!(first.cursor, 1);
    assert!(!first.deck_exhausted);

    let second = deck.swipe(SwipeDirection::Left).unwrap();
    assert_eq!(second.profile, profile("B"));
    assert_eq!(second.cursor, 2);

    let undone = deck.undo().unwrap();
    assert_eq!(deck.cursor(), 1);
    assert_eq!(undone.profile, profile("B"));
    assert_eq!(undone.direction, SwipeDirection::Left);

    let again = deck.swipe(SwipeDirection::Right).unwrap();
    assert_eq!(again.profile, profile("B"));
    assert_eq!(again.cursor, 2);

    let last = deck.swipe(SwipeDirection::Right).unwrap();
    assert_eq!(last.profile, profile("C"));
    assert_eq!(last.cursor, 3);
    assert!(last.deck_exhausted);
    assert_eq!(deck.state(), DeckState::Exhausted);
}

#[test]
fn swiping_every_card_exhausts_deck() {
    for size in 1..=5 {
        let ids: Vec<String> = (0..size).map(|i| format!("p{}", i)).collect();
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let mut deck = loaded(&refs);

        for n in 1..=size {
            let outcome = deck.swipe(SwipeDirection::Left).unwrap();
            assert_eq!(outcome.deck_exhausted, n == size);
        }
        assert_eq!(deck.swipe(SwipeDirection::Left), Err(DeckError::EmptyDeck));
        assert_eq!(deck.undo_depth(), size);
    }
}

#[test]
fn undo_walks_history_most_recent_first() {
    let mut deck = loaded(&["A", "B", "C"]);
    deck.swipe(SwipeDirection::Right).unwrap();
    deck.swipe(SwipeDirection::Up).unwrap();
    deck.swipe(SwipeDirection::Left).unwrap();

    let order: Vec<_> = std::iter::from_fn(|| deck.undo())
        .map(|u| (u.profile.id.to_string(), u.direction))
        .collect();

    assert_eq!(
        order,
        vec![
            ("C".to_string(), SwipeDirection::Left),
            ("B".to_string(), SwipeDirection::Up),
            ("A".to_string(), SwipeDirection::Right),
        ]
    );
    assert_eq!(deck.cursor(), 0);
    assert_eq!(deck.current_card(), Some(&profile("A")));
}

#[test]
fn reload_replaces_state() {
    let mut deck = loaded(&["A", "B"]);
    deck.swipe(SwipeDirection::Right).unwrap();

    deck.load(vec![profile("X")], false);

    assert_eq!(deck.cursor(), 0);
    assert!(!deck.can_undo());
    assert_eq!(deck.current_card(), Some(&profile("X")));
}

#[test]
fn like_unlike_scenario() {
    let u99 = UserId::from("u99");
    let mut post = FeedPost {
        id: 10,
        author: UserId::from("1"),
        photo_url: None,
        created: None,
        activity: None,
        likes: Some(Vec::new()),
        comments: None,
        liked_by_current_user: false,
    };

    set_liked(&mut post, &u99, true);
    assert_eq!(post.likes, Some(vec![u99.clone()]));
    assert!(post.liked_by_current_user);

    set_liked(&mut post, &u99, false);
    assert_eq!(post.likes, Some(Vec::new()));
    assert!(!post.liked_by_current_user);
}
