use crate::domain::models::{Profile, User};

/// Every user other than the viewer, as deck cards, in directory order
pub fn deck_candidates(users: &[User], viewer: &User) -> Vec<Profile> {
    users
        .iter()
        .filter(|user| user.id != viewer.id)
        .map(User::to_profile)
        .collect()
}

/// Users whose gender matches the viewer's preference (case insensitive).
/// A viewer without a preference gets an empty list.
pub fn for_you<'a>(users: &'a [User], viewer: &User) -> Vec<&'a User> {
    let Some(preference) = viewer.preference.as_deref() else {
        return Vec::new();
    };

    users
        .iter()
        .filter(|user| user.id != viewer.id)
        .filter(|user| {
            user.gender
                .as_deref()
                .is_some_and(|gender| gender.eq_ignore_ascii_case(preference))
        })
        .collect()
}

/// Users ordered by like count, most liked first. Ties keep directory order.
pub fn leaderboard(users: &[User]) -> Vec<&User> {
    let mut ranked: Vec<&User> = users.iter().collect();
    ranked.sort_by(|a, b| b.like_count().cmp(&a.like_count()));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::UserId;

    fn user(id: &str, gender: &str, likes: usize) -> User {
        let mut user = User::new(id);
        user.gender = Some(gender.to_string());
        if likes > 0 {
            user.likes = Some((0..likes).map(|i| UserId::new(format!("l{}", i))).collect());
        }
        user
    }

    #[test]
    fn test_for_you_matches_preference_case_insensitively() {
        let mut viewer = user("99", "Male", 0);
        viewer.preference = Some("female".to_string());
        let users = vec![
            user("1", "Female", 0),
            user("2", "male", 0),
            user("3", "FEMALE", 0),
            viewer.clone(),
        ];

        let ids: Vec<_> = for_you(&users, &viewer).iter().map(|u| u.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_for_you_without_preference_is_empty() {
        let viewer = user("99", "Male", 0);
        let users = vec![user("1", "Female", 0)];
        assert!(for_you(&users, &viewer).is_empty());
    }

    #[test]
    fn test_deck_candidates_exclude_viewer() {
        let viewer = user("99", "Male", 0);
        let users = vec![user("1", "Female", 0), viewer.clone(), user("2", "Female", 0)];

        let ids: Vec<_> = deck_candidates(&users, &viewer)
            .into_iter()
            .map(|p| p.id.to_string())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_leaderboard_orders_by_likes_desc_stable() {
        let users = vec![
            user("1", "Female", 1),
            user("2", "Female", 2),
            user("3", "Female", 1),
            user("4", "Female", 0),
        ];

        let ids: Vec<_> = leaderboard(&users).iter().map(|u| u.id.to_string()).collect();
        assert_eq!(ids, vec!["2", "1", "3", "4"]);
    }
}
