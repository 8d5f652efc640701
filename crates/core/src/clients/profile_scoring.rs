//! Profile completion and follow-up priority scoring.

use crate::constants::{PROFILE_HIGH_PRIORITY_BELOW, PROFILE_MEDIUM_PRIORITY_BELOW};

use super::clients_model::{Client, ProfileCompletion, ProfilePriority};

fn is_filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Tracked profile fields, in reporting order.
fn tracked_fields(client: &Client) -> [(&'static str, bool); 8] {
    [
        ("first_name", is_filled(&client.first_name)),
        ("last_name", is_filled(&client.last_name)),
        ("email", is_filled(&client.email)),
        ("phone", is_filled(&client.phone)),
        ("date_of_birth", client.date_of_birth.is_some()),
        ("address", is_filled(&client.address)),
        ("profession", is_filled(&client.profession)),
        ("risk_profile", is_filled(&client.risk_profile)),
    ]
}

/// Maps a completion percentage to a follow-up priority.
pub fn priority_for_completion(completion_percent: u8) -> ProfilePriority {
    if completion_percent < PROFILE_HIGH_PRIORITY_BELOW {
        ProfilePriority::High
    } else if completion_percent < PROFILE_MEDIUM_PRIORITY_BELOW {
        ProfilePriority::Medium
    } else {
        ProfilePriority::Low
    }
}

/// Scores how complete a client's profile is.
pub fn calculate_profile_completion(client: &Client) -> ProfileCompletion {
    let fields = tracked_fields(client);
    let filled = fields.iter().filter(|(_, filled)| *filled).count();
    let completion_percent = ((filled as f64 * 100.0) / fields.len() as f64).round() as u8;

    ProfileCompletion {
        client_id: client.id.clone(),
        completion_percent,
        missing_fields: fields
            .iter()
            .filter(|(_, filled)| !filled)
            .map(|(name, _)| name.to_string())
            .collect(),
        priority: priority_for_completion(completion_percent),
    }
}

/// Orders completions for the advisor's follow-up list: high priority first,
/// then least complete first. The sort is stable.
pub fn sort_by_priority(completions: &mut [ProfileCompletion]) {
    completions.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then(a.completion_percent.cmp(&b.completion_percent))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn full_client() -> Client {
        Client {
            id: "c1".to_string(),
            first_name: Some("Camille".to_string()),
            last_name: Some("Martin".to_string()),
            email: Some("camille@example.com".to_string()),
            phone: Some("0600000000".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(1980, 5, 17),
            address: Some("1 rue de Paris".to_string()),
            profession: Some("Médecin".to_string()),
            risk_profile: Some("équilibré".to_string()),
        }
    }

    #[test]
    fn complete_profile_is_low_priority() {
        let completion = calculate_profile_completion(&full_client());
        assert_eq!(completion.completion_percent, 100);
        assert!(completion.missing_fields.is_empty());
        assert_eq!(completion.priority, ProfilePriority::Low);
    }

    #[test]
    fn empty_profile_lists_every_field() {
        let completion = calculate_profile_completion(&Client::new("c2"));
        assert_eq!(completion.completion_percent, 0);
        assert_eq!(completion.missing_fields.len(), 8);
        assert_eq!(completion.missing_fields[0], "first_name");
        assert_eq!(completion.priority, ProfilePriority::High);
    }

    #[test]
    fn blank_strings_count_as_missing() {
        let mut client = full_client();
        client.email = Some("   ".to_string());
        client.phone = None;
        let completion = calculate_profile_completion(&client);
        // 6 of 8 filled
        assert_eq!(completion.completion_percent, 75);
        assert_eq!(completion.missing_fields, vec!["email", "phone"]);
        assert_eq!(completion.priority, ProfilePriority::Medium);
    }

    #[test]
    fn priority_thresholds() {
        assert_eq!(priority_for_completion(49), ProfilePriority::High);
        assert_eq!(priority_for_completion(50), ProfilePriority::Medium);
        assert_eq!(priority_for_completion(79), ProfilePriority::Medium);
        assert_eq!(priority_for_completion(80), ProfilePriority::Low);
    }

    #[test]
    fn sorting_puts_urgent_profiles_first() {
        let mut completions = vec![
            calculate_profile_completion(&full_client()),
            calculate_profile_completion(&Client::new("empty")),
            calculate_profile_completion(&Client::new("named").with_name("A", "B")),
        ];
        sort_by_priority(&mut completions);
        let ids: Vec<&str> = completions.iter().map(|c| c.client_id.as_str()).collect();
        assert_eq!(ids, vec!["empty", "named", "c1"]);
    }
}
