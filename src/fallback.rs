//! Demo/fallback event data
//!
//! Pure generators of plausible placeholder events, substituted by call
//! sites (event listing, my-events) when the backend is unreachable so the
//! UI stays populated during outages and local development. Shapes are
//! deterministic; timing is offset from "now".

use chrono::{Duration, Utc};

use crate::models::{Event, EventStatus, Participant, ParticipantStatus, SportType};

fn participant(user_id: &str, days_ago: i64) -> Participant {
    Participant {
        user_id: user_id.to_string(),
        name: user_id.to_string(),
        phone_number: None,
        joined_at: Utc::now() - Duration::days(days_ago),
        status: ParticipantStatus::Confirmed,
    }
}

/// Placeholder events for the public event listing
pub fn demo_events() -> Vec<Event> {
    let now = Utc::now();
    vec![
        Event {
            event_id: "demo-1".to_string(),
            sport: SportType::Padel,
            location: "Padel City Amsterdam".to_string(),
            date: now + Duration::days(1),
            max_players: 4,
            current_players: 2,
            skill_level: 3,
            status: EventStatus::Active,
            created_by: "demo-user".to_string(),
            created_at: Some(now - Duration::days(2)),
            booking_url: None,
            whatsapp_group_link: Some("https://chat.whatsapp.com/example1".to_string()),
            participants: Vec::new(),
        },
        Event {
            event_id: "demo-2".to_string(),
            sport: SportType::Tennis,
            location: "Tennis Park West".to_string(),
            date: now + Duration::days(2),
            max_players: 4,
            current_players: 1,
            skill_level: 2,
            status: EventStatus::Active,
            created_by: "demo-user".to_string(),
            created_at: Some(now - Duration::days(1)),
            booking_url: None,
            whatsapp_group_link: None,
            participants: Vec::new(),
        },
        Event {
            event_id: "demo-3".to_string(),
            sport: SportType::Football,
            location: "Sportpark Sloten".to_string(),
            date: now + Duration::days(3),
            max_players: 10,
            current_players: 8,
            skill_level: 4,
            status: EventStatus::Active,
            created_by: "demo-user".to_string(),
            created_at: Some(now - Duration::days(1)),
            booking_url: None,
            whatsapp_group_link: None,
            participants: Vec::new(),
        },
    ]
}

/// Placeholder events for the my-events view.
///
/// Mimics server-side personalization: the pool contains one event whose
/// roster never includes the given user (Downtown Courts), and the result
/// keeps only events the user is actually on.
pub fn my_demo_events(user_id: &str) -> Vec<Event> {
    let now = Utc::now();
    let pool = vec![
        Event {
            event_id: "my-event-1".to_string(),
            sport: SportType::Padel,
            location: "Padel City Amsterdam".to_string(),
            date: now + Duration::days(1),
            max_players: 4,
            current_players: 3,
            skill_level: 3,
            status: EventStatus::Active,
            created_by: user_id.to_string(),
            created_at: Some(now - Duration::days(3)),
            booking_url: None,
            whatsapp_group_link: Some("https://chat.whatsapp.com/example1".to_string()),
            participants: vec![
                participant(user_id, 3),
                participant("other-user-1", 2),
                participant("other-user-2", 1),
            ],
        },
        Event {
            event_id: "my-event-2".to_string(),
            sport: SportType::Tennis,
            location: "Tennis Park East".to_string(),
            date: now + Duration::days(5),
            max_players: 4,
            current_players: 2,
            skill_level: 4,
            status: EventStatus::Active,
            created_by: "other-user-1".to_string(),
            created_at: Some(now - Duration::days(2)),
            booking_url: None,
            whatsapp_group_link: None,
            participants: vec![participant("other-user-1", 2), participant(user_id, 1)],
        },
        Event {
            event_id: "my-event-3".to_string(),
            sport: SportType::Football,
            location: "Soccer Field Central".to_string(),
            date: now - Duration::days(1),
            max_players: 11,
            current_players: 11,
            skill_level: 2,
            status: EventStatus::Completed,
            created_by: "other-user-2".to_string(),
            created_at: Some(now - Duration::days(10)),
            booking_url: None,
            whatsapp_group_link: None,
            participants: vec![
                participant(user_id, 9),
                participant("other-user-1", 8),
                participant("other-user-2", 8),
            ],
        },
        Event {
            event_id: "not-my-event-1".to_string(),
            sport: SportType::Basketball,
            location: "Downtown Courts".to_string(),
            date: now + Duration::days(2),
            max_players: 10,
            current_players: 6,
            skill_level: 3,
            status: EventStatus::Active,
            created_by: "downtown-organizer".to_string(),
            created_at: Some(now - Duration::days(1)),
            booking_url: None,
            whatsapp_group_link: None,
            // Roster deliberately excludes the requesting user
            participants: vec![
                participant("downtown-organizer", 1),
                participant("downtown-regular", 1),
            ],
        },
    ];

    pool.into_iter()
        .filter(|event| event.has_participant(user_id))
        .collect()
}
