//! Data handle integration tests
//!
//! Drives the stateful handles through their lifecycles against a mock
//! backend: stale data retention, demo substitution, mutation success
//! flags and the WhatsApp unavailable latch.

mod helpers;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use social_sports_client::api::Api;
use social_sports_client::fallback;
use social_sports_client::hooks::{
    CreateEvent, EventDetail, EventsFeed, JoinEvent, MyEventsFeed, QrCodeHandle,
};
use social_sports_client::models::{Event, EventRequest, SportType};
use social_sports_client::state::FetchPhase;

use helpers::backend_mock::{sample_event_json, BackendMock};

#[tokio::test]
async fn events_feed_keeps_stale_data_on_failure() {
    let backend = BackendMock::new().await;

    // First refresh succeeds, every one after that hits a 500
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([sample_event_json("evt-1")])),
        )
        .up_to_n_times(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&backend.server)
        .await;

    let api = Api::new(&backend.api_config(), backend.session()).unwrap();
    let mut feed = EventsFeed::new(api.events.clone());

    feed.refresh().await;
    assert_eq!(feed.phase(), FetchPhase::Ready);
    assert_eq!(feed.events().len(), 1);

    feed.refresh().await;
    assert_eq!(feed.phase(), FetchPhase::Failed);
    assert!(feed.error().is_some());
    // Previous data is retained, not reset to empty
    assert_eq!(feed.events().len(), 1);
    assert_eq!(feed.events()[0].event_id, "evt-1");
}

#[tokio::test]
async fn events_feed_call_site_substitutes_demo_data() {
    let backend = BackendMock::new().await;
    backend.mock_status("GET", "/events", 503).await;

    let api = Api::new(&backend.api_config(), backend.session()).unwrap();
    let mut feed = EventsFeed::new(api.events.clone());

    feed.refresh().await;
    assert!(feed.error().is_some());
    assert!(feed.events().is_empty());

    feed.supply(fallback::demo_events());
    assert_eq!(feed.events().len(), 3);
    assert_eq!(feed.events()[0].event_id, "demo-1");
    // The substitution does not pretend the backend was reachable
    assert!(feed.error().is_some());
}

#[tokio::test]
async fn my_events_feed_substitutes_personalized_demo_data() {
    let backend = BackendMock::new().await;
    backend.mock_status("GET", "/events/my-events", 500).await;

    let api = Api::new(&backend.api_config(), backend.authenticated_session()).unwrap();
    let mut feed = MyEventsFeed::new(api.events.clone());

    feed.refresh().await;
    assert!(feed.error().is_some());

    feed.supply(fallback::my_demo_events("other-user-3"));
    let locations: Vec<&str> = feed.events().iter().map(|e| e.location.as_str()).collect();
    assert_eq!(feed.events().len(), 3);
    assert!(!locations.contains(&"Downtown Courts"));
}

#[tokio::test]
async fn event_detail_reloads_on_id_change() {
    let backend = BackendMock::new().await;
    backend
        .mock_json("GET", "/events/evt-1", 200, sample_event_json("evt-1"))
        .await;
    backend
        .mock_json("GET", "/events/evt-2", 200, sample_event_json("evt-2"))
        .await;

    let api = Api::new(&backend.api_config(), backend.authenticated_session()).unwrap();
    let mut detail = EventDetail::new(api.events.clone(), "evt-1");

    detail.refresh().await;
    assert_eq!(detail.event().unwrap().event_id, "evt-1");

    detail.load("evt-2").await;
    assert_eq!(detail.event().unwrap().event_id, "evt-2");
}

#[tokio::test]
async fn created_event_round_trips_response_body() {
    let backend = BackendMock::new().await;
    let body = sample_event_json("evt-new");
    backend.mock_json("POST", "/events", 200, body.clone()).await;

    let api = Api::new(&backend.api_config(), backend.authenticated_session()).unwrap();
    let mut create = CreateEvent::new(api.events.clone());

    let request = EventRequest {
        sport: SportType::Padel,
        location: "Padel City Amsterdam".to_string(),
        date: "2024-06-07T15:00:00Z".parse().unwrap(),
        max_players: 4,
        skill_level: 3,
        booking_url: None,
        creator_name: "Ana".to_string(),
        creator_phone: None,
    };
    create.create(&request).await;

    assert!(create.success());
    assert!(create.error().is_none());

    let expected: Event = serde_json::from_value(body).unwrap();
    assert_eq!(create.created_event(), Some(&expected));
}

#[tokio::test]
async fn join_success_flag_resets_per_attempt() {
    let backend = BackendMock::new().await;
    backend
        .mock_json("POST", "/events/evt-1/join", 200, sample_event_json("evt-1"))
        .await;
    backend
        .mock_json(
            "POST",
            "/events/evt-full/join",
            409,
            json!({"message": "Event is full"}),
        )
        .await;

    let api = Api::new(&backend.api_config(), backend.authenticated_session()).unwrap();
    let mut join = JoinEvent::new(api.events.clone());

    join.join("evt-1", "Cleo", Some("+31611111111")).await;
    assert!(join.success());
    assert!(join.error().is_none());

    join.join("evt-full", "Cleo", None).await;
    assert!(!join.success());
    assert!(join.error().is_some());
}

#[tokio::test]
async fn qr_handle_latches_unavailable_on_failed_probe() {
    let backend = BackendMock::new().await;

    // No HEAD mock: the probe gets a 404. The QR endpoint must never be hit.
    Mock::given(method("GET"))
        .and(path("/api/whatsapp/qrcode"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"qrCodeUrl": "x"})))
        .expect(0)
        .mount(&backend.server)
        .await;

    let api = Api::new(&backend.api_config(), backend.authenticated_session()).unwrap();
    let mut handle = QrCodeHandle::new(api.whatsapp.clone());

    handle.init().await;
    assert!(handle.backend_unavailable());

    // Refresh is a no-op while latched
    handle.refresh().await;
    assert!(handle.backend_unavailable());
    assert!(handle.qr_code().is_none());
}

#[tokio::test]
async fn qr_handle_latches_on_empty_result() {
    let backend = BackendMock::new().await;
    backend.mock_status("HEAD", "/whatsapp/status", 200).await;
    backend
        .mock_json("GET", "/whatsapp/qrcode", 200, json!({"qrCodeUrl": ""}))
        .await;

    let api = Api::new(&backend.api_config(), backend.authenticated_session()).unwrap();
    let mut handle = QrCodeHandle::new(api.whatsapp.clone());

    handle.init().await;
    assert!(handle.backend_unavailable());
    assert!(handle.qr_code().is_none());
}

#[tokio::test]
async fn qr_handle_recovers_only_via_explicit_retry() {
    let backend = BackendMock::new().await;

    let api = Api::new(&backend.api_config(), backend.authenticated_session()).unwrap();
    let mut handle = QrCodeHandle::new(api.whatsapp.clone());

    // Probe fails against the empty server
    handle.init().await;
    assert!(handle.backend_unavailable());

    // Service comes up
    backend.mock_status("HEAD", "/whatsapp/status", 200).await;
    backend
        .mock_json(
            "GET",
            "/whatsapp/qrcode",
            200,
            json!({"qrCodeUrl": "https://example.com/qr.png"}),
        )
        .await;

    // Still latched until the user retries
    handle.refresh().await;
    assert!(handle.qr_code().is_none());

    handle.retry().await;
    assert!(!handle.backend_unavailable());
    assert_eq!(handle.qr_code(), Some("https://example.com/qr.png"));
}
