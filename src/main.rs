//! Social Sports demo CLI
//!
//! Fetches the event listing from the configured backend and prints it,
//! falling back to demo data when the backend is unreachable. Exercises
//! the same flow a page does: mount, refresh, render from handle state.

use tracing::info;

use social_sports_client::{
    api::Api,
    config::Settings,
    fallback,
    hooks::EventsFeed,
    state::SessionStore,
    utils::{format, logging},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    logging::init_logging(&settings.logging)?;

    info!("Starting Social Sports client demo...");

    let session = SessionStore::new();
    let api = Api::new(&settings.api, session)?;

    let mut feed = EventsFeed::new(api.events.clone());
    feed.refresh().await;

    if let Some(error) = feed.error() {
        logging::log_fallback("events listing", &error.to_string());
        feed.supply(fallback::demo_events());
    }

    for event in feed.events() {
        println!(
            "{:<12} {:<28} {}  {}/{} players  {}",
            format!("{:?}", event.sport),
            event.location,
            format::format_event_date(&event.date),
            event.current_players,
            event.max_players,
            format::skill_indicator(event.skill_level),
        );
    }

    Ok(())
}
