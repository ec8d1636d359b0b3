//! Backend API surface
//!
//! A shared transport client plus one thin domain module per backend area.

pub mod events;
pub mod stats;
pub mod transport;
pub mod users;
pub mod whatsapp;

pub use events::EventsApi;
pub use stats::StatsApi;
pub use transport::ApiClient;
pub use users::UsersApi;
pub use whatsapp::WhatsAppApi;

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::state::SessionStore;
use crate::utils::errors::Result;

/// Aggregate of all domain API modules over one shared transport client
#[derive(Debug, Clone)]
pub struct Api {
    pub events: EventsApi,
    pub users: UsersApi,
    pub whatsapp: WhatsAppApi,
    pub stats: StatsApi,
    client: Arc<ApiClient>,
}

impl Api {
    /// Build the full API surface from configuration and a session store
    pub fn new(config: &ApiConfig, session: SessionStore) -> Result<Self> {
        let client = Arc::new(ApiClient::new(config, session)?);

        Ok(Self {
            events: EventsApi::new(Arc::clone(&client)),
            users: UsersApi::new(Arc::clone(&client), config.register_endpoints.clone()),
            whatsapp: WhatsAppApi::new(Arc::clone(&client)),
            stats: StatsApi::new(Arc::clone(&client)),
            client,
        })
    }

    /// The shared transport client
    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    /// The session store behind the transport client
    pub fn session(&self) -> &SessionStore {
        self.client.session()
    }
}
