use std::sync::Arc;

use tokio::sync::RwLock;

use crate::assistant::{Delay, DescriptionAssistant, NoDelay, ThreadSleep};
use crate::config::Config;
use crate::models::{notification, Notification, NotificationPreferences, Organizer};
use crate::seed;
use crate::stats::DashboardStats;
use crate::store::{EventStore, ProposalStore};

/// Everything the organizer dashboard holds in memory.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub organizer: Organizer,
    pub events: EventStore,
    pub proposals: ProposalStore,
    pub notifications: Vec<Notification>,
    pub preferences: NotificationPreferences,
}

impl Dashboard {
    pub fn seeded(organizer_name: &str) -> Self {
        Self {
            organizer: seed::organizer(organizer_name),
            events: EventStore::with_events(seed::events()),
            proposals: ProposalStore::with_proposals(organizer_name, seed::proposals()),
            notifications: seed::notifications(),
            preferences: NotificationPreferences::default(),
        }
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::compute(self.events.list(), self.proposals.list())
    }

    pub fn unread_notifications(&self) -> usize {
        notification::unread_count(&self.notifications)
    }
}

pub type Assistant = DescriptionAssistant<Box<dyn Delay>>;

#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<RwLock<Dashboard>>,
    pub assistant: Arc<Assistant>,
}

impl AppState {
    pub fn new(dashboard: Dashboard, assistant: Assistant) -> Self {
        Self {
            dashboard: Arc::new(RwLock::new(dashboard)),
            assistant: Arc::new(assistant),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let delay: Box<dyn Delay> = if config.assistant_latency {
            Box::new(ThreadSleep)
        } else {
            Box::new(NoDelay)
        };
        Self::new(
            Dashboard::seeded(&config.organizer_name),
            DescriptionAssistant::new(delay),
        )
    }
}
