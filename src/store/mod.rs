use thiserror::Error;
use uuid::Uuid;

pub mod event_store;
pub mod proposal_store;

pub use event_store::EventStore;
pub use proposal_store::ProposalStore;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Event '{0}' does not exist")]
    EventNotFound(Uuid),
}
