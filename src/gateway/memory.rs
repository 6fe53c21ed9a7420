use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps published events in process. Clones share one buffer,
// so a handle kept aside sees what the service published.
#[derive(Debug, Default, Clone)]
pub struct MemoryPublisher {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn events(&self) -> Result<Vec<DomainEvent>, LibraryError> {
        self.events.lock()
            .map(|events| events.clone())
            .map_err(|err| LibraryError::runtime(format!("event buffer poisoned {}", err).as_str(), None))
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let mut events = self.events.lock()
            .map_err(|err| LibraryError::runtime(format!("event buffer poisoned {}", err).as_str(), None))?;
        events.push(event.clone());
        Ok(())
    }
}
