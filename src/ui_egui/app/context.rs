use crate::services::event::EventManager;

/// Shared access point for the event store.
pub struct AppContext {
    manager: EventManager,
}

impl AppContext {
    pub fn new(manager: EventManager) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &EventManager {
        &self.manager
    }

    /// Close the store connection. Safe to call more than once.
    pub fn shutdown(&mut self) {
        self.manager.close();
    }
}
