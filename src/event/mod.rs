mod bus;
mod events;

pub use bus::EventBus;
pub use events::BoardEvent;

pub trait EventHandler {
    fn handle_event(&mut self, event: &BoardEvent);
}

impl<F: FnMut(&BoardEvent)> EventHandler for F {
    fn handle_event(&mut self, event: &BoardEvent) {
        self(event)
    }
}
