mod bus;
mod events;

pub use bus::EventBus;
pub use events::CoreEvent;

/// Receives change notifications from the core.
///
/// Handlers get no payload beyond the channel; they are expected to
/// re-query state through the editor's read accessors.
pub trait EventHandler {
    fn handle_event(&mut self, event: &CoreEvent);
}
