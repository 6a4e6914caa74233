//! AppMessage enum for async communication within the application.

use super::timers::TimerId;
use crate::state::TimerEvent;

/// Messages delivered to the event loop from background tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// A scheduled timer ran out
    TimerFired { id: TimerId, event: TimerEvent },
}
