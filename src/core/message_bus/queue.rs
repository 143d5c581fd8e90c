//=========================================================================
// Message Queue
//=========================================================================
//
// Type-erased view over a `Vec<M>` so queues of different message types
// can share one HashMap.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

//=== Internal Dependencies ===============================================

use super::Message;

//=== MessageQueue ========================================================

/// Operations the bus needs without knowing the message type.
pub(super) trait MessageQueue: Send {
    /// Drops queued messages, keeping capacity.
    fn clear_queue(&mut self);

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<M: Message> MessageQueue for Vec<M> {
    fn clear_queue(&mut self) {
        self.clear();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
