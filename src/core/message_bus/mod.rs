//=========================================================================
// Message Bus
//=========================================================================
//
// Per-tick, type-keyed message queues shared by the engine and screens.
//
// Architecture:
//   producer → push<M>() → HashMap<TypeId, Vec<M>>
//                               ↓
//   screens  ← read<M>()   (any number of readers this tick)
//   manager  ← take<M>()   (single consumer, e.g. scene transitions)
//                               ↓
//   GlobalSystems ──────→ clear<M>() at tick boundary
//
// What travels on the bus:
//   - the game's action enum, republished every tick from input
//   - `SceneTransition<S>` requests, drained by the scene manager
//
//=========================================================================

//=== Submodules ==========================================================

mod queue;

//=== External Dependencies ===============================================

use std::any::TypeId;
use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use queue::MessageQueue;

//=== Message =============================================================

/// Anything that may travel on the [`MessageBus`].
///
/// Implemented for every `Send + 'static` type.
pub trait Message: Send + 'static {}

impl<T: Send + 'static> Message for T {}

//=== MessageBus ==========================================================

/// Type-keyed queues for batched, per-tick communication.
///
/// One `Vec<M>` per message type. Queues keep their allocation when
/// cleared, so recurring message types cost nothing after the first tick.
pub struct MessageBus {
    queues: HashMap<TypeId, Box<dyn MessageQueue>>,
}

impl MessageBus {
    pub fn new() -> Self {
        Self {
            queues: HashMap::new(),
        }
    }

    //--- Producers --------------------------------------------------------

    /// Appends a message to the queue of its type.
    pub fn push<M: Message>(&mut self, msg: M) {
        self.queue_mut::<M>().push(msg);
    }

    /// Appends every message of an iterator, preserving order.
    pub fn extend<M: Message, I: IntoIterator<Item = M>>(&mut self, messages: I) {
        self.queue_mut::<M>().extend(messages);
    }

    //--- Consumers --------------------------------------------------------

    /// All messages of type `M` queued so far this tick.
    ///
    /// Reading does not consume: every screen updated this tick sees the
    /// same slice until the queue is cleared.
    pub fn read<M: Message>(&self) -> &[M] {
        self.queue_ref::<M>().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Moves all messages of type `M` out, leaving the queue empty.
    ///
    /// Lets a consumer act on the messages while holding `&mut` access to
    /// whatever owns the bus.
    pub fn take<M: Message>(&mut self) -> Vec<M> {
        self.queues
            .get_mut(&TypeId::of::<M>())
            .and_then(|q| q.as_any_mut().downcast_mut::<Vec<M>>())
            .map(std::mem::take)
            .unwrap_or_default()
    }

    //--- Queries ----------------------------------------------------------

    pub fn has_messages<M: Message>(&self) -> bool {
        self.count::<M>() > 0
    }

    pub fn count<M: Message>(&self) -> usize {
        self.queue_ref::<M>().map_or(0, Vec::len)
    }

    //--- Tick Boundary ----------------------------------------------------

    /// Empties the queue of type `M`, keeping its capacity.
    pub fn clear<M: Message>(&mut self) {
        if let Some(queue) = self.queues.get_mut(&TypeId::of::<M>()) {
            queue.clear_queue();
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn queue_ref<M: Message>(&self) -> Option<&Vec<M>> {
        self.queues
            .get(&TypeId::of::<M>())
            .and_then(|q| q.as_any().downcast_ref::<Vec<M>>())
    }

    fn queue_mut<M: Message>(&mut self) -> &mut Vec<M> {
        self.queues
            .entry(TypeId::of::<M>())
            .or_insert_with(|| Box::new(Vec::<M>::new()))
            .as_any_mut()
            .downcast_mut::<Vec<M>>()
            // Entries are keyed by the TypeId of their element type
            .expect("MessageBus queue stored under a foreign TypeId")
    }
}

impl Default for MessageBus {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
