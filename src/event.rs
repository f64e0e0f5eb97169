//! Move notifications.

use core::fmt;

use crate::Player;

/// Sent to every listener after a move was accepted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MoveEvent {
    pub row: usize,
    pub column: usize,
    /// The player who placed the mark.
    pub player: Player,
}

/// Handle returned by [`crate::Game::add_listener`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

pub(crate) type Listener = Box<dyn FnMut(&MoveEvent)>;

/// Listener callbacks, invoked in registration order.
#[derive(Default)]
pub(crate) struct Listeners {
    callbacks: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(other, _)| *other != id);
        self.callbacks.len() != before
    }

    pub(crate) fn notify(&mut self, event: &MoveEvent) {
        for (_, callback) in &mut self.callbacks {
            callback(event);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.callbacks.iter().map(|(id, _)| id))
            .finish()
    }
}
