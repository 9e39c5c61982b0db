//! Named events with ordered listener lists.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::EventError;

/// Handle returned by [`EventManager::add_event_listener`], used to remove
/// the listener again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

pub type Listener<A> = Box<dyn Fn(&A) + Send + Sync>;

/// Dispatches events of type `E` carrying arguments of type `A`.
///
/// Only events registered at construction are accepted; every other event
/// is rejected with [`EventError::UnknownEvent`]. Listeners of one event run
/// in the order they were added.
pub struct EventManager<E, A> {
    listeners: BTreeMap<E, Vec<(ListenerId, Listener<A>)>>,
    next_id: u64,
}

impl<E, A> EventManager<E, A>
where
    E: Ord + fmt::Display,
{
    pub fn new(events: impl IntoIterator<Item = E>) -> Self {
        Self {
            listeners: events.into_iter().map(|e| (e, Vec::new())).collect(),
            next_id: 0,
        }
    }

    /// Registered events, in order.
    pub fn event_names(&self) -> Vec<String> {
        self.listeners.keys().map(ToString::to_string).collect()
    }

    pub fn add_event_listener(
        &mut self,
        event: E,
        listener: impl Fn(&A) + Send + Sync + 'static,
    ) -> Result<ListenerId, EventError> {
        let id = ListenerId(self.next_id);
        self.listeners_of_mut(&event)?.push((id, Box::new(listener)));
        self.next_id += 1;
        Ok(id)
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn remove_event_listener(&mut self, event: &E, id: ListenerId) -> Result<bool, EventError> {
        let list = self.listeners_of_mut(event)?;
        let before = list.len();
        list.retain(|(existing, _)| *existing != id);
        Ok(list.len() != before)
    }

    /// Call every listener of `event` with `args`.
    pub fn raise_event(&self, event: &E, args: &A) -> Result<(), EventError> {
        let list = self
            .listeners
            .get(event)
            .ok_or_else(|| self.unknown(event))?;
        for (_, listener) in list {
            listener(args);
        }
        Ok(())
    }

    pub fn listener_count(&self, event: &E) -> usize {
        self.listeners.get(event).map_or(0, Vec::len)
    }

    fn listeners_of_mut(
        &mut self,
        event: &E,
    ) -> Result<&mut Vec<(ListenerId, Listener<A>)>, EventError> {
        let err = self.unknown(event);
        self.listeners.get_mut(event).ok_or(err)
    }

    fn unknown(&self, event: &E) -> EventError {
        EventError::UnknownEvent {
            name: event.to_string(),
            available: self.available(),
        }
    }

    fn available(&self) -> String {
        self.event_names().join(",")
    }
}

impl<E: fmt::Debug, A> fmt::Debug for EventManager<E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.listeners.iter().map(|(e, l)| (e, l.len())))
            .finish()
    }
}

/// Events raised by [`MapCanvas`](crate::MapCanvas).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanvasEvent {
    BeforeAppendShape,
    AfterAppendShape,
}

impl CanvasEvent {
    pub const ALL: [CanvasEvent; 2] =
        [CanvasEvent::BeforeAppendShape, CanvasEvent::AfterAppendShape];

    pub fn name(self) -> &'static str {
        match self {
            CanvasEvent::BeforeAppendShape => "beforeappendshape",
            CanvasEvent::AfterAppendShape => "afterappendshape",
        }
    }
}

impl fmt::Display for CanvasEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CanvasEvent {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CanvasEvent::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| EventError::UnknownEvent {
                name: s.to_string(),
                available: CanvasEvent::ALL.map(CanvasEvent::name).join(","),
            })
    }
}
