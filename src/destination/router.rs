//! Tracks which destination is active.

use super::{Destination, NullSink, SinkId, SinkSet};

/// The active-destination register.
///
/// The router itself answers for [`SinkId::Null`]; every other id is resolved
/// through the application's [`SinkSet`]. Which destination was active before
/// a group switched it is remembered by the group stack, not here.
#[derive(Debug, Clone)]
pub struct Router {
    active: SinkId,
    null: NullSink,
}

impl Router {
    /// Create a router with the document body active.
    #[inline]
    pub fn new() -> Self {
        Self {
            active: SinkId::Document,
            null: NullSink,
        }
    }

    /// Currently active destination.
    #[inline]
    pub fn active(&self) -> SinkId {
        self.active
    }

    /// Make `id` the active destination.
    #[inline]
    pub fn set_active(&mut self, id: SinkId) {
        self.active = id;
    }

    /// Whether the active destination discards everything.
    #[inline]
    pub fn is_discarding(&self) -> bool {
        self.active == SinkId::Null
    }

    /// Resolve a destination id.
    pub fn resolve<'a, S>(&'a mut self, sinks: &'a mut S, id: SinkId) -> Option<&'a mut dyn Destination>
    where
        S: SinkSet + ?Sized,
    {
        match id {
            SinkId::Null => Some(&mut self.null),
            _ => sinks.sink(id),
        }
    }

    /// Resolve a destination id, falling back to the null sink.
    pub fn sink<'a, S>(&'a mut self, sinks: &'a mut S, id: SinkId) -> &'a mut dyn Destination
    where
        S: SinkSet + ?Sized,
    {
        match id {
            SinkId::Null => &mut self.null,
            _ => match sinks.sink(id) {
                Some(sink) => sink,
                None => &mut self.null,
            },
        }
    }

    /// Resolve the active destination.
    #[inline]
    pub fn active_sink<'a, S>(&'a mut self, sinks: &'a mut S) -> &'a mut dyn Destination
    where
        S: SinkSet + ?Sized,
    {
        let id = self.active;
        self.sink(sinks, id)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destination::SinkRegistry;

    #[test]
    fn test_null_is_always_recognized() {
        let mut router = Router::new();
        let mut sinks = SinkRegistry::new();
        assert_eq!(router.active(), SinkId::Document);
        assert!(router.resolve(&mut sinks, SinkId::Null).is_some());
        assert!(router.resolve(&mut sinks, SinkId::Document).is_none());

        router.set_active(SinkId::Null);
        assert!(router.is_discarding());
    }
}
