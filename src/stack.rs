//! Group stack: brace-scoped property inheritance.

use crate::destination::SinkId;
use crate::error::{RtfError, RtfResult};
use crate::property::{PropertyGroup, PropertyKey, PropertyTable, PropertyValue};
use smallvec::SmallVec;

/// State of one open group.
#[derive(Debug, Clone, Copy)]
pub struct GroupFrame {
    /// Properties in effect inside the group
    pub properties: PropertyTable,
    /// Destination that was active when the group opened
    pub saved_destination: SinkId,
}

/// Stack of group frames.
///
/// The bottom frame holds the document-level state and is never popped, so
/// [`depth`](GroupStack::depth) is the number of unmatched `{`.
#[derive(Debug, Clone)]
pub struct GroupStack {
    frames: SmallVec<[GroupFrame; 8]>,
}

impl GroupStack {
    /// Create a stack at depth 0 with default properties.
    pub fn new() -> Self {
        let mut frames = SmallVec::new();
        frames.push(GroupFrame {
            properties: PropertyTable::new(),
            saved_destination: SinkId::Document,
        });
        Self { frames }
    }

    /// Number of open groups.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    fn top(&self) -> &GroupFrame {
        // The base frame is never removed
        &self.frames[self.frames.len() - 1]
    }

    fn top_mut(&mut self) -> &mut GroupFrame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    /// Open a group: copy the current properties and remember `active`.
    pub fn push(&mut self, active: SinkId) {
        let properties = self.top().properties;
        self.frames.push(GroupFrame {
            properties,
            saved_destination: active,
        });
    }

    /// Close a group, restoring the parent's properties and returning the
    /// destination that was active when the group opened.
    pub fn pop(&mut self, offset: usize) -> RtfResult<SinkId> {
        if self.depth() == 0 {
            return Err(RtfError::UnbalancedGroup { offset, depth: 0 });
        }
        match self.frames.pop() {
            Some(frame) => Ok(frame.saved_destination),
            None => Err(RtfError::UnbalancedGroup { offset, depth: 0 }),
        }
    }

    /// Destination that was active when the innermost group opened.
    #[inline]
    pub fn saved_destination(&self) -> SinkId {
        self.top().saved_destination
    }

    /// Set a property in the innermost group.
    #[inline]
    pub fn set_property(&mut self, key: PropertyKey, value: PropertyValue) {
        self.top_mut().properties.set(key, value);
    }

    /// Read a property of the innermost group.
    #[inline]
    pub fn property(&self, key: PropertyKey) -> Option<PropertyValue> {
        self.top().properties.get(key)
    }

    /// Clear a property in the innermost group, returning whether it was set.
    pub fn take_flag(&mut self, key: PropertyKey) -> bool {
        let properties = &mut self.top_mut().properties;
        let was_set = properties.flag(key);
        properties.clear(key);
        was_set
    }

    /// Property table of the innermost group.
    #[inline]
    pub fn properties(&self) -> &PropertyTable {
        &self.top().properties
    }

    /// Reset a property group in the innermost group.
    #[inline]
    pub fn reset_group(&mut self, group: PropertyGroup) {
        self.top_mut().properties.reset_group(group);
    }
}

impl Default for GroupStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_push_pop_restores_parent() {
        let mut stack = GroupStack::new();
        stack.set_property(PropertyKey::FontSize, PropertyValue::Int(20));

        stack.push(SinkId::Document);
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.property(PropertyKey::FontSize), Some(PropertyValue::Int(20)));
        stack.set_property(PropertyKey::FontSize, PropertyValue::Int(40));
        stack.set_property(PropertyKey::Bold, PropertyValue::Bool(true));

        assert_eq!(stack.pop(10).unwrap(), SinkId::Document);
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.property(PropertyKey::FontSize), Some(PropertyValue::Int(20)));
        assert_eq!(stack.property(PropertyKey::Bold), None);
    }

    #[test]
    fn test_pop_at_base_is_unbalanced() {
        let mut stack = GroupStack::new();
        match stack.pop(7) {
            Err(RtfError::UnbalancedGroup { offset, depth }) => {
                assert_eq!(offset, 7);
                assert_eq!(depth, 0);
            },
            other => panic!("expected unbalanced group, got {:?}", other),
        }
    }

    #[test]
    fn test_saved_destination() {
        let mut stack = GroupStack::new();
        stack.push(SinkId::Document);
        stack.push(SinkId::FontTable);
        assert_eq!(stack.saved_destination(), SinkId::FontTable);
        assert_eq!(stack.pop(0).unwrap(), SinkId::FontTable);
        assert_eq!(stack.pop(0).unwrap(), SinkId::Document);
    }

    #[test]
    fn test_take_flag() {
        let mut stack = GroupStack::new();
        stack.set_property(PropertyKey::IgnorableDestination, PropertyValue::Bool(true));
        assert!(stack.take_flag(PropertyKey::IgnorableDestination));
        assert!(!stack.take_flag(PropertyKey::IgnorableDestination));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_scoping_restores_every_value(sizes in proptest::collection::vec(1i32..200, 1..20)) {
            let mut stack = GroupStack::new();
            let mut expected = Vec::new();
            for &size in &sizes {
                expected.push(stack.property(PropertyKey::FontSize));
                stack.push(SinkId::Document);
                stack.set_property(PropertyKey::FontSize, PropertyValue::Int(size));
            }
            for before in expected.into_iter().rev() {
                stack.pop(0).unwrap();
                prop_assert_eq!(stack.property(PropertyKey::FontSize), before);
            }
            prop_assert_eq!(stack.depth(), 0);
        }
    }
}
