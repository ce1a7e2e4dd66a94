//! The element tree the engine renders into.
//!
//! The engine never touches a concrete UI toolkit. Everything it needs from
//! the surrounding document (creating elements, setting attributes, wiring
//! events, reading live values, scheduling deferred work) goes through the
//! object-safe [`Document`] trait. [`VirtualDocument`](crate::virtual_dom::VirtualDocument)
//! is the in-memory implementation used by tests and the demo.

use std::time::Duration;

/// Handle to a node of a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// A node's bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Distance from the top of the viewport.
    pub top: f64,
    /// Distance from the left of the viewport.
    pub left: f64,
    /// Width of the box.
    pub width: f64,
    /// Height of the box.
    pub height: f64,
}

/// Events an element can be subscribed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Form submission.
    Submit,
}

/// Work deferred with [`Document::set_timeout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    /// Detach a node. Detaching an already-detached node does nothing.
    Remove(NodeId),
}

/// An element tree the engine can render into and read back from.
pub trait Document {
    /// The `<body>` element.
    fn body(&self) -> NodeId;

    /// Finds an attached element by its `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// Creates a detached element.
    fn create_element(&mut self, tag: &str) -> NodeId;

    /// Creates a detached text node.
    fn create_text(&mut self, text: &str) -> NodeId;

    /// Sets an attribute. Boolean attributes take an empty value.
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    /// Replaces the node's children with a single text node.
    fn set_text(&mut self, node: NodeId, text: &str);

    /// Appends `child` to `parent`, detaching it from any previous parent.
    fn append_child(&mut self, parent: NodeId, child: NodeId);

    /// Detaches a node from its parent. Idempotent.
    fn remove(&mut self, node: NodeId);

    /// Subscribes the host's event dispatch to `event` on `node`.
    fn add_event_listener(&mut self, node: NodeId, event: EventKind);

    /// Tag name of an element; `None` for text nodes.
    fn tag_name(&self, node: NodeId) -> Option<&str>;

    /// Value of an attribute.
    fn attribute(&self, node: NodeId, name: &str) -> Option<&str>;

    /// Child nodes, in order.
    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// Live value of a form control; `None` for nodes that have no value.
    fn value(&self, node: NodeId) -> Option<String>;

    /// Live checked state of a checkbox or radio input.
    fn is_checked(&self, node: NodeId) -> bool;

    /// Current bounding box.
    fn bounding_rect(&self, node: NodeId) -> Rect;

    /// Page scroll offset as `(x, y)`.
    fn scroll_offset(&self) -> (f64, f64);

    /// Moves input focus.
    fn focus(&mut self, node: NodeId);

    /// Runs `task` once `delay` has elapsed.
    fn set_timeout(&mut self, delay: Duration, task: TimerTask);

    /// All descendants of `root` in document order, `root` excluded.
    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).into_iter().rev());
        }
        out
    }

    /// Finds a descendant of `root` by its `id` attribute.
    fn descendant_by_id(&self, root: NodeId, id: &str) -> Option<NodeId> {
        self.descendants(root)
            .into_iter()
            .find(|&n| self.attribute(n, "id") == Some(id))
    }

    /// Every element under `<body>` whose class list contains `class`.
    fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.descendants(self.body())
            .into_iter()
            .filter(|&n| {
                self.attribute(n, "class")
                    .is_some_and(|c| c.split_whitespace().any(|c| c == class))
            })
            .collect()
    }
}
