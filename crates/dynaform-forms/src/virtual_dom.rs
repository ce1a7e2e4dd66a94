//! An in-memory [`Document`].
//!
//! `VirtualDocument` keeps nodes in an arena and behaves like a browser
//! document for everything the engine relies on: live control values, radio
//! exclusivity, detaching, focus, and timers. Time is virtual. Nothing fires
//! until [`VirtualDocument::advance`] moves the clock forward, which makes
//! popup expiry deterministic in tests.

use std::collections::HashMap;
use std::time::Duration;

use dynaform_core::utils::text::escape_html;

use crate::dom::{Document, EventKind, NodeId, Rect, TimerTask};

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

const BOOLEAN_ATTRIBUTES: &[&str] = &[
    "autofocus", "checked", "disabled", "hidden", "multiple", "readonly", "required", "selected",
];

#[derive(Debug, Clone)]
enum NodeData {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    live_value: Option<String>,
    live_checked: Option<bool>,
    listeners: Vec<EventKind>,
}

impl Node {
    const fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: None,
            children: Vec::new(),
            live_value: None,
            live_checked: None,
            listeners: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    due: Duration,
    seq: u64,
    task: TimerTask,
}

/// An arena-backed, in-memory element tree.
///
/// # Examples
///
/// ```
/// use dynaform_forms::dom::Document;
/// use dynaform_forms::virtual_dom::VirtualDocument;
///
/// let mut doc = VirtualDocument::new();
/// let mount = doc.mount_point("app");
/// let p = doc.create_element("p");
/// doc.set_text(p, "hello");
/// doc.append_child(mount, p);
///
/// assert_eq!(doc.to_html(mount), r#"<div id="app"><p>hello</p></div>"#);
/// ```
#[derive(Debug, Clone)]
pub struct VirtualDocument {
    nodes: Vec<Node>,
    root: NodeId,
    body: NodeId,
    focused: Option<NodeId>,
    rects: HashMap<NodeId, Rect>,
    scroll: (f64, f64),
    now: Duration,
    next_seq: u64,
    timers: Vec<Timer>,
}

impl Default for VirtualDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualDocument {
    /// Creates a document containing `<html><body></body></html>`.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            body: NodeId(0),
            focused: None,
            rects: HashMap::new(),
            scroll: (0.0, 0.0),
            now: Duration::ZERO,
            next_seq: 0,
            timers: Vec::new(),
        };
        let root = doc.create_element("html");
        let body = doc.create_element("body");
        doc.append_child(root, body);
        doc.root = root;
        doc.body = body;
        doc
    }

    /// Appends a `<div id="...">` to the body and returns it.
    pub fn mount_point(&mut self, id: &str) -> NodeId {
        let div = self.create_element("div");
        self.set_attribute(div, "id", id);
        self.append_child(self.body, div);
        div
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        self.nodes.push(Node::new(data));
        NodeId(self.nodes.len() - 1)
    }

    /// Returns `true` if the node is reachable from the document root.
    pub fn is_connected(&self, node: NodeId) -> bool {
        let mut current = node;
        loop {
            if current == self.root {
                return true;
            }
            match self.node(current).parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Parent of a node.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self, node: NodeId) -> String {
        match &self.node(node).data {
            NodeData::Text(text) => text.clone(),
            NodeData::Element { .. } => self
                .node(node)
                .children
                .iter()
                .map(|&c| self.text_content(c))
                .collect(),
        }
    }

    /// Simulates the user typing into a control (or picking a select option).
    pub fn set_value(&mut self, node: NodeId, value: &str) {
        self.node_mut(node).live_value = Some(value.to_string());
    }

    /// Simulates the user picking the option with `value` in a select.
    pub fn select_option(&mut self, select: NodeId, value: &str) {
        self.set_value(select, value);
    }

    /// Simulates the user toggling a checkbox or radio input.
    ///
    /// Checking a radio unchecks every other radio with the same name in the
    /// same form, as browsers do.
    pub fn set_checked(&mut self, node: NodeId, checked: bool) {
        if checked && self.input_type(node).as_deref() == Some("radio") {
            if let Some(name) = self.attribute(node, "name").map(str::to_string) {
                let scope = self.form_owner(node).unwrap_or(self.root);
                for other in self.descendants(scope) {
                    if other != node
                        && self.input_type(other).as_deref() == Some("radio")
                        && self.attribute(other, "name") == Some(name.as_str())
                    {
                        self.node_mut(other).live_checked = Some(false);
                    }
                }
            }
        }
        self.node_mut(node).live_checked = Some(checked);
    }

    fn input_type(&self, node: NodeId) -> Option<String> {
        if self.tag_name(node) != Some("input") {
            return None;
        }
        Some(
            self.attribute(node, "type")
                .unwrap_or("text")
                .to_ascii_lowercase(),
        )
    }

    fn form_owner(&self, node: NodeId) -> Option<NodeId> {
        let mut current = self.node(node).parent;
        while let Some(n) = current {
            if self.tag_name(n) == Some("form") {
                return Some(n);
            }
            current = self.node(n).parent;
        }
        None
    }

    /// Sets the box returned by [`Document::bounding_rect`].
    pub fn set_bounding_rect(&mut self, node: NodeId, rect: Rect) {
        self.rects.insert(node, rect);
    }

    /// Sets the page scroll offset.
    pub fn set_scroll_offset(&mut self, x: f64, y: f64) {
        self.scroll = (x, y);
    }

    /// The element that currently has focus.
    pub const fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Returns `true` if `node` is subscribed to `event`.
    pub fn has_listener(&self, node: NodeId, event: EventKind) -> bool {
        self.node(node).listeners.contains(&event)
    }

    /// The current virtual time.
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers that have not fired yet.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Moves the clock forward and runs every timer that came due, in order.
    ///
    /// Returns the number of timers run.
    pub fn advance(&mut self, by: Duration) -> usize {
        self.now += by;
        let now = self.now;
        let (mut due, pending): (Vec<Timer>, Vec<Timer>) =
            self.timers.drain(..).partition(|t| t.due <= now);
        self.timers = pending;
        due.sort_by_key(|t| (t.due, t.seq));
        for timer in &due {
            match timer.task {
                TimerTask::Remove(node) => self.remove(node),
            }
        }
        due.len()
    }

    /// Serializes a node and its subtree to HTML.
    pub fn to_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        match &self.node(node).data {
            NodeData::Text(text) => out.push_str(&escape_html(text)),
            NodeData::Element { tag, attrs } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    out.push(' ');
                    out.push_str(name);
                    if !(value.is_empty() && BOOLEAN_ATTRIBUTES.contains(&name.as_str())) {
                        out.push_str("=\"");
                        out.push_str(&escape_html(value));
                        out.push('"');
                    }
                }
                if VOID_ELEMENTS.contains(&tag.as_str()) {
                    out.push_str(" />");
                    return;
                }
                out.push('>');
                for &child in &self.node(node).children {
                    self.write_html(child, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }

    fn option_value(&self, option: NodeId) -> String {
        self.attribute(option, "value")
            .map_or_else(|| self.text_content(option), str::to_string)
    }
}

impl Document for VirtualDocument {
    fn body(&self) -> NodeId {
        self.body
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendant_by_id(self.root, id)
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeData::Element {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
        })
    }

    fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Text(text.to_string()))
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let NodeData::Element { attrs, .. } = &mut self.node_mut(node).data {
            match attrs.iter_mut().find(|(n, _)| n == name) {
                Some(entry) => entry.1 = value.to_string(),
                None => attrs.push((name.to_string(), value.to_string())),
            }
        }
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        for child in self.children(node) {
            self.remove(child);
        }
        let text = self.create_text(text);
        self.append_child(node, text);
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.remove(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    fn remove(&mut self, node: NodeId) {
        if let Some(parent) = self.node_mut(node).parent.take() {
            self.node_mut(parent).children.retain(|&c| c != node);
        }
    }

    fn add_event_listener(&mut self, node: NodeId, event: EventKind) {
        let listeners = &mut self.node_mut(node).listeners;
        if !listeners.contains(&event) {
            listeners.push(event);
        }
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        match &self.node(node).data {
            NodeData::Element { tag, .. } => Some(tag.as_str()),
            NodeData::Text(_) => None,
        }
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        match &self.node(node).data {
            NodeData::Element { attrs, .. } => attrs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            NodeData::Text(_) => None,
        }
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.node(node).children.clone()
    }

    fn value(&self, node: NodeId) -> Option<String> {
        let live = self.node(node).live_value.clone();
        match self.tag_name(node)? {
            "input" => live.or_else(|| {
                let attr = self.attribute(node, "value").map(str::to_string);
                match self.input_type(node).as_deref() {
                    Some("checkbox" | "radio") => Some(attr.unwrap_or_else(|| "on".into())),
                    _ => Some(attr.unwrap_or_default()),
                }
            }),
            "textarea" => live.or_else(|| Some(self.text_content(node))),
            "select" => live.or_else(|| {
                let options: Vec<NodeId> = self
                    .descendants(node)
                    .into_iter()
                    .filter(|&n| self.tag_name(n) == Some("option"))
                    .collect();
                let chosen = options
                    .iter()
                    .copied()
                    .find(|&o| self.attribute(o, "selected").is_some())
                    .or_else(|| options.first().copied());
                Some(chosen.map(|o| self.option_value(o)).unwrap_or_default())
            }),
            "button" | "option" => {
                live.or_else(|| Some(self.attribute(node, "value").unwrap_or("").to_string()))
            }
            _ => None,
        }
    }

    fn is_checked(&self, node: NodeId) -> bool {
        self.node(node)
            .live_checked
            .unwrap_or_else(|| self.attribute(node, "checked").is_some())
    }

    fn bounding_rect(&self, node: NodeId) -> Rect {
        self.rects.get(&node).copied().unwrap_or_default()
    }

    fn scroll_offset(&self) -> (f64, f64) {
        self.scroll
    }

    fn focus(&mut self, node: NodeId) {
        self.focused = Some(node);
    }

    fn set_timeout(&mut self, delay: Duration, task: TimerTask) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.push(Timer {
            due: self.now + delay,
            seq,
            task,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_has_body() {
        let doc = VirtualDocument::new();
        assert_eq!(doc.tag_name(doc.body()), Some("body"));
        assert!(doc.is_connected(doc.body()));
    }

    #[test]
    fn test_element_by_id_only_finds_attached() {
        let mut doc = VirtualDocument::new();
        let div = doc.create_element("div");
        doc.set_attribute(div, "id", "floating");
        assert_eq!(doc.element_by_id("floating"), None);
        doc.append_child(doc.body(), div);
        assert_eq!(doc.element_by_id("floating"), Some(div));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut doc = VirtualDocument::new();
        let mount = doc.mount_point("m");
        doc.remove(mount);
        doc.remove(mount);
        assert!(!doc.is_connected(mount));
        assert!(doc.children(doc.body()).is_empty());
    }

    #[test]
    fn test_append_moves_node() {
        let mut doc = VirtualDocument::new();
        let a = doc.mount_point("a");
        let b = doc.mount_point("b");
        let p = doc.create_element("p");
        doc.append_child(a, p);
        doc.append_child(b, p);
        assert!(doc.children(a).is_empty());
        assert_eq!(doc.children(b), vec![p]);
        assert_eq!(doc.parent(p), Some(b));
    }

    #[test]
    fn test_input_values() {
        let mut doc = VirtualDocument::new();
        let input = doc.create_element("input");
        assert_eq!(doc.value(input), Some(String::new()));
        doc.set_attribute(input, "value", "initial");
        assert_eq!(doc.value(input).as_deref(), Some("initial"));
        doc.set_value(input, "typed");
        assert_eq!(doc.value(input).as_deref(), Some("typed"));
        let div = doc.create_element("div");
        assert_eq!(doc.value(div), None);
    }

    #[test]
    fn test_checkbox_value_defaults_to_on() {
        let mut doc = VirtualDocument::new();
        let cb = doc.create_element("input");
        doc.set_attribute(cb, "type", "checkbox");
        assert_eq!(doc.value(cb).as_deref(), Some("on"));
    }

    #[test]
    fn test_textarea_value_from_text() {
        let mut doc = VirtualDocument::new();
        let ta = doc.create_element("textarea");
        doc.set_text(ta, "hello");
        assert_eq!(doc.value(ta).as_deref(), Some("hello"));
    }

    #[test]
    fn test_select_value() {
        let mut doc = VirtualDocument::new();
        let select = doc.create_element("select");
        for (v, t) in [("", "Pick"), ("a", "A"), ("b", "B")] {
            let o = doc.create_element("option");
            doc.set_attribute(o, "value", v);
            doc.set_text(o, t);
            doc.append_child(select, o);
        }
        assert_eq!(doc.value(select).as_deref(), Some(""));
        let b = doc.children(select)[2];
        doc.set_attribute(b, "selected", "");
        assert_eq!(doc.value(select).as_deref(), Some("b"));
        doc.select_option(select, "a");
        assert_eq!(doc.value(select).as_deref(), Some("a"));
    }

    #[test]
    fn test_radio_exclusivity() {
        let mut doc = VirtualDocument::new();
        let form = doc.create_element("form");
        doc.append_child(doc.body(), form);
        let radios: Vec<NodeId> = (0..3)
            .map(|i| {
                let r = doc.create_element("input");
                doc.set_attribute(r, "type", "radio");
                doc.set_attribute(r, "name", "size");
                doc.set_attribute(r, "value", &i.to_string());
                doc.append_child(form, r);
                r
            })
            .collect();
        doc.set_checked(radios[0], true);
        doc.set_checked(radios[2], true);
        assert!(!doc.is_checked(radios[0]));
        assert!(!doc.is_checked(radios[1]));
        assert!(doc.is_checked(radios[2]));
    }

    #[test]
    fn test_timers_fire_in_order_and_tolerate_detached_nodes() {
        let mut doc = VirtualDocument::new();
        let a = doc.mount_point("a");
        let b = doc.mount_point("b");
        doc.set_timeout(Duration::from_secs(3), TimerTask::Remove(a));
        doc.set_timeout(Duration::from_secs(1), TimerTask::Remove(b));
        doc.remove(a);
        assert_eq!(doc.advance(Duration::from_secs(2)), 1);
        assert!(!doc.is_connected(b));
        assert_eq!(doc.pending_timers(), 1);
        assert_eq!(doc.advance(Duration::from_secs(1)), 1);
        assert_eq!(doc.pending_timers(), 0);
        assert_eq!(doc.now(), Duration::from_secs(3));
    }

    #[test]
    fn test_elements_by_class() {
        let mut doc = VirtualDocument::new();
        let a = doc.mount_point("a");
        doc.set_attribute(a, "class", "x popup");
        let b = doc.mount_point("b");
        doc.set_attribute(b, "class", "popup-like");
        assert_eq!(doc.elements_by_class("popup"), vec![a]);
    }

    #[test]
    fn test_elements_by_class_ignores_nodes_outside_body() {
        let mut doc = VirtualDocument::new();
        let html = doc.parent(doc.body()).unwrap();
        let stray = doc.create_element("div");
        doc.set_attribute(stray, "class", "popup");
        doc.append_child(html, stray);
        let inside = doc.mount_point("inside");
        doc.set_attribute(inside, "class", "popup");
        assert_eq!(doc.elements_by_class("popup"), vec![inside]);
    }

    #[test]
    fn test_listeners_and_focus() {
        let mut doc = VirtualDocument::new();
        let form = doc.create_element("form");
        doc.add_event_listener(form, EventKind::Submit);
        doc.add_event_listener(form, EventKind::Submit);
        assert!(doc.has_listener(form, EventKind::Submit));
        doc.focus(form);
        assert_eq!(doc.focused(), Some(form));
    }

    #[test]
    fn test_to_html_escapes_and_handles_void_elements() {
        let mut doc = VirtualDocument::new();
        let mount = doc.mount_point("m");
        let input = doc.create_element("input");
        doc.set_attribute(input, "value", "a\"b");
        doc.set_attribute(input, "required", "");
        doc.append_child(mount, input);
        let p = doc.create_element("p");
        doc.set_text(p, "1 < 2");
        doc.append_child(mount, p);
        assert_eq!(
            doc.to_html(mount),
            r#"<div id="m"><input value="a&quot;b" required /><p>1 &lt; 2</p></div>"#
        );
    }

    #[test]
    fn test_layout_injection() {
        let mut doc = VirtualDocument::new();
        let a = doc.mount_point("a");
        let rect = Rect {
            top: 10.0,
            left: 20.0,
            width: 100.0,
            height: 30.0,
        };
        doc.set_bounding_rect(a, rect);
        doc.set_scroll_offset(0.0, 50.0);
        assert_eq!(doc.bounding_rect(a), rect);
        assert_eq!(doc.scroll_offset(), (0.0, 50.0));
    }
}
