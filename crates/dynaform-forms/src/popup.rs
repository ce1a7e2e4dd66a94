//! The validation error popup.
//!
//! At most one popup with a given class exists at a time. Showing a new one
//! detaches the old one right away; the old one's expiry timer still fires
//! later and finds nothing to do.

use std::time::Duration;

use crate::dom::{Document, NodeId, TimerTask};

/// How long a popup stays attached.
pub const POPUP_LIFETIME: Duration = Duration::from_secs(3);

/// Vertical gap between the popup and its anchor, in pixels.
const ANCHOR_GAP: f64 = 10.0;

const POPUP_STYLE: &str = "position: absolute; background-color: #f44336; color: white; \
     padding: 8px 12px; border-radius: 4px; font-size: 14px; z-index: 1000; \
     box-shadow: 0 2px 6px rgba(0, 0, 0, 0.3);";

/// Shows `message` above `anchor` and focuses the anchor.
///
/// Returns the popup element, which detaches itself after [`POPUP_LIFETIME`].
pub fn show_popup(doc: &mut dyn Document, class: &str, message: &str, anchor: NodeId) -> NodeId {
    for stale in doc.elements_by_class(class) {
        doc.remove(stale);
    }

    let rect = doc.bounding_rect(anchor);
    let (scroll_x, scroll_y) = doc.scroll_offset();
    let top = rect.top + scroll_y - rect.height - ANCHOR_GAP;
    let left = rect.left + scroll_x;

    let popup = doc.create_element("div");
    doc.set_attribute(popup, "class", class);
    doc.set_attribute(
        popup,
        "style",
        &format!("{POPUP_STYLE} top: {top}px; left: {left}px;"),
    );
    doc.set_text(popup, message);
    let body = doc.body();
    doc.append_child(body, popup);

    doc.focus(anchor);
    doc.set_timeout(POPUP_LIFETIME, TimerTask::Remove(popup));
    popup
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Rect;
    use crate::virtual_dom::VirtualDocument;

    fn anchored() -> (VirtualDocument, NodeId) {
        let mut doc = VirtualDocument::new();
        let mount = doc.mount_point("m");
        let input = doc.create_element("input");
        doc.append_child(mount, input);
        doc.set_bounding_rect(
            input,
            Rect {
                top: 100.0,
                left: 40.0,
                width: 200.0,
                height: 30.0,
            },
        );
        doc.set_scroll_offset(5.0, 50.0);
        (doc, input)
    }

    #[test]
    fn test_popup_position_and_focus() {
        let (mut doc, input) = anchored();
        let popup = show_popup(&mut doc, "err", "Bad value", input);
        let style = doc.attribute(popup, "style").unwrap();
        assert!(style.contains("top: 110px;"), "{style}");
        assert!(style.contains("left: 45px;"), "{style}");
        assert!(style.contains("position: absolute;"));
        assert_eq!(doc.text_content(popup), "Bad value");
        assert_eq!(doc.focused(), Some(input));
        assert_eq!(doc.parent(popup), Some(doc.body()));
    }

    #[test]
    fn test_popup_expires() {
        let (mut doc, input) = anchored();
        let popup = show_popup(&mut doc, "err", "Bad value", input);
        doc.advance(Duration::from_millis(2999));
        assert!(doc.is_connected(popup));
        doc.advance(Duration::from_millis(1));
        assert!(!doc.is_connected(popup));
    }

    #[test]
    fn test_new_popup_replaces_old() {
        let (mut doc, input) = anchored();
        let first = show_popup(&mut doc, "err", "one", input);
        doc.advance(Duration::from_secs(1));
        let second = show_popup(&mut doc, "err", "two", input);
        assert!(!doc.is_connected(first));
        assert_eq!(doc.elements_by_class("err"), vec![second]);

        // First timer fires on an already detached node.
        assert_eq!(doc.advance(Duration::from_secs(2)), 1);
        assert!(doc.is_connected(second));
        assert_eq!(doc.advance(Duration::from_secs(1)), 1);
        assert!(doc.elements_by_class("err").is_empty());
    }
}
