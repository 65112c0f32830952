//! Leptos Shortcut Utilities
//!
//! Single-key keyboard shortcuts for Leptos using a window keydown listener.
//! Keys typed into text fields or pressed with a modifier are ignored.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Element tags whose keystrokes belong to the user, not to shortcuts
const TEXT_ENTRY_TAGS: &[&str] = &["INPUT", "TEXTAREA"];

/// Modifier state of a key press
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// Map of single characters to actions
#[derive(Clone, Debug)]
pub struct ShortcutMap<A> {
    bindings: Vec<(char, A)>,
}

impl<A: Copy> Default for ShortcutMap<A> {
    fn default() -> Self {
        Self { bindings: Vec::new() }
    }
}

impl<A: Copy> ShortcutMap<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a key (case-insensitive). Rebinding a key replaces the action.
    pub fn bind(mut self, key: char, action: A) -> Self {
        let key = key.to_ascii_lowercase();
        self.bindings.retain(|(k, _)| *k != key);
        self.bindings.push((key, action));
        self
    }

    /// Resolve a `KeyboardEvent.key` value to an action
    ///
    /// `target_tag` is the upper-case tag name of the event target, if any.
    pub fn resolve(&self, key: &str, target_tag: Option<&str>, modifiers: Modifiers) -> Option<A> {
        if modifiers.any() {
            return None;
        }
        if let Some(tag) = target_tag {
            if TEXT_ENTRY_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
                return None;
            }
        }
        let mut chars = key.chars();
        let c = chars.next()?.to_ascii_lowercase();
        if chars.next().is_some() {
            // Named keys like "Enter" or "ArrowUp"
            return None;
        }
        self.bindings.iter().find(|(k, _)| *k == c).map(|(_, a)| *a)
    }
}

fn target_tag(ev: &web_sys::KeyboardEvent) -> Option<String> {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .map(|el| el.tag_name().to_ascii_uppercase())
}

/// Bind the map to window keydown events
///
/// `is_active` is checked on every key press; `on_action` runs for resolved
/// keys and the event's default action is prevented. Remove the returned
/// handle to unbind.
pub fn bind_shortcuts<A, P, F>(map: ShortcutMap<A>, is_active: P, on_action: F) -> WindowListenerHandle
where
    A: Copy + 'static,
    P: Fn() -> bool + 'static,
    F: Fn(A) + 'static,
{
    window_event_listener(leptos::ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if !is_active() {
            return;
        }
        let modifiers = Modifiers {
            ctrl: ev.ctrl_key(),
            alt: ev.alt_key(),
            meta: ev.meta_key(),
        };
        let tag = target_tag(&ev);
        if let Some(action) = map.resolve(&ev.key(), tag.as_deref(), modifiers) {
            ev.prevent_default();
            on_action(action);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Act {
        Approve,
        Reject,
    }

    fn map() -> ShortcutMap<Act> {
        ShortcutMap::new().bind('a', Act::Approve).bind('R', Act::Reject)
    }

    #[test]
    fn test_resolves_case_insensitively() {
        let m = map();
        assert_eq!(m.resolve("a", None, Modifiers::default()), Some(Act::Approve));
        assert_eq!(m.resolve("A", Some("BODY"), Modifiers::default()), Some(Act::Approve));
        assert_eq!(m.resolve("r", Some("DIV"), Modifiers::default()), Some(Act::Reject));
        assert_eq!(m.resolve("x", None, Modifiers::default()), None);
    }

    #[test]
    fn test_ignores_text_entry_targets() {
        let m = map();
        assert_eq!(m.resolve("a", Some("INPUT"), Modifiers::default()), None);
        assert_eq!(m.resolve("a", Some("textarea"), Modifiers::default()), None);
    }

    #[test]
    fn test_ignores_modifiers_and_named_keys() {
        let m = map();
        let ctrl = Modifiers { ctrl: true, ..Default::default() };
        assert_eq!(m.resolve("r", None, ctrl), None);
        assert_eq!(m.resolve("ArrowRight", None, Modifiers::default()), None);
        assert_eq!(m.resolve("", None, Modifiers::default()), None);
    }

    #[test]
    fn test_rebind_replaces_action() {
        let m = map().bind('a', Act::Reject);
        assert_eq!(m.resolve("a", None, Modifiers::default()), Some(Act::Reject));
    }
}
