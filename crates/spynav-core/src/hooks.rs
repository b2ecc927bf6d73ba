//! Optional embedder callbacks.

use std::fmt;

type IndexHook = Box<dyn FnMut(usize)>;

/// Callbacks fired by the synchronization logic. Both are optional; absent
/// hooks are skipped silently.
#[derive(Default)]
pub struct SpyHooks {
    on_heading_selected: Option<IndexHook>,
    on_content_visible: Option<IndexHook>,
}

impl SpyHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fired on every heading selection, including re-selecting the heading
    /// that is already active.
    pub fn on_heading_selected(mut self, hook: impl FnMut(usize) + 'static) -> Self {
        self.on_heading_selected = Some(Box::new(hook));
        self
    }

    /// Fired once per distinct active-index transition, whether scroll-driven
    /// or programmatic.
    pub fn on_content_visible(mut self, hook: impl FnMut(usize) + 'static) -> Self {
        self.on_content_visible = Some(Box::new(hook));
        self
    }

    pub(crate) fn notify_heading_selected(&mut self, index: usize) {
        if let Some(hook) = self.on_heading_selected.as_mut() {
            hook(index);
        }
    }

    pub(crate) fn notify_content_visible(&mut self, index: usize) {
        if let Some(hook) = self.on_content_visible.as_mut() {
            hook(index);
        }
    }
}

impl fmt::Debug for SpyHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpyHooks")
            .field("on_heading_selected", &self.on_heading_selected.is_some())
            .field("on_content_visible", &self.on_content_visible.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_absent_hooks_are_noops() {
        let mut hooks = SpyHooks::new();
        hooks.notify_heading_selected(0);
        hooks.notify_content_visible(3);
    }

    #[test]
    fn test_present_hooks_receive_index() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut hooks = SpyHooks::new().on_content_visible(move |i| sink.borrow_mut().push(i));

        hooks.notify_content_visible(2);
        hooks.notify_content_visible(5);
        assert_eq!(*seen.borrow(), vec![2, 5]);
    }
}
