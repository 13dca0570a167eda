#![forbid(unsafe_code)]

//! Modal stack: overlay creation, top-most-only dismissal, cleanup.
//!
//! A [`ModalStack`] is an explicit, owned object: whichever module manages
//! a modal family constructs one around a root element and feeds input
//! events into it. Each stack is independent, so ordering guarantees
//! apply within one stack only.
//!
//! # Example
//! ```
//! use scrim_core::{Component, Element, KeyCode, KeyEvent, Rect};
//! use scrim_modal::{Modal, ModalOptions, ModalStack};
//!
//! struct ConfirmBox;
//!
//! impl Component for ConfirmBox {
//!     type Props = ();
//!     type State = ();
//!     fn name(&self) -> &'static str {
//!         "confirm-box"
//!     }
//! }
//!
//! impl Modal for ConfirmBox {
//!     type Output = bool;
//! }
//!
//! let screen = Element::new("screen").unwrap();
//! screen.set_area(Rect::from_size(80, 24));
//!
//! let mut stack = ModalStack::<ConfirmBox>::new(screen);
//! let (_, ticket) = stack.open(ConfirmBox, (), ModalOptions::new()).unwrap();
//!
//! stack.dispatch_key(&KeyEvent::press(KeyCode::Escape));
//! assert!(stack.is_empty());
//! assert_eq!(ticket.wait(), None);
//! ```

use crate::options::ModalOptions;
use scrim_core::{
    Component, ComponentHost, Element, Error, EventOutcome, KeyCode, KeyEvent, KeyEventKind,
    MouseButton, MouseEvent, MouseEventKind, Rect,
};
use std::fmt;
use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};

/// A component that can be opened as a modal.
///
/// Adds the completion output resolved when the modal closes.
pub trait Modal: Component {
    /// Value the modal's ticket resolves with on close. A modal closed by
    /// dismissal (Escape, backdrop click) or without an explicit result
    /// resolves with `None`.
    type Output;
}

/// Opaque identifier for an open modal within one stack.
///
/// Handles are never reused by a stack; a handle to a closed modal is
/// stale and harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModalHandle(u64);

impl ModalHandle {
    /// Raw handle value, for logging.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

/// Completion primitive returned by [`ModalStack::open`].
///
/// Resolves exactly once, when the modal closes. A stack dropped with the
/// modal still open resolves the ticket as `None`.
pub struct ModalTicket<R> {
    receiver: Receiver<Option<R>>,
}

impl<R> ModalTicket<R> {
    /// Non-blocking poll. `None` while the modal is still open; the first
    /// `Some` is the resolution.
    pub fn try_result(&self) -> Option<Option<R>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(None),
        }
    }

    /// Block until the modal closes and return its result.
    pub fn wait(self) -> Option<R> {
        self.receiver.recv().unwrap_or(None)
    }
}

impl<R> fmt::Debug for ModalTicket<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalTicket").finish_non_exhaustive()
    }
}

/// Runtime record of one open modal.
struct ModalEntry<M: Modal> {
    handle: ModalHandle,
    host: ComponentHost<M>,
    overlay: Element,
    content_rect: Rect,
    resolver: Option<Sender<Option<M::Output>>>,
    undismissable: bool,
    /// Overlay is hosted directly under the stack root, so Escape is
    /// swallowed at root level while this entry is open.
    whole_window: bool,
    closed: bool,
}

impl<M: Modal> ModalEntry<M> {
    /// Tear the entry down: overlay removal, component unmount, ticket
    /// resolution. Guarded by the closed flag so a second call is a no-op.
    fn finish(mut self, result: Option<M::Output>) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.overlay.detach();
        self.host.unmount();
        if let Some(resolver) = self.resolver.take() {
            // The ticket may have been dropped; resolution is best-effort.
            let _ = resolver.send(result);
        }
    }
}

/// Insertion-ordered stack of open modals of one modal family.
///
/// "Top" is the last opened, not-yet-closed entry; only the top may be
/// dismissed by input events.
pub struct ModalStack<M: Modal> {
    root: Element,
    entries: Vec<ModalEntry<M>>,
    next_handle: u64,
}

impl<M: Modal> ModalStack<M> {
    /// Create an empty stack whose whole-window modals cover `root`.
    pub fn new(root: Element) -> Self {
        Self {
            root,
            entries: Vec::new(),
            next_handle: 0,
        }
    }

    /// Open a modal: build its overlay and content elements, mount the
    /// component, push the entry, and hand back a completion ticket.
    ///
    /// Fails synchronously on configuration errors: a component with an
    /// empty [`name`](Component::name), an id that is not tag-shaped, or
    /// a parent element with no layout area.
    pub fn open(
        &mut self,
        component: M,
        props: M::Props,
        options: ModalOptions,
    ) -> Result<(ModalHandle, ModalTicket<M::Output>), Error> {
        let tag = component.name();
        if tag.is_empty() {
            return Err(Error::UnnamedComponent);
        }

        let parent = options.parent.clone().unwrap_or_else(|| self.root.clone());
        let parent_area = parent.area().ok_or(Error::ParentUnattached)?;
        let whole_window = parent.same_node(&self.root);

        let overlay = Element::new("overlay")?;
        overlay.set_class(options.overlay_class());
        overlay.set_area(parent_area);
        parent.append_child(&overlay);

        let content = Element::new(tag)?;
        if let Some(id) = &options.id {
            content.set_id(id.clone());
        }
        let (width, height) = options.size.unwrap_or((
            (parent_area.width / 2).max(1),
            (parent_area.height / 2).max(1),
        ));
        let content_rect = parent_area.centered(width, height);
        content.set_area(content_rect);
        overlay.append_child(&content);

        let host = ComponentHost::mount(component, content, props);

        let handle = ModalHandle(self.next_handle);
        self.next_handle += 1;
        let (resolver, receiver) = channel();

        self.entries.push(ModalEntry {
            handle,
            host,
            overlay,
            content_rect,
            resolver: Some(resolver),
            undismissable: options.undismissable,
            whole_window,
            closed: false,
        });

        tracing::debug!(
            handle = handle.value(),
            tag,
            whole_window,
            undismissable = options.undismissable,
            depth = self.entries.len(),
            "modal opened"
        );

        Ok((handle, ModalTicket { receiver }))
    }

    /// Close a modal by handle, resolving its ticket with `result`.
    ///
    /// Idempotent: an unknown or stale handle is a no-op. Returns whether
    /// a modal was actually closed. The entry is removed wherever it sits
    /// in the stack; other entries are untouched.
    pub fn close(&mut self, handle: ModalHandle, result: Option<M::Output>) -> bool {
        let Some(index) = self.entries.iter().position(|e| e.handle == handle) else {
            return false;
        };
        let entry = self.entries.remove(index);
        tracing::debug!(
            handle = handle.value(),
            explicit = result.is_some(),
            depth = self.entries.len(),
            "modal closed"
        );
        entry.finish(result);
        true
    }

    /// Close the top-most modal, if any. No-op on an empty stack.
    pub fn close_top(&mut self, result: Option<M::Output>) -> bool {
        match self.top() {
            Some(handle) => self.close(handle, result),
            None => false,
        }
    }

    /// Route a key event through the stack.
    ///
    /// Escape closes the top-most modal unless it is undismissable. The
    /// outcome implements the stop-propagation contract: while any open
    /// modal is whole-window, every key is consumed (the root-level
    /// capture); otherwise only Escape is consumed. Dismissal never
    /// reaches non-top entries.
    pub fn dispatch_key(&mut self, event: &KeyEvent) -> EventOutcome {
        if self.entries.is_empty() {
            return EventOutcome::Ignored;
        }

        let escape =
            event.code == KeyCode::Escape && !matches!(event.kind, KeyEventKind::Release);
        let swallow_all = self.entries.iter().any(|e| e.whole_window);

        if escape && let Some(top) = self.entries.last() {
            let handle = top.handle;
            if top.undismissable {
                tracing::trace!(
                    handle = handle.value(),
                    "escape ignored by undismissable top modal"
                );
            } else {
                self.close(handle, None);
            }
        }

        if swallow_all || escape {
            EventOutcome::Consumed
        } else {
            EventOutcome::Ignored
        }
    }

    /// Route a mouse event through the stack.
    ///
    /// A left-button press on the top-most modal's backdrop (inside its
    /// overlay, outside its content) closes it when dismissable, and is
    /// swallowed either way. Presses on the content or outside the top
    /// overlay are ignored here; lower entries are inert.
    pub fn dispatch_mouse(&mut self, event: &MouseEvent) -> EventOutcome {
        if !matches!(event.kind, MouseEventKind::Down(MouseButton::Left)) {
            return EventOutcome::Ignored;
        }
        let Some(top) = self.entries.last() else {
            return EventOutcome::Ignored;
        };
        let handle = top.handle;
        let undismissable = top.undismissable;

        let on_backdrop = top.overlay.contains_point(event.x, event.y)
            && !top.content_rect.contains(event.x, event.y);
        if !on_backdrop {
            return EventOutcome::Ignored;
        }

        if undismissable {
            tracing::trace!(
                handle = handle.value(),
                "backdrop click ignored by undismissable top modal"
            );
        } else {
            self.close(handle, None);
        }
        EventOutcome::Consumed
    }

    /// Number of open modals.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the stack has no open modals.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Handle of the top-most modal, if any.
    pub fn top(&self) -> Option<ModalHandle> {
        self.entries.last().map(|e| e.handle)
    }

    /// Whether a handle refers to a still-open modal.
    pub fn is_open(&self, handle: ModalHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// The root element whole-window modals attach to.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Borrow the component host of an open modal.
    pub fn host(&self, handle: ModalHandle) -> Option<&ComponentHost<M>> {
        self.entries
            .iter()
            .find(|e| e.handle == handle)
            .map(|e| &e.host)
    }

    /// Mutably borrow the component host of an open modal, e.g. to drive
    /// its update lifecycle while it is on the stack.
    pub fn host_mut(&mut self, handle: ModalHandle) -> Option<&mut ComponentHost<M>> {
        self.entries
            .iter_mut()
            .find(|e| e.handle == handle)
            .map(|e| &mut e.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrim_core::Modifiers;

    // ---------- Test modals ----------

    struct ConfirmBox;

    struct ConfirmProps {
        message: &'static str,
    }

    impl Component for ConfirmBox {
        type Props = ConfirmProps;
        type State = Option<&'static str>;

        fn name(&self) -> &'static str {
            "confirm-box"
        }

        fn on_mounted(&mut self, props: &Self::Props, state: &mut Self::State) {
            *state = Some(props.message);
        }
    }

    impl Modal for ConfirmBox {
        type Output = bool;
    }

    struct Anonymous;

    impl Component for Anonymous {
        type Props = ();
        type State = ();
    }

    impl Modal for Anonymous {
        type Output = ();
    }

    // ---------- Helpers ----------

    fn screen() -> Element {
        let root = Element::new("screen").unwrap();
        root.set_area(Rect::from_size(80, 24));
        root
    }

    fn props() -> ConfirmProps {
        ConfirmProps { message: "sure?" }
    }

    fn escape() -> KeyEvent {
        KeyEvent::press(KeyCode::Escape)
    }

    // ---------- Opening ----------

    #[test]
    fn open_builds_overlay_and_content() {
        let root = screen();
        let mut stack = ModalStack::<ConfirmBox>::new(root.clone());

        let (handle, _ticket) = stack
            .open(ConfirmBox, props(), ModalOptions::new().id("ask"))
            .unwrap();

        assert_eq!(stack.len(), 1);
        assert!(stack.is_open(handle));

        let overlay = root.query(".overlay").unwrap();
        assert_eq!(overlay.tag(), "overlay");
        assert_eq!(overlay.area(), Some(Rect::from_size(80, 24)));

        let content = root.query("confirm-box").unwrap();
        assert!(content.is_attached_to(&overlay));
        assert_eq!(content.id().as_deref(), Some("ask"));
        // Default content size: half the overlay, centered.
        assert_eq!(content.area(), Some(Rect::new(20, 6, 40, 12)));
    }

    #[test]
    fn open_unnamed_component_is_a_config_error() {
        let mut stack = ModalStack::<Anonymous>::new(screen());
        let err = stack.open(Anonymous, (), ModalOptions::new()).unwrap_err();
        assert_eq!(err, Error::UnnamedComponent);
        assert!(stack.is_empty());
    }

    #[test]
    fn open_with_parent_lacking_area_is_a_config_error() {
        let mut stack = ModalStack::<ConfirmBox>::new(screen());
        let parent = Element::new("panel").unwrap(); // no area assigned

        let err = stack
            .open(ConfirmBox, props(), ModalOptions::new().parent(parent))
            .unwrap_err();
        assert_eq!(err, Error::ParentUnattached);
    }

    #[test]
    fn open_tolerates_area_near_the_coordinate_limit() {
        let root = Element::new("screen").unwrap();
        root.set_area(Rect::new(65000, 0, 10000, 24));
        let mut stack = ModalStack::<ConfirmBox>::new(root.clone());

        let (handle, _ticket) = stack.open(ConfirmBox, props(), ModalOptions::new()).unwrap();

        assert!(stack.is_open(handle));
        let content = root.query("confirm-box").unwrap();
        let area = content.area().unwrap();
        assert!(area.right() <= Rect::new(65000, 0, 10000, 24).right());
    }

    #[test]
    fn top_is_most_recently_opened() {
        let mut stack = ModalStack::<ConfirmBox>::new(screen());
        let (a, _ta) = stack.open(ConfirmBox, props(), ModalOptions::new()).unwrap();
        let (b, _tb) = stack.open(ConfirmBox, props(), ModalOptions::new()).unwrap();

        assert_ne!(a, b);
        assert_eq!(stack.top(), Some(b));
        assert_eq!(stack.len(), 2);
    }

    // ---------- Closing ----------

    #[test]
    fn close_resolves_ticket_with_result() {
        let root = screen();
        let mut stack = ModalStack::<ConfirmBox>::new(root.clone());
        let (handle, ticket) = stack.open(ConfirmBox, props(), ModalOptions::new()).unwrap();

        assert!(ticket.try_result().is_none());
        assert!(stack.close(handle, Some(true)));

        assert!(stack.is_empty());
        assert_eq!(root.child_count(), 0);
        assert_eq!(ticket.wait(), Some(true));
    }

    #[test]
    fn double_close_is_a_noop() {
        let mut stack = ModalStack::<ConfirmBox>::new(screen());
        let (handle, ticket) = stack.open(ConfirmBox, props(), ModalOptions::new()).unwrap();

        assert!(stack.close(handle, Some(true)));
        assert!(!stack.close(handle, Some(false)));

        // Resolved exactly once, with the first result.
        assert_eq!(ticket.try_result(), Some(Some(true)));
    }

    #[test]
    fn close_non_top_leaves_others_untouched() {
        let root = screen();
        let mut stack = ModalStack::<ConfirmBox>::new(root.clone());
        let (a, _ta) = stack.open(ConfirmBox, props(), ModalOptions::new()).unwrap();
        let (b, _tb) = stack.open(ConfirmBox, props(), ModalOptions::new()).unwrap();
        let (c, _tc) = stack.open(ConfirmBox, props(), ModalOptions::new()).unwrap();

        assert!(stack.close(b, None));

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top(), Some(c));
        assert!(stack.is_open(a));
        assert!(!stack.is_open(b));
        // Two overlays still attached.
        assert_eq!(root.query_all(".overlay").len(), 2);
    }

    #[test]
    fn close_top_on_empty_stack_is_a_noop() {
        let mut stack = ModalStack::<ConfirmBox>::new(screen());
        assert!(!stack.close_top(None));
    }

    #[test]
    fn explicit_close_works_on_undismissable() {
        let mut stack = ModalStack::<ConfirmBox>::new(screen());
        let (handle, ticket) = stack
            .open(ConfirmBox, props(), ModalOptions::new().undismissable(true))
            .unwrap();

        assert!(stack.close(handle, Some(false)));
        assert_eq!(ticket.wait(), Some(false));
    }

    // ---------- Escape dismissal ----------

    #[test]
    fn escape_closes_dismissable_top() {
        let root = screen();
        let mut stack = ModalStack::<ConfirmBox>::new(root.clone());
        let (_, ticket) = stack.open(ConfirmBox, props(), ModalOptions::new()).unwrap();

        let outcome = stack.dispatch_key(&escape());

        assert_eq!(outcome, EventOutcome::Consumed);
        assert!(stack.is_empty());
        assert_eq!(root.child_count(), 0);
        // Dismissal resolves with no result.
        assert_eq!(ticket.wait(), None);
    }

    #[test]
    fn escape_never_closes_undismissable_top() {
        let mut stack = ModalStack::<ConfirmBox>::new(screen());
        let (handle, ticket) = stack
            .open(ConfirmBox, props(), ModalOptions::new().undismissable(true))
            .unwrap();

        let outcome = stack.dispatch_key(&escape());

        // Swallowed at root level, but the modal stays open.
        assert_eq!(outcome, EventOutcome::Consumed);
        assert!(stack.is_open(handle));
        assert!(ticket.try_result().is_none());
    }

    #[test]
    fn escape_only_reaches_the_top() {
        let mut stack = ModalStack::<ConfirmBox>::new(screen());
        let (a, _ta) = stack.open(ConfirmBox, props(), ModalOptions::new()).unwrap();
        let (b, _tb) = stack
            .open(ConfirmBox, props(), ModalOptions::new().undismissable(true))
            .unwrap();

        stack.dispatch_key(&escape());

        // Undismissable B shields dismissable A below it.
        assert!(stack.is_open(a));
        assert!(stack.is_open(b));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn escape_release_does_not_dismiss() {
        let mut stack = ModalStack::<ConfirmBox>::new(screen());
        stack.open(ConfirmBox, props(), ModalOptions::new()).unwrap();

        let release = KeyEvent {
            code: KeyCode::Escape,
            modifiers: Modifiers::empty(),
            kind: KeyEventKind::Release,
        };
        stack.dispatch_key(&release);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn keys_swallowed_while_whole_window_modal_open() {
        let mut stack = ModalStack::<ConfirmBox>::new(screen());
        stack.open(ConfirmBox, props(), ModalOptions::new()).unwrap();

        let outcome = stack.dispatch_key(&KeyEvent::press(KeyCode::Char('x')));
        assert_eq!(outcome, EventOutcome::Consumed);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn non_escape_keys_pass_embedded_modals() {
        let root = screen();
        let panel = Element::new("panel").unwrap();
        panel.set_area(Rect::new(10, 5, 30, 10));
        root.append_child(&panel);

        let mut stack = ModalStack::<ConfirmBox>::new(root);
        stack
            .open(ConfirmBox, props(), ModalOptions::new().parent(panel))
            .unwrap();

        let outcome = stack.dispatch_key(&KeyEvent::press(KeyCode::Char('x')));
        assert_eq!(outcome, EventOutcome::Ignored);

        let outcome = stack.dispatch_key(&escape());
        assert_eq!(outcome, EventOutcome::Consumed);
        assert!(stack.is_empty());
    }

    #[test]
    fn escape_on_empty_stack_is_ignored() {
        let mut stack = ModalStack::<ConfirmBox>::new(screen());
        assert_eq!(stack.dispatch_key(&escape()), EventOutcome::Ignored);
    }

    // ---------- Backdrop clicks ----------

    #[test]
    fn backdrop_click_closes_dismissable_top() {
        let root = screen();
        let mut stack = ModalStack::<ConfirmBox>::new(root.clone());
        let (a, _ta) = stack.open(ConfirmBox, props(), ModalOptions::new()).unwrap();
        let (b, tb) = stack.open(ConfirmBox, props(), ModalOptions::new()).unwrap();

        // (0, 0) is on the overlay but outside the centered content rect.
        let outcome = stack.dispatch_mouse(&MouseEvent::click(0, 0));

        assert_eq!(outcome, EventOutcome::Consumed);
        assert!(!stack.is_open(b));
        assert!(stack.is_open(a));
        assert_eq!(stack.top(), Some(a));
        assert_eq!(tb.wait(), None);
    }

    #[test]
    fn content_click_is_not_a_dismissal() {
        let mut stack = ModalStack::<ConfirmBox>::new(screen());
        stack.open(ConfirmBox, props(), ModalOptions::new()).unwrap();

        // Dead center of the screen is inside the content rect.
        let outcome = stack.dispatch_mouse(&MouseEvent::click(40, 12));

        assert_eq!(outcome, EventOutcome::Ignored);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn backdrop_click_swallowed_by_undismissable_top() {
        let mut stack = ModalStack::<ConfirmBox>::new(screen());
        let (handle, _) = stack
            .open(ConfirmBox, props(), ModalOptions::new().undismissable(true))
            .unwrap();

        let outcome = stack.dispatch_mouse(&MouseEvent::click(0, 0));

        assert_eq!(outcome, EventOutcome::Consumed);
        assert!(stack.is_open(handle));
    }

    #[test]
    fn click_outside_top_overlay_is_inert() {
        let root = screen();
        let panel = Element::new("panel").unwrap();
        panel.set_area(Rect::new(40, 0, 40, 24));
        root.append_child(&panel);

        let mut stack = ModalStack::<ConfirmBox>::new(root);
        let (a, _ta) = stack.open(ConfirmBox, props(), ModalOptions::new()).unwrap();
        let (b, _tb) = stack
            .open(ConfirmBox, props(), ModalOptions::new().parent(panel))
            .unwrap();

        // Click far from B's embedded overlay; it may sit on A's backdrop,
        // but A is not the top, so nothing happens.
        let outcome = stack.dispatch_mouse(&MouseEvent::click(2, 2));

        assert_eq!(outcome, EventOutcome::Ignored);
        assert!(stack.is_open(a));
        assert!(stack.is_open(b));
    }

    #[test]
    fn non_left_press_is_ignored() {
        let mut stack = ModalStack::<ConfirmBox>::new(screen());
        stack.open(ConfirmBox, props(), ModalOptions::new()).unwrap();

        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            x: 0,
            y: 0,
        };
        assert_eq!(stack.dispatch_mouse(&moved), EventOutcome::Ignored);

        let right = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            x: 0,
            y: 0,
        };
        assert_eq!(stack.dispatch_mouse(&right), EventOutcome::Ignored);
        assert_eq!(stack.len(), 1);
    }

    // ---------- Tickets ----------

    #[test]
    fn dropping_stack_resolves_tickets_as_none() {
        let mut stack = ModalStack::<ConfirmBox>::new(screen());
        let (_, ticket) = stack.open(ConfirmBox, props(), ModalOptions::new()).unwrap();

        drop(stack);
        assert_eq!(ticket.wait(), None);
    }

    #[test]
    fn props_reach_the_component_at_mount() {
        let mut stack = ModalStack::<ConfirmBox>::new(screen());
        let (handle, _) = stack.open(ConfirmBox, props(), ModalOptions::new()).unwrap();

        let host = stack.host(handle).unwrap();
        assert_eq!(host.state(), &Some("sure?"));
        assert_eq!(host.props().message, "sure?");
        assert!(stack.host(ModalHandle(999)).is_none());
    }

    #[test]
    fn host_mut_drives_updates_on_open_modal() {
        let mut stack = ModalStack::<ConfirmBox>::new(screen());
        let (handle, _) = stack.open(ConfirmBox, props(), ModalOptions::new()).unwrap();

        stack
            .host_mut(handle)
            .unwrap()
            .set_state(|state| *state = Some("changed"));
        assert_eq!(stack.host(handle).unwrap().state(), &Some("changed"));
    }
}
