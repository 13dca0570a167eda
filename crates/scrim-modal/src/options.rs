#![forbid(unsafe_code)]

//! Per-open modal configuration.

use scrim_core::Element;

/// Default CSS-style class assigned to overlay elements.
pub const DEFAULT_OVERLAY_CLASS: &str = "overlay";

/// Configuration for a single [`open`](crate::ModalStack::open) call.
///
/// Purely descriptive; holds no lifecycle state.
///
/// # Example
/// ```
/// use scrim_modal::ModalOptions;
///
/// let options = ModalOptions::new()
///     .id("confirm-quit")
///     .undismissable(true)
///     .size(40, 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModalOptions {
    /// Optional id for the modal's content element.
    pub id: Option<String>,
    /// Parent element hosting the overlay. Defaults to the stack's root,
    /// which makes the modal whole-window.
    pub parent: Option<Element>,
    /// When true, Escape and backdrop clicks never close the modal;
    /// explicit close still works.
    pub undismissable: bool,
    /// Class of the overlay element, defaults to `"overlay"`.
    pub class: Option<String>,
    /// Content size (width, height) in cells. Defaults to half the
    /// overlay on each axis, centered.
    pub size: Option<(u16, u16)>,
}

impl ModalOptions {
    /// Options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content element id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Host the overlay under this element instead of the stack root.
    pub fn parent(mut self, parent: Element) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Prevent Escape and backdrop-click dismissal.
    pub fn undismissable(mut self, undismissable: bool) -> Self {
        self.undismissable = undismissable;
        self
    }

    /// Set the overlay class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set the content size in cells.
    pub fn size(mut self, width: u16, height: u16) -> Self {
        self.size = Some((width, height));
        self
    }

    /// The overlay class to apply, falling back to the default.
    pub(crate) fn overlay_class(&self) -> &str {
        self.class.as_deref().unwrap_or(DEFAULT_OVERLAY_CLASS)
    }
}
