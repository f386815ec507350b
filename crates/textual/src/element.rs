//! Rendered-node references and root element strategies.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

/// What an element is, as far as focus modality cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementKind {
    #[default]
    Other,
    /// A single-line text-entry field.
    TextInput { read_only: bool },
    TextArea { read_only: bool },
    ContentEditable,
}

impl ElementKind {
    /// Editable text fields show a focus ring however they were focused.
    pub fn triggers_keyboard_modality(self) -> bool {
        match self {
            Self::TextInput { read_only } | Self::TextArea { read_only } => !read_only,
            Self::ContentEditable => true,
            Self::Other => false,
        }
    }
}

struct NodeInner {
    id: u64,
    tag: String,
    kind: ElementKind,
    mounted: Cell<bool>,
}

/// A shared reference to a rendered node.
///
/// The node starts mounted; [`unmount`](NodeRef::unmount) is final. Clones
/// observe the same mount state.
#[derive(Clone)]
pub struct NodeRef {
    inner: Rc<NodeInner>,
}

impl NodeRef {
    pub fn new(tag: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            inner: Rc::new(NodeInner {
                id: NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed),
                tag: tag.into(),
                kind,
                mounted: Cell::new(true),
            }),
        }
    }

    pub fn id(&self) -> u64 {
        self.inner.id
    }

    pub fn tag(&self) -> &str {
        &self.inner.tag
    }

    pub fn kind(&self) -> ElementKind {
        self.inner.kind
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.mounted.get()
    }

    pub fn unmount(&self) {
        self.inner.mounted.set(false);
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.inner.id)
            .field("tag", &self.inner.tag)
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

/// The element a link renders as.
///
/// Styling only distinguishes button-like roots.
pub trait RootElement: fmt::Debug {
    fn tag(&self) -> &str;

    fn is_button(&self) -> bool {
        false
    }

    fn element_kind(&self) -> ElementKind {
        ElementKind::Other
    }

    fn create_node(&self) -> NodeRef {
        NodeRef::new(self.tag(), self.element_kind())
    }
}

/// `<a>`, the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anchor;

impl RootElement for Anchor {
    fn tag(&self) -> &str {
        "a"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonElement;

impl RootElement for ButtonElement {
    fn tag(&self) -> &str {
        "button"
    }

    fn is_button(&self) -> bool {
        true
    }
}

/// Any other component, identified by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomElement {
    name: String,
    kind: ElementKind,
}

impl CustomElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ElementKind::Other,
        }
    }

    pub fn with_kind(mut self, kind: ElementKind) -> Self {
        self.kind = kind;
        self
    }
}

impl RootElement for CustomElement {
    fn tag(&self) -> &str {
        &self.name
    }

    fn element_kind(&self) -> ElementKind {
        self.kind
    }
}
