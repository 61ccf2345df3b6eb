//! Document-level state shared by everything rendered into one tree.
//!
//! A [`Document`] owns the most recently rendered root element, the viewport
//! size (only known when a real host is attached) and the listeners that
//! want to observe every event regardless of its target.

use std::sync::{Arc, RwLock, Weak};

use crate::element::{find_element, Element};
use crate::event::Event;
use crate::hit;

/// Listener phase. Capture listeners run before bubble listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Capture,
    Bubble,
}

/// Returned by listeners to continue or halt dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

pub type Listener = Arc<dyn Fn(&Document, &Event) -> Propagation + Send + Sync>;

struct Registered {
    id: u64,
    phase: Phase,
    listener: Listener,
}

#[derive(Default)]
struct DocumentInner {
    root: Option<Element>,
    viewport: Option<(u16, u16)>,
    listeners: Vec<Registered>,
    next_listener: u64,
}

/// Shared handle to a rendered tree and its global listeners.
///
/// Cloning is cheap; all clones see the same tree and listeners.
#[derive(Clone, Default)]
pub struct Document {
    inner: Arc<RwLock<DocumentInner>>,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("viewport", &self.viewport())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document attached to a host with a known viewport.
    pub fn with_viewport(width: u16, height: u16) -> Self {
        let doc = Self::new();
        doc.set_viewport(width, height);
        doc
    }

    pub fn viewport(&self) -> Option<(u16, u16)> {
        self.inner.read().map(|guard| guard.viewport).unwrap_or(None)
    }

    pub fn set_viewport(&self, width: u16, height: u16) {
        if let Ok(mut guard) = self.inner.write() {
            guard.viewport = Some((width, height));
        }
    }

    /// Replace the rendered tree.
    pub fn set_root(&self, root: Element) {
        if let Ok(mut guard) = self.inner.write() {
            guard.root = Some(root);
        }
    }

    /// Run `f` against the current tree.
    pub fn with_root<R>(&self, f: impl FnOnce(Option<&Element>) -> R) -> R {
        match self.inner.read() {
            Ok(guard) => f(guard.root.as_ref()),
            Err(_) => f(None),
        }
    }

    /// Whether an element with this id is part of the current tree.
    pub fn is_rendered(&self, id: &str) -> bool {
        self.with_root(|root| root.is_some_and(|root| find_element(root, id).is_some()))
    }

    /// Whether `target` is `ancestor` or one of its descendants in the current tree.
    pub fn contains(&self, ancestor: &str, target: &str) -> bool {
        self.with_root(|root| root.is_some_and(|root| hit::contains(root, ancestor, target)))
    }

    /// Ids from `target` up to the root, deepest first.
    pub fn ancestors(&self, target: &str) -> Vec<String> {
        self.with_root(|root| {
            root.map(|root| hit::ancestors(root, target))
                .unwrap_or_default()
        })
    }

    /// Register a document-level listener.
    ///
    /// The listener stays registered for as long as the returned guard lives.
    #[must_use = "dropping the guard removes the listener"]
    pub fn add_listener(
        &self,
        phase: Phase,
        listener: impl Fn(&Document, &Event) -> Propagation + Send + Sync + 'static,
    ) -> ListenerGuard {
        let id = match self.inner.write() {
            Ok(mut guard) => {
                let id = guard.next_listener;
                guard.next_listener += 1;
                guard.listeners.push(Registered {
                    id,
                    phase,
                    listener: Arc::new(listener),
                });
                id
            }
            Err(_) => u64::MAX,
        };
        log::debug!("Document::add_listener id={id} phase={phase:?}");
        ListenerGuard {
            id,
            document: Arc::downgrade(&self.inner),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.read().map(|guard| guard.listeners.len()).unwrap_or(0)
    }

    /// Dispatch an event to every registered listener.
    ///
    /// Resize events update the viewport before listeners run. Listeners are
    /// snapshotted first so they may query the document or add and remove
    /// listeners while being called.
    pub fn dispatch(&self, event: &Event) -> Propagation {
        if let Event::Resize { width, height } = event {
            self.set_viewport(*width, *height);
        }

        let snapshot: Vec<(Phase, Listener)> = match self.inner.read() {
            Ok(guard) => guard
                .listeners
                .iter()
                .map(|r| (r.phase, Arc::clone(&r.listener)))
                .collect(),
            Err(_) => return Propagation::Continue,
        };

        for phase in [Phase::Capture, Phase::Bubble] {
            for (_, listener) in snapshot.iter().filter(|(p, _)| *p == phase) {
                if listener(self, event) == Propagation::Stop {
                    return Propagation::Stop;
                }
            }
        }

        Propagation::Continue
    }

    fn remove_listener(inner: &RwLock<DocumentInner>, id: u64) {
        if let Ok(mut guard) = inner.write() {
            guard.listeners.retain(|r| r.id != id);
        }
    }
}

/// Keeps a document listener registered; dropping it unregisters the listener.
#[derive(Debug)]
pub struct ListenerGuard {
    id: u64,
    document: Weak<RwLock<DocumentInner>>,
}

impl ListenerGuard {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(inner) = self.document.upgrade() {
            Document::remove_listener(&inner, self.id);
            log::debug!("Document listener {} removed", self.id);
        }
    }
}
