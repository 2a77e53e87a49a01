use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Handler fired when an element finishes loading. Receives the element itself.
pub type LoadHandler = Arc<dyn Fn(ScriptElement) + Send + Sync>;

/// Handler fired when an element fails to load.
pub type ErrorHandler = Arc<dyn Fn() + Send + Sync>;

/// Completion signal an environment fires at an inserted element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadEvent {
    Load,
    Error,
}

/// A reference to a loadable external script.
///
/// Cloning is cheap and clones share identity: handlers set on one clone are
/// visible on all of them, and [`ScriptElement::ptr_eq`] tells clones apart from
/// distinct elements with the same `src`.
#[derive(Clone)]
pub struct ScriptElement {
    inner: Arc<ElementInner>,
}

struct ElementInner {
    src: String,
    handlers: Mutex<Handlers>,
}

#[derive(Default)]
struct Handlers {
    onload: Option<LoadHandler>,
    onerror: Option<ErrorHandler>,
}

impl ScriptElement {
    /// Creates an element for `src` with no handlers set.
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(ElementInner {
                src: src.into(),
                handlers: Mutex::new(Handlers::default()),
            }),
        }
    }

    /// The source locator this element was created with.
    pub fn src(&self) -> &str {
        &self.inner.src
    }

    /// Replaces the `onload` handler.
    pub fn set_onload(&self, handler: impl Fn(ScriptElement) + Send + Sync + 'static) {
        self.handlers().onload = Some(Arc::new(handler));
    }

    /// Replaces the `onerror` handler.
    pub fn set_onerror(&self, handler: impl Fn() + Send + Sync + 'static) {
        self.handlers().onerror = Some(Arc::new(handler));
    }

    /// Fires `event` at this element, invoking the matching handler if one is set.
    ///
    /// Called by the environment once it knows how loading went. The handler runs
    /// outside the element's lock, so it may freely touch the element again.
    pub fn dispatch(&self, event: LoadEvent) {
        match event {
            LoadEvent::Load => {
                let handler = self.handlers().onload.clone();
                if let Some(handler) = handler {
                    handler(self.clone());
                }
            }
            LoadEvent::Error => {
                let handler = self.handlers().onerror.clone();
                if let Some(handler) = handler {
                    handler();
                }
            }
        }
    }

    /// True if both handles refer to the same element.
    pub fn ptr_eq(&self, other: &ScriptElement) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn handlers(&self) -> std::sync::MutexGuard<'_, Handlers> {
        self.inner
            .handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for ScriptElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handlers = self.handlers();
        f.debug_struct("ScriptElement")
            .field("src", &self.inner.src)
            .field("onload", &handlers.onload.is_some())
            .field("onerror", &handlers.onerror.is_some())
            .finish()
    }
}

/// A document-like environment with a mutable insertion point.
///
/// Implementations take ownership of appended elements and are expected to fire
/// exactly one [`LoadEvent`] at each of them eventually, via
/// [`ScriptElement::dispatch`].
pub trait Document: Send + Sync {
    fn append(&self, element: ScriptElement);
}
