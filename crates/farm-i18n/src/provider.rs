//! Observable language state for a UI tree.
//!
//! The application root owns one [`LanguageProvider`]. Every screen receives a
//! [`LanguageHandle`] instead of reaching for global state: a handle can read
//! the active language, resolve keys, subscribe to changes and request a
//! change, but it cannot replace the table or the resolver.
//!
//! All of this runs on the UI's single thread, so the shared state lives in an
//! `Rc<RefCell<..>>` and the types are intentionally not `Send`.

use std::cell::{Cell, RefCell, RefMut};
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::warn;

use crate::resolver::{LanguageChange, Resolver, ResolverConfig};
use crate::types::{Language, UnsupportedLanguage};

type Listener = Rc<dyn Fn(Language)>;

struct Shared {
    resolver: RefCell<Resolver>,
    /// Mirror of the resolver's active language, readable while it is borrowed.
    active: Cell<Language>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_listener: Cell<u64>,
    revision: Cell<u64>,
}

impl Shared {
    fn notify(&self, language: Language) {
        self.revision.set(self.revision.get() + 1);
        // Snapshot so listeners may subscribe, unsubscribe or request again.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(language);
        }
    }

    fn apply(&self, change: LanguageChange) -> LanguageChange {
        if change.is_changed() {
            self.active.set(change.current());
            self.notify(change.current());
        }
        change
    }

    /// Mutable access to the resolver, or `None` while
    /// [`LanguageHandle::with_resolver`] holds it.
    fn resolver_mut(&self) -> Option<RefMut<'_, Resolver>> {
        let resolver = self.resolver.try_borrow_mut().ok();
        if resolver.is_none() {
            warn!(
                active = %self.active.get(),
                "language change requested while the resolver is borrowed, ignoring"
            );
        }
        resolver
    }
}

/// Root owner of the active-language state.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use farm_i18n::{Language, LanguageProvider, Resolver};
///
/// let provider = LanguageProvider::new(Resolver::new());
/// let header = provider.handle();
///
/// let renders = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&renders);
/// let _subscription = header.subscribe(move |_| counter.set(counter.get() + 1));
///
/// provider.handle().request_language(Language::Te);
/// assert_eq!(header.resolve("map"), "మ్యాప్");
/// assert_eq!(renders.get(), 1);
/// ```
pub struct LanguageProvider {
    shared: Rc<Shared>,
}

impl LanguageProvider {
    /// Take ownership of a ready resolver.
    pub fn new(resolver: Resolver) -> Self {
        Self {
            shared: Rc::new(Shared {
                active: Cell::new(resolver.language()),
                resolver: RefCell::new(resolver),
                listeners: RefCell::new(Vec::new()),
                next_listener: Cell::new(0),
                revision: Cell::new(0),
            }),
        }
    }

    /// Initialize a resolver from `config` and take ownership of it.
    pub fn from_config(config: ResolverConfig) -> Self {
        Self::new(config.initialize())
    }

    /// A consumer capability for one part of the UI.
    pub fn handle(&self) -> LanguageHandle {
        LanguageHandle {
            shared: Rc::clone(&self.shared),
        }
    }

    /// The active language.
    pub fn language(&self) -> Language {
        self.shared.active.get()
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.shared.listeners.borrow().len()
    }
}

impl fmt::Debug for LanguageProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageProvider")
            .field("language", &self.language())
            .field("revision", &self.shared.revision.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// What a screen holds: read, resolve, subscribe and request a change.
#[derive(Clone)]
pub struct LanguageHandle {
    shared: Rc<Shared>,
}

impl LanguageHandle {
    /// The active language.
    pub fn language(&self) -> Language {
        self.shared.active.get()
    }

    /// Display text for `key` in the active language, or `key` itself.
    pub fn resolve(&self, key: &str) -> String {
        self.shared.resolver.borrow().resolve(key).to_owned()
    }

    /// Read access to the resolver.
    ///
    /// The resolver is borrowed for the duration of `f`. A language change
    /// requested from inside `f` is refused and returns
    /// [`LanguageChange::Unchanged`].
    pub fn with_resolver<T>(&self, f: impl FnOnce(&Resolver) -> T) -> T {
        f(&self.shared.resolver.borrow())
    }

    /// Ask for `language` to become active.
    ///
    /// Subscribers run after the change, once, and only if the language
    /// actually changed. Refused while [`LanguageHandle::with_resolver`] is
    /// running.
    pub fn request_language(&self, language: Language) -> LanguageChange {
        let Some(mut resolver) = self.shared.resolver_mut() else {
            return LanguageChange::Unchanged(self.language());
        };
        let change = resolver.set_language(language);
        drop(resolver);
        self.shared.apply(change)
    }

    /// Ask for the language named by `code` to become active.
    ///
    /// An unsupported code changes nothing and notifies no one.
    pub fn request_language_code(&self, code: &str) -> Result<LanguageChange, UnsupportedLanguage> {
        let Some(mut resolver) = self.shared.resolver_mut() else {
            return code
                .parse::<Language>()
                .map(|_| LanguageChange::Unchanged(self.language()));
        };
        let change = resolver.set_language_code(code);
        drop(resolver);
        Ok(self.shared.apply(change?))
    }

    /// Call `listener` with the new language after every change.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// dropped.
    pub fn subscribe(&self, listener: impl Fn(Language) + 'static) -> Subscription {
        let id = self.shared.next_listener.get();
        self.shared.next_listener.set(id + 1);
        self.shared
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        Subscription {
            id,
            shared: Rc::downgrade(&self.shared),
        }
    }

    /// Number of language changes so far. Cheap staleness check for views
    /// that cache resolved text.
    pub fn revision(&self) -> u64 {
        self.shared.revision.get()
    }
}

impl fmt::Debug for LanguageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageHandle")
            .field("language", &self.language())
            .field("revision", &self.revision())
            .finish()
    }
}

/// Keeps a listener registered. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes its listener"]
pub struct Subscription {
    id: u64,
    shared: Weak<Shared>,
}

impl Subscription {
    /// Keep the listener registered for the provider's whole lifetime.
    pub fn detach(mut self) {
        self.shared = Weak::new();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared
                .listeners
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
