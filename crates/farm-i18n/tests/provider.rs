//! Integration tests for the observable provider and its handles.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use farm_i18n::{
    Language, LanguageChange, LanguageProvider, MemoryStore, PREFERENCE_KEY, PreferenceStore,
    Resolver, ResolverConfig,
};

fn provider() -> LanguageProvider {
    LanguageProvider::new(Resolver::new())
}

// =========================================================================
// Reads
// =========================================================================

#[test]
fn handles_share_one_active_language() {
    let provider = provider();
    let header = provider.handle();
    let insurance_page = provider.handle();

    header.request_language(Language::Mr);
    assert_eq!(insurance_page.language(), Language::Mr);
    assert_eq!(insurance_page.resolve("insurance"), "विमा");
    assert_eq!(provider.language(), Language::Mr);
}

#[test]
fn handle_resolve_falls_back_to_key() {
    let handle = provider().handle();
    assert_eq!(handle.resolve("doesNotExist"), "doesNotExist");
}

#[test]
fn with_resolver_gives_read_access() {
    let handle = provider().handle();
    let count = handle.with_resolver(|resolver| {
        resolver
            .table()
            .language(resolver.language())
            .map(|table| table.len())
    });
    assert_eq!(count, Some(22));
}

#[test]
fn from_config_reads_persisted_preference() {
    let store = MemoryStore::with_value(PREFERENCE_KEY, "hi");
    let provider = LanguageProvider::from_config(
        ResolverConfig::builder().store(Box::new(store)).build(),
    );
    assert_eq!(provider.language(), Language::Hi);
}

// =========================================================================
// Notifications
// =========================================================================

#[test]
fn subscribers_see_each_change_once() {
    let provider = provider();
    let handle = provider.handle();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    let _subscription = handle.subscribe(move |language| sink.borrow_mut().push(language));

    handle.request_language(Language::Hi);
    handle.request_language(Language::Ta);
    assert_eq!(*seen.borrow(), vec![Language::Hi, Language::Ta]);
    assert_eq!(handle.revision(), 2);
}

#[test]
fn idempotent_request_does_not_notify() {
    let provider = provider();
    let handle = provider.handle();
    let calls = Rc::new(Cell::new(0));

    let counter = Rc::clone(&calls);
    let _subscription = handle.subscribe(move |_| counter.set(counter.get() + 1));

    handle.request_language(Language::Bn);
    let change = handle.request_language(Language::Bn);
    assert_eq!(change, LanguageChange::Unchanged(Language::Bn));
    assert_eq!(calls.get(), 1);
    assert_eq!(handle.revision(), 1);
}

#[test]
fn rejected_code_does_not_notify() {
    let provider = provider();
    let handle = provider.handle();
    let calls = Rc::new(Cell::new(0));

    let counter = Rc::clone(&calls);
    let _subscription = handle.subscribe(move |_| counter.set(counter.get() + 1));

    assert!(handle.request_language_code("xx").is_err());
    assert_eq!(handle.language(), Language::En);
    assert_eq!(calls.get(), 0);

    assert!(handle.request_language_code("kn").unwrap().is_changed());
    assert_eq!(calls.get(), 1);
}

#[test]
fn listener_can_read_resolved_text() {
    let provider = provider();
    let handle = provider.handle();
    let rendered = Rc::new(RefCell::new(String::new()));

    let reader = handle.clone();
    let target = Rc::clone(&rendered);
    let _subscription = handle.subscribe(move |_| {
        *target.borrow_mut() = reader.resolve("training");
    });

    handle.request_language(Language::Te);
    assert_eq!(*rendered.borrow(), "శిక్షణ");
}

#[test]
fn listener_can_request_another_change() {
    let provider = provider();
    let handle = provider.handle();

    let redirect = handle.clone();
    let _subscription = handle.subscribe(move |language| {
        if language == Language::Gu {
            redirect.request_language(Language::Hi);
        }
    });

    handle.request_language(Language::Gu);
    assert_eq!(handle.language(), Language::Hi);
    assert_eq!(handle.revision(), 2);
}

#[test]
fn request_inside_with_resolver_is_refused() {
    let provider = provider();
    let handle = provider.handle();
    let calls = Rc::new(Cell::new(0));

    let counter = Rc::clone(&calls);
    let _subscription = handle.subscribe(move |_| counter.set(counter.get() + 1));

    let (change, coded) = handle.with_resolver(|resolver| {
        assert_eq!(resolver.language(), Language::En);
        (
            handle.request_language(Language::Hi),
            handle.request_language_code("ta"),
        )
    });

    assert_eq!(change, LanguageChange::Unchanged(Language::En));
    assert_eq!(coded, Ok(LanguageChange::Unchanged(Language::En)));
    assert_eq!(handle.language(), Language::En);
    assert_eq!(calls.get(), 0);

    assert!(handle.request_language(Language::Hi).is_changed());
    assert_eq!(calls.get(), 1);
}

#[test]
fn unsupported_code_inside_with_resolver_is_still_rejected() {
    let provider = provider();
    let handle = provider.handle();

    let result = handle.with_resolver(|_| handle.request_language_code("xx"));
    assert_eq!(result.unwrap_err().code, "xx");
}

#[test]
fn dropping_subscription_unsubscribes() {
    let provider = provider();
    let handle = provider.handle();
    let calls = Rc::new(Cell::new(0));

    let counter = Rc::clone(&calls);
    let subscription = handle.subscribe(move |_| counter.set(counter.get() + 1));
    assert_eq!(provider.subscriber_count(), 1);

    handle.request_language(Language::Hi);
    drop(subscription);
    assert_eq!(provider.subscriber_count(), 0);

    handle.request_language(Language::En);
    assert_eq!(calls.get(), 1);
}

#[test]
fn detached_subscription_stays_registered() {
    let provider = provider();
    let handle = provider.handle();
    let calls = Rc::new(Cell::new(0));

    let counter = Rc::clone(&calls);
    handle
        .subscribe(move |_| counter.set(counter.get() + 1))
        .detach();

    handle.request_language(Language::Ta);
    assert_eq!(provider.subscriber_count(), 1);
    assert_eq!(calls.get(), 1);
}

#[test]
fn subscription_outliving_provider_is_harmless() {
    let provider = provider();
    let subscription = provider.handle().subscribe(|_| {});
    drop(provider);
    drop(subscription);
}

// =========================================================================
// Persistence through the provider
// =========================================================================

#[test]
fn request_persists_through_store() {
    let store = MemoryStore::new();
    let provider = LanguageProvider::new(Resolver::with_store(store.clone()));

    provider.handle().request_language(Language::Bn);
    assert_eq!(store.load(PREFERENCE_KEY).unwrap().as_deref(), Some("bn"));

    let restarted = LanguageProvider::new(Resolver::with_store(store));
    assert_eq!(restarted.language(), Language::Bn);
}
