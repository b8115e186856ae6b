//! End-to-end tests for an observable model embedding a change registry.

use prop_notify::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

classifiers! {
    /// Classifiers for the observable properties of [`Profile`].
    pub enum ProfileClassifiers {
        DisplayName,
        AvatarUrl,
        Bio,
    }
}

#[derive(Default)]
struct Profile {
    display_name: String,
    avatar_url: String,
    bio: String,
    changes: ChangeRegistry<ProfileClassifiers>,
}

impl Observable<ProfileClassifiers> for Profile {
    fn registry(&self) -> &ChangeRegistry<ProfileClassifiers> {
        &self.changes
    }
}

impl Profile {
    fn set_display_name(&mut self, value: impl Into<String>) -> &mut Self {
        self.display_name = value.into();
        self.notify_property_changed(ProfileClassifiers::DisplayName);
        self
    }

    fn set_avatar_url(&mut self, value: impl Into<String>) -> &mut Self {
        self.avatar_url = value.into();
        self.notify_property_changed(ProfileClassifiers::AvatarUrl);
        self
    }

    fn set_bio(&mut self, value: impl Into<String>) -> &mut Self {
        self.bio = value.into();
        self.notify_property_changed(ProfileClassifiers::Bio);
        self
    }
}

fn counting_listener(
    counter: &Arc<AtomicUsize>,
    expected: ProfileClassifiers,
) -> Listener<ProfileClassifiers> {
    let counter = Arc::clone(counter);
    Listener::new(move |classifier| {
        assert_eq!(classifier, expected);
        counter.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn setter_notifies_exactly_its_own_listeners() {
    let mut profile = Profile::default();
    let name_calls = Arc::new(AtomicUsize::new(0));
    let avatar_calls = Arc::new(AtomicUsize::new(0));

    profile
        .add(
            ProfileClassifiers::DisplayName,
            counting_listener(&name_calls, ProfileClassifiers::DisplayName),
        )
        .add(
            ProfileClassifiers::AvatarUrl,
            counting_listener(&avatar_calls, ProfileClassifiers::AvatarUrl),
        );

    profile.set_display_name("Ada");

    assert_eq!(name_calls.load(Ordering::SeqCst), 1);
    assert_eq!(avatar_calls.load(Ordering::SeqCst), 0);
    assert_eq!(profile.display_name, "Ada");
}

#[test]
fn listeners_fire_in_registration_order() {
    let mut profile = Profile::default();
    let order = Arc::new(Mutex::new(Vec::new()));

    for tag in ["first", "second", "third"] {
        let order_clone = Arc::clone(&order);
        profile.add(
            ProfileClassifiers::Bio,
            Listener::new(move |_| {
                order_clone.lock().unwrap().push(tag);
            }),
        );
    }

    profile.set_bio("Pioneer of computing.");

    assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
}

#[test]
fn wildcard_listener_ignores_specific_changes() {
    let mut profile = Profile::default();
    let calls = Arc::new(AtomicUsize::new(0));

    profile.add(
        ProfileClassifiers::All,
        counting_listener(&calls, ProfileClassifiers::All),
    );

    profile.set_display_name("Grace").set_avatar_url("https://example.com/g.png");

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn wildcard_notification_reaches_wildcard_and_specific_listeners_once_each() {
    let profile = Profile::default();
    let all_calls = Arc::new(AtomicUsize::new(0));
    let bio_calls = Arc::new(AtomicUsize::new(0));

    profile
        .add(
            ProfileClassifiers::All,
            counting_listener(&all_calls, ProfileClassifiers::All),
        )
        .add(
            ProfileClassifiers::Bio,
            counting_listener(&bio_calls, ProfileClassifiers::Bio),
        );

    profile.notify_property_changed(ProfileClassifiers::All);

    assert_eq!(all_calls.load(Ordering::SeqCst), 1);
    assert_eq!(bio_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn listener_under_wildcard_and_specific_fires_once_per_registration() {
    let profile = Profile::default();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let seen_clone = Arc::clone(&seen);
    let listener = Listener::new(move |classifier| {
        seen_clone.lock().unwrap().push(classifier);
    });

    profile
        .add(ProfileClassifiers::All, listener.clone())
        .add(ProfileClassifiers::AvatarUrl, listener);

    profile.notify_property_changed(ProfileClassifiers::All);

    // One invocation per registration, each with the classifier it was
    // registered under, wildcard first.
    assert_eq!(
        *seen.lock().unwrap(),
        vec![ProfileClassifiers::All, ProfileClassifiers::AvatarUrl]
    );
}

#[test]
fn duplicate_registration_fires_twice_and_unwinds_one_at_a_time() {
    let mut profile = Profile::default();
    let calls = Arc::new(AtomicUsize::new(0));
    let listener = counting_listener(&calls, ProfileClassifiers::DisplayName);

    profile
        .add(ProfileClassifiers::DisplayName, listener.clone())
        .add(ProfileClassifiers::DisplayName, listener.clone());

    profile.set_display_name("Katherine");
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    profile.remove(ProfileClassifiers::DisplayName, listener.clone());
    profile.set_display_name("Dorothy");
    assert_eq!(calls.load(Ordering::SeqCst), 3);

    profile.remove(ProfileClassifiers::DisplayName, listener);
    profile.set_display_name("Mary");
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert!(!profile.registry().has_listeners());
}

#[test]
fn cleared_observable_fires_nothing_and_accepts_new_listeners() {
    let mut profile = Profile::default();
    let calls = Arc::new(AtomicUsize::new(0));

    profile.add(
        ProfileClassifiers::Bio,
        counting_listener(&calls, ProfileClassifiers::Bio),
    );
    profile.clear();

    profile.set_bio("gone");
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    profile.add(
        ProfileClassifiers::Bio,
        counting_listener(&calls, ProfileClassifiers::Bio),
    );
    profile.set_bio("back");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn clear_classifier_only_silences_that_property() {
    let mut profile = Profile::default();
    let name_calls = Arc::new(AtomicUsize::new(0));
    let bio_calls = Arc::new(AtomicUsize::new(0));

    profile
        .add(
            ProfileClassifiers::DisplayName,
            counting_listener(&name_calls, ProfileClassifiers::DisplayName),
        )
        .add(
            ProfileClassifiers::Bio,
            counting_listener(&bio_calls, ProfileClassifiers::Bio),
        )
        .clear_classifier(ProfileClassifiers::DisplayName);

    profile.set_display_name("Annie").set_bio("present");

    assert_eq!(name_calls.load(Ordering::SeqCst), 0);
    assert_eq!(bio_calls.load(Ordering::SeqCst), 1);
}
