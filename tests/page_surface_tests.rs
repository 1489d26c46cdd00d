// Host-side tests for route resolution and the contact form state.

use site_core::*;

#[test]
fn known_paths_resolve() {
    assert_eq!(Route::from_path("/"), Route::Home);
    assert_eq!(Route::from_path(""), Route::Home);
    assert_eq!(Route::from_path("/work-with-us"), Route::WorkWithUs(None));
    assert_eq!(
        Route::from_path("/work-with-us/employers"),
        Route::WorkWithUs(Some(WorkSection::Employers))
    );
    assert_eq!(
        Route::from_path("/work-with-us/candidates/"),
        Route::WorkWithUs(Some(WorkSection::Candidates))
    );
    assert_eq!(Route::from_path("/global-reach"), Route::GlobalReach);
    assert_eq!(Route::from_path("/proof-in-the-people?x=1"), Route::ProofInThePeople);
    assert_eq!(Route::from_path("/candid-moments#top"), Route::CandidMoments);
    assert_eq!(Route::from_path("/contact/"), Route::Contact);
}

#[test]
fn work_with_us_sub_views_are_anchors() {
    assert_eq!(
        Route::from_path("/work-with-us#employers"),
        Route::WorkWithUs(Some(WorkSection::Employers))
    );
    assert_eq!(
        Route::from_path("/work-with-us/?ref=nav#candidates"),
        Route::WorkWithUs(Some(WorkSection::Candidates))
    );
    assert_eq!(Route::from_path("/work-with-us#faq"), Route::WorkWithUs(None));
    // an anchor only selects a sub-view on the work-with-us page
    assert_eq!(Route::from_path("/contact#employers"), Route::Contact);
    for section in [WorkSection::Employers, WorkSection::Candidates] {
        assert_eq!(WorkSection::from_anchor(section.anchor()), Some(section));
    }
}

#[test]
fn unknown_paths_are_not_found() {
    for p in ["/careers", "/work-with-us/interns", "/global-reach/extra", "/Contact"] {
        assert_eq!(Route::from_path(p), Route::NotFound, "{p}");
    }
}

#[test]
fn paths_round_trip_for_real_pages() {
    for r in [
        Route::Home,
        Route::WorkWithUs(None),
        Route::WorkWithUs(Some(WorkSection::Employers)),
        Route::WorkWithUs(Some(WorkSection::Candidates)),
        Route::GlobalReach,
        Route::ProofInThePeople,
        Route::CandidMoments,
        Route::Contact,
    ] {
        assert_eq!(Route::from_path(r.path()), r);
    }
}

#[test]
fn only_card_pages_track_scroll_cards() {
    assert!(Route::Home.has_scroll_cards());
    assert!(Route::WorkWithUs(None).has_scroll_cards());
    assert!(Route::CandidMoments.has_scroll_cards());
    assert!(!Route::GlobalReach.has_scroll_cards());
    assert!(!Route::Contact.has_scroll_cards());
}

#[test]
fn contact_form_requires_every_field() {
    let mut form = ContactForm::default();
    assert_eq!(form.missing().len(), 3);
    assert!(!form.submit());

    form.set(ContactField::Name, "Dana");
    form.set(ContactField::Email, "dana@example.com");
    form.set(ContactField::Message, "  ");
    assert_eq!(form.missing(), vec![ContactField::Message]);
    assert!(!form.submit());
    assert_eq!(form.name, "Dana");

    form.set(ContactField::Message, "Hiring two engineers");
    assert!(form.submit());
    assert_eq!(form, ContactForm::default());
}

#[test]
fn contact_field_names() {
    assert_eq!(ContactField::from_name("email"), Some(ContactField::Email));
    assert_eq!(ContactField::from_name("phone"), None);
}
