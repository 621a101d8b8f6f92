use std::sync::Arc;
use storefront::model::{DraftUpdate, Review, StorefrontEvent, REVIEW_SUBMITTED};
use storefront::reviews::{ReviewForm, ReviewList};
use storefront_framework::EventChannel;

fn submit(form: &mut ReviewForm, author: &str, rating: i32) -> Review {
    form.update_field(DraftUpdate::Author(author.into()));
    form.update_field(DraftUpdate::Body("Comfortable".into()));
    form.update_field(DraftUpdate::Rating(Some(rating)));
    form.submit().expect("Review should be accepted")
}

#[test]
fn form_and_list_meet_only_through_the_channel() {
    let channel = Arc::new(EventChannel::<StorefrontEvent>::new());
    let list = ReviewList::mount(channel.clone());
    let mut form = ReviewForm::new(channel.clone());

    let first = submit(&mut form, "Alice", 5);
    let second = submit(&mut form, "Bob", 3);

    assert_eq!(list.reviews(), vec![first, second]);
}

#[test]
fn every_mounted_list_gets_its_own_copy() {
    let channel = Arc::new(EventChannel::<StorefrontEvent>::new());
    let sidebar = ReviewList::mount(channel.clone());
    let footer = ReviewList::mount(channel.clone());
    let mut form = ReviewForm::new(channel.clone());

    submit(&mut form, "Alice", 4);

    assert_eq!(sidebar.len(), 1);
    assert_eq!(footer.reviews(), sidebar.reviews());
}

#[test]
fn a_list_mounted_late_misses_earlier_reviews() {
    let channel = Arc::new(EventChannel::<StorefrontEvent>::new());
    let mut form = ReviewForm::new(channel.clone());

    submit(&mut form, "Early", 2);
    let list = ReviewList::mount(channel.clone());
    submit(&mut form, "Late", 4);

    let authors: Vec<String> = list.reviews().into_iter().map(|r| r.author).collect();
    assert_eq!(authors, vec!["Late"]);
}

#[test]
fn rejected_reviews_never_reach_the_list() {
    let channel = Arc::new(EventChannel::<StorefrontEvent>::new());
    let list = ReviewList::mount(channel.clone());
    let mut form = ReviewForm::new(channel.clone());

    form.update_field(DraftUpdate::Author("Alice".into()));
    form.update_field(DraftUpdate::Body("Too small".into()));
    form.update_field(DraftUpdate::Rating(Some(9)));
    assert!(form.submit().is_err());
    assert!(list.is_empty());
    assert_eq!(channel.subscriber_count(REVIEW_SUBMITTED), 1);
}
