use super::BubbleList;
use crate::domain::models::Author;
use crate::domain::models::Message;

#[test]
fn it_has_no_cached_lines() {
    let bubble_list = BubbleList::new("ada");

    assert_eq!(bubble_list.cache.len(), 0);
    assert_eq!(bubble_list.len(), 0);
}

#[test]
fn it_caches_lines() {
    let messages = vec![
        Message::new(Author::App, "Welcome! Starting session..."),
        Message::new(Author::Person, "Hi there!"),
    ];

    let mut bubble_list = BubbleList::new("ada");
    bubble_list.set_messages(&messages, 50);

    assert_eq!(bubble_list.cache.len(), 2);
    assert_eq!(bubble_list.len(), 6);
}

#[test]
fn it_rebuilds_changed_messages() {
    let mut messages = vec![Message::new(Author::Assistant, "")];

    let mut bubble_list = BubbleList::new("ada");
    bubble_list.set_messages(&messages, 30);
    assert_eq!(bubble_list.len(), 3);

    messages[0].set_text("How have you been sleeping lately, and has that changed recently?");
    bubble_list.set_messages(&messages, 30);

    assert!(bubble_list.len() > 3);
    assert_eq!(
        bubble_list.cache.get(&0).unwrap().message.text,
        messages[0].text
    );
}

#[test]
fn it_titles_bubbles_by_author() {
    let bubble_list = BubbleList::new("ada");

    assert_eq!(bubble_list.title(Author::Person), "🧑 ada");
    assert_eq!(bubble_list.title(Author::Assistant), "🤖 Assistant");
    assert_eq!(bubble_list.title(Author::App), "👋 Screenchat");
}
