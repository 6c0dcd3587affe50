use super::ChatLog;
use crate::domain::models::Author;
use crate::domain::models::Message;

#[test]
fn it_appends_in_order() {
    let mut chat = ChatLog::default();
    assert_eq!(chat.append(Message::new(Author::Person, "first")), 0);
    assert_eq!(chat.append(Message::new(Author::Assistant, "second")), 1);

    let texts = chat
        .messages()
        .iter()
        .map(|message| return message.text.to_string())
        .collect::<Vec<String>>();
    assert_eq!(texts, vec!["first", "second"]);
    assert_eq!(chat.len(), 2);
}

#[test]
fn it_replaces_in_place() {
    let mut chat = ChatLog::default();
    chat.append(Message::new(Author::Person, "hello"));
    let idx = chat.append(Message::new(Author::Assistant, ""));

    assert!(chat.replace(idx, "How"));
    assert!(chat.replace(idx, "How are you?"));

    assert_eq!(chat.len(), 2);
    assert_eq!(chat.get(0).unwrap().text, "hello");
    assert_eq!(chat.get(1).unwrap().text, "How are you?");
    assert_eq!(chat.get(1).unwrap().author, Author::Assistant);
}

#[test]
fn it_ignores_out_of_range_replacements() {
    let mut chat = ChatLog::default();
    chat.append(Message::new(Author::Person, "hello"));
    let revision = chat.revision();

    assert!(!chat.replace(5, "nope"));
    assert_eq!(chat.len(), 1);
    assert_eq!(chat.revision(), revision);
}

#[test]
fn it_bumps_the_revision_on_every_mutation() {
    let mut chat = ChatLog::new(vec![Message::new(Author::App, "Welcome!")]);
    assert_eq!(chat.revision(), 0);

    let idx = chat.append(Message::new(Author::Assistant, ""));
    assert_eq!(chat.revision(), 1);

    chat.replace(idx, "Hi");
    assert_eq!(chat.revision(), 2);
}

#[test]
fn it_never_reorders_or_drops_entries() {
    let mut chat = ChatLog::default();
    let mut snapshots: Vec<Vec<Message>> = vec![];

    for idx in 0..10 {
        chat.append(Message::new(Author::Person, &format!("message {idx}")));
        let reply = chat.append(Message::new(Author::Assistant, ""));
        chat.replace(reply, &format!("reply {idx}"));
        snapshots.push(chat.messages().to_vec());
    }

    for window in snapshots.windows(2) {
        let (before, after) = (&window[0], &window[1]);
        assert!(after.len() >= before.len());
        assert_eq!(&after[..before.len()], &before[..]);
    }
    assert!(!chat.is_empty());
}
