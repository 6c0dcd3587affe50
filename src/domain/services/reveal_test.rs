use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;

use super::reveal_steps;
use super::RevealService;
use crate::domain::models::Event;

fn to_step(event: Option<Event>) -> Result<(usize, String, bool)> {
    match event {
        Some(Event::RevealStep { index, text, done }) => return Ok((index, text, done)),
        _ => bail!("Wrong type from recv"),
    }
}

#[test]
fn it_builds_cumulative_steps() {
    assert_eq!(
        reveal_steps("How are you feeling?"),
        vec!["How", "How are", "How are you", "How are you feeling?"]
    );
}

#[test]
fn it_builds_a_single_step_for_empty_text() {
    assert_eq!(reveal_steps(""), vec![""]);
}

#[test]
fn it_ends_on_the_full_text() {
    let text = "two  spaces and\nnew lines";
    assert_eq!(reveal_steps(text).last().unwrap(), text);
}

#[tokio::test]
async fn it_reveals_every_step() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let service = RevealService::new(Duration::from_millis(1));

    service.reveal(3, "I hear you", &tx).await?;

    assert_eq!(to_step(rx.recv().await)?, (3, "I".to_string(), false));
    assert_eq!(to_step(rx.recv().await)?, (3, "I hear".to_string(), false));
    assert_eq!(to_step(rx.recv().await)?, (3, "I hear you".to_string(), true));
    assert!(rx.try_recv().is_err());

    return Ok(());
}

#[tokio::test]
async fn it_stops_when_cancelled() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let mut service = RevealService::new(Duration::from_secs(3600));

    let handle = service.reveal(0, "this will never finish", &tx);
    assert_eq!(to_step(rx.recv().await)?, (0, "this".to_string(), false));

    service.cancel_all();
    handle.await?;

    assert!(rx.try_recv().is_err());
    return Ok(());
}

#[tokio::test]
async fn it_keeps_revealing_after_a_cancel() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let mut service = RevealService::new(Duration::from_millis(1));
    service.cancel_all();

    service.reveal(1, "hello", &tx).await?;

    assert_eq!(to_step(rx.recv().await)?, (1, "hello".to_string(), true));
    return Ok(());
}
