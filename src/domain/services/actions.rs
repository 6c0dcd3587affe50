#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;

use super::RevealService;
use crate::domain::models::Action;
use crate::domain::models::ApiBox;
use crate::domain::models::Event;

pub struct ActionsService {}

impl ActionsService {
    /// Runs API calls and reveals for the UI loop until the action channel
    /// closes. Every result is sent back as an event.
    pub async fn start(
        api: ApiBox,
        reveal_interval: Duration,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let mut reveals = RevealService::new(reveal_interval);

        loop {
            let action = match rx.recv().await {
                Some(action) => action,
                None => break,
            };

            let worker_api = api.clone();
            let worker_tx = tx.clone();
            match action {
                Action::StartSession(session) => {
                    tokio::spawn(async move {
                        let res = worker_api
                            .start_session(session.user_id(), session.user_name(), session.language())
                            .await;
                        return worker_tx.send(Event::ApiSessionStarted(res));
                    });
                }
                Action::SendMessage { user_id, text } => {
                    tokio::spawn(async move {
                        let res = worker_api.send_message(&user_id, &text).await;
                        return worker_tx.send(Event::ApiChatReply(res));
                    });
                }
                Action::FetchAnalytics {
                    user_id,
                    generation,
                } => {
                    tokio::spawn(async move {
                        let res = worker_api.analytics(&user_id).await;
                        return worker_tx.send(Event::ApiAnalytics { generation, res });
                    });
                }
                Action::FetchReport {
                    user_id,
                    generation,
                } => {
                    tokio::spawn(async move {
                        let res = worker_api.report(&user_id).await;
                        return worker_tx.send(Event::ApiReport { generation, res });
                    });
                }
                Action::RevealReply { index, text } => {
                    reveals.reveal(index, &text, &tx);
                }
                Action::CancelReveals() => {
                    reveals.cancel_all();
                }
            }
        }

        tracing::debug!("Action channel closed, stopping actions service");
        return Ok(());
    }
}
