#[cfg(test)]
#[path = "reveal_test.rs"]
mod tests;

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time;
use tokio_util::sync::CancellationToken;

use crate::domain::models::Event;

/// Cumulative partial texts for a word by word reveal. The last step is
/// always the full text.
pub fn reveal_steps(text: &str) -> Vec<String> {
    let words = text.split(' ').collect::<Vec<&str>>();
    return (1..=words.len())
        .map(|count| return words[..count].join(" "))
        .collect();
}

async fn run_reveal(
    index: usize,
    steps: Vec<String>,
    interval: Duration,
    token: CancellationToken,
    tx: mpsc::UnboundedSender<Event>,
) {
    let total = steps.len();
    for (step, text) in steps.into_iter().enumerate() {
        if token.is_cancelled() {
            return;
        }

        let done = step + 1 == total;
        if tx.send(Event::RevealStep { index, text, done }).is_err() {
            return;
        }
        if done {
            return;
        }

        tokio::select! {
            _ = token.cancelled() => {
                tracing::debug!(index, step, "Reveal cancelled");
                return;
            }
            _ = time::sleep(interval) => {}
        }
    }
}

/// Spawns reveal tasks scoped to the chat screen. Cancelling the scope stops
/// every reveal that is still running.
pub struct RevealService {
    interval: Duration,
    scope: CancellationToken,
}

impl RevealService {
    pub fn new(interval: Duration) -> RevealService {
        return RevealService {
            interval,
            scope: CancellationToken::new(),
        };
    }

    pub fn reveal(
        &self,
        index: usize,
        text: &str,
        tx: &mpsc::UnboundedSender<Event>,
    ) -> JoinHandle<()> {
        let token = self.scope.child_token();
        let steps = reveal_steps(text);
        let interval = self.interval;
        let tx = tx.clone();

        return tokio::spawn(async move {
            run_reveal(index, steps, interval, token, tx).await;
        });
    }

    pub fn cancel_all(&mut self) {
        self.scope.cancel();
        self.scope = CancellationToken::new();
    }
}

impl Drop for RevealService {
    fn drop(&mut self) {
        self.scope.cancel();
    }
}
