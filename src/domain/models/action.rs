use super::Session;

/// Requests sent from the UI loop to the actions service.
#[derive(Debug)]
pub enum Action {
    StartSession(Session),
    SendMessage { user_id: String, text: String },
    /// `generation` is handed back with the result so stale results can be
    /// told apart from the latest one.
    FetchAnalytics { user_id: String, generation: u64 },
    FetchReport { user_id: String, generation: u64 },
    /// Reveal an assistant reply word by word into the chat message at `index`.
    RevealReply { index: usize, text: String },
    /// The chat screen went away, stop every reveal still in progress.
    CancelReveals(),
}
