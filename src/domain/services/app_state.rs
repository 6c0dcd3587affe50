#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use std::collections::HashMap;

use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::BubbleList;
use super::ChatLog;
use super::LoginForm;
use super::Scroll;
use crate::domain::models::Action;
use crate::domain::models::ApiError;
use crate::domain::models::Author;
use crate::domain::models::Event;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::ReplyText;
use crate::domain::models::Report;
use crate::domain::models::Screen;
use crate::domain::models::Session;
use crate::domain::models::TextArea;

pub const WELCOME_MESSAGE: &str = "Welcome! Starting session...";

/// Results of a screen's fetches. Each fetch gets a generation and only the
/// newest one may resolve. The last successful value stays available while a
/// refetch is in flight and after a refetch fails.
pub struct Fetched<T> {
    pub value: Option<T>,
    pub error: Option<ApiError>,
    pub loading: bool,
    generation: u64,
}

impl<T> Default for Fetched<T> {
    fn default() -> Fetched<T> {
        return Fetched {
            value: None,
            error: None,
            loading: false,
            generation: 0,
        };
    }
}

impl<T> Fetched<T> {
    /// Returns the generation the result of the new fetch must carry.
    pub fn start(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        return self.generation;
    }

    pub fn resolve(&mut self, generation: u64, res: Result<T, ApiError>) {
        if generation != self.generation {
            tracing::debug!(
                generation,
                latest = self.generation,
                "Dropping superseded fetch result"
            );
            return;
        }

        self.loading = false;
        match res {
            Ok(value) => {
                self.value = Some(value);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err);
            }
        }
    }

    /// True until the first fetch resolves.
    pub fn is_pending(&self) -> bool {
        return self.value.is_none() && self.error.is_none();
    }
}

/// Everything that only exists once a user has logged in.
pub struct Workspace<'a> {
    pub session: Session,
    pub screen: Screen,
    pub chat: ChatLog,
    pub textarea: tui_textarea::TextArea<'a>,
    pub bubble_list: BubbleList,
    pub scroll: Scroll,
    pub page_scroll: Scroll,
    pub analytics: Fetched<String>,
    pub report: Fetched<Report>,
    pending_reveals: HashMap<usize, String>,
    session_started: bool,
    synced_chat: Option<(u64, u16)>,
}

impl<'a> Workspace<'a> {
    pub fn new(session: Session) -> Workspace<'a> {
        let bubble_list = BubbleList::new(session.user_name());
        return Workspace {
            session,
            screen: Screen::Chat,
            chat: ChatLog::new(vec![Message::new(Author::App, WELCOME_MESSAGE)]),
            textarea: TextArea::prompt("Message"),
            bubble_list,
            scroll: Scroll::default(),
            page_scroll: Scroll::default(),
            analytics: Fetched::default(),
            report: Fetched::default(),
            pending_reveals: HashMap::new(),
            session_started: false,
            synced_chat: None,
        };
    }

    /// Requests the data the visible screen shows. The session is only
    /// started the first time the chat is shown.
    fn mount(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        match self.screen {
            Screen::Chat => {
                if !self.session_started {
                    self.session_started = true;
                    tx.send(Action::StartSession(self.session.clone()))?;
                }
            }
            Screen::Analytics => {
                let generation = self.analytics.start();
                tx.send(Action::FetchAnalytics {
                    user_id: self.session.user_id().to_string(),
                    generation,
                })?;
            }
            Screen::Report => {
                let generation = self.report.start();
                tx.send(Action::FetchReport {
                    user_id: self.session.user_id().to_string(),
                    generation,
                })?;
            }
        }

        return Ok(());
    }

    /// Commits the full text of every reply still being revealed, then stops
    /// the reveal tasks.
    fn leave_chat(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if self.pending_reveals.is_empty() {
            return Ok(());
        }

        for (index, text) in self.pending_reveals.drain() {
            self.chat.replace(index, &text);
        }
        tx.send(Action::CancelReveals())?;

        return Ok(());
    }

    fn select(&mut self, screen: Screen, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if screen == self.screen {
            return Ok(());
        }

        if self.screen == Screen::Chat {
            self.leave_chat(tx)?;
        }

        tracing::debug!(from = %self.screen, to = %screen, "Switching screen");
        self.screen = screen;
        self.page_scroll.first();
        return self.mount(tx);
    }

    fn submit_message(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        let text = self.textarea.lines().join("\n");
        if text.trim().is_empty() {
            return Ok(());
        }

        self.chat.append(Message::new(Author::Person, &text));
        self.textarea = TextArea::prompt("Message");
        self.scroll.last();

        tx.send(Action::SendMessage {
            user_id: self.session.user_id().to_string(),
            text,
        })?;

        return Ok(());
    }

    fn handle_reply(
        &mut self,
        res: Result<String, ApiError>,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        let body = match res {
            Ok(body) => body,
            Err(err) => {
                let reason = match err {
                    ApiError::Network(reason) => reason,
                    ApiError::Payload(reason) => reason,
                };
                self.chat.append(Message::new_with_type(
                    Author::Assistant,
                    MessageType::Error,
                    &format!("⚠️ Unable to reach the screening service: {reason}"),
                ));
                return Ok(());
            }
        };

        let text = ReplyText::parse(&body).display();
        let index = self.chat.append(Message::new(Author::Assistant, ""));

        // Reveals only run while the chat is visible.
        if self.screen != Screen::Chat {
            self.chat.replace(index, &text);
            return Ok(());
        }

        self.pending_reveals.insert(index, text.to_string());
        tx.send(Action::RevealReply { index, text })?;

        return Ok(());
    }

    fn handle_reveal_step(&mut self, index: usize, text: &str, done: bool) {
        if !self.pending_reveals.contains_key(&index) {
            return;
        }

        self.chat.replace(index, text);
        if done {
            self.pending_reveals.remove(&index);
        }
    }

    fn scroll_mut(&mut self) -> &mut Scroll {
        if self.screen == Screen::Chat {
            return &mut self.scroll;
        }
        return &mut self.page_scroll;
    }

    /// Rebuilds the chat bubbles for the given viewport. The bubbles are only
    /// rebuilt when the chat or the width changed. Follows new messages when
    /// the view was already scrolled to the bottom.
    pub fn sync_chat(&mut self, width: u16, height: u16) {
        let follow = self.scroll.is_at_last();
        let synced = Some((self.chat.revision(), width));
        if self.synced_chat != synced {
            self.bubble_list
                .set_messages(self.chat.messages(), usize::from(width));
            self.synced_chat = synced;
        }
        self.scroll.set_state(
            u16::try_from(self.bubble_list.len()).unwrap_or(u16::MAX),
            height,
        );

        if follow {
            self.scroll.last();
        }
    }
}

#[cfg(test)]
impl<'a> Workspace<'a> {
    pub fn is_revealing(&self, index: usize) -> bool {
        return self.pending_reveals.contains_key(&index);
    }

    pub fn synced_revision(&self) -> Option<u64> {
        return self.synced_chat.map(|(revision, _)| return revision);
    }
}

pub struct AppState<'a> {
    pub language: String,
    pub login: LoginForm<'a>,
    pub workspace: Option<Workspace<'a>>,
    pub last_known_height: u16,
    pub last_known_width: u16,
}

impl<'a> AppState<'a> {
    pub fn new(language: &str, user_id: &str, user_name: &str) -> AppState<'a> {
        return AppState {
            language: language.to_string(),
            login: LoginForm::new(user_id, user_name),
            workspace: None,
            last_known_height: 0,
            last_known_width: 0,
        };
    }

    pub fn is_logged_in(&self) -> bool {
        return self.workspace.is_some();
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    pub fn sync_dependants(&mut self) {
        let width = self.last_known_width;
        let height = self.last_known_height;
        if let Some(workspace) = self.workspace.as_mut() {
            workspace.sync_chat(width, height);
        }
    }

    /// Stops background work tied to the chat screen before exiting.
    pub fn shutdown(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if let Some(workspace) = self.workspace.as_mut() {
            workspace.leave_chat(tx)?;
        }
        return Ok(());
    }

    fn handle_login_event(
        &mut self,
        event: Event,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        match event {
            Event::KeyboardCTRLC() => {
                return Ok(true);
            }
            Event::KeyboardTab()
            | Event::KeyboardBackTab()
            | Event::UIScrollUp()
            | Event::UIScrollDown() => {
                self.login.toggle_focus();
            }
            Event::KeyboardCharInput(input) => {
                self.login.input(input);
            }
            Event::KeyboardPaste(text) => {
                self.login.paste(&text);
            }
            Event::KeyboardEnter() => {
                if let Ok(session) = self.login.submit(&self.language) {
                    tracing::info!(user_id = session.user_id(), "Logged in");
                    let mut workspace = Workspace::new(session);
                    workspace.mount(tx)?;
                    self.workspace = Some(workspace);
                    self.sync_dependants();
                }
            }
            _ => (),
        }

        return Ok(false);
    }

    /// Applies an event to the state. Returns true when the app should exit.
    pub fn handle_event(&mut self, event: Event, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        if !self.is_logged_in() {
            return self.handle_login_event(event, tx);
        }
        let workspace = match self.workspace.as_mut() {
            Some(workspace) => workspace,
            None => return Ok(false),
        };

        match event {
            Event::KeyboardCTRLC() => {
                workspace.leave_chat(tx)?;
                return Ok(true);
            }
            Event::KeyboardTab() => {
                let next = workspace.screen.next();
                workspace.select(next, tx)?;
            }
            Event::KeyboardBackTab() => {
                let previous = workspace.screen.previous();
                workspace.select(previous, tx)?;
            }
            Event::UISelectScreen(screen) => {
                workspace.select(screen, tx)?;
            }
            Event::KeyboardCTRLR() => {
                if workspace.screen != Screen::Chat {
                    workspace.mount(tx)?;
                }
            }
            Event::KeyboardEnter() => {
                if workspace.screen == Screen::Chat {
                    workspace.submit_message(tx)?;
                }
            }
            Event::KeyboardCharInput(input) => {
                if workspace.screen == Screen::Chat {
                    workspace.textarea.input(input);
                }
            }
            Event::KeyboardPaste(text) => {
                if workspace.screen == Screen::Chat {
                    workspace.textarea.insert_str(text);
                }
            }
            Event::UIScrollUp() => {
                workspace.scroll_mut().up();
            }
            Event::UIScrollDown() => {
                workspace.scroll_mut().down();
            }
            Event::UIScrollPageUp() => {
                workspace.scroll_mut().up_page();
            }
            Event::UIScrollPageDown() => {
                workspace.scroll_mut().down_page();
            }
            Event::ApiSessionStarted(res) | Event::ApiChatReply(res) => {
                workspace.handle_reply(res, tx)?;
            }
            Event::ApiAnalytics { generation, res } => {
                workspace.analytics.resolve(generation, res);
            }
            Event::ApiReport { generation, res } => {
                workspace.report.resolve(generation, res);
            }
            Event::RevealStep { index, text, done } => {
                workspace.handle_reveal_step(index, &text, done);
            }
            Event::UITick() => (),
        }

        self.sync_dependants();
        return Ok(false);
    }
}
