use tui_textarea::Input;

use super::ApiError;
use super::Report;
use super::Screen;

pub enum Event {
    ApiSessionStarted(Result<String, ApiError>),
    ApiChatReply(Result<String, ApiError>),
    ApiAnalytics {
        generation: u64,
        res: Result<String, ApiError>,
    },
    ApiReport {
        generation: u64,
        res: Result<Report, ApiError>,
    },
    RevealStep { index: usize, text: String, done: bool },
    KeyboardBackTab(),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardCTRLR(),
    KeyboardEnter(),
    KeyboardPaste(String),
    KeyboardTab(),
    UIScrollDown(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UIScrollUp(),
    UISelectScreen(Screen),
    UITick(),
}
