use tui_textarea::Input;

use super::ReplyTicket;
use super::SessionId;

pub enum Event {
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardEnter(),
    KeyboardNewLine(),
    KeyboardPaste(String),
    ReplyDue(SessionId, ReplyTicket),
    UIResize(),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}
