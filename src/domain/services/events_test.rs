use tui_textarea::Input;
use tui_textarea::Key;

use super::key_to_event;
use crate::domain::models::Event;

fn input(key: Key, ctrl: bool, alt: bool) -> Input {
    return Input { key, ctrl, alt };
}

#[test]
fn it_maps_shortcuts() {
    assert!(matches!(
        key_to_event(input(Key::Char('c'), true, false)),
        Event::KeyboardCTRLC()
    ));
    assert!(matches!(
        key_to_event(input(Key::Char('d'), true, false)),
        Event::UIScrollPageDown()
    ));
    assert!(matches!(
        key_to_event(input(Key::PageUp, false, false)),
        Event::UIScrollPageUp()
    ));
    assert!(matches!(
        key_to_event(input(Key::Up, false, false)),
        Event::UIScrollUp()
    ));
}

#[test]
fn it_splits_enter_into_submit_and_newline() {
    assert!(matches!(
        key_to_event(input(Key::Enter, false, false)),
        Event::KeyboardEnter()
    ));
    assert!(matches!(
        key_to_event(input(Key::Enter, false, true)),
        Event::KeyboardNewLine()
    ));
}

#[test]
fn it_passes_plain_characters_to_the_input() {
    match key_to_event(input(Key::Char('c'), false, false)) {
        Event::KeyboardCharInput(input) => assert!(matches!(input.key, Key::Char('c'))),
        _ => panic!("Wrong enum"),
    }
}
