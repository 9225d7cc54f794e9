use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::detail::DetailTab;
use crate::navigation::Section;

/// Which part of the UI receives keys. Overlays take precedence over screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Page,
    Gallery,
    Detail,
    Chat,
    Contact,
}

/// User actions from keyboard events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Back,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    ScrollTop,
    JumpTo(Section),
    OpenGallery,
    CycleAboutTab,
    CycleSkillFilter,
    OpenContact,
    ToggleChat,
    Confirm,
    NextTag,
    PrevTag,
    ResetFilters,
    Input(char),
    DeleteChar,
    NextTab,
    PrevTab,
    SelectTab(DetailTab),
    NextImage,
    PrevImage,
    TogglePlayback,
    CycleLink,
    CopyLink,
    NextField,
    PrevField,
    Submit,
    None,
}

/// Poll for keyboard events and convert to actions for the current mode
pub fn poll_event(timeout: Duration, mode: InputMode) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind != KeyEventKind::Release
    {
        return Ok(key_to_action(key, mode));
    }
    Ok(Action::None)
}

pub fn key_to_action(key: KeyEvent, mode: InputMode) -> Action {
    // Global bindings
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Action::Quit,
        (KeyCode::Char('a'), KeyModifiers::CONTROL) => return Action::ToggleChat,
        _ => {}
    }

    match mode {
        InputMode::Page => page_action(key),
        InputMode::Gallery => gallery_action(key),
        InputMode::Detail => detail_action(key),
        InputMode::Chat => chat_action(key),
        InputMode::Contact => contact_action(key),
    }
}

fn is_plain(modifiers: KeyModifiers) -> bool {
    modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT
}

fn page_action(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown | KeyCode::Char(' ') => Action::PageDown,
        KeyCode::Home | KeyCode::Char('t') => Action::ScrollTop,
        KeyCode::Char('1') => Action::JumpTo(Section::Home),
        KeyCode::Char('2') => Action::JumpTo(Section::About),
        KeyCode::Char('3') => Action::JumpTo(Section::Skills),
        KeyCode::Char('4') => Action::JumpTo(Section::Projects),
        KeyCode::Char('5') => Action::JumpTo(Section::Contact),
        KeyCode::Char('g') | KeyCode::Enter => Action::OpenGallery,
        KeyCode::Char('a') => Action::CycleAboutTab,
        KeyCode::Char('f') => Action::CycleSkillFilter,
        KeyCode::Char('m') => Action::OpenContact,
        KeyCode::Char('c') => Action::ToggleChat,
        _ => Action::None,
    }
}

fn gallery_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Action::Back,
        (KeyCode::Up, _) | (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::MoveUp,
        (KeyCode::Down, _) | (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::MoveDown,
        (KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::PageDown, _) => Action::PageDown,
        (KeyCode::Enter, _) => Action::Confirm,
        (KeyCode::Tab, _) => Action::NextTag,
        (KeyCode::BackTab, _) => Action::PrevTag,
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => Action::ResetFilters,
        (KeyCode::Backspace, _) => Action::DeleteChar,
        (KeyCode::Char(c), m) if is_plain(m) => Action::Input(c),
        _ => Action::None,
    }
}

fn detail_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('q'), _) => Action::Back,
        (KeyCode::Right, _) | (KeyCode::Tab, _) => Action::NextTab,
        (KeyCode::Left, _) | (KeyCode::BackTab, _) => Action::PrevTab,
        (KeyCode::Char('1'), _) => Action::SelectTab(DetailTab::Overview),
        (KeyCode::Char('2'), _) => Action::SelectTab(DetailTab::Technologies),
        (KeyCode::Char('3'), _) => Action::SelectTab(DetailTab::Gallery),
        (KeyCode::Char('4'), _) => Action::SelectTab(DetailTab::Explainer),
        (KeyCode::Char(']'), _) | (KeyCode::Char('l'), _) => Action::NextImage,
        (KeyCode::Char('['), _) | (KeyCode::Char('h'), _) => Action::PrevImage,
        (KeyCode::Char(' '), _) => Action::TogglePlayback,
        (KeyCode::Char('o'), _) => Action::CycleLink,
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::CopyLink,
        (KeyCode::Char('c'), _) => Action::ToggleChat,
        _ => Action::None,
    }
}

fn chat_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Action::ToggleChat,
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Backspace, _) => Action::DeleteChar,
        (KeyCode::Char(c), m) if is_plain(m) => Action::Input(c),
        _ => Action::None,
    }
}

fn contact_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Action::Back,
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => Action::Submit,
        (KeyCode::Tab, _) | (KeyCode::Down, _) => Action::NextField,
        (KeyCode::BackTab, _) | (KeyCode::Up, _) => Action::PrevField,
        (KeyCode::Enter, _) => Action::Confirm,
        (KeyCode::Backspace, _) => Action::DeleteChar,
        (KeyCode::Char(c), m) if is_plain(m) => Action::Input(c),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_global_bindings_in_every_mode() {
        for mode in [
            InputMode::Page,
            InputMode::Gallery,
            InputMode::Detail,
            InputMode::Chat,
            InputMode::Contact,
        ] {
            assert_eq!(key_to_action(ctrl('c'), mode), Action::Quit);
            assert_eq!(key_to_action(ctrl('a'), mode), Action::ToggleChat);
        }
    }

    #[test]
    fn test_page_navigation() {
        assert_eq!(key_to_action(key(KeyCode::Char('j')), InputMode::Page), Action::MoveDown);
        assert_eq!(key_to_action(key(KeyCode::Up), InputMode::Page), Action::MoveUp);
        assert_eq!(key_to_action(key(KeyCode::Home), InputMode::Page), Action::ScrollTop);
        assert_eq!(
            key_to_action(key(KeyCode::Char('3')), InputMode::Page),
            Action::JumpTo(Section::Skills)
        );
        assert_eq!(key_to_action(key(KeyCode::Char('q')), InputMode::Page), Action::Quit);
    }

    #[test]
    fn test_gallery_typing_goes_to_search() {
        assert_eq!(key_to_action(key(KeyCode::Char('q')), InputMode::Gallery), Action::Input('q'));
        assert_eq!(
            key_to_action(
                KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT),
                InputMode::Gallery
            ),
            Action::Input('R')
        );
        assert_eq!(key_to_action(key(KeyCode::Backspace), InputMode::Gallery), Action::DeleteChar);
        assert_eq!(key_to_action(ctrl('r'), InputMode::Gallery), Action::ResetFilters);
        assert_eq!(key_to_action(key(KeyCode::Tab), InputMode::Gallery), Action::NextTag);
        assert_eq!(key_to_action(key(KeyCode::Esc), InputMode::Gallery), Action::Back);
    }

    #[test]
    fn test_detail_bindings() {
        assert_eq!(key_to_action(key(KeyCode::Right), InputMode::Detail), Action::NextTab);
        assert_eq!(
            key_to_action(key(KeyCode::Char('4')), InputMode::Detail),
            Action::SelectTab(DetailTab::Explainer)
        );
        assert_eq!(
            key_to_action(key(KeyCode::Char(' ')), InputMode::Detail),
            Action::TogglePlayback
        );
        assert_eq!(key_to_action(ctrl('y'), InputMode::Detail), Action::CopyLink);
        assert_eq!(key_to_action(key(KeyCode::Char(']')), InputMode::Detail), Action::NextImage);
    }

    #[test]
    fn test_chat_bindings() {
        assert_eq!(key_to_action(key(KeyCode::Char('c')), InputMode::Chat), Action::Input('c'));
        assert_eq!(key_to_action(key(KeyCode::Enter), InputMode::Chat), Action::Submit);
        assert_eq!(key_to_action(key(KeyCode::Esc), InputMode::Chat), Action::ToggleChat);
    }

    #[test]
    fn test_contact_bindings() {
        assert_eq!(key_to_action(key(KeyCode::Tab), InputMode::Contact), Action::NextField);
        assert_eq!(key_to_action(ctrl('s'), InputMode::Contact), Action::Submit);
        assert_eq!(key_to_action(key(KeyCode::Enter), InputMode::Contact), Action::Confirm);
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(key_to_action(key(KeyCode::F(1)), InputMode::Page), Action::None);
    }
}
