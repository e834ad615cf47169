use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use crate::app::{App, InputMode};
use crate::tui::AppEvent;

pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
        AppEvent::Resize(_, _) => {}
        AppEvent::Tick => app.tick_animation(),
        AppEvent::Chat(event) => app.handle_chat_event(event),
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keys that work in any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // Any key dismisses a notice
    if app.notice.is_some() {
        app.dismiss_notice();
        return;
    }

    if app.show_language_picker {
        handle_language_picker(app, key);
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Editing => handle_editing_mode(app, key),
    }
}

fn handle_language_picker(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.show_language_picker = false,
        KeyCode::Enter => app.select_language(),
        KeyCode::Char('j') | KeyCode::Down => app.language_picker_nav_down(),
        KeyCode::Char('k') | KeyCode::Up => app.language_picker_nav_up(),
        _ => {}
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('c') | KeyCode::Enter => app.open_chat(),
        KeyCode::Tab => app.toggle_chat(),
        KeyCode::Char('v') => {
            app.open_chat();
            app.start_voice();
        }
        KeyCode::Char('l') => app.next_language(),
        KeyCode::Char('h') => app.prev_language(),
        KeyCode::Char('L') => app.open_language_picker(),
        _ => {}
    }
}

fn handle_editing_mode(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('r') => app.start_voice(),
            KeyCode::Char('l') => app.open_language_picker(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Tab => app.toggle_chat(),
        KeyCode::Enter => app.submit_draft(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Delete => app.delete(),
        KeyCode::Left => app.cursor_left(),
        KeyCode::Right => app.cursor_right(),
        KeyCode::Home => app.cursor_home(),
        KeyCode::End => app.cursor_end(),
        KeyCode::Up => app.scroll_chat_up(1),
        KeyCode::Down => app.scroll_chat_down(1),
        KeyCode::PageUp => app.scroll_chat_up(app.chat_height.max(1) / 2),
        KeyCode::PageDown => app.scroll_chat_down(app.chat_height.max(1) / 2),
        KeyCode::Char(c) => app.insert_char(c),
        _ => {}
    }
}

/// Check if a point is within a rectangle
fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let in_chat = app
        .chat_area
        .map(|r| point_in_rect(mouse.column, mouse.row, r))
        .unwrap_or(false);

    if !in_chat || !app.chat.state().is_open() {
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollDown => app.scroll_chat_down(3),
        MouseEventKind::ScrollUp => app.scroll_chat_up(3),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use soilsense_core::{ChatEvent, ChatOptions, Language, VoiceCapture};
    use tokio::sync::mpsc;

    use super::*;

    fn app() -> (App, mpsc::UnboundedReceiver<ChatEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let app = App::new(Language::En, ChatOptions::default(), VoiceCapture::unsupported(), tx, None);
        (app, rx)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn press_ctrl(app: &mut App, c: char) {
        handle_event(app, AppEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_type_and_send_message() {
        let (mut app, mut rx) = app();
        press(&mut app, KeyCode::Char('c'));
        assert!(app.chat.state().is_open());
        assert_eq!(app.input_mode, InputMode::Editing);

        type_text(&mut app, "When to harvest?");
        press(&mut app, KeyCode::Enter);

        let messages = app.chat.state().messages();
        assert_eq!(messages.last().unwrap().text, "When to harvest?");
        assert_eq!(app.chat.state().draft(), "");

        let event = rx.recv().await.unwrap();
        handle_event(&mut app, AppEvent::Chat(event));
        let reply = &app.chat.state().messages().last().unwrap().text;
        assert!(reply.contains("When to harvest?"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_enter_on_blank_draft_does_nothing() {
        let (mut app, mut rx) = app();
        press(&mut app, KeyCode::Enter); // opens chat
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.chat.state().messages().len(), 1);
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_escape_closes_chat_and_keeps_draft() {
        let (mut app, _rx) = app();
        press(&mut app, KeyCode::Char('c'));
        type_text(&mut app, "q"); // typed, not quit
        press(&mut app, KeyCode::Esc);

        assert!(!app.should_quit);
        assert!(!app.chat.state().is_open());
        assert_eq!(app.chat.state().draft(), "q");

        press(&mut app, KeyCode::Tab);
        assert!(app.chat.state().is_open());
        press(&mut app, KeyCode::Tab);
        assert!(!app.chat.state().is_open());
    }

    #[test]
    fn test_voice_key_without_recognizer_shows_notice_then_dismisses() {
        let (mut app, _rx) = app();
        press(&mut app, KeyCode::Char('c'));
        press_ctrl(&mut app, 'r');
        assert!(app.notice.is_some());
        assert!(!app.chat.state().is_listening());

        press(&mut app, KeyCode::Char('x'));
        assert!(app.notice.is_none());
        assert_eq!(app.chat.state().draft(), "");
    }

    #[test]
    fn test_language_keys() {
        let (mut app, _rx) = app();
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.language, Language::Es);
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.language, Language::En);

        press(&mut app, KeyCode::Char('L'));
        assert!(app.show_language_picker);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.language, Language::Es);
        assert!(!app.show_language_picker);
    }

    #[test]
    fn test_ctrl_c_quits_from_chat() {
        let (mut app, _rx) = app();
        press(&mut app, KeyCode::Char('c'));
        press_ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn test_mouse_scroll_only_inside_chat() {
        let (mut app, _rx) = app();
        press(&mut app, KeyCode::Char('c'));
        app.chat_area = Some(Rect::new(10, 10, 20, 10));

        let scroll = |column, row| MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };

        handle_event(&mut app, AppEvent::Mouse(scroll(0, 0)));
        assert_eq!(app.chat_scroll, 0);
        handle_event(&mut app, AppEvent::Mouse(scroll(15, 15)));
        assert_eq!(app.chat_scroll, 3);
    }
}
