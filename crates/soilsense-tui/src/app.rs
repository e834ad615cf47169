use std::path::PathBuf;

use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use soilsense_core::{
    ChatController, ChatEvent, ChatOptions, ChatState, Config, Error, EventOutcome, Language,
    TranslationSet, VoiceCapture,
};
use tokio::sync::mpsc;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Chat panel is open and keys go to the draft
    Editing,
}

pub struct App {
    // Core state
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub language: Language,

    // Chat state
    pub chat: ChatController,
    pub draft_cursor: usize, // cursor position in the draft, in chars
    pub chat_scroll: u16,
    pub chat_height: u16, // Height of transcript area for scroll calculations
    pub chat_width: u16,  // Width of transcript area for wrap calculations

    // Animation state
    pub animation_frame: u8, // 0-2 for ellipsis animation

    // Language picker state
    pub show_language_picker: bool,
    pub language_picker_state: ListState,

    // User-visible notice (e.g. voice unsupported), dismissed by any key
    pub notice: Option<String>,

    // Panel area for mouse hit-testing (updated during render)
    pub chat_area: Option<Rect>,

    // Where the chosen language is remembered; None disables saving
    config_path: Option<PathBuf>,
}

impl App {
    pub fn new(
        language: Language,
        options: ChatOptions,
        voice: VoiceCapture,
        chat_events: mpsc::UnboundedSender<ChatEvent>,
        config_path: Option<PathBuf>,
    ) -> Self {
        let state = ChatState::with_greeting(language.translations().greeting);
        let chat = ChatController::new(state, options, voice, chat_events);

        Self {
            should_quit: false,
            input_mode: InputMode::Normal,
            language,

            chat,
            draft_cursor: 0,
            chat_scroll: 0,
            chat_height: 0,
            chat_width: 0,

            animation_frame: 0,

            show_language_picker: false,
            language_picker_state: ListState::default(),

            notice: None,

            chat_area: None,

            config_path,
        }
    }

    /// Strings for the current language
    pub fn t(&self) -> &'static TranslationSet {
        self.language.translations()
    }

    pub fn quit(&mut self) {
        self.chat.shutdown();
        self.should_quit = true;
    }

    // Chat visibility
    pub fn open_chat(&mut self) {
        self.chat.open();
        self.input_mode = InputMode::Editing;
        self.draft_cursor = self.draft_len();
        self.scroll_chat_to_bottom();
    }

    pub fn close_chat(&mut self) {
        self.chat.close();
        self.input_mode = InputMode::Normal;
    }

    pub fn toggle_chat(&mut self) {
        if self.chat.state().is_open() {
            self.close_chat();
        } else {
            self.open_chat();
        }
    }

    pub fn submit_draft(&mut self) {
        match self.chat.submit_draft() {
            Ok(()) => {
                self.draft_cursor = 0;
                self.scroll_chat_to_bottom();
            }
            Err(Error::EmptyInput) => {}
            Err(e) => tracing::warn!(error = %e, "could not send message"),
        }
    }

    pub fn start_voice(&mut self) {
        match self.chat.start_capture(self.language) {
            Ok(()) => {}
            Err(Error::UnsupportedCapability) => {
                self.notice = Some(self.t().voice_unsupported.to_string());
            }
            Err(Error::CaptureBusy) => tracing::debug!("already listening"),
            Err(e) => tracing::warn!(error = %e, "could not start voice capture"),
        }
    }

    /// Apply a reply or capture callback and refresh the view.
    pub fn handle_chat_event(&mut self, event: ChatEvent) {
        match self.chat.handle_event(event) {
            EventOutcome::TranscriptChanged => self.scroll_chat_to_bottom(),
            EventOutcome::DraftReplaced => self.draft_cursor = self.draft_len(),
            EventOutcome::ListeningChanged | EventOutcome::Ignored => {}
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // Language selection
    pub fn set_language(&mut self, language: Language) {
        if language == self.language {
            return;
        }
        self.language = language;
        tracing::info!(language = language.code(), "language changed");

        if let Some(path) = &self.config_path {
            if let Err(e) = Config::save_language(path, language) {
                tracing::warn!(error = %e, "could not save language");
            }
        }
    }

    pub fn next_language(&mut self) {
        self.set_language(self.language.next());
    }

    pub fn prev_language(&mut self) {
        self.set_language(self.language.prev());
    }

    pub fn open_language_picker(&mut self) {
        self.language_picker_state.select(Some(self.language.index()));
        self.show_language_picker = true;
    }

    pub fn language_picker_nav_down(&mut self) {
        let len = Language::ALL.len();
        let i = self.language_picker_state.selected().unwrap_or(0);
        self.language_picker_state.select(Some((i + 1).min(len - 1)));
    }

    pub fn language_picker_nav_up(&mut self) {
        let i = self.language_picker_state.selected().unwrap_or(0);
        self.language_picker_state.select(Some(i.saturating_sub(1)));
    }

    pub fn select_language(&mut self) {
        if let Some(language) = self
            .language_picker_state
            .selected()
            .and_then(|i| Language::ALL.get(i).copied())
        {
            self.set_language(language);
        }
        self.show_language_picker = false;
    }

    // Draft editing
    fn draft_len(&self) -> usize {
        self.chat.state().draft().chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        self.chat.insert_draft_char(self.draft_cursor, c);
        self.draft_cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.draft_cursor > 0 && self.chat.remove_draft_char(self.draft_cursor - 1) {
            self.draft_cursor -= 1;
        }
    }

    pub fn delete(&mut self) {
        self.chat.remove_draft_char(self.draft_cursor);
    }

    pub fn cursor_left(&mut self) {
        self.draft_cursor = self.draft_cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.draft_cursor = (self.draft_cursor + 1).min(self.draft_len());
    }

    pub fn cursor_home(&mut self) {
        self.draft_cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.draft_cursor = self.draft_len();
    }

    // Transcript scrolling
    pub fn scroll_chat_up(&mut self, lines: u16) {
        self.chat_scroll = self.chat_scroll.saturating_sub(lines);
    }

    pub fn scroll_chat_down(&mut self, lines: u16) {
        self.chat_scroll = self.chat_scroll.saturating_add(lines);
    }

    /// Tick animation frame (called by Tick event)
    pub fn tick_animation(&mut self) {
        if self.chat.pending_replies() > 0 || self.chat.state().is_listening() {
            self.animation_frame = (self.animation_frame + 1) % 3;
        }
    }

    /// Scroll transcript so the newest message (and typing indicator) is visible
    pub fn scroll_chat_to_bottom(&mut self) {
        // Use actual chat width for wrap calculation, default to 40 if not set
        let wrap_width = if self.chat_width > 0 {
            self.chat_width as usize
        } else {
            40
        };

        let mut total_lines: u16 = 0;

        for msg in self.chat.state().messages() {
            total_lines = total_lines.saturating_add(1); // Role line
            for line in msg.text.lines() {
                // Terminal columns, so combining marks and wide glyphs count correctly
                let columns = line.width();
                let wrapped = if columns == 0 {
                    1 // Empty line still takes one line
                } else {
                    (columns / wrap_width) + 1
                };
                total_lines = total_lines.saturating_add(wrapped as u16);
            }
            total_lines = total_lines.saturating_add(1); // Blank line after message
        }

        if self.chat.pending_replies() > 0 {
            total_lines = total_lines.saturating_add(2); // Label + typing indicator
        }

        let visible_height = if self.chat_height > 0 {
            self.chat_height
        } else {
            16
        };

        self.chat_scroll = total_lines.saturating_sub(visible_height);
    }
}
