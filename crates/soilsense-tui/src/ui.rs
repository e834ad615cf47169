use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use soilsense_core::dashboard::{CURRENT_CROPS, CURRENT_READING, RECOMMENDATIONS};
use soilsense_core::{ChatRole, Language};
use unicode_width::UnicodeWidthChar;
use crate::app::{App, InputMode};

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: header, body, footer
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(app, frame, header_area);
    render_dashboard(app, frame, body_area);
    render_footer(app, frame, footer_area);

    if app.chat.state().is_open() {
        render_chat(app, frame, body_area);
    } else {
        app.chat_area = None;
    }

    // Render popups (in order of priority)
    if app.notice.is_some() {
        render_notice(app, frame, area);
    } else if app.show_language_picker {
        render_language_picker(app, frame, area);
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(format!(" {} ", app.t().title), Style::default().fg(Color::White).bold()),
        Span::styled(format!("[{}]", app.language.display_name()), Style::default().fg(Color::Black)),
        Span::raw(" "),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::Black),
        ),
    ]);

    let header = Paragraph::new(title).style(Style::default().bg(Color::Green));
    frame.render_widget(header, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default().bg(Color::Green).fg(Color::Black),
        InputMode::Editing => Style::default().bg(Color::Yellow).fg(Color::Black),
    };

    let mode_text = match app.input_mode {
        InputMode::Normal => " DASHBOARD ",
        InputMode::Editing => " CHAT ",
    };

    // Key style: dark background with bright text for visibility on both light/dark terminals
    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().bg(Color::Black).fg(Color::White);

    let hints = if app.show_language_picker {
        vec![
            Span::styled(" j/k ", key_style),
            Span::styled(" nav ", label_style),
            Span::styled(" Enter ", key_style),
            Span::styled(" select ", label_style),
            Span::styled(" Esc ", key_style),
            Span::styled(" cancel ", label_style),
        ]
    } else {
        match app.input_mode {
            InputMode::Normal => vec![
                Span::styled(" c ", key_style),
                Span::styled(" chat ", label_style),
                Span::styled(" v ", key_style),
                Span::styled(" voice ", label_style),
                Span::styled(" h/l ", key_style),
                Span::styled(" language ", label_style),
                Span::styled(" L ", key_style),
                Span::styled(" pick language ", label_style),
                Span::styled(" q ", key_style),
                Span::styled(" quit ", label_style),
            ],
            InputMode::Editing => vec![
                Span::styled(" Enter ", key_style),
                Span::styled(" send ", label_style),
                Span::styled(" ^R ", key_style),
                Span::styled(" voice ", label_style),
                Span::styled(" ^L ", key_style),
                Span::styled(" language ", label_style),
                Span::styled(" PgUp/PgDn ", key_style),
                Span::styled(" scroll ", label_style),
                Span::styled(" Esc ", key_style),
                Span::styled(" close ", label_style),
            ],
        }
    };

    let footer_content = Line::from(
        vec![
            Span::styled(mode_text, mode_style),
            Span::styled(" ", label_style),
        ]
        .into_iter()
        .chain(hints)
        .collect::<Vec<_>>(),
    );

    let footer = Paragraph::new(footer_content).style(Style::default().bg(Color::Black));
    frame.render_widget(footer, area);
}

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))
}

fn metric_line(label: &str, value: &str, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled("● ", Style::default().fg(color)),
        Span::raw(format!("{}: ", label)),
        Span::styled(value.to_string(), Style::default().add_modifier(Modifier::BOLD)),
    ])
}

fn render_dashboard(app: &App, frame: &mut Frame, area: Rect) {
    let t = app.t();

    let [cards_area, gallery_area] = Layout::vertical([
        Constraint::Percentage(55),
        Constraint::Percentage(45),
    ])
    .areas(area);

    let [metrics_area, npk_area, crops_area] = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(cards_area);

    // Environmental metrics
    let reading = CURRENT_READING;
    let metrics = Paragraph::new(vec![
        metric_line(t.temperature, reading.temperature, Color::Red),
        Line::default(),
        metric_line(t.humidity, reading.humidity, Color::Blue),
        Line::default(),
        metric_line(t.soil_moisture, reading.soil_moisture, Color::Green),
    ])
    .block(panel(t.environmental_metrics))
    .wrap(Wrap { trim: true });
    frame.render_widget(metrics, metrics_area);

    // NPK values
    let nutrient = |label: &str, value: &str| {
        vec![
            Line::from(Span::styled(label.to_string(), Style::default().fg(Color::Gray).bold())),
            Line::from(value.to_string()),
        ]
    };
    let mut npk_lines = nutrient(t.nitrogen, reading.npk.nitrogen);
    npk_lines.push(Line::default());
    npk_lines.extend(nutrient(t.phosphorus, reading.npk.phosphorus));
    npk_lines.push(Line::default());
    npk_lines.extend(nutrient(t.potassium, reading.npk.potassium));
    let npk = Paragraph::new(npk_lines)
        .block(panel(t.npk_values))
        .wrap(Wrap { trim: true });
    frame.render_widget(npk, npk_area);

    // Crop recommendations
    let items: Vec<ListItem> = RECOMMENDATIONS
        .iter()
        .map(|crop| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(crop.name, Style::default().bold()),
                    Span::raw(" "),
                    Span::styled(crop.confidence, Style::default().fg(Color::Green)),
                ]),
                Line::from(Span::styled(crop.reason, Style::default().fg(Color::DarkGray))),
            ])
        })
        .collect();
    frame.render_widget(List::new(items).block(panel(t.recommended_crops)), crops_area);

    // Current crops gallery
    let gallery_block = panel(t.current_crops);
    let gallery_inner = gallery_block.inner(gallery_area);
    frame.render_widget(gallery_block, gallery_area);

    let columns = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(gallery_inner);

    for (crop, column) in CURRENT_CROPS.iter().zip(columns.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(crop.name, Style::default().bold())),
            Line::from(format!("{}: {}", t.growth_stage, crop.stage.label(t))),
            Line::from(Span::styled(
                format!("[{}]", crop.image_alt),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                crop.image_url,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::UNDERLINED),
            )),
        ])
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)))
        .wrap(Wrap { trim: true });
        frame.render_widget(card, *column);
    }
}

/// Chat panel anchored to the bottom-right of `area`
fn chat_rect(area: Rect) -> Rect {
    let width = 56.min(area.width);
    let height = 24.min(area.height);
    Rect::new(
        area.x + area.width - width,
        area.y + area.height - height,
        width,
        height,
    )
}

fn render_chat(app: &mut App, frame: &mut Frame, area: Rect) {
    let popup_area = chat_rect(area);
    frame.render_widget(Clear, popup_area);

    let t = app.t();
    let state = app.chat.state();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(Span::styled(format!(" {} ", t.chat_title), Style::default().bold()))
        .title_bottom(Line::from(" Esc ").right_aligned());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let [transcript_area, input_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(inner);

    // Store area for mouse hit-testing and dimensions for scroll calculations
    app.chat_area = Some(transcript_area);
    app.chat_height = transcript_area.height;
    app.chat_width = transcript_area.width;

    let mut lines: Vec<Line> = Vec::new();
    for msg in state.messages() {
        match msg.role {
            ChatRole::User => {
                lines.push(Line::from(Span::styled(
                    "You:",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )).right_aligned());
                lines.push(Line::from(msg.text.as_str()).right_aligned());
            }
            ChatRole::Assistant => {
                lines.push(Line::from(Span::styled(
                    format!("{}:", t.chat_title),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )));
                for line in msg.text.lines() {
                    lines.push(Line::from(line));
                }
            }
        }
        lines.push(Line::default());
    }

    if app.chat.pending_replies() > 0 {
        lines.push(Line::from(Span::styled(
            format!("{}:", t.chat_title),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        // Animated ellipsis
        let dots = ".".repeat((app.animation_frame as usize) + 1);
        lines.push(Line::from(Span::styled(
            dots,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
    }

    let transcript = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .scroll((app.chat_scroll, 0));
    frame.render_widget(transcript, transcript_area);

    // Draft input: mic state in the title
    let (input_title, input_border) = if state.is_listening() {
        let dots = ".".repeat((app.animation_frame as usize) + 1);
        let title = Span::styled(format!(" ● {}{} ", t.listening, dots), Style::default().fg(Color::Red));
        (title, Color::Red)
    } else if app.chat.voice_supported() {
        (Span::raw(" ^R mic "), Color::Yellow)
    } else {
        // No recognizer: hint stays visible but dimmed
        let dimmed = Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT);
        (Span::styled(" ^R mic ", dimmed), Color::Yellow)
    };

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(input_border))
        .title(input_title);

    // Inner width = total width - 2 (for borders)
    let inner_width = input_area.width.saturating_sub(2) as usize;
    let (visible_text, cursor_x) = input_window(state.draft(), app.draft_cursor, inner_width);

    let input = if state.draft().is_empty() {
        Paragraph::new(Span::styled(t.chat_placeholder, Style::default().fg(Color::DarkGray)))
    } else {
        Paragraph::new(visible_text).style(Style::default().fg(Color::Cyan))
    };
    frame.render_widget(input.block(input_block), input_area);

    // Show cursor when editing
    if app.input_mode == InputMode::Editing && app.notice.is_none() && !app.show_language_picker {
        frame.set_cursor_position((input_area.x + cursor_x + 1, input_area.y + 1));
    }
}

/// Part of `draft` that fits in `width` terminal columns with the cursor in
/// view, and the cursor's column inside it. `cursor` counts chars; columns
/// come from display width, so combining marks take none.
fn input_window(draft: &str, cursor: usize, width: usize) -> (String, u16) {
    if width == 0 {
        return (String::new(), 0);
    }

    let chars: Vec<(char, usize)> = draft.chars().map(|c| (c, c.width().unwrap_or(0))).collect();
    let cursor = cursor.min(chars.len());
    let cursor_col: usize = chars[..cursor].iter().map(|(_, w)| w).sum();

    // Scroll right until the cursor cell is inside the window
    let mut start = 0;
    let mut skipped = 0;
    while cursor_col - skipped >= width && start < cursor {
        skipped += chars[start].1;
        start += 1;
    }

    let mut visible = String::new();
    let mut used = 0;
    for &(c, w) in &chars[start..] {
        if used + w > width {
            break;
        }
        visible.push(c);
        used += w;
    }

    (visible, (cursor_col - skipped) as u16)
}

/// Centered popup of the given size, clamped to `area`
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn render_language_picker(app: &mut App, frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(area, 36, Language::ALL.len() as u16 + 2);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", app.t().select_language));

    let items: Vec<ListItem> = Language::ALL
        .iter()
        .map(|lang| {
            let style = if *lang == app.language {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!(" {} ({}) ", lang.display_name(), lang.code())).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, popup_area, &mut app.language_picker_state);
}

fn render_notice(app: &App, frame: &mut Frame, area: Rect) {
    let Some(notice) = &app.notice else {
        return;
    };

    let popup_area = centered_rect(area, 50, 5);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" ! ");

    let paragraph = Paragraph::new(notice.as_str())
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup_area);
}
