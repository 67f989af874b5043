use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::app::{App, Mode};

/// Render the whole frame: header/input row, list, status row.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.clamp_cursor();

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(frame.area());

    render_header(frame, app, rows[0]);
    render_list(frame, app, rows[1]);
    render_status_row(frame, app, rows[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;
    let line = match app.mode {
        Mode::Insert => Line::from(vec![
            Span::styled(" Enter a new to-do: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(truncate_to_width(&app.input, width.saturating_sub(22))),
            Span::styled("\u{258C}", Style::default().add_modifier(Modifier::DIM)), // ▌ cursor
        ]),
        _ => {
            let dirty = if app.list.is_dirty() { " *" } else { "" };
            Line::from(Span::styled(
                truncate_to_width(&format!(" To Do — {}{}", app.path.display(), dirty), width),
                Style::default().add_modifier(Modifier::BOLD),
            ))
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.list.is_empty() {
        let empty = Paragraph::new(" List is empty — press a to add an item")
            .style(Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(empty, area);
        return;
    }

    let height = area.height as usize;
    if height == 0 {
        return;
    }

    // Keep the cursor inside the visible window
    if let Some(cursor) = app.cursor {
        if cursor < app.scroll_offset {
            app.scroll_offset = cursor;
        } else if cursor >= app.scroll_offset + height {
            app.scroll_offset = cursor + 1 - height;
        }
    }
    app.scroll_offset = app.scroll_offset.min(app.list.len().saturating_sub(1));

    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();
    for (i, item) in app
        .list
        .items()
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
    {
        let is_cursor = app.cursor == Some(i);
        let num_style = Style::default().add_modifier(Modifier::DIM);
        let item_style = if is_cursor {
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {:>3}  ", i + 1), num_style),
            Span::styled(truncate_to_width(item, width.saturating_sub(6)), item_style),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;

    let line = match app.mode {
        Mode::ConfirmQuit => Line::from(Span::styled(
            " Save before quitting?  y save and quit · n discard · esc cancel",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Mode::Insert => status_with_hints(app, width, "enter add · esc cancel"),
        Mode::Navigate => status_with_hints(
            app,
            width,
            "a add · t top · b bottom · K raise · J lower · d delete · s save · q quit",
        ),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Status message on the left, dimmed key hints right-aligned (when enabled).
fn status_with_hints(app: &App, width: usize, hints: &str) -> Line<'static> {
    let message = app.status.clone().unwrap_or_default();
    let mut spans = vec![Span::raw(format!(" {message}"))];

    if app.config.ui.show_key_hints {
        let used = UnicodeWidthStr::width(message.as_str()) + 1;
        let hint_width = UnicodeWidthStr::width(hints);
        if used + hint_width < width {
            spans.push(Span::raw(" ".repeat(width - used - hint_width)));
            spans.push(Span::styled(
                hints.to_string(),
                Style::default().add_modifier(Modifier::DIM),
            ));
        }
    }
    Line::from(spans)
}

/// Truncate to a display width, ending with `…` when cut.
fn truncate_to_width(text: &str, max: usize) -> String {
    if UnicodeWidthStr::width(text) <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
