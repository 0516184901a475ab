//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Title color
    pub title_color: Color,
    /// Border color
    pub border_color: Color,
    /// Background color
    pub background: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint text shown at the bottom (e.g., "Press Esc to close")
    pub hint: Option<Vec<Span<'a>>>,
    /// Maximum width of the dialog
    pub max_width: u16,
    /// Requested body scroll offset in rows
    pub scroll: u16,
}

/// Where a dialog landed on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogLayout {
    pub area: Rect,
    /// Body scroll offset after clamping to the content
    pub scroll: u16,
}

impl<'a> Default for DialogConfig<'a> {
    fn default() -> Self {
        Self {
            title: "Dialog",
            title_color: Color::White,
            border_color: Color::White,
            background: Color::Black,
            message: "",
            hint: None,
            max_width: 60,
            scroll: 0,
        }
    }
}

/// Render a centered dialog overlay.
///
/// The hint stays on the last inner row; a body taller than the screen
/// scrolls above it.
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) -> DialogLayout {
    let area = frame.area();
    let padding = 4u16; // 2 chars padding on each side
    let max_line_width = config.max_width.saturating_sub(padding) as usize;

    // Word-wrap the message
    let wrapped_lines = wrap_text(config.message, max_line_width);
    let line_count = wrapped_lines.len();

    // Calculate dialog dimensions
    let hint_width = config
        .hint
        .as_ref()
        .map_or(0, |spans| spans.iter().map(Span::width).sum::<usize>());
    let content_width = wrapped_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(config.title.chars().count())
        .max(hint_width) as u16;
    let dialog_width = (content_width + padding + 2)
        .min(config.max_width)
        .min(area.width); // +2 for borders

    // Height: title + blank + message lines + blank (if hint) + hint + borders
    let hint_lines = if config.hint.is_some() { 2 } else { 0 }; // blank + hint
    let dialog_height = (2 + line_count as u16 + hint_lines + 2)
        .max(5)
        .min(area.height); // +2 for borders

    // Center the dialog
    let dialog_x = area.x + (area.width.saturating_sub(dialog_width)) / 2;
    let dialog_y = area.y + (area.height.saturating_sub(dialog_height)) / 2;

    let dialog_area = Rect {
        x: dialog_x,
        y: dialog_y,
        width: dialog_width,
        height: dialog_height,
    };

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    // Build body
    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for line in wrapped_lines {
        content.push(Line::from(line));
    }

    let background = Style::default().bg(config.background);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.border_color))
        .style(background);
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let body_area = Rect {
        height: inner.height.saturating_sub(hint_lines),
        ..inner
    };
    let max_scroll = (content.len() as u16).saturating_sub(body_area.height);
    let scroll = config.scroll.min(max_scroll);
    frame.render_widget(
        Paragraph::new(content).scroll((scroll, 0)).style(background),
        body_area,
    );

    if let Some(hint_spans) = config.hint {
        if inner.height > 0 {
            let hint_area = Rect {
                y: inner.y + inner.height - 1,
                height: 1,
                ..inner
            };
            frame.render_widget(
                Paragraph::new(Line::from(hint_spans)).style(background),
                hint_area,
            );
        }
    }

    DialogLayout {
        area: dialog_area,
        scroll,
    }
}

/// Wrap text to fit within a maximum width, keeping each line's indentation
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let indent: String = paragraph.chars().take_while(|c| c.is_whitespace()).collect();
        let mut current_line = indent.clone();
        for word in paragraph.split_whitespace() {
            let current_len = current_line.chars().count();
            if current_len + word.chars().count() + 1 > max_width && current_len > indent.len() {
                lines.push(current_line);
                current_line = indent.clone();
            }
            if current_line.len() > indent.len() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if current_line.len() > indent.len() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_breaks_long_lines() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, ["one two", "three", "four"]);
    }

    #[test]
    fn test_wrap_keeps_indentation() {
        let lines = wrap_text("{\n  \"name\": \"Jane\"\n}", 40);
        assert_eq!(lines, ["{", "  \"name\": \"Jane\"", "}"]);
    }

    #[test]
    fn test_wrap_empty_text_yields_one_line() {
        assert_eq!(wrap_text("", 10), [""]);
    }

    mod rendering {
        use super::*;
        use pretty_assertions::assert_eq;
        use ratatui::{backend::TestBackend, Terminal};

        fn tall_message() -> String {
            (1..=30).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n")
        }

        fn render(scroll: u16) -> (DialogLayout, Vec<String>) {
            let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
            let message = tall_message();
            let mut layout = None;
            terminal
                .draw(|frame| {
                    layout = Some(render_dialog(
                        frame,
                        DialogConfig {
                            title: "Tall",
                            message: &message,
                            hint: Some(vec![Span::raw("[ Close ]")]),
                            scroll,
                            ..Default::default()
                        },
                    ));
                })
                .unwrap();
            let buffer = terminal.backend().buffer().clone();
            let rows = (0..buffer.area.height)
                .map(|y| {
                    (0..buffer.area.width)
                        .map(|x| buffer[(x, y)].symbol().to_string())
                        .collect()
                })
                .collect();
            (layout.unwrap(), rows)
        }

        #[test]
        fn test_hint_stays_on_last_inner_row_when_clipped() {
            let (layout, rows) = render(0);
            assert_eq!(layout.area.height, 12);
            let hint_row = (layout.area.y + layout.area.height - 2) as usize;
            assert!(rows[hint_row].contains("[ Close ]"));
            assert!(rows.iter().any(|r| r.contains("line 1 ")));
        }

        #[test]
        fn test_scroll_reaches_last_line_and_clamps() {
            let (layout, rows) = render(u16::MAX);
            // 32 body lines in 8 rows
            assert_eq!(layout.scroll, 24);
            assert!(rows.iter().any(|r| r.contains("line 30")));
            assert!(rows.iter().any(|r| r.contains("[ Close ]")));
        }
    }
}
