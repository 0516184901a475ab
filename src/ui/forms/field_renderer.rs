//! Field rendering utilities for forms

use crate::state::{FieldKind, FieldValue, FormField};
use crate::ui::palette::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field occupies
pub fn field_height(field: &FormField) -> u16 {
    if field.is_multiline {
        5
    } else {
        3
    }
}

/// Draw a form field, with its validation message when marked invalid
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    mark: Option<&str>,
    option_cursor: usize,
    palette: &Palette,
) {
    let border_style = match (mark, is_active) {
        (Some(_), _) => Style::default().fg(palette.error),
        (None, true) => Style::default().fg(palette.accent),
        (None, false) => Style::default().fg(palette.muted),
    };
    let cursor = if is_active { "▌" } else { "" };

    let content = if field.kind.has_options() || field.kind == FieldKind::Checkbox {
        Paragraph::new(option_line(field, is_active, option_cursor, palette))
    } else if field.is_multiline {
        let mut lines: Vec<Line> = field
            .as_text()
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(palette.accent)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(palette.accent),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        let display_value = field.display_value();
        let display_str = if display_value.is_empty() && !is_active {
            "(empty)".to_string()
        } else {
            display_value
        };
        let style = if is_active {
            Style::default().fg(palette.fg)
        } else {
            Style::default().fg(palette.muted)
        };
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(palette.accent)),
        ]))
    };

    let required = if field.required { " *" } else { "" };
    let mut block = Block::default()
        .title(format!(" {}{} ", field.label, required))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(message) = mark {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(palette.error),
        )));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// One-line rendering of a choice field's options
fn option_line<'a>(
    field: &'a FormField,
    is_active: bool,
    option_cursor: usize,
    palette: &Palette,
) -> Line<'a> {
    let highlight = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let normal = Style::default().fg(palette.fg);

    match &field.value {
        FieldValue::Choice(choice) if field.kind == FieldKind::Select => Line::from(vec![
            Span::styled("◂ ", highlight),
            Span::styled(
                choice.clone().unwrap_or_else(|| "Choose…".to_string()),
                normal,
            ),
            Span::styled(" ▸", highlight),
        ]),
        FieldValue::Choice(choice) => Line::from(
            field
                .options
                .iter()
                .map(|option| {
                    let dot = if choice.as_deref() == Some(option.as_str()) {
                        "(•)"
                    } else {
                        "( )"
                    };
                    Span::styled(format!("{dot} {option}  "), normal)
                })
                .collect::<Vec<_>>(),
        ),
        FieldValue::Checked(items) => Line::from(
            field
                .options
                .iter()
                .enumerate()
                .map(|(i, option)| {
                    let mark = if items.contains(option) { "[x]" } else { "[ ]" };
                    let style = if is_active && i == option_cursor {
                        highlight
                    } else {
                        normal
                    };
                    Span::styled(format!("{mark} {option}  "), style)
                })
                .collect::<Vec<_>>(),
        ),
        FieldValue::Flag(on) => Line::from(Span::styled(
            if *on { "[x] Yes" } else { "[ ] No" },
            if is_active { highlight } else { normal },
        )),
        _ => Line::from(field.display_value()),
    }
}
