//! Submission confirmation and validation failure dialog

use super::base::{render_dialog, DialogConfig, DialogLayout};
use crate::state::{DialogBody, DialogContent};
use crate::ui::palette::Palette;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
    Frame,
};

/// Render the open page dialog, its body scrolled by `scroll` rows
pub fn render_page_dialog(
    frame: &mut Frame,
    content: &DialogContent,
    palette: &Palette,
    scroll: u16,
) -> DialogLayout {
    let (message, accent) = match &content.body {
        DialogBody::Confirmation { entries, json } => {
            let mut message: Vec<String> = entries
                .iter()
                .map(|(label, value)| format!("{label}: {value}"))
                .collect();
            message.push(String::new());
            message.push(json.clone());
            (message.join("\n"), palette.success)
        }
        DialogBody::Errors { messages } => (
            messages
                .iter()
                .map(|m| format!("• {m}"))
                .collect::<Vec<_>>()
                .join("\n"),
            palette.error,
        ),
    };

    let key_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::styled("[ Close ]", key_style),
        Span::raw("  "),
        Span::styled("Esc", key_style),
        Span::raw(" or click outside to close · "),
        Span::styled("↑↓", key_style),
        Span::raw(" scroll"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: &content.title,
            title_color: accent,
            border_color: accent,
            background: palette.bg,
            message: &message,
            hint: Some(hint),
            max_width: 70,
            scroll,
        },
    )
}
