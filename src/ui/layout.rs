//! Layout components (header, navigation panel, footer)

use super::palette::Palette;
use crate::app::App;
use crate::platform::{MENU_SHORTCUT, SUBMIT_SHORTCUT, THEME_SHORTCUT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Areas of the page
pub struct PageLayout {
    pub header: Rect,
    pub nav: Option<Rect>,
    pub form: Rect,
    pub side: Rect,
    pub footer: Rect,
}

/// Split the screen into header, optional nav panel, content and footer
pub fn create_layout(area: Rect, nav_open: bool, nav_links: usize) -> PageLayout {
    let nav_height = if nav_open { nav_links as u16 + 2 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),          // Header
            Constraint::Length(nav_height), // Navigation panel
            Constraint::Min(0),             // Content
            Constraint::Length(1),          // Footer
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[2]);

    PageLayout {
        header: rows[0],
        nav: nav_open.then_some(rows[1]),
        form: columns[0],
        side: columns[1],
        footer: rows[3],
    }
}

/// Site title, menu toggle and theme toggle
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let ctx = &app.page.ctx;
    let menu = if ctx.nav.open { "✕ Menu" } else { "☰ Menu" };
    let title = match ctx.nav.current_link() {
        Some(link) => format!(" folio · {} ", link.label),
        None => " folio ".to_string(),
    };
    let line = Line::from(vec![
        Span::styled(
            title,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {menu} [{MENU_SHORTCUT}, expanded={}] ", ctx.nav.aria_expanded()),
            Style::default().fg(palette.fg),
        ),
        Span::styled(
            format!(
                " {} {} [{THEME_SHORTCUT}] ",
                ctx.theme.toggle_icon(),
                ctx.theme.toggle_label()
            ),
            Style::default().fg(palette.fg),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(palette.bg)), area);
}

/// Navigation links, the current page marked
pub fn draw_nav(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let lines: Vec<Line> = app
        .page
        .ctx
        .nav
        .links
        .iter()
        .enumerate()
        .map(|(i, link)| {
            let (marker, style) = if link.current {
                (
                    "▸",
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (" ", Style::default().fg(palette.fg))
            };
            Line::from(Span::styled(
                format!("{marker} {} {}  ({})", i + 1, link.label, link.href),
                style,
            ))
        })
        .collect();

    let block = Block::default()
        .title(" Navigation · 1-9 open · Esc close ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Year, shortcut help and status message
pub fn draw_footer(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let year = app
        .page
        .ctx
        .year
        .map(|y| format!("© {y} folio"))
        .unwrap_or_default();
    let mut spans = vec![
        Span::styled(format!(" {year} "), Style::default().fg(palette.muted)),
        Span::styled(
            format!(" {SUBMIT_SHORTCUT} send · Tab next field · Ctrl+C quit "),
            Style::default().fg(palette.muted),
        ),
    ];
    if let Some(ref message) = app.status_message {
        spans.push(Span::styled(
            format!(" {message} "),
            Style::default().fg(palette.accent),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
