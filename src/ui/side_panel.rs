//! Skill bars and inline submission results

use super::palette::Palette;
use crate::app::App;
use crate::state::InlineResults;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Draw skills above the results section
pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let bars = &app.page.ctx.skills.bars;
    let skills_height = bars.len() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(skills_height), Constraint::Min(0)])
        .split(area);

    draw_skills(frame, chunks[0], app, palette);
    draw_results(frame, chunks[1], &app.page.ctx.presenter.inline, palette);
}

fn draw_skills(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = Block::default()
        .title(" Skills ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (i, bar) in app.page.ctx.skills.bars.iter().enumerate() {
        let row = Rect {
            x: inner.x,
            y: inner.y + i as u16,
            width: inner.width,
            height: 1,
        };
        if row.y >= inner.y + inner.height {
            break;
        }
        let ratio = f64::from(bar.width / 100.0).clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(palette.accent).bg(palette.bg))
            .ratio(ratio)
            .label(format!("{} {}%", bar.label, bar.width.round() as u8));
        frame.render_widget(gauge, row);
    }
}

fn draw_results(frame: &mut Frame, area: Rect, results: &InlineResults, palette: &Palette) {
    if !results.visible {
        return;
    }

    let mut lines = Vec::new();
    if results.errors.is_empty() {
        lines.push(Line::from(Span::styled(
            "Thanks! Here is what you sent:",
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD),
        )));
        for item in &results.items {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", item.label), Style::default().fg(palette.muted)),
                Span::styled(item.value.clone(), Style::default().fg(palette.fg)),
            ]));
        }
    } else {
        for message in &results.errors {
            lines.push(Line::from(Span::styled(
                format!("• {message}"),
                Style::default().fg(palette.error),
            )));
        }
    }

    let block = Block::default()
        .title(" Results ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if results.errors.is_empty() {
            palette.success
        } else {
            palette.error
        }));
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
