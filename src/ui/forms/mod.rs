//! Contact form rendering

mod field_renderer;

use super::components::{render_button, BUTTON_HEIGHT};
use super::palette::Palette;
use crate::app::App;
use field_renderer::{draw_field, field_height};
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
    Frame,
};

/// Draw the form fields and submit button, honoring the page scroll offset
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let ctx = &app.page.ctx;
    let block = Block::default()
        .title(format!(" {} ", ctx.form.variant.heading()))
        .borders(Borders::ALL)
        .border_style(ratatui::style::Style::default().fg(palette.muted));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = &ctx.form;
    let rows = form
        .fields()
        .iter()
        .map(field_height)
        .chain(std::iter::once(BUTTON_HEIGHT))
        .enumerate();

    let bottom = inner.y + inner.height;
    let mut y = inner.y;
    let mut skipped = 0u16;
    for (index, height) in rows {
        if skipped + height <= app.scroll {
            skipped += height;
            continue;
        }
        if y + height > bottom {
            break;
        }
        let row = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height,
        };
        let is_active = index == form.active_field_index;
        match form.fields().get(index) {
            Some(field) => draw_field(
                frame,
                row,
                field,
                is_active,
                form.mark_for(&field.name),
                app.option_cursor,
                palette,
            ),
            None => render_button(frame, row, "Send message", is_active, palette),
        }
        y += height;
    }
}

/// Total rows the form needs
pub fn form_height(app: &App) -> u16 {
    app.page
        .ctx
        .form
        .fields()
        .iter()
        .map(field_height)
        .sum::<u16>()
        + BUTTON_HEIGHT
}
