//! UI module for rendering the page preview

mod components;
mod forms;
mod layout;
mod palette;
mod side_panel;

use crate::app::App;
use crate::state::DialogState;
use palette::Palette;
use ratatui::{style::Style, widgets::Block, Frame};

pub use forms::form_height;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let ctx = &app.page.ctx;
    let palette = Palette::for_theme(ctx.theme);
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        area,
    );

    let page = layout::create_layout(area, ctx.nav.open, ctx.nav.links.len());
    layout::draw_header(frame, page.header, app, &palette);
    if let Some(nav_area) = page.nav {
        layout::draw_nav(frame, nav_area, app, &palette);
    }
    forms::draw_form(frame, page.form, app, &palette);
    side_panel::draw(frame, page.side, app, &palette);
    layout::draw_footer(frame, page.footer, app, &palette);

    // Draw the dialog overlay last so it sits above the page
    match &ctx.presenter.dialog {
        DialogState::Open(content) => {
            let layout =
                components::render_page_dialog(frame, content, &palette, app.dialog_scroll.get());
            app.dialog_area.set(Some(layout.area));
            app.dialog_scroll.set(layout.scroll);
        }
        DialogState::Closed => {
            app.dialog_area.set(None);
            app.dialog_scroll.set(0);
        }
    }
}
