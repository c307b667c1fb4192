//! User interface rendering.

mod chart;
mod formatters;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::gruvbox_dark();

    // Main layout: title, chart, status bar, key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    chart::draw_title(f, chunks[0], &colors);
    chart::draw_chart(f, chunks[1], app, &colors);
    status_bar::draw_status(f, chunks[2], app, &colors);
    keymap_bar::draw_keymap(f, chunks[3], &colors);
}
