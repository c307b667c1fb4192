//! Status bar UI component.

use super::ThemeColors;
use crate::app::App;
use crate::util::truncate_to_width;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
pub(super) fn draw_status(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let text = format!(
        "{} | {} generations x {} individuals | {}",
        app.file_path.display(),
        app.matrix.generations(),
        app.matrix.population(),
        app.status
    );
    let text = truncate_to_width(&text, area.width as usize);

    let paragraph = Paragraph::new(text).style(Style::default().fg(colors.fg0).bg(colors.bg1));

    f.render_widget(paragraph, area);
}
