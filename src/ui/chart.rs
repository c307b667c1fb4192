//! Scatter chart rendering.

use super::formatters::{format_axis_label, format_stat_value};
use super::theme::{series_color, ThemeColors};
use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Fixed two-line heading naming the run that produced the data.
const TITLE_LINES: [&str; 2] = [
    "Traveling Salesman Genetic Algorithm",
    "Population Size:10, First 25 Generations",
];

/// Draw the fixed plot heading.
pub(super) fn draw_title(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let text: Vec<Line<'_>> = TITLE_LINES.iter().map(|line| Line::from(*line)).collect();
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(colors.heading))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Draw the fitness scatter chart.
pub(super) fn draw_chart(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let matrix = &app.matrix;

    if matrix.is_empty() || matrix.valid_count == 0 {
        let paragraph = Paragraph::new("No valid data to display")
            .style(Style::default().fg(colors.fg0))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let population = matrix.population();
    let series: Vec<Vec<(f64, f64)>> = (0..population).map(|ind| matrix.series(ind)).collect();

    // Find min/max for Y scaling
    let (min_val, max_val) = matrix.min_max.unwrap_or((0.0, 1.0));

    // Add padding to avoid edge clipping - 15% margin
    let padding = match (max_val - min_val).abs() {
        spread if spread > 0.0 => spread * 0.15,
        _ => 1.0,
    };
    let (y_min, y_max) = (min_val - padding, max_val + padding);

    let x_max = matrix.generations().saturating_sub(1).max(1) as f64;

    // One point-only dataset per individual
    let mut datasets = Vec::with_capacity(population + 1);
    for (ind, points) in series.iter().enumerate() {
        let t = if population > 1 {
            ind as f64 / (population - 1) as f64
        } else {
            0.6
        };
        datasets.push(
            Dataset::default()
                .marker(ratatui::symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(series_color(t)))
                .data(points),
        );
    }

    // Add cursor as a vertical line
    let cursor_x = app.cursor as f64;
    let cursor_line = vec![(cursor_x, y_min), (cursor_x, y_max)];
    if cursor_x <= x_max {
        datasets.push(
            Dataset::default()
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors.yellow))
                .data(&cursor_line),
        );
    }

    // Create X axis with smart labels
    let x_labels = vec![
        format_axis_label(0.0),
        format_axis_label(x_max / 2.0),
        format_axis_label(x_max),
    ];

    let x_axis = Axis::default()
        .title("Generation Number")
        .style(Style::default().fg(colors.fg0))
        .bounds([0.0, x_max])
        .labels(x_labels);

    // Create Y axis
    let y_labels = vec![
        format_axis_label(y_min),
        format_axis_label((y_min + y_max) / 2.0),
        format_axis_label(y_max),
    ];

    let y_axis = Axis::default()
        .title("Individual Fitness Score")
        .style(Style::default().fg(colors.fg0))
        .bounds([y_min, y_max])
        .labels(y_labels);

    // Build title with cursor readout
    let readout = match matrix.generation_stats(app.cursor) {
        Some((min, max, mean)) => format!(
            " gen {}: min {} max {} mean {} ",
            app.cursor,
            format_stat_value(min),
            format_stat_value(max),
            format_stat_value(mean)
        ),
        None => format!(" gen {} ", app.cursor),
    };

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.bg2))
                .title(readout)
                .title_style(Style::default().fg(colors.yellow)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}
