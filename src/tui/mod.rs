//! Ratatui-based terminal dashboard.
//!
//! The dashboard provides a settings panel for the forecast window and the
//! display aggregation, then renders KPI tiles and either a chart or a table of
//! the forecast. The model is loaded on the first run and reused afterwards.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table, Tabs},
};

use crate::app::pipeline::{ForecastRequest, RunOutput};
use crate::cli::TuiArgs;
use crate::domain::{AggregationMode, ForecastSeries};
use crate::error::AppError;
use crate::io::TIMESTAMP_FORMAT;
use crate::model::ModelProvider;
use crate::report::{fmt_signed_thousands, fmt_thousands};

mod plotters_chart;

use plotters_chart::ForecastPlottersChart;

/// Views with at most this many points get per-point markers.
const MARKER_LIMIT: usize = 60;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Start the TUI.
pub fn run(args: TuiArgs, model_path: PathBuf) -> Result<(), AppError> {
    let (default_start, default_end) = crate::config::default_range();
    let mut app = App::new(
        ModelProvider::new(model_path),
        args.start.unwrap_or(default_start),
        args.end.unwrap_or(default_end),
        args.agg,
    );

    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Chart,
    Table,
}

impl Tab {
    fn toggle(self) -> Self {
        match self {
            Tab::Chart => Tab::Table,
            Tab::Table => Tab::Chart,
        }
    }
}

/// Settings rows, in display order.
const FIELD_START: usize = 0;
const FIELD_END: usize = 1;
const FIELD_MODE: usize = 2;

struct App {
    provider: ModelProvider,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    mode: AggregationMode,
    selected_field: usize,
    editing: bool,
    edit_buffer: String,
    tab: Tab,
    table_offset: usize,
    status: String,
    run: Option<RunOutput>,
    export_dir: PathBuf,
}

impl App {
    fn new(provider: ModelProvider, start: NaiveDate, end: NaiveDate, mode: AggregationMode) -> Self {
        Self {
            provider,
            start: Some(start),
            end: Some(end),
            mode,
            selected_field: FIELD_START,
            editing: false,
            edit_buffer: String::new(),
            tab: Tab::Chart,
            table_offset: 0,
            status: "Press r to run the forecast.".to_string(),
            run: None,
            export_dir: PathBuf::from("."),
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should exit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.editing {
            self.handle_date_edit(code);
            return false;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => self.selected_field = self.selected_field.saturating_sub(1),
            KeyCode::Down => self.selected_field = (self.selected_field + 1).min(FIELD_MODE),
            KeyCode::Left => self.adjust_field(-1),
            KeyCode::Right => self.adjust_field(1),
            KeyCode::Enter => {
                if self.selected_field == FIELD_MODE {
                    self.run_forecast();
                } else {
                    self.editing = true;
                    self.edit_buffer = self.selected_date().map(|d| d.to_string()).unwrap_or_default();
                    self.status = "Editing date (YYYY-MM-DD). Enter to apply, Esc to cancel.".to_string();
                }
            }
            KeyCode::Char('r') => self.run_forecast(),
            KeyCode::Char('t') => self.tab = self.tab.toggle(),
            KeyCode::Char('e') => self.export(),
            KeyCode::Char('j') | KeyCode::PageDown => self.scroll(10),
            KeyCode::Char('k') | KeyCode::PageUp => self.scroll(-10),
            KeyCode::Home => self.table_offset = 0,
            _ => {}
        }

        false
    }

    fn handle_date_edit(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.editing = false;
                self.status = "Date edit canceled.".to_string();
            }
            KeyCode::Enter => {
                self.editing = false;
                self.apply_date_input();
            }
            KeyCode::Backspace => {
                self.edit_buffer.pop();
            }
            KeyCode::Char(c) => {
                if c.is_ascii_digit() || c == '-' {
                    self.edit_buffer.push(c);
                }
            }
            _ => {}
        }
    }

    fn selected_date(&self) -> Option<NaiveDate> {
        match self.selected_field {
            FIELD_START => self.start,
            FIELD_END => self.end,
            _ => None,
        }
    }

    fn set_selected_date(&mut self, date: Option<NaiveDate>) {
        match self.selected_field {
            FIELD_START => self.start = date,
            FIELD_END => self.end = date,
            _ => {}
        }
    }

    /// An empty input clears the date, which the next run reports as an error.
    fn apply_date_input(&mut self) {
        let trimmed = self.edit_buffer.trim();
        if trimmed.is_empty() {
            self.set_selected_date(None);
            self.status = "Date cleared.".to_string();
            return;
        }
        match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            Ok(date) => {
                self.set_selected_date(Some(date));
                self.status = format!("Date set to {date}. Press r to run.");
            }
            Err(e) => self.status = format!("Invalid date '{trimmed}': {e}"),
        }
    }

    fn adjust_field(&mut self, delta: i64) {
        if self.selected_field == FIELD_MODE {
            self.mode = if delta >= 0 { self.mode.next() } else { self.mode.prev() };
            self.table_offset = 0;
            // Re-aggregating is cheap; the model is not re-run.
            if let Some(run) = self.run.take() {
                self.run = Some(run.with_mode(self.mode));
            }
            self.status = format!("aggregation: {}", self.mode.display_name());
            return;
        }

        if let Some(date) = self.selected_date() {
            let shifted = date.checked_add_signed(chrono::Duration::days(delta));
            if shifted.is_some() {
                self.set_selected_date(shifted);
            }
        }
    }

    fn run_forecast(&mut self) {
        let request = ForecastRequest {
            start: self.start,
            end: self.end,
            mode: self.mode,
        };
        match crate::app::pipeline::run_forecast(&request, &self.provider) {
            Ok(run) => {
                self.status = format!(
                    "Forecast {} .. {}: {} points ({} shown)",
                    run.range.start,
                    run.range.end,
                    run.series.len(),
                    run.view.len()
                );
                self.run = Some(run);
                self.table_offset = 0;
            }
            Err(err) => {
                // Stale results would not match the settings shown.
                self.run = None;
                self.status = format!("Error: {err}");
            }
        }
    }

    fn export(&mut self) {
        let Some(run) = &self.run else {
            self.status = "Nothing to export yet. Press r to run.".to_string();
            return;
        };
        let path = self.export_dir.join(&run.filename);
        self.status = match crate::io::write_csv(&path, &run.series) {
            Ok(()) => format!("Exported {} rows to {}", run.series.len(), path.display()),
            Err(err) => format!("Export failed: {err}"),
        };
    }

    fn scroll(&mut self, delta: isize) {
        let len = self.run.as_ref().map(|r| r.view.len()).unwrap_or(0);
        self.table_offset = self.table_offset.saturating_add_signed(delta).min(len.saturating_sub(1));
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_kpis(frame, chunks[1]);
        self.draw_body(frame, chunks[2]);
        self.draw_footer(frame, chunks[3]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("gridcast", Style::default().fg(Color::Cyan)),
            Span::raw(" | UK Electricity Generation Forecast"),
        ]));

        let model = self
            .run
            .as_ref()
            .map(|r| r.model_name.clone())
            .unwrap_or_else(|| self.provider.path().display().to_string());
        let points = self.run.as_ref().map(|r| r.series.len()).unwrap_or(0);
        lines.push(Line::from(Span::styled(
            format!("model: {model} | view: {} | n={points}", self.mode.display_name()),
            Style::default().fg(Color::Gray),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_kpis(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let tiles = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        let kpis = self.run.as_ref().map(|r| r.kpis);
        let value = |f: fn(&crate::domain::KpiSet) -> String| kpis.as_ref().map(f).unwrap_or_else(|| "-".to_string());

        let cards = [
            ("Avg Generation", value(|k| format!("{} MW", fmt_thousands(k.average, 0))), None),
            (
                "Peak Demand",
                value(|k| format!("{} MW", fmt_thousands(k.peak, 0))),
                kpis.map(|k| format!("{} vs avg", fmt_signed_thousands(k.peak_variance()))),
            ),
            ("Total Volume", value(|k| format!("{} GWh", fmt_thousands(k.total_energy_gwh, 2))), None),
            ("Baseload Min", value(|k| format!("{} MW", fmt_thousands(k.minimum, 0))), None),
        ];

        for ((title, value, delta), rect) in cards.into_iter().zip(tiles.iter()) {
            let mut lines = vec![Line::from(Span::styled(
                value,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ))];
            if let Some(delta) = delta {
                lines.push(Line::from(Span::styled(delta, Style::default().fg(Color::Green))));
            }
            let p = Paragraph::new(Text::from(lines)).block(Block::default().title(title).borders(Borders::ALL));
            frame.render_widget(p, *rect);
        }
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(30)])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(chunks[0]);

        let selected = match self.tab {
            Tab::Chart => 0,
            Tab::Table => 1,
        };
        let tabs = Tabs::new(vec!["Chart", "Table"])
            .select(selected)
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        frame.render_widget(tabs, main[0]);

        match self.tab {
            Tab::Chart => self.draw_chart(frame, main[1]),
            Tab::Table => self.draw_table(frame, main[1]),
        }
        self.draw_settings(frame, chunks[1]);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default()
            .title(format!("Forecast ({})", self.mode.display_name()))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some(run) = &self.run else {
            let msg = Paragraph::new("No forecast yet.").style(Style::default().fg(Color::Yellow));
            frame.render_widget(msg, inner);
            return;
        };

        let Some(data) = chart_series(&run.view) else {
            frame.render_widget(Paragraph::new("Empty forecast."), inner);
            return;
        };

        let widget = ForecastPlottersChart {
            line: &data.line,
            markers: &data.markers,
            x_bounds: data.x_bounds,
            y_bounds: data.y_bounds,
            x_label: "date",
            y_label: run.mode.value_label().to_string(),
            fmt_x: fmt_axis_date,
            fmt_y: fmt_axis_mw,
        };
        frame.render_widget(widget, inner);
    }

    fn draw_table(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let Some(run) = &self.run else {
            let block = Block::default().title("Data").borders(Borders::ALL);
            frame.render_widget(Paragraph::new("No forecast yet.").block(block), area);
            return;
        };
        let block = Block::default().title(table_title(run.mode)).borders(Borders::ALL);

        // Borders and header take three rows.
        let visible = usize::from(area.height.saturating_sub(3));
        let rows = table_window(&run.view, self.table_offset, visible).iter().map(|p| {
            Row::new(vec![
                Cell::from(p.timestamp.format(TIMESTAMP_FORMAT).to_string()),
                Cell::from(fmt_thousands(p.value_mw, 1)),
            ])
        });

        let header = Row::new(vec![
            Cell::from("timestamp"),
            Cell::from(format!("forecast {}", run.mode.value_label())),
        ])
        .style(Style::default().add_modifier(Modifier::BOLD));

        let title = format!(
            "{} rows ({}-{})",
            run.view.len(),
            self.table_offset + 1,
            (self.table_offset + visible).min(run.view.len())
        );
        let table = Table::new(rows, [Constraint::Length(21), Constraint::Min(12)])
            .header(header)
            .block(block.title(title));
        frame.render_widget(table, area);
    }

    fn draw_settings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let show = |d: Option<NaiveDate>| d.map(|d| d.to_string()).unwrap_or_else(|| "(unset)".to_string());

        let items = vec![
            ListItem::new(format!("Start: {}", show(self.start))),
            ListItem::new(format!("End:   {}", show(self.end))),
            ListItem::new(format!("View:  {}", self.mode.display_name())),
        ];

        let list = List::new(items)
            .block(Block::default().title("Settings").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);

        if self.editing {
            let hint = Paragraph::new(format!("> {}_", self.edit_buffer))
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
            let rect = Rect {
                x: area.x + 2,
                y: area.y + area.height.saturating_sub(2),
                width: area.width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(hint, rect);
        }
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  Enter edit  r run  t tab  j/k scroll  e export  q quit";
        let style = if self.status.starts_with("Error") {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, style),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Chart-ready coordinates for a series.
struct ChartData {
    line: Vec<(f64, f64)>,
    markers: Vec<(f64, f64)>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
}

fn chart_series(series: &ForecastSeries) -> Option<ChartData> {
    let line: Vec<(f64, f64)> = series
        .points()
        .iter()
        .map(|p| (epoch_days(p.timestamp), p.value_mw))
        .collect();
    let (&(x_first, _), &(x_last, _)) = (line.first()?, line.last()?);

    // A single point still needs a non-degenerate x range.
    let x_bounds = if x_last > x_first {
        [x_first, x_last]
    } else {
        [x_first - 0.5, x_first + 0.5]
    };

    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(_, y) in &line {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if !y_min.is_finite() || !y_max.is_finite() {
        y_min = 0.0;
        y_max = 1.0;
    } else if y_max <= y_min {
        y_min -= 1.0;
        y_max += 1.0;
    }
    let pad = ((y_max - y_min).abs() * 0.05).max(1e-12);

    let markers = if line.len() <= MARKER_LIMIT { line.clone() } else { Vec::new() };

    Some(ChartData {
        line,
        markers,
        x_bounds,
        y_bounds: [y_min - pad, y_max + pad],
    })
}

fn table_title(mode: AggregationMode) -> String {
    format!("{} data", mode.display_name())
}

fn table_window(series: &ForecastSeries, offset: usize, visible: usize) -> &[crate::domain::ForecastPoint] {
    let points = series.points();
    let start = offset.min(points.len());
    let end = start.saturating_add(visible).min(points.len());
    &points[start..end]
}

fn epoch_days(ts: NaiveDateTime) -> f64 {
    ts.and_utc().timestamp() as f64 / SECONDS_PER_DAY
}

fn fmt_axis_date(v: f64) -> String {
    DateTime::from_timestamp((v * SECONDS_PER_DAY).round() as i64, 0)
        .map(|dt| dt.format("%d %b %H:%M").to_string())
        .unwrap_or_default()
}

fn fmt_axis_mw(v: f64) -> String {
    fmt_thousands(v, 0)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use nalgebra::DMatrix;

    use super::*;
    use crate::domain::{FEATURE_COLUMNS, ForecastPoint};
    use crate::error::ForecastError;
    use crate::model::Predictor;

    struct Flat(Vec<String>);

    impl Predictor for Flat {
        fn name(&self) -> &str {
            "flat"
        }

        fn feature_names(&self) -> &[String] {
            &self.0
        }

        fn predict(&self, features: &DMatrix<f64>) -> Result<Vec<f64>, ForecastError> {
            Ok(vec![1000.0; features.nrows()])
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn app() -> App {
        let names = FEATURE_COLUMNS.iter().map(|s| s.to_string()).collect();
        App::new(
            ModelProvider::preloaded(Arc::new(Flat(names))),
            d(2026, 2, 15),
            d(2026, 2, 16),
            AggregationMode::HalfHourly,
        )
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn run_populates_kpis() {
        let mut app = app();
        assert!(!app.handle_key(KeyCode::Char('r')));
        let run = app.run.as_ref().unwrap();
        assert_eq!(run.series.len(), 96);
        assert_eq!(run.kpis.total_energy_gwh, 48.0);
        assert_eq!(app.status, "Forecast 2026-02-15 .. 2026-02-16: 96 points (96 shown)");
    }

    #[test]
    fn failed_model_load_is_reported_in_status() {
        let mut app = app();
        app.provider = ModelProvider::new("does/not/exist.json");
        app.handle_key(KeyCode::Char('r'));
        assert!(app.run.is_none());
        assert!(app.status.starts_with("Error: failed to load model artifact"));
    }

    #[test]
    fn mode_change_reaggregates_existing_run() {
        let mut app = app();
        app.handle_key(KeyCode::Char('r'));
        app.selected_field = FIELD_MODE;
        app.handle_key(KeyCode::Right);
        assert_eq!(app.mode, AggregationMode::DailyAverage);
        assert_eq!(app.run.as_ref().unwrap().view.len(), 2);
    }

    #[test]
    fn cleared_date_reports_error_and_drops_results() {
        let mut app = app();
        app.handle_key(KeyCode::Char('r'));
        app.selected_field = FIELD_END;
        app.handle_key(KeyCode::Enter);
        for _ in 0..10 {
            app.handle_key(KeyCode::Backspace);
        }
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.end, None);

        app.handle_key(KeyCode::Char('r'));
        assert!(app.run.is_none());
        assert!(app.status.starts_with("Error"));
    }

    #[test]
    fn edited_date_is_applied() {
        let mut app = app();
        app.selected_field = FIELD_END;
        app.handle_key(KeyCode::Enter);
        for _ in 0..10 {
            app.handle_key(KeyCode::Backspace);
        }
        type_text(&mut app, "2026-02-20");
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.end, Some(d(2026, 2, 20)));
    }

    #[test]
    fn arrows_shift_dates_by_one_day() {
        let mut app = app();
        app.handle_key(KeyCode::Left);
        assert_eq!(app.start, Some(d(2026, 2, 14)));
    }

    #[test]
    fn export_writes_suggested_filename() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app();
        app.export_dir = dir.path().to_path_buf();
        app.handle_key(KeyCode::Char('e'));
        assert!(app.status.starts_with("Nothing to export"));

        app.handle_key(KeyCode::Char('r'));
        app.handle_key(KeyCode::Char('e'));
        let path = dir.path().join("UK_Grid_Forecast_2026-02-15.csv");
        assert_eq!(crate::io::read_csv(&path).unwrap().len(), 96);
    }

    #[test]
    fn table_title_follows_mode() {
        assert_eq!(table_title(AggregationMode::HalfHourly), "Half-hourly (30m) data");
        assert_eq!(table_title(AggregationMode::WeeklySum), "Weekly Sum data");
    }

    #[test]
    fn q_quits_and_t_toggles() {
        let mut app = app();
        app.handle_key(KeyCode::Char('t'));
        assert_eq!(app.tab, Tab::Table);
        assert!(app.handle_key(KeyCode::Char('q')));
    }

    #[test]
    fn chart_series_pads_flat_values() {
        let t0 = d(2026, 2, 15).and_hms_opt(0, 0, 0).unwrap();
        let series = ForecastSeries::new(vec![ForecastPoint { timestamp: t0, value_mw: 5.0 }]);
        let data = chart_series(&series).unwrap();
        assert!(data.x_bounds[1] > data.x_bounds[0]);
        assert!(data.y_bounds[0] < 5.0 && data.y_bounds[1] > 5.0);
        assert_eq!(data.markers.len(), 1);
        assert!(chart_series(&ForecastSeries::default()).is_none());
    }

    #[test]
    fn axis_dates_round_trip() {
        let ts = d(2026, 2, 15).and_hms_opt(12, 0, 0).unwrap();
        assert_eq!(fmt_axis_date(epoch_days(ts)), "15 Feb 12:00");
    }
}
