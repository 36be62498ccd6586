use crate::app::{App, View};
use crate::schedule::classify::Category;
use crate::schedule::describe;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(10),    // Body
            Constraint::Length(3),  // Status
            Constraint::Length(3),  // Help
        ])
        .split(f.area());

    draw_title(f, chunks[0], app);
    draw_body(f, app, chunks[1]);
    draw_status(f, app, chunks[2]);
    draw_help(f, chunks[3]);
}

fn draw_title(f: &mut Frame, area: Rect, app: &App) {
    let stats_line = match &app.report {
        Some(report) => format!(
            "{} jobs | {} enabled / {} disabled | {} recurring / {} scheduled",
            report.stats.total,
            report.stats.enabled,
            report.stats.disabled,
            report.stats.recurring,
            report.stats.scheduled
        ),
        None => "no snapshot loaded".to_string(),
    };
    let source = app.loaded_source.as_deref().unwrap_or("-");

    let title = Paragraph::new(format!(
        "Atom Scheduled Jobs [{}] [{}] {}",
        source,
        app.view.title(),
        stats_line
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn draw_body(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(40)])
        .split(area);

    draw_environments(f, app, chunks[0]);

    match app.view {
        View::Jobs => draw_jobs(f, app, chunks[1]),
        View::Recurring => draw_recurring(f, app, chunks[1]),
        View::Timeline => draw_timeline(f, app, chunks[1]),
    }
}

fn draw_environments(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .source_names()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let style = if i == app.selected_source {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(name.clone()).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Environments "),
    );
    f.render_widget(list, area);
}

fn draw_jobs(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(6)])
        .split(area);

    let header_cells = ["", "Name", "Category", "Hours", "Minutes", "Cron"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        });
    let header = Row::new(header_cells).height(1).bottom_margin(1);

    let assignments = app
        .report
        .as_ref()
        .map(|report| report.assignments.as_slice())
        .unwrap_or(&[]);

    let rows: Vec<Row> = assignments
        .iter()
        .enumerate()
        .map(|(i, (category, job))| {
            let status_symbol = if job.enabled { "✓" } else { "✗" };
            let status_color = if job.enabled { Color::Green } else { Color::Red };
            let category_text = match category {
                Category::Recurring => "Recurring",
                Category::Scheduled => "Scheduled",
            };

            let cells = vec![
                Cell::from(status_symbol).style(Style::default().fg(status_color)),
                Cell::from(job.name.clone()),
                Cell::from(category_text),
                Cell::from(job.hours_or_default().to_string()),
                Cell::from(job.minutes_or_default().to_string()),
                Cell::from(job.cron.clone().unwrap_or_default()),
            ];

            let style = if i == app.selected_row {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Row::new(cells).style(style).height(1)
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Percentage(30),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Percentage(35),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Scheduled Jobs ({}) ", assignments.len())),
    );
    f.render_widget(table, chunks[0]);

    draw_job_detail(f, app, chunks[1]);
}

fn draw_job_detail(f: &mut Frame, app: &App, area: Rect) {
    let lines = match app.selected_job() {
        Some(job) => {
            let fires = job.upcoming_fires(3);
            let next = if fires.is_empty() {
                "-".to_string()
            } else {
                fires
                    .iter()
                    .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            vec![
                Line::from(format!(
                    "Pattern: {}",
                    describe::describe_pattern(job.hours_or_default(), job.minutes_or_default())
                )),
                Line::from(format!(
                    "Days of week: {}  Days of month: {}  Months: {}  Years: {}",
                    job.days_of_week.as_deref().unwrap_or("*"),
                    job.days_of_month.as_deref().unwrap_or("*"),
                    job.months.as_deref().unwrap_or("*"),
                    job.years.as_deref().unwrap_or("*"),
                )),
                Line::from(format!("Next fires: {}", next)),
                Line::from(format!("Id: {}", job.id.as_deref().unwrap_or("-"))),
            ]
        }
        None => vec![Line::from("No job selected")],
    };

    let detail =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Detail "));
    f.render_widget(detail, area);
}

fn draw_recurring(f: &mut Frame, app: &App, area: Rect) {
    let header_cells = ["Pattern", "Jobs", "Score"].iter().map(|h| {
        Cell::from(*h).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    });
    let header = Row::new(header_cells).height(1).bottom_margin(1);

    let groups = app
        .report
        .as_ref()
        .map(|report| report.recurring.as_slice())
        .unwrap_or(&[]);

    let rows: Vec<Row> = groups
        .iter()
        .enumerate()
        .map(|(i, group)| {
            let names: Vec<&str> = group.jobs.iter().map(|job| job.name.as_str()).collect();
            let cells = vec![
                Cell::from(group.description.clone()),
                Cell::from(names.join(", ")),
                Cell::from(format!("{:.0}", group.score)),
            ];
            let style = if i == app.selected_row {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(cells).style(style).height(1)
        })
        .collect();

    let widths = [
        Constraint::Percentage(45),
        Constraint::Percentage(45),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Recurring Patterns ({}) ", groups.len())),
    );
    f.render_widget(table, area);
}

fn draw_timeline(f: &mut Frame, app: &App, area: Rect) {
    let header_cells = ["Mountain Time", "Jobs"].iter().map(|h| {
        Cell::from(*h).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    });
    let header = Row::new(header_cells).height(1).bottom_margin(1);

    let slots = app
        .report
        .as_ref()
        .map(|report| report.timeline.as_slice())
        .unwrap_or(&[]);

    let rows: Vec<Row> = slots
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let names: Vec<&str> = slot.jobs.iter().map(|job| job.name.as_str()).collect();
            let cells = vec![
                Cell::from(describe::format_time_12hour(slot.time.hour, slot.time.minute)),
                Cell::from(names.join(", ")),
            ];
            let style = if i == app.selected_row {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(cells).style(style).height(1)
        })
        .collect();

    let widths = [Constraint::Length(15), Constraint::Min(30)];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Timeline ({}) ", slots.len())),
    );
    f.render_widget(table, area);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let text = app
        .message
        .clone()
        .unwrap_or_else(|| "Ready".to_string());

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Green))
        .block(Block::default().borders(Borders::ALL).title(" Status "));
    f.render_widget(paragraph, area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let help_text = vec![Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Cyan)),
        Span::raw(": Navigate | "),
        Span::styled("←/→", Style::default().fg(Color::Cyan)),
        Span::raw(": Environment | "),
        Span::styled("Enter", Style::default().fg(Color::Green)),
        Span::raw(": Load | "),
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(": View | "),
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::raw(": Refresh | "),
        Span::styled("q", Style::default().fg(Color::Red)),
        Span::raw(": Quit"),
    ])];

    let paragraph = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL).title(" Controls "));
    f.render_widget(paragraph, area);
}
