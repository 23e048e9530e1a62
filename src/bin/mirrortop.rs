use std::io;
use std::time::Duration;

use crossterm::{event, execute, terminal};
use ratatui::prelude::*;
use ratatui::widgets::*;

use mirror_dash::config::Config;
use mirror_dash::render::{
    INTEGRITY_REGION, TIMELINE_REGION, TRAIT_CLOUD_REGION, YIELD_REGION,
};
use mirror_dash::{DashboardView, DataClient, load_data};

struct App {
    view: DashboardView,
    data_url: String,
    load_error: Option<String>,
    timeline_scroll: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mirror_dash::load_env();
    let config = Config::load()?;
    let client = DataClient::new(&config)?;

    let mut app = App {
        view: DashboardView::default(),
        data_url: client.data_url().to_string(),
        load_error: None,
        timeline_scroll: 0,
    };
    // One load at startup; the loop below only repaints.
    if let Err(e) = load_data(&client, &mut app.view).await {
        app.load_error = Some(e.to_string());
    }

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if event::poll(Duration::from_millis(200))? {
            if let event::Event::Key(k) = event::read()? {
                use crossterm::event::{KeyCode, KeyModifiers};
                match k.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::PageUp => {
                        app.timeline_scroll = app.timeline_scroll.saturating_sub(10)
                    }
                    KeyCode::PageDown => {
                        app.timeline_scroll = app.timeline_scroll.saturating_add(10)
                    }
                    KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => break,
                    _ => {}
                }
            }
        }
    }

    terminal::disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::LeaveAlternateScreen)?;
    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.size());

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Humanity Mirror — Reflection Dashboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::raw(format!("Source: {}", app.data_url)),
    ]))
    .block(Block::default().borders(Borders::ALL).title("Overview"));
    f.render_widget(header, chunks[0]);

    let timeline_lines: Vec<Line> = if let Some(err) = &app.load_error {
        vec![Line::from(Span::styled(
            format!("load failed: {err}"),
            Style::default().fg(Color::Red),
        ))]
    } else if app.view.timeline.is_empty() {
        vec![Line::raw("(no reflections yet)")]
    } else {
        let h = chunks[1].height as usize;
        app.view
            .timeline
            .iter()
            .skip(app.timeline_scroll as usize)
            .take(h.saturating_sub(2))
            .map(|l| Line::raw(l.clone()))
            .collect()
    };
    let timeline = Paragraph::new(timeline_lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{TIMELINE_REGION} (PgUp/PgDn)")),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(timeline, chunks[1]);

    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    let integrity = Paragraph::new(Line::raw(scalar_or_dash(
        &app.view.integrity,
        app.load_error.is_some(),
    )))
    .block(Block::default().borders(Borders::ALL).title(INTEGRITY_REGION));
    f.render_widget(integrity, row[0]);

    let vault_yield = Paragraph::new(Line::raw(scalar_or_dash(
        &app.view.vault_yield,
        app.load_error.is_some(),
    )))
    .block(Block::default().borders(Borders::ALL).title(YIELD_REGION));
    f.render_widget(vault_yield, row[1]);

    let mut cloud_spans: Vec<Span> = Vec::new();
    for (i, tag) in app.view.trait_cloud.iter().enumerate() {
        if i > 0 {
            cloud_spans.push(Span::raw("  "));
        }
        cloud_spans.push(Span::styled(
            tag.clone(),
            Style::default().fg(Color::Green),
        ));
    }
    if cloud_spans.is_empty() {
        cloud_spans.push(Span::raw("–"));
    }
    let cloud = Paragraph::new(Line::from(cloud_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(TRAIT_CLOUD_REGION),
    );
    f.render_widget(cloud, chunks[3]);

    let help = Paragraph::new(Line::raw(
        "Keys: q/Esc quit • PgUp/PgDn scroll timeline",
    ))
    .block(Block::default().borders(Borders::ALL).title("Help"));
    f.render_widget(help, chunks[4]);
}

fn scalar_or_dash(text: &str, failed: bool) -> String {
    if failed { "–".into() } else { text.to_string() }
}
