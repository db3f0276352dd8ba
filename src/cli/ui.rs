use super::app::App;
use crate::api::PersonApi;
use crate::core::PersonField;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
};

const KEY_HINTS: &str = "a add · d delete · ←/→ page · ↑/↓ select · r reload · q quit";
const DIALOG_HINTS: &str = "Enter save · Esc cancel · Tab next field";

pub fn draw<A: PersonApi>(f: &mut Frame, app: &mut App<A>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Menu
            Constraint::Min(5),    // Table
            Constraint::Length(3), // Pager
        ])
        .split(f.area());

    draw_menu(f, chunks[0]);
    draw_table(f, app, chunks[1]);
    draw_pager(f, app, chunks[2]);

    if app.session.is_dialog_open() {
        draw_dialog(f, app);
    }
}

fn draw_menu(f: &mut Frame, area: Rect) {
    let menu = Paragraph::new(Line::from(vec![
        Span::styled(
            "Persons",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(menu, area);
}

fn draw_table<A: PersonApi>(f: &mut Frame, app: &App<A>, area: Rect) {
    let header = Row::new(
        PersonField::ALL
            .iter()
            .map(|field| Cell::from(field.label())),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .session
        .visible()
        .iter()
        .map(|person| {
            Row::new(
                PersonField::ALL
                    .iter()
                    .map(|field| Cell::from(field.value_of(person))),
            )
        })
        .collect();

    let widths = [
        Constraint::Percentage(24),
        Constraint::Percentage(8),
        Constraint::Percentage(16),
        Constraint::Percentage(18),
        Constraint::Percentage(20),
        Constraint::Percentage(14),
    ];

    let mut state = TableState::default();
    if !rows.is_empty() {
        state.select(Some(app.selected));
    }

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(" People "))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    f.render_stateful_widget(table, area, &mut state);
}

fn draw_pager<A: PersonApi>(f: &mut Frame, app: &App<A>, area: Rect) {
    let enabled = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::DarkGray);

    let session = &app.session;
    let pager = Paragraph::new(Line::from(vec![
        Span::styled(
            "◀ Previous",
            if session.has_prev_page() { enabled } else { disabled },
        ),
        Span::raw("    "),
        Span::raw(format!(
            "Page {} of {}",
            session.pagination().page(),
            session.page_count().max(1)
        )),
        Span::raw("    "),
        Span::styled(
            "Next ▶",
            if session.has_next_page() { enabled } else { disabled },
        ),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(pager, area);
}

fn draw_dialog<A: PersonApi>(f: &mut Frame, app: &mut App<A>) {
    app.style_inputs();

    let area = centered(f.area(), 60, 3 * app.inputs.len() as u16 + 3);
    f.render_widget(Clear, area);

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" New Person ");
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let mut constraints = vec![Constraint::Length(3); app.inputs.len()];
    constraints.push(Constraint::Length(1));
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (input, slot) in app.inputs.iter().zip(slots.iter()) {
        f.render_widget(input, *slot);
    }

    let hints = Paragraph::new(Span::styled(DIALOG_HINTS, Style::default().fg(Color::DarkGray)))
        .alignment(Alignment::Center);
    f.render_widget(hints, slots[app.inputs.len()]);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(vertical);
    rect
}
