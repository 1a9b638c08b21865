use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, List, ListItem, Padding, Paragraph, Wrap};
use ratatui::Frame;
use standup_core::{Meeting, MeetingPhase, Ticket};

use super::app::{App, View};

const ACCENT: Color = Color::Cyan;

pub fn draw(frame: &mut Frame, app: &mut App) {
    match &app.view {
        View::Failed(message) => return draw_failed(frame, message),
        View::Meeting(meeting) => match meeting.phase() {
            MeetingPhase::NoSpeakers => return draw_no_speakers(frame),
            MeetingPhase::Ended => return draw_ended(frame, meeting),
            MeetingPhase::Active { .. } => {}
        },
    }
    draw_meeting(frame, app);
}

// ---------------------------------------------------------------------------
// Meeting view
// ---------------------------------------------------------------------------

fn draw_meeting(frame: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(1)])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(38), Constraint::Min(30)])
        .split(rows[0]);

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Length(4),
        ])
        .split(columns[0]);

    if let View::Meeting(meeting) = &app.view {
        draw_progress(frame, sidebar[0], meeting);
        draw_speaker(frame, sidebar[1], meeting);
        draw_countdown(frame, sidebar[2], meeting);
    }
    draw_ticket_list(frame, columns[1], app);
    draw_help_bar(frame, rows[1]);

    if let View::Meeting(meeting) = &app.view {
        if let Some(ticket) = meeting.inspected_ticket() {
            draw_ticket_popup(frame, ticket);
        }
    }
}

fn draw_progress(frame: &mut Frame, area: Rect, meeting: &Meeting) {
    let position = meeting.active_index() + 1;
    let count = meeting.speakers().len();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Progress"))
        .gauge_style(Style::default().fg(ACCENT))
        .ratio(position as f64 / count as f64)
        .label(format!("{position} / {count}"));
    frame.render_widget(gauge, area);
}

fn draw_speaker(frame: &mut Frame, area: Rect, meeting: &Meeting) {
    let Some(speaker) = meeting.active_speaker() else {
        return;
    };
    let lines = vec![
        Line::from(Span::styled(
            speaker.display_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            speaker.email.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Speaker")
                .padding(Padding::vertical(1)),
        );
    frame.render_widget(paragraph, area);
}

fn draw_countdown(frame: &mut Frame, area: Rect, meeting: &Meeting) {
    let remaining = meeting.remaining_seconds();
    let total = meeting.total_seconds().max(1);
    let title = if meeting.is_running() {
        "Countdown"
    } else {
        "Countdown (paused)"
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .gauge_style(Style::default().fg(countdown_color(remaining)))
        .ratio(remaining as f64 / total as f64)
        .label(format_clock(remaining));
    frame.render_widget(gauge, area);
}

fn draw_ticket_list(frame: &mut Frame, area: Rect, app: &mut App) {
    let View::Meeting(meeting) = &app.view else {
        return;
    };
    let tickets = meeting.active_tickets();

    let title = match meeting.active_speaker() {
        Some(speaker) => format!("{}'s tickets ({})", speaker.display_name, tickets.len()),
        None => "Tickets".to_string(),
    };

    if tickets.is_empty() {
        let empty = Paragraph::new("No tickets for this speaker.")
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = tickets
        .iter()
        .map(|t| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<10}", t.key), Style::default().fg(ACCENT)),
                Span::styled(
                    format!("[{}] ", t.status),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(t.summary.clone()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut app.ticket_list);
}

fn draw_help_bar(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "space start/pause  n next  p prev  s shuffle  r reset  ↑↓ select  enter details  b board  q quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

fn draw_ticket_popup(frame: &mut Frame, ticket: &Ticket) {
    let area = centered_rect(60, 50, frame.area());

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                ticket.key.clone(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::raw(ticket.summary.clone()),
        ]),
        Line::raw(""),
        detail_line("Status", &ticket.status),
    ];
    if let Some(priority) = &ticket.priority {
        lines.push(detail_line("Priority", priority));
    }
    if let Some(assignee) = &ticket.assignee {
        lines.push(detail_line("Assignee", &assignee.display_name));
    }
    if let Some(parent) = &ticket.parent_key {
        lines.push(detail_line("Parent", parent));
    }
    lines.push(detail_line(
        "Updated",
        &ticket.updated.format("%Y-%m-%d %H:%M UTC").to_string(),
    ));
    lines.push(detail_line("Link", &ticket.browse_url));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "o open in browser   esc close",
        Style::default().fg(Color::DarkGray),
    )));

    let popup = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Ticket")
            .padding(Padding::uniform(1)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn detail_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<9}"), Style::default().fg(Color::DarkGray)),
        Span::raw(value.to_string()),
    ])
}

// ---------------------------------------------------------------------------
// Full-screen states
// ---------------------------------------------------------------------------

fn draw_ended(frame: &mut Frame, meeting: &Meeting) {
    let area = centered_rect(50, 40, frame.area());
    let lines = vec![
        Line::from(Span::styled(
            "All done!",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::raw("Great standup, team!"),
        Line::raw(""),
        Line::raw(format!(
            "{} team members · {} tickets covered",
            meeting.speakers().len(),
            meeting.tickets().len()
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "r start a new standup   q quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).padding(Padding::vertical(1)));
    frame.render_widget(paragraph, area);
}

fn draw_no_speakers(frame: &mut Frame) {
    let area = centered_rect(70, 60, frame.area());
    let lines = vec![
        Line::from(Span::styled(
            "No team members found",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw("No users with assigned tickets were found in the current active sprint."),
        Line::raw(""),
        Line::raw("Possible reasons:"),
        Line::raw("  - no active sprint in your Jira project"),
        Line::raw("  - no tickets assigned to anyone in the active sprint"),
        Line::raw("  - Jira credentials not configured"),
        Line::raw(""),
        Line::raw("Assign sprint tickets to team members and rerun `standup run`."),
        Line::raw(""),
        Line::from(Span::styled("q quit", Style::default().fg(Color::DarkGray))),
    ];
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).padding(Padding::uniform(1)));
    frame.render_widget(paragraph, area);
}

fn draw_failed(frame: &mut Frame, message: &str) {
    let area = centered_rect(70, 50, frame.area());
    let lines = vec![
        Line::from(Span::styled(
            "Something went wrong",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw(message.to_string()),
        Line::raw(""),
        Line::raw(
            "Check JIRA_URL, JIRA_EMAIL, JIRA_API_TOKEN and JIRA_PROJECT_KEY in your \
             environment, then rerun `standup run`.",
        ),
        Line::raw(""),
        Line::from(Span::styled("q quit", Style::default().fg(Color::DarkGray))),
    ];
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).padding(Padding::uniform(1)));
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

fn countdown_color(remaining: u32) -> Color {
    if remaining <= 10 {
        Color::Red
    } else if remaining <= 30 {
        Color::Yellow
    } else {
        ACCENT
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
