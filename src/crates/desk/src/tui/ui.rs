//! Terminal UI rendering with ratatui.
//!
//! Pure read side: everything here renders from the store snapshot and the
//! app's view state. No function in this module mutates anything.

use super::app::{App, InputTarget, Screen};
use desk_core::model::{Role, Ticket, TicketPriority, TicketStatus};
use desk_core::policy::{self, NavTarget};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Render the main TUI frame.
pub fn draw(f: &mut Frame, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(40)])
        .split(f.area());

    draw_sidebar(f, app, columns[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Main content
            Constraint::Length(2), // Footer/status
        ])
        .split(columns[1]);

    draw_header(f, app, rows[0]);
    draw_content(f, app, rows[1]);
    draw_footer(f, app, rows[2]);
}

fn draw_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let user = app.current_user();
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            " deskline",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (index, target) in NavTarget::ALL.iter().enumerate() {
        if !policy::can_navigate(user.role, *target) {
            continue;
        }
        let label = format!(" {} {}", index + 1, target);
        let style = if app.nav() == *target {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(label, style)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" {}", user.name),
        Style::default().fg(Color::Green),
    )));
    lines.push(Line::from(Span::styled(
        format!(" {}", user.role),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " u: switch user",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        " q: quit",
        Style::default().fg(Color::DarkGray),
    )));

    let sidebar = Paragraph::new(lines).block(Block::default().borders(Borders::RIGHT));
    f.render_widget(sidebar, area);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let (title, subtitle) = match app.screen() {
        Screen::Dashboard => ("IT Operations Center", "Manage support tickets with AI-driven insights"),
        Screen::MyTickets => ("My Tickets", "Report and track your IT requests"),
        Screen::Detail => ("Ticket Details", "Full thread and triage controls"),
        Screen::Create => ("Support Portal", "Describe your issue; it will be categorized and prioritized for you"),
        Screen::Admin => ("System Administration", "Manage users, roles, and global system security"),
    };

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, Style::default().fg(Color::DarkGray))),
    ])
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, area);
}

fn draw_content(f: &mut Frame, app: &App, area: Rect) {
    match app.screen() {
        Screen::Dashboard => draw_ticket_list(f, app, area, true),
        Screen::MyTickets => draw_ticket_list(f, app, area, false),
        Screen::Detail => draw_ticket_detail(f, app, area),
        Screen::Create => draw_create_form(f, app, area),
        Screen::Admin => draw_admin_portal(f, app, area),
    }
}

fn draw_ticket_list(f: &mut Frame, app: &App, area: Rect, with_stats: bool) {
    let show_stats = with_stats && policy::shows_dashboard_stats(app.current_user().role);
    let chunks = if show_stats {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1)])
            .split(area)
    };

    if show_stats {
        let stats = app.dashboard_stats();
        let strip = Paragraph::new(Line::from(vec![
            Span::styled("Open: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                stats.open_count.to_string(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("High/Critical: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                stats.critical_count.to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("Avg Resolution: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.1}h", stats.avg_resolution_time_hours),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw("   "),
            Span::styled("SLA Breach Risk: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}%", stats.sla_breach_risk),
                Style::default().fg(Color::Magenta),
            ),
        ]))
        .block(Block::default().borders(Borders::ALL).title(" Overview "));
        f.render_widget(strip, chunks[0]);
    }

    let tickets = app.visible_tickets();
    let items: Vec<ListItem> = tickets
        .iter()
        .enumerate()
        .map(|(idx, ticket)| {
            let selected = idx == app.list_cursor;
            let prefix = if selected { "▶ " } else { "  " };
            let line = Line::from(vec![
                Span::raw(prefix),
                Span::styled(
                    format!("[{}] ", ticket.status),
                    Style::default().fg(status_color(ticket.status)),
                ),
                Span::styled(
                    format!("{} ", ticket.priority),
                    Style::default().fg(priority_color(ticket.priority)),
                ),
                Span::raw(ticket.title.clone()),
                Span::styled(
                    format!("  ({})", ticket.created_by.name),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            let style = if selected {
                Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let title = format!(" Tickets - Filter: {} (f to cycle) ", app.filter);
    let list_area = if show_stats { chunks[1] } else { chunks[0] };
    if items.is_empty() {
        let empty = Paragraph::new("No tickets found matching criteria.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(empty, list_area);
    } else {
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(list, list_area);
    }
}

fn draw_ticket_detail(f: &mut Frame, app: &App, area: Rect) {
    let Some(ticket) = app.selected_ticket() else {
        let missing = Paragraph::new("Ticket no longer available. Press Esc to go back.")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(missing, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Meta
            Constraint::Length(6), // AI panel
            Constraint::Min(4),    // Thread
            Constraint::Length(3), // Reply composer
        ])
        .split(area);

    draw_detail_meta(f, app, &ticket, chunks[0]);
    draw_ai_panel(f, &ticket, chunks[1]);
    draw_thread(f, app, &ticket, chunks[2]);
    draw_reply_composer(f, app, chunks[3]);
}

fn draw_detail_meta(f: &mut Frame, app: &App, ticket: &Ticket, area: Rect) {
    let assignee = ticket
        .assigned_to
        .as_ref()
        .map(|u| u.name.as_str())
        .unwrap_or("Unassigned");
    let mut meta = vec![
        Line::from(vec![
            Span::styled(
                ticket.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", ticket.status),
                Style::default().fg(status_color(ticket.status)),
            ),
            Span::raw(" "),
            Span::styled(
                format!("[{}]", ticket.priority),
                Style::default().fg(priority_color(ticket.priority)),
            ),
            Span::styled(format!(" [{}]", ticket.category), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(Span::styled(
            format!(
                "Reported by {} · Assigned to {} · {}",
                ticket.created_by.name,
                assignee,
                ticket.created_at.format("%Y-%m-%d %H:%M UTC")
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    if policy::can_triage(app.current_user().role) {
        meta.push(Line::from(Span::styled(
            "s: cycle status · a: cycle assignee · g: AI draft reply · r: reply",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        meta.push(Line::from(Span::styled(
            "r: reply",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Paragraph::new(meta).block(Block::default().borders(Borders::ALL));
    f.render_widget(block, area);
}

fn draw_ai_panel(f: &mut Frame, ticket: &Ticket, area: Rect) {
    let mut lines = Vec::new();
    match &ticket.ai_summary {
        Some(summary) => lines.push(Line::from(vec![
            Span::styled("Summary: ", Style::default().fg(Color::Magenta)),
            Span::raw(summary.clone()),
        ])),
        None => lines.push(Line::from(Span::styled(
            "No AI analysis available.",
            Style::default().fg(Color::DarkGray),
        ))),
    }
    for fix in &ticket.ai_suggested_fixes {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(Color::Yellow)),
            Span::raw(fix.clone()),
        ]));
    }

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" AI Insights "));
    f.render_widget(panel, area);
}

fn draw_thread(f: &mut Frame, app: &App, ticket: &Ticket, area: Rect) {
    let mut items: Vec<ListItem> = Vec::with_capacity(ticket.comments.len() + 1);

    // The original issue opens the thread.
    items.push(ListItem::new(vec![
        Line::from(Span::styled(
            format!("{} ({})", ticket.created_by.name, ticket.created_by.role),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(ticket.description.clone())),
        Line::from(""),
    ]));

    for comment in &ticket.comments {
        let mine = comment.user_id == app.current_user().id;
        let name_style = if mine {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
        };
        let mut name_line = vec![Span::styled(
            format!("{} ({})", comment.user_name, comment.user_role),
            name_style,
        )];
        if comment.is_ai_generated {
            name_line.push(Span::styled(" [AI]", Style::default().fg(Color::Magenta)));
        }
        name_line.push(Span::styled(
            format!("  {}", comment.timestamp.format("%H:%M")),
            Style::default().fg(Color::DarkGray),
        ));

        items.push(ListItem::new(vec![
            Line::from(name_line),
            Line::from(Span::raw(comment.content.clone())),
            Line::from(""),
        ]));
    }

    let thread = List::new(items).block(Block::default().borders(Borders::ALL).title(" Thread "));
    f.render_widget(thread, area);
}

fn draw_reply_composer(f: &mut Frame, app: &App, area: Rect) {
    let editing = app.input == Some(InputTarget::Reply);
    let (text, style) = if app.is_busy() {
        ("Drafting reply...".to_string(), Style::default().fg(Color::Magenta))
    } else if app.reply_buffer.is_empty() && !editing {
        ("Press r to reply, g for an AI draft".to_string(), Style::default().fg(Color::DarkGray))
    } else {
        (app.reply_buffer.clone(), Style::default().fg(Color::White))
    };

    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let composer = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Reply (Enter to send) "),
    );
    f.render_widget(composer, area);
}

fn draw_create_form(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Description
            Constraint::Length(4), // AI notice
        ])
        .split(area);

    let field_block = |label: &str, active: bool| {
        let style = if active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(format!(" {label} "))
    };

    let title_active = app.input == Some(InputTarget::CreateTitle) && !app.is_busy();
    let title = Paragraph::new(app.create.title.clone())
        .block(field_block("Issue Summary", title_active));
    f.render_widget(title, chunks[0]);

    let desc_active = app.input == Some(InputTarget::CreateDescription) && !app.is_busy();
    let description = Paragraph::new(app.create.description.clone())
        .wrap(Wrap { trim: false })
        .block(field_block("Detailed Description", desc_active));
    f.render_widget(description, chunks[1]);

    let notice = if app.is_busy() {
        Line::from(Span::styled(
            "Analyzing issue...",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            "Tab switches fields. Enter on the description submits; the ticket is \
             analyzed to suggest fixes and route it to the right expert.",
            Style::default().fg(Color::DarkGray),
        ))
    };
    let hint = Paragraph::new(notice)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" AI Assistant "));
    f.render_widget(hint, chunks[2]);
}

fn draw_admin_portal(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left: users and the add-user form.
    let user_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(3)])
        .split(columns[0]);

    let users = app.store().users();
    let user_items: Vec<ListItem> = users
        .iter()
        .map(|u| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{}  ", u.name)),
                Span::styled(u.role.to_string(), Style::default().fg(role_color(u.role))),
            ]))
        })
        .collect();
    let user_list =
        List::new(user_items).block(Block::default().borders(Borders::ALL).title(" Users "));
    f.render_widget(user_list, user_chunks[0]);

    let adding = app.input == Some(InputTarget::AdminName);
    let role = Role::ALL[app.admin.role_cursor];
    let add_user = Paragraph::new(Line::from(vec![
        Span::raw(app.admin.name.clone()),
        Span::styled(
            format!("  [role: {role} - o to cycle]"),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if adding {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            })
            .title(" Add User (n to edit, Enter to add) "),
    );
    f.render_widget(add_user, user_chunks[1]);

    // Right: security settings draft.
    let settings = app.admin.draft_settings;
    let entries = [
        ("Allow Guest Signup", settings.allow_guest_signup),
        ("Enforce MFA", settings.enforce_mfa),
        ("Enable AI Triage", settings.enable_ai_triage),
        ("Restrict Ticket Deletion", settings.restrict_deletion),
        ("Maintenance Mode", settings.maintenance_mode),
    ];
    let setting_items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(idx, (label, enabled))| {
            let cursor = if idx == app.admin.settings_cursor { "▶ " } else { "  " };
            let state = if *enabled { "[on] " } else { "[off]" };
            let state_color = if *enabled { Color::Green } else { Color::DarkGray };
            ListItem::new(Line::from(vec![
                Span::raw(cursor),
                Span::styled(state, Style::default().fg(state_color)),
                Span::raw(format!(" {label}")),
            ]))
        })
        .collect();
    let settings_list = List::new(setting_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Security Settings (space toggles, w saves) "),
    );
    f.render_widget(settings_list, columns[1]);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![Span::styled(
        app.status_line.clone(),
        Style::default().fg(Color::Yellow),
    )]))
    .block(Block::default().borders(Borders::TOP));
    f.render_widget(footer, area);
}

fn status_color(status: TicketStatus) -> Color {
    match status {
        TicketStatus::Open => Color::Green,
        TicketStatus::InProgress => Color::Blue,
        TicketStatus::Resolved => Color::Cyan,
        TicketStatus::Closed => Color::DarkGray,
    }
}

fn priority_color(priority: TicketPriority) -> Color {
    match priority {
        TicketPriority::Low => Color::DarkGray,
        TicketPriority::Medium => Color::Yellow,
        TicketPriority::High => Color::LightRed,
        TicketPriority::Critical => Color::Red,
    }
}

fn role_color(role: Role) -> Color {
    match role {
        Role::Employee => Color::White,
        Role::Agent => Color::Green,
        Role::Manager => Color::Cyan,
        Role::Admin => Color::Magenta,
    }
}
