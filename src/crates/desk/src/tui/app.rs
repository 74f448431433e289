//! Application state management for the TUI.
//!
//! `App` owns the explicit view state (current user, navigation target,
//! selection, filter, input buffers) and holds the [`TicketStore`] it
//! mutates on behalf of the user. It never talks to the network: key
//! handling returns an [`AssistJob`] when an AI call is needed, the event
//! loop runs it, and the completion comes back through
//! [`App::apply_assist`]. While a job is outstanding the affected view is
//! busy and its input is disabled.

use assist::TicketAnalysis;
use crossterm::event::{KeyCode, KeyEvent};
use desk_core::model::{AppSettings, DashboardStats, Role, Ticket, TicketCategory, TicketPriority, TicketStatus, User};
use desk_core::policy::{self, NavTarget, TicketFilter};
use desk_core::store::{TicketDraft, TicketStore};
use desk_core::stats;
use tracing::debug;

/// What the main panel is currently showing. Derived from navigation state
/// the same way the view hierarchy resolves it: creation and admin win,
/// then an open selection, then the list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    MyTickets,
    Detail,
    Create,
    Admin,
}

/// Which text field keystrokes currently land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTarget {
    CreateTitle,
    CreateDescription,
    Reply,
    AdminName,
}

/// Ticket creation form state.
#[derive(Debug, Default, Clone)]
pub struct CreateForm {
    pub title: String,
    pub description: String,
}

/// Admin portal state: the add-user form and the settings draft edited in
/// place until saved wholesale.
#[derive(Debug, Clone)]
pub struct AdminForm {
    pub name: String,
    pub role_cursor: usize,
    pub settings_cursor: usize,
    pub draft_settings: AppSettings,
}

/// An AI call the event loop should run on behalf of the UI.
#[derive(Debug, Clone)]
pub enum AssistJob {
    Analyze {
        request_id: u64,
        title: String,
        description: String,
    },
    Draft {
        request_id: u64,
        ticket: Ticket,
    },
}

/// Completion of an [`AssistJob`]. Stale completions (the user has since
/// navigated away or started something else) are ignored, not errors.
#[derive(Debug, Clone)]
pub enum AssistOutcome {
    Analysis {
        request_id: u64,
        analysis: TicketAnalysis,
    },
    Draft {
        request_id: u64,
        ticket_id: String,
        text: String,
    },
}

/// Creation submitted and awaiting its analysis.
#[derive(Debug, Clone)]
struct PendingCreate {
    request_id: u64,
    author: User,
    title: String,
    description: String,
}

/// Application state.
pub struct App {
    store: TicketStore,
    current_user: User,
    nav: NavTarget,
    selected_ticket_id: Option<String>,
    pub filter: TicketFilter,
    pub list_cursor: usize,
    pub input: Option<InputTarget>,
    pub create: CreateForm,
    pub admin: AdminForm,
    pub reply_buffer: String,
    busy: bool,
    pending_create: Option<PendingCreate>,
    pending_draft: Option<(u64, String)>,
    next_request_id: u64,
    pub status_line: String,
    running: bool,
}

impl App {
    /// Create the app over a seeded store. The first seeded user is the
    /// active one.
    pub fn new(store: TicketStore) -> Self {
        let current_user = store
            .users()
            .first()
            .cloned()
            .unwrap_or_else(|| User {
                id: "u0".into(),
                name: "Operator".into(),
                role: Role::Admin,
                avatar: String::new(),
            });
        let draft_settings = store.settings();

        Self {
            store,
            current_user,
            nav: NavTarget::Dashboard,
            selected_ticket_id: None,
            filter: TicketFilter::All,
            list_cursor: 0,
            input: None,
            create: CreateForm::default(),
            admin: AdminForm {
                name: String::new(),
                role_cursor: 0,
                settings_cursor: 0,
                draft_settings,
            },
            reply_buffer: String::new(),
            busy: false,
            pending_create: None,
            pending_draft: None,
            next_request_id: 0,
            status_line: String::new(),
            running: true,
        }
    }

    pub fn store(&self) -> &TicketStore {
        &self.store
    }

    pub fn current_user(&self) -> &User {
        &self.current_user
    }

    pub fn nav(&self) -> NavTarget {
        self.nav
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn should_quit(&self) -> bool {
        !self.running
    }

    pub fn screen(&self) -> Screen {
        if self.nav == NavTarget::CreateTicket {
            Screen::Create
        } else if self.nav == NavTarget::AdminPortal && self.current_user.role == Role::Admin {
            Screen::Admin
        } else if self.selected_ticket_id.is_some() {
            Screen::Detail
        } else if self.nav == NavTarget::MyTickets {
            Screen::MyTickets
        } else {
            Screen::Dashboard
        }
    }

    /// Tickets visible to the current user under the active filter,
    /// display-sorted.
    pub fn visible_tickets(&self) -> Vec<Ticket> {
        let tickets = self.store.tickets();
        policy::visible_tickets(&self.current_user, &tickets, self.filter)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn selected_ticket(&self) -> Option<Ticket> {
        self.selected_ticket_id
            .as_deref()
            .and_then(|id| self.store.ticket(id))
            .cloned()
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        stats::compute(&self.store.tickets())
    }

    /// Handle a key event. Returns an [`AssistJob`] when the action needs
    /// an AI call.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<AssistJob> {
        if self.input.is_some() {
            self.handle_editing_key(key)
        } else {
            self.handle_normal_key(key)
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> Option<AssistJob> {
        let target = self.input?;

        // The creation form and the reply composer are disabled while
        // their assist call is in flight.
        if self.busy
            && matches!(
                target,
                InputTarget::CreateTitle | InputTarget::CreateDescription | InputTarget::Reply
            )
        {
            return None;
        }

        match key.code {
            KeyCode::Esc => {
                self.input = None;
                None
            }
            KeyCode::Tab if matches!(target, InputTarget::CreateTitle) => {
                self.input = Some(InputTarget::CreateDescription);
                None
            }
            KeyCode::Tab if matches!(target, InputTarget::CreateDescription) => {
                self.input = Some(InputTarget::CreateTitle);
                None
            }
            KeyCode::Enter => match target {
                InputTarget::CreateTitle => {
                    self.input = Some(InputTarget::CreateDescription);
                    None
                }
                InputTarget::CreateDescription => self.submit_create(),
                InputTarget::Reply => {
                    self.send_reply();
                    None
                }
                InputTarget::AdminName => {
                    self.submit_add_user();
                    None
                }
            },
            KeyCode::Backspace => {
                self.buffer_mut(target).pop();
                None
            }
            KeyCode::Char(c) => {
                self.buffer_mut(target).push(c);
                None
            }
            _ => None,
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Option<AssistJob> {
        match key.code {
            KeyCode::Char('q') => {
                self.running = false;
                None
            }
            KeyCode::Char('u') => {
                self.switch_user();
                None
            }
            KeyCode::Char('1') => {
                self.navigate(NavTarget::Dashboard);
                None
            }
            KeyCode::Char('2') => {
                self.navigate(NavTarget::MyTickets);
                None
            }
            KeyCode::Char('3') => {
                self.navigate(NavTarget::CreateTicket);
                None
            }
            KeyCode::Char('4') => {
                self.navigate(NavTarget::AdminPortal);
                None
            }
            KeyCode::Char('f') => {
                self.cycle_filter();
                None
            }
            KeyCode::Esc => {
                self.back();
                None
            }
            _ => match self.screen() {
                Screen::Dashboard | Screen::MyTickets => {
                    self.handle_list_key(key);
                    None
                }
                Screen::Detail => self.handle_detail_key(key),
                Screen::Admin => {
                    self.handle_admin_key(key);
                    None
                }
                Screen::Create => None,
            },
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        let count = self.visible_tickets().len();
        match key.code {
            KeyCode::Up => {
                self.list_cursor = self.list_cursor.saturating_sub(1);
            }
            KeyCode::Down if count > 0 => {
                self.list_cursor = (self.list_cursor + 1).min(count - 1);
            }
            KeyCode::Enter => {
                if let Some(ticket) = self.visible_tickets().get(self.list_cursor) {
                    self.selected_ticket_id = Some(ticket.id.clone());
                    self.reply_buffer.clear();
                }
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) -> Option<AssistJob> {
        match key.code {
            KeyCode::Char('s') if policy::can_triage(self.current_user.role) => {
                self.cycle_status();
                None
            }
            KeyCode::Char('a') if policy::can_triage(self.current_user.role) => {
                self.cycle_assignee();
                None
            }
            KeyCode::Char('r') if !self.busy => {
                self.input = Some(InputTarget::Reply);
                None
            }
            KeyCode::Char('g') if policy::can_triage(self.current_user.role) => {
                self.request_draft()
            }
            _ => None,
        }
    }

    fn handle_admin_key(&mut self, key: KeyEvent) {
        const SETTING_COUNT: usize = 5;
        match key.code {
            KeyCode::Up => {
                self.admin.settings_cursor = self.admin.settings_cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                self.admin.settings_cursor =
                    (self.admin.settings_cursor + 1).min(SETTING_COUNT - 1);
            }
            KeyCode::Char(' ') => {
                let s = &mut self.admin.draft_settings;
                match self.admin.settings_cursor {
                    0 => s.allow_guest_signup = !s.allow_guest_signup,
                    1 => s.enforce_mfa = !s.enforce_mfa,
                    2 => s.enable_ai_triage = !s.enable_ai_triage,
                    3 => s.restrict_deletion = !s.restrict_deletion,
                    _ => s.maintenance_mode = !s.maintenance_mode,
                }
            }
            KeyCode::Char('w') => {
                self.store.replace_settings(self.admin.draft_settings);
                self.status_line = "Settings saved.".to_string();
            }
            KeyCode::Char('n') => {
                self.input = Some(InputTarget::AdminName);
            }
            KeyCode::Char('o') => {
                self.admin.role_cursor = (self.admin.role_cursor + 1) % Role::ALL.len();
            }
            _ => {}
        }
    }

    /// Cycle to the next user, reset the view (same behavior as the
    /// original user-switcher).
    pub fn switch_user(&mut self) {
        let users = self.store.users();
        if users.is_empty() {
            return;
        }
        let index = users
            .iter()
            .position(|u| u.id == self.current_user.id)
            .unwrap_or(0);
        self.current_user = users[(index + 1) % users.len()].clone();
        self.nav = NavTarget::Dashboard;
        self.selected_ticket_id = None;
        self.list_cursor = 0;
        self.input = None;
        self.status_line = format!(
            "Now acting as {} ({})",
            self.current_user.name, self.current_user.role
        );
    }

    /// Navigate to a destination, if the current role may reach it.
    /// Clears the ticket selection.
    pub fn navigate(&mut self, target: NavTarget) {
        if !policy::can_navigate(self.current_user.role, target) {
            self.status_line = format!("{} requires the ADMIN role.", target);
            return;
        }
        self.nav = target;
        self.selected_ticket_id = None;
        self.list_cursor = 0;
        self.input = match target {
            NavTarget::CreateTicket => Some(InputTarget::CreateTitle),
            _ => None,
        };
    }

    fn back(&mut self) {
        if self.selected_ticket_id.take().is_none() && self.nav != NavTarget::Dashboard {
            self.nav = NavTarget::Dashboard;
        }
        self.reply_buffer.clear();
    }

    fn cycle_filter(&mut self) {
        let values = TicketFilter::all_values();
        let index = values.iter().position(|f| *f == self.filter).unwrap_or(0);
        self.filter = values[(index + 1) % values.len()];
        self.list_cursor = 0;
    }

    fn cycle_status(&mut self) {
        let Some(ticket) = self.selected_ticket() else { return };
        let index = TicketStatus::ALL
            .iter()
            .position(|s| *s == ticket.status)
            .unwrap_or(0);
        let next = TicketStatus::ALL[(index + 1) % TicketStatus::ALL.len()];
        self.store.update_status(&ticket.id, next);
    }

    fn cycle_assignee(&mut self) {
        let Some(ticket) = self.selected_ticket() else { return };
        let users = self.store.users();
        let assignable = policy::assignable_users(&users);

        // Candidate ring: Unassigned, then each agent-class user.
        let current = ticket.assigned_to.as_ref().map(|u| u.id.as_str());
        let position = current
            .and_then(|id| assignable.iter().position(|u| u.id == id))
            .map(|i| i + 1)
            .unwrap_or(0);
        let next = (position + 1) % (assignable.len() + 1);
        let next_id = next.checked_sub(1).map(|i| assignable[i].id.clone());
        self.store.assign(&ticket.id, next_id.as_deref());
    }

    fn send_reply(&mut self) {
        let Some(ticket_id) = self.selected_ticket_id.clone() else { return };
        let author = self.current_user.clone();
        match self.store.add_comment(&ticket_id, &author, &self.reply_buffer, false) {
            Ok(()) => {
                self.reply_buffer.clear();
                self.status_line = "Reply sent.".to_string();
            }
            Err(err) => {
                self.status_line = err.to_string();
            }
        }
    }

    fn submit_create(&mut self) -> Option<AssistJob> {
        if self.busy {
            return None;
        }
        if self.create.title.trim().is_empty() || self.create.description.trim().is_empty() {
            self.status_line = "Title and description are required.".to_string();
            return None;
        }

        let title = self.create.title.clone();
        let description = self.create.description.clone();
        let author = self.current_user.clone();

        if !self.store.settings().enable_ai_triage {
            // Triage disabled: file with the deterministic defaults.
            let analysis = TicketAnalysis {
                category: TicketCategory::Other,
                priority: TicketPriority::Medium,
                summary: title.clone(),
                suggested_fixes: Vec::new(),
            };
            self.finish_create(author, title, description, analysis);
            return None;
        }

        let request_id = self.next_request_id();
        self.busy = true;
        self.status_line = "Analyzing issue...".to_string();
        self.pending_create = Some(PendingCreate {
            request_id,
            author,
            title: title.clone(),
            description: description.clone(),
        });
        Some(AssistJob::Analyze {
            request_id,
            title,
            description,
        })
    }

    fn request_draft(&mut self) -> Option<AssistJob> {
        if self.busy {
            return None;
        }
        let ticket = self.selected_ticket()?;

        let request_id = self.next_request_id();
        self.busy = true;
        self.status_line = "Drafting reply...".to_string();
        self.pending_draft = Some((request_id, ticket.id.clone()));
        Some(AssistJob::Draft { request_id, ticket })
    }

    fn submit_add_user(&mut self) {
        let name = self.admin.name.trim().to_string();
        if name.is_empty() {
            self.status_line = "User name is required.".to_string();
            return;
        }
        let role = Role::ALL[self.admin.role_cursor];
        let user = self.store.add_user(&name, role);
        self.admin.name.clear();
        self.input = None;
        self.status_line = format!("Added {} as {}.", user.name, user.role);
    }

    /// Apply an assist completion. Completions that no longer match the
    /// pending request are tolerated and dropped.
    pub fn apply_assist(&mut self, outcome: AssistOutcome) {
        match outcome {
            AssistOutcome::Analysis { request_id, analysis } => {
                let matches_pending = self
                    .pending_create
                    .as_ref()
                    .is_some_and(|p| p.request_id == request_id);
                if !matches_pending {
                    debug!(request_id, "Ignoring stale analysis result");
                    return;
                }
                let Some(pending) = self.pending_create.take() else { return };
                self.busy = false;
                self.finish_create(pending.author, pending.title, pending.description, analysis);
            }
            AssistOutcome::Draft { request_id, ticket_id, text } => {
                let matches_pending = self
                    .pending_draft
                    .as_ref()
                    .is_some_and(|(id, _)| *id == request_id);
                if !matches_pending {
                    debug!(request_id, "Ignoring stale draft result");
                    return;
                }
                self.pending_draft = None;
                self.busy = false;

                // The user may have navigated away while the draft was in
                // flight; the late result is simply dropped.
                if self.selected_ticket_id.as_deref() == Some(ticket_id.as_str()) {
                    self.reply_buffer = text;
                    self.input = Some(InputTarget::Reply);
                    self.status_line = "Draft ready. Edit and press Enter to send.".to_string();
                } else {
                    debug!(ticket_id, "Draft arrived after navigation, dropping");
                }
            }
        }
    }

    fn finish_create(&mut self, author: User, title: String, description: String, analysis: TicketAnalysis) {
        let ticket = self.store.create_ticket(
            &author,
            TicketDraft {
                title,
                description,
                category: analysis.category,
                priority: analysis.priority,
                ai_summary: Some(analysis.summary),
                ai_suggested_fixes: analysis.suggested_fixes,
            },
        );
        self.create = CreateForm::default();
        self.input = None;
        self.status_line = format!("Ticket {} created.", ticket.id);
        self.navigate(if author.role == Role::Employee {
            NavTarget::MyTickets
        } else {
            NavTarget::Dashboard
        });
    }

    fn buffer_mut(&mut self, target: InputTarget) -> &mut String {
        match target {
            InputTarget::CreateTitle => &mut self.create.title,
            InputTarget::CreateDescription => &mut self.create.description,
            InputTarget::Reply => &mut self.reply_buffer,
            InputTarget::AdminName => &mut self.admin.name,
        }
    }

    fn next_request_id(&mut self) -> u64 {
        self.next_request_id += 1;
        self.next_request_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use desk_core::seed;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(seed::demo_store())
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn first_seeded_user_is_active() {
        let app = app();
        assert_eq!(app.current_user().name, "Alice Agent");
        assert_eq!(app.screen(), Screen::Dashboard);
    }

    #[test]
    fn switch_user_cycles_and_resets_view() {
        let mut app = app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.screen(), Screen::Detail);

        app.handle_key(key(KeyCode::Char('u')));
        assert_eq!(app.current_user().name, "Bob Manager");
        assert_eq!(app.screen(), Screen::Dashboard);
    }

    #[test]
    fn non_admin_cannot_reach_admin_portal() {
        let mut app = app(); // Alice Agent
        app.handle_key(key(KeyCode::Char('4')));
        assert_eq!(app.nav(), NavTarget::Dashboard);
        assert!(app.status_line.contains("ADMIN"));

        // Cycle to Diana Admin (Alice -> Bob -> Eve -> Diana).
        for _ in 0..3 {
            app.switch_user();
        }
        app.handle_key(key(KeyCode::Char('4')));
        assert_eq!(app.screen(), Screen::Admin);
    }

    #[test]
    fn create_with_triage_disabled_files_immediately_with_defaults() {
        let mut app = app();
        let mut settings = app.store().settings();
        settings.enable_ai_triage = false;
        app.store.replace_settings(settings);

        app.navigate(NavTarget::CreateTicket);
        type_text(&mut app, "Broken mouse");
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "Left button double-clicks.");
        let job = app.handle_key(key(KeyCode::Enter));

        assert!(job.is_none());
        let tickets = app.store().tickets();
        assert_eq!(tickets[0].title, "Broken mouse");
        assert_eq!(tickets[0].category, TicketCategory::Other);
        assert_eq!(tickets[0].priority, TicketPriority::Medium);
        assert_eq!(tickets[0].ai_summary.as_deref(), Some("Broken mouse"));
        // Agent lands back on the dashboard after filing.
        assert_eq!(app.nav(), NavTarget::Dashboard);
    }

    #[test]
    fn create_with_triage_enabled_waits_for_analysis() {
        let mut app = app();
        app.navigate(NavTarget::CreateTicket);
        type_text(&mut app, "VPN fails");
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "Gateway timeout.");

        let job = app.handle_key(key(KeyCode::Enter));
        let Some(AssistJob::Analyze { request_id, .. }) = job else {
            panic!("expected an analysis job");
        };
        assert!(app.is_busy());
        assert_eq!(app.store().tickets().len(), 3); // nothing filed yet

        // Form input is disabled while the analysis is in flight.
        type_text(&mut app, "x");
        assert_eq!(app.create.title, "VPN fails");

        app.apply_assist(AssistOutcome::Analysis {
            request_id,
            analysis: TicketAnalysis {
                category: TicketCategory::Network,
                priority: TicketPriority::High,
                summary: "VPN gateway timeout.".into(),
                suggested_fixes: vec!["Check certificate.".into()],
            },
        });

        assert!(!app.is_busy());
        let tickets = app.store().tickets();
        assert_eq!(tickets.len(), 4);
        assert_eq!(tickets[0].category, TicketCategory::Network);
        assert_eq!(tickets[0].status, TicketStatus::Open);
    }

    #[test]
    fn stale_analysis_results_are_ignored() {
        let mut app = app();
        app.navigate(NavTarget::CreateTicket);
        type_text(&mut app, "t");
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "d");
        app.handle_key(key(KeyCode::Enter));

        app.apply_assist(AssistOutcome::Analysis {
            request_id: 999,
            analysis: TicketAnalysis {
                category: TicketCategory::Other,
                priority: TicketPriority::Medium,
                summary: "stale".into(),
                suggested_fixes: Vec::new(),
            },
        });
        assert_eq!(app.store().tickets().len(), 3);
        assert!(app.is_busy()); // the real request is still pending
    }

    #[test]
    fn draft_arriving_after_navigation_is_dropped() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter)); // open top ticket
        let Some(AssistJob::Draft { request_id, ticket }) =
            app.handle_key(key(KeyCode::Char('g')))
        else {
            panic!("expected a draft job");
        };

        app.handle_key(key(KeyCode::Esc)); // navigate away
        app.apply_assist(AssistOutcome::Draft {
            request_id,
            ticket_id: ticket.id,
            text: "Hello, we are on it.".into(),
        });

        assert!(app.reply_buffer.is_empty());
        assert!(!app.is_busy());
    }

    #[test]
    fn empty_reply_is_blocked_with_no_partial_append() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        let before = app.selected_ticket().unwrap().comments.len();

        app.handle_key(key(KeyCode::Char('r')));
        type_text(&mut app, "   ");
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.selected_ticket().unwrap().comments.len(), before);
        assert!(app.status_line.contains("empty"));
    }

    #[test]
    fn triage_keys_are_inert_for_employees() {
        let mut app = app();
        // Cycle to Eve Employee (Alice -> Bob -> Eve).
        app.switch_user();
        app.switch_user();
        assert_eq!(app.current_user().role, Role::Employee);

        app.handle_key(key(KeyCode::Enter)); // open own ticket
        assert_eq!(app.screen(), Screen::Detail);
        let before = app.selected_ticket().unwrap().status;

        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(app.selected_ticket().unwrap().status, before);

        // The AI-draft action is agent-class only, like the other
        // triage controls.
        let job = app.handle_key(key(KeyCode::Char('g')));
        assert!(job.is_none());
        assert!(!app.is_busy());
    }

    #[test]
    fn reply_composer_is_locked_while_draft_is_in_flight() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter)); // open top ticket
        let Some(AssistJob::Draft { request_id, ticket }) =
            app.handle_key(key(KeyCode::Char('g')))
        else {
            panic!("expected a draft job");
        };
        assert!(app.is_busy());

        // Entering reply mode is blocked until the draft lands.
        app.handle_key(key(KeyCode::Char('r')));
        assert!(app.input.is_none());

        // Even with the composer focused, keystrokes are swallowed so the
        // arriving draft cannot clobber typed text.
        app.input = Some(InputTarget::Reply);
        type_text(&mut app, "typed while busy");
        assert!(app.reply_buffer.is_empty());

        app.apply_assist(AssistOutcome::Draft {
            request_id,
            ticket_id: ticket.id,
            text: "We are looking into it.".into(),
        });
        assert_eq!(app.reply_buffer, "We are looking into it.");
        assert_eq!(app.input, Some(InputTarget::Reply));
        assert!(!app.is_busy());
    }

    #[test]
    fn admin_saves_settings_wholesale() {
        let mut app = app();
        for _ in 0..3 {
            app.switch_user(); // Diana Admin
        }
        app.navigate(NavTarget::AdminPortal);

        // Toggle maintenance mode (last entry) in the draft, then save.
        for _ in 0..4 {
            app.handle_key(key(KeyCode::Down));
        }
        app.handle_key(key(KeyCode::Char(' ')));
        assert!(!app.store().settings().maintenance_mode); // draft only
        app.handle_key(key(KeyCode::Char('w')));
        assert!(app.store().settings().maintenance_mode);
    }

    #[test]
    fn admin_adds_user_with_selected_role() {
        let mut app = app();
        for _ in 0..3 {
            app.switch_user();
        }
        app.navigate(NavTarget::AdminPortal);

        app.handle_key(key(KeyCode::Char('o'))); // Employee -> Agent
        app.handle_key(key(KeyCode::Char('n')));
        type_text(&mut app, "Frank Fixer");
        app.handle_key(key(KeyCode::Enter));

        let users = app.store().users();
        let frank = users.iter().find(|u| u.name == "Frank Fixer").unwrap();
        assert_eq!(frank.role, Role::Agent);
        assert!(frank.avatar.contains("Frank+Fixer"));
    }
}
