use crossterm::event::{KeyCode, KeyEvent};
use rand::rngs::StdRng;
use ratatui::widgets::ListState;
use standup_core::{Meeting, MeetingPhase};

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// Top-level screen. `Failed` replaces the whole meeting view; it is the one
/// error surface of a session and is never shown as a transient message.
pub enum View {
    Failed(String),
    Meeting(Meeting),
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    pub view: View,
    pub board_url: Option<String>,
    pub ticket_list: ListState,
    rng: StdRng,
    timer_rearm: bool,
    quit: bool,
}

impl App {
    pub fn new(meeting: Meeting, board_url: Option<String>, rng: StdRng) -> Self {
        let mut app = Self {
            view: View::Meeting(meeting),
            board_url,
            ticket_list: ListState::default(),
            rng,
            timer_rearm: false,
            quit: false,
        };
        app.reset_ticket_selection();
        app
    }

    /// The fetch failed; all that is left to render is the error screen.
    pub fn failed(message: String, rng: StdRng) -> Self {
        Self {
            view: View::Failed(message),
            board_url: None,
            ticket_list: ListState::default(),
            rng,
            timer_rearm: false,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// True once per transition that reset the countdown. The event loop
    /// consumes this to re-arm its tick deadline, which is what keeps a
    /// single ticker alive across Next/Previous/Shuffle/Reset.
    pub fn take_timer_rearm(&mut self) -> bool {
        std::mem::take(&mut self.timer_rearm)
    }

    fn meeting_mut(&mut self) -> Option<&mut Meeting> {
        match &mut self.view {
            View::Meeting(meeting) => Some(meeting),
            View::Failed(_) => None,
        }
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('q') {
            self.quit = true;
            return;
        }

        let Some(meeting) = self.meeting_mut() else {
            return;
        };
        let phase = meeting.phase();
        let popup_open = meeting.inspected_ticket().is_some();

        match phase {
            MeetingPhase::NoSpeakers => {}
            MeetingPhase::Ended => {
                if let KeyCode::Char('r') | KeyCode::Char('R') = key.code {
                    if let Some(meeting) = self.meeting_mut() {
                        meeting.restart();
                    }
                    self.timer_rearm = true;
                    self.reset_ticket_selection();
                }
            }
            MeetingPhase::Active { .. } => {
                if popup_open {
                    self.on_key_in_popup(key.code);
                } else {
                    self.on_key_active(key.code);
                }
            }
        }
    }

    fn on_key_in_popup(&mut self, code: KeyCode) {
        let Some(meeting) = self.meeting_mut() else {
            return;
        };
        match code {
            KeyCode::Esc | KeyCode::Enter => meeting.close_inspection(),
            KeyCode::Char('o') => {
                if let Some(ticket) = meeting.inspected_ticket() {
                    // Browser failures are invisible from the alternate
                    // screen; nothing useful to do with them.
                    let _ = open::that(&ticket.browse_url);
                }
            }
            _ => {}
        }
    }

    fn on_key_active(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(' ') => {
                if let Some(meeting) = self.meeting_mut() {
                    meeting.toggle_timer();
                }
                self.timer_rearm = true;
            }
            KeyCode::Char('n') | KeyCode::Right => {
                if let Some(meeting) = self.meeting_mut() {
                    meeting.next();
                }
                self.timer_rearm = true;
                self.reset_ticket_selection();
            }
            KeyCode::Char('p') | KeyCode::Left => {
                if let Some(meeting) = self.meeting_mut() {
                    meeting.previous();
                }
                self.timer_rearm = true;
                self.reset_ticket_selection();
            }
            KeyCode::Char('s') => {
                if let View::Meeting(meeting) = &mut self.view {
                    meeting.shuffle(&mut self.rng);
                }
                self.timer_rearm = true;
                self.reset_ticket_selection();
            }
            KeyCode::Char('r') => {
                if let Some(meeting) = self.meeting_mut() {
                    meeting.reset_timer();
                }
                self.timer_rearm = true;
            }
            KeyCode::Down => self.move_ticket_selection(1),
            KeyCode::Up => self.move_ticket_selection(-1),
            KeyCode::Enter => {
                if let Some(key) = self.selected_ticket_key() {
                    if let Some(meeting) = self.meeting_mut() {
                        meeting.inspect(&key);
                    }
                }
            }
            KeyCode::Char('b') => {
                if let Some(url) = &self.board_url {
                    let _ = open::that(url);
                }
            }
            _ => {}
        }
    }

    /// Advance the countdown by one second.
    pub fn on_tick(&mut self) {
        if let View::Meeting(meeting) = &mut self.view {
            if meeting.tick().is_some() {
                self.reset_ticket_selection();
            }
        }
    }

    // -----------------------------------------------------------------------
    // Ticket selection
    // -----------------------------------------------------------------------

    fn selected_ticket_key(&self) -> Option<String> {
        let View::Meeting(meeting) = &self.view else {
            return None;
        };
        let index = self.ticket_list.selected()?;
        meeting
            .active_tickets()
            .get(index)
            .map(|t| t.key.clone())
    }

    fn reset_ticket_selection(&mut self) {
        let count = match &self.view {
            View::Meeting(meeting) => meeting.active_tickets().len(),
            View::Failed(_) => 0,
        };
        self.ticket_list
            .select(if count == 0 { None } else { Some(0) });
    }

    fn move_ticket_selection(&mut self, delta: i32) {
        let View::Meeting(meeting) = &self.view else {
            return;
        };
        let count = meeting.active_tickets().len();
        if count == 0 {
            return;
        }
        let current = self.ticket_list.selected().unwrap_or(0) as i32;
        let next = (current + delta).clamp(0, count as i32 - 1);
        self.ticket_list.select(Some(next as usize));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;
    use rand::SeedableRng;
    use standup_core::{Person, Ticket};

    fn person(id: &str, name: &str) -> Person {
        Person {
            id: id.to_string(),
            display_name: name.to_string(),
            email: format!("{id}@example.com"),
        }
    }

    fn ticket(key: &str, assignee_id: &str) -> Ticket {
        Ticket {
            key: key.to_string(),
            summary: format!("Summary for {key}"),
            status: "In Progress".to_string(),
            priority: None,
            assignee: Some(person(assignee_id, assignee_id)),
            updated: Utc.with_ymd_and_hms(2025, 6, 2, 9, 30, 0).unwrap(),
            parent_key: None,
            browse_url: format!("https://demo.atlassian.net/browse/{key}"),
        }
    }

    fn app() -> App {
        let people = vec![person("a", "A"), person("b", "B"), person("c", "C")];
        let tickets = vec![
            ticket("PROJ-1", "a"),
            ticket("PROJ-2", "a"),
            ticket("PROJ-3", "b"),
            ticket("PROJ-4", "c"),
        ];
        let meeting = Meeting::new(people, tickets, 60);
        App::new(meeting, None, StdRng::seed_from_u64(1))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.on_key(KeyEvent::from(code));
    }

    fn meeting(app: &App) -> &Meeting {
        match &app.view {
            View::Meeting(m) => m,
            View::Failed(_) => panic!("expected meeting view"),
        }
    }

    #[test]
    fn q_quits_from_any_view() {
        let mut a = app();
        press(&mut a, KeyCode::Char('q'));
        assert!(a.should_quit());

        let mut failed = App::failed("boom".into(), StdRng::seed_from_u64(1));
        press(&mut failed, KeyCode::Char('q'));
        assert!(failed.should_quit());
    }

    #[test]
    fn next_advances_and_rearms_the_ticker() {
        let mut a = app();
        press(&mut a, KeyCode::Char('n'));
        assert_eq!(meeting(&a).active_index(), 1);
        assert!(a.take_timer_rearm());
        // The flag is consumed.
        assert!(!a.take_timer_rearm());
    }

    #[test]
    fn space_toggles_and_ticks_count_down() {
        let mut a = app();
        press(&mut a, KeyCode::Char(' '));
        assert!(meeting(&a).is_running());
        a.on_tick();
        assert_eq!(meeting(&a).remaining_seconds(), 59);
        press(&mut a, KeyCode::Char(' '));
        assert!(!meeting(&a).is_running());
    }

    #[test]
    fn selection_resets_when_the_speaker_changes() {
        let mut a = app();
        press(&mut a, KeyCode::Down);
        assert_eq!(a.ticket_list.selected(), Some(1));
        press(&mut a, KeyCode::Char('n'));
        assert_eq!(a.ticket_list.selected(), Some(0));
    }

    #[test]
    fn selection_is_clamped_to_the_active_ticket_list() {
        let mut a = app();
        // Speaker "a" has two tickets.
        press(&mut a, KeyCode::Down);
        press(&mut a, KeyCode::Down);
        press(&mut a, KeyCode::Down);
        assert_eq!(a.ticket_list.selected(), Some(1));
        press(&mut a, KeyCode::Up);
        press(&mut a, KeyCode::Up);
        assert_eq!(a.ticket_list.selected(), Some(0));
    }

    #[test]
    fn enter_inspects_and_esc_closes() {
        let mut a = app();
        press(&mut a, KeyCode::Down);
        press(&mut a, KeyCode::Enter);
        assert_eq!(meeting(&a).inspected_ticket().unwrap().key, "PROJ-2");

        // Navigation keys are swallowed while the popup is open.
        press(&mut a, KeyCode::Char('n'));
        assert_eq!(meeting(&a).active_index(), 0);

        press(&mut a, KeyCode::Esc);
        assert!(meeting(&a).inspected_ticket().is_none());
    }

    #[test]
    fn restart_key_only_works_once_ended() {
        let mut a = app();
        press(&mut a, KeyCode::Char('n'));
        press(&mut a, KeyCode::Char('n'));
        press(&mut a, KeyCode::Char('n'));
        assert!(meeting(&a).is_ended());

        press(&mut a, KeyCode::Char('r'));
        assert!(!meeting(&a).is_ended());
        assert_eq!(meeting(&a).active_index(), 0);
    }

    #[test]
    fn shuffle_key_permutes_but_keeps_the_roster() {
        let mut a = app();
        let mut before: Vec<String> = meeting(&a)
            .speakers()
            .iter()
            .map(|p| p.id.clone())
            .collect();
        press(&mut a, KeyCode::Char('s'));
        let mut after: Vec<String> = meeting(&a)
            .speakers()
            .iter()
            .map(|p| p.id.clone())
            .collect();
        before.sort();
        after.sort();
        assert_eq!(before, after);
        assert_eq!(meeting(&a).active_index(), 0);
    }

    #[test]
    fn unattended_expiry_advances_via_on_tick() {
        let mut a = app();
        press(&mut a, KeyCode::Char(' '));
        for _ in 0..60 {
            a.on_tick();
        }
        assert_eq!(meeting(&a).active_index(), 1);
        assert!(!meeting(&a).is_running());
    }
}
