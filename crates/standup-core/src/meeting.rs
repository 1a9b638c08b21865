use rand::Rng;

use crate::person::Person;
use crate::ticket::{tickets_for, Ticket};

// ---------------------------------------------------------------------------
// MeetingPhase / Advance
// ---------------------------------------------------------------------------

/// Observable phase of a meeting. Loading and fetch-error states belong to
/// the caller that performs the fetch; the machine only exists once data is
/// in hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingPhase {
    /// No one in the fetched sprint has an assigned ticket. Informational,
    /// not an error; terminal until the session is rebuilt.
    NoSpeakers,
    Active { running: bool },
    Ended,
}

/// Outcome of advancing past the current speaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the next speaker in the queue.
    Moved,
    /// The active speaker was the last one; the meeting is over.
    Ended,
}

// ---------------------------------------------------------------------------
// Meeting
// ---------------------------------------------------------------------------

/// One standup session: the ordered speaker queue, the active-speaker
/// pointer, the per-speaker countdown, and the inspected-ticket sub-state.
///
/// All mutation goes through the named transition methods below; the caller
/// owns exactly one `Meeting` per session and rebuilds it on restart-from-
/// scratch (page reload in the original sense).
#[derive(Debug, Clone)]
pub struct Meeting {
    speakers: Vec<Person>,
    tickets: Vec<Ticket>,
    active: usize,
    total: u32,
    remaining: u32,
    running: bool,
    ended: bool,
    inspecting: Option<String>,
}

impl Meeting {
    /// Build a session from fetch results. `people` is narrowed to those
    /// with at least one assigned ticket, first occurrence per id wins, so
    /// duplicates or ordering quirks in the user fetch cannot leak into the
    /// queue.
    pub fn new(people: Vec<Person>, tickets: Vec<Ticket>, total_seconds: u32) -> Self {
        let mut speakers: Vec<Person> = Vec::new();
        for person in people {
            if speakers.iter().any(|p| p.id == person.id) {
                continue;
            }
            if tickets.iter().any(|t| t.is_assigned_to(&person.id)) {
                speakers.push(person);
            }
        }

        Self {
            speakers,
            tickets,
            active: 0,
            total: total_seconds,
            remaining: total_seconds,
            running: false,
            ended: false,
            inspecting: None,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn phase(&self) -> MeetingPhase {
        if self.speakers.is_empty() {
            MeetingPhase::NoSpeakers
        } else if self.ended {
            MeetingPhase::Ended
        } else {
            MeetingPhase::Active {
                running: self.running,
            }
        }
    }

    pub fn speakers(&self) -> &[Person] {
        &self.speakers
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_speaker(&self) -> Option<&Person> {
        if self.ended {
            return None;
        }
        self.speakers.get(self.active)
    }

    /// Tickets belonging to the active speaker, in fetch order.
    pub fn active_tickets(&self) -> Vec<&Ticket> {
        match self.active_speaker() {
            Some(speaker) => tickets_for(&self.tickets, &speaker.id),
            None => Vec::new(),
        }
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining
    }

    pub fn total_seconds(&self) -> u32 {
        self.total
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn inspected_ticket(&self) -> Option<&Ticket> {
        let key = self.inspecting.as_deref()?;
        self.tickets.iter().find(|t| t.key == key)
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// Advance to the next speaker, or end the meeting when the active
    /// speaker is the last one. Resets and pauses the countdown on a move.
    pub fn next(&mut self) -> Option<Advance> {
        if self.speakers.is_empty() || self.ended {
            return None;
        }
        if self.active + 1 == self.speakers.len() {
            self.ended = true;
            self.running = false;
            Some(Advance::Ended)
        } else {
            self.active += 1;
            self.reset_countdown();
            Some(Advance::Moved)
        }
    }

    /// Step back one speaker, wrapping from the first to the last. Only
    /// meaningful with more than one speaker.
    pub fn previous(&mut self) {
        if self.speakers.len() <= 1 || self.ended {
            return;
        }
        self.active = (self.active + self.speakers.len() - 1) % self.speakers.len();
        self.reset_countdown();
    }

    /// Replace the queue with a uniformly random permutation (Fisher–Yates)
    /// and start over from the first speaker. A queue of one or zero is left
    /// untouched.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        if self.speakers.len() <= 1 || self.ended {
            return;
        }
        for i in (1..self.speakers.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.speakers.swap(i, j);
        }
        self.active = 0;
        self.reset_countdown();
    }

    /// Start the countdown if paused, pause it if running.
    pub fn toggle_timer(&mut self) {
        if self.speakers.is_empty() || self.ended {
            return;
        }
        self.running = !self.running;
    }

    /// Put the countdown back to the full duration, paused. The active
    /// speaker is unchanged.
    pub fn reset_timer(&mut self) {
        if self.speakers.is_empty() || self.ended {
            return;
        }
        self.reset_countdown();
    }

    /// One elapsed second. Decrements only while running; on reaching zero
    /// the countdown pauses and the session advances exactly once, exactly
    /// as a manual [`Meeting::next`] would.
    pub fn tick(&mut self) -> Option<Advance> {
        if !self.running || self.ended {
            return None;
        }
        if self.remaining <= 1 {
            self.remaining = 0;
            self.running = false;
            self.next()
        } else {
            self.remaining -= 1;
            None
        }
    }

    /// Leave the ended state and run the same queue again from the top.
    /// The ordering from the last shuffle is preserved.
    pub fn restart(&mut self) {
        if !self.ended {
            return;
        }
        self.ended = false;
        self.active = 0;
        self.reset_countdown();
    }

    /// Open the detail view for a ticket. Orthogonal to the main machine
    /// and available in every phase. Unknown keys are ignored.
    pub fn inspect(&mut self, key: &str) {
        if self.tickets.iter().any(|t| t.key == key) {
            self.inspecting = Some(key.to_string());
        }
    }

    pub fn close_inspection(&mut self) {
        self.inspecting = None;
    }

    fn reset_countdown(&mut self) {
        self.remaining = self.total;
        self.running = false;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
