pub mod config;
pub mod error;
pub mod meeting;
pub mod person;
pub mod ticket;

pub use error::{Result, StandupError};
pub use meeting::{Advance, Meeting, MeetingPhase};
pub use person::Person;
pub use ticket::Ticket;
