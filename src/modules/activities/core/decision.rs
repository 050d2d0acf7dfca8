use crate::modules::activities::core::errors::RosterError;
use crate::modules::activities::core::events::ActivityEvent;

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { events: Vec<ActivityEvent> },
    Rejected { reason: RosterError },
}
