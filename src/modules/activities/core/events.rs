#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityEvent {
    ParticipantSignedUp { activity_name: String, email: String },
    ParticipantUnregistered { activity_name: String, email: String },
}

impl ActivityEvent {
    pub fn activity_name(&self) -> &str {
        match self {
            Self::ParticipantSignedUp { activity_name, .. }
            | Self::ParticipantUnregistered { activity_name, .. } => activity_name,
        }
    }
}
