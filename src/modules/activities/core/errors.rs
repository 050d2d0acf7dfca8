use thiserror::Error;

/// Reasons the roster refuses a sign-up or unregister request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },

    #[error("{activity} is full ({max_participants} participants)")]
    ActivityFull {
        activity: String,
        max_participants: u32,
    },

    #[error("{email} is not signed up for {activity}")]
    NotSignedUp { activity: String, email: String },
}
