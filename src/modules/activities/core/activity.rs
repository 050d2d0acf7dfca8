/// An extracurricular offering with a bounded roster of participant emails.
///
/// The participant list never holds the same email twice. Order is kept only
/// so listings read in sign-up order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    participants: Vec<String>,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Seeds the roster. Duplicate emails are dropped.
    pub fn with_participants<I, S>(mut self, emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for email in emails {
            self.enroll(email.into());
        }
        self
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    pub fn spots_left(&self) -> u32 {
        spots_left(self.max_participants, self.participants.len())
    }

    /// Returns `false` when the email was already on the roster.
    pub(crate) fn enroll(&mut self, email: String) -> bool {
        if self.is_enrolled(&email) {
            return false;
        }
        self.participants.push(email);
        true
    }

    /// Returns `false` when the email was not on the roster.
    pub(crate) fn withdraw(&mut self, email: &str) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| p != email);
        self.participants.len() != before
    }
}

/// Seats still open; zero when a roster was seeded past capacity.
pub fn spots_left(max_participants: u32, taken: usize) -> u32 {
    let taken = u32::try_from(taken).unwrap_or(u32::MAX);
    max_participants.saturating_sub(taken)
}
