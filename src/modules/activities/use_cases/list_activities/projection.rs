use crate::modules::activities::core::activity::{Activity, spots_left};
use serde::Serialize;

/// Read model of an activity. The name is the key of the listing map, so it
/// is left out of the serialized body.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ActivityView {
    #[serde(skip_serializing)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<&Activity> for ActivityView {
    fn from(activity: &Activity) -> Self {
        Self {
            name: activity.name.clone(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            max_participants: activity.max_participants,
            participants: activity.participants().to_vec(),
        }
    }
}

impl ActivityView {
    pub fn spots_left(&self) -> u32 {
        spots_left(self.max_participants, self.participants.len())
    }
}
