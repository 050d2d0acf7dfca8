use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::events::ActivityEvent;

pub fn evolve(mut activity: Activity, event: ActivityEvent) -> Activity {
    if event.activity_name() != activity.name {
        return activity;
    }
    match event {
        ActivityEvent::ParticipantSignedUp { email, .. } => {
            activity.enroll(email);
        }
        ActivityEvent::ParticipantUnregistered { email, .. } => {
            activity.withdraw(&email);
        }
    }
    activity
}
