use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::core::errors::RosterError;
use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;

pub fn decide_unregister(activity: &Activity, command: &UnregisterFromActivity) -> Decision {
    if !activity.is_enrolled(&command.email) {
        return Decision::Rejected {
            reason: RosterError::NotSignedUp {
                activity: activity.name.clone(),
                email: command.email.clone(),
            },
        };
    }
    Decision::Accepted {
        events: vec![ActivityEvent::ParticipantUnregistered {
            activity_name: activity.name.clone(),
            email: command.email.clone(),
        }],
    }
}
