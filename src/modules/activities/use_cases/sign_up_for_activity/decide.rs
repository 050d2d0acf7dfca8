use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::core::errors::RosterError;
use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;

pub fn decide_sign_up(activity: &Activity, command: &SignUpForActivity) -> Decision {
    if activity.is_enrolled(&command.email) {
        return Decision::Rejected {
            reason: RosterError::AlreadySignedUp {
                activity: activity.name.clone(),
                email: command.email.clone(),
            },
        };
    }
    if activity.is_full() {
        return Decision::Rejected {
            reason: RosterError::ActivityFull {
                activity: activity.name.clone(),
                max_participants: activity.max_participants,
            },
        };
    }
    Decision::Accepted {
        events: vec![ActivityEvent::ParticipantSignedUp {
            activity_name: activity.name.clone(),
            email: command.email.clone(),
        }],
    }
}
