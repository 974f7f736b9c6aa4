use tracing::{debug, warn};

use crate::error::OpdError;
use crate::models::OpdStatus;

pub fn valid_transitions(current: OpdStatus) -> &'static [OpdStatus] {
    match current {
        OpdStatus::Waiting => &[OpdStatus::InProgress, OpdStatus::Cancelled],
        OpdStatus::InProgress => &[OpdStatus::Completed, OpdStatus::Cancelled],
        // Terminal states
        OpdStatus::Completed | OpdStatus::Cancelled => &[],
    }
}

pub fn validate_status_transition(from: OpdStatus, to: OpdStatus) -> Result<(), OpdError> {
    if !valid_transitions(from).contains(&to) {
        warn!("Invalid registration status transition attempted: {} -> {}", from, to);
        return Err(OpdError::InvalidStatusTransition { from, to });
    }

    debug!("Registration status transition validated: {} -> {}", from, to);
    Ok(())
}
