use thiserror::Error;
use truco_core::SnapshotError;

/// Contract violations detected while answering a decision query.
///
/// Every variant points at a bug in the caller; policies never swap them for
/// a default decision.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("decision requires at least one card in hand")]
    EmptyHand,
    #[error("invalid round state: {0}")]
    InvalidRoundState(String),
    #[error("{0} is not a recognised stake level")]
    UnknownStakeLevel(u8),
}

impl From<SnapshotError> for PolicyError {
    fn from(err: SnapshotError) -> Self {
        match err {
            SnapshotError::UnknownStakeLevel(points) => PolicyError::UnknownStakeLevel(points),
            other => PolicyError::InvalidRoundState(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PolicyError;
    use truco_core::SnapshotError;

    #[test]
    fn snapshot_errors_map_to_policy_taxonomy() {
        assert_eq!(
            PolicyError::from(SnapshotError::UnknownStakeLevel(5)),
            PolicyError::UnknownStakeLevel(5)
        );
        let err = PolicyError::from(SnapshotError::TooManyTricks { recorded: 3 });
        assert!(matches!(err, PolicyError::InvalidRoundState(ref msg) if msg.contains("3 trick")));
    }
}
