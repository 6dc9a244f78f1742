//! Resolved state validation.

use super::ResolvedFeatureState;
use crate::error::ResolveError;

/// Reject an enabled state that has no toolchain path.
///
/// A disabled state passes unchanged; its path and flags are not checked.
pub fn validate(state: ResolvedFeatureState) -> Result<ResolvedFeatureState, ResolveError> {
    if state.enabled && state.path.is_empty() {
        return Err(ResolveError::MissingToolchainPath);
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_without_path_fails() {
        let state = ResolvedFeatureState {
            enabled: true,
            path: String::new(),
            flags: "-O2".to_string(),
        };
        let err = validate(state).unwrap_err();
        assert!(matches!(err, ResolveError::MissingToolchainPath));
    }

    #[test]
    fn test_enabled_with_path_passes() {
        let state = ResolvedFeatureState {
            enabled: true,
            path: "/opt/tc".to_string(),
            flags: String::new(),
        };
        assert_eq!(validate(state.clone()).unwrap(), state);
    }

    #[test]
    fn test_disabled_is_not_checked() {
        let state = ResolvedFeatureState::default();
        assert!(validate(state).is_ok());
    }
}
