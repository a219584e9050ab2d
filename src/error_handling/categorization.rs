//! Resolver error categorization.
//!
//! Maps hickory resolver errors onto the coarse [`LookupFailure`] categories
//! reported with unresolved outcomes.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;

use super::types::{LookupError, LookupFailure};

/// Categorizes a `ResolveError` into a `LookupFailure`.
///
/// # Arguments
///
/// * `error` - The `ResolveError` to categorize
///
/// # Returns
///
/// The matching `LookupFailure` category.
pub fn categorize_resolve_error(error: &ResolveError) -> LookupFailure {
    match error.kind() {
        ResolveErrorKind::Timeout => LookupFailure::Timeout,
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            categorize_response_code(*response_code)
        }
        ResolveErrorKind::Io(_) | ResolveErrorKind::Proto(_) => LookupFailure::Network,
        ResolveErrorKind::NoConnections => LookupFailure::Network,
        _ => LookupFailure::Other,
    }
}

/// Categorizes the response code of a negative answer.
pub fn categorize_response_code(code: ResponseCode) -> LookupFailure {
    match code {
        ResponseCode::NXDomain => LookupFailure::NxDomain,
        ResponseCode::NoError | ResponseCode::Refused => LookupFailure::NoRecords,
        ResponseCode::ServFail => LookupFailure::Network,
        _ => LookupFailure::Other,
    }
}

impl From<ResolveError> for LookupError {
    fn from(error: ResolveError) -> Self {
        LookupError::new(categorize_resolve_error(&error), error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_timeout() {
        let error = ResolveError::from(ResolveErrorKind::Timeout);
        assert_eq!(categorize_resolve_error(&error), LookupFailure::Timeout);
    }

    #[test]
    fn test_categorize_message() {
        let error = ResolveError::from("resolver exploded");
        assert_eq!(categorize_resolve_error(&error), LookupFailure::Other);
    }

    #[test]
    fn test_categorize_io() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let error = ResolveError::from(io);
        assert_eq!(categorize_resolve_error(&error), LookupFailure::Network);
    }

    #[test]
    fn test_categorize_response_codes() {
        assert_eq!(
            categorize_response_code(ResponseCode::NXDomain),
            LookupFailure::NxDomain
        );
        assert_eq!(
            categorize_response_code(ResponseCode::NoError),
            LookupFailure::NoRecords
        );
        assert_eq!(
            categorize_response_code(ResponseCode::ServFail),
            LookupFailure::Network
        );
        assert_eq!(
            categorize_response_code(ResponseCode::FormErr),
            LookupFailure::Other
        );
    }

    #[test]
    fn test_lookup_error_from_resolve_error_keeps_message() {
        let error: LookupError = ResolveError::from(ResolveErrorKind::Timeout).into();
        assert_eq!(error.kind, LookupFailure::Timeout);
        assert!(!error.message.is_empty());
    }
}
