//! Location codes for route lookups
//!
//! Codes are case-normalized to uppercase at construction. No format check
//! beyond non-emptiness: unknown codes are the database's concern.

use serde::Deserialize;

use super::ValidationError;

/// Upper-cased location code (e.g. `JFK`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocationCode(String);

impl LocationCode {
    /// Create a location code, upper-casing the input.
    ///
    /// # Example
    /// ```
    /// use flightdesk_server::models::LocationCode;
    ///
    /// assert_eq!(LocationCode::new("jfk", "from").unwrap().as_str(), "JFK");
    /// assert!(LocationCode::new("", "from").is_err());
    /// ```
    pub fn new(s: &str, field: &'static str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field });
        }

        Ok(Self(s.to_uppercase()))
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LocationCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Origin/destination pair for a flight-duration lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePair {
    pub origin: LocationCode,
    pub destination: LocationCode,
}

/// Raw `?from=..&to=..` query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl TryFrom<RouteParams> for RoutePair {
    type Error = ValidationError;

    /// Both ends are required; a missing or empty one rejects the whole pair.
    fn try_from(params: RouteParams) -> Result<Self, Self::Error> {
        let from = params.from.unwrap_or_default();
        let to = params.to.unwrap_or_default();

        match (LocationCode::new(&from, "from"), LocationCode::new(&to, "to")) {
            (Ok(origin), Ok(destination)) => Ok(Self {
                origin,
                destination,
            }),
            _ => Err(ValidationError::MissingRoute),
        }
    }
}
