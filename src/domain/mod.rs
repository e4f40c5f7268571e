//! Domain types for district-scoped complaint lookups.
//!
//! A staff member only ever sees complaints belonging to the district on their
//! profile. The raw district lives on the profile as free text; [`AccountKey`]
//! is the validated form used to filter the complaint table.

pub mod ranking;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Prefix shared by every council district account key.
pub const ACCOUNT_PREFIX: &str = "NYCC";

/// Errors raised when a profile's district cannot be turned into an account key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistrictError {
    #[error("district is empty")]
    Empty,

    #[error("district '{0}' must contain only digits")]
    NotNumeric(String),

    #[error("district '{0}' must be one or two digits")]
    TooLong(String),
}

/// Zero-padded district key of the form `NYCC<2 digits>`.
///
/// # Examples
///
/// ```rust
/// use councildesk::domain::AccountKey;
///
/// let key = AccountKey::from_district("7").unwrap();
/// assert_eq!(key.as_str(), "NYCC07");
/// assert_eq!(AccountKey::from_district("42").unwrap().to_string(), "NYCC42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountKey(String);

impl AccountKey {
    /// Formats a raw profile district into its account key.
    ///
    /// Surrounding whitespace is ignored. The remaining value must be one or two
    /// ASCII digits; single digits are padded with a leading zero.
    pub fn from_district(raw: &str) -> Result<Self, DistrictError> {
        let district = raw.trim();

        if district.is_empty() {
            return Err(DistrictError::Empty);
        }
        if !district.chars().all(|c| c.is_ascii_digit()) {
            return Err(DistrictError::NotNumeric(district.to_string()));
        }
        if district.len() > 2 {
            return Err(DistrictError::TooLong(district.to_string()));
        }

        Ok(Self(format!("{ACCOUNT_PREFIX}{district:0>2}")))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<AccountKey> for String {
    fn from(key: AccountKey) -> Self {
        key.0
    }
}

/// Complaint column compared against an [`AccountKey`].
///
/// Most views match on `account`; the all-complaints view historically matched
/// on `council_dist`, so the column is selectable for that view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistrictField {
    #[default]
    Account,
    CouncilDist,
}

impl DistrictField {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::CouncilDist => "council_dist",
        }
    }
}

/// The authenticated principal for one request.
///
/// Inserted into the request extensions by the auth middleware and handed
/// explicitly to the services that need it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i32,
    pub username: String,
}

/// Request-scoped filter every complaint query runs under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictScope {
    pub user_id: i32,
    pub account_key: AccountKey,
}

impl DistrictScope {
    #[must_use]
    pub const fn new(user_id: i32, account_key: AccountKey) -> Self {
        Self {
            user_id,
            account_key,
        }
    }
}

/// Which slice of a district's complaints a listing returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplaintView {
    All,
    Open,
    Closed,
    Constituent,
}

impl ComplaintView {
    /// Label used in metrics and log fields.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Constituent => "constituent",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digit_district_is_padded() {
        let key = AccountKey::from_district("7").unwrap();
        assert_eq!(key.as_str(), "NYCC07");
    }

    #[test]
    fn test_two_digit_district_passes_through() {
        let key = AccountKey::from_district("42").unwrap();
        assert_eq!(key.as_str(), "NYCC42");

        let key = AccountKey::from_district("07").unwrap();
        assert_eq!(key.as_str(), "NYCC07");
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let key = AccountKey::from_district(" 5 ").unwrap();
        assert_eq!(key.as_str(), "NYCC05");
    }

    #[test]
    fn test_malformed_districts_are_rejected() {
        assert_eq!(AccountKey::from_district(""), Err(DistrictError::Empty));
        assert_eq!(AccountKey::from_district("   "), Err(DistrictError::Empty));
        assert_eq!(
            AccountKey::from_district("4a"),
            Err(DistrictError::NotNumeric("4a".to_string()))
        );
        assert_eq!(
            AccountKey::from_district("-1"),
            Err(DistrictError::NotNumeric("-1".to_string()))
        );
        assert_eq!(
            AccountKey::from_district("123"),
            Err(DistrictError::TooLong("123".to_string()))
        );
    }

    #[test]
    fn test_district_field_serde_names() {
        let json = serde_json::to_string(&DistrictField::CouncilDist).unwrap();
        assert_eq!(json, "\"council_dist\"");

        let field: DistrictField = serde_json::from_str("\"account\"").unwrap();
        assert_eq!(field, DistrictField::Account);
    }
}
