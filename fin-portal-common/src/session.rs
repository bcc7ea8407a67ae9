use serde::{Deserialize, Serialize};

use crate::error::{FpError, FpResult};

/// Login form payload submitted to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Portal role of an authenticated user, fixed for the session's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Customer,
    Business,
}

impl Role {
    /// Display name of the portal mounted for this role
    pub const fn portal_name(self) -> &'static str {
        match self {
            Self::Customer => "Prefinity",
            Self::Business => "InsightGen",
        }
    }
}

/// Demographic fields merged from a customer login response. The backend merge
/// is never independently validated, so every field falls back to its default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerProfile {
    pub cid: i64,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub location: String,
    pub annual_income: f64,
    pub education: String,
    pub occupation: String,
}

/// Firm fields merged from a business login response, defaulted like
/// [CustomerProfile]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessProfile {
    pub bid: i64,
    pub category: String,
    pub business_name: String,
    pub revenue: f64,
    pub num_employees: u32,
}

/// Role specific profile attached to a [Session] at login. Internally tagged so
/// the serialized record keeps a single `role` discriminator next to the
/// profile fields, and two-way dispatch on the role is an exhaustive match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role")]
pub enum Profile {
    Customer(CustomerProfile),
    Business(BusinessProfile),
}

/// Authenticated identity held for the current browser tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub(crate) username: String,
    pub(crate) id: i64,
    #[serde(flatten)]
    pub(crate) profile: Profile,
}

impl Session {
    /// Builds a [Session] from the submitted `username` and the JSON `body` of
    /// a successful login response. The role comes from the username prefix
    /// (`c` is a customer, anything else a business), the id from the numeric
    /// suffix, and the remaining profile fields are merged from the body.
    /// # Errors
    /// This function will return an error if the username has no numeric
    /// suffix or the body cannot be deserialized into the role's profile
    pub fn from_login(username: &str, body: serde_json::Value) -> FpResult<Self> {
        let Some(suffix) = username.get(1..).filter(|suffix| !suffix.is_empty()) else {
            return Err(FpError::InvalidUsername(username.to_owned()));
        };
        let id: i64 = suffix.parse()?;
        let profile = if username.starts_with('c') {
            Profile::Customer(serde_json::from_value(body)?)
        } else {
            Profile::Business(serde_json::from_value(body)?)
        };
        Ok(Self {
            username: username.to_owned(),
            id,
            profile,
        })
    }

    /// Role of this session, derived from the attached profile
    pub const fn role(&self) -> Role {
        match self.profile {
            Profile::Customer(_) => Role::Customer,
            Profile::Business(_) => Role::Business,
        }
    }

    /// Name shown next to the avatar, the customer name or the registered
    /// business name
    pub fn display_name(&self) -> &str {
        match &self.profile {
            Profile::Customer(profile) => &profile.name,
            Profile::Business(profile) => &profile.business_name,
        }
    }

    /// Returns a string slice of the username submitted at login
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Backend identifier of the user, the `cid`/`bid` query value for data
    /// fetches
    pub const fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod test {
    use rstest::rstest;
    use serde_json::json;

    use super::{Profile, Role, Session};

    #[rstest]
    #[case::customer("c123", json!({"name": "Test User"}), Role::Customer, 123)]
    #[case::business("b42", json!({"business_name": "Test Firm"}), Role::Business, 42)]
    #[case::non_c_prefix("x7", json!({}), Role::Business, 7)]
    fn from_login_should_succeed_when(
        #[case] username: &str,
        #[case] body: serde_json::Value,
        #[case] role: Role,
        #[case] id: i64,
    ) {
        let session = Session::from_login(username, body).expect("valid login input");

        assert_eq!(session.role(), role);
        assert_eq!(session.id(), id);
        assert_eq!(session.username(), username);
    }

    #[rstest]
    #[case::empty("")]
    #[case::no_suffix("c")]
    #[case::non_numeric_suffix("cabc")]
    #[case::blank_suffix("c 1")]
    fn from_login_should_fail_when(#[case] username: &str) {
        let result = Session::from_login(username, json!({}));

        assert!(result.is_err(), "username `{username}` must be rejected");
    }

    #[test]
    fn from_login_should_merge_customer_profile() {
        let body = json!({"name": "Test User", "age": 30, "occupation": "Engineer"});

        let session = Session::from_login("c7", body).expect("valid login input");

        assert_eq!(session.display_name(), "Test User");
        let Profile::Customer(profile) = &session.profile else {
            panic!("expected a customer profile");
        };
        assert_eq!(profile.age, 30);
        assert_eq!(profile.occupation, "Engineer");
        assert_eq!(profile.cid, 0, "missing fields fall back to defaults");
    }

    #[test]
    fn from_login_should_merge_business_profile() {
        let body = json!({"business_name": "Test Firm", "revenue": 1250.5, "num_employees": 12});

        let session = Session::from_login("b55", body).expect("valid login input");

        assert_eq!(session.display_name(), "Test Firm");
        assert_eq!(session.role().portal_name(), "InsightGen");
        let Profile::Business(profile) = &session.profile else {
            panic!("expected a business profile");
        };
        assert_eq!(profile.revenue, 1250.5);
        assert_eq!(profile.num_employees, 12);
    }

    #[rstest]
    #[case::customer("c123", json!({"name": "Test User", "age": 30, "location": "Austin"}))]
    #[case::business("b9", json!({"business_name": "Test Firm", "category": "Retail"}))]
    fn session_should_round_trip_through_json(
        #[case] username: &str,
        #[case] body: serde_json::Value,
    ) {
        let session = Session::from_login(username, body).expect("valid login input");

        let raw = serde_json::to_string(&session).expect("session serializes");
        let rehydrated: Session = serde_json::from_str(&raw).expect("session deserializes");

        assert_eq!(rehydrated, session);
    }
}
