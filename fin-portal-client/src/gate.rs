use fin_portal_common::session::{Role, Session};

use crate::pages::Page;

/// Decision of the route gatekeeper for a single render
#[derive(Debug, PartialEq, Eq)]
pub enum Gate {
    /// No session on a protected path, send the visitor to the login page
    Redirect,
    /// No session on the public login path, nothing to mount
    Anonymous,
    /// Active session, mount the portal for the role
    Mount(Role),
}

/// Decides what the current visitor may see. Called on every render, so it is
/// pure and idempotent; the caller performs any navigation side effect.
pub fn evaluate(session: Option<&Session>, path: &str) -> Gate {
    match session {
        Some(session) => Gate::Mount(session.role()),
        None if path == Page::Login.path() => Gate::Anonymous,
        None => Gate::Redirect,
    }
}

#[cfg(test)]
mod test {
    use fin_portal_common::session::{Role, Session};
    use rstest::rstest;
    use serde_json::json;

    use super::{evaluate, Gate};

    fn customer() -> Session {
        Session::from_login("c123", json!({"name": "Test User"})).expect("valid login input")
    }

    fn business() -> Session {
        Session::from_login("b9", json!({"business_name": "Test Firm"}))
            .expect("valid login input")
    }

    #[rstest]
    #[case::root("/")]
    #[case::products("/products")]
    #[case::myfin("/myfin")]
    #[case::unknown("/nowhere")]
    fn visitor_without_session_should_redirect_when(#[case] path: &str) {
        assert_eq!(evaluate(None, path), Gate::Redirect);
    }

    #[test]
    fn visitor_without_session_should_stay_on_login_path() {
        assert_eq!(evaluate(None, "/login"), Gate::Anonymous);
    }

    #[rstest]
    #[case::customer_portal(customer(), Role::Customer)]
    #[case::business_portal(business(), Role::Business)]
    fn session_should_mount_portal_for_role(#[case] session: Session, #[case] role: Role) {
        assert_eq!(evaluate(Some(&session), "/"), Gate::Mount(role));
    }

    #[test]
    fn logout_should_gate_the_next_render_back_to_login() {
        let session = customer();

        assert_eq!(evaluate(Some(&session), "/products"), Gate::Mount(Role::Customer));
        assert_eq!(evaluate(None, "/products"), Gate::Redirect);
    }
}
