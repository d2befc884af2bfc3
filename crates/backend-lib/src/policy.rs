// ============================
// schoolhub-backend-lib/src/policy.rs
// ============================
//! Static access policy and the request gate decision table.
//!
//! The policy is built once at process start and read-only afterwards.
//! [`AccessPolicy::decide`] is a pure function of the request path and
//! the (possibly absent) principal; the middleware in
//! [`crate::middleware::gate`] applies the decision before any handler
//! runs.

use schoolhub_common::{Principal, Role};

/// Outcome of the request gate for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Let the request through to its handler.
    Allow,
    /// No valid principal: send the client to the sign-in page,
    /// carrying the originally requested path so it can return.
    RedirectToLogin {
        /// Path originally requested, passed back as `callbackUrl`
        callback: String,
    },
    /// Authenticated but wrong role for this area: send home.
    RedirectHome,
}

/// Path-prefix to allowed-role-set mapping plus the bypass categories.
///
/// First matching rule wins; every protected prefix maps to a non-empty
/// role set; unmatched paths require any authenticated principal.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    sign_in_path: String,
    home_path: String,
    bypass_prefixes: Vec<String>,
    rules: Vec<(String, Vec<Role>)>,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self {
            sign_in_path: "/auth/sign-in".to_string(),
            home_path: "/".to_string(),
            // Authentication pages, the self-authorizing API namespace
            // and framework/static assets skip the gate entirely.
            bypass_prefixes: vec![
                "/auth".to_string(),
                "/api".to_string(),
                "/_assets".to_string(),
            ],
            rules: vec![
                ("/admin".to_string(), vec![Role::Admin, Role::Staff]),
                ("/student".to_string(), vec![Role::Student]),
                ("/parent".to_string(), vec![Role::Parent]),
            ],
        }
    }
}

impl AccessPolicy {
    /// Sign-in page path used for login redirects.
    pub fn sign_in_path(&self) -> &str {
        &self.sign_in_path
    }

    /// Home path used for denial redirects.
    pub fn home_path(&self) -> &str {
        &self.home_path
    }

    /// Decide what to do with a request, first match wins:
    ///
    /// 1. bypass category -> allow
    /// 2. no principal -> redirect to sign-in with callback
    /// 3. restricted prefix, role not in set -> redirect home
    /// 4. otherwise -> allow
    pub fn decide(&self, path: &str, principal: Option<&Principal>) -> GateDecision {
        if self.is_bypass(path) {
            return GateDecision::Allow;
        }

        let Some(principal) = principal else {
            return GateDecision::RedirectToLogin {
                callback: path.to_string(),
            };
        };

        for (prefix, roles) in &self.rules {
            if Self::under_prefix(path, prefix) {
                if roles.contains(&principal.role) {
                    return GateDecision::Allow;
                }
                return GateDecision::RedirectHome;
            }
        }

        GateDecision::Allow
    }

    fn is_bypass(&self, path: &str) -> bool {
        if path == self.home_path {
            return true;
        }
        if self
            .bypass_prefixes
            .iter()
            .any(|prefix| Self::under_prefix(path, prefix))
        {
            return true;
        }
        // Any path whose final segment carries a file extension is a
        // static asset request.
        path.rsplit('/').next().is_some_and(|last| last.contains('.'))
    }

    fn under_prefix(path: &str, prefix: &str) -> bool {
        path == prefix
            || (path.starts_with(prefix) && path.as_bytes().get(prefix.len()) == Some(&b'/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn principal(role: Role) -> Principal {
        Principal {
            user_id: Uuid::new_v4(),
            role,
            linkage_id: Some(Uuid::new_v4()),
            display_name: "x".to_string(),
        }
    }

    #[test]
    fn bypass_paths_allow_without_principal() {
        let policy = AccessPolicy::default();
        for path in [
            "/",
            "/auth/sign-in",
            "/auth/sign-up",
            "/api/admin/stats",
            "/_assets/app.js",
            "/favicon.ico",
            "/admin/report.csv",
        ] {
            assert_eq!(policy.decide(path, None), GateDecision::Allow, "{path}");
        }
    }

    #[test]
    fn protected_path_without_principal_redirects_to_sign_in_with_callback() {
        let policy = AccessPolicy::default();
        assert_eq!(
            policy.decide("/admin/stats", None),
            GateDecision::RedirectToLogin {
                callback: "/admin/stats".to_string()
            }
        );
    }

    #[test]
    fn admin_area_admits_admin_and_staff_only() {
        let policy = AccessPolicy::default();
        let admin = principal(Role::Admin);
        let staff = principal(Role::Staff);
        let student = principal(Role::Student);
        let parent = principal(Role::Parent);

        assert_eq!(policy.decide("/admin/stats", Some(&admin)), GateDecision::Allow);
        assert_eq!(policy.decide("/admin/stats", Some(&staff)), GateDecision::Allow);
        assert_eq!(
            policy.decide("/admin/stats", Some(&student)),
            GateDecision::RedirectHome
        );
        assert_eq!(
            policy.decide("/admin/stats", Some(&parent)),
            GateDecision::RedirectHome
        );
    }

    #[test]
    fn student_area_admits_students_only() {
        let policy = AccessPolicy::default();
        assert_eq!(
            policy.decide("/student/dashboard", Some(&principal(Role::Student))),
            GateDecision::Allow
        );
        // An admin token is still the wrong tenant for the student area.
        assert_eq!(
            policy.decide("/student/dashboard", Some(&principal(Role::Admin))),
            GateDecision::RedirectHome
        );
    }

    #[test]
    fn parent_area_admits_parents_only() {
        let policy = AccessPolicy::default();
        assert_eq!(
            policy.decide("/parent/children", Some(&principal(Role::Parent))),
            GateDecision::Allow
        );
        assert_eq!(
            policy.decide("/parent/children", Some(&principal(Role::Staff))),
            GateDecision::RedirectHome
        );
    }

    #[test]
    fn unmatched_paths_require_any_authenticated_principal() {
        let policy = AccessPolicy::default();
        assert_eq!(
            policy.decide("/profile", Some(&principal(Role::Parent))),
            GateDecision::Allow
        );
        assert_eq!(
            policy.decide("/profile", None),
            GateDecision::RedirectToLogin {
                callback: "/profile".to_string()
            }
        );
    }

    #[test]
    fn prefix_matching_respects_segment_boundaries() {
        let policy = AccessPolicy::default();
        // "/administration" is not under the "/admin" prefix.
        assert_eq!(
            policy.decide("/administration", Some(&principal(Role::Student))),
            GateDecision::Allow
        );
    }
}
