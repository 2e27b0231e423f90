// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Capability, Role, UserId};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Build the acting user from the authority facts of a verified token.
pub(super) fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let mut claims = Claims::default();
    for fact in facts {
        claims.apply(fact.predicate);
    }
    claims.into_user()
}

#[derive(Default)]
struct Claims {
    user_id: Option<i64>,
    email: Option<String>,
    role: Option<Role>,
    issued_at: Option<u64>,
    expires_at: Option<u64>,
    capabilities: HashSet<Capability>,
}

impl Claims {
    fn apply(&mut self, predicate: Predicate) {
        match (predicate.name.as_str(), predicate.terms.as_slice()) {
            ("user", [Term::Integer(id), Term::Str(email)]) => {
                self.user_id = Some(*id);
                self.email = Some(email.clone());
            }
            ("role", [Term::Str(role)]) => self.role = role.parse().ok(),
            ("issued_at", [Term::Date(secs)]) => self.issued_at = Some(*secs),
            ("expires_at", [Term::Date(secs)]) => self.expires_at = Some(*secs),
            ("right", [Term::Str(resource), Term::Str(action)]) => {
                self.capabilities
                    .insert(Capability::new(resource.clone(), action.clone()));
            }
            _ => {}
        }
    }

    fn into_user(self) -> ApplicationResult<AuthenticatedUser> {
        let missing = |claim: &str| ApplicationError::unauthorized(format!("missing {claim}"));

        let id = UserId::new(self.user_id.ok_or_else(|| missing("user id"))?)?;
        let email = self.email.ok_or_else(|| missing("email"))?;
        let role = self.role.ok_or_else(|| missing("role"))?;
        let issued_at = timestamp(self.issued_at.ok_or_else(|| missing("issued_at"))?)?;
        let expires_at = timestamp(self.expires_at.ok_or_else(|| missing("expires_at"))?)?;

        Ok(AuthenticatedUser {
            id,
            email,
            role,
            capabilities: self.capabilities,
            issued_at,
            expires_at,
        })
    }
}

fn timestamp(secs: u64) -> ApplicationResult<DateTime<Utc>> {
    i64::try_from(secs)
        .ok()
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .ok_or_else(|| ApplicationError::unauthorized("timestamp out of range"))
}
