// ============================================================================
// AUTH STATE - Sesión de autenticación (la escribe solo use_auth)
// ============================================================================

use crate::models::User;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthSession {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
    /// Sube en cada login/logout; una revalidación iniciada antes no aplica
    revision: u64,
}

impl AuthSession {
    /// Sesión restaurada desde storage (o vacía)
    pub fn restored(user: Option<User>) -> Self {
        Self {
            user,
            loading: false,
            error: None,
            revision: 0,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn begin_request(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn signed_in(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
        self.error = None;
        self.revision += 1;
    }

    pub fn failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Logout - limpiar todo
    pub fn signed_out(&mut self) {
        self.user = None;
        self.loading = false;
        self.error = None;
        self.revision += 1;
    }

    /// Resultado de revalidar el token guardado (`None` = inválido).
    /// Se descarta si hubo login/logout desde `started_at`.
    pub fn revalidated(&mut self, started_at: u64, user: Option<User>) -> bool {
        if started_at != self.revision {
            log::debug!(
                "ℹ️ [AUTH] Revalidación obsoleta descartada (rev {} != {})",
                started_at,
                self.revision
            );
            return false;
        }
        match user {
            Some(user) => self.user = Some(user),
            None => {
                self.user = None;
                self.revision += 1;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn user(role: Role) -> User {
        User {
            id: 5,
            name: "Lata".into(),
            email: "lata@example.in".into(),
            role,
            green_coins: 10,
            is_verified: true,
            created_at: None,
        }
    }

    #[test]
    fn failed_login_keeps_user_signed_out_with_message() {
        let mut session = AuthSession::default();
        session.begin_request();
        assert!(session.loading);
        session.failed("Invalid credentials".into());
        assert!(!session.loading);
        assert!(!session.is_logged_in());
        assert_eq!(session.error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn sign_in_then_out() {
        let mut session = AuthSession::default();
        session.failed("previous".into());
        session.signed_in(User {
            id: 3,
            name: "Meena".into(),
            email: "meena@example.in".into(),
            role: Role::Helper,
            green_coins: 0,
            is_verified: false,
            created_at: None,
        });
        assert!(session.is_logged_in());
        assert_eq!(session.error, None);
        session.signed_out();
        assert!(!session.is_logged_in());
        assert_eq!(session.error, None);
        assert_eq!(session.revision(), 2);
    }

    #[test]
    fn revalidation_started_before_a_login_is_ignored() {
        let mut session = AuthSession::restored(Some(user(Role::Artist)));
        let started_at = session.revision();

        session.begin_request();
        session.signed_in(user(Role::Helper));

        assert!(!session.revalidated(started_at, None));
        assert_eq!(session.user.as_ref().map(|u| u.role), Some(Role::Helper));
    }

    #[test]
    fn current_revalidation_applies() {
        let mut session = AuthSession::restored(Some(user(Role::Artist)));
        let started_at = session.revision();
        let mut refreshed = user(Role::Artist);
        refreshed.green_coins = 99;

        assert!(session.revalidated(started_at, Some(refreshed.clone())));
        assert_eq!(session.user, Some(refreshed));

        let started_at = session.revision();
        assert!(session.revalidated(started_at, None));
        assert!(!session.is_logged_in());
    }
}
