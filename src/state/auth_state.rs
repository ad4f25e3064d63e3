use crate::models::UserProfile;

/// An authenticated user. Protected screens are only reachable while one of
/// these exists.
#[derive(Debug, Clone)]
pub struct Session {
    pub uid: String,
    pub profile: UserProfile,
}

#[derive(Default)]
pub struct AuthState {
    pub session: Option<Session>,

    // Login / signup form
    pub email_input: String,
    pub password_input: String,
    pub name_input: String,
    pub signup_mode: bool,
    pub auth_in_progress: bool,
    pub auth_error: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn uid(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.uid.as_str())
    }

    pub fn clear_form(&mut self) {
        self.email_input.clear();
        self.password_input.clear();
        self.name_input.clear();
        self.auth_error = None;
        self.auth_in_progress = false;
    }
}
