use std::env;

/// Client-side session state, resolved once at startup and handed to the
/// views that need it. A missing user id is a valid state (not logged in),
/// not an error.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user_id: Option<String>,
}

impl Session {
    pub fn new(user_id: Option<String>) -> Self {
        Self { user_id }
    }

    /// The terminal client keeps the logged-in user id in `MARQUEE_USER_ID`.
    pub fn from_env() -> Self {
        let user_id = env::var("MARQUEE_USER_ID").ok().filter(|v| !v.is_empty());
        Self { user_id }
    }
}
