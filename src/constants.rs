pub mod ranking {

    /// Number of distinct counts the top-complaints view keeps.
    pub const TOP_COMPLAINT_LIMIT: usize = 3;
}

pub mod auth {

    /// Session key holding the logged-in username.
    pub const SESSION_USER_KEY: &str = "user";

    /// Scheme used by the dashboard frontend (`Authorization: Token <key>`).
    pub const TOKEN_SCHEME: &str = "Token ";

    pub const BEARER_SCHEME: &str = "Bearer ";

    pub const API_KEY_HEADER: &str = "X-Api-Key";

    /// Shortest password `user add` accepts.
    pub const MIN_PASSWORD_LENGTH: usize = 8;
}
