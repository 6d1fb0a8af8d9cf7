use tubely_api::auth::JwtService;
use uuid::Uuid;

/// HS256 secret shared by the test config and the tokens minted here
pub const TEST_JWT_SECRET: &str = "tubely-test-secret-at-least-32-characters";

/// A user with a valid access token
pub struct TestUser {
    pub user_id: Uuid,
    pub token: String,
}

impl TestUser {
    pub fn new() -> Self {
        let user_id = Uuid::new_v4();
        let token = JwtService::new(TEST_JWT_SECRET, 1)
            .make_token(user_id)
            .expect("Failed to mint test token");
        Self { user_id, token }
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}
