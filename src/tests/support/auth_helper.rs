#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;

    use actix_web::web;
    use uuid::Uuid;

    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::auth::application::domain::entities::AdminIdentity;
    use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

    pub fn create_test_jwt_service() -> JwtTokenService {
        let jwt_config = JwtConfig::new(
            "test_secret_key_for_testing_only_0123456789".to_string(),
            "portfolio-test".to_string(),
        )
        .expect("test secret is long enough");
        JwtTokenService::new(jwt_config)
    }

    /// Signs a token for a fresh identity carrying `role`.
    pub fn token_for_role(role: &str) -> String {
        let identity = AdminIdentity {
            id: Uuid::new_v4(),
            username: "admin".to_string(),
            role: role.to_string(),
        };
        create_test_jwt_service()
            .generate_access_token(&identity)
            .expect("token generation should not fail in tests")
    }

    pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(create_test_jwt_service());
        web::Data::new(provider)
    }
}
