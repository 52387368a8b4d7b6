// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::users::UserCommandService,
        ports::{security::TokenVerifier, time::Clock},
        queries::users::UserQueryService,
    },
    domain::user::UserRepository,
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    token_verifier: Arc<dyn TokenVerifier>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        token_verifier: Arc<dyn TokenVerifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        Self {
            user_commands,
            user_queries,
            token_verifier,
        }
    }

    pub fn token_verifier(&self) -> Arc<dyn TokenVerifier> {
        Arc::clone(&self.token_verifier)
    }
}
