//! Business logic services

pub mod auth;
pub mod catalog;
pub mod password;

use crate::{config::JwtConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub catalog: catalog::CatalogService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, jwt_config: JwtConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), jwt_config),
            catalog: catalog::CatalogService::new(repository),
        }
    }
}
