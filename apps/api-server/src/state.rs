//! Application state - shared across all handlers.

use std::sync::Arc;

use tecla_core::ports::{IdentityProvider, UserRepository};
use tecla_core::services::{AuthService, UserService};
use tecla_core::use_cases::{
    CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, LoginUseCase, RefreshTokenUseCase,
    RegisterCredentialsUseCase, UpdateUserUseCase, UserExistsUseCase,
};
use tecla_infra::InMemoryUserRepository;

#[cfg(feature = "postgres")]
use tecla_infra::{DatabaseConnections, PostgresUserRepository};

use crate::config::{AppConfig, IdentityProviderKind};

/// Shared application state. Every use case is wired once at startup.
#[derive(Clone)]
pub struct AppState {
    pub create_user: Arc<CreateUserUseCase>,
    pub get_user: Arc<GetUserUseCase>,
    pub update_user: Arc<UpdateUserUseCase>,
    pub delete_user: Arc<DeleteUserUseCase>,
    pub user_exists: Arc<UserExistsUseCase>,
    pub register_credentials: Arc<RegisterCredentialsUseCase>,
    pub login: Arc<LoginUseCase>,
    pub refresh_token: Arc<RefreshTokenUseCase>,
    pub environment: String,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Result<Self, String> {
        let identity = identity_provider(config)?;

        #[cfg(feature = "postgres")]
        let (db, user_repo): (Option<Arc<DatabaseConnections>>, Arc<dyn UserRepository>) = {
            if let Some(db_config) = &config.database {
                match DatabaseConnections::init(db_config).await {
                    Ok(connections) => {
                        let conn = Arc::new(connections);
                        let repo = Arc::new(PostgresUserRepository::new(conn.main.clone()));
                        (Some(conn), repo)
                    }
                    Err(e) if config.is_production() => {
                        return Err(format!("Failed to connect to database: {e}"));
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        (None, Arc::new(InMemoryUserRepository::new()))
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (None, Arc::new(InMemoryUserRepository::new()))
            }
        };

        #[cfg(not(feature = "postgres"))]
        let user_repo: Arc<dyn UserRepository> = {
            tracing::info!("Running without postgres feature - using in-memory repository");
            Arc::new(InMemoryUserRepository::new())
        };

        let mut state = Self::from_ports(user_repo, identity);
        state.environment = config.environment.clone();
        #[cfg(feature = "postgres")]
        {
            state.db = db;
        }

        tracing::info!("Application state initialized");
        Ok(state)
    }

    /// Wire services and use cases around the given ports.
    pub fn from_ports(
        user_repo: Arc<dyn UserRepository>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        let users = Arc::new(UserService::new(user_repo));
        let auth = Arc::new(AuthService::new(identity));

        Self {
            create_user: Arc::new(CreateUserUseCase::new(users.clone())),
            get_user: Arc::new(GetUserUseCase::new(users.clone())),
            update_user: Arc::new(UpdateUserUseCase::new(users.clone())),
            delete_user: Arc::new(DeleteUserUseCase::new(users.clone())),
            user_exists: Arc::new(UserExistsUseCase::new(users)),
            register_credentials: Arc::new(RegisterCredentialsUseCase::new(auth.clone())),
            login: Arc::new(LoginUseCase::new(auth.clone())),
            refresh_token: Arc::new(RefreshTokenUseCase::new(auth)),
            environment: "qa".to_string(),
            #[cfg(feature = "postgres")]
            db: None,
        }
    }
}

fn identity_provider(config: &AppConfig) -> Result<Arc<dyn IdentityProvider>, String> {
    match config.identity_provider {
        IdentityProviderKind::Firebase => firebase_provider(config),
        IdentityProviderKind::Local => local_provider(config),
    }
}

#[cfg(feature = "firebase")]
fn firebase_provider(config: &AppConfig) -> Result<Arc<dyn IdentityProvider>, String> {
    use tecla_infra::{FirebaseConfig, FirebaseIdentityProvider};

    let key = config
        .firebase_web_api_key
        .clone()
        .ok_or("FIREBASE_WEB_API_KEY is required when IDENTITY_PROVIDER=firebase")?;

    tracing::info!("Using Firebase identity provider");
    Ok(Arc::new(FirebaseIdentityProvider::new(
        FirebaseConfig::new(key),
        reqwest::Client::new(),
    )))
}

#[cfg(not(feature = "firebase"))]
fn firebase_provider(_config: &AppConfig) -> Result<Arc<dyn IdentityProvider>, String> {
    Err("IDENTITY_PROVIDER=firebase but the firebase feature is disabled".to_string())
}

#[cfg(feature = "local-auth")]
fn local_provider(config: &AppConfig) -> Result<Arc<dyn IdentityProvider>, String> {
    use tecla_infra::LocalIdentityProvider;
    use tecla_infra::auth::JwtConfig;

    if config.is_production() {
        tracing::warn!("Local identity provider in production: accounts are not persisted");
    } else {
        tracing::info!("Using local identity provider");
    }
    Ok(Arc::new(LocalIdentityProvider::new(JwtConfig::from_env())))
}

#[cfg(not(feature = "local-auth"))]
fn local_provider(_config: &AppConfig) -> Result<Arc<dyn IdentityProvider>, String> {
    Err("IDENTITY_PROVIDER=local but the local-auth feature is disabled".to_string())
}
