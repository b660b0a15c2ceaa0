use crate::types::AdminInfo;
use dioxus::prelude::*;

/// Sign an admin in and return a bearer token for the other admin endpoints.
#[dioxus::prelude::post("/api/admin/signin")]
pub async fn admin_signin(username: String, password: String) -> Result<String, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (username, password);
        Err(ServerFnError::new("admin_signin is server-only"))
    }

    #[cfg(feature = "server")]
    {
        tracing::info!("admin.signin: username_len={}", username.len());
        let state = crate::app_state().await?;
        server::signin(&state, &username, &password)
            .await
            .map_err(crate::server_error)
    }
}

#[dioxus::prelude::post("/api/admin/me")]
pub async fn admin_me(token: String) -> Result<AdminInfo, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = token;
        Err(ServerFnError::new("admin_me is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let state = crate::app_state().await?;
        server::require_admin(&state, &token)
            .await
            .map_err(crate::server_error)
    }
}

#[cfg(feature = "server")]
pub mod server {
    use crate::config::AdminBootstrap;
    use crate::db::{now_for_db, uuid_from_db, uuid_to_db};
    use crate::state::AppState;
    use crate::types::AdminInfo;
    use anyhow::{anyhow, bail, Context, Result};
    use argon2::{
        password_hash::{rand_core::OsRng, SaltString},
        Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    };
    use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
    use sqlx::{Any, Pool, Row};
    use time::{Duration, OffsetDateTime};
    use tracing::{debug, info};
    use uuid::Uuid;

    const TOKEN_ISSUER: &str = "shrine-admin";
    const TOKEN_LIFETIME: Duration = Duration::hours(12);
    const INVALID_CREDENTIALS: &str = "Invalid username or password";

    #[derive(Debug, serde::Serialize, serde::Deserialize)]
    struct AdminClaims {
        sub: String,
        username: String,
        iss: String,
        exp: i64,
        iat: i64,
    }

    pub fn hash_password(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| anyhow!("Failed to hash password: {e}"))
    }

    pub fn verify_password(password: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }

    pub fn issue_token(secret: &str, admin: &AdminInfo) -> Result<String> {
        let now = OffsetDateTime::now_utc();
        let claims = AdminClaims {
            sub: admin.id.to_string(),
            username: admin.username.clone(),
            iss: TOKEN_ISSUER.to_string(),
            exp: (now + TOKEN_LIFETIME).unix_timestamp(),
            iat: now.unix_timestamp(),
        };

        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .context("Failed to issue token")
    }

    /// Decode a token without touching the database.
    pub fn verify_token(secret: &str, token: &str) -> Result<AdminInfo> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[TOKEN_ISSUER]);

        let data = jsonwebtoken::decode::<AdminClaims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )
        .context("Not signed in")?;

        Ok(AdminInfo {
            id: Uuid::parse_str(&data.claims.sub).context("Not signed in")?,
            username: data.claims.username,
        })
    }

    /// Check the token and that the admin still exists.
    pub async fn require_admin(state: &AppState, token: &str) -> Result<AdminInfo> {
        let claimed = verify_token(&state.config.jwt_secret, token)?;
        let row = sqlx::query("SELECT id, username FROM admins WHERE id = $1")
            .bind(uuid_to_db(claimed.id))
            .fetch_optional(state.db.pool())
            .await
            .context("Failed to load admin")?;

        let Some(row) = row else {
            bail!("Not signed in");
        };
        Ok(AdminInfo {
            id: uuid_from_db(&row.try_get::<String, _>("id")?)?,
            username: row.try_get("username")?,
        })
    }

    pub async fn signin(state: &AppState, username: &str, password: &str) -> Result<String> {
        let row = sqlx::query("SELECT id, username, password_hash FROM admins WHERE username = $1")
            .bind(username.trim())
            .fetch_optional(state.db.pool())
            .await
            .context("Failed to load admin")?;

        let Some(row) = row else {
            debug!("admin.signin: unknown username");
            bail!(INVALID_CREDENTIALS);
        };
        let hash: String = row.try_get("password_hash")?;
        if !verify_password(password, &hash) {
            debug!("admin.signin: wrong password");
            bail!(INVALID_CREDENTIALS);
        }

        let admin = AdminInfo {
            id: uuid_from_db(&row.try_get::<String, _>("id")?)?,
            username: row.try_get("username")?,
        };
        info!("admin.signin: success admin_id={}", admin.id);
        issue_token(&state.config.jwt_secret, &admin)
    }

    pub async fn create_admin(pool: &Pool<Any>, username: &str, password: &str) -> Result<AdminInfo> {
        let username = crate::validation::required("username", username, crate::validation::NAME_MAX)?;
        if password.len() < 8 {
            bail!("Password must be at least 8 characters");
        }

        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO admins (id, username, password_hash, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(uuid_to_db(id))
        .bind(&username)
        .bind(hash_password(password)?)
        .bind(now_for_db()?)
        .execute(pool)
        .await
        .context("Failed to create admin")?;

        Ok(AdminInfo { id, username })
    }

    /// Create the configured admin when no admin exists yet.
    pub async fn bootstrap(pool: &Pool<Any>, admin: &AdminBootstrap) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admins")
            .fetch_one(pool)
            .await
            .context("Failed to count admins")?;
        if count > 0 {
            return Ok(false);
        }

        create_admin(pool, &admin.username, &admin.password).await?;
        info!("admin.bootstrap: created admin username={}", admin.username);
        Ok(true)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        const SECRET: &str = "test-secret-key-min-32-characters-long";

        fn admin() -> AdminInfo {
            AdminInfo {
                id: Uuid::new_v4(),
                username: "rector".to_string(),
            }
        }

        #[test]
        fn password_hash_verifies() {
            let hash = hash_password("ChangeMe123").unwrap();
            assert!(verify_password("ChangeMe123", &hash));
            assert!(!verify_password("changeme123", &hash));
            assert!(!verify_password("ChangeMe123", "not-a-hash"));
        }

        #[test]
        fn token_round_trip() {
            let admin = admin();
            let token = issue_token(SECRET, &admin).unwrap();
            assert_eq!(verify_token(SECRET, &token).unwrap(), admin);
        }

        #[test]
        fn token_from_other_secret_is_rejected() {
            let token = issue_token(SECRET, &admin()).unwrap();
            let err = verify_token("another-secret-key-min-32-characters", &token).unwrap_err();
            assert_eq!(err.to_string(), "Not signed in");
        }

        #[test]
        fn expired_token_is_rejected() {
            let admin = admin();
            let claims = AdminClaims {
                sub: admin.id.to_string(),
                username: admin.username,
                iss: TOKEN_ISSUER.to_string(),
                exp: (OffsetDateTime::now_utc() - Duration::hours(1)).unix_timestamp(),
                iat: (OffsetDateTime::now_utc() - Duration::hours(13)).unix_timestamp(),
            };
            let token = jsonwebtoken::encode(
                &Header::new(Algorithm::HS256),
                &claims,
                &EncodingKey::from_secret(SECRET.as_bytes()),
            )
            .unwrap();
            assert!(verify_token(SECRET, &token).is_err());
        }

        #[test]
        fn garbage_token_is_rejected() {
            assert!(verify_token(SECRET, "invalid.jwt.token").is_err());
            assert!(verify_token(SECRET, "").is_err());
        }
    }
}
