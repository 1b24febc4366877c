use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use super::models::{RegisterUserRequest, User};
use crate::common::ApiError;
use crate::notifications::Notifications;

pub const EMAIL_ALREADY_REGISTERED: &str = "email already registered";

pub struct UsersService {
    db: SqlitePool,
}

impl UsersService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Registers a user.
    ///
    /// A duplicate email is a domain failure: it is recorded in
    /// `notifications` and `Ok(None)` is returned. Only storage problems
    /// come back as `Err`.
    pub async fn register(
        &self,
        request: RegisterUserRequest,
        notifications: &mut Notifications,
    ) -> Result<Option<User>, ApiError> {
        let email = request.email.trim().to_lowercase();

        if self.email_exists(&email).await? {
            notifications.add_for("email", EMAIL_ALREADY_REGISTERED);
            return Ok(None);
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: request.name.trim().to_string(),
            email,
            created_at: Utc::now().to_rfc3339(),
        };

        let inserted = sqlx::query(
            "INSERT INTO users (id, name, email, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.created_at)
        .execute(&self.db)
        .await;

        match inserted {
            Ok(_) => {
                info!(user_id = %user.id, "User registered");
                Ok(Some(user))
            }
            // Lost a race with a concurrent registration of the same email
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                notifications.add_for("email", EMAIL_ALREADY_REGISTERED);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, created_at FROM users ORDER BY created_at, id",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(users)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<User, ApiError> {
        sqlx::query_as::<_, User>("SELECT id, name, email, created_at FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, ApiError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.db)
            .await?;

        Ok(count > 0)
    }
}
