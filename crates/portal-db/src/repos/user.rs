//! User profile repository.

use portal_core::entities::UserProfile;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_enum};
use crate::service::PortalService;
use crate::updates::profile::ProfileUpdate;

const USER_COLUMNS: &str =
    "id, username, full_name, role, avatar_url, department, designation, phone, bio";

fn row_to_user(row: &libsql::Row) -> Result<UserProfile, DatabaseError> {
    Ok(UserProfile {
        id: row.get::<i64>(0)?,
        username: row.get::<String>(1)?,
        full_name: get_opt_string(row, 2)?,
        role: parse_enum(&row.get::<String>(3)?)?,
        avatar_url: get_opt_string(row, 4)?,
        department: get_opt_string(row, 5)?,
        designation: get_opt_string(row, 6)?,
        phone: get_opt_string(row, 7)?,
        bio: get_opt_string(row, 8)?,
    })
}

impl PortalService {
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no user has this username.
    pub async fn get_user(&self, username: &str) -> Result<UserProfile, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?1"),
                [username],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_user(&row)
    }

    /// Insert a profile; the `id` of `user` is ignored.
    pub async fn create_user(&self, user: &UserProfile) -> Result<UserProfile, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "INSERT INTO users (username, full_name, role, avatar_url, department, designation, phone, bio)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) RETURNING id",
                libsql::params![
                    user.username.as_str(),
                    user.full_name.as_deref(),
                    user.role.as_str(),
                    user.avatar_url.as_deref(),
                    user.department.as_deref(),
                    user.designation.as_deref(),
                    user.phone.as_deref(),
                    user.bio.as_deref()
                ],
            )
            .await?;
        let id = rows.next().await?.ok_or(DatabaseError::NoResult)?.get::<i64>(0)?;
        Ok(UserProfile {
            id,
            ..user.clone()
        })
    }

    /// Apply the selected profile fields and return the stored profile.
    pub async fn update_profile(
        &self,
        username: &str,
        update: &ProfileUpdate,
    ) -> Result<UserProfile, DatabaseError> {
        let assignments = update.assignments();
        if assignments.is_empty() {
            return self.get_user(username).await;
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        for (column, value) in assignments {
            params.push(value.into());
            sets.push(format!("{column} = ?{}", params.len()));
        }
        params.push(username.into());
        let sql = format!(
            "UPDATE users SET {} WHERE username = ?{}",
            sets.join(", "),
            params.len()
        );

        let affected = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::debug!(username, "profile updated");
        self.get_user(username).await
    }
}
