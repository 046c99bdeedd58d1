use sqlx::SqlitePool;

use crate::error::ApiResult;
use crate::models::Profile;

#[derive(Clone)]
pub struct ProfileService {
    db_pool: SqlitePool,
}

impl ProfileService {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self { db_pool }
    }

    /// Find a profile by id
    pub async fn find(&self, id: i64) -> ApiResult<Option<Profile>> {
        let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await?;

        Ok(profile)
    }
}
