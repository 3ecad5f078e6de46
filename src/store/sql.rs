use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    sea_query::Expr,
};
use serde_json::Value;
use tracing::{debug, info};

use super::{MovieStore, StoreError, StoreResult};
use crate::{entities::movie, id, models::Movie};

#[derive(Clone)]
pub struct SqlStore {
    db: DatabaseConnection,
}

impl SqlStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MovieStore for SqlStore {
    async fn insert(&self, movie: &Movie) -> StoreResult<String> {
        let id = id::new_id();
        let model = movie::ActiveModel {
            id: Set(id.clone()),
            watched: Set(movie.watched),
            document: Set(Value::Object(movie.fields.clone())),
            created_at: Set(now_ms()),
        };

        movie::Entity::insert(model).exec_without_returning(&self.db).await?;

        info!(id = %id, "inserted movie");
        Ok(id)
    }

    async fn mark_watched(&self, id: &str) -> StoreResult<u64> {
        if !id::is_well_formed(id) {
            debug!(id = %id, "malformed id, nothing to mark");
            return Ok(0);
        }

        let result = movie::Entity::update_many()
            .col_expr(movie::Column::Watched, Expr::value(true))
            .filter(movie::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        info!(id = %id, matched = result.rows_affected, "marked movie as watched");
        Ok(result.rows_affected)
    }

    async fn delete(&self, id: &str) -> StoreResult<u64> {
        if !id::is_well_formed(id) {
            debug!(id = %id, "malformed id, nothing to delete");
            return Ok(0);
        }

        let result = movie::Entity::delete_by_id(id.to_string()).exec(&self.db).await?;

        info!(id = %id, deleted = result.rows_affected, "deleted movie");
        Ok(result.rows_affected)
    }

    async fn delete_all(&self) -> StoreResult<u64> {
        let result = movie::Entity::delete_many().exec(&self.db).await?;

        info!(deleted = result.rows_affected, "deleted all movies");
        Ok(result.rows_affected)
    }

    async fn list_all(&self) -> StoreResult<Vec<Movie>> {
        let rows = movie::Entity::find()
            .order_by_asc(movie::Column::CreatedAt)
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?;

        debug!(count = rows.len(), "listed movies");
        rows.into_iter().map(into_movie).collect()
    }
}

fn into_movie(row: movie::Model) -> StoreResult<Movie> {
    let Value::Object(fields) = row.document else {
        return Err(StoreError::Corrupt { id: row.id });
    };
    Ok(Movie { id: Some(row.id), watched: row.watched, fields })
}

fn now_ms() -> i64 {
    jiff::Timestamp::now().as_millisecond()
}
