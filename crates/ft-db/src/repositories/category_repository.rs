use crate::Result as DbErrorResult;
use crate::repositories::{parse_kind, parse_timestamp, parse_uuid};

use ft_core::{Category, TransactionKind};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, category: &Category) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO categories (id, user_id, name, kind, created_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(category.id.to_string())
        .bind(category.user_id.to_string())
        .bind(&category.name)
        .bind(category.kind.as_str())
        .bind(category.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> DbErrorResult<Vec<Category>> {
        let rows = sqlx::query(
            r#"
              SELECT id, user_id, name, kind, created_at
              FROM categories
              WHERE user_id = ?
              ORDER BY name ASC
              "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(category_from_row).collect()
    }

    pub async fn find_by_id(&self, user_id: Uuid, id: Uuid) -> DbErrorResult<Option<Category>> {
        let row = sqlx::query(
            r#"
              SELECT id, user_id, name, kind, created_at
              FROM categories
              WHERE id = ? AND user_id = ?
              "#,
        )
        .bind(id.to_string())
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(category_from_row).transpose()
    }

    /// Lookup used by the import bridge to decide reuse-or-create.
    /// Duplicates are possible; the first match wins.
    pub async fn find_by_name_kind(
        &self,
        user_id: Uuid,
        name: &str,
        kind: TransactionKind,
    ) -> DbErrorResult<Option<Category>> {
        let row = sqlx::query(
            r#"
              SELECT id, user_id, name, kind, created_at
              FROM categories
              WHERE user_id = ? AND name = ? AND kind = ?
              "#,
        )
        .bind(user_id.to_string())
        .bind(name)
        .bind(kind.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(category_from_row).transpose()
    }

    /// Deleting a row the caller does not own affects zero rows and is not
    /// an error. Referencing transactions are left untouched.
    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> DbErrorResult<u64> {
        let result = sqlx::query(
            r#"
              DELETE FROM categories
              WHERE id = ? AND user_id = ?
              "#,
        )
        .bind(id.to_string())
        .bind(user_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

fn category_from_row(row: &SqliteRow) -> DbErrorResult<Category> {
    Ok(Category {
        id: parse_uuid(&row.try_get::<String, _>("id")?)?,
        user_id: parse_uuid(&row.try_get::<String, _>("user_id")?)?,
        name: row.try_get("name")?,
        kind: parse_kind(&row.try_get::<String, _>("kind")?)?,
        created_at: parse_timestamp(row.try_get("created_at")?)?,
    })
}
