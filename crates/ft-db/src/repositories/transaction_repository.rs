use crate::Result as DbErrorResult;
use crate::repositories::{parse_kind, parse_timestamp, parse_uuid};

use ft_core::{Category, ImportRow, LedgerEntry, Transaction};

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Default description for imported rows that carry none.
const IMPORT_DESCRIPTION: &str = "Imported from CSV";

pub struct TransactionRepository {
    pool: SqlitePool,
}

impl TransactionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, transaction: &Transaction) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO transactions (
                  id, user_id, amount, description, date, kind,
                  category_id, recurring_rule_id, created_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(transaction.id.to_string())
        .bind(transaction.user_id.to_string())
        .bind(transaction.amount)
        .bind(&transaction.description)
        .bind(transaction.date)
        .bind(transaction.kind.as_str())
        .bind(transaction.category_id.map(|id| id.to_string()))
        .bind(transaction.recurring_rule_id.map(|id| id.to_string()))
        .bind(transaction.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Most recent entries first, joined with category display names.
    /// Entries whose category was deleted come back with no name.
    pub async fn ledger(&self, user_id: Uuid, limit: i64) -> DbErrorResult<Vec<LedgerEntry>> {
        let rows = sqlx::query(
            r#"
              SELECT t.id, t.user_id, t.amount, t.description, t.date, t.kind,
                     t.category_id, t.recurring_rule_id, t.created_at,
                     c.name AS category_name
              FROM transactions t
              LEFT JOIN categories c ON c.id = t.category_id
              WHERE t.user_id = ?
              ORDER BY t.date DESC
              LIMIT ?
              "#,
        )
        .bind(user_id.to_string())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(entry_from_row).collect()
    }

    /// Every entry the user owns, for the export bridge.
    pub async fn export_all(&self, user_id: Uuid) -> DbErrorResult<Vec<LedgerEntry>> {
        let rows = sqlx::query(
            r#"
              SELECT t.id, t.user_id, t.amount, t.description, t.date, t.kind,
                     t.category_id, t.recurring_rule_id, t.created_at,
                     c.name AS category_name
              FROM transactions t
              LEFT JOIN categories c ON c.id = t.category_id
              WHERE t.user_id = ?
              ORDER BY t.date DESC
              "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(entry_from_row).collect()
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> DbErrorResult<u64> {
        let result = sqlx::query(
            r#"
              DELETE FROM transactions
              WHERE id = ? AND user_id = ?
              "#,
        )
        .bind(id.to_string())
        .bind(user_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Bulk-create entries from external rows inside one database
    /// transaction: either every row lands or none does.
    ///
    /// Categories are matched per (user, name, kind) and created on first
    /// sight, so repeated imports reuse the same category rows.
    pub async fn import_rows(&self, user_id: Uuid, rows: &[ImportRow]) -> DbErrorResult<u64> {
        let mut tx = self.pool.begin().await?;
        let mut imported = 0u64;

        for row in rows {
            let name = row.category_name.trim();

            let existing = sqlx::query(
                r#"
                  SELECT id FROM categories
                  WHERE user_id = ? AND name = ? AND kind = ?
                  "#,
            )
            .bind(user_id.to_string())
            .bind(name)
            .bind(row.kind.as_str())
            .fetch_optional(&mut *tx)
            .await?;

            let category_id = match existing {
                Some(found) => parse_uuid(&found.try_get::<String, _>("id")?)?,
                None => {
                    let category = Category::new(user_id, name.to_string(), row.kind);
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
                    .execute(&mut *tx)
                    .await?;
                    category.id
                }
            };

            let description = row
                .description
                .clone()
                .unwrap_or_else(|| IMPORT_DESCRIPTION.to_string());

            sqlx::query(
                r#"
                  INSERT INTO transactions (
                      id, user_id, amount, description, date, kind,
                      category_id, recurring_rule_id, created_at
                  ) VALUES (?, ?, ?, ?, ?, ?, ?, NULL, ?)
                  "#,
            )
            .bind(Uuid::new_v4().to_string())
            .bind(user_id.to_string())
            .bind(row.amount)
            .bind(description)
            .bind(row.date)
            .bind(row.kind.as_str())
            .bind(category_id.to_string())
            .bind(Utc::now().timestamp())
            .execute(&mut *tx)
            .await?;

            imported += 1;
        }

        tx.commit().await?;

        Ok(imported)
    }
}

pub(crate) fn transaction_from_row(row: &SqliteRow) -> DbErrorResult<Transaction> {
    let category_id = row
        .try_get::<Option<String>, _>("category_id")?
        .map(|id| parse_uuid(&id))
        .transpose()?;
    let recurring_rule_id = row
        .try_get::<Option<String>, _>("recurring_rule_id")?
        .map(|id| parse_uuid(&id))
        .transpose()?;

    Ok(Transaction {
        id: parse_uuid(&row.try_get::<String, _>("id")?)?,
        user_id: parse_uuid(&row.try_get::<String, _>("user_id")?)?,
        amount: row.try_get("amount")?,
        description: row.try_get("description")?,
        date: row.try_get("date")?,
        kind: parse_kind(&row.try_get::<String, _>("kind")?)?,
        category_id,
        recurring_rule_id,
        created_at: parse_timestamp(row.try_get("created_at")?)?,
    })
}

fn entry_from_row(row: &SqliteRow) -> DbErrorResult<LedgerEntry> {
    Ok(LedgerEntry {
        transaction: transaction_from_row(row)?,
        category_name: row.try_get("category_name")?,
    })
}
