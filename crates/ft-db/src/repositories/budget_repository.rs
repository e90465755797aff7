use crate::Result as DbErrorResult;
use crate::repositories::{parse_timestamp, parse_uuid};

use ft_core::{Budget, BudgetUsage, schedule};

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct BudgetRepository {
    pool: SqlitePool,
}

impl BudgetRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the budget, or overwrite the amount of the existing one for
    /// the same (user, category, month, year).
    ///
    /// A single conditional insert, never read-then-write: the storage
    /// uniqueness invariant makes concurrent upserts collapse into one row.
    pub async fn upsert(&self, budget: &Budget) -> DbErrorResult<Budget> {
        sqlx::query(
            r#"
              INSERT INTO budgets (
                  id, user_id, category_id, amount, month, year,
                  created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
              ON CONFLICT (user_id, category_id, month, year)
              DO UPDATE SET amount = excluded.amount, updated_at = excluded.updated_at
              "#,
        )
        .bind(budget.id.to_string())
        .bind(budget.user_id.to_string())
        .bind(budget.category_id.to_string())
        .bind(budget.amount)
        .bind(budget.month as i64)
        .bind(budget.year as i64)
        .bind(budget.created_at.timestamp())
        .bind(budget.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        let row = sqlx::query(
            r#"
              SELECT id, user_id, category_id, amount, month, year,
                     created_at, updated_at
              FROM budgets
              WHERE user_id = ? AND category_id = ? AND month = ? AND year = ?
              "#,
        )
        .bind(budget.user_id.to_string())
        .bind(budget.category_id.to_string())
        .bind(budget.month as i64)
        .bind(budget.year as i64)
        .fetch_one(&self.pool)
        .await?;

        budget_from_row(&row)
    }

    /// Every budget for the month, enriched with actual spending.
    ///
    /// Spending is recomputed from raw transactions on every call: the sum
    /// of EXPENSE entries for the budget's category dated within
    /// [month start, next month start).
    pub async fn list_with_usage(
        &self,
        user_id: Uuid,
        month: u32,
        year: i32,
    ) -> DbErrorResult<Vec<BudgetUsage>> {
        let rows = sqlx::query(
            r#"
              SELECT b.id, b.user_id, b.category_id, b.amount, b.month, b.year,
                     b.created_at, b.updated_at,
                     c.name AS category_name
              FROM budgets b
              LEFT JOIN categories c ON c.id = b.category_id
              WHERE b.user_id = ? AND b.month = ? AND b.year = ?
              "#,
        )
        .bind(user_id.to_string())
        .bind(month as i64)
        .bind(year as i64)
        .fetch_all(&self.pool)
        .await?;

        let window = schedule::month_window(year, month);

        let mut usages = Vec::with_capacity(rows.len());
        for row in &rows {
            let budget = budget_from_row(row)?;
            let category_name: Option<String> = row.try_get("category_name")?;

            let spent = match window {
                Some((start, end)) => {
                    self.sum_expenses(user_id, budget.category_id, start, end)
                        .await?
                }
                None => 0.0,
            };

            usages.push(BudgetUsage::compute(budget, category_name, spent));
        }

        Ok(usages)
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> DbErrorResult<u64> {
        let result = sqlx::query(
            r#"
              DELETE FROM budgets
              WHERE id = ? AND user_id = ?
              "#,
        )
        .bind(id.to_string())
        .bind(user_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Aggregate EXPENSE spending for one category over [start, end).
    async fn sum_expenses(
        &self,
        user_id: Uuid,
        category_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DbErrorResult<f64> {
        let row = sqlx::query(
            r#"
              SELECT SUM(amount) AS total
              FROM transactions
              WHERE user_id = ? AND category_id = ? AND kind = 'EXPENSE'
                AND date >= ? AND date < ?
              "#,
        )
        .bind(user_id.to_string())
        .bind(category_id.to_string())
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;

        let total: Option<f64> = row.try_get("total")?;
        Ok(total.unwrap_or(0.0))
    }
}

fn budget_from_row(row: &SqliteRow) -> DbErrorResult<Budget> {
    Ok(Budget {
        id: parse_uuid(&row.try_get::<String, _>("id")?)?,
        user_id: parse_uuid(&row.try_get::<String, _>("user_id")?)?,
        category_id: parse_uuid(&row.try_get::<String, _>("category_id")?)?,
        amount: row.try_get("amount")?,
        month: row.try_get::<i64, _>("month")? as u32,
        year: row.try_get::<i64, _>("year")? as i32,
        created_at: parse_timestamp(row.try_get("created_at")?)?,
        updated_at: parse_timestamp(row.try_get("updated_at")?)?,
    })
}
