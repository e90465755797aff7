use crate::Result as DbErrorResult;
use crate::repositories::{parse_frequency, parse_kind, parse_timestamp, parse_uuid};

use ft_core::{RecurringRule, RuleWithCategory, schedule};

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct RecurringRuleRepository {
    pool: SqlitePool,
}

impl RecurringRuleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, rule: &RecurringRule) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO recurring_rules (
                  id, user_id, amount, description, frequency, kind,
                  category_id, start_date, next_run, active, created_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(rule.id.to_string())
        .bind(rule.user_id.to_string())
        .bind(rule.amount)
        .bind(&rule.description)
        .bind(rule.frequency.as_str())
        .bind(rule.kind.as_str())
        .bind(rule.category_id.map(|id| id.to_string()))
        .bind(rule.start_date)
        .bind(rule.next_run)
        .bind(rule.active)
        .bind(rule.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// All rules for the user, soonest occurrence first, joined with
    /// category display names.
    pub async fn list_for_user(&self, user_id: Uuid) -> DbErrorResult<Vec<RuleWithCategory>> {
        let rows = sqlx::query(
            r#"
              SELECT r.id, r.user_id, r.amount, r.description, r.frequency, r.kind,
                     r.category_id, r.start_date, r.next_run, r.active, r.created_at,
                     c.name AS category_name
              FROM recurring_rules r
              LEFT JOIN categories c ON c.id = r.category_id
              WHERE r.user_id = ?
              ORDER BY r.next_run ASC
              "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                Ok(RuleWithCategory {
                    rule: rule_from_row(row)?,
                    category_name: row.try_get("category_name")?,
                })
            })
            .collect()
    }

    pub async fn find_by_id(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> DbErrorResult<Option<RecurringRule>> {
        let row = sqlx::query(
            r#"
              SELECT id, user_id, amount, description, frequency, kind,
                     category_id, start_date, next_run, active, created_at
              FROM recurring_rules
              WHERE id = ? AND user_id = ?
              "#,
        )
        .bind(id.to_string())
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(rule_from_row).transpose()
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> DbErrorResult<u64> {
        let result = sqlx::query(
            r#"
              DELETE FROM recurring_rules
              WHERE id = ? AND user_id = ?
              "#,
        )
        .bind(id.to_string())
        .bind(user_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Active rules whose next occurrence has arrived, in store order (no
    /// tie-break is defined).
    pub async fn find_due(&self, user_id: Uuid, today: NaiveDate) -> DbErrorResult<Vec<RecurringRule>> {
        let rows = sqlx::query(
            r#"
              SELECT id, user_id, amount, description, frequency, kind,
                     category_id, start_date, next_run, active, created_at
              FROM recurring_rules
              WHERE user_id = ? AND active = 1 AND next_run <= ?
              "#,
        )
        .bind(user_id.to_string())
        .bind(today)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(rule_from_row).collect()
    }

    /// Materialize every due rule into one ledger entry and advance its
    /// cursor by exactly one period.
    ///
    /// A rule several periods behind posts only its oldest occurrence per
    /// call; repeated calls are required to catch up fully.
    ///
    /// Per rule, the entry insert and the cursor update are one database
    /// transaction: either both happen or neither. The unique index on
    /// (recurring_rule_id, date) rejects an occurrence a concurrent call
    /// already posted; that rule's pair is rolled back, left for the other
    /// call, and not counted here.
    pub async fn process_due(&self, user_id: Uuid, today: NaiveDate) -> DbErrorResult<u64> {
        let due = self.find_due(user_id, today).await?;

        let mut processed = 0u64;

        for rule in due {
            let entry = rule.materialize();
            let next_run = schedule::advance(rule.next_run, rule.frequency);

            let mut tx = self.pool.begin().await?;

            let inserted = sqlx::query(
                r#"
                  INSERT INTO transactions (
                      id, user_id, amount, description, date, kind,
                      category_id, recurring_rule_id, created_at
                  ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                  "#,
            )
            .bind(entry.id.to_string())
            .bind(entry.user_id.to_string())
            .bind(entry.amount)
            .bind(&entry.description)
            .bind(entry.date)
            .bind(entry.kind.as_str())
            .bind(entry.category_id.map(|id| id.to_string()))
            .bind(entry.recurring_rule_id.map(|id| id.to_string()))
            .bind(entry.created_at.timestamp())
            .execute(&mut *tx)
            .await;

            match inserted {
                Ok(_) => {}
                Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                    // This occurrence was already posted by another check;
                    // leave the cursor for that call to advance.
                    tx.rollback().await?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            }

            sqlx::query(
                r#"
                  UPDATE recurring_rules
                  SET next_run = ?
                  WHERE id = ?
                  "#,
            )
            .bind(next_run)
            .bind(rule.id.to_string())
            .execute(&mut *tx)
            .await?;

            tx.commit().await?;

            processed += 1;
        }

        Ok(processed)
    }
}

fn rule_from_row(row: &SqliteRow) -> DbErrorResult<RecurringRule> {
    let category_id = row
        .try_get::<Option<String>, _>("category_id")?
        .map(|id| parse_uuid(&id))
        .transpose()?;

    Ok(RecurringRule {
        id: parse_uuid(&row.try_get::<String, _>("id")?)?,
        user_id: parse_uuid(&row.try_get::<String, _>("user_id")?)?,
        amount: row.try_get("amount")?,
        description: row.try_get("description")?,
        frequency: parse_frequency(&row.try_get::<String, _>("frequency")?)?,
        kind: parse_kind(&row.try_get::<String, _>("kind")?)?,
        category_id,
        start_date: row.try_get("start_date")?,
        next_run: row.try_get("next_run")?,
        active: row.try_get("active")?,
        created_at: parse_timestamp(row.try_get("created_at")?)?,
    })
}
