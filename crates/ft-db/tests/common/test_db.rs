use sqlx::SqlitePool;
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    ft_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a stub user for foreign key constraints
pub async fn create_test_user(pool: &SqlitePool, user_id: Uuid) {
    sqlx::query(
        "INSERT INTO users (id, email, password_hash, name, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(user_id.to_string())
    .bind(format!("test-{}@example.com", user_id))
    .bind("not-a-real-hash")
    .bind("Test User")
    .bind(chrono::Utc::now().timestamp())
    .execute(pool)
    .await
    .expect("Failed to create test user");
}
