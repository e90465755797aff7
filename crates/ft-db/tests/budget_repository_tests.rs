mod common;

use common::{
    create_test_budget, create_test_category, create_test_pool, create_test_transaction,
    create_test_user, date,
};

use ft_core::TransactionKind;
use ft_db::{BudgetRepository, CategoryRepository, TransactionRepository};

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_existing_budget_when_upserting_same_key_then_amount_is_overwritten() {
    // Given: A budget for June 2024
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    create_test_user(&pool, user_id).await;

    let category = create_test_category(user_id, "Groceries", TransactionKind::Expense);
    CategoryRepository::new(pool.clone())
        .create(&category)
        .await
        .unwrap();

    let repo = BudgetRepository::new(pool.clone());
    let first = repo
        .upsert(&create_test_budget(user_id, category.id, 300.0, 6, 2024))
        .await
        .unwrap();

    // When: Upserting the same (user, category, month, year) again
    let second = repo
        .upsert(&create_test_budget(user_id, category.id, 450.0, 6, 2024))
        .await
        .unwrap();

    // Then: Still one row, keeping its identity, with the new amount
    assert_that!(second.id, eq(first.id));
    assert_that!(second.amount, eq(450.0));

    let budgets = repo.list_with_usage(user_id, 6, 2024).await.unwrap();
    assert_that!(budgets, len(eq(1)));
    assert_that!(budgets[0].budget.amount, eq(450.0));
}

#[tokio::test]
async fn given_budgets_for_different_months_when_upserting_then_both_rows_survive() {
    // Given: A category with a June budget
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    create_test_user(&pool, user_id).await;

    let category = create_test_category(user_id, "Transport", TransactionKind::Expense);
    CategoryRepository::new(pool.clone())
        .create(&category)
        .await
        .unwrap();

    let repo = BudgetRepository::new(pool.clone());
    repo.upsert(&create_test_budget(user_id, category.id, 100.0, 6, 2024))
        .await
        .unwrap();

    // When: Upserting a July budget for the same category
    repo.upsert(&create_test_budget(user_id, category.id, 120.0, 7, 2024))
        .await
        .unwrap();

    // Then: Each month keeps its own row
    let june = repo.list_with_usage(user_id, 6, 2024).await.unwrap();
    let july = repo.list_with_usage(user_id, 7, 2024).await.unwrap();
    assert_that!(june, len(eq(1)));
    assert_that!(july, len(eq(1)));
    assert_that!(june[0].budget.amount, eq(100.0));
    assert_that!(july[0].budget.amount, eq(120.0));
}

#[tokio::test]
async fn given_expenses_inside_and_outside_month_when_listing_then_only_window_counts() {
    // Given: A June budget and transactions scattered around the window
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    create_test_user(&pool, user_id).await;

    let category = create_test_category(user_id, "Groceries", TransactionKind::Expense);
    let other = create_test_category(user_id, "Transport", TransactionKind::Expense);
    let cat_repo = CategoryRepository::new(pool.clone());
    cat_repo.create(&category).await.unwrap();
    cat_repo.create(&other).await.unwrap();

    let tx_repo = TransactionRepository::new(pool.clone());
    for (kind, cat, amount, on) in [
        // Counted: expenses in the category within [Jun 1, Jul 1)
        (TransactionKind::Expense, Some(category.id), 100.0, date(2024, 6, 1)),
        (TransactionKind::Expense, Some(category.id), 50.0, date(2024, 6, 30)),
        // Ignored: outside the half-open window
        (TransactionKind::Expense, Some(category.id), 70.0, date(2024, 5, 31)),
        (TransactionKind::Expense, Some(category.id), 30.0, date(2024, 7, 1)),
        // Ignored: income never counts against a budget
        (TransactionKind::Income, Some(category.id), 500.0, date(2024, 6, 10)),
        // Ignored: other category
        (TransactionKind::Expense, Some(other.id), 25.0, date(2024, 6, 15)),
    ] {
        tx_repo
            .create(&create_test_transaction(user_id, kind, cat, amount, on))
            .await
            .unwrap();
    }

    let repo = BudgetRepository::new(pool.clone());
    repo.upsert(&create_test_budget(user_id, category.id, 400.0, 6, 2024))
        .await
        .unwrap();

    // When: Listing June with usage
    let budgets = repo.list_with_usage(user_id, 6, 2024).await.unwrap();

    // Then: Only the two in-window expenses are summed
    assert_that!(budgets, len(eq(1)));
    let usage = &budgets[0];
    assert_that!(usage.spent, eq(150.0));
    assert_that!(usage.remaining, eq(250.0));
    assert_that!(usage.percentage, eq(37.5));
    assert_that!(usage.category_name.as_deref(), some(eq("Groceries")));
}

#[tokio::test]
async fn given_no_spending_when_listing_then_percentage_is_zero() {
    // Given: A budget with no transactions at all
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    create_test_user(&pool, user_id).await;

    let category = create_test_category(user_id, "Savings", TransactionKind::Expense);
    CategoryRepository::new(pool.clone())
        .create(&category)
        .await
        .unwrap();

    let repo = BudgetRepository::new(pool.clone());
    repo.upsert(&create_test_budget(user_id, category.id, 200.0, 6, 2024))
        .await
        .unwrap();

    // When: Listing with usage
    let budgets = repo.list_with_usage(user_id, 6, 2024).await.unwrap();

    // Then: Zero spent, zero percentage, full cap remaining
    assert_that!(budgets, len(eq(1)));
    assert_that!(budgets[0].spent, eq(0.0));
    assert_that!(budgets[0].percentage, eq(0.0));
    assert_that!(budgets[0].remaining, eq(200.0));
}

#[tokio::test]
async fn given_overspent_budget_when_listing_then_remaining_goes_negative() {
    // Given: Spending past the cap
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    create_test_user(&pool, user_id).await;

    let category = create_test_category(user_id, "Dining", TransactionKind::Expense);
    CategoryRepository::new(pool.clone())
        .create(&category)
        .await
        .unwrap();

    TransactionRepository::new(pool.clone())
        .create(&create_test_transaction(
            user_id,
            TransactionKind::Expense,
            Some(category.id),
            150.0,
            date(2024, 6, 12),
        ))
        .await
        .unwrap();

    let repo = BudgetRepository::new(pool.clone());
    repo.upsert(&create_test_budget(user_id, category.id, 100.0, 6, 2024))
        .await
        .unwrap();

    // When: Listing with usage
    let budgets = repo.list_with_usage(user_id, 6, 2024).await.unwrap();

    // Then: Overspend is reported, not clamped
    assert_that!(budgets, len(eq(1)));
    assert_that!(budgets[0].remaining, eq(-50.0));
    assert_that!(budgets[0].percentage, eq(150.0));
}

#[tokio::test]
async fn given_budget_owned_by_other_user_when_deleting_then_zero_rows_affected() {
    // Given: A budget owned by someone else
    let pool = create_test_pool().await;
    let owner = Uuid::new_v4();
    let intruder = Uuid::new_v4();
    create_test_user(&pool, owner).await;
    create_test_user(&pool, intruder).await;

    let category = create_test_category(owner, "Groceries", TransactionKind::Expense);
    CategoryRepository::new(pool.clone())
        .create(&category)
        .await
        .unwrap();

    let repo = BudgetRepository::new(pool.clone());
    let budget = repo
        .upsert(&create_test_budget(owner, category.id, 300.0, 6, 2024))
        .await
        .unwrap();

    // When: The intruder tries to delete it
    let affected = repo.delete(intruder, budget.id).await.unwrap();

    // Then: Silent no-op; the budget survives
    assert_that!(affected, eq(0));
    let budgets = repo.list_with_usage(owner, 6, 2024).await.unwrap();
    assert_that!(budgets, len(eq(1)));
}

#[tokio::test]
async fn given_nonexistent_budget_when_deleting_then_zero_rows_affected() {
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    create_test_user(&pool, user_id).await;

    let affected = BudgetRepository::new(pool.clone())
        .delete(user_id, Uuid::new_v4())
        .await
        .unwrap();

    assert_that!(affected, eq(0));
}

#[tokio::test]
async fn given_deleted_category_when_listing_then_budget_still_appears_without_name() {
    // Given: A budget whose category is later deleted
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    create_test_user(&pool, user_id).await;

    let category = create_test_category(user_id, "Old", TransactionKind::Expense);
    let cat_repo = CategoryRepository::new(pool.clone());
    cat_repo.create(&category).await.unwrap();

    let repo = BudgetRepository::new(pool.clone());
    repo.upsert(&create_test_budget(user_id, category.id, 250.0, 6, 2024))
        .await
        .unwrap();

    // When: Deleting the category and listing
    cat_repo.delete(user_id, category.id).await.unwrap();
    let budgets = repo.list_with_usage(user_id, 6, 2024).await.unwrap();

    // Then: The budget row survives with no display name
    assert_that!(budgets, len(eq(1)));
    assert_that!(budgets[0].category_name, none());
}
