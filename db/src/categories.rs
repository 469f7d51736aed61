use std::collections::HashSet;

use sqlx::SqlitePool;

use crate::Category;

pub async fn get_categories(pool: &SqlitePool) -> sqlx::Result<Vec<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, type FROM categories ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_category(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, type FROM categories WHERE categories.id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn get_category_by_type(
    pool: &SqlitePool,
    kind: &str,
) -> sqlx::Result<Option<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, type FROM categories WHERE categories.type = ?1
        "#,
    )
    .bind(kind)
    .fetch_optional(pool)
    .await
}

pub async fn create_category(pool: &SqlitePool, kind: &str) -> anyhow::Result<i64> {
    let id = sqlx::query(
        r#"
        INSERT INTO categories (type) VALUES (?1)
        "#,
    )
    .bind(kind)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

pub async fn update_category(pool: &SqlitePool, category: Category) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        UPDATE categories SET type=?1 WHERE categories.id = ?2
        "#,
    )
    .bind(category.kind)
    .bind(category.id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete_category(pool: &SqlitePool, id: i64) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        DELETE FROM categories WHERE categories.id = ?1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn import_categories(pool: &SqlitePool, categories: Vec<Category>) -> anyhow::Result<()> {
    let existing = get_categories(pool).await?;
    let existing_ids: HashSet<i64> = existing.iter().map(|c| c.id).collect();
    let new_ids: HashSet<i64> = categories.iter().map(|c| c.id).collect();
    for id in existing_ids.difference(&new_ids) {
        delete_category(pool, *id).await?;
    }
    for category in categories {
        if existing_ids.contains(&category.id) {
            update_category(pool, category).await?;
        } else {
            // imports keep the id from the file so question references hold
            sqlx::query(
                r#"
                INSERT INTO categories (id, type) VALUES (?1, ?2)
                "#,
            )
            .bind(category.id)
            .bind(category.kind)
            .execute(pool)
            .await?;
        }
    }
    Ok(())
}
