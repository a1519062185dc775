//! Integration tests for the movie repository against a real database.

use sqlx::PgPool;
use movies_db::models::movie::{CreateMovie, UpdateMovie};
use movies_db::repositories::MovieRepo;

fn new_movie(title: &str, year: &str) -> CreateMovie {
    CreateMovie {
        title: title.to_string(),
        year: year.to_string(),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn create_assigns_unique_ids(pool: PgPool) {
    let a = MovieRepo::create(&pool, &new_movie("Movie1", "2021")).await.unwrap();
    let b = MovieRepo::create(&pool, &new_movie("Movie2", "1998")).await.unwrap();

    assert!(a.id > 0);
    assert_ne!(a.id, b.id);
    assert_eq!(a.title, "Movie1");
    assert_eq!(a.year, "2021");
    assert!(a.deleted_at.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn find_by_id_returns_created_row(pool: PgPool) {
    let created = MovieRepo::create(&pool, &new_movie("TestMovie", "2021")).await.unwrap();

    let found = MovieRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.title, "TestMovie");
    assert_eq!(found.year, "2021");
}

#[sqlx::test(migrations = "./migrations")]
async fn find_by_unknown_id_returns_none(pool: PgPool) {
    assert!(MovieRepo::find_by_id(&pool, 999).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn list_on_empty_table_is_empty(pool: PgPool) {
    assert!(MovieRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn list_returns_rows_in_insertion_order(pool: PgPool) {
    MovieRepo::create(&pool, &new_movie("First", "2001")).await.unwrap();
    MovieRepo::create(&pool, &new_movie("Second", "2002")).await.unwrap();

    let titles: Vec<String> = MovieRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.title)
        .collect();
    assert_eq!(titles, ["First", "Second"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_applies_partial_patch_and_bumps_updated_at(pool: PgPool) {
    let created = MovieRepo::create(&pool, &new_movie("Original", "2000")).await.unwrap();

    let patch = UpdateMovie {
        title: Some("Renamed".into()),
        year: None,
    };
    let updated = MovieRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.year, "2000");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_unknown_id_returns_none(pool: PgPool) {
    let patch = UpdateMovie {
        title: Some("Nobody".into()),
        year: None,
    };
    assert!(MovieRepo::update(&pool, 424242, &patch).await.unwrap().is_none());
}
