//! Tests for SqliteMentorRepository.

use crate::db::{
    Database, DbError, Mentor, MentorQuery, MentorRepository, PageSort, SortOrder, SqliteDatabase,
};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

fn mentor(name: &str, email: &str) -> Mentor {
    Mentor {
        id: String::new(),
        name: name.to_string(),
        email: email.to_string(),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn mentor_create_and_get() {
    let db = setup_db().await;
    let mentors = db.mentors();

    let created = mentors
        .create(&mentor("Donald Knuth", "knuth@stanford.edu"))
        .await
        .expect("Create should succeed");
    assert_eq!(created.id.len(), 12);

    let retrieved = mentors.get(&created.id).await.expect("Get should succeed");
    assert_eq!(retrieved, created);
}

#[tokio::test(flavor = "multi_thread")]
async fn mentor_create_keeps_provided_id() {
    let db = setup_db().await;
    let mentors = db.mentors();

    let created = mentors
        .create(&Mentor {
            id: "mentor000001".to_string(),
            name: "Edsger Dijkstra".to_string(),
            email: "ewd@utexas.edu".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, "mentor000001");
}

#[tokio::test(flavor = "multi_thread")]
async fn mentor_create_trims_and_validates() {
    let db = setup_db().await;
    let mentors = db.mentors();

    let created = mentors
        .create(&mentor("  Alan Kay ", " kay@parc.com "))
        .await
        .unwrap();
    assert_eq!(created.name, "Alan Kay");
    assert_eq!(created.email, "kay@parc.com");

    let err = mentors.create(&mentor("", "nobody@example.com")).await.unwrap_err();
    assert!(matches!(err, DbError::Validation { .. }));

    let err = mentors.create(&mentor("Nobody", "not-an-email")).await.unwrap_err();
    assert!(matches!(err, DbError::Validation { .. }));

    let listed = mentors.list(None).await.unwrap();
    assert_eq!(listed.total, 1, "Rejected mentors must not be stored");
}

#[tokio::test(flavor = "multi_thread")]
async fn mentor_duplicate_id_is_constraint_violation() {
    let db = setup_db().await;
    let mentors = db.mentors();

    let first = Mentor {
        id: "dupdupdupdup".to_string(),
        name: "First".to_string(),
        email: "first@example.com".to_string(),
    };
    mentors.create(&first).await.unwrap();

    let err = mentors.create(&first).await.unwrap_err();
    assert!(matches!(err, DbError::Constraint { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn mentor_get_nonexistent_returns_not_found() {
    let db = setup_db().await;

    let err = db.mentors().get("nonexistent0").await.unwrap_err();
    assert!(matches!(err, DbError::NotFound { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn mentor_exists() {
    let db = setup_db().await;
    let mentors = db.mentors();

    let created = mentors
        .create(&mentor("Frances Allen", "allen@ibm.com"))
        .await
        .unwrap();

    assert!(mentors.exists(&created.id).await.unwrap());
    assert!(!mentors.exists("nonexistent0").await.unwrap());
}

#[tokio::test(flavor = "multi_thread")]
async fn mentor_list_with_sorting_and_pagination() {
    let db = setup_db().await;
    let mentors = db.mentors();

    for (name, email) in [
        ("Carol", "carol@example.com"),
        ("Alice", "alice@example.com"),
        ("Bob", "bob@example.com"),
    ] {
        mentors.create(&mentor(name, email)).await.unwrap();
    }

    // Default: insertion order
    let all = mentors.list(None).await.unwrap();
    let names: Vec<&str> = all.items.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Carol", "Alice", "Bob"]);
    assert_eq!(all.total, 3);

    let query = MentorQuery {
        page: PageSort {
            limit: Some(2),
            offset: Some(1),
            sort_by: Some("name".to_string()),
            sort_order: Some(SortOrder::Desc),
        },
    };
    let page = mentors.list(Some(&query)).await.unwrap();
    let names: Vec<&str> = page.items.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Alice"]);
    assert_eq!(page.total, 3);
    assert_eq!(page.limit, Some(2));
    assert_eq!(page.offset, 1);
}
