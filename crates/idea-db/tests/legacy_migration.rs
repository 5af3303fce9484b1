//! Schema evolution tests against on-disk databases.
//!
//! A table created before ideas had a triage status must gain the column,
//! with every existing row backfilled to "Not Implemented".

use idea_core::enums::IdeaStatus;
use idea_db::IdeaDb;
use idea_db::store::IdeaStore;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

async fn create_legacy_table(path: &str, texts: &[&str]) {
    let db = libsql::Builder::new_local(path).build().await.unwrap();
    let conn = db.connect().unwrap();
    conn.execute(
        "CREATE TABLE ideas (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            idea TEXT NOT NULL,
            timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
        (),
    )
    .await
    .unwrap();
    for text in texts {
        conn.execute("INSERT INTO ideas (idea) VALUES (?1)", [*text])
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn legacy_rows_gain_default_status() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ideas.db");
    let path = path.to_str().unwrap();
    create_legacy_table(path, &["first", "second"]).await;

    let db = IdeaDb::open_local(path).await.unwrap();

    let ideas = db.list_all().await.unwrap();
    assert_eq!(ideas.len(), 2);
    assert!(ideas.iter().all(|i| i.status == IdeaStatus::NotImplemented));

    let mut rows = db
        .conn()
        .query("SELECT COUNT(*) FROM ideas WHERE status IS NULL", ())
        .await
        .unwrap();
    let nulls: i64 = rows.next().await.unwrap().unwrap().get(0).unwrap();
    assert_eq!(nulls, 0);
}

#[tokio::test]
async fn migration_runs_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ideas.db");
    let path = path.to_str().unwrap();
    create_legacy_table(path, &["only"]).await;

    let db = IdeaDb::open_local(path).await.unwrap();
    assert!(!db.migrate_status_column().await.unwrap());
}

#[tokio::test]
async fn migrated_table_accepts_new_ideas() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ideas.db");
    let path = path.to_str().unwrap();
    create_legacy_table(path, &["legacy"]).await;

    let db = IdeaDb::open_local(path).await.unwrap();
    let idea = db.insert("fresh", chrono::Utc::now()).await.unwrap();
    assert_eq!(idea.id, 2);

    assert!(db.update_status(1, IdeaStatus::Implemented).await.unwrap());
    let legacy = db.get_by_id(1).await.unwrap().unwrap();
    assert_eq!(legacy.status, IdeaStatus::Implemented);
    assert_eq!(legacy.text, "legacy");
}

#[tokio::test]
async fn data_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ideas.db");
    let path = path.to_str().unwrap();

    {
        let db = IdeaDb::open_local(path).await.unwrap();
        db.insert("persisted", chrono::Utc::now()).await.unwrap();
    }

    let db = IdeaDb::open_local(path).await.unwrap();
    let ideas = db.list_all().await.unwrap();
    assert_eq!(ideas.len(), 1);
    assert_eq!(ideas[0].text, "persisted");
}
