use chrono::{Duration, TimeZone, Utc};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use std::sync::Mutex;
use storyteller_core::{NewStory, Prompt};
use storyteller_database::{PostgresStoryStore, create_pool, run_pending_migrations};
use storyteller_error::StorageErrorKind;
use storyteller_interface::StoryStore;

fn new_story(prompt: &str, content: &str, created_at: chrono::DateTime<Utc>) -> NewStory {
    NewStory::new(Prompt::parse(prompt).expect("valid prompt"), content, created_at)
}

static MIGRATE: Mutex<()> = Mutex::new(());

/// Store against `DATABASE_URL`, migrated once per test binary.
fn live_store() -> anyhow::Result<PostgresStoryStore> {
    dotenvy::dotenv().ok();
    let url = std::env::var("DATABASE_URL")?;
    let pool = create_pool(&url, 4, std::time::Duration::from_secs(30))?;
    {
        let _guard = MIGRATE.lock().map_err(|e| anyhow::anyhow!("{e}"))?;
        run_pending_migrations(&pool)?;
    }
    Ok(PostgresStoryStore::new(pool))
}

#[tokio::test]
async fn test_unreachable_database_is_connection_error() {
    // Nothing listens on port 1; the pool is built lazily so the failure
    // surfaces on the first query.
    let manager = ConnectionManager::<PgConnection>::new("postgres://storyteller@127.0.0.1:1/stories");
    let pool = Pool::builder()
        .max_size(1)
        .connection_timeout(std::time::Duration::from_secs(1))
        .build_unchecked(manager);
    let store = PostgresStoryStore::new(pool);

    let err = store.list_all().await.unwrap_err();
    assert!(matches!(err.kind, StorageErrorKind::Connection(_)), "{:?}", err.kind);

    let err = store
        .insert(new_story("a brave knight", "who saved the village", Utc::now()))
        .await
        .unwrap_err();
    assert!(matches!(err.kind, StorageErrorKind::Connection(_)), "{:?}", err.kind);
}

#[tokio::test]
#[cfg_attr(not(feature = "integration"), ignore)]
async fn test_insert_and_list_newest_first() -> anyhow::Result<()> {
    let store = live_store()?;

    let t1 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let t2 = t1 + Duration::minutes(1);
    let t3 = t2 + Duration::minutes(1);

    let middle = store.insert(new_story("two", "second story", t2)).await?;
    let newest = store.insert(new_story("three", "third story", t3)).await?;
    let oldest = store.insert(new_story("one", "first story", t1)).await?;

    let ours = [*oldest.id(), *middle.id(), *newest.id()];
    let listed: Vec<_> = store
        .list_all()
        .await?
        .into_iter()
        .filter(|s| ours.contains(s.id()))
        .collect();
    assert_eq!(listed, vec![newest, middle, oldest]);
    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "integration"), ignore)]
async fn test_equal_timestamps_list_later_insert_first() -> anyhow::Result<()> {
    let store = live_store()?;
    let at = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
    let first = store.insert(new_story("tie", "inserted first", at)).await?;
    let second = store.insert(new_story("tie", "inserted second", at)).await?;

    let listed = store.list_all().await?;
    let first_pos = listed.iter().position(|s| s.id() == first.id()).expect("first listed");
    let second_pos = listed.iter().position(|s| s.id() == second.id()).expect("second listed");
    assert!(second_pos < first_pos);
    Ok(())
}
