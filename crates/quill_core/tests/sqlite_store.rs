use quill_core::db::migrations::{current_user_version, latest_version};
use quill_core::db::{open_db, DbError};
use quill_core::{
    seed_demo_data, EntityReader, MemoryEntityRepository, QueryService, RepoError,
    SqliteEntityRepository,
};

#[test]
fn appended_rows_survive_reopen_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quill.sqlite3");

    let (people, posts, comments) = {
        let mut repo = SqliteEntityRepository::try_new(open_db(&path).unwrap()).unwrap();
        seed_demo_data(&mut repo).unwrap();
        (
            repo.people().unwrap(),
            repo.posts().unwrap(),
            repo.comments().unwrap(),
        )
    };

    let reopened = SqliteEntityRepository::try_new(open_db(&path).unwrap()).unwrap();
    assert_eq!(reopened.people().unwrap(), people);
    assert_eq!(reopened.posts().unwrap(), posts);
    assert_eq!(reopened.comments().unwrap(), comments);
}

#[test]
fn sqlite_and_memory_stores_answer_queries_alike() {
    let dir = tempfile::tempdir().unwrap();
    let mut sqlite =
        SqliteEntityRepository::try_new(open_db(dir.path().join("q.sqlite3")).unwrap()).unwrap();
    let mut memory = MemoryEntityRepository::new();
    seed_demo_data(&mut sqlite).unwrap();
    seed_demo_data(&mut memory).unwrap();

    let from_sqlite = QueryService::new(&sqlite);
    let from_memory = QueryService::new(&memory);
    for filter in [None, Some("o"), Some("JOHN"), Some("zzz")] {
        let sqlite_names: Vec<String> = from_sqlite
            .list_people(filter)
            .unwrap()
            .into_iter()
            .map(|person| person.name)
            .collect();
        let memory_names: Vec<String> = from_memory
            .list_people(filter)
            .unwrap()
            .into_iter()
            .map(|person| person.name)
            .collect();
        assert_eq!(sqlite_names, memory_names);
    }
}

#[test]
fn migrations_are_idempotent_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quill.sqlite3");

    let conn = open_db(&path).unwrap();
    assert_eq!(current_user_version(&conn).unwrap(), latest_version());
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(current_user_version(&conn).unwrap(), latest_version());
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quill.sqlite3");

    let conn = open_db(&path).unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version() + 1))
        .unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    assert!(matches!(
        err,
        DbError::UnsupportedSchemaVersion { db_version, latest_supported }
            if db_version == latest_version() + 1 && latest_supported == latest_version()
    ));
}

#[test]
fn invalid_published_flag_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_db(dir.path().join("quill.sqlite3")).unwrap();
    conn.execute_batch("PRAGMA ignore_check_constraints = ON;")
        .unwrap();
    conn.execute(
        "INSERT INTO posts (id, title, body, published, author)
         VALUES ('00000000-0000-4000-8000-000000000001', 't', 'b', 7,
                 '00000000-0000-4000-8000-000000000002');",
        [],
    )
    .unwrap();

    let repo = SqliteEntityRepository::try_new(conn).unwrap();
    let err = repo.posts().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("posts.published")));
}
