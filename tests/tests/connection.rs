use minirecord::{
    attrs,
    db::ConnectionManager,
    driver::{operation::QuerySql, Driver},
    Db, Record, Value,
};
use minirecord_driver_sqlite::Sqlite;
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tests::{models::*, *};

fn temp_db_path() -> PathBuf {
    std::env::temp_dir().join(format!("minirecord-test-{}.db", uuid::Uuid::new_v4()))
}

#[test]
fn first_statement_resets_the_database() {
    init_tracing();

    let manager = ConnectionManager::new(Box::new(Sqlite::in_memory()), CATS_SQL);
    assert!(!manager.is_open());

    let rows = manager
        .exec(QuerySql::new("SELECT * FROM cats", vec![]).into())
        .unwrap()
        .into_rows();

    assert!(manager.is_open());
    assert_eq!(rows.columns(), ["id", "name", "owner_id"]);
    assert_eq!(rows.len(), 5);
}

#[test]
fn building_opens_the_connection() {
    let db = setup();
    assert!(db.connection().is_open());
}

#[test]
fn reset_restores_the_seed_data() {
    let db = setup();

    let mut cat = Cat::new(attrs! { name: "Gizmo", owner_id: 1 }).unwrap();
    cat.insert(&db).unwrap();
    let mut human = Human::find(&db, 2).unwrap().unwrap();
    human.set_fname("Matthew");
    human.update(&db).unwrap();

    db.reset().unwrap();

    assert_eq!(Cat::all(&db).unwrap().len(), 5);
    assert_eq!(
        Human::find(&db, 2).unwrap().unwrap().fname().as_deref(),
        Some("Matt")
    );
}

#[test]
fn reset_keeps_reflected_columns() {
    let db = setup();
    db.reset().unwrap();

    assert_eq!(Cat::columns(&db).unwrap(), ["id", "name", "owner_id"]);
}

#[test]
fn hand_written_statements() {
    let db = setup();

    let inserted = db
        .execute(
            "INSERT INTO houses (address) VALUES (?1)",
            vec![Value::from("Haight and Ashbury")],
        )
        .unwrap();
    assert_eq!(inserted, 1);
    assert_eq!(db.last_insert_id().unwrap(), 3);

    let rows = db
        .query("SELECT address FROM houses WHERE id = ?1", vec![Value::Integer(3)])
        .unwrap();
    assert_eq!(rows.rows(), [vec![Value::from("Haight and Ashbury")]]);
}

#[test]
fn failed_statements_surface_driver_errors() {
    let db = setup();

    assert!(db.query("SELECT * FROM dogs", vec![]).unwrap_err().is_driver());
    assert!(db
        .execute("INSERT INTO cats (name) VALUES (NULL)", vec![])
        .unwrap_err()
        .is_driver());

    // The connection is kept
    assert!(db.connection().is_open());
    assert_eq!(Cat::all(&db).unwrap().len(), 5);
}

#[test]
fn unsupported_url_scheme() {
    let err = models().url("mysql://localhost/cats").build().unwrap_err();
    assert!(err.is_invalid_connection_url());
}

#[test]
fn schema_from_a_file() {
    init_tracing();

    let mut builder = models();
    builder.schema_file(CATS_SQL_PATH);
    let db = builder.build().unwrap();

    assert_eq!(Human::all(&db).unwrap().len(), 4);
}

#[test]
fn file_database_is_rebuilt_on_open() {
    init_tracing();

    let path = temp_db_path();
    let url = format!("sqlite:{}", path.display());

    {
        let db = models().url(&url).build().unwrap();
        assert_eq!(db.connection().driver().url(), url);

        let mut cat = Cat::new(attrs! { name: "Gizmo", owner_id: 1 }).unwrap();
        cat.insert(&db).unwrap();
        assert_eq!(Cat::all(&db).unwrap().len(), 6);
        assert!(path.exists());
    }

    // Opening again destroys what the previous handle wrote
    let db = models().url(&url).build().unwrap();
    assert_eq!(Cat::all(&db).unwrap().len(), 5);

    drop(db);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn fixture_foreign_keys_are_enforced() {
    init_tracing();

    let path = temp_db_path();
    let db = models()
        .url(format!("sqlite:{}", path.display()))
        .build()
        .unwrap();

    let pragma = db.query("PRAGMA foreign_keys", vec![]).unwrap();
    assert_eq!(pragma.rows(), [vec![Value::Integer(1)]]);

    // Every seeded row satisfies its foreign keys
    let violations = db.query("PRAGMA foreign_key_check", vec![]).unwrap();
    assert_empty!(violations.rows());
    assert_eq!(Cat::all(&db).unwrap().len(), 5);
    assert_eq!(Human::all(&db).unwrap().len(), 4);

    let mut cat = Cat::new(attrs! { name: "Ghost", owner_id: 999 }).unwrap();
    assert!(cat.insert(&db).unwrap_err().is_driver());
    let mut human = Human::new(attrs! { fname: "Drifter", lname: "Nobody", house_id: 999 }).unwrap();
    assert!(human.insert(&db).unwrap_err().is_driver());

    drop(db);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn configured_driver_is_used_once() {
    init_tracing();

    let mut builder = models();
    builder.driver(Sqlite::in_memory());

    let db = builder.build().unwrap();
    assert_eq!(Cat::all(&db).unwrap().len(), 5);

    assert_err!(builder.build());

    // Configuring a driver again makes the builder usable
    builder.driver(Sqlite::in_memory());
    assert_ok!(builder.build());
}

#[test]
fn logging_driver_sees_every_statement() {
    let (db, mut log) = setup_logged();

    Cat::find(&db, 1).unwrap();
    let mut cat = Cat::new(attrs! { name: "Gizmo" }).unwrap();
    cat.insert(&db).unwrap();

    assert_eq!(log.len(), 2);
    assert_eq!(log.queries(), 1);

    let (op, response) = log.pop().unwrap();
    assert_eq!(op.sql(), "SELECT * FROM cats WHERE cats.id = 1;");
    assert_eq!(response.into_rows().len(), 1);

    let (op, response) = log.pop().unwrap();
    assert!(op.is_exec_sql());
    assert_eq!(op.sql(), "INSERT INTO cats (id, name, owner_id) VALUES (?1, ?2, ?3);");
    assert_eq!(response.into_count(), 1);

    assert!(log.pop().is_none());
}
