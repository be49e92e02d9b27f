use recordbind::prelude::*;

#[derive(Record, Default, Debug, PartialEq)]
#[record(table = "players")]
struct Player {
    #[record(key, column = "id")]
    id: i64,
    #[record(column = "name")]
    name: String,
    #[record(column = "score")]
    score: i32,
    scratch: u32,
}

#[derive(Record, Default, Debug, PartialEq)]
#[record(table = "audit_events")]
struct AuditEvent {
    #[record(column = "message")]
    message: String,
    #[record(column = "level")]
    level: i32,
}

fn player() -> Player {
    Player {
        id: 7,
        name: "alice".into(),
        score: 42,
        scratch: 99,
    }
}

#[test]
fn derived_metadata_follows_declaration_order() {
    assert_eq!(Player::TABLE, "players");
    let names: Vec<&str> = Player::COLUMNS.iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["id", "name", "score"]);
    let keys: Vec<bool> = Player::COLUMNS.iter().map(|c| c.key).collect();
    assert_eq!(keys, vec![true, false, false]);

    // Unannotated fields are invisible to the mapper.
    assert!(Player::COLUMNS.iter().all(|c| c.name != "scratch"));
    assert_eq!(player().scratch, 99);
    assert_eq!(
        player().values(),
        vec![Value::Int(7), Value::Text("alice".into()), Value::Int(42)]
    );
}

#[test]
fn key_column_and_identifier() {
    let key = Player::key_column().expect("player has a key");
    assert_eq!(key.name, "id");
    assert_eq!(player().identifier(), Some(("id", Value::Int(7))));

    assert_eq!(AuditEvent::key_column(), None);
    assert_eq!(AuditEvent::default().identifier(), None);
}

#[test]
fn insert_references_every_binding() {
    let stmt = insert_statement(&player());
    assert_eq!(
        stmt.sql,
        "INSERT INTO `players` (`id`, `name`, `score`) VALUES (^, ^, ^)"
    );
    assert_eq!(stmt.params.len(), Player::COLUMNS.len());
    assert_eq!(
        stmt.sql.matches('^').count(),
        stmt.params.len(),
        "every bound value must be referenced by exactly one marker"
    );
}

#[test]
fn update_addresses_the_key_and_binds_it_last() {
    let stmt = update_statement(&player()).expect("player has a key");
    assert_eq!(
        stmt.sql,
        "UPDATE `players` SET `name` = ^, `score` = ^ WHERE `id` = ^"
    );
    assert_eq!(
        stmt.params,
        vec![Value::Text("alice".into()), Value::Int(42), Value::Int(7)]
    );
    assert_eq!(stmt.sql.matches('^').count(), stmt.params.len());
}

#[test]
fn remove_is_capped_at_one_row() {
    let stmt = remove_statement(&player()).expect("player has a key");
    assert_eq!(stmt.sql, "DELETE FROM `players` WHERE `id` = ^ LIMIT 1");
    assert_eq!(stmt.params, vec![Value::Int(7)]);
}

#[test]
fn keyless_records_cannot_update_or_remove() {
    let event = AuditEvent {
        message: "login".into(),
        level: 3,
    };

    assert!(matches!(
        update_statement(&event),
        Err(RecordBindError::MissingKey {
            table: "audit_events"
        })
    ));
    assert!(matches!(
        remove_statement(&event),
        Err(RecordBindError::MissingKey {
            table: "audit_events"
        })
    ));

    // Insert is still fine without a key.
    let stmt = insert_statement(&event);
    assert_eq!(
        stmt.sql,
        "INSERT INTO `audit_events` (`message`, `level`) VALUES (^, ^)"
    );
}

#[test]
fn statement_text_quotes_awkward_identifiers() {
    #[derive(Record, Default)]
    #[record(table = "weird`name")]
    struct Weird {
        #[record(key, column = "select")]
        id: i64,
    }

    let stmt = insert_statement(&Weird { id: 1 });
    assert_eq!(stmt.sql, "INSERT INTO `weird``name` (`select`) VALUES (^)");
    assert_eq!(quote_identifier("weird`name"), "`weird``name`");
}
