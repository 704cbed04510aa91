//! Schemas survive a trip through serde unchanged.

use sqlbind_ir::{ColumnDefinition, Schema, SqlType, TableDefinition, TypeHint};

fn sample_schema() -> Schema {
    Schema::new(vec![
        TableDefinition::new(
            "player",
            vec![
                ColumnDefinition::new("id", SqlType::Integer),
                ColumnDefinition::new("name", SqlType::Text),
                ColumnDefinition::new("is_active", SqlType::Integer).hint(TypeHint::Boolean),
                ColumnDefinition::new("rank", SqlType::Text)
                    .nullable()
                    .hint(TypeHint::Enum("com.example.Rank".into()))
                    .adapter("Rank.ADAPTER"),
            ],
            "CREATE TABLE player (\n  id INTEGER NOT NULL,\n  name TEXT NOT NULL,\n  is_active INTEGER NOT NULL,\n  rank TEXT\n)",
        ),
        TableDefinition::virtual_result(
            "player_count",
            vec![ColumnDefinition::new("count", SqlType::Integer)],
        ),
    ])
}

#[test]
fn schema_roundtrips_through_json() {
    let schema = sample_schema();
    let json = serde_json::to_string(&schema).unwrap();
    let back: Schema = serde_json::from_str(&json).unwrap();
    assert_eq!(schema, back);
}

#[test]
fn ddl_text_is_preserved_verbatim() {
    let schema = sample_schema();
    let json = serde_json::to_string(&schema).unwrap();
    let back: Schema = serde_json::from_str(&json).unwrap();

    let ddl = back.table("player").unwrap().create_table_sql.as_deref();
    assert_eq!(ddl, schema.table("player").unwrap().create_table_sql.as_deref());
    assert!(ddl.unwrap().contains("is_active INTEGER NOT NULL"));
}
