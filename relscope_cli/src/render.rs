use relscope_core::model::{Schema, Table};

/// Moves each table under its owning schema. Tables whose schema is missing
/// from `schemas` (a single-schema listing, say) get a synthesized entry so
/// nothing silently disappears.
pub fn assemble(mut schemas: Vec<Schema>, tables: Vec<Table>) -> Vec<Schema> {
    for table in tables {
        match schemas.iter().position(|s| s.name == table.schema) {
            Some(idx) => schemas[idx].tables.push(table),
            None => schemas.push(Schema {
                name: table.schema.clone(),
                tables: vec![table],
            }),
        }
    }
    schemas
}

/// Formats the catalog as an indented text tree.
pub fn render_catalog(schemas: &[Schema]) -> String {
    let mut out = String::new();
    for schema in schemas {
        out.push_str(&format!("schema {}\n", schema.name));
        for table in &schema.tables {
            render_table(&mut out, table);
        }
    }
    out
}

fn render_table(out: &mut String, table: &Table) {
    out.push_str(&format!("  table {}\n", table.name));
    for column in &table.columns {
        let nullable = if column.is_nullable() {
            "null"
        } else {
            "not null"
        };
        out.push_str(&format!(
            "    column {} {} {}\n",
            column.column_name,
            column.udt_name(),
            nullable
        ));
    }
    for pk in &table.primary_keys {
        out.push_str(&format!("    primary key {}\n", pk.constraint.column_name));
    }
    for fk in &table.foreign_keys {
        out.push_str(&format!(
            "    foreign key {} -> {}.{}.{}\n",
            fk.constraint.column_name,
            fk.foreign_schema_name,
            fk.foreign_table_name,
            fk.foreign_column_name
        ));
    }
}
