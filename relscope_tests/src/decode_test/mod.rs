use relscope_core::connect::RawRow;

fn cell(v: &str) -> Option<String> {
    Some(v.to_string())
}

fn column_row() -> RawRow {
    vec![
        cell("appdb"),
        cell("public"),
        cell("users"),
        cell("email"),
        cell("2"),
        None,
        cell("NO"),
        cell("255"),
        cell("1020"),
        None,
        cell("varchar"),
        cell("2"),
    ]
}

mod columns;
mod constraints;
