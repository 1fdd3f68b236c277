mod render;

use anyhow::{Context, bail};
use tracing::info;

use relscope_core::Introspector;
use relscope_core::connect::DatabaseConfig;

struct CliArgs {
    dsn: String,
    schema: Option<String>,
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => return Ok(()),
        Err(e) => bail!(e),
    };

    let config = DatabaseConfig {
        dsn: args.dsn,
        ..DatabaseConfig::default()
    };
    let mut introspector =
        Introspector::connect(&config).context("failed to connect to database")?;

    let schemas = introspector.schemas().context("failed to list schemas")?;
    let tables = match &args.schema {
        Some(schema) => introspector
            .tables_in_schema(schema)
            .with_context(|| format!("failed to list tables in schema '{schema}'"))?,
        None => introspector.tables().context("failed to list tables")?,
    };
    info!(
        schemas = schemas.len(),
        tables = tables.len(),
        "catalog loaded"
    );

    let catalog = render::assemble(schemas, tables);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        print!("{}", render::render_catalog(&catalog));
    }
    Ok(())
}

// Returns Ok(None) when --help was requested.
fn parse_args() -> Result<Option<CliArgs>, String> {
    let mut dsn = std::env::var("RELSCOPE_DSN").ok();
    let mut schema = None;
    let mut json = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dsn" => {
                dsn = Some(args.next().ok_or("--dsn requires a value")?);
            }
            "--schema" => {
                schema = Some(args.next().ok_or("--schema requires a value")?);
            }
            "--json" => json = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            other => return Err(format!("unknown argument '{other}'")),
        }
    }

    let Some(dsn) = dsn else {
        return Err("no DSN provided (use --dsn or set RELSCOPE_DSN)".to_string());
    };
    Ok(Some(CliArgs { dsn, schema, json }))
}

fn print_usage() {
    println!("relscope_cli - inspect a PostgreSQL database's schemas and tables");
    println!();
    println!("Usage: relscope_cli --dsn <postgres://...> [--schema <name>] [--json]");
    println!();
    println!("Options:");
    println!("  --dsn <dsn>      Postgres DSN (or set RELSCOPE_DSN)");
    println!("  --schema <name>  only inspect the named schema");
    println!("  --json           print the catalog as JSON");
    println!("  -h, --help       show this help");
}
