use miette::{IntoDiagnostic, Report, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tally_db::{ColumnDef, DataType, Database, TableBuilder};

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(false)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .build(),
        )
    }))
    .into_diagnostic()?;
    miette::set_panic_hook();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut db = Database::new();

    let id = ColumnDef::new("id", DataType::Integer)
        .not_null()
        .primary_key();
    let name = ColumnDef::new("name", DataType::from_name("String")?).not_null();

    TableBuilder::new("users")
        .add_column(id)
        .add_column(name)
        .column("age", DataType::Integer)
        .build(&mut db)?;

    db.insert("users", [("id", "1"), ("name", "Alex"), ("age", "25")])?;
    db.insert("users", [("id", "2"), ("name", "Mira"), ("age", "30")])?;
    db.insert("users", [("id", "3"), ("name", "Sam")])?;
    info!("Inserted 3 users");

    let attempts: [(&str, Vec<(&str, &str)>); 3] = [
        ("NOT NULL", vec![("id", "4")]),
        ("data type", vec![("id", "four"), ("name", "Test")]),
        ("PRIMARY KEY", vec![("name", "Test")]),
    ];

    for (constraint, values) in attempts {
        println!("\nTesting {constraint} constraint (should fail)...");
        match db.insert("users", values) {
            Ok(_) => println!("Unexpectedly accepted"),
            Err(err) => println!("{:?}", Report::new(err)),
        }
    }

    let users = db.get_table("users")?;
    println!("\n--- Final Statistics ---");
    println!("Tables: {:?}", db.table_names().collect::<Vec<_>>());
    println!("Rows: {}", users.len());
    println!("COUNT age: {}", users.count("age"));
    println!("SUM age: {}", users.sum("age"));
    println!("AVG age: {}", users.avg("age"));

    Ok(())
}
