//! Walks a DataTable over a mock caseload: search, sort, page, select.
//!
//! Run with `cargo run --example caseload`; state transitions are logged to
//! `caseload.log`.

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tabula_grid::prelude::*;

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("caseload.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let table = DataTable::with_data("id", columns(), caseload())
        .with_page_size(4)
        .with_selection_mode(SelectionMode::Multi);

    table.on_selection_change(|records| {
        println!("-- selection now {} record(s)", records.len());
    });
    table.on_sort(|state| {
        println!("-- sort is now {state:?}");
    });

    println!("All cases:");
    print_pages(&table);

    println!("\nSearch \"open\":");
    table.set_search_query("open");
    print_view(&table.view(), &table);

    println!("\nSorted by lead, descending:");
    table.set_search_query("");
    table.toggle_sort("lead");
    table.toggle_sort("lead");
    print_view(&table.view(), &table);

    println!("\nSelect everything on the first page:");
    table.set_page(1);
    table.toggle_select_all();
    for record in table.selected_records() {
        println!("  selected: {}", record.display_string("title"));
    }

    Ok(())
}

fn print_pages(table: &DataTable) {
    loop {
        let view = table.view();
        print_view(&view, table);
        if !view.has_next_page() {
            break;
        }
        table.next_page();
    }
    table.set_page(1);
}

fn print_view(view: &TableView, table: &DataTable) {
    println!("  page {}/{} ({} match)", view.page, view.page_count, view.filtered_len);
    match view.empty {
        Some(EmptyKind::NoData) => println!("  (no data)"),
        Some(EmptyKind::NoMatches) => println!("  (no results)"),
        None => {
            for (i, record) in view.rows.iter().enumerate() {
                let cells: Vec<String> = table
                    .columns()
                    .iter()
                    .map(|c| c.cell_text(record, i))
                    .collect();
                println!("  {}", cells.join(" | "));
            }
        }
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID").width(4),
        Column::new("title", "Title").sortable(),
        Column::new("lead", "Lead").sortable(),
        Column::new("status", "Status").sortable().formatter(|value, _, _| {
            match value {
                Value::Null => "unknown".to_string(),
                other => other.display_string(),
            }
        }),
    ]
}

fn caseload() -> Vec<Record> {
    let rows = [
        (1i64, "Offshore ledgers", "Ines", Some("open")),
        (2, "Procurement audit", "Marta", Some("closed")),
        (3, "Shell company map", "Ines", Some("open")),
        (4, "Port registry gaps", "Jonas", None),
        (5, "Subsidy trail", "Marta", Some("open")),
        (6, "Licensing board", "Jonas", Some("closed")),
        (7, "Customs manifests", "Ines", None),
        (8, "Grant recipients", "Marta", Some("open")),
        (9, "Harbor leases", "Jonas", Some("stalled")),
    ];
    rows.into_iter()
        .map(|(id, title, lead, status)| {
            Record::new()
                .set("id", id)
                .set("title", title)
                .set("lead", lead)
                .set("status", status)
        })
        .collect()
}
