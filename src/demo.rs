//! Demo dataset: an employee roster with 20 text columns.
//!
//! Used by `GridView.demo`, the CLI and the benches.

use crate::types::{Column, DataSource};

/// Default demo dimensions
pub const DEMO_COLUMNS: usize = 20;
pub const DEMO_ROWS: usize = 2000;
pub const DEMO_COLUMN_WIDTH: f64 = 180.0;

const FIRST_NAMES: [&str; 10] = [
    "Alice", "Bruno", "Chen", "Dana", "Elif", "Farah", "Goran", "Hana", "Ivan", "Jun",
];
const LAST_NAMES: [&str; 10] = [
    "Meyer", "Okafor", "Li", "Novak", "Silva", "Tanaka", "Berg", "Costa", "Rossi", "Park",
];
const DEPARTMENTS: [&str; 6] = [
    "Engineering",
    "Sales",
    "Marketing",
    "People",
    "Finance",
    "Research",
];
const STATUSES: [&str; 3] = ["Active", "On leave", "Departed"];

fn pick<'a>(items: &[&'a str], index: usize) -> &'a str {
    items
        .get(index % items.len().max(1))
        .copied()
        .unwrap_or_default()
}

/// `count` columns titled "Column 1".., 180 wide, first one frozen
pub fn demo_columns(count: usize) -> Vec<Column> {
    (0..count)
        .map(|i| Column {
            title: format!("Column {}", i + 1),
            width: DEMO_COLUMN_WIDTH,
            frozen: i == 0,
        })
        .collect()
}

/// One roster record. Always `DEMO_COLUMNS` fields long.
pub fn demo_row(index: usize) -> Vec<String> {
    let salary = 3000 + index % 7000;
    vec![
        format!("EMP{:05}", index + 1),
        format!("{} {}", pick(&FIRST_NAMES, index), pick(&LAST_NAMES, index)),
        format!("{}", 20 + index % 40),
        pick(&DEPARTMENTS, index).to_string(),
        format!("${},{:03}", salary / 1000, salary % 1000),
        format!("{} yr", index % 5 + 1),
        format!("Project {}", index % 10 + 1),
        format!("{}%", 80 + index % 20),
        pick(&STATUSES, index).to_string(),
        format!("level-{}", index % 7 + 1),
        format!("team-{}", index % 8 + 1),
        format!("{} pts", 90 + index % 10),
        format!("skill-{}", index % 6 + 1),
        format!("city-{}", index % 10 + 1),
        format!(
            "202{}-{:02}-{:02}",
            index % 4,
            index % 12 + 1,
            index % 28 + 1
        ),
        format!("phone-{}", 13_000_000_000_u64 + index as u64),
        format!("email{index}@company.com"),
        format!("addr-{}", index % 20 + 1),
        format!("note-{index}"),
        format!("ext-{index}"),
    ]
}

/// `rows` roster records
pub fn demo_data_source(rows: usize) -> DataSource {
    DataSource::new((0..rows).map(demo_row).collect())
}
