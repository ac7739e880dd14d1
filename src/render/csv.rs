use crate::models::constants::CSV_SEPARATOR;
use crate::models::Row;
use crate::utils::strip_common_prefix;

/// File name without the common prefix, then all values of all runs
pub fn row_csv(row: &Row, common_prefix: &str) -> String {
    std::iter::once(strip_common_prefix(&row.filename, common_prefix))
        .chain(
            row.tests
                .iter()
                .flat_map(|test| test.values.iter().map(String::as_str)),
        )
        .collect::<Vec<_>>()
        .join(CSV_SEPARATOR)
}

pub fn body_csv(rows: &[Row], common_prefix: &str) -> String {
    rows.iter()
        .map(|row| row_csv(row, common_prefix))
        .collect::<Vec<_>>()
        .join("\n")
}
