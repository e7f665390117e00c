use evlogbook::utils::table::{Column, Table, visible_width};

fn first_row(table: &Table) -> String {
    let out = table.render();
    out.lines().nth(2).unwrap_or_default().trim_end().to_string()
}

#[test]
fn test_truncated_column_respects_width_with_wide_chars() {
    let mut table = Table::new(vec![Column::new("x").truncated(4)]);
    table.add_row(vec!["日本語日本語".to_string()]);

    let row = first_row(&table);
    assert_eq!(row, "日…");
    assert!(visible_width(&row) <= 4);
}

#[test]
fn test_truncated_column_ascii() {
    let mut table = Table::new(vec![Column::new("x").truncated(4)]);
    table.add_row(vec!["abcdefgh".to_string()]);

    assert_eq!(first_row(&table), "abc…");
}

#[test]
fn test_short_cells_are_not_truncated() {
    let mut table = Table::new(vec![Column::new("Location").truncated(24)]);
    table.add_row(vec!["Home".to_string()]);

    assert_eq!(first_row(&table), "Home");
}

#[test]
fn test_columns_align_on_visible_width() {
    let mut table = Table::new(vec![Column::new("#"), Column::new("Flag")]);
    table.add_row(vec!["1".to_string(), "\x1b[32myes\x1b[0m".to_string()]);
    table.add_row(vec!["10".to_string(), "no".to_string()]);

    let out = table.render();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0].trim_end(), "#   Flag");
    assert_eq!(lines[3].trim_end(), "10  no");
    assert_eq!(visible_width(lines[2].trim_end()), "1   yes".len());
}
