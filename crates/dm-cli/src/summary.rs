use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dm_model::{ARM_NOT_ASSIGNED, Diagnostic, DiagnosticSeverity};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Study: {}", result.study_id);
    match &result.outputs {
        Some(outputs) => {
            println!("Output: {}", result.output_dir.display());
            for path in outputs.iter() {
                println!("  {}", path.display());
            }
        }
        None => println!("Output: dry run, nothing written"),
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Demographics rows"), Cell::new(result.demographics_read)]);
    table.add_row(vec![Cell::new("Exposure rows"), Cell::new(result.exposures_read)]);
    table.add_row(vec![
        Cell::new("DM records")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.records).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Errors"),
        count_cell(result.report.error_count(), Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Warnings"),
        count_cell(result.report.warning_count(), Color::Yellow),
    ]);
    println!("{table}");

    print_arm_table(result);
    print_diagnostic_table(&result.report.diagnostics);
}

fn print_arm_table(result: &RunResult) {
    if result.arm_counts.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("ARMCD"), header_cell("Subjects")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (arm_code, count) in &result.arm_counts {
        let arm_cell = if arm_code.is_empty() {
            dim_cell(ARM_NOT_ASSIGNED)
        } else {
            Cell::new(arm_code)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold)
        };
        table.add_row(vec![arm_cell, Cell::new(count)]);
    }
    println!();
    println!("Arms:");
    println!("{table}");
}

fn print_diagnostic_table(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    let mut ordered: Vec<&Diagnostic> = diagnostics.iter().collect();
    // Errors first; otherwise keep the order findings were raised in.
    ordered.sort_by_key(|diagnostic| severity_rank(diagnostic.severity));
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Subject"),
        header_cell("Severity"),
        header_cell("Kind"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for diagnostic in ordered {
        table.add_row(vec![
            Cell::new(&diagnostic.subject_id),
            severity_cell(diagnostic.severity),
            Cell::new(diagnostic.kind.as_str()),
            Cell::new(&diagnostic.message),
        ]);
    }
    println!();
    println!("Diagnostics:");
    println!("{table}");
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_rank(severity: DiagnosticSeverity) -> u8 {
    match severity {
        DiagnosticSeverity::Error => 0,
        DiagnosticSeverity::Warning => 1,
    }
}

fn severity_cell(severity: DiagnosticSeverity) -> Cell {
    match severity {
        DiagnosticSeverity::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        DiagnosticSeverity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
