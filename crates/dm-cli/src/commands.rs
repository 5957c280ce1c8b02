use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use dm_cli::config::{StudyOverrides, load_study_config};
use dm_cli::pipeline::{log_diagnostics, run_pipeline};
use dm_cli::sample::write_sample;
use dm_output::{DM_COLUMNS, OutputFormat, write_outputs};
use tracing::{info, info_span};

use crate::cli::{OutputFormatArg, RunArgs, SampleArgs};
use crate::summary::apply_table_style;
use crate::types::RunResult;

pub fn run_schema() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["#", "Variable", "Label"]);
    apply_table_style(&mut table);
    for (idx, column) in DM_COLUMNS.iter().enumerate() {
        table.add_row(vec![
            (idx + 1).to_string(),
            column.name.to_string(),
            column.label.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_sample(args: &SampleArgs) -> Result<()> {
    let files = write_sample(&args.dir)?;
    println!("Demographics: {}", files.demographics.display());
    println!("Exposure: {}", files.exposure.display());
    Ok(())
}

pub fn run_build(args: &RunArgs) -> Result<RunResult> {
    let started = Instant::now();
    let overrides = StudyOverrides {
        study_id: args.study_id.clone(),
        site_id: args.site_id.clone(),
        country: args.country.clone(),
    };
    let config = load_study_config(args.config.as_deref(), &overrides)?;
    let span = info_span!("run", study_id = %config.study_id);
    let _guard = span.enter();

    let output = run_pipeline(&args.demographics, &args.exposure, &config)?;
    log_diagnostics(&output.report);

    let outputs = if args.dry_run {
        info!("dry run, no files written");
        None
    } else {
        Some(write_run_outputs(&args.output_dir, args.format, &output)?)
    };

    info!(
        records = output.records.len(),
        elapsed_ms = started.elapsed().as_millis(),
        "run complete"
    );
    Ok(RunResult {
        study_id: config.study_id,
        output_dir: args.output_dir.clone(),
        demographics_read: output.demographics_read,
        exposures_read: output.exposures_read,
        records: output.records.len(),
        arm_counts: output.arm_counts,
        report: output.report,
        outputs,
    })
}

fn write_run_outputs(
    output_dir: &Path,
    format: OutputFormatArg,
    output: &dm_cli::pipeline::PipelineOutput,
) -> Result<dm_output::OutputPaths> {
    write_outputs(
        output_dir,
        &format_outputs(format),
        &output.records,
        &output.report.diagnostics,
    )
    .with_context(|| format!("write outputs to {}", output_dir.display()))
}

fn format_outputs(format: OutputFormatArg) -> Vec<OutputFormat> {
    match format {
        OutputFormatArg::Csv => vec![OutputFormat::Csv],
        OutputFormatArg::Json => vec![OutputFormat::Json],
        OutputFormatArg::Both => vec![OutputFormat::Csv, OutputFormat::Json],
    }
}
