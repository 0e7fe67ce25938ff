pub mod dataset;
pub mod metrics;
pub mod report;
pub mod samples;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lib::service::classifier_service::ClassifierService;
use tracing::info;
use tracing_subscriber::EnvFilter;


#[derive(Debug, Parser)]
#[command(name = "evaluation_runner", about = "Scores the emotion classifier against a labeled journal dataset")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify every entry of a labeled CSV and render the evaluation report.
    Evaluate {
        /// CSV file with `text` and `label` columns.
        #[arg(long, default_value = "journal_entries.csv")]
        input: PathBuf,

        /// Directory the report files are written to.
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },
    /// Run the representative journal entries through the live services.
    Samples,
}


#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Evaluate { input, output_dir } => evaluate(&input, &output_dir).await,
        Command::Samples => samples::run_samples().await,
    }
}


async fn evaluate(input: &Path, output_dir: &Path) -> Result<()> {
    let records = dataset::load_dataset(input)?;
    info!("loaded {} entries from {}", records.len(), input.display());

    let classifier = ClassifierService::new();

    let mut predictions: Vec<String> = Vec::with_capacity(records.len());
    let mut confidences: Vec<f64> = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let prediction = classifier
            .classify(&record.text)
            .await
            .with_context(|| format!("classification failed for entry {}", index + 1))?;
        predictions.push(prediction.label);
        confidences.push(prediction.score);

        if (index + 1) % 25 == 0 {
            info!("classified {}/{} entries", index + 1, records.len());
        }
    }

    let y_true: Vec<String> = records.iter().map(|record| record.label.to_owned()).collect();
    let summary = metrics::summarize(&y_true, &predictions);

    // the matrix axes are fixed to the labels present in the dataset
    let mut matrix_labels = y_true.to_owned();
    matrix_labels.sort();
    matrix_labels.dedup();
    let matrix = metrics::confusion_matrix(&y_true, &predictions, &matrix_labels);

    report::print_summary(&summary);
    report::print_confusion_matrix(&matrix_labels, &matrix);

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;
    report::write_predictions_csv(
        &output_dir.join("evaluation_results_with_predictions.csv"),
        &records,
        &predictions,
        &confidences,
    )?;
    report::write_latex_table(&output_dir.join("results_table.tex"), &summary)?;
    report::write_confusion_matrix_csv(&output_dir.join("confusion_matrix.csv"), &matrix_labels, &matrix)?;

    info!("report files written to {}", output_dir.display());
    Ok(())
}
