
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use lib::utilities::current_date_string;

use crate::dataset::JournalRecord;
use crate::metrics::EvaluationSummary;

const LATEX_CAPTION: &str = "Emotion Classification Performance on Synthetic Journal Dataset";


pub fn print_summary(summary: &EvaluationSummary) {
    println!();
    println!("{}", "=".repeat(60));
    println!("OVERALL ACCURACY: {:.4} ({:.2}%)", summary.accuracy, summary.accuracy * 100.0);
    println!("{}", "=".repeat(60));

    println!();
    println!("Per-class performance ({} entries):", summary.total);
    println!("{:<12} {:>10} {:>10} {:>10} {:>8}", "Emotion", "Precision", "Recall", "F1-score", "Support");
    for (label, metrics) in summary.labels.iter().zip(&summary.per_class) {
        println!(
            "{:<12} {:>10.4} {:>10.4} {:>10.4} {:>8}",
            capitalize(label), metrics.precision, metrics.recall, metrics.f1, metrics.support
        );
    }

    println!();
    println!("Macro F1-score:    {:.4}", summary.macro_avg.f1);
    println!("Weighted F1-score: {:.4}", summary.weighted_avg.f1);
}

pub fn print_confusion_matrix(labels: &[String], matrix: &[Vec<usize>]) {
    let width = labels.iter().map(|label| label.len()).max().unwrap_or(0).max(6) + 2;

    println!();
    println!("Confusion matrix (rows: true, columns: predicted):");
    print!("{:<width$}", "");
    for label in labels {
        print!("{:>width$}", label);
    }
    println!();

    for (label, row) in labels.iter().zip(matrix) {
        print!("{:<width$}", label);
        for count in row {
            print!("{:>width$}", count);
        }
        println!();
    }
}


pub fn write_predictions_csv(
    path: &Path,
    records: &[JournalRecord],
    predictions: &[String],
    confidences: &[f64],
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(["text", "label", "predicted", "confidence"])?;
    for ((record, predicted), confidence) in records.iter().zip(predictions).zip(confidences) {
        let confidence = format!("{:.6}", confidence);
        writer.write_record([
            record.text.as_str(),
            record.label.as_str(),
            predicted.as_str(),
            confidence.as_str(),
        ])?;
    }
    writer.flush()?;

    Ok(())
}

pub fn write_latex_table(path: &Path, summary: &EvaluationSummary) -> Result<()> {
    let mut table = String::new();
    table.push_str(&format!("% generated {}\n", current_date_string()));
    table.push_str("\\begin{table}\n\\centering\n");
    table.push_str(&format!("\\caption{{{}}}\n", LATEX_CAPTION));
    table.push_str("\\begin{tabular}{lrrrr}\n\\toprule\n");
    table.push_str("Emotion & Precision & Recall & F1-score & Support \\\\\n\\midrule\n");
    for (label, metrics) in summary.labels.iter().zip(&summary.per_class) {
        table.push_str(&format!(
            "{} & {:.4} & {:.4} & {:.4} & {} \\\\\n",
            capitalize(label), metrics.precision, metrics.recall, metrics.f1, metrics.support
        ));
    }
    table.push_str("\\bottomrule\n\\end{tabular}\n\\end{table}\n");

    fs::write(path, table).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

pub fn write_confusion_matrix_csv(path: &Path, labels: &[String], matrix: &[Vec<usize>]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    let mut header: Vec<String> = Vec::with_capacity(labels.len() + 1);
    header.push("label".to_owned());
    header.extend(labels.iter().cloned());
    writer.write_record(&header)?;

    for (label, row) in labels.iter().zip(matrix) {
        let mut record: Vec<String> = Vec::with_capacity(row.len() + 1);
        record.push(label.to_owned());
        record.extend(row.iter().map(|count| count.to_string()));
        writer.write_record(&record)?;
    }
    writer.flush()?;

    Ok(())
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
