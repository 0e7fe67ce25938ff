
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;


// UTF-8 renditions of Windows-1252 smart punctuation, plus the raw mojibake
// sequences a round trip through the wrong encoding leaves behind.
const ENCODING_FIXES: [(&str, &str); 14] = [
    ("â€™", "'"),
    ("â€˜", "'"),
    ("â€œ", "\""),
    ("â€\u{9d}", "\""),
    ("â€“", "-"),
    ("â€”", "-"),
    ("â€¦", "..."),
    ("\u{2018}", "'"),
    ("\u{2019}", "'"),
    ("\u{201c}", "\""),
    ("\u{201d}", "\""),
    ("\u{2013}", "-"),
    ("\u{2014}", "-"),
    ("\u{2026}", "..."),
];


#[derive(Debug, Clone, Deserialize)]
pub struct JournalRecord {
    pub text: String,
    pub label: String,
}


pub fn fix_encoding(text: &str) -> String {
    let mut fixed = text.to_owned();
    for (bad, good) in ENCODING_FIXES {
        if fixed.contains(bad) {
            fixed = fixed.replace(bad, good);
        }
    }
    fixed
}

pub fn load_dataset(path: &Path) -> Result<Vec<JournalRecord>> {
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open dataset at {}", path.display()))?;
    parse_records(reader)
}

fn parse_records<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<JournalRecord>> {
    let mut records = Vec::new();
    for row in reader.deserialize::<JournalRecord>() {
        let mut record = row.context("failed to parse dataset row")?;
        record.text = fix_encoding(&record.text);

        // rows without text or label can't be scored
        if record.text.trim().is_empty() || record.label.trim().is_empty() {
            continue;
        }

        record.label = record.label.to_lowercase();
        records.push(record);
    }

    Ok(records)
}
