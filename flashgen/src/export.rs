//! Flashcard set export to CSV or JSON files on disk.

use chrono::Local;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::deck::FlashcardSet;
use crate::error::{FlashgenError, Result};

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = FlashgenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(FlashgenError::UnsupportedExportFormat(other.to_string())),
        }
    }
}

/// Write a flashcard set into `export_dir`, creating the directory if
/// absent. Returns the path of the written file.
///
/// Filename pattern: `<subject with spaces underscored>_<YYYYMMDD_HHMMSS>.<ext>`.
pub fn export_set(
    set: &FlashcardSet,
    format: ExportFormat,
    export_dir: &Path,
) -> Result<PathBuf> {
    std::fs::create_dir_all(export_dir)?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!(
        "{}_{}.{}",
        set.subject.replace(' ', "_"),
        timestamp,
        format.extension()
    );
    let filepath = export_dir.join(filename);

    match format {
        ExportFormat::Csv => write_csv(set, &filepath)?,
        ExportFormat::Json => write_json(set, &filepath)?,
    }

    log::info!(
        "Exported {} card(s) to {}",
        set.cards().len(),
        filepath.display()
    );
    Ok(filepath)
}

fn write_csv(set: &FlashcardSet, filepath: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(filepath)?;
    writer.write_record(["ID", "Question", "Answer", "Difficulty", "Topic", "Subject"])?;
    for card in set.cards() {
        writer.write_record([
            card.id.as_str(),
            card.question.as_str(),
            card.answer.as_str(),
            card.difficulty.label(),
            card.topic.as_str(),
            card.subject.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json(set: &FlashcardSet, filepath: &Path) -> Result<()> {
    let file = std::fs::File::create(filepath)?;
    serde_json::to_writer_pretty(file, set)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{CardDraft, Difficulty};

    fn sample_set() -> FlashcardSet {
        let mut set = FlashcardSet::new("Bio Set", "Cell Biology", "Sample");
        set.add_cards(vec![
            CardDraft {
                id: Some("1".to_string()),
                question: "What is osmosis?".to_string(),
                answer: "Movement of water, across a membrane.".to_string(),
                difficulty: Difficulty::Easy,
                topic: "Transport".to_string(),
                subject: None,
            },
            CardDraft {
                id: Some("2".to_string()),
                question: "Explain diffusion.".to_string(),
                answer: "Passive movement down a gradient.".to_string(),
                difficulty: Difficulty::Medium,
                topic: "Transport".to_string(),
                subject: None,
            },
        ]);
        set
    }

    #[test]
    fn test_unsupported_format_string() {
        let result = "xml".parse::<ExportFormat>();
        assert!(matches!(
            result,
            Err(FlashgenError::UnsupportedExportFormat(_))
        ));
    }

    #[test]
    fn test_filename_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_set(&sample_set(), ExportFormat::Csv, dir.path()).unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("Cell_Biology_"));
        assert!(name.ends_with(".csv"));
    }

    #[test]
    fn test_csv_export_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_set(&sample_set(), ExportFormat::Csv, dir.path()).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec!["ID", "Question", "Answer", "Difficulty", "Topic", "Subject"]
        );

        let rows: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "What is osmosis?");
        assert_eq!(&rows[0][3], "Easy");
        assert_eq!(&rows[1][5], "Cell Biology");
    }

    #[test]
    fn test_json_round_trip() {
        let set = sample_set();
        let dir = tempfile::tempdir().unwrap();
        let path = export_set(&set, ExportFormat::Json, dir.path()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: FlashcardSet = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.name, set.name);
        assert_eq!(parsed.subject, set.subject);
        assert_eq!(parsed.cards(), set.cards());

        // Pretty-printed for readability
        assert!(content.contains('\n'));
    }

    #[test]
    fn test_export_dir_created() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("exports/nested");
        let path = export_set(&sample_set(), ExportFormat::Json, &nested).unwrap();
        assert!(path.exists());
    }
}
