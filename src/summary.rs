use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::question::QuestionInput;

/// One configuration row shown in the launch summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Name of the configuration, e.g. "Region"
    pub label: String,
    /// Value that will be used at launch
    pub value: String,
    /// Answer returned when the user picks this row to edit it
    pub option: String,
}

impl SummaryRow {
    pub fn new(label: &str, value: &str, option: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            option: option.to_string(),
        }
    }
}

/// Launch configuration summary that can be saved/loaded
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaunchSummary {
    pub rows: Vec<SummaryRow>,
}

impl LaunchSummary {
    pub fn new(rows: Vec<SummaryRow>) -> Self {
        Self { rows }
    }

    /// Save summary to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize summary to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write summary to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load summary from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read summary from {:?}", path.as_ref()))?;

        let summary: Self =
            serde_json::from_str(&content).context("Failed to parse summary JSON")?;

        Ok(summary)
    }

    /// Validate the summary
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (index, row) in self.rows.iter().enumerate() {
            if row.label.trim().is_empty() {
                anyhow::bail!("Row {} has an empty label", index + 1);
            }
            if row.option.trim().is_empty() {
                anyhow::bail!("Row '{}' has an empty option", row.label);
            }
            if !seen.insert(row.option.as_str()) {
                anyhow::bail!("Option '{}' is used by more than one row", row.option);
            }
        }

        Ok(())
    }

    /// Question payload for the confirmation's summary table
    pub fn to_question_input(&self) -> QuestionInput {
        QuestionInput {
            rows: self
                .rows
                .iter()
                .map(|row| vec![row.label.clone(), row.value.clone()])
                .collect(),
            indexed_options: self.rows.iter().map(|row| row.option.clone()).collect(),
            ..QuestionInput::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LaunchSummary {
        LaunchSummary::new(vec![
            SummaryRow::new("Region", "us-east-2", "region"),
            SummaryRow::new("Instance Type", "t2.micro", "instance-type"),
        ])
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        sample().save_to_file(&path).unwrap();

        let loaded = LaunchSummary::load_from_file(&path).unwrap();
        assert_eq!(loaded, sample());
        assert!(loaded.validate().is_ok());
    }

    #[test]
    fn test_load_reports_path() {
        let err = LaunchSummary::load_from_file("/nonexistent/summary.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read summary"));
    }

    #[test]
    fn test_duplicate_options_rejected() {
        let mut summary = sample();
        summary.rows[1].option = "region".to_string();
        let err = summary.validate().unwrap_err();
        assert!(err.to_string().contains("more than one row"));
    }

    #[test]
    fn test_empty_label_rejected() {
        let summary = LaunchSummary::new(vec![SummaryRow::new(" ", "x", "x")]);
        assert!(summary.validate().is_err());
    }

    #[test]
    fn test_question_input_pairs_rows_with_options() {
        let input = sample().to_question_input();
        assert_eq!(input.rows[1], vec!["Instance Type", "t2.micro"]);
        assert_eq!(input.indexed_options, vec!["region", "instance-type"]);
    }
}
