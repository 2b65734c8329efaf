//! Question payloads and the fixed confirmation options

use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

/// Header labels of the configuration summary table
pub const SUMMARY_HEADERS: [&str; 2] = ["Configurations", "Values"];

/// Prompt shown above the configuration summary table
pub const SUMMARY_QUESTION: &str =
    "Please confirm if you would like to launch instance with following options:";

/// Indexed options of the confirmation list
pub const YES_NO_OPTIONS: [&str; 2] = ["Yes", "No"];

/// Cells shown for the confirmation list, one per option
pub const YES_NO_DATA: [&str; 2] = ["Yes", "No"];

/// Answer to a confirmation question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumIter)]
pub enum Response {
    Yes,
    No,
}

impl Response {
    /// Parse a committed choice back into a response
    pub fn from_choice(choice: &str) -> Option<Self> {
        Response::iter().find(|response| response.as_ref() == choice)
    }
}

/// Everything needed to build a single-select list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionInput {
    /// Column headers, empty for a headerless list
    pub header_strings: Vec<String>,
    /// Prompt shown above the list, empty for none
    pub question_string: String,
    /// Table cells, one inner vector per row
    pub rows: Vec<Vec<String>>,
    /// Value yielded when the row at the same index is chosen
    pub indexed_options: Vec<String>,
    /// Option highlighted when the list is first shown
    pub default_option: Option<String>,
}

impl QuestionInput {
    /// Input for the Yes/No list, defaulting to "No"
    pub fn yes_no() -> Self {
        Self {
            header_strings: Vec::new(),
            question_string: String::new(),
            rows: create_single_line_rows(&YES_NO_DATA),
            indexed_options: YES_NO_OPTIONS.iter().map(|s| s.to_string()).collect(),
            default_option: Some(Response::No.to_string()),
        }
    }

    /// Summary table input built from the caller's rows and options
    pub fn summary(rows: Vec<Vec<String>>, indexed_options: Vec<String>) -> Self {
        Self {
            header_strings: SUMMARY_HEADERS.iter().map(|s| s.to_string()).collect(),
            question_string: SUMMARY_QUESTION.to_string(),
            rows,
            indexed_options,
            default_option: None,
        }
    }
}

/// Wrap each string in a one-cell row
pub fn create_single_line_rows(data: &[&str]) -> Vec<Vec<String>> {
    data.iter().map(|cell| vec![cell.to_string()]).collect()
}
