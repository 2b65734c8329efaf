//! Launch confirmation question
//!
//! Shows the configuration summary table above a Yes/No list. A single signed
//! focus index spans both lists: `0..` indexes the Yes/No list and negative
//! values count back from the last summary row (`-1` is the last row).

use super::input::QuestionInput;
use super::single_select::SingleSelectList;
use super::{Cmd, KeyKind, Msg, Question};
use crate::error::QuestionError;

/// Focus index the question starts at ("No" in the Yes/No list)
const INITIAL_FOCUS: isize = 1;

/// Summary table plus Yes/No list with shared focus
#[derive(Debug)]
pub struct Confirmation {
    summary: SingleSelectList,
    yes_no: SingleSelectList,
    choice: String,
    focus_index: isize,
    allow_edit: bool,
    err: Option<QuestionError>,
}

impl Confirmation {
    /// Build the question from the summary rows and their edit options
    pub fn new(input: &QuestionInput) -> Self {
        let mut summary = SingleSelectList::new(&QuestionInput::summary(
            input.rows.clone(),
            input.indexed_options.clone(),
        ));
        summary.select(-1);

        // The Yes/No rows always stay on screen below the summary
        let mut yes_no = SingleSelectList::new(&QuestionInput::yes_no());
        yes_no.set_reserved_lines(0);
        summary.set_reserved_lines(summary.chrome_lines() + yes_no.len());

        Self {
            summary,
            yes_no,
            choice: String::new(),
            focus_index: INITIAL_FOCUS,
            allow_edit: false,
            err: None,
        }
    }

    /// Allow focus to move up into the summary rows
    pub fn set_allow_edit(&mut self, allow_edit: bool) {
        self.allow_edit = allow_edit;
    }

    pub fn allow_edit(&self) -> bool {
        self.allow_edit
    }

    pub fn focus_index(&self) -> isize {
        self.focus_index
    }

    /// The committed answer, valid once the question has quit
    pub fn choice(&self) -> &str {
        &self.choice
    }

    /// The error that ended the question, if any
    pub fn error(&self) -> Option<&QuestionError> {
        self.err.as_ref()
    }

    pub fn summary(&self) -> &SingleSelectList {
        &self.summary
    }

    pub fn yes_no(&self) -> &SingleSelectList {
        &self.yes_no
    }

    fn summary_len(&self) -> isize {
        isize::try_from(self.summary.len()).unwrap_or(isize::MAX)
    }

    fn yes_no_len(&self) -> isize {
        isize::try_from(self.yes_no.len()).unwrap_or(isize::MAX)
    }

    fn move_up(&mut self) -> bool {
        if self.focus_index > -self.summary_len() && (self.allow_edit || self.focus_index > 0) {
            self.focus_index -= 1;
            log::debug!("Focus moved up to {}", self.focus_index);
        }

        // Crossing from the Yes/No list into the summary table
        if self.focus_index == -1 {
            self.summary.select(self.summary_len() - 1);
            self.yes_no.select(self.focus_index);
            return true;
        }
        false
    }

    fn move_down(&mut self) -> bool {
        if self.focus_index < self.yes_no_len() - 1 {
            self.focus_index += 1;
            log::debug!("Focus moved down to {}", self.focus_index);
        }

        // Crossing from the summary table back into the Yes/No list
        if self.focus_index == 0 {
            self.summary.select(-1);
            self.yes_no.select(self.focus_index);
            return true;
        }
        false
    }

    fn commit(&mut self) {
        let list = if self.focus_index < 0 {
            &mut self.summary
        } else {
            &mut self.yes_no
        };
        list.select_item();
        self.choice = list.choice().to_string();
        log::debug!("Confirmation answered with {:?}", self.choice);
    }
}

impl Question for Confirmation {
    fn update(&mut self, msg: Msg) -> Cmd {
        let msg = match msg {
            Msg::Error(err) => {
                log::debug!("Confirmation ended by error: {}", err);
                self.err = Some(err);
                return Cmd::Quit;
            }
            msg => msg,
        };

        match &msg {
            Msg::Key(KeyKind::Interrupt) => {
                self.err = Some(QuestionError::Cancelled);
                return Cmd::Quit;
            }
            Msg::Key(KeyKind::Up) => {
                if self.move_up() {
                    return Cmd::None;
                }
            }
            Msg::Key(KeyKind::Down) => {
                if self.move_down() {
                    return Cmd::None;
                }
            }
            Msg::Key(KeyKind::Enter) => {
                self.commit();
                return Cmd::Quit;
            }
            _ => {}
        }

        if self.focus_index < 0 && self.allow_edit {
            self.summary.update(&msg);
        } else {
            self.yes_no.update(&msg);
        }
        Cmd::None
    }

    fn set_viewport(&mut self, width: u16, height: u16) {
        let resize = Msg::Resize { width, height };
        self.summary.update(&resize);
        self.yes_no.update(&resize);
    }

    fn view(&self) -> String {
        let mut view = self.summary.view();
        view.push('\n');
        view.push_str(&self.yes_no.view());
        view
    }

    fn choice(&self) -> &str {
        &self.choice
    }

    fn take_error(&mut self) -> Option<QuestionError> {
        self.err.take()
    }
}
