//! Interactive questions
//!
//! A question is driven one message at a time by the host loop in
//! [`crate::runtime`]:
//! - `input` - question payloads and the fixed Yes/No options
//! - `single_select` - the selectable list every question is built from
//! - `confirmation` - summary table plus Yes/No list with shared focus

pub mod confirmation;
pub mod input;
pub mod single_select;

use crate::error::QuestionError;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use strum::Display;

pub use confirmation::Confirmation;
pub use input::{QuestionInput, Response};
pub use single_select::SingleSelectList;

/// Key classes a question reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum KeyKind {
    Up,
    Down,
    Enter,
    Interrupt,
    Other,
}

impl From<KeyEvent> for KeyKind {
    fn from(key_event: KeyEvent) -> Self {
        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                KeyKind::Interrupt
            }
            KeyCode::Up => KeyKind::Up,
            KeyCode::Down => KeyKind::Down,
            KeyCode::Enter => KeyKind::Enter,
            _ => KeyKind::Other,
        }
    }
}

/// Message delivered by the host loop
#[derive(Debug)]
pub enum Msg {
    /// A key was pressed
    Key(KeyKind),
    /// The host hit an error while running the question
    Error(QuestionError),
    /// Periodic tick with no input
    Tick,
    /// The area the question is drawn in changed size
    Resize { width: u16, height: u16 },
}

/// Instruction returned to the host loop after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Keep running
    None,
    /// Stop the loop, the question is finished
    Quit,
}

/// A question the host loop can run to completion
pub trait Question {
    /// Optional command to run when the question is first shown
    fn init(&mut self) -> Option<Cmd> {
        None
    }

    /// Size the question to the area it is drawn in.
    ///
    /// Called by the host before the first draw and on every resize,
    /// regardless of which part of the question has focus.
    fn set_viewport(&mut self, _width: u16, _height: u16) {}

    /// Apply one message and tell the host whether to keep going
    fn update(&mut self, msg: Msg) -> Cmd;

    /// Full rendering of the question, redrawn after every update
    fn view(&self) -> String;

    /// The committed answer, valid once the loop has quit
    fn choice(&self) -> &str;

    /// Take the error that ended the question, if any
    fn take_error(&mut self) -> Option<QuestionError>;
}
