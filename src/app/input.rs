use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::app::Message;

/// What one round of prompting produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Command {
    Run(Message),
    Rejected(&'static str),
    /// Input ended.
    Closed,
}

enum Interrupt {
    Closed,
    Rejected(&'static str),
    Io(io::Error),
}

impl From<io::Error> for Interrupt {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Reads menu choices and their arguments line by line.
pub(super) struct Prompter<R> {
    input: R,
    buf: Vec<u8>,
}

impl<R: BufRead> Prompter<R> {
    pub(super) const fn new(input: R) -> Self {
        Self {
            input,
            buf: Vec::new(),
        }
    }

    /// Prompt for a menu choice and whatever arguments it needs.
    pub(super) fn read_command(&mut self, out: &mut impl Write) -> io::Result<Command> {
        match self.read_message(out) {
            Ok(msg) => Ok(Command::Run(msg)),
            Err(Interrupt::Closed) => Ok(Command::Closed),
            Err(Interrupt::Rejected(reason)) => Ok(Command::Rejected(reason)),
            Err(Interrupt::Io(err)) => Err(err),
        }
    }

    fn read_message(&mut self, out: &mut impl Write) -> Result<Message, Interrupt> {
        let choice = self.line(out, "Enter your choice: ")?;
        let msg = match choice.trim().parse::<u32>() {
            Ok(1) => Message::Insert(self.text(out, "Enter text to insert: ")?),
            Ok(2) => Message::Delete(self.position(out, "Enter line number to delete: ")?),
            Ok(3) => Message::Copy(self.position(out, "Enter line number to copy: ")?),
            Ok(4) => Message::Paste,
            Ok(5) => Message::Save(PathBuf::from(
                self.text(out, "Enter the filename to save: ")?,
            )),
            Ok(6) => Message::Open(PathBuf::from(
                self.text(out, "Enter the filename to open: ")?,
            )),
            Ok(7) => Message::WordCount,
            Ok(8) => Message::Display,
            Ok(9) => {
                let text = self.text(out, "Enter text to insert: ")?;
                let position = self.position(out, "Enter position to insert: ")?;
                Message::InsertAt(text, position)
            }
            Ok(10) => {
                let source = self.position(out, "Enter source position: ")?;
                let target = self.position(out, "Enter target position: ")?;
                Message::Move { source, target }
            }
            Ok(11) => Message::Undo,
            Ok(12) => Message::ClearUndo,
            Ok(13) => Message::Reverse,
            Ok(14) => Message::Exit,
            _ => return Err(Interrupt::Rejected("Invalid choice.")),
        };
        Ok(msg)
    }

    /// Read one raw line without its terminator.
    ///
    /// A line that is not UTF-8 is consumed whole and rejected, so the
    /// next prompt starts on fresh input.
    fn line(&mut self, out: &mut impl Write, label: &str) -> Result<String, Interrupt> {
        write!(out, "{label}")?;
        out.flush()?;
        self.buf.clear();
        if self.input.read_until(b'\n', &mut self.buf)? == 0 {
            return Err(Interrupt::Closed);
        }
        let raw = self.buf.strip_suffix(b"\n").unwrap_or(&self.buf);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        std::str::from_utf8(raw)
            .map(ToOwned::to_owned)
            .map_err(|_| Interrupt::Rejected("Invalid input."))
    }

    /// Read free text, skipping blank lines and leading whitespace.
    fn text(&mut self, out: &mut impl Write, label: &str) -> Result<String, Interrupt> {
        loop {
            let line = self.line(out, label)?;
            let text = line.trim_start();
            if !text.is_empty() {
                return Ok(text.to_string());
            }
        }
    }

    /// Read a 1-based position. Negative numbers map to 0, which every
    /// document operation rejects as an invalid position.
    fn position(&mut self, out: &mut impl Write, label: &str) -> Result<usize, Interrupt> {
        let line = self.line(out, label)?;
        let value = line
            .trim()
            .parse::<i64>()
            .map_err(|_| Interrupt::Rejected("Invalid number."))?;
        Ok(usize::try_from(value).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(script: &str) -> Command {
        let mut prompter = Prompter::new(script.as_bytes());
        let mut out = Vec::new();
        prompter.read_command(&mut out).unwrap()
    }

    #[test]
    fn test_insert_reads_text_line() {
        assert_eq!(
            read("1\nhello world\n"),
            Command::Run(Message::Insert("hello world".to_string()))
        );
    }

    #[test]
    fn test_text_skips_blank_lines_and_leading_spaces() {
        assert_eq!(
            read("1\n\n   \n  indented text \n"),
            Command::Run(Message::Insert("indented text ".to_string()))
        );
    }

    #[test]
    fn test_crlf_input_is_stripped() {
        assert_eq!(read("2\r\n3\r\n"), Command::Run(Message::Delete(3)));
    }

    #[test]
    fn test_move_reads_both_positions() {
        assert_eq!(
            read("10\n1\n3\n"),
            Command::Run(Message::Move {
                source: 1,
                target: 3
            })
        );
    }

    #[test]
    fn test_insert_at_reads_text_then_position() {
        assert_eq!(
            read("9\nx\n2\n"),
            Command::Run(Message::InsertAt("x".to_string(), 2))
        );
    }

    #[test]
    fn test_negative_position_maps_to_zero() {
        assert_eq!(read("3\n-4\n"), Command::Run(Message::Copy(0)));
    }

    #[test]
    fn test_non_numeric_position_is_rejected() {
        assert_eq!(read("2\nabc\n"), Command::Rejected("Invalid number."));
    }

    #[test]
    fn test_unknown_choice_is_rejected() {
        assert_eq!(read("15\n"), Command::Rejected("Invalid choice."));
        assert_eq!(read("zero\n"), Command::Rejected("Invalid choice."));
    }

    #[test]
    fn test_non_utf8_text_is_rejected() {
        let mut prompter = Prompter::new(&b"1\ncaf\xe9\n1\nok\n"[..]);
        let mut out = Vec::new();
        assert_eq!(
            prompter.read_command(&mut out).unwrap(),
            Command::Rejected("Invalid input.")
        );
        assert_eq!(
            prompter.read_command(&mut out).unwrap(),
            Command::Run(Message::Insert("ok".to_string()))
        );
    }

    #[test]
    fn test_end_of_input_closes() {
        assert_eq!(read(""), Command::Closed);
        assert_eq!(read("1\n"), Command::Closed);
    }

    #[test]
    fn test_prompts_are_written_to_output() {
        let mut prompter = Prompter::new("6\nnotes.txt\n".as_bytes());
        let mut out = Vec::new();
        let cmd = prompter.read_command(&mut out).unwrap();
        assert_eq!(cmd, Command::Run(Message::Open(PathBuf::from("notes.txt"))));
        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown, "Enter your choice: Enter the filename to open: ");
    }
}
