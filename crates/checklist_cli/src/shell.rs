//! Line-oriented shell driving the list controller.
//!
//! Each input line is one user action; the screen is redrawn after every
//! action that can change it.

use checklist_core::{
    render_screen, AddOutcome, ItemStore, ListController, Mode, PromptRequest, PromptResponse,
    TapOutcome, TitlePrompt,
};
use log::warn;
use std::io::{self, BufRead, Write};

const CANCEL_INPUT: &str = ".";

const HELP_TEXT: &str = "\
commands:
  add        open the add dialog
  edit       toggle edit mode (tap renames)
  delete     toggle delete mode (tap deletes)
  <number>   tap that row
  list       redraw the list
  help       show this text
  quit       leave
in a dialog, a single `.` cancels; in the edit dialog an empty line keeps the
current title and saves nothing";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Add,
    Edit,
    Delete,
    Tap(usize),
    List,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" => Command::Empty,
        "add" | "a" | "+" => Command::Add,
        "edit" | "e" => Command::Edit,
        "delete" | "d" => Command::Delete,
        "list" | "ls" | "l" => Command::List,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => match other.parse::<usize>() {
            Ok(row) if row >= 1 => Command::Tap(row - 1),
            _ => Command::Unknown(trimmed.to_string()),
        },
    }
}

/// Terminal side of the screen: reads lines, answers dialogs, prints.
struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Next input line without its terminator; `None` at end of input.
    ///
    /// Bytes that are not UTF-8 become replacement characters, so a garbled
    /// line reads as an unknown command instead of ending the session.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf).into_owned();
        let stripped = line.strip_suffix('\n').unwrap_or(&line);
        let stripped = stripped.strip_suffix('\r').unwrap_or(stripped);
        Ok(Some(stripped.to_string()))
    }

    fn ask(&mut self, request: &PromptRequest) -> io::Result<PromptResponse> {
        writeln!(self.output, "-- {} --", request.heading)?;
        match request.prefill.as_deref() {
            Some(current) => writeln!(self.output, "current: {current}")?,
            None => writeln!(self.output, "{}", request.placeholder)?,
        }
        write!(self.output, "{}> ", request.confirm_label)?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(PromptResponse::Cancelled);
        };
        if line == CANCEL_INPUT {
            return Ok(PromptResponse::Cancelled);
        }
        match (&request.prefill, line.is_empty()) {
            (Some(current), true) => Ok(PromptResponse::Confirmed(current.clone())),
            _ => Ok(PromptResponse::Confirmed(line)),
        }
    }
}

impl<R: BufRead, W: Write> TitlePrompt for Terminal<R, W> {
    fn request(&mut self, request: &PromptRequest) -> PromptResponse {
        match self.ask(request) {
            Ok(response) => response,
            Err(err) => {
                warn!(
                    "event=prompt_read module=cli status=error dialog={} error={}",
                    request.heading, err
                );
                PromptResponse::Cancelled
            }
        }
    }
}

/// Interactive loop over one controller.
pub struct Shell<S: ItemStore, R, W> {
    controller: ListController<S>,
    terminal: Terminal<R, W>,
}

impl<S: ItemStore, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(controller: ListController<S>, input: R, output: W) -> Self {
        Self {
            controller,
            terminal: Terminal { input, output },
        }
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        self.redraw()?;
        loop {
            write!(self.terminal.output, "> ")?;
            self.terminal.output.flush()?;

            let Some(line) = self.terminal.read_line()? else {
                return Ok(());
            };

            match parse_command(&line) {
                Command::Quit => return Ok(()),
                Command::Empty => {}
                Command::Help => writeln!(self.terminal.output, "{HELP_TEXT}")?,
                Command::List => self.redraw()?,
                Command::Unknown(input) => writeln!(
                    self.terminal.output,
                    "unknown command `{input}`; type `help`"
                )?,
                Command::Add => self.add()?,
                Command::Edit => self.press_mode(Mode::Edit)?,
                Command::Delete => self.press_mode(Mode::Delete)?,
                Command::Tap(index) => self.tap(index)?,
            }
        }
    }

    fn add(&mut self) -> io::Result<()> {
        match self.controller.add(&mut self.terminal) {
            AddOutcome::Disabled => self.notice("add is disabled while a mode is active"),
            AddOutcome::Discarded | AddOutcome::Added(_) => self.redraw(),
        }
    }

    fn press_mode(&mut self, target: Mode) -> io::Result<()> {
        let controls = self.controller.controls();
        match target {
            Mode::Edit if !controls.edit_enabled => {
                self.notice("edit is disabled while delete mode is on")
            }
            Mode::Delete if !controls.delete_enabled => {
                self.notice("delete is disabled while edit mode is on")
            }
            Mode::Edit => {
                self.controller.toggle_edit_mode();
                self.redraw()
            }
            Mode::Delete => {
                self.controller.toggle_delete_mode();
                self.redraw()
            }
            Mode::Normal => Ok(()),
        }
    }

    fn tap(&mut self, index: usize) -> io::Result<()> {
        match self.controller.tap_row(index, &mut self.terminal) {
            TapOutcome::NoSuchRow => self.notice("no such row"),
            TapOutcome::Reverted => {
                self.notice("could not save the change; kept the previous value")?;
                self.redraw()
            }
            TapOutcome::Toggled { .. }
            | TapOutcome::Edited
            | TapOutcome::Deleted(_)
            | TapOutcome::Discarded
            | TapOutcome::Unchanged => self.redraw(),
        }
    }

    fn notice(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.terminal.output, "! {message}")
    }

    fn redraw(&mut self) -> io::Result<()> {
        let screen = render_screen(
            self.controller.items(),
            self.controller.controls(),
            self.controller.mode(),
        );
        write!(self.terminal.output, "{screen}")
    }

    #[cfg(test)]
    fn controller(&self) -> &ListController<S> {
        &self.controller
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command, Shell};
    use checklist_core::db::open_db_in_memory;
    use checklist_core::{ItemStore, ListController, SqliteItemStore};
    use std::io::Cursor;

    #[test]
    fn parse_command_maps_rows_to_zero_based_indices() {
        assert_eq!(parse_command(" 1 "), Command::Tap(0));
        assert_eq!(parse_command("12"), Command::Tap(11));
        assert_eq!(parse_command("0"), Command::Unknown("0".to_string()));
        assert_eq!(parse_command("DELETE"), Command::Delete);
        assert_eq!(parse_command(""), Command::Empty);
    }

    #[test]
    fn scripted_session_matches_expected_list() {
        let conn = open_db_in_memory().unwrap();
        let store = SqliteItemStore::new(&conn);
        let input = "add\nBuy milk\nadd\nCall mom\n1\ndelete\n2\nquit\n";
        let mut output = Vec::new();

        {
            let controller = ListController::load(&store);
            let mut shell = Shell::new(controller, Cursor::new(input), &mut output);
            shell.run().unwrap();

            let items = shell.controller().items();
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].title, "Buy milk");
            assert!(items[0].is_checked);
        }

        let persisted = store.fetch_all().unwrap();
        assert_eq!(persisted.len(), 1);
        assert!(persisted[0].is_checked);

        let screen = String::from_utf8(output).unwrap();
        assert!(screen.contains("  1. [x] Buy milk"));
    }

    #[test]
    fn disabled_controls_are_refused() {
        let conn = open_db_in_memory().unwrap();
        let store = SqliteItemStore::new(&conn);
        let mut output = Vec::new();

        {
            let controller = ListController::load(&store);
            let mut shell = Shell::new(controller, Cursor::new("edit\ndelete\nadd\n"), &mut output);
            shell.run().unwrap();
            assert!(shell.controller().items().is_empty());
        }

        let screen = String::from_utf8(output).unwrap();
        assert!(screen.contains("delete is disabled while edit mode is on"));
        assert!(screen.contains("add is disabled while a mode is active"));
    }

    #[test]
    fn garbled_command_line_does_not_end_session() {
        let conn = open_db_in_memory().unwrap();
        let store = SqliteItemStore::new(&conn);
        let mut input = b"add\nBuy milk\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b"add\nCall mom\nquit\n");
        let mut output = Vec::new();

        {
            let controller = ListController::load(&store);
            let mut shell = Shell::new(controller, Cursor::new(input), &mut output);
            shell.run().unwrap();

            let titles: Vec<&str> = shell
                .controller()
                .items()
                .iter()
                .map(|item| item.title.as_str())
                .collect();
            assert_eq!(titles, vec!["Buy milk", "Call mom"]);
        }

        let screen = String::from_utf8(output).unwrap();
        assert!(screen.contains("unknown command"));
    }

    #[test]
    fn garbled_dialog_line_becomes_replacement_text() {
        let conn = open_db_in_memory().unwrap();
        let store = SqliteItemStore::new(&conn);
        let mut input = b"add\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b"list\nquit\n");

        let controller = ListController::load(&store);
        let mut shell = Shell::new(controller, Cursor::new(input), Vec::new());
        shell.run().unwrap();

        assert_eq!(shell.controller().items().len(), 1);
        assert_eq!(shell.controller().items()[0].title, "\u{fffd}\u{fffd}");
    }

    #[test]
    fn edit_dialog_keeps_title_on_empty_line_and_cancels_on_dot() {
        let conn = open_db_in_memory().unwrap();
        let store = SqliteItemStore::new(&conn);
        let input = "add\nWater plants\nedit\n1\n\n1\n.\n1\nWater the plants\n";

        let controller = ListController::load(&store);
        let mut shell = Shell::new(controller, Cursor::new(input), Vec::new());
        shell.run().unwrap();

        assert_eq!(shell.controller().items()[0].title, "Water the plants");
    }
}
