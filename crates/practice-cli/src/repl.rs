//! Line-oriented front end for the practice log.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tokio::sync::mpsc;

use practice_application::{list_items, summary_line, CelebrationTimer, Effect, Intent, PracticeLog};
use practice_core::DraftField;

use crate::command::{self, Command, COMMANDS};
use crate::download::save_document;

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|cmd| cmd.to_string()).collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Outcome of prompting for one field.
enum Prompted {
    Value(String),
    Cancelled,
}

pub struct Repl {
    editor: Editor<CliHelper, DefaultHistory>,
    log: PracticeLog,
    out_dir: PathBuf,
    dismiss_tx: mpsc::UnboundedSender<Intent>,
    dismiss_rx: mpsc::UnboundedReceiver<Intent>,
    // Replacing the timer drops (and so cancels) the previous one.
    timer: Option<CelebrationTimer>,
}

impl Repl {
    pub fn new(log: PracticeLog, out_dir: PathBuf) -> Result<Self> {
        let mut editor = Editor::<CliHelper, DefaultHistory>::new()?;
        editor.set_helper(Some(CliHelper::new()));
        let (dismiss_tx, dismiss_rx) = mpsc::unbounded_channel();

        Ok(Self {
            editor,
            log,
            out_dir,
            dismiss_tx,
            dismiss_rx,
            timer: None,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        println!("{}", "📘 Weekly Practice Log".bright_blue().bold());
        println!("{}", "Type /log to record a session, /help for commands.".dimmed());

        loop {
            self.drain_dismissals()?;

            match self.editor.readline("practice> ") {
                Ok(line) => {
                    let _ = self.editor.add_history_entry(line.as_str());
                    match command::parse(&line) {
                        Ok(Command::Quit) => break,
                        Ok(command) => self.handle(command)?,
                        Err(message) => println!("{}", message.yellow()),
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            }
        }

        Ok(())
    }

    fn handle(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Log => self.log_session()?,
            Command::List => self.print_list(),
            Command::Remove(id) => {
                if let Effect::Removed { removed, .. } = self.log.dispatch(Intent::Remove(id))? {
                    if removed {
                        println!("{}", format!("Removed session {id}").green());
                    } else {
                        println!("{}", format!("No session with id {id}").yellow());
                    }
                }
            }
            Command::Export => {
                let today = Local::now().date_naive();
                if let Effect::Exported(document) =
                    self.log.dispatch(Intent::Export { as_of: today })?
                {
                    let path = save_document(&document, &self.out_dir)?;
                    println!(
                        "{}",
                        format!("Saved {} ({})", path.display(), document.mime_type).green()
                    );
                }
            }
            Command::Help => print_help(),
            Command::Empty | Command::Quit => {}
        }
        Ok(())
    }

    fn log_session(&mut self) -> Result<()> {
        if !self.fill_draft()? {
            println!("{}", "Cancelled, draft kept.".dimmed());
            return Ok(());
        }

        let today = Local::now().date_naive();
        match self.log.dispatch(Intent::Submit { today })? {
            Effect::Added {
                session,
                celebration,
                dismiss_after,
            } => {
                println!(
                    "{}",
                    format!("Logged #{}: {} ({} hours)", session.id, session.activity, session.duration)
                        .green()
                );
                if let Some(celebration) = celebration {
                    println!("\n  🎉 {}\n", celebration.message.bright_magenta().bold());
                    self.timer = Some(CelebrationTimer::schedule(
                        celebration.seq,
                        dismiss_after,
                        self.dismiss_tx.clone(),
                    ));
                }
            }
            Effect::Rejected(reason) => {
                println!("{}", format!("Not logged: {reason}. Run /log again to fix it.").red());
            }
            _ => {}
        }
        Ok(())
    }

    /// Walks the user through each draft field, pre-filled with its current value.
    ///
    /// Returns `false` when the user cancels; edits made so far stay in the draft.
    fn fill_draft(&mut self) -> Result<bool> {
        let current_date = self.log.state().draft.date.format("%Y-%m-%d").to_string();
        let Prompted::Value(raw_date) = self.prompt("Date (YYYY-MM-DD): ", &current_date)? else {
            return Ok(false);
        };
        match NaiveDate::parse_from_str(raw_date.trim(), "%Y-%m-%d") {
            Ok(date) => {
                self.log.dispatch(Intent::SetDraftDate(date))?;
            }
            Err(_) => println!(
                "{}",
                format!("'{}' is not a date, keeping {current_date}", raw_date.trim()).yellow()
            ),
        }

        let fields = [
            (DraftField::Duration, "Duration (hours): "),
            (DraftField::Activity, "Activity: "),
            (DraftField::Focus, "Focus area (optional): "),
        ];
        for (field, label) in fields {
            let initial = self.log.state().draft.field(field).to_string();
            let Prompted::Value(value) = self.prompt(label, &initial)? else {
                return Ok(false);
            };
            self.log.dispatch(Intent::EditDraft { field, value })?;
        }

        println!("{}", "Notes (optional, empty line to finish):".dimmed());
        let mut lines = Vec::new();
        loop {
            let Prompted::Value(line) = self.prompt("  | ", "")? else {
                return Ok(false);
            };
            if line.is_empty() {
                break;
            }
            lines.push(line);
        }
        self.log.dispatch(Intent::EditDraft {
            field: DraftField::Notes,
            value: lines.join("\n"),
        })?;

        Ok(true)
    }

    fn prompt(&mut self, label: &str, initial: &str) -> Result<Prompted> {
        match self.editor.readline_with_initial(label, (initial, "")) {
            Ok(value) => Ok(Prompted::Value(value)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(Prompted::Cancelled),
            Err(err) => Err(err.into()),
        }
    }

    fn print_list(&self) {
        let count = self.log.session_count();
        if count == 0 {
            println!("{}", "No sessions logged yet.".dimmed());
            return;
        }

        println!(
            "{}",
            summary_line(count, self.log.total_duration()).bright_blue().bold()
        );
        for item in list_items(self.log.sessions()) {
            println!(
                "  [{}] {} • {}  {}",
                item.id.to_string().dimmed(),
                item.date_label,
                item.duration_label,
                item.activity.bold()
            );
            if let Some(focus) = item.focus_line {
                println!("        {}", focus.bright_cyan());
            }
            if let Some(notes) = item.notes {
                for line in notes.lines() {
                    println!("        {}", line.dimmed());
                }
            }
        }
    }

    /// Applies dismissals sent by the celebration timer since the last prompt.
    fn drain_dismissals(&mut self) -> Result<()> {
        while let Ok(intent) = self.dismiss_rx.try_recv() {
            if let Effect::CelebrationDismissed = self.log.dispatch(intent)? {
                self.timer = None;
            }
        }
        Ok(())
    }
}

fn print_help() {
    println!("{}", "Commands:".bold());
    println!("  /log            record a practice session");
    println!("  /list           show logged sessions and totals");
    println!("  /remove <id>    delete a session");
    println!("  /export         save this week's report for a spreadsheet");
    println!("  /quit           leave (sessions are not kept)");
}
