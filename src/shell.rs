//! Interactive shell support
//!
//! The binary owns the read loop; this module turns one input line into the
//! argument vector for a fresh command-line parse and completes words from
//! the command tree.

use std::path::PathBuf;

use rustyline::completion::Completer;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::common::Result;

/// Prompt shown before each line
pub const PROMPT: &str = "\x1b[31m»\x1b[0m ";

/// Words that leave the shell
pub const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

/// File name of the shell history, kept in the temp directory
pub const HISTORY_FILE: &str = "region-dist.history";

pub fn history_path() -> PathBuf {
    std::env::temp_dir().join(HISTORY_FILE)
}

/// What to do with one line of shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Empty,
    Exit,
    Command(Vec<String>),
}

/// Split `line` with POSIX shell quoting rules and classify it.
pub fn parse_line(line: &str) -> Result<Line> {
    let words = shell_words::split(line)?;
    Ok(match words.first().map(String::as_str) {
        None => Line::Empty,
        Some(word) if EXIT_WORDS.contains(&word) => Line::Exit,
        Some(_) => Line::Command(words),
    })
}

/// Subcommands and long flags of a command, recursively
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandTree {
    pub name: String,
    pub subcommands: Vec<CommandTree>,
    pub flags: Vec<String>,
}

impl CommandTree {
    /// Build the tree from a clap definition. `help` and hidden arguments
    /// are left out; the root also offers the exit words.
    pub fn from_command(cmd: &clap::Command) -> Self {
        let mut tree = Self::walk(cmd);
        tree.subcommands.extend(EXIT_WORDS.iter().map(|word| CommandTree {
            name: word.to_string(),
            ..Default::default()
        }));
        tree
    }

    fn walk(cmd: &clap::Command) -> Self {
        CommandTree {
            name: cmd.get_name().to_string(),
            subcommands: cmd
                .get_subcommands()
                .filter(|sub| sub.get_name() != "help" && !sub.is_hide_set())
                .map(Self::walk)
                .collect(),
            flags: cmd
                .get_arguments()
                .filter(|arg| !arg.is_hide_set())
                .filter_map(|arg| arg.get_long())
                .filter(|long| !matches!(*long, "help" | "version"))
                .map(|long| format!("--{}", long))
                .collect(),
        }
    }

    /// Candidates for the word under the cursor at the end of `line`,
    /// with the byte offset that word starts at.
    ///
    /// Completed words descend into matching subcommands; anything else
    /// (flags, their values) keeps the current level.
    pub fn complete(&self, line: &str) -> (usize, Vec<String>) {
        let start = line
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(idx, c)| idx + c.len_utf8());
        let (done, partial) = line.split_at(start);

        let mut node = self;
        for word in done.split_whitespace() {
            if let Some(sub) = node.subcommands.iter().find(|sub| sub.name == word) {
                node = sub;
            }
        }

        let candidates = node
            .subcommands
            .iter()
            .map(|sub| &sub.name)
            .chain(&node.flags)
            .filter(|name| name.starts_with(partial))
            .cloned()
            .collect();
        (start, candidates)
    }
}

/// Line editor helper: completion from the command tree, nothing else
pub struct ShellHelper {
    tree: CommandTree,
}

impl ShellHelper {
    pub fn new(tree: CommandTree) -> Self {
        Self { tree }
    }
}

impl Completer for ShellHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        Ok(self.tree.complete(&line[..pos]))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Highlighter for ShellHelper {}

impl Validator for ShellHelper {}

impl Helper for ShellHelper {}
