//! Numbered-menu dispatcher for the socnet session.
//!
//! Input is read as whitespace-separated tokens, so one line may answer
//! several prompts. End of input ends the session like choosing Exit.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::cli::commands;
use crate::graph::SocialGraph;
use crate::types::{NetworkError, NetworkResult, OutputFormat};

/// Highest accepted menu number.
pub const MAX_CHOICE: u32 = 11;

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddPerson = 1,
    AddConnection = 2,
    MutualFriends = 3,
    SuggestFriends = 4,
    Profile = 5,
    ShortestPath = 6,
    RemoveConnection = 7,
    Help = 8,
    Exit = 9,
    RemovePerson = 10,
    Stats = 11,
}

impl MenuChoice {
    /// Map a menu number to its entry.
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Self::AddPerson),
            2 => Some(Self::AddConnection),
            3 => Some(Self::MutualFriends),
            4 => Some(Self::SuggestFriends),
            5 => Some(Self::Profile),
            6 => Some(Self::ShortestPath),
            7 => Some(Self::RemoveConnection),
            8 => Some(Self::Help),
            9 => Some(Self::Exit),
            10 => Some(Self::RemovePerson),
            11 => Some(Self::Stats),
            _ => None,
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AddPerson => "Add Person",
            Self::AddConnection => "Add Connection",
            Self::MutualFriends => "Display Mutual Friends",
            Self::SuggestFriends => "Suggest Friends",
            Self::Profile => "Display Profile",
            Self::ShortestPath => "Find Shortest Path",
            Self::RemoveConnection => "Remove Connection",
            Self::Help => "Help",
            Self::Exit => "Exit",
            Self::RemovePerson => "Remove Person",
            Self::Stats => "Network Stats",
        }
    }

    /// One-line description shown by Help.
    pub fn description(&self) -> &'static str {
        match self {
            Self::AddPerson => "Add one or more people to the network.",
            Self::AddConnection => "Establish a connection between two people.",
            Self::MutualFriends => "Find common friends between two people.",
            Self::SuggestFriends => "Suggest potential friends for a person.",
            Self::Profile => "View a person's profile and their connections.",
            Self::ShortestPath => "Discover the shortest connection path between two people.",
            Self::RemoveConnection => "Remove a connection between two people.",
            Self::Help => "Display this menu.",
            Self::Exit => "Exit the program.",
            Self::RemovePerson => "Remove a person and all of their connections.",
            Self::Stats => "Show counts for the whole network.",
        }
    }

    /// All entries in menu order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=MAX_CHOICE).filter_map(Self::from_number)
    }
}

/// Whitespace tokenizer over a line-oriented reader.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    fn next_token(&mut self) -> NetworkResult<Option<String>> {
        while self.pending.is_empty() {
            // Bytes that are not UTF-8 become U+FFFD instead of failing the read
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            let line = String::from_utf8_lossy(&line);
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Drop whatever is left of the current line.
    fn discard_line(&mut self) {
        self.pending.clear();
    }
}

/// Interactive session state: the graph plus input and output handles.
pub struct Menu<R, W> {
    tokens: Tokens<R>,
    out: W,
    graph: SocialGraph,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a session over the given graph.
    pub fn new(graph: SocialGraph, input: R, out: W, format: OutputFormat) -> Self {
        Self {
            tokens: Tokens::new(input),
            out,
            graph,
            format,
        }
    }

    /// The graph as it currently stands.
    pub fn graph(&self) -> &SocialGraph {
        &self.graph
    }

    /// Consume the session, returning the graph.
    pub fn into_graph(self) -> SocialGraph {
        self.graph
    }

    /// Prompts are suppressed in JSON mode so stdout holds only results.
    fn prompt(&mut self, text: &str) -> NetworkResult<()> {
        if self.format == OutputFormat::Text {
            write!(self.out, "{}", text)?;
            self.out.flush()?;
        }
        Ok(())
    }

    fn ask(&mut self, text: &str) -> NetworkResult<Option<String>> {
        self.prompt(text)?;
        self.tokens.next_token()
    }

    fn ask_pair(&mut self, first: &str, second: &str) -> NetworkResult<Option<(String, String)>> {
        let Some(a) = self.ask(first)? else {
            return Ok(None);
        };
        let Some(b) = self.ask(second)? else {
            return Ok(None);
        };
        Ok(Some((a, b)))
    }

    /// Read a number in `min..=max`, re-prompting on anything else.
    fn ask_number(
        &mut self,
        text: &str,
        retry: &str,
        min: u32,
        max: u32,
    ) -> NetworkResult<Option<u32>> {
        self.prompt(text)?;
        loop {
            let Some(token) = self.tokens.next_token()? else {
                return Ok(None);
            };
            match token.parse::<u32>() {
                Ok(n) if (min..=max).contains(&n) => return Ok(Some(n)),
                _ => {
                    log::debug!("rejected menu input {:?}", token);
                    self.tokens.discard_line();
                    self.prompt(retry)?;
                }
            }
        }
    }

    fn print_menu(&mut self) -> NetworkResult<()> {
        if self.format == OutputFormat::Json {
            return Ok(());
        }
        writeln!(self.out, "\n--- Social Network Menu ---")?;
        for choice in MenuChoice::all() {
            writeln!(self.out, "{}. {}", choice as u32, choice.label())?;
        }
        Ok(())
    }

    fn print_help(&mut self) -> NetworkResult<()> {
        if self.format == OutputFormat::Json {
            let entries: Vec<_> = MenuChoice::all()
                .map(|c| {
                    serde_json::json!({
                        "choice": c as u32,
                        "label": c.label(),
                        "help": c.description(),
                    })
                })
                .collect();
            writeln!(self.out, "{}", serde_json::json!({ "help": entries }))?;
            return Ok(());
        }
        writeln!(self.out, "HELP - MENU INSTRUCTIONS:")?;
        for choice in MenuChoice::all() {
            writeln!(
                self.out,
                "{}. {}: {}",
                choice as u32,
                choice.label(),
                choice.description()
            )?;
        }
        Ok(())
    }

    /// Run until Exit or end of input.
    pub fn run(&mut self) -> NetworkResult<()> {
        loop {
            self.print_menu()?;
            let retry = format!(
                "Invalid choice. Please enter a number between 1 and {}: ",
                MAX_CHOICE
            );
            let prompt = format!("Enter your choice (1-{}): ", MAX_CHOICE);
            let Some(n) = self.ask_number(&prompt, &retry, 1, MAX_CHOICE)? else {
                log::debug!("input closed, ending session");
                return Ok(());
            };
            let Some(choice) = MenuChoice::from_number(n) else {
                continue;
            };

            match self.dispatch(choice) {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(NetworkError::Io(e)) => return Err(NetworkError::Io(e)),
                Err(e) => {
                    log::debug!("{} failed: {}", choice.label(), e);
                    commands::report_error(&e, self.format, &mut self.out)?;
                }
            }
        }
    }

    /// Run one menu entry. `Ok(false)` ends the session.
    fn dispatch(&mut self, choice: MenuChoice) -> NetworkResult<bool> {
        let format = self.format;
        match choice {
            MenuChoice::AddPerson => {
                let Some(count) = self.ask_number(
                    "Enter the number of people to add: ",
                    "Invalid input. Enter a positive integer: ",
                    1,
                    u32::MAX,
                )?
                else {
                    return Ok(false);
                };
                for i in 1..=count {
                    let Some(name) = self.ask(&format!("Enter name of person {}: ", i))? else {
                        return Ok(false);
                    };
                    // One bad name must not abort the rest of the batch
                    let added =
                        commands::cmd_add_person(&mut self.graph, &name, format, &mut self.out);
                    match added {
                        Ok(()) => {}
                        Err(NetworkError::Io(e)) => return Err(NetworkError::Io(e)),
                        Err(e) => commands::report_error(&e, format, &mut self.out)?,
                    }
                }
            }
            MenuChoice::AddConnection => {
                let Some((a, b)) = self.ask_pair(
                    "Enter the first person's name: ",
                    "Enter the second person's name: ",
                )?
                else {
                    return Ok(false);
                };
                commands::cmd_add_connection(&mut self.graph, &a, &b, format, &mut self.out)?;
            }
            MenuChoice::MutualFriends => {
                let Some((a, b)) = self.ask_pair(
                    "Enter the first person's name: ",
                    "Enter the second person's name: ",
                )?
                else {
                    return Ok(false);
                };
                commands::cmd_mutual(&self.graph, &a, &b, format, &mut self.out)?;
            }
            MenuChoice::SuggestFriends => {
                let Some(name) = self.ask("Enter the person's name: ")? else {
                    return Ok(false);
                };
                commands::cmd_suggest(&self.graph, &name, format, &mut self.out)?;
            }
            MenuChoice::Profile => {
                let Some(name) = self.ask("Enter the person's name: ")? else {
                    return Ok(false);
                };
                commands::cmd_profile(&self.graph, &name, format, &mut self.out)?;
            }
            MenuChoice::ShortestPath => {
                let Some((a, b)) = self.ask_pair(
                    "Enter the start person's name: ",
                    "Enter the end person's name: ",
                )?
                else {
                    return Ok(false);
                };
                commands::cmd_path(&self.graph, &a, &b, format, &mut self.out)?;
            }
            MenuChoice::RemoveConnection => {
                let Some((a, b)) = self.ask_pair(
                    "Enter the first person's name: ",
                    "Enter the second person's name: ",
                )?
                else {
                    return Ok(false);
                };
                commands::cmd_remove_connection(&mut self.graph, &a, &b, format, &mut self.out)?;
            }
            MenuChoice::Help => self.print_help()?,
            MenuChoice::Exit => {
                if format == OutputFormat::Text {
                    writeln!(self.out, "Exiting the program.")?;
                }
                return Ok(false);
            }
            MenuChoice::RemovePerson => {
                let Some(name) = self.ask("Enter the person's name: ")? else {
                    return Ok(false);
                };
                commands::cmd_remove_person(&mut self.graph, &name, format, &mut self.out)?;
            }
            MenuChoice::Stats => commands::cmd_stats(&self.graph, format, &mut self.out)?,
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_number_maps_back() {
        for n in 1..=MAX_CHOICE {
            let choice = MenuChoice::from_number(n).unwrap();
            assert_eq!(choice as u32, n);
        }
        assert!(MenuChoice::from_number(0).is_none());
        assert!(MenuChoice::from_number(MAX_CHOICE + 1).is_none());
    }

    #[test]
    fn tokens_survive_invalid_utf8() {
        let mut tokens = Tokens::new(&b"5 \xff\xfe\nBob\n"[..]);
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("5"));
        assert_eq!(
            tokens.next_token().unwrap().as_deref(),
            Some("\u{fffd}\u{fffd}")
        );
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("Bob"));
    }

    #[test]
    fn tokens_span_lines() {
        let mut tokens = Tokens::new("a b\n\n  c\n".as_bytes());
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("a"));
        tokens.discard_line();
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("c"));
        assert_eq!(tokens.next_token().unwrap(), None);
    }
}
