//! `kinship shell` — Interactive login and menu loop over a loaded roster.

use anyhow::Context;
use clap::Args;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use kinship_graph::{load_roster, Session, SocialGraph};

use crate::config::KinshipConfig;

#[derive(Args, Debug)]
pub struct ShellArgs {
    /// Roster file to load (prompted for when neither this nor the config sets one).
    #[arg(short, long)]
    pub roster: Option<PathBuf>,
}

pub fn run(args: &ShellArgs, config: &KinshipConfig) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());

    let path = match config.roster_path(args.roster.as_deref()) {
        Some(path) => path,
        None => match shell.prompt("Enter users file path: ")? {
            Some(path) => PathBuf::from(path),
            None => return Ok(()),
        },
    };
    let mut graph = load_roster(&path)
        .with_context(|| format!("failed to load roster {}", path.display()))?;

    shell.run(&mut graph)
}

/// Menu entries, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    AddFriend,
    RemoveFriend,
    SortedFriends,
    LevelFriends,
    Countries,
    LogOut,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddFriend),
            "2" => Some(Self::RemoveFriend),
            "3" => Some(Self::SortedFriends),
            "4" => Some(Self::LevelFriends),
            "5" => Some(Self::Countries),
            "6" => Some(Self::LogOut),
            _ => None,
        }
    }
}

/// How a menu loop ended.
#[derive(Debug, PartialEq, Eq)]
enum Exit {
    LoggedOut,
    EndOfInput,
}

const MENU: &str = "\
Menu Options:
1. Add Friend
2. Remove Friend
3. Display Friend List (Sorted)
4. Display nth Level Friends
5. Display countries in your network
6. Log Out";

/// Line-oriented driver over any input and output streams.
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` and read one line. Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Repeat login and menu until the input runs out.
    pub fn run(&mut self, graph: &mut SocialGraph) -> anyhow::Result<()> {
        writeln!(self.output, "Welcome to the Social Network!")?;
        loop {
            writeln!(self.output, "\nLogin")?;
            let Some(name) = self.prompt("Username: ")? else {
                return Ok(());
            };
            let Some(secret) = self.prompt("Password: ")? else {
                return Ok(());
            };

            let mut session = match Session::login(graph, &name, &secret) {
                Ok(session) => session,
                Err(_) => {
                    writeln!(self.output, "Authentication failed.")?;
                    continue;
                }
            };
            writeln!(self.output, "Login successful.")?;

            let exit = self.menu(&mut session)?;
            session.logout();
            if exit == Exit::EndOfInput {
                return Ok(());
            }
        }
    }

    fn menu(&mut self, session: &mut Session<'_>) -> anyhow::Result<Exit> {
        loop {
            writeln!(self.output, "\n{}", MENU)?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                return Ok(Exit::EndOfInput);
            };

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::AddFriend) => {
                    let Some(friend) = self.prompt("Enter friend's username: ")? else {
                        return Ok(Exit::EndOfInput);
                    };
                    match session.add_friend(&friend) {
                        Ok(()) => {
                            session.sort_friends()?;
                            let list = render_list(session.friends()?);
                            writeln!(self.output, "Friend added. Updated list: {}", list)?;
                        }
                        Err(e) => writeln!(self.output, "ERROR: {}", e)?,
                    }
                }
                Some(MenuChoice::RemoveFriend) => {
                    let Some(friend) = self.prompt("Enter friend's username: ")? else {
                        return Ok(Exit::EndOfInput);
                    };
                    match session.remove_friend(&friend) {
                        Ok(()) => {
                            session.sort_friends()?;
                            let list = render_list(session.friends()?);
                            writeln!(self.output, "Friend removed. Updated list: {}", list)?;
                        }
                        Err(e) => writeln!(self.output, "ERROR: {}", e)?,
                    }
                }
                Some(MenuChoice::SortedFriends) => {
                    session.sort_friends()?;
                    let list = render_list(session.friends()?);
                    writeln!(self.output, "Sorted friends list: {}", list)?;
                }
                Some(MenuChoice::LevelFriends) => {
                    let Some(raw) = self.prompt("Enter degree (1, 2, etc.): ")? else {
                        return Ok(Exit::EndOfInput);
                    };
                    match raw.parse::<i64>() {
                        Ok(degree) => {
                            let list = render_list(&session.friends_at_level(degree)?);
                            writeln!(self.output, "Friends at level {}: {}", degree, list)?;
                        }
                        Err(_) => writeln!(self.output, "Invalid degree: {}", raw)?,
                    }
                }
                Some(MenuChoice::Countries) => {
                    let counts = render_counts(&session.friend_countries_by_count()?);
                    writeln!(self.output, "Friends by country: {}", counts)?;
                }
                Some(MenuChoice::LogOut) => {
                    writeln!(self.output, "Logged out.")?;
                    return Ok(Exit::LoggedOut);
                }
                None => writeln!(self.output, "Invalid option. Try again.")?,
            }
        }
    }
}

fn render_list(names: &[String]) -> String {
    if names.is_empty() {
        return "(none)".into();
    }
    names.join(", ")
}

fn render_counts(counts: &BTreeMap<String, usize>) -> String {
    if counts.is_empty() {
        return "(none)".into();
    }
    counts
        .iter()
        .map(|(country, n)| format!("{}: {}", country, n))
        .collect::<Vec<_>>()
        .join(", ")
}
