//! Command-line parsing.
//!
//! A line is split on whitespace: the first token names the command
//! (case-insensitive), the rest are its arguments. Each command checks its
//! own arity.

use crate::error::{CommandError, CommandResult};

/// A parsed command with owned arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, phone: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, date: String },
    ShowBirthday { name: String },
    Birthdays,
    Exit,
    Unknown(String),
}

impl Command {
    /// Parse one input line.
    ///
    /// Returns `None` for a blank line. Known commands with the wrong number
    /// of arguments yield `CommandError::Arguments`.
    pub fn parse(line: &str) -> Option<CommandResult<Command>> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next()?.to_lowercase();
        let args: Vec<&str> = tokens.collect();
        Some(Self::from_parts(&keyword, &args))
    }

    fn from_parts(keyword: &str, args: &[&str]) -> CommandResult<Command> {
        let command = match keyword {
            "hello" => {
                expect_args(args, 0, "hello")?;
                Command::Hello
            }
            "add" => {
                let [name, phone] = two_args(args, "add <name> <phone>")?;
                Command::Add { name, phone }
            }
            "change" => {
                let [name, phone] = two_args(args, "change <name> <phone>")?;
                Command::Change { name, phone }
            }
            "phone" => Command::Phone {
                name: one_arg(args, "phone <name>")?,
            },
            "all" => {
                expect_args(args, 0, "all")?;
                Command::All
            }
            "add-birthday" => {
                let [name, date] = two_args(args, "add-birthday <name> <DD.MM.YYYY>")?;
                Command::AddBirthday { name, date }
            }
            "show-birthday" => Command::ShowBirthday {
                name: one_arg(args, "show-birthday <name>")?,
            },
            "birthdays" => {
                expect_args(args, 0, "birthdays")?;
                Command::Birthdays
            }
            "close" | "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        };
        Ok(command)
    }
}

fn expect_args(args: &[&str], count: usize, usage: &'static str) -> CommandResult<()> {
    if args.len() == count {
        Ok(())
    } else {
        Err(CommandError::Arguments { usage })
    }
}

fn one_arg(args: &[&str], usage: &'static str) -> CommandResult<String> {
    match args {
        [name] => Ok((*name).to_string()),
        _ => Err(CommandError::Arguments { usage }),
    }
}

fn two_args(args: &[&str], usage: &'static str) -> CommandResult<[String; 2]> {
    match args {
        [first, second] => Ok([(*first).to_string(), (*second).to_string()]),
        _ => Err(CommandError::Arguments { usage }),
    }
}
