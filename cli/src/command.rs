use std::str::FromStr;

use anyhow::{Context, anyhow};
use memora_core::{BoardSize, Position};

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Flip(Position),
    New,
    Size(BoardSize),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(Self::Help);
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "flip" | "f" => {
                let position = words.next().context("flip needs a card position")?;
                Self::Flip(position.parse().context("card position must be a number")?)
            }
            "new" | "n" => Self::New,
            "size" | "s" => {
                let size = words
                    .next()
                    .context("size needs one of easy, medium, hard")?;
                Self::Size(size.parse()?)
            }
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other => match other.parse() {
                Ok(position) => Self::Flip(position),
                Err(_) => return Err(anyhow!("Unknown command {other:?}, type `help`")),
            },
        };

        if words.next().is_some() {
            return Err(anyhow!("Too many arguments"));
        }
        Ok(command)
    }
}
