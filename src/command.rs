use crate::client::Action;
use common::{CardIndex, CardIndexError, LandmarkId, LandmarkIdError, PlayerNum, PlayerNumError};
use std::str::FromStr;
use thiserror::Error;

pub const HELP: &str = "\
commands:
  start               start a new game
  test                start a game where everyone has 50 coins
  roll | roll2        roll one or two dice
  confirm             keep the current roll
  steal <1-3>         steal from a player
  buy <0-13>          buy a card from the bank
  landmark <id>       build train, shopping, amusement or radio
  end                 end your turn
  npc                 let the computer take its move
  show                redraw the table
  cards               list the card catalog
  help                this text
  quit                leave";

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("Unknown command {0:?}, type help for a list")]
    Unknown(String),
    #[error("{0} needs an argument")]
    MissingArgument(&'static str),
    #[error("{0} takes no argument")]
    UnexpectedArgument(String),
    #[error(transparent)]
    Card(#[from] CardIndexError),
    #[error(transparent)]
    Landmark(#[from] LandmarkIdError),
    #[error(transparent)]
    Player(#[from] PlayerNumError),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Play(Action),
    Show,
    Cards,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = match words.next() {
            Some(name) => name.to_ascii_lowercase(),
            None => return Ok(Command::Help),
        };
        let arg = words.next();
        if let Some(extra) = words.next() {
            return Err(CommandError::UnexpectedArgument(extra.to_string()));
        }

        let command = match name.as_str() {
            "steal" => {
                let player: PlayerNum = arg.ok_or(CommandError::MissingArgument("steal"))?.parse()?;
                return Ok(Command::Play(Action::Steal(player)));
            }
            "buy" => {
                let idx: CardIndex = arg.ok_or(CommandError::MissingArgument("buy"))?.parse()?;
                return Ok(Command::Play(Action::PurchaseCard(idx)));
            }
            "landmark" => {
                let id: LandmarkId = arg
                    .ok_or(CommandError::MissingArgument("landmark"))?
                    .parse()?;
                return Ok(Command::Play(Action::PurchaseLandmark(id)));
            }
            "start" => Command::Play(Action::Start),
            "test" => Command::Play(Action::Test),
            "roll" => Command::Play(Action::RollSingle),
            "roll2" => Command::Play(Action::RollDouble),
            "confirm" => Command::Play(Action::Confirm),
            "end" => Command::Play(Action::EndTurn),
            "npc" => Command::Play(Action::NpcMove),
            "show" => Command::Show,
            "cards" => Command::Cards,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(name)),
        };
        match arg {
            Some(arg) => Err(CommandError::UnexpectedArgument(arg.to_string())),
            None => Ok(command),
        }
    }
}
