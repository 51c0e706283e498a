//! Line commands understood by the player.
//!
//! Each command stands in for a DOM event the browser front end would
//! deliver: a chevron click, a key press, a drag, a native scroll.

use std::str::FromStr;

use vecto_core::{BrowseError, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Left,
    Right,
    Home,
    End,
    /// Raw key name as a browser reports it (`ArrowLeft`, `Home`, ...)
    Key(String),
    Goto(isize),
    Page(usize),
    Click(String),
    Hover(Option<String>),
    /// Pointer drag from one page x coordinate to another
    Drag { from: f32, to: f32 },
    /// Touch swipe, classified as tap or drag on release
    Swipe { from: f32, to: f32 },
    /// Native scroll to an absolute track offset
    Scroll(f32),
    Play,
    Pause,
    Mute,
    Auto(bool),
    Menu(String),
    Reset,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  list                 show menu, featured video and the trending row
  left | right         step the row (wraps at either end)
  home | end           jump to the first or last window
  key <Name>           press a key (ArrowLeft, ArrowRight, Home, End)
  goto <i>             scroll to index i (out-of-range values wrap)
  page <p>             jump to page indicator p
  click <id>           select a trending item
  hover [id]           hover an item, or clear the hover
  drag <from> <to>     pointer drag between page x coordinates
  swipe <from> <to>    touch drag between page x coordinates
  scroll <px>          native scroll to an absolute offset
  play | pause | mute  featured video controls
  auto on|off          toggle auto-advance
  menu <id>            activate a menu item
  reset                forget the view history
  quit";

impl FromStr for Command {
    type Err = BrowseError;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(invalid("empty command"));
        };
        let args: Vec<&str> = words.collect();

        let command = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("list" | "ls", []) => Self::List,
            ("left", []) => Self::Left,
            ("right", []) => Self::Right,
            ("home", []) => Self::Home,
            ("end", []) => Self::End,
            ("key", [name]) => Self::Key((*name).to_string()),
            ("goto", [index]) => Self::Goto(number(index)?),
            ("page", [page]) => Self::Page(number(page)?),
            ("click", [id]) => Self::Click((*id).to_string()),
            ("hover", []) => Self::Hover(None),
            ("hover", [id]) => Self::Hover(Some((*id).to_string())),
            ("drag", [from, to]) => Self::Drag {
                from: coordinate(from)?,
                to: coordinate(to)?,
            },
            ("swipe", [from, to]) => Self::Swipe {
                from: coordinate(from)?,
                to: coordinate(to)?,
            },
            ("scroll", [px]) => Self::Scroll(coordinate(px)?),
            ("play", []) => Self::Play,
            ("pause", []) => Self::Pause,
            ("mute", []) => Self::Mute,
            ("auto", ["on"]) => Self::Auto(true),
            ("auto", ["off"]) => Self::Auto(false),
            ("menu", [id]) => Self::Menu((*id).to_string()),
            ("reset", []) => Self::Reset,
            ("help" | "?", []) => Self::Help,
            ("quit" | "exit" | "q", []) => Self::Quit,
            _ => return Err(invalid(format!("unrecognised command '{}'", line.trim()))),
        };
        Ok(command)
    }
}

fn number<T: FromStr>(raw: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| invalid(format!("'{raw}' is not a valid number")))
}

fn coordinate(raw: &str) -> Result<f32> {
    let value: f32 = number(raw)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid(format!("'{raw}' is not a finite offset")))
    }
}

fn invalid(message: impl Into<String>) -> BrowseError {
    BrowseError::InvalidCommand(message.into())
}
