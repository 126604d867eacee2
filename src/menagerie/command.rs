//! Line parser for the menagerie command stream
//!
//! One line per command, split on spaces. The first token selects the
//! handler; any unrecognized first token is the implicit time-advance
//! command, so the dispatcher fails open. A recognized keyword whose
//! arguments are missing or malformed yields a [`ParseError`] and the
//! engine skips the line without output.

use thiserror::Error;

use super::animal::Species;
use super::habitat::ContainerKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("expected a number for {what}, got '{token}'")]
    InvalidNumber { what: &'static str, token: String },

    #[error("unknown species token '{0}'")]
    UnknownSpecies(String),

    #[error("unknown container '{0}'")]
    UnknownContainer(String),
}

/// Addressing form of a TALK command: Freedom takes no species token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TalkTarget {
    Freedom { position: usize },
    Pen {
        container: ContainerKind,
        species: Species,
        position: usize,
    },
}

/// A fully parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create {
        species: Species,
        name: String,
        days_lived: i32,
        container: ContainerKind,
    },
    ApplySubstance {
        container: ContainerKind,
        species: Species,
        position: usize,
    },
    RemoveSubstance {
        container: ContainerKind,
        species: Species,
        position: usize,
    },
    Talk(TalkTarget),
    Attack {
        container: ContainerKind,
        species: Species,
        attacker: usize,
        prey: usize,
    },
    /// Implicit time-advance, selected by any unrecognized first token.
    Period,
}

impl Command {
    /// Parse one command line. An empty line or unrecognized keyword is the
    /// implicit `period` command.
    pub fn parse(line: &str) -> Result<Command, ParseError> {
        let tokens: Vec<&str> = line.split(' ').filter(|t| !t.is_empty()).collect();
        let Some(&keyword) = tokens.first() else {
            return Ok(Command::Period);
        };
        match keyword {
            "CREATE" => {
                let species = parse_species(arg(&tokens, 1, "species")?)?;
                let name = arg(&tokens, 2, "name")?.to_string();
                let days_lived = parse_number(arg(&tokens, 3, "days lived")?, "days lived")?;
                let container = parse_container(arg(&tokens, 4, "container")?)?;
                Ok(Command::Create {
                    species,
                    name,
                    days_lived,
                    container,
                })
            }
            "APPLY_SUBSTANCE" => {
                let (container, species, position) = parse_pen_address(&tokens)?;
                Ok(Command::ApplySubstance {
                    container,
                    species,
                    position,
                })
            }
            "REMOVE_SUBSTANCE" => {
                let (container, species, position) = parse_pen_address(&tokens)?;
                Ok(Command::RemoveSubstance {
                    container,
                    species,
                    position,
                })
            }
            "TALK" => {
                let container = parse_container(arg(&tokens, 1, "container")?)?;
                if container == ContainerKind::Freedom {
                    let position = parse_position(arg(&tokens, 2, "position")?)?;
                    Ok(Command::Talk(TalkTarget::Freedom { position }))
                } else {
                    let species = parse_species(arg(&tokens, 2, "species")?)?;
                    let position = parse_position(arg(&tokens, 3, "position")?)?;
                    Ok(Command::Talk(TalkTarget::Pen {
                        container,
                        species,
                        position,
                    }))
                }
            }
            "ATTACK" => {
                let container = parse_container(arg(&tokens, 1, "container")?)?;
                let species = parse_species(arg(&tokens, 2, "species")?)?;
                let attacker = parse_position(arg(&tokens, 3, "attacker position")?)?;
                let prey = parse_position(arg(&tokens, 4, "prey position")?)?;
                Ok(Command::Attack {
                    container,
                    species,
                    attacker,
                    prey,
                })
            }
            _ => Ok(Command::Period),
        }
    }
}

fn arg<'a>(tokens: &[&'a str], index: usize, what: &'static str) -> Result<&'a str, ParseError> {
    tokens
        .get(index)
        .copied()
        .ok_or(ParseError::MissingArgument(what))
}

/// Container + species + position, the shared 3-argument address form.
fn parse_pen_address(tokens: &[&str]) -> Result<(ContainerKind, Species, usize), ParseError> {
    let container = parse_container(arg(tokens, 1, "container")?)?;
    if container == ContainerKind::Freedom {
        // Freedom rejects substance commands before its address is even
        // resolved, so the species token is accepted unchecked here.
        let species = Species::parse(arg(tokens, 2, "species")?).unwrap_or(Species::Monster);
        let position = parse_position(arg(tokens, 3, "position")?)?;
        return Ok((container, species, position));
    }
    let species = parse_species(arg(tokens, 2, "species")?)?;
    let position = parse_position(arg(tokens, 3, "position")?)?;
    Ok((container, species, position))
}

fn parse_species(token: &str) -> Result<Species, ParseError> {
    Species::parse(token).ok_or_else(|| ParseError::UnknownSpecies(token.to_string()))
}

fn parse_container(token: &str) -> Result<ContainerKind, ParseError> {
    ContainerKind::parse(token).ok_or_else(|| ParseError::UnknownContainer(token.to_string()))
}

fn parse_number(token: &str, what: &'static str) -> Result<i32, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        what,
        token: token.to_string(),
    })
}

fn parse_position(token: &str) -> Result<usize, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        what: "position",
        token: token.to_string(),
    })
}
