//! Dispatcher and handlers for the menagerie simulation
//!
//! [`MenagerieEngine::run`] reads the command count, then processes one
//! line per command. Every handler validates its address (Freedom
//! restrictions first, then position bounds), mutates the habitats, and
//! reports result lines into the shared transcript.
//!
//! Substance handling moves animals between pens: the old instance is
//! removed from its pen and a new instance of the target variant is
//! inserted into the destination pen, so an animal's position is
//! recomputed by the sort on every move.

use thiserror::Error;
use tracing::debug;

use super::animal::{Animal, Species};
use super::command::{Command, TalkTarget};
use super::habitat::{ContainerKind, Habitats, PenId};
use crate::transcript::Transcript;

#[derive(Debug, Error)]
pub enum RunError {
    /// The first input line must be the number of commands that follow.
    #[error("invalid command count '{0}'")]
    InvalidCommandCount(String),
}

/// The menagerie interpreter: the habitat registry plus the transcript.
#[derive(Debug, Default)]
pub struct MenagerieEngine {
    habitats: Habitats,
    transcript: Transcript,
}

impl MenagerieEngine {
    pub fn new() -> Self {
        MenagerieEngine::default()
    }

    /// Process a full input: a command count line followed by that many
    /// command lines. Lines that fail to parse are skipped; a short input
    /// simply ends the run early.
    pub fn run(&mut self, input: &str) -> Result<(), RunError> {
        let mut lines = input.lines();
        let count_line = lines.next().unwrap_or("").trim();
        let count: usize = count_line
            .parse()
            .map_err(|_| RunError::InvalidCommandCount(count_line.to_string()))?;

        for line in lines.take(count) {
            match Command::parse(line) {
                Ok(command) => self.execute(command),
                Err(error) => {
                    debug!(%error, line, "skipping malformed command");
                }
            }
        }
        Ok(())
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn habitats(&self) -> &Habitats {
        &self.habitats
    }

    /// Execute one already-parsed command.
    pub fn execute(&mut self, command: Command) {
        debug!(?command, "executing command");
        match command {
            Command::Create {
                species,
                name,
                days_lived,
                container,
            } => {
                let animal = Animal::new(species, name, days_lived);
                let destination = Habitats::placement(container, species);
                self.transcript.push(animal.say_name());
                self.habitats.pen_mut(destination).add(animal);
            }
            Command::ApplySubstance {
                container,
                species,
                position,
            } => self.apply_substance(container, species, position),
            Command::RemoveSubstance {
                container,
                species,
                position,
            } => self.remove_substance(container, species, position),
            Command::Talk(target) => self.talk(target),
            Command::Attack {
                container,
                species,
                attacker,
                prey,
            } => self.attack(container, species, attacker, prey),
            Command::Period => self.habitats.advance_period(&mut self.transcript),
        }
    }

    fn apply_substance(&mut self, container: ContainerKind, species: Species, position: usize) {
        if container == ContainerKind::Freedom {
            self.transcript
                .push("Substance cannot be applied in freedom".to_string());
            return;
        }
        let pen_id = Habitats::resolve(container, species);
        if self.habitats.pen(pen_id).len() <= position {
            self.animal_not_found();
            return;
        }

        let animal = self.habitats.pen_mut(pen_id).remove(position);
        let was_better = animal.species().is_better();
        let upgraded = animal.upgraded();
        self.transcript.push(format!(
            "{} is now a {}, days lived: {}",
            upgraded.name(),
            upgraded.species(),
            upgraded.days_lived()
        ));
        if was_better {
            // A Monster is born: every remaining occupant of the source pen
            // dies, and the Monster itself lives out its day in Freedom.
            self.habitats.pen_mut(pen_id).clear();
            self.habitats.pen_mut(PenId::Freedom).add(upgraded);
        } else {
            let destination = Habitats::resolve(container, upgraded.species());
            self.habitats.pen_mut(destination).add(upgraded);
        }
    }

    fn remove_substance(&mut self, container: ContainerKind, species: Species, position: usize) {
        if container == ContainerKind::Freedom {
            self.transcript
                .push("Substance cannot be removed in freedom".to_string());
            return;
        }
        if species.is_base() {
            self.transcript.push("Invalid substance removal".to_string());
            return;
        }
        let pen_id = Habitats::resolve(container, species);
        if self.habitats.pen(pen_id).len() <= position {
            self.animal_not_found();
            return;
        }

        let animal = self.habitats.pen_mut(pen_id).remove(position);
        let downgraded = animal.downgraded();
        self.transcript.push(format!(
            "{} is now a {}, days lived: {}",
            downgraded.name(),
            downgraded.species(),
            downgraded.days_lived()
        ));
        let destination = Habitats::resolve(container, downgraded.species());
        self.habitats.pen_mut(destination).add(downgraded);
    }

    fn talk(&mut self, target: TalkTarget) {
        let (pen_id, position) = match target {
            TalkTarget::Freedom { position } => (PenId::Freedom, position),
            TalkTarget::Pen {
                container,
                species,
                position,
            } => (Habitats::resolve(container, species), position),
        };
        match self.habitats.pen(pen_id).get(position) {
            Some(animal) => {
                let line = animal.say_name();
                self.transcript.push(line);
            }
            None => self.animal_not_found(),
        }
    }

    fn attack(
        &mut self,
        container: ContainerKind,
        species: Species,
        attacker: usize,
        prey: usize,
    ) {
        if container == ContainerKind::Freedom {
            self.transcript
                .push("Animals cannot attack in Freedom".to_string());
            return;
        }
        let pen_id = Habitats::resolve(container, species);
        let pen = self.habitats.pen(pen_id);
        if pen.len() <= attacker || pen.len() <= prey {
            self.animal_not_found();
            return;
        }

        let attack_line = pen.get(attacker).and_then(Animal::attack_line);
        if let Some(line) = attack_line {
            self.transcript.push(line);
        }
        // The prey dies unconditionally, whatever the attack announced.
        self.habitats.pen_mut(pen_id).remove(prey);
    }

    fn animal_not_found(&mut self) {
        self.transcript.push("Animal not found".to_string());
    }
}
