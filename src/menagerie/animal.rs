//! Species variants and the substance state machine
//!
//! Every animal form is a [`Species`] tag on a single [`Animal`] record
//! rather than a class of its own. Upgrade and downgrade are explicit
//! transitions returning a new animal value:
//!
//! ```text
//! Fish  ⇄ BetterFish  → Monster
//! Bird  ⇄ BetterBird  → Monster
//! Mouse ⇄ BetterMouse → Monster
//! ```
//!
//! Applying substance halves days-lived (rounded up); removing it doubles
//! them. The Monster transition resets days-lived to 1 and is terminal.

use std::fmt;

/// Variant tag for every animal form in the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    Fish,
    Bird,
    Mouse,
    BetterFish,
    BetterBird,
    BetterMouse,
    Monster,
}

impl Species {
    /// Map a command token to a species. Monsters have no token; they are
    /// only ever produced by a second substance application.
    pub fn parse(token: &str) -> Option<Species> {
        match token {
            "F" => Some(Species::Fish),
            "B" => Some(Species::Bird),
            "M" => Some(Species::Mouse),
            "BF" => Some(Species::BetterFish),
            "BB" => Some(Species::BetterBird),
            "BM" => Some(Species::BetterMouse),
            _ => None,
        }
    }

    pub fn is_base(self) -> bool {
        matches!(self, Species::Fish | Species::Bird | Species::Mouse)
    }

    pub fn is_better(self) -> bool {
        matches!(
            self,
            Species::BetterFish | Species::BetterBird | Species::BetterMouse
        )
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Species::Fish => "Fish",
            Species::Bird => "Bird",
            Species::Mouse => "Mouse",
            Species::BetterFish => "BetterFish",
            Species::BetterBird => "BetterBird",
            Species::BetterMouse => "BetterMouse",
            Species::Monster => "Monster",
        };
        f.write_str(name)
    }
}

/// One animal: an immutable name, a mutable days-lived counter, and its
/// current species tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    name: String,
    days_lived: i32,
    species: Species,
}

impl Animal {
    pub fn new(species: Species, name: impl Into<String>, days_lived: i32) -> Self {
        Animal {
            name: name.into(),
            days_lived,
            species,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn days_lived(&self) -> i32 {
        self.days_lived
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn live_one_day(&mut self) {
        self.days_lived += 1;
    }

    /// The `TALK`-style announcement line.
    pub fn say_name(&self) -> String {
        format!("My name is {}, days lived: {}", self.name, self.days_lived)
    }

    /// The attack announcement for this animal's dynamic variant. Monsters
    /// attack silently (and never get the chance: they only live in
    /// Freedom, where attacks are rejected).
    pub fn attack_line(&self) -> Option<String> {
        match self.species {
            Species::Monster => None,
            species => Some(format!("{} is attacking", species)),
        }
    }

    /// Apply substance: base forms become their Better counterpart with
    /// days-lived halved (rounded up); Better forms become a Monster with
    /// days-lived reset to 1. Monsters are unchanged.
    pub fn upgraded(self) -> Animal {
        let (species, days_lived) = match self.species {
            Species::Fish => (Species::BetterFish, half_rounded_up(self.days_lived)),
            Species::Bird => (Species::BetterBird, half_rounded_up(self.days_lived)),
            Species::Mouse => (Species::BetterMouse, half_rounded_up(self.days_lived)),
            Species::BetterFish | Species::BetterBird | Species::BetterMouse => {
                (Species::Monster, 1)
            }
            Species::Monster => (Species::Monster, self.days_lived),
        };
        Animal {
            name: self.name,
            days_lived,
            species,
        }
    }

    /// Remove substance: Better forms revert to their base counterpart with
    /// days-lived doubled. Base forms and Monsters are unchanged; the
    /// engine rejects them before getting here.
    pub fn downgraded(self) -> Animal {
        let (species, days_lived) = match self.species {
            Species::BetterFish => (Species::Fish, self.days_lived * 2),
            Species::BetterBird => (Species::Bird, self.days_lived * 2),
            Species::BetterMouse => (Species::Mouse, self.days_lived * 2),
            other => (other, self.days_lived),
        };
        Animal {
            name: self.name,
            days_lived,
            species,
        }
    }
}

fn half_rounded_up(days: i32) -> i32 {
    (days + 1) / 2
}
