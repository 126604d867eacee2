//! Sorted pens and the habitat registry
//!
//! A [`Pen`] is an ordered list of animals kept sorted by (days-lived
//! ascending, name ascending) after every insertion and removal; all
//! position-based commands index into that order.
//!
//! [`Habitats`] owns the nine pens of the system in a fixed declaration
//! order. Cage and Aquarium are split per species, which is what enforces
//! the capability matrix: there simply is no fish pen under Cage and no
//! bird pen under Aquarium, so a mismatched CREATE falls through to
//! Freedom and no runtime type check is needed.

use super::animal::{Animal, Species};
use crate::transcript::Transcript;

/// Death threshold shared by every typed pen.
const OLD_AGE_DAYS: i32 = 10;

/// Days a Monster survives in Freedom.
const MONSTER_LIFESPAN_DAYS: i32 = 1;

/// An ordered collection of animals, re-sorted after every mutation.
#[derive(Debug, Clone, Default)]
pub struct Pen {
    animals: Vec<Animal>,
}

impl Pen {
    pub fn new() -> Self {
        Pen { animals: Vec::new() }
    }

    fn sort(&mut self) {
        self.animals.sort_by(|a, b| {
            a.days_lived()
                .cmp(&b.days_lived())
                .then_with(|| a.name().cmp(b.name()))
        });
    }

    pub fn add(&mut self, animal: Animal) {
        self.animals.push(animal);
        self.sort();
    }

    /// Remove and return the animal at a position. The position must be in
    /// bounds; callers guard with [`Pen::len`] first.
    pub fn remove(&mut self, position: usize) -> Animal {
        let animal = self.animals.remove(position);
        self.sort();
        animal
    }

    pub fn get(&self, position: usize) -> Option<&Animal> {
        self.animals.get(position)
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    /// Remove every occupant at once (the Monster kill-all side effect).
    pub fn clear(&mut self) {
        self.animals.clear();
    }

    pub fn age_all(&mut self) {
        for animal in &mut self.animals {
            animal.live_one_day();
        }
    }

    /// Remove every animal the predicate marks as dead, in positional
    /// order, reporting one death line per removal.
    fn sweep_dead(&mut self, is_dead: impl Fn(&Animal) -> bool, transcript: &mut Transcript) {
        let mut position = 0;
        while position < self.animals.len() {
            if is_dead(&self.animals[position]) {
                let animal = self.animals.remove(position);
                transcript.push(format!("{} has died of old days", animal.name()));
            } else {
                position += 1;
            }
        }
    }
}

/// Identifier of one of the nine pens, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenId {
    BirdCage,
    BetterBirdCage,
    MouseCage,
    BetterMouseCage,
    FishAquarium,
    BetterFishAquarium,
    MouseAquarium,
    BetterMouseAquarium,
    Freedom,
}

impl PenId {
    /// All pens in the order the time-advance sweep visits them.
    pub const ALL: [PenId; 9] = [
        PenId::BirdCage,
        PenId::BetterBirdCage,
        PenId::MouseCage,
        PenId::BetterMouseCage,
        PenId::FishAquarium,
        PenId::BetterFishAquarium,
        PenId::MouseAquarium,
        PenId::BetterMouseAquarium,
        PenId::Freedom,
    ];
}

/// Container keyword of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Cage,
    Aquarium,
    Freedom,
}

impl ContainerKind {
    pub fn parse(token: &str) -> Option<ContainerKind> {
        match token {
            "Cage" => Some(ContainerKind::Cage),
            "Aquarium" => Some(ContainerKind::Aquarium),
            "Freedom" => Some(ContainerKind::Freedom),
            _ => None,
        }
    }
}

/// The nine pens of the system.
#[derive(Debug, Default)]
pub struct Habitats {
    bird_cage: Pen,
    better_bird_cage: Pen,
    mouse_cage: Pen,
    better_mouse_cage: Pen,
    fish_aquarium: Pen,
    better_fish_aquarium: Pen,
    mouse_aquarium: Pen,
    better_mouse_aquarium: Pen,
    freedom: Pen,
}

impl Habitats {
    pub fn new() -> Self {
        Habitats::default()
    }

    pub fn pen(&self, id: PenId) -> &Pen {
        match id {
            PenId::BirdCage => &self.bird_cage,
            PenId::BetterBirdCage => &self.better_bird_cage,
            PenId::MouseCage => &self.mouse_cage,
            PenId::BetterMouseCage => &self.better_mouse_cage,
            PenId::FishAquarium => &self.fish_aquarium,
            PenId::BetterFishAquarium => &self.better_fish_aquarium,
            PenId::MouseAquarium => &self.mouse_aquarium,
            PenId::BetterMouseAquarium => &self.better_mouse_aquarium,
            PenId::Freedom => &self.freedom,
        }
    }

    pub fn pen_mut(&mut self, id: PenId) -> &mut Pen {
        match id {
            PenId::BirdCage => &mut self.bird_cage,
            PenId::BetterBirdCage => &mut self.better_bird_cage,
            PenId::MouseCage => &mut self.mouse_cage,
            PenId::BetterMouseCage => &mut self.better_mouse_cage,
            PenId::FishAquarium => &mut self.fish_aquarium,
            PenId::BetterFishAquarium => &mut self.better_fish_aquarium,
            PenId::MouseAquarium => &mut self.mouse_aquarium,
            PenId::BetterMouseAquarium => &mut self.better_mouse_aquarium,
            PenId::Freedom => &mut self.freedom,
        }
    }

    /// Resolve a (container, species) address to its pen. Mice are the only
    /// family housed under both Cage and Aquarium; species that have no pen
    /// under the named container fall through to the container's Better pen
    /// of the remaining family.
    pub fn resolve(container: ContainerKind, species: Species) -> PenId {
        match container {
            ContainerKind::Cage => match species {
                Species::Mouse => PenId::MouseCage,
                Species::BetterMouse => PenId::BetterMouseCage,
                Species::Bird => PenId::BirdCage,
                _ => PenId::BetterBirdCage,
            },
            ContainerKind::Aquarium => match species {
                Species::Mouse => PenId::MouseAquarium,
                Species::BetterMouse => PenId::BetterMouseAquarium,
                Species::Fish => PenId::FishAquarium,
                _ => PenId::BetterFishAquarium,
            },
            ContainerKind::Freedom => PenId::Freedom,
        }
    }

    /// Where a newly created animal lands: its own pen when the requested
    /// container may hold its species, Freedom otherwise.
    pub fn placement(container: ContainerKind, species: Species) -> PenId {
        match (container, species) {
            (ContainerKind::Cage, Species::Mouse) => PenId::MouseCage,
            (ContainerKind::Cage, Species::BetterMouse) => PenId::BetterMouseCage,
            (ContainerKind::Cage, Species::Bird) => PenId::BirdCage,
            (ContainerKind::Cage, Species::BetterBird) => PenId::BetterBirdCage,
            (ContainerKind::Aquarium, Species::Mouse) => PenId::MouseAquarium,
            (ContainerKind::Aquarium, Species::BetterMouse) => PenId::BetterMouseAquarium,
            (ContainerKind::Aquarium, Species::Fish) => PenId::FishAquarium,
            (ContainerKind::Aquarium, Species::BetterFish) => PenId::BetterFishAquarium,
            _ => PenId::Freedom,
        }
    }

    /// Advance one period: for every pen in declaration order, age every
    /// occupant, then sweep out the dead. Typed pens kill past 10 days;
    /// Freedom additionally kills Monsters past their first day.
    pub fn advance_period(&mut self, transcript: &mut Transcript) {
        for id in PenId::ALL {
            let pen = self.pen_mut(id);
            pen.age_all();
            match id {
                PenId::Freedom => pen.sweep_dead(
                    |animal| {
                        (animal.species() == Species::Monster
                            && animal.days_lived() > MONSTER_LIFESPAN_DAYS)
                            || animal.days_lived() > OLD_AGE_DAYS
                    },
                    transcript,
                ),
                _ => pen.sweep_dead(|animal| animal.days_lived() > OLD_AGE_DAYS, transcript),
            }
        }
    }
}
