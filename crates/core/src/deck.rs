//! Deck module - shape supply
//!
//! The factory draws random shapes from the catalog; the deck is the
//! hand of three the player picks from. Slots empty out as shapes are
//! played and the session refills the whole hand only once every slot
//! is gone.

use blockfit_types::{
    BonusKind, ColorId, COLOR_TEMPLATE_COUNT, DECK_SLOTS, MAX_SHAPE_BONUSES,
};

use crate::catalog;
use crate::rng::SimpleRng;
use crate::shape::Shape;

/// Produces random shapes from the template catalog
///
/// Seeded and fully deterministic. Adventure sessions construct it with
/// a bonus kind; roughly one drawn shape in three then carries bonus
/// items for the player to collect.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeFactory {
    rng: SimpleRng,
    seed: u32,
    bonus: Option<BonusKind>,
}

impl ShapeFactory {
    /// Factory for plain shape draws
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
            bonus: None,
        }
    }

    /// Factory whose draws occasionally carry `bonus` items
    pub fn with_bonus(seed: u32, bonus: BonusKind) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
            bonus: Some(bonus),
        }
    }

    /// The seed this factory started from
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Bonus kind configured for this factory, if any
    pub fn bonus_kind(&self) -> Option<BonusKind> {
        self.bonus
    }

    /// Draw the next shape: uniform template, uniform color
    pub fn next_shape(&mut self) -> Shape {
        let idx = self.rng.next_range(catalog::TEMPLATES.len() as u32) as usize;
        let color = ColorId(self.rng.next_range(COLOR_TEMPLATE_COUNT as u32) as u8);
        let mut shape = Shape::from_template(&catalog::TEMPLATES[idx], color);
        if let Some(kind) = self.bonus {
            if self.rng.chance(3) {
                shape.assign_bonus(kind, MAX_SHAPE_BONUSES, &mut self.rng);
            }
        }
        shape
    }
}

/// The hand of shapes the player picks from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    slots: [Option<Shape>; DECK_SLOTS],
}

impl Deck {
    /// Empty deck
    pub fn new() -> Self {
        Self::default()
    }

    /// Deck with every slot filled from the factory
    pub fn dealt(factory: &mut ShapeFactory) -> Self {
        let mut deck = Self::new();
        deck.refill(factory);
        deck
    }

    /// Fill every slot with a fresh draw
    pub fn refill(&mut self, factory: &mut ShapeFactory) {
        for slot in &mut self.slots {
            *slot = Some(factory.next_shape());
        }
    }

    /// Number of slots in the hand
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Shape waiting in `slot`, if any
    pub fn get(&self, slot: usize) -> Option<&Shape> {
        self.slots.get(slot).and_then(|entry| entry.as_ref())
    }

    /// Remove and return the shape in `slot`
    pub fn take(&mut self, slot: usize) -> Option<Shape> {
        self.slots.get_mut(slot).and_then(|entry| entry.take())
    }

    /// Overwrite a single slot
    /// Returns false if the index is out of range
    pub fn set(&mut self, slot: usize, shape: Option<Shape>) -> bool {
        match self.slots.get_mut(slot) {
            Some(entry) => {
                *entry = shape;
                true
            }
            None => false,
        }
    }

    /// Check if every slot is empty
    pub fn is_exhausted(&self) -> bool {
        self.slots.iter().all(|entry| entry.is_none())
    }

    /// Shapes still waiting to be played, in slot order
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.slots.iter().filter_map(|entry| entry.as_ref())
    }

    /// All slots, including empty ones
    pub fn slots(&self) -> &[Option<Shape>] {
        &self.slots
    }
}
