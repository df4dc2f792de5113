use super::{OpeningId, SlabId, WallId};

slotmap::new_key_type! {
    /// Unique identifier for a floor-plan layer (storey).
    pub struct LayerId;
}

/// Reference to any entity a layer can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityId {
    Wall(WallId),
    Opening(OpeningId),
    Slab(SlabId),
}

/// A storey: its elevation plus the entities placed on it.
#[derive(Debug, Clone, Default)]
pub struct Layer {
    /// Elevation of the layer's floor.
    pub altitude: f64,
    /// Child entities in insertion order.
    pub children: Vec<EntityId>,
}

impl Layer {
    /// Creates an empty layer at the given altitude.
    #[must_use]
    pub fn new(altitude: f64) -> Self {
        Self {
            altitude,
            children: Vec::new(),
        }
    }

    /// Returns `true` if `wall` is one of this layer's children.
    #[must_use]
    pub fn contains_wall(&self, wall: WallId) -> bool {
        self.children.contains(&EntityId::Wall(wall))
    }

    /// Iterates the openings among this layer's children.
    pub fn openings(&self) -> impl Iterator<Item = OpeningId> + '_ {
        self.children.iter().filter_map(|c| match c {
            EntityId::Opening(id) => Some(*id),
            _ => None,
        })
    }
}
