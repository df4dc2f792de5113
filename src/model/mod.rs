pub mod face;
pub mod layer;
pub mod opening;
pub mod slab;
pub mod wall;

pub use face::{Face, FaceId, FaceKind};
pub use layer::{EntityId, Layer, LayerId};
pub use opening::{HostRef, MatchRule, Opening, OpeningId, OpeningKind, Swing};
pub use slab::{Slab, SlabId, TopFace, TopFaceId};
pub use wall::{Wall, WallId};

use crate::error::ModelError;
use slotmap::SlotMap;

/// Snapshot of a floor plan: the arena that owns every entity the
/// resolvers read.
///
/// Entities reference each other via typed IDs (generational indices), so
/// a wall removed from the plan simply stops resolving.
#[derive(Debug, Default)]
pub struct FloorPlan {
    walls: SlotMap<WallId, Wall>,
    openings: SlotMap<OpeningId, Opening>,
    slabs: SlotMap<SlabId, Slab>,
    top_faces: SlotMap<TopFaceId, TopFace>,
    faces: SlotMap<FaceId, Face>,
    layers: SlotMap<LayerId, Layer>,
}

impl FloorPlan {
    /// Creates a new, empty floor plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Layer operations ---

    /// Inserts a layer and returns its ID.
    pub fn add_layer(&mut self, layer: Layer) -> LayerId {
        self.layers.insert(layer)
    }

    /// Returns a reference to the layer, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the plan.
    pub fn layer(&self, id: LayerId) -> Result<&Layer, ModelError> {
        self.layers
            .get(id)
            .ok_or(ModelError::EntityNotFound("layer"))
    }

    /// Returns a mutable reference to the layer, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the plan.
    pub fn layer_mut(&mut self, id: LayerId) -> Result<&mut Layer, ModelError> {
        self.layers
            .get_mut(id)
            .ok_or(ModelError::EntityNotFound("layer"))
    }

    /// Returns the first layer listing `opening` among its children.
    #[must_use]
    pub fn layer_of_opening(&self, opening: OpeningId) -> Option<&Layer> {
        self.layers
            .values()
            .find(|l| l.children.contains(&EntityId::Opening(opening)))
    }

    // --- Wall operations ---

    /// Inserts a wall and returns its ID.
    pub fn add_wall(&mut self, wall: Wall) -> WallId {
        self.walls.insert(wall)
    }

    /// Inserts a wall and lists it among a layer's children.
    ///
    /// # Errors
    ///
    /// Returns an error if the layer is not found.
    pub fn add_wall_to_layer(&mut self, layer: LayerId, wall: Wall) -> Result<WallId, ModelError> {
        let layer = self
            .layers
            .get_mut(layer)
            .ok_or(ModelError::EntityNotFound("layer"))?;
        let id = self.walls.insert(wall);
        layer.children.push(EntityId::Wall(id));
        Ok(id)
    }

    /// Returns a reference to the wall, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the plan.
    pub fn wall(&self, id: WallId) -> Result<&Wall, ModelError> {
        self.walls.get(id).ok_or(ModelError::EntityNotFound("wall"))
    }

    /// Removes a wall from the plan and from every layer that lists it.
    ///
    /// Openings keep their (now dangling) host reference until the next
    /// rehosting pass.
    pub fn remove_wall(&mut self, id: WallId) -> Option<Wall> {
        for layer in self.layers.values_mut() {
            layer.children.retain(|c| *c != EntityId::Wall(id));
        }
        self.walls.remove(id)
    }

    /// The id-keyed wall lookup.
    #[must_use]
    pub fn walls(&self) -> &SlotMap<WallId, Wall> {
        &self.walls
    }

    // --- Opening operations ---

    /// Inserts an opening and returns its ID.
    pub fn add_opening(&mut self, opening: Opening) -> OpeningId {
        self.openings.insert(opening)
    }

    /// Inserts an opening and lists it among a layer's children.
    ///
    /// # Errors
    ///
    /// Returns an error if the layer is not found.
    pub fn add_opening_to_layer(
        &mut self,
        layer: LayerId,
        opening: Opening,
    ) -> Result<OpeningId, ModelError> {
        let layer = self
            .layers
            .get_mut(layer)
            .ok_or(ModelError::EntityNotFound("layer"))?;
        let id = self.openings.insert(opening);
        layer.children.push(EntityId::Opening(id));
        Ok(id)
    }

    /// Returns a reference to the opening, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the plan.
    pub fn opening(&self, id: OpeningId) -> Result<&Opening, ModelError> {
        self.openings
            .get(id)
            .ok_or(ModelError::EntityNotFound("opening"))
    }

    /// Returns a mutable reference to the opening, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the plan.
    pub fn opening_mut(&mut self, id: OpeningId) -> Result<&mut Opening, ModelError> {
        self.openings
            .get_mut(id)
            .ok_or(ModelError::EntityNotFound("opening"))
    }

    // --- Slab operations ---

    /// Inserts a slab and returns its ID.
    pub fn add_slab(&mut self, slab: Slab) -> SlabId {
        self.slabs.insert(slab)
    }

    /// Returns a reference to the slab, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the plan.
    pub fn slab(&self, id: SlabId) -> Result<&Slab, ModelError> {
        self.slabs.get(id).ok_or(ModelError::EntityNotFound("slab"))
    }

    /// Adds a top face to a slab, appended after its existing faces.
    ///
    /// # Errors
    ///
    /// Returns an error if the slab is not found.
    pub fn add_top_face(&mut self, slab: SlabId, face: TopFace) -> Result<TopFaceId, ModelError> {
        let slab = self
            .slabs
            .get_mut(slab)
            .ok_or(ModelError::EntityNotFound("slab"))?;
        let id = self.top_faces.insert(face);
        slab.top_faces.push(id);
        Ok(id)
    }

    /// Returns a reference to the slab top face, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the plan.
    pub fn top_face(&self, id: TopFaceId) -> Result<&TopFace, ModelError> {
        self.top_faces
            .get(id)
            .ok_or(ModelError::EntityNotFound("slab top face"))
    }

    // --- Face operations ---

    /// Adds a face to an opening and records the opening as its parent.
    ///
    /// # Errors
    ///
    /// Returns an error if the opening is not found.
    pub fn add_face(&mut self, opening: OpeningId, mut face: Face) -> Result<FaceId, ModelError> {
        let owner = self
            .openings
            .get_mut(opening)
            .ok_or(ModelError::EntityNotFound("opening"))?;
        face.parent = Some(opening);
        let id = self.faces.insert(face);
        owner.faces.push(id);
        Ok(id)
    }

    /// Returns a reference to the face, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the plan.
    pub fn face(&self, id: FaceId) -> Result<&Face, ModelError> {
        self.faces.get(id).ok_or(ModelError::EntityNotFound("face"))
    }
}
