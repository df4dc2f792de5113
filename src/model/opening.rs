use crate::math::{Point2, Point3};

use super::{FaceId, SlabId, Wall, WallId};

slotmap::new_key_type! {
    /// Unique identifier for an opening in the floor plan.
    pub struct OpeningId;
}

/// Classification of an opening, fixed when the opening is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpeningKind {
    /// A hinged or sliding door.
    Door,
    /// A plain wall opening without a frame.
    Hole,
    /// An ordinary window.
    Window,
    /// A window projecting out of the wall.
    BayWindow,
    /// A window wrapping a wall corner.
    CornerWindow,
    /// A recess that does not pierce the wall.
    Niche,
    /// A hole cut through a slab.
    SlabHole,
}

/// The wall-matching rule an opening kind is rehosted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// Take the first wall whose interior contains the opening.
    ExactFit,
    /// Prefer a wall on the same line as the current host.
    SameLine,
    /// Distance only.
    Nearest,
}

impl OpeningKind {
    /// Returns the wall-matching rule for this kind.
    #[must_use]
    pub fn match_rule(self) -> MatchRule {
        match self {
            Self::Hole => MatchRule::ExactFit,
            Self::Window | Self::BayWindow | Self::CornerWindow => MatchRule::SameLine,
            Self::Door | Self::Niche | Self::SlabHole => MatchRule::Nearest,
        }
    }

    /// Returns `true` if openings of this kind are rehosted when walls change.
    #[must_use]
    pub fn is_rehosted(self) -> bool {
        self != Self::SlabHole
    }

    /// Returns `true` if the opening is cut into a wall rather than a slab.
    #[must_use]
    pub fn is_wall_mounted(self) -> bool {
        self != Self::SlabHole
    }

    /// Returns `true` if face outlines are placed with the full world matrix.
    #[must_use]
    pub fn takes_world_matrix(self) -> bool {
        matches!(self, Self::Hole | Self::Door | Self::Window)
    }
}

/// Swing code describing an opening's left/right orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Swing(pub u8);

impl Swing {
    /// Codes 2 and 3 open to the reverse side; their wall-side faces are mirrored.
    #[must_use]
    pub fn is_reversed(self) -> bool {
        matches!(self.0, 2 | 3)
    }
}

/// What an opening is attached to.
#[derive(Debug, Clone, PartialEq)]
pub enum HostRef {
    /// A wall. `line` holds the wall endpoints captured when the opening was
    /// attached; it is `None` when the reference was restored from storage.
    Wall {
        id: WallId,
        line: Option<(Point3, Point3)>,
    },
    /// A slab.
    Slab(SlabId),
}

impl HostRef {
    /// Returns the host wall id, if the host is a wall.
    #[must_use]
    pub fn wall_id(&self) -> Option<WallId> {
        match self {
            Self::Wall { id, .. } => Some(*id),
            Self::Slab(_) => None,
        }
    }
}

/// A door, window, niche, or hole placed against a host.
#[derive(Debug, Clone)]
pub struct Opening {
    pub kind: OpeningKind,
    /// Plan position.
    pub position: Point2,
    /// Elevation above the layer floor.
    pub z: Option<f64>,
    /// Rotation about Z in radians.
    pub rotation: f64,
    pub swing: Swing,
    pub x_scale: f64,
    pub y_scale: f64,
    pub x_length: f64,
    pub y_length: f64,
    pub z_length: f64,
    pub flip: bool,
    /// Faces of the cut volume.
    pub faces: Vec<FaceId>,
    host: Option<HostRef>,
}

impl Opening {
    /// Creates an unhosted opening with unit scale and unit extents.
    #[must_use]
    pub fn new(kind: OpeningKind, position: Point2) -> Self {
        Self {
            kind,
            position,
            z: None,
            rotation: 0.0,
            swing: Swing::default(),
            x_scale: 1.0,
            y_scale: 1.0,
            x_length: 1.0,
            y_length: 1.0,
            z_length: 1.0,
            flip: false,
            faces: Vec::new(),
            host: None,
        }
    }

    /// Sets the host reference, e.g. when restoring from storage.
    #[must_use]
    pub fn with_host(mut self, host: HostRef) -> Self {
        self.host = Some(host);
        self
    }

    /// Returns the current host.
    #[must_use]
    pub fn host(&self) -> Option<&HostRef> {
        self.host.as_ref()
    }

    /// Attaches the opening to a wall, capturing the wall's endpoints.
    pub fn assign_to(&mut self, id: WallId, wall: &Wall) {
        self.host = Some(HostRef::Wall {
            id,
            line: Some((*wall.from(), *wall.to())),
        });
    }

    /// Attaches the opening to a slab.
    pub fn attach_to_slab(&mut self, id: SlabId) {
        self.host = Some(HostRef::Slab(id));
    }

    /// Maps a point of the opening's local frame into plan coordinates
    /// using only its scale and position.
    #[must_use]
    pub fn local_to_plan(&self, p: &Point2) -> Point2 {
        Point2::new(
            p.x * self.x_scale + self.position.x,
            p.y * self.y_scale + self.position.y,
        )
    }
}
