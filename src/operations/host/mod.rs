mod nearest;

use slotmap::SlotMap;
use tracing::{debug, instrument, trace};

use crate::config::ResolverConfig;
use crate::error::Result;
use crate::math::{Point2, Segment2};
use crate::model::{FloorPlan, HostRef, Layer, LayerId, MatchRule, Opening, OpeningId, Wall, WallId};

use nearest::NearestWalls;

/// Which step of the matching cascade picked a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRule {
    /// The opening lies strictly inside the wall.
    ExactFit,
    /// The wall is on the same line as the current host and spans the opening.
    SameLine,
    /// The only wall at minimum distance.
    Nearest,
    /// Among tied walls, the one on the host line with the nearest endpoint.
    NearestOnHostLine,
    /// Among tied walls, the first one scanned.
    FirstCandidate,
}

/// Outcome of matching one opening against the candidate walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostDecision {
    /// Leave the current host as it is.
    Keep,
    /// Attach the opening to `wall`.
    Assign { wall: WallId, rule: HostRule },
}

/// One host change applied by [`HostResolver::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reassignment {
    pub opening: OpeningId,
    pub wall: WallId,
    pub rule: HostRule,
}

/// The current host of an opening, resolved once per pass.
#[derive(Debug, Clone, Copy)]
enum CurrentHost {
    /// Wall endpoints carried by the host reference itself.
    InHand { id: WallId, line: Segment2 },
    /// Id-only reference found in the wall lookup.
    LookedUp { line: Segment2 },
    /// Id-only reference the wall lookup no longer knows.
    Missing,
    /// Not hosted by a wall.
    NotWall,
}

impl CurrentHost {
    fn resolve(host: Option<&HostRef>, wall_by_id: &SlotMap<WallId, Wall>) -> Self {
        match host {
            Some(HostRef::Wall {
                id,
                line: Some((from, to)),
            }) => Self::InHand {
                id: *id,
                line: Segment2::from_points3(from, to),
            },
            Some(HostRef::Wall { id, line: None }) => match wall_by_id.get(*id) {
                Some(wall) => Self::LookedUp {
                    line: wall.segment(),
                },
                None => Self::Missing,
            },
            Some(HostRef::Slab(_)) | None => Self::NotWall,
        }
    }

    fn line(&self) -> Option<&Segment2> {
        match self {
            Self::InHand { line, .. } | Self::LookedUp { line } => Some(line),
            Self::Missing | Self::NotWall => None,
        }
    }
}

/// Re-attaches the openings of a layer to the walls they physically sit on.
///
/// Run after a layer's wall set changes. Each rehosted opening is matched
/// against the candidate walls in order:
///
/// 1. plain wall openings take the first wall whose interior contains them;
/// 2. windows take the first wall on the same line as their current host
///    whose extent spans them;
/// 3. otherwise the nearest wall wins, ties broken by the current host line
///    and then by scan order.
///
/// Openings that match nothing keep their host.
#[derive(Debug, Clone)]
pub struct HostResolver {
    walls: Vec<WallId>,
    config: ResolverConfig,
}

impl HostResolver {
    /// Creates a resolver over the given candidate walls.
    #[must_use]
    pub fn new(walls: Vec<WallId>) -> Self {
        Self {
            walls,
            config: ResolverConfig::default(),
        }
    }

    /// Overrides the default tolerances.
    #[must_use]
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Rehosts every opening of `layer` and returns the changes made.
    ///
    /// Candidate walls missing from the plan are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or `layer` (or one
    /// of its listed openings) is not in the plan.
    #[instrument(skip(self, plan), fields(candidates = self.walls.len()))]
    pub fn execute(&self, plan: &mut FloorPlan, layer: LayerId) -> Result<Vec<Reassignment>> {
        self.config.validate()?;

        let mut changes = Vec::new();
        {
            let container = plan.layer(layer)?;
            let candidates = self.candidates(plan.walls());

            for opening_id in container.openings() {
                let opening = plan.opening(opening_id)?;
                if !opening.kind.is_rehosted() {
                    continue;
                }
                match self.resolve(opening, &candidates, plan.walls(), container) {
                    HostDecision::Assign { wall, rule } => changes.push(Reassignment {
                        opening: opening_id,
                        wall,
                        rule,
                    }),
                    HostDecision::Keep => trace!(?opening_id, "host kept"),
                }
            }
        }

        for change in &changes {
            let wall = plan.wall(change.wall)?.clone();
            plan.opening_mut(change.opening)?.assign_to(change.wall, &wall);
            debug!(
                opening = ?change.opening,
                wall = ?change.wall,
                rule = ?change.rule,
                "opening rehosted"
            );
        }

        Ok(changes)
    }

    /// Snapshot of the candidate walls that still exist, in input order.
    fn candidates(&self, wall_by_id: &SlotMap<WallId, Wall>) -> Vec<(WallId, Segment2)> {
        self.walls
            .iter()
            .filter_map(|&id| match wall_by_id.get(id) {
                Some(wall) => Some((id, wall.segment())),
                None => {
                    debug!(wall = ?id, "candidate wall not in plan");
                    None
                }
            })
            .collect()
    }

    /// Decides the host of a single opening.
    ///
    /// `candidates` are scanned in order; `wall_by_id` resolves id-only host
    /// references; `container` is the layer the opening belongs to.
    #[must_use]
    pub fn resolve(
        &self,
        opening: &Opening,
        candidates: &[(WallId, Segment2)],
        wall_by_id: &SlotMap<WallId, Wall>,
        container: &Layer,
    ) -> HostDecision {
        let position = opening.position;
        let rule = opening.kind.match_rule();
        let current = CurrentHost::resolve(opening.host(), wall_by_id);
        let tol = self.config.point_tolerance;
        let mut nearest = NearestWalls::new(self.config.tie_tolerance);

        for &(id, segment) in candidates {
            match rule {
                MatchRule::ExactFit => {
                    if segment.contains_point_strictly(&position, self.config.containment_tolerance) {
                        return HostDecision::Assign {
                            wall: id,
                            rule: HostRule::ExactFit,
                        };
                    }
                }
                MatchRule::SameLine => match current.line() {
                    Some(host_line) => {
                        if segment.is_same_line(host_line, tol) && spans(&segment, &position, tol) {
                            return HostDecision::Assign {
                                wall: id,
                                rule: HostRule::SameLine,
                            };
                        }
                    }
                    None if matches!(current, CurrentHost::Missing) => continue,
                    None => {}
                },
                MatchRule::Nearest => {}
            }
            nearest.offer(id, segment, segment.distance_sq(&position));
        }

        if let CurrentHost::InHand { id, .. } = current {
            let in_pass = candidates.iter().any(|(c, _)| *c == id);
            if container.contains_wall(id) && !in_pass {
                return HostDecision::Keep;
            }
        }

        match nearest.walls() {
            [] => HostDecision::Keep,
            [(wall, _)] => HostDecision::Assign {
                wall: *wall,
                rule: HostRule::Nearest,
            },
            tied => {
                let on_host_line = current.line().and_then(|host_line| {
                    tied.iter()
                        .filter(|(_, s)| s.is_same_line(host_line, tol))
                        .min_by(|(_, a), (_, b)| {
                            a.nearer_endpoint_distance(&position)
                                .total_cmp(&b.nearer_endpoint_distance(&position))
                        })
                });
                match on_host_line {
                    Some((wall, _)) => HostDecision::Assign {
                        wall: *wall,
                        rule: HostRule::NearestOnHostLine,
                    },
                    None => HostDecision::Assign {
                        wall: tied[0].0,
                        rule: HostRule::FirstCandidate,
                    },
                }
            }
        }
    }
}

/// Whether the projection of `p` onto the segment's line falls within it.
fn spans(segment: &Segment2, p: &Point2, tolerance: f64) -> bool {
    let d = segment.direction();
    let foot = segment.start + d * segment.param_of(p);
    segment.contains_point(&foot, tolerance)
}
