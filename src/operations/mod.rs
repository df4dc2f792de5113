pub mod face_path;
pub mod host;

pub use face_path::{FaceGeometryResolver, FacePath};
pub use host::{HostDecision, HostResolver, HostRule, Reassignment};
