pub mod api;
pub mod drop_target;
pub mod mirror;
pub mod sync;

pub use api::{BoardApi, MoveCardRequest};
pub use drop_target::{resolve_drop, DropTarget, ResolvedDrop};
pub use mirror::BoardMirror;
pub use sync::BoardSynchronizer;
