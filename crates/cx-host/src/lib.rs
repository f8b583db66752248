// ABOUTME: Adapter interfaces for convenience helpers over a host UI toolkit.
// ABOUTME: Hosts implement the traits; the helpers add null-safety, naming and pinning rules.

pub mod embed;
pub mod layout;
pub mod monitor;
pub mod notification;
pub mod reuse;

pub use embed::{add_child, ControllerHost};
pub use layout::{
    add_constraint, add_constraints_with_visual_format, view_dictionary, Attribute, Constraint,
    LayoutError, LayoutHost, Relation,
};
pub use monitor::{remove_monitor, EventMonitors};
pub use notification::{remove_observer, NotificationCenter};
pub use reuse::{ElementKind, IndexPath, ReuseError, ReuseRegistry, Reusable};
