//! taskgraph-layout: layered (Sugiyama-style) layout for task-dependency graphs.
//!
//! Public API: [`layout()`] / [`LayoutEngine`].
//!
//! ```
//! use taskgraph_layout::{LayoutConfig, layout};
//!
//! let tasks = ["A", "B", "C"];
//! let edges = [("A", "B"), ("B", "C")];
//! let result = layout(&tasks, &edges, &LayoutConfig::default()).unwrap();
//! assert_eq!(result.layer_of("C"), Some(2));
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod request;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{Algorithm, IsolatedPlacement, LayoutConfig, OrderingHeuristic};
pub use error::{LayoutError, RequestError};
pub use layout::{
    Bounds, Direction, Layout, LayoutEngine, LayoutMode, PlacedNode, Point, RoutedEdge, Size,
    VirtualNode, layout, layout_positions,
};
pub use request::LayoutRequest;
