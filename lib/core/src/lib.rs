//! # topopath Core
//!
//! Core library for topopath.
//!
//! This crate provides the topology model and the path algorithms:
//!
//! - [`Node`] / [`Link`] - Graph endpoints and undirected weighted links
//! - [`Topology`] - JSON topology document with validation
//! - [`shortest_path_by`] - Generic Dijkstra search over a weight accessor
//! - [`shortest_path_by_distance`] / [`shortest_path_by_cost`] - Fibre length and routing cost variants
//! - [`LinkBudget`] - Span, amplifier and OSNR estimate for a fibre route
//!
//! ## Example
//!
//! ```rust
//! use topopath_core::{shortest_path_by_cost, Link};
//!
//! let nodes = ["R1", "R2", "R3"];
//! let links = vec![
//!     Link::new("R1", "R2").with_cost(10),
//!     Link::new("R2", "R3").with_cost(1),
//!     Link::new("R1", "R3").with_cost(50),
//! ];
//!
//! let route = shortest_path_by_cost(&nodes, &links, "R1", "R3").unwrap();
//! assert_eq!(route.path, vec!["R1", "R2", "R3"]);
//! assert_eq!(route.total_cost, 11);
//! ```

pub mod error;
pub mod graph;
pub mod path;
pub mod budget;

pub use error::{Error, Result};
pub use graph::{Node, Link, NodeRef, Topology};
pub use path::{
    shortest_path_by, shortest_path_by_distance, shortest_path_by_cost, path_weight,
    Weight, Route, DistanceRoute, CostRoute,
};
pub use budget::{BudgetConfig, LinkBudget};
