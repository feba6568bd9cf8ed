//! # topopath
//!
//! Shortest-path planning over optical and IP network topologies.
//!
//! topopath pairs a Dijkstra path engine with a tolerant parser for router
//! and LSA dump text. The two never call each other; a caller parses text,
//! picks two nodes, and asks the engine for a route.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! topopath parse ospf-db.txt
//! topopath route ospf-db.txt --from 10.0.0.1 --to 10.0.0.7
//! topopath plan topology.json --from PAR --to MRS --span-km 80
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use topopath::prelude::*;
//!
//! let parsed = parse_topology_text("LSA: R1 -> R2 cost=10\nLSA: R2 -> R3 cost=5");
//! let route = shortest_path_by_cost(&parsed.nodes, &parsed.links, "R1", "R3").unwrap();
//! assert_eq!(route.path, vec!["R1", "R2", "R3"]);
//! assert_eq!(route.total_cost, 15);
//! ```
//!
//! ## Crate Structure
//!
//! - `topopath-core` - Topology model, shortest-path search, link budget
//! - `topopath-parser` - Topology text parser

// Re-export core types
pub use topopath_core::{
    Node, Link, NodeRef, Topology,
    shortest_path_by, shortest_path_by_distance, shortest_path_by_cost, path_weight,
    Weight, Route, DistanceRoute, CostRoute,
    BudgetConfig, LinkBudget,
    Error, Result,
};

// Re-export parser
pub use topopath_parser::{parse_topology_text, ParsedTopology, LineMatch, Rule, RULES};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Node, Link, Topology,
        shortest_path_by_distance, shortest_path_by_cost,
        DistanceRoute, CostRoute,
        BudgetConfig, LinkBudget,
        parse_topology_text, ParsedTopology,
        Error, Result,
    };
}
