//! # topopath Parser
//!
//! Tolerant, line-oriented extraction of a topology graph from loosely
//! structured router output.
//!
//! Each non-blank line is run through an ordered rule table and the first
//! rule that recognises it wins:
//!
//! 1. `lsa_arrow` - annotated links such as `LSA: R1 -> R2 cost=10`
//! 2. `dotted_quad_pair` - `show ip ospf database` style rows with two
//!    address columns, e.g. `10.0.0.1  10.0.0.2  1129 0x8000007a ...`
//!
//! Lines no rule recognises are kept in [`ParsedTopology::skipped`] for
//! display, so a user can see what the parser did not understand.
//!
//! ```rust
//! use topopath_parser::parse_topology_text;
//!
//! let parsed = parse_topology_text(
//!     "10.199.242.7    10.199.242.14   1129 0x8000007a 0x960e 10.199.242.7/32",
//! );
//! assert_eq!(parsed.links.len(), 1);
//! assert_eq!(parsed.links[0].cost, Some(1129));
//! ```

pub mod rules;
pub mod parse;

pub use parse::{parse_topology_text, ParsedTopology};
pub use rules::{classify, LineMatch, Rule, RULES};
