use crate::rules::{classify, LineMatch};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use topopath_core::Link;
use tracing::{debug, trace};

/// Graph extracted from free text, plus per-line diagnostics.
///
/// `matched` and `skipped` hold the original lines verbatim, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedTopology {
    /// Every endpoint of a matched line, first-seen order, no duplicates
    pub nodes: Vec<String>,
    /// At most one link per unordered endpoint pair; the first occurrence wins
    pub links: Vec<Link>,
    pub matched: Vec<String>,
    pub skipped: Vec<String>,
}

impl ParsedTopology {
    /// The matched lines joined back into text
    pub fn matched_text(&self) -> String {
        self.matched.join("\n")
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n == id)
    }
}

/// Extract a best-effort topology from router or LSA dump text.
///
/// Blank lines are ignored. Every other line is either matched by one of the
/// [`RULES`](crate::rules::RULES), silently dropped (a self-pair dump row),
/// or recorded as skipped. A repeated endpoint pair still counts as matched
/// but adds no second link.
///
/// ```rust
/// use topopath_parser::parse_topology_text;
///
/// let parsed = parse_topology_text("LSA: A -> B cost=5\nLSA: B -> C\nshow ip ospf");
/// assert_eq!(parsed.nodes, vec!["A", "B", "C"]);
/// assert_eq!(parsed.links[1].cost, Some(1));
/// assert_eq!(parsed.skipped, vec!["show ip ospf"]);
/// ```
pub fn parse_topology_text(text: &str) -> ParsedTopology {
    let mut out = ParsedTopology::default();
    let mut seen_nodes: AHashSet<String> = AHashSet::new();
    let mut seen_pairs: AHashSet<(String, String)> = AHashSet::new();

    for raw in text.split('\n') {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match classify(line) {
            Some((rule, LineMatch::Link { a, b, cost })) => {
                trace!(rule, a = %a, b = %b, cost, "line matched");

                for id in [&a, &b] {
                    if seen_nodes.insert(id.clone()) {
                        out.nodes.push(id.clone());
                    }
                }

                let link = Link::new(a, b).with_cost(cost);
                let (lo, hi) = link.pair_key();
                let key = (lo.to_string(), hi.to_string());
                if seen_pairs.insert(key) {
                    out.links.push(link);
                } else {
                    trace!(rule, "duplicate pair dropped");
                }
                out.matched.push(raw.to_string());
            }
            Some((rule, LineMatch::Rejected)) => {
                trace!(rule, line, "line rejected");
            }
            None => out.skipped.push(raw.to_string()),
        }
    }

    debug!(
        nodes = out.nodes.len(),
        links = out.links.len(),
        matched = out.matched.len(),
        skipped = out.skipped.len(),
        "parsed topology text"
    );
    out
}
