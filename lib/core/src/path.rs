use crate::graph::{Link, NodeRef};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use tracing::trace;

/// Edge weight usable by the shortest-path search.
///
/// Implementors must be non-negative; the search relies on it.
pub trait Weight: Copy + PartialOrd + Debug {
    const ZERO: Self;

    /// Extend a path weight by one hop
    fn combine(self, other: Self) -> Self;

    /// False for a total that stands for "infinitely far"
    fn is_reachable(self) -> bool;
}

impl Weight for f64 {
    const ZERO: Self = 0.0;

    #[inline]
    fn combine(self, other: Self) -> Self {
        self + other
    }

    #[inline]
    fn is_reachable(self) -> bool {
        self.is_finite()
    }
}

impl Weight for u64 {
    const ZERO: Self = 0;

    #[inline]
    fn combine(self, other: Self) -> Self {
        self.saturating_add(other)
    }

    #[inline]
    fn is_reachable(self) -> bool {
        true
    }
}

/// A path from source to destination (both inclusive) and its total weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route<W> {
    pub path: Vec<String>,
    pub total: W,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceRoute {
    pub path: Vec<String>,
    pub total_distance: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRoute {
    pub path: Vec<String>,
    pub total_cost: u64,
}

/// Frontier entry keyed by tentative distance
#[derive(Clone, Copy)]
struct Candidate<W> {
    idx: usize,
    dist: W,
}

impl<W: Weight> PartialEq for Candidate<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for Candidate<W> {}

impl<W: Weight> Ord for Candidate<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap: smaller distance first, then earlier node in input order
        other
            .dist
            .partial_cmp(&self.dist)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl<W: Weight> PartialOrd for Candidate<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra single-source single-destination search over an undirected graph.
///
/// `weight` reads the weight of a link; every link contributes an arc in both
/// directions. Links touching a node that is not in `nodes` are ignored, and
/// a `source` or `destination` missing from `nodes` yields `None`.
///
/// Among frontier nodes with equal tentative distance, the one listed first
/// in `nodes` is settled first, so results are deterministic for a given
/// input order. The search stops as soon as the destination is settled.
/// A path whose total overflows to infinity counts as unreachable.
pub fn shortest_path_by<N, W, F>(
    nodes: &[N],
    links: &[Link],
    source: &str,
    destination: &str,
    weight: F,
) -> Option<Route<W>>
where
    N: NodeRef,
    W: Weight,
    F: Fn(&Link) -> W,
{
    let mut index: AHashMap<&str, usize> = AHashMap::with_capacity(nodes.len());
    let mut ids: Vec<&str> = Vec::with_capacity(nodes.len());
    for node in nodes {
        let id = node.node_id();
        if !index.contains_key(id) {
            index.insert(id, ids.len());
            ids.push(id);
        }
    }

    let src = *index.get(source)?;
    let dst = *index.get(destination)?;

    let mut adjacency: Vec<Vec<(usize, W)>> = vec![Vec::new(); ids.len()];
    for link in links {
        let (Some(&a), Some(&b)) = (index.get(link.a.as_str()), index.get(link.b.as_str())) else {
            continue;
        };
        let w = weight(link);
        adjacency[a].push((b, w));
        adjacency[b].push((a, w));
    }

    let mut dist: Vec<Option<W>> = vec![None; ids.len()];
    let mut prev: Vec<Option<usize>> = vec![None; ids.len()];
    let mut visited = vec![false; ids.len()];
    let mut heap = BinaryHeap::new();

    dist[src] = Some(W::ZERO);
    heap.push(Candidate { idx: src, dist: W::ZERO });

    // An empty heap means every remaining node is at infinite distance
    while let Some(Candidate { idx: u, dist: du }) = heap.pop() {
        if visited[u] {
            continue;
        }
        visited[u] = true;
        if u == dst {
            break;
        }

        for &(v, w) in &adjacency[u] {
            if visited[v] {
                continue;
            }
            let candidate = du.combine(w);
            if !candidate.is_reachable() {
                continue;
            }
            let improves = match dist[v] {
                Some(dv) => candidate < dv,
                None => true,
            };
            if improves {
                dist[v] = Some(candidate);
                prev[v] = Some(u);
                heap.push(Candidate { idx: v, dist: candidate });
            }
        }
    }

    let Some(total) = dist[dst] else {
        trace!(source, destination, "destination unreachable");
        return None;
    };

    let mut path = vec![ids[dst].to_string()];
    let mut cur = dst;
    while let Some(p) = prev[cur] {
        path.push(ids[p].to_string());
        cur = p;
    }
    path.reverse();

    Some(Route { path, total })
}

/// Shortest path by physical fibre length.
///
/// Links without a usable `length_km` count as one kilometre.
///
/// ```rust
/// use topopath_core::{shortest_path_by_distance, Link};
///
/// let nodes = ["A", "B", "C"];
/// let links = vec![
///     Link::new("A", "B").with_length(4.0),
///     Link::new("B", "C").with_length(4.0),
///     Link::new("A", "C").with_length(10.0),
/// ];
/// let route = shortest_path_by_distance(&nodes, &links, "A", "C").unwrap();
/// assert_eq!(route.path, vec!["A", "B", "C"]);
/// assert_eq!(route.total_distance, 8.0);
/// ```
pub fn shortest_path_by_distance<N: NodeRef>(
    nodes: &[N],
    links: &[Link],
    source: &str,
    destination: &str,
) -> Option<DistanceRoute> {
    shortest_path_by(nodes, links, source, destination, Link::distance_weight).map(|r| {
        DistanceRoute {
            path: r.path,
            total_distance: r.total,
        }
    })
}

/// Shortest path by administrative routing cost.
///
/// Links without a cost count as cost `1`.
pub fn shortest_path_by_cost<N: NodeRef>(
    nodes: &[N],
    links: &[Link],
    source: &str,
    destination: &str,
) -> Option<CostRoute> {
    shortest_path_by(nodes, links, source, destination, Link::cost_weight).map(|r| CostRoute {
        path: r.path,
        total_cost: r.total,
    })
}

/// Total weight of walking `path` over `links`.
///
/// Each hop uses the lightest link joining the two nodes. Returns `None` for
/// an empty path or when some hop has no link.
pub fn path_weight<S, W, F>(links: &[Link], path: &[S], weight: F) -> Option<W>
where
    S: AsRef<str>,
    W: Weight,
    F: Fn(&Link) -> W,
{
    if path.is_empty() {
        return None;
    }

    let mut total = W::ZERO;
    for hop in path.windows(2) {
        let (x, y) = (hop[0].as_ref(), hop[1].as_ref());
        let mut best: Option<W> = None;
        for link in links.iter().filter(|l| l.connects(x, y)) {
            let w = weight(link);
            if best.map_or(true, |b| w < b) {
                best = Some(w);
            }
        }
        total = total.combine(best?);
    }
    Some(total)
}
