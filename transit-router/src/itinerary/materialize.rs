//! Path to edge materialization.

use std::collections::HashMap;

use crate::domain::{Edge, NodeId, Path};
use crate::graph::{GraphStore, StoreError};

/// Fetch the edges along `path`, in path order.
///
/// The store returns pair matches in no particular order, so the order is
/// rebuilt from the path. When several edges connect the same pair the one
/// with the lowest id is used; a pair with no edge is skipped.
pub async fn materialize_edges<S: GraphStore>(store: &S, path: &Path) -> Result<Vec<Edge>, StoreError> {
    if path.hop_count() == 0 {
        return Ok(Vec::new());
    }

    let (froms, tos) = path.unzip_pairs();
    let rows = store.edges_for_pairs(&froms, &tos).await?;

    let mut by_pair: HashMap<(NodeId, NodeId), Edge> = HashMap::with_capacity(rows.len());
    for edge in rows {
        match by_pair.get(&edge.endpoints()) {
            Some(existing) if existing.id <= edge.id => {}
            _ => {
                by_pair.insert(edge.endpoints(), edge);
            }
        }
    }

    Ok(path
        .pairs()
        .filter_map(|pair| by_pair.get(&pair).cloned())
        .collect())
}
