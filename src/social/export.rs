use std::collections::{HashMap, HashSet};

use petgraph::dot::{Config, Dot};
use petgraph::graph::NodeIndex;
use petgraph::{EdgeType, Graph};

use crate::social::relation::RelationStore;
use crate::social::user::User;

fn fill<Ty: EdgeType>(relation: &RelationStore, graph: &mut Graph<User, &'static str, Ty>) {
    let mut dot_idxs: HashMap<User, NodeIndex> = HashMap::new();
    for user in relation.nodes() {
        dot_idxs
            .entry(user.clone())
            .or_insert_with(|| graph.add_node(user));
    }

    let mut added = HashSet::new();
    for (source, target) in relation.edges() {
        // An undirected graph draws a mutual follow once.
        if !graph.is_directed() && added.contains(&(target.clone(), source.clone())) {
            continue;
        }
        if let (Some(&a), Some(&b)) = (dot_idxs.get(&source), dot_idxs.get(&target)) {
            graph.add_edge(a, b, "follows");
        }
        added.insert((source, target));
    }
}

/// Graphviz DOT for the follow graph, every known user included.
#[must_use]
pub fn to_dot(relation: &RelationStore, undirected: bool) -> String {
    if undirected {
        let mut graph = Graph::new_undirected();
        fill(relation, &mut graph);
        format!("{}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
    } else {
        let mut graph = Graph::new();
        fill(relation, &mut graph);
        format!("{}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
    }
}
