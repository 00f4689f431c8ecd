use gview::delegate::{DelegateDigraph, DelegateUndigraph};
use std::cell::Cell;
use std::collections::{HashSet, VecDeque};

const LIMIT: u32 = 15;

// The complete binary tree on 1..=LIMIT, produced by rule: no vertex or edge
// is ever stored.
fn binary_tree(vertex: &u32) -> Option<Vec<(u32, u32)>> {
    if *vertex == 0 || *vertex > LIMIT {
        return None;
    }
    Some(
        [2 * vertex, 2 * vertex + 1]
            .iter()
            .filter(|&&child| child <= LIMIT)
            .map(|&child| (*vertex, child))
            .collect(),
    )
}

fn binary_tree_incident(vertex: &u32) -> Option<Vec<(u32, u32)>> {
    if *vertex == 0 || *vertex > LIMIT {
        return None;
    }
    let mut edges = vec![];
    if *vertex > 1 {
        edges.push((vertex / 2, *vertex));
    }
    for &child in [2 * vertex, 2 * vertex + 1].iter() {
        if child <= LIMIT {
            edges.push((*vertex, child));
        }
    }
    Some(edges)
}

#[test]
fn test_bfs_over_implicit_digraph() {
    let calls = Cell::new(0);
    let graph = DelegateDigraph::new(|vertex: &u32| {
        calls.set(calls.get() + 1);
        binary_tree(vertex)
    });
    let mut visited: HashSet<u32> = [1].iter().copied().collect();
    let mut queue: VecDeque<u32> = vec![1].into();
    let mut expanded = 0;
    while let Some(vertex) = queue.pop_front() {
        expanded += 1;
        for (_, target) in graph.out_edges(&vertex).unwrap() {
            if visited.insert(target) {
                queue.push_back(target);
            }
        }
    }
    assert_eq!(expanded, LIMIT as usize);
    assert_eq!(visited, (1..=LIMIT).collect::<HashSet<_>>());
    // One lookup per expanded vertex: the traversal cost is bounded by the
    // view's exactly-once invocation contract.
    assert_eq!(calls.get(), LIMIT as usize);
}

#[test]
fn test_bfs_over_implicit_undigraph() {
    let calls = Cell::new(0);
    let graph = DelegateUndigraph::new(|vertex: &u32| {
        calls.set(calls.get() + 1);
        binary_tree_incident(vertex)
    });
    // Starting from a leaf, the undirected interpretation reaches the whole
    // tree back through parent edges.
    let mut visited: HashSet<u32> = [15].iter().copied().collect();
    let mut queue: VecDeque<u32> = vec![15].into();
    while let Some(vertex) = queue.pop_front() {
        for (source, target) in graph.adjacent_edges(&vertex).unwrap() {
            let neighbor = if source == vertex { target } else { source };
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    assert_eq!(visited, (1..=LIMIT).collect::<HashSet<_>>());
    assert_eq!(calls.get(), LIMIT as usize);
    assert!(graph.contains_edge(&15, &7));
    assert!(graph.contains_edge(&7, &15));
    assert!(!graph.contains_edge(&15, &1));
}
