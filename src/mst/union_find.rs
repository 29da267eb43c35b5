//! Union-Find (Disjoint Set) over the dense vertex indices of one snapshot.
//!
//! Supports:
//! - `find(x)`: representative of x's component, compressing the path
//! - `union(x, y)`: merge the components containing x and y
//!
//! Union by rank plus path compression gives near O(1) amortized operations.
//! An instance belongs to exactly one engine run.

use crate::graph::ids::{ComponentId, VertexIdx};
use crate::graph::index_vec::IndexVec;

#[derive(Debug, Clone)]
pub struct UnionFind {
    /// parent[v] == v for roots.
    parent: IndexVec<VertexIdx, VertexIdx>,
    /// Upper bound on subtree height; only consulted to pick the union direction.
    rank: IndexVec<VertexIdx, u32>,
    num_components: usize,
}

impl UnionFind {
    /// `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: IndexVec::from_fn(n, |idx| idx),
            rank: IndexVec::from_elem(0, n),
            num_components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn num_components(&self) -> usize {
        self.num_components
    }

    pub fn rank(&self, x: VertexIdx) -> u32 {
        self.rank[x]
    }

    /// Representative of `x`'s component.
    ///
    /// Walks to the root first, then repoints every node on the walked path
    /// directly at the root.
    pub fn find(&mut self, x: VertexIdx) -> VertexIdx {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merges the components of `x` and `y` by rank.
    ///
    /// On equal ranks `y`'s root goes under `x`'s root, whose rank grows by
    /// one. Returns `false` when both were already in the same component.
    pub fn union(&mut self, x: VertexIdx, y: VertexIdx) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        let rx = self.rank[root_x];
        let ry = self.rank[root_y];

        if rx < ry {
            self.parent[root_x] = root_y;
        } else if rx > ry {
            self.parent[root_y] = root_x;
        } else {
            self.parent[root_y] = root_x;
            self.rank[root_x] += 1;
        }

        self.num_components -= 1;
        true
    }

    pub fn connected(&mut self, x: VertexIdx, y: VertexIdx) -> bool {
        self.find(x) == self.find(y)
    }

    /// Component label of every vertex, numbered 0, 1, 2, ... in order of
    /// first appearance.
    pub fn component_ids(&mut self) -> IndexVec<VertexIdx, ComponentId> {
        let roots: IndexVec<VertexIdx, VertexIdx> =
            self.parent.indices().map(|idx| self.find(idx)).collect();
        number_components(&roots)
    }

    pub fn component_size(&mut self, x: VertexIdx) -> usize {
        let root = self.find(x);
        self.parent
            .indices()
            .filter(|&idx| self.find(idx) == root)
            .count()
    }
}

/// Dense labels for a root assignment, numbered by first appearance.
pub(crate) fn number_components(
    roots: &IndexVec<VertexIdx, VertexIdx>,
) -> IndexVec<VertexIdx, ComponentId> {
    let mut by_root: IndexVec<VertexIdx, Option<ComponentId>> =
        IndexVec::from_elem(None, roots.len());
    let mut next_id = 0u32;

    roots
        .iter()
        .map(|&root| {
            *by_root[root].get_or_insert_with(|| {
                let id = ComponentId::new(next_id);
                next_id += 1;
                id
            })
        })
        .collect()
}
