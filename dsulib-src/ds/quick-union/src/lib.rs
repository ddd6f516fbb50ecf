use index_bounds::{ensure_index, IndexOutOfBounds};

/// Lazy union-find without balancing. Roots satisfy `parent[r] == r`;
/// `union` grafts the root of `p`'s tree under the root of `q`'s tree,
/// so adversarial inputs degenerate the forest to depth n - 1.
///
/// ```
/// # use quick_union::QuickUnion;
/// let mut qu = QuickUnion::new(10);
/// qu.union(0, 1).unwrap();
/// qu.union(1, 2).unwrap();
/// assert_eq!(qu.connected(0, 2), Ok(true));
/// ```
#[derive(Clone, Debug)]
pub struct QuickUnion {
    parent: Vec<usize>,
    components: usize,
}

impl QuickUnion {
    pub fn new(n: usize) -> Self {
        Self { parent: (0..n).collect(), components: n }
    }
    pub fn len(&self) -> usize { self.parent.len() }
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }
    pub fn find(&self, p: usize) -> Result<usize, IndexOutOfBounds> {
        let mut p = ensure_index(p, self.parent.len())?;
        while self.parent[p] != p {
            p = self.parent[p];
        }
        Ok(p)
    }
    pub fn connected(
        &self,
        p: usize,
        q: usize,
    ) -> Result<bool, IndexOutOfBounds> {
        Ok(self.find(p)? == self.find(q)?)
    }
    pub fn union(
        &mut self,
        p: usize,
        q: usize,
    ) -> Result<bool, IndexOutOfBounds> {
        let i = self.find(p)?;
        let j = self.find(q)?;
        if i == j {
            return Ok(false);
        }
        self.parent[i] = j;
        self.components -= 1;
        Ok(true)
    }
    pub fn component_count(&self) -> usize { self.components }
}

#[cfg(test)]
fn path_len(qu: &QuickUnion, mut p: usize) -> usize {
    let mut len = 0;
    while qu.parent[p] != p {
        p = qu.parent[p];
        len += 1;
    }
    len
}

#[test]
fn chain_unions_degenerate_to_a_path() {
    let mut qu = QuickUnion::new(10);
    for i in 0..9 {
        assert_eq!(qu.union(i, i + 1), Ok(true));
    }
    // 0 -> 1 -> ... -> 9
    assert_eq!(path_len(&qu, 0), 9);
    assert_eq!(qu.find(0), Ok(9));
    assert_eq!(qu.connected(0, 9), Ok(true));
    assert_eq!(qu.component_count(), 1);
}

#[test]
fn union_grafts_p_root_under_q_root() {
    let mut qu = QuickUnion::new(5);
    qu.union(0, 1).unwrap();
    qu.union(2, 3).unwrap();
    qu.union(0, 2).unwrap();
    assert_eq!(qu.parent[1], 3);
    assert_eq!(qu.find(0), Ok(3));
    assert_eq!(qu.connected(1, 2), Ok(true));
    assert_eq!(qu.connected(1, 4), Ok(false));
}

#[test]
fn union_is_idempotent() {
    let mut qu = QuickUnion::new(4);
    assert_eq!(qu.union(0, 1), Ok(true));
    let snapshot = qu.clone();
    assert_eq!(qu.union(0, 1), Ok(false));
    assert_eq!(qu.union(1, 0), Ok(false));
    assert_eq!(qu.parent, snapshot.parent);
    assert_eq!(qu.component_count(), snapshot.component_count());
}

#[test]
fn out_of_bounds_leaves_structure_untouched() {
    let mut qu = QuickUnion::new(10);
    let err = IndexOutOfBounds { index: 50, len: 10 };
    assert_eq!(qu.union(5, 50), Err(err));
    assert_eq!(qu.connected(50, 5), Err(err));
    assert_eq!(qu.find(50), Err(err));
    assert_eq!(qu.component_count(), 10);
    assert_eq!(qu.parent, (0..10).collect::<Vec<_>>());
}

#[test]
fn empty_universe() {
    let qu = QuickUnion::new(0);
    assert!(qu.is_empty());
    assert_eq!(qu.component_count(), 0);
    assert!(qu.find(0).is_err());
}
