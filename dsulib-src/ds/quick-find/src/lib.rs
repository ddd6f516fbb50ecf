use index_bounds::{ensure_index, IndexOutOfBounds};

/// Eager union-find. `find` is O(1), `union` rewrites the whole label
/// array, O(n).
///
/// ```
/// # use quick_find::QuickFind;
/// let mut qf = QuickFind::new(10);
/// assert_eq!(qf.connected(0, 1), Ok(false));
/// qf.union(0, 1).unwrap();
/// assert_eq!(qf.connected(0, 1), Ok(true));
/// ```
#[derive(Clone, Debug)]
pub struct QuickFind {
    id: Vec<usize>,
    components: usize,
}

impl QuickFind {
    pub fn new(n: usize) -> Self {
        Self { id: (0..n).collect(), components: n }
    }
    pub fn len(&self) -> usize { self.id.len() }
    pub fn is_empty(&self) -> bool { self.id.is_empty() }
    pub fn find(&self, p: usize) -> Result<usize, IndexOutOfBounds> {
        let p = ensure_index(p, self.id.len())?;
        Ok(self.id[p])
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
        let old = self.find(p)?;
        let new = self.find(q)?;
        if old == new {
            return Ok(false);
        }
        // every slot labeled `old` is rewritten exactly once
        for label in &mut self.id {
            if *label == old {
                *label = new;
            }
        }
        self.components -= 1;
        Ok(true)
    }
    pub fn component_count(&self) -> usize { self.components }
}

#[test]
fn fresh_universe_is_all_singletons() {
    let qf = QuickFind::new(10);
    assert_eq!(qf.len(), 10);
    assert_eq!(qf.component_count(), 10);
    assert_eq!(qf.connected(0, 1), Ok(false));
    for i in 0..10 {
        assert_eq!(qf.find(i), Ok(i));
        assert_eq!(qf.connected(i, i), Ok(true));
    }
}

#[test]
fn union_relabels_the_whole_component() {
    let mut qf = QuickFind::new(6);
    assert_eq!(qf.union(0, 1), Ok(true));
    assert_eq!(qf.union(2, 3), Ok(true));
    assert_eq!(qf.union(1, 3), Ok(true));
    let label = qf.find(3).unwrap();
    for i in [0, 1, 2, 3] {
        assert_eq!(qf.find(i), Ok(label));
    }
    assert_eq!(qf.connected(0, 4), Ok(false));
    assert_eq!(qf.component_count(), 3);
}

#[test]
fn union_is_idempotent() {
    let mut qf = QuickFind::new(4);
    assert_eq!(qf.union(0, 1), Ok(true));
    let snapshot = qf.clone();
    assert_eq!(qf.union(0, 1), Ok(false));
    assert_eq!(qf.union(1, 0), Ok(false));
    assert_eq!(qf.id, snapshot.id);
    assert_eq!(qf.component_count(), snapshot.component_count());
}

#[test]
fn self_union_is_a_no_op() {
    let mut qf = QuickFind::new(10);
    assert_eq!(qf.union(3, 3), Ok(false));
    assert_eq!(qf.component_count(), 10);
}

#[test]
fn out_of_bounds_leaves_structure_untouched() {
    let mut qf = QuickFind::new(10);
    let err = IndexOutOfBounds { index: 50, len: 10 };
    assert_eq!(qf.union(5, 50), Err(err));
    assert_eq!(qf.union(50, 5), Err(err));
    assert_eq!(qf.connected(50, 5), Err(err));
    assert_eq!(qf.find(50), Err(err));
    assert_eq!(qf.component_count(), 10);
    for i in 0..10 {
        assert_eq!(qf.find(i), Ok(i));
    }
}

#[test]
fn empty_universe() {
    let mut qf = QuickFind::new(0);
    assert!(qf.is_empty());
    assert_eq!(qf.component_count(), 0);
    assert_eq!(qf.find(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
    assert!(qf.union(0, 0).is_err());
}
