use std::fmt;

use index_bounds::{ensure_index, IndexOutOfBounds};

/// Union-find with union by size and path halving. Both `union` and
/// `find` run in amortized O(log n) or better across a sequence of
/// operations.
///
/// `find` and `connected` take `&mut self`: path halving rewrites
/// parent pointers during the query, and keeping the compression
/// behind exclusive access means sharing an instance across threads
/// requires a lock around the whole structure, which is the only
/// sound way to use it anyway (`parent` and `size` must be mutated as
/// one unit).
///
/// ```
/// # use union_find::UnionFind;
/// let mut uf = UnionFind::new(10);
/// uf.union(0, 1).unwrap();
/// uf.union(1, 2).unwrap();
/// assert_eq!(uf.connected(0, 2), Ok(true));
/// assert_eq!(uf.component_count(), 8);
/// ```
#[derive(Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self { parent: (0..n).collect(), size: vec![1; n], components: n }
    }
    pub fn len(&self) -> usize { self.parent.len() }
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }
    pub fn find(&mut self, p: usize) -> Result<usize, IndexOutOfBounds> {
        let mut p = ensure_index(p, self.parent.len())?;
        while self.parent[p] != p {
            self.parent[p] = self.parent[self.parent[p]];
            p = self.parent[p];
        }
        Ok(p)
    }
    pub fn connected(
        &mut self,
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
        // size tie: the root of p's tree goes under the root of q's
        let (child, par) =
            if self.size[i] <= self.size[j] { (i, j) } else { (j, i) };
        self.parent[child] = par;
        self.size[par] += self.size[child];
        self.components -= 1;
        Ok(true)
    }
    pub fn component_count(&self) -> usize { self.components }
    pub fn component_size(
        &mut self,
        p: usize,
    ) -> Result<usize, IndexOutOfBounds> {
        let root = self.find(p)?;
        Ok(self.size[root])
    }
    pub fn partition(&self) -> Vec<Vec<usize>> {
        let n = self.parent.len();
        let mut ptn = vec![vec![]; n];
        for i in 0..n {
            let mut root = i;
            while self.parent[root] != root {
                root = self.parent[root];
            }
            ptn[root].push(i);
        }
        ptn
    }
}

struct Members<'a>(&'a [usize]);
impl fmt::Debug for Members<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}

impl fmt::Debug for UnionFind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ptn = self.partition();
        f.debug_map()
            .entries(
                (0..self.parent.len())
                    .filter(|&i| !ptn[i].is_empty())
                    .map(|i| (i, Members(&ptn[i]))),
            )
            .finish()
    }
}

impl fmt::Display for UnionFind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ptn = self.partition();
        f.debug_set()
            .entries(
                ptn.iter().filter(|set| !set.is_empty()).map(|set| Members(set)),
            )
            .finish()
    }
}

#[cfg(test)]
fn path_len(uf: &UnionFind, mut p: usize) -> usize {
    let mut len = 0;
    while uf.parent[p] != p {
        p = uf.parent[p];
        len += 1;
    }
    len
}

#[test]
fn fresh_universe_is_all_singletons() {
    let mut uf = UnionFind::new(10);
    assert_eq!(uf.connected(0, 1), Ok(false));
    assert_eq!(uf.component_count(), 10);
    for i in 0..10 {
        assert_eq!(uf.find(i), Ok(i));
        assert_eq!(uf.component_size(i), Ok(1));
    }
}

#[test]
fn union_schedule_connects_everything() {
    let mut uf = UnionFind::new(10);
    let schedule = [
        (4, 3),
        (3, 8),
        (6, 5),
        (9, 4),
        (2, 1),
        (5, 0),
        (7, 2),
        (6, 1),
        (7, 3),
    ];
    for (p, q) in schedule {
        assert_eq!(uf.union(p, q), Ok(true));
    }
    assert_eq!(uf.connected(0, 9), Ok(true));
    assert_eq!(uf.component_count(), 1);
    assert_eq!(uf.component_size(0), Ok(10));
}

#[test]
fn self_union_is_a_no_op() {
    let mut uf = UnionFind::new(10);
    assert_eq!(uf.union(3, 3), Ok(false));
    assert_eq!(uf.component_count(), 10);
}

#[test]
fn redundant_union_does_not_double_count_sizes() {
    let mut uf = UnionFind::new(4);
    uf.union(0, 1).unwrap();
    uf.union(2, 3).unwrap();
    uf.union(0, 3).unwrap();
    for _ in 0..3 {
        assert_eq!(uf.union(1, 2), Ok(false));
        assert_eq!(uf.component_size(0), Ok(4));
        assert_eq!(uf.component_count(), 1);
    }
}

#[test]
fn root_sizes_sum_to_n() {
    let mut uf = UnionFind::new(10);
    let check = |uf: &UnionFind| {
        let total: usize = (0..10)
            .filter(|&i| uf.parent[i] == i)
            .map(|i| uf.size[i])
            .sum();
        assert_eq!(total, 10);
    };
    check(&uf);
    for (p, q) in [(4, 3), (3, 8), (6, 5), (9, 4), (2, 1), (2, 1)] {
        uf.union(p, q).unwrap();
        check(&uf);
    }
    let members: usize = uf.partition().iter().map(|set| set.len()).sum();
    assert_eq!(members, 10);
}

#[test]
fn out_of_bounds_leaves_structure_untouched() {
    let mut uf = UnionFind::new(10);
    let err = IndexOutOfBounds { index: 50, len: 10 };
    assert_eq!(uf.union(5, 50), Err(err));
    assert_eq!(uf.union(50, 5), Err(err));
    assert_eq!(uf.connected(5, 50), Err(err));
    assert_eq!(uf.find(50), Err(err));
    assert_eq!(uf.component_size(50), Err(err));
    assert_eq!(uf.component_count(), 10);
    assert_eq!(uf.parent, (0..10).collect::<Vec<_>>());
    assert_eq!(uf.size, vec![1; 10]);
}

#[test]
fn empty_universe() {
    let mut uf = UnionFind::new(0);
    assert!(uf.is_empty());
    assert_eq!(uf.component_count(), 0);
    assert_eq!(uf.find(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
    assert_eq!(uf.partition(), Vec::<Vec<usize>>::new());
    assert_eq!(format!("{uf}"), "{}");
}

#[test]
fn path_halving_shortens_paths_monotonically() {
    let mut uf = UnionFind::new(8);
    // perfectly balanced merges; every union hits the size tie-break
    uf.union(0, 1).unwrap();
    uf.union(2, 3).unwrap();
    uf.union(1, 3).unwrap();
    uf.union(4, 5).unwrap();
    uf.union(6, 7).unwrap();
    uf.union(5, 7).unwrap();
    uf.union(3, 7).unwrap();
    // 0 -> 1 -> 3 -> 7
    assert_eq!(path_len(&uf, 0), 3);
    assert_eq!(uf.find(0), Ok(7));
    assert_eq!(path_len(&uf, 0), 2);
    assert_eq!(uf.find(0), Ok(7));
    assert_eq!(path_len(&uf, 0), 1);
    assert_eq!(uf.find(0), Ok(7));
    assert_eq!(path_len(&uf, 0), 1);
}

#[test]
fn weighting_keeps_chains_shallow() {
    let n = 1024;
    let mut uf = UnionFind::new(n);
    for i in 0..n - 1 {
        uf.union(i, i + 1).unwrap();
    }
    // log2(1024) = 10; quick-union would produce a path of length 1023
    let longest = (0..n).map(|i| path_len(&uf, i)).max().unwrap();
    assert!(longest <= 10, "longest path {longest} exceeds log2(n)");
    assert_eq!(uf.component_count(), 1);
}

#[test]
fn equivalence_relation() {
    let mut uf = UnionFind::new(10);
    for (p, q) in [(4, 3), (6, 5), (9, 4), (2, 1)] {
        uf.union(p, q).unwrap();
    }
    for p in 0..10 {
        assert_eq!(uf.connected(p, p), Ok(true));
        for q in 0..10 {
            assert_eq!(uf.connected(p, q), uf.connected(q, p));
            for r in 0..10 {
                if uf.connected(p, q).unwrap() && uf.connected(q, r).unwrap()
                {
                    assert_eq!(uf.connected(p, r), Ok(true));
                }
            }
        }
    }
}

#[test]
fn sanity_check_against_quick_find() {
    use rand::{
        distributions::{Distribution, Uniform},
        SeedableRng,
    };
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::from_seed([
        0xD7, 0x21, 0x4A, 0x9C, 0x03, 0xE8, 0xB5, 0x6F, 0x92, 0x0D, 0xC1,
        0x7E, 0x38, 0xAB, 0x54, 0x10, 0x6B, 0xF2, 0x85, 0x9E, 0x47, 0x0C,
        0xD3, 0x61, 0xBA, 0x2F, 0x98, 0x05, 0xEC, 0x73, 0x1A, 0x46,
    ]);

    let n = 30;
    let mut actual = UnionFind::new(n);
    let mut expected = quick_find::QuickFind::new(n);

    let between = Uniform::from(0..n);
    for _ in 0..200 {
        let p = between.sample(&mut rng);
        let q = between.sample(&mut rng);
        assert_eq!(actual.union(p, q), expected.union(p, q));
        assert_eq!(actual.component_count(), expected.component_count());
        for i in 0..n {
            for j in 0..n {
                assert_eq!(actual.connected(i, j), expected.connected(i, j));
            }
        }
    }
}

#[test]
fn debug_fmt() {
    let mut uf = UnionFind::new(8);
    uf.union(1, 5).unwrap();
    uf.union(2, 4).unwrap();
    uf.union(0, 2).unwrap();
    uf.union(1, 6).unwrap();
    uf.union(6, 7).unwrap();
    assert_eq!(format!("{uf}"), "{{3}, {0, 2, 4}, {1, 5, 6, 7}}");
    assert_eq!(
        format!("{uf:?}"),
        "{3: {3}, 4: {0, 2, 4}, 5: {1, 5, 6, 7}}"
    );
}
