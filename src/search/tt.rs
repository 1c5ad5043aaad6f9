#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

/// Maximum number of moves kept in a stored best line.
pub const LINE_LEN: usize = 4;

/// Best-first list of moves that raised alpha at a node, newest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BestLine<M> {
    moves: [Option<M>; LINE_LEN],
}

impl<M: Copy + Eq> Default for BestLine<M> {
    fn default() -> Self { Self { moves: [None; LINE_LEN] } }
}

impl<M: Copy + Eq> BestLine<M> {
    pub fn new() -> Self { Self::default() }

    /// Inserts `m` at the front; an existing copy moves up, the tail drops off.
    pub fn push_front(&mut self, m: M) {
        let end = self.moves.iter().position(|s| *s == Some(m)).unwrap_or(LINE_LEN - 1);
        for i in (1..=end).rev() {
            self.moves[i] = self.moves[i - 1];
        }
        self.moves[0] = Some(m);
    }

    pub fn push_back(&mut self, m: M) {
        if self.contains(m) { return; }
        if let Some(slot) = self.moves.iter_mut().find(|s| s.is_none()) {
            *slot = Some(m);
        }
    }

    pub fn first(&self) -> Option<M> { self.moves[0] }

    pub fn contains(&self, m: M) -> bool { self.moves.contains(&Some(m)) }

    pub fn iter(&self) -> impl Iterator<Item = M> + '_ {
        self.moves.iter().map_while(|s| *s)
    }

    pub fn len(&self) -> usize { self.iter().count() }

    pub fn is_empty(&self) -> bool { self.moves[0].is_none() }
}

#[derive(Clone, Copy, Debug)]
pub struct Entry<M> {
    pub key: u64,
    pub depth: i32,
    pub score: i32,
    pub bound: Bound,
    pub line: BestLine<M>,
    pub gen: u32,
}

const DEFAULT_WAYS: usize = 4;
pub const DEFAULT_CAPACITY: usize = 1 << 16;

#[derive(Clone, Copy)]
struct Bucket<M> {
    slots: [Option<Entry<M>>; DEFAULT_WAYS],
}

impl<M: Copy> Default for Bucket<M> {
    fn default() -> Self { Self { slots: [None; DEFAULT_WAYS] } }
}

/// Bounded, set-associative transposition table.
///
/// Owned by a single search; mutation goes through `&mut self`.
pub struct Tt<M> {
    buckets: Vec<Bucket<M>>,
    gen: u32,
}

impl<M: Copy + Eq> Default for Tt<M> {
    fn default() -> Self { Self::with_capacity(DEFAULT_CAPACITY) }
}

impl<M: Copy + Eq> Tt<M> {
    pub fn new() -> Self { Self { buckets: Vec::new(), gen: 0 } }

    pub fn with_capacity(entries: usize) -> Self {
        let mut t = Self::new();
        t.set_capacity_entries(entries);
        t
    }

    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(|b| *b = Bucket::default());
        self.gen = 0;
    }

    fn bucket_index(&self, key: u64) -> usize {
        let mixed = key ^ (key >> 32);
        (mixed as usize) % self.buckets.len().max(1)
    }

    pub fn get(&self, key: u64) -> Option<Entry<M>> {
        if self.buckets.is_empty() { return None; }
        let b = &self.buckets[self.bucket_index(key)];
        b.slots.iter().flatten().find(|e| e.key == key).copied()
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(|b| b.slots.iter().flatten().count()).sum()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn capacity(&self) -> usize { self.buckets.len() * DEFAULT_WAYS }

    pub fn set_capacity_entries(&mut self, cap: usize) {
        let entries = cap.max(DEFAULT_WAYS);
        let buckets = (entries + DEFAULT_WAYS - 1) / DEFAULT_WAYS;
        self.buckets.clear();
        self.buckets.resize_with(buckets, Bucket::default);
    }

    pub fn set_capacity_mb(&mut self, mb: usize) {
        let per_entry = std::mem::size_of::<Option<Entry<M>>>().max(1);
        let entries = (mb.saturating_mul(1024 * 1024) / per_entry).max(DEFAULT_WAYS);
        self.set_capacity_entries(entries);
    }

    pub fn put(&mut self, e: Entry<M>) {
        if self.buckets.is_empty() { return; }
        let cur_gen = self.gen;
        let idx = self.bucket_index(e.key);
        let bucket = &mut self.buckets[idx];
        let mut e = e;
        e.gen = cur_gen;
        // Same key: replace if at least as deep, or if the stored entry is stale
        for slot in bucket.slots.iter_mut() {
            if let Some(cur) = *slot {
                if cur.key == e.key {
                    if e.depth >= cur.depth || cur.gen != cur_gen { *slot = Some(e); }
                    return;
                }
            }
        }
        if let Some(slot) = bucket.slots.iter_mut().find(|s| s.is_none()) {
            *slot = Some(e);
            return;
        }
        // Evict stale entries first, then the shallowest
        let mut victim = 0usize;
        let mut best_key = (true, i32::MAX);
        for (i, slot) in bucket.slots.iter().enumerate() {
            if let Some(cur) = slot {
                let key = (cur.gen == cur_gen, cur.depth);
                if key < best_key { best_key = key; victim = i; }
            }
        }
        bucket.slots[victim] = Some(e);
    }

    pub fn bump_generation(&mut self) { self.gen = self.gen.wrapping_add(1); }

    pub fn generation(&self) -> u32 { self.gen }
}
