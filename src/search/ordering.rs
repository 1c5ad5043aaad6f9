use crate::board::Rules;

/// Two killer slots per ply, most recent first.
#[derive(Clone, Debug)]
pub struct KillerTable<M> {
    slots: Vec<[Option<M>; 2]>,
}

impl<M: Copy + Eq> Default for KillerTable<M> {
    fn default() -> Self { Self { slots: Vec::new() } }
}

impl<M: Copy + Eq> KillerTable<M> {
    pub fn new() -> Self { Self::default() }

    pub fn clear(&mut self) { self.slots.clear(); }

    pub fn update(&mut self, ply: usize, m: M) {
        if ply >= self.slots.len() {
            self.slots.resize(ply + 1, [None, None]);
        }
        let slot = &mut self.slots[ply];
        if slot[0] == Some(m) { return; }
        slot[1] = slot[0];
        slot[0] = Some(m);
    }

    pub fn at(&self, ply: usize) -> [Option<M>; 2] {
        self.slots.get(ply).copied().unwrap_or([None, None])
    }
}

/// Builds the candidate list for one node.
///
/// Order: cached line, killers, promotions and captures, then every remaining
/// move when `include_quiet` holds (or when nothing else was admitted).
/// Hints that are not legal here are dropped. At quiescence nodes hints are
/// admitted only if they are tactical, so they reorder but never widen the set.
pub fn order_moves<R, H, K>(
    pos: &R,
    legal: &[R::Move],
    cached: H,
    killers: K,
    include_quiet: bool,
) -> Vec<R::Move>
where
    R: Rules,
    H: IntoIterator<Item = R::Move>,
    K: IntoIterator<Item = R::Move>,
{
    let tactical = |m: R::Move| pos.is_promotion(m) || pos.is_capture(m);
    let mut out: Vec<R::Move> = Vec::with_capacity(legal.len());

    for m in cached.into_iter().chain(killers) {
        if legal.contains(&m) && (include_quiet || tactical(m)) && !out.contains(&m) {
            out.push(m);
        }
    }
    for &m in legal {
        if tactical(m) && !out.contains(&m) { out.push(m); }
    }
    if include_quiet || out.is_empty() {
        for &m in legal {
            if !out.contains(&m) { out.push(m); }
        }
    }
    out
}
