use crate::pixel::Pixel;

/// Assignment of source pixels to target positions: `mapping[i]` is the
/// source index drawn at target position `i`. Always a permutation of `0..N`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mapping(Vec<usize>);

impl Mapping {
    /// Pair up the two images rank by rank: the source pixel with the r-th
    /// smallest color key goes where the target's r-th smallest key sits.
    pub fn rank_aligned(src_order: &[usize], tgt_order: &[usize]) -> Self {
        debug_assert_eq!(src_order.len(), tgt_order.len());
        let mut map = vec![0usize; tgt_order.len()];
        for (&t, &s) in tgt_order.iter().zip(src_order.iter()) {
            map[t] = s;
        }
        Self(map)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    #[inline]
    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    /// True when every source index in `0..N` appears exactly once.
    pub fn is_bijection(&self) -> bool {
        let mut seen = vec![false; self.0.len()];
        for &m in &self.0 {
            match seen.get_mut(m) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }

    /// Build the output buffer: `out[i] = src[mapping[i]]`.
    pub fn assemble(&self, src: &[Pixel]) -> Vec<Pixel> {
        self.0.iter().map(|&m| src[m]).collect()
    }
}
