use crate::pixel::{color_key, Pixel};

/// Sort an image's pixels by color key and return, for each rank, the raster
/// index of the pixel holding that rank.
///
/// The sort is stable, so pixels sharing a key keep their raster order. That
/// makes the ordering (and everything seeded from it) reproducible.
pub fn rank_order(pixels: &[Pixel]) -> Vec<usize> {
    let mut entries: Vec<(u64, usize)> = pixels
        .iter()
        .enumerate()
        .map(|(idx, &p)| (color_key(p), idx))
        .collect();
    entries.sort_by_key(|&(key, _)| key);
    entries.into_iter().map(|(_, idx)| idx).collect()
}
