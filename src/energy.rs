use crate::pixel::Pixel;

/// Squared Euclidean distance between two colors in RGB space.
#[inline]
pub fn pix_energy(src: Pixel, tgt: Pixel) -> f64 {
    let dr = src.r() as f64 - tgt.r() as f64;
    let dg = src.g() as f64 - tgt.g() as f64;
    let db = src.b() as f64 - tgt.b() as f64;
    dr * dr + dg * dg + db * db
}

/// Energy change from exchanging the source pixels assigned to target
/// positions `i` and `j`. Only the four affected terms are evaluated.
#[inline]
pub fn swap_delta(mapping: &[usize], src: &[Pixel], tgt: &[Pixel], i: usize, j: usize) -> f64 {
    let mi = mapping[i];
    let mj = mapping[j];
    let after = pix_energy(src[mj], tgt[i]) + pix_energy(src[mi], tgt[j]);
    let before = pix_energy(src[mi], tgt[i]) + pix_energy(src[mj], tgt[j]);
    after - before
}

/// Full O(N) energy of a mapping.
pub fn total_energy(mapping: &[usize], src: &[Pixel], tgt: &[Pixel]) -> f64 {
    mapping
        .iter()
        .zip(tgt.iter())
        .map(|(&m, &t)| pix_energy(src[m], t))
        .sum()
}
