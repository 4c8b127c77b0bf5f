/// Below this norm a vector is treated as zero and left untouched.
const MIN_NORM: f32 = 1e-12;

/// L2 normalize a vector in-place.
pub fn l2_normalize(vec: &mut [f32]) {
    let norm_sq: f32 = vec.iter().map(|x| x * x).sum();
    let norm = norm_sq.sqrt();
    if norm > MIN_NORM {
        for x in vec.iter_mut() {
            *x /= norm;
        }
    }
}
