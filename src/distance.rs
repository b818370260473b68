use crate::idx::ImageTensor;
use crate::IMAGE_AREA;

// Sum of squared per-pixel differences between one reference image and one
// query image, both addressed by index into their flat buffers. The maximum
// over 784 pixels is 784 * 255^2 = 50_979_600, well inside u32.
pub fn pairwise_distance(
    reference: &ImageTensor,
    query: &ImageTensor,
    reference_index: usize,
    query_index: usize,
) -> u32 {
    let reference_offset = reference_index * IMAGE_AREA;
    let query_offset = query_index * IMAGE_AREA;
    let reference_pixels = &reference.data()[reference_offset..reference_offset + IMAGE_AREA];
    let query_pixels = &query.data()[query_offset..query_offset + IMAGE_AREA];

    reference_pixels
        .iter()
        .zip(query_pixels)
        .map(|(&a, &b)| {
            let diff = a as i32 - b as i32;
            (diff * diff) as u32
        })
        .sum()
}
