use crate::distance::pairwise_distance;
use crate::idx::ImageTensor;

// Rank every reference image by distance to one query image and keep the k
// closest. Sorting (distance, index) pairs breaks distance ties on the lower
// reference index, so the ranking is fully deterministic. A k larger than
// the reference set returns the whole ranking.
pub fn nearest_neighbors(
    k: usize,
    reference: &ImageTensor,
    query: &ImageTensor,
    query_index: usize,
) -> Vec<(u32, usize)> {
    let mut distances: Vec<(u32, usize)> = (0..reference.item_count())
        .map(|reference_index| {
            (
                pairwise_distance(reference, query, reference_index, query_index),
                reference_index,
            )
        })
        .collect();
    distances.sort_unstable();
    distances.truncate(k);
    distances
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IMAGE_AREA, IMAGE_SIDE};

    fn image_tensor(images: &[[u8; IMAGE_AREA]]) -> ImageTensor {
        ImageTensor::new(
            images.concat(),
            vec![images.len(), IMAGE_SIDE, IMAGE_SIDE],
        )
    }

    // One image per intensity level, so image i sits at distance
    // 784 * i^2 from an all-zero query.
    fn graded_reference(levels: u8) -> ImageTensor {
        let images: Vec<[u8; IMAGE_AREA]> =
            (0..levels).map(|level| [level; IMAGE_AREA]).collect();
        image_tensor(&images)
    }

    #[test]
    fn selects_the_k_lowest_distances_in_order() {
        let reference = graded_reference(6);
        let query = image_tensor(&[[0_u8; IMAGE_AREA]]);

        let neighbors = nearest_neighbors(3, &reference, &query, 0);
        let indices: Vec<usize> = neighbors.iter().map(|&(_, index)| index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(neighbors[0].0, 0);
        assert_eq!(neighbors[1].0, IMAGE_AREA as u32);
        assert_eq!(neighbors[2].0, IMAGE_AREA as u32 * 4);
    }

    #[test]
    fn matches_a_full_brute_force_ranking() {
        // Arbitrary but deterministic intensities, with duplicates.
        let intensities = [13_u8, 200, 13, 77, 5, 200, 42];
        let images: Vec<[u8; IMAGE_AREA]> = intensities
            .iter()
            .map(|&intensity| [intensity; IMAGE_AREA])
            .collect();
        let reference = image_tensor(&images);
        let query = image_tensor(&[[0_u8; IMAGE_AREA]]);

        let mut full: Vec<(u32, usize)> = (0..reference.item_count())
            .map(|i| (pairwise_distance(&reference, &query, i, 0), i))
            .collect();
        full.sort();

        let k = 4;
        assert_eq!(nearest_neighbors(k, &reference, &query, 0), full[..k]);
    }

    #[test]
    fn breaks_distance_ties_on_the_lower_index() {
        // Three identical images, all at distance zero from the query.
        let reference = image_tensor(&[[1_u8; IMAGE_AREA]; 3]);
        let query = image_tensor(&[[1_u8; IMAGE_AREA]]);

        let neighbors = nearest_neighbors(2, &reference, &query, 0);
        assert_eq!(neighbors, vec![(0, 0), (0, 1)]);
    }

    #[test]
    fn clamps_k_to_the_reference_count() {
        let reference = graded_reference(3);
        let query = image_tensor(&[[0_u8; IMAGE_AREA]]);

        let neighbors = nearest_neighbors(5, &reference, &query, 0);
        assert_eq!(neighbors.len(), 3);
    }
}
