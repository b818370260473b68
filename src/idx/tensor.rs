// A self-describing tensor as stored in an IDX image file: the dimension
// vector from the header plus the flat row-major data buffer. The first
// dimension counts items, the rest describe one item's shape.
#[derive(Debug)]
pub struct ImageTensor {
    data: Vec<u8>,
    dimensions: Vec<usize>,
}

impl ImageTensor {
    pub fn new(data: Vec<u8>, dimensions: Vec<usize>) -> Self {
        assert_eq!(
            data.len(),
            dimensions.iter().product::<usize>(),
            "data length must match the dimension product"
        );
        ImageTensor { data, dimensions }
    }

    pub fn item_count(&self) -> usize {
        self.dimensions.first().copied().unwrap_or(0)
    }

    pub fn dimensions(&self) -> &[usize] {
        &self.dimensions
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
