use crate::error::{Error, Result};
use crate::idx::ImageTensor;
use crate::{IMAGE_AREA, IMAGE_SIDE};

// Intensities strictly above this render as ink.
const INK_THRESHOLD: u8 = 128;

// Render one image as a 28x28 character grid for eyeballing the dataset.
// Expects the [count, 28, 28] layout of the image files; anything else is
// an error for the caller to report, not a reason to abort the run.
pub fn ascii_art(tensor: &ImageTensor, index: usize) -> Result<String> {
    let dimensions = tensor.dimensions();
    if dimensions.len() != 3 || dimensions[1] != IMAGE_SIDE || dimensions[2] != IMAGE_SIDE {
        return Err(Error::UnexpectedDimensions {
            dimensions: dimensions.to_vec(),
        });
    }
    if index >= tensor.item_count() {
        return Err(Error::IndexOutOfBounds {
            index,
            count: tensor.item_count(),
        });
    }

    let offset = index * IMAGE_AREA;
    let pixels = &tensor.data()[offset..offset + IMAGE_AREA];
    let mut art = String::with_capacity(IMAGE_AREA + IMAGE_SIDE);
    for row in pixels.chunks(IMAGE_SIDE) {
        for &pixel in row {
            art.push(if pixel > INK_THRESHOLD { '#' } else { '.' });
        }
        art.push('\n');
    }
    Ok(art)
}
