use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{Error, Result};

use super::ImageTensor;

// Load an IDX image file.
// The expected format is:
// - A 4-byte header; byte 3 holds the number of dimensions D
// - D big-endian u32 dimension sizes, the first being the item count
// - The flat row-major data, one byte per pixel
// The original files ship big-endian, so the dimension words are converted
// explicitly rather than reinterpreted.
pub fn load_images(path: &Path) -> Result<ImageTensor> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.into(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    let mut header = [0_u8; 4];
    reader
        .read_exact(&mut header)
        .map_err(|e| read_error(path, "truncated header", e))?;
    let n_dimensions = header[3] as usize;

    let mut dimensions = Vec::with_capacity(n_dimensions);
    for i in 0..n_dimensions {
        let dimension = reader
            .read_u32::<BigEndian>()
            .map_err(|e| read_error(path, format!("truncated dimension {i}"), e))?;
        if dimension == 0 {
            return Err(Error::format(path, format!("dimension {i} is zero")));
        }
        dimensions.push(dimension as usize);
    }

    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(|source| Error::Io {
        path: path.into(),
        source,
    })?;

    let expected: usize = dimensions.iter().product();
    if data.len() < expected {
        return Err(Error::format(
            path,
            format!("expected {expected} data bytes, found {}", data.len()),
        ));
    }
    // Anything past the declared extent is not addressable through the
    // dimension vector, so drop it and keep the length invariant exact.
    data.truncate(expected);

    Ok(ImageTensor::new(data, dimensions))
}

// A short read is a malformed file; any other failure is an I/O problem.
fn read_error(path: &Path, message: impl Into<String>, source: io::Error) -> Error {
    if source.kind() == io::ErrorKind::UnexpectedEof {
        Error::format(path, message)
    } else {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
