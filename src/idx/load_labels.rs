use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{Error, Result};

use super::LabelSet;

// Load an IDX label file.
// The expected format is:
// - A 4-byte header (magic number, not used here)
// - A big-endian u32 item count
// - One label byte per item
pub fn load_labels(path: &Path) -> Result<LabelSet> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.into(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    let mut header = [0_u8; 4];
    reader
        .read_exact(&mut header)
        .map_err(|e| read_error(path, "truncated header", e))?;

    let count = reader
        .read_u32::<BigEndian>()
        .map_err(|e| read_error(path, "truncated item count", e))? as usize;

    let mut labels = vec![0_u8; count];
    reader
        .read_exact(&mut labels)
        .map_err(|e| read_error(path, format!("expected {count} labels, file is shorter"), e))?;

    Ok(LabelSet::new(labels))
}

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
