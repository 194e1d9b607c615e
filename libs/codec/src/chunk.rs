//! Transport frame segmentation for oversized payloads.
//!
//! Connections negotiate a maximum frame size; payloads beyond it travel as
//! equal-sized chunks reassembled on the far side. The split is exact by
//! contract: callers pad or size payloads to a multiple of the frame size
//! before chunking, and a remainder here is a caller bug, not data to be
//! silently short-framed.

use crate::error::{ProtocolError, ProtocolResult};

/// Split a buffer into consecutive `chunk_size`-byte frames.
///
/// The buffer length must be an exact multiple of `chunk_size`; anything
/// else (including a zero chunk size) fails with `InvalidChunkSize` and
/// produces no output. A zero-length buffer yields no chunks. Concatenating
/// the returned chunks in order reproduces the buffer exactly.
pub fn split_buffer(buffer: &[u8], chunk_size: usize) -> ProtocolResult<Vec<Vec<u8>>> {
    if chunk_size == 0 || buffer.len() % chunk_size != 0 {
        return Err(ProtocolError::InvalidChunkSize {
            buffer_len: buffer.len(),
            chunk_size,
        });
    }

    Ok(buffer
        .chunks_exact(chunk_size)
        .map(<[u8]>::to_vec)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixteen_bytes_split_into_four_ordered_chunks() {
        let buffer: Vec<u8> = (0..16).collect();
        let chunks = split_buffer(&buffer, 4).unwrap();
        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[0], vec![0, 1, 2, 3]);
        assert_eq!(chunks[3], vec![12, 13, 14, 15]);
        assert!(chunks.iter().all(|c| c.len() == 4));
    }

    #[test]
    fn concatenation_reproduces_the_buffer() {
        let buffer: Vec<u8> = (0..64).map(|i| (i * 7) as u8).collect();
        let chunks = split_buffer(&buffer, 8).unwrap();
        let rejoined: Vec<u8> = chunks.concat();
        assert_eq!(rejoined, buffer);
    }

    #[test]
    fn non_dividing_chunk_size_fails_with_no_output() {
        let buffer = [0u8; 10];
        assert_eq!(
            split_buffer(&buffer, 4),
            Err(ProtocolError::InvalidChunkSize {
                buffer_len: 10,
                chunk_size: 4,
            })
        );
    }

    #[test]
    fn zero_chunk_size_fails() {
        assert!(split_buffer(&[], 0).is_err());
        assert!(split_buffer(&[1, 2], 0).is_err());
    }

    #[test]
    fn empty_buffer_yields_no_chunks() {
        assert_eq!(split_buffer(&[], 4).unwrap(), Vec::<Vec<u8>>::new());
    }

    #[test]
    fn chunk_size_equal_to_buffer_yields_one_chunk() {
        let buffer = [9u8; 32];
        let chunks = split_buffer(&buffer, 32).unwrap();
        assert_eq!(chunks, vec![buffer.to_vec()]);
    }
}
