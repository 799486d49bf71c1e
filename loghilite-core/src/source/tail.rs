use crate::source::constants::TAIL_CHUNK_SIZE;
use std::io::{self, Read, Seek, SeekFrom};

/// Byte offset at which the last `lines` lines of `reader` begin.
///
/// A trailing line without terminator counts as a line. Scans backwards in
/// fixed-size chunks, so only the tail of a large file is read.
pub fn tail_offset<R: Read + Seek>(reader: &mut R, lines: usize) -> io::Result<u64> {
    let len = reader.seek(SeekFrom::End(0))?;
    if lines == 0 || len == 0 {
        return Ok(len);
    }

    // The terminator of the last line does not start a new one.
    let mut end = len;
    let mut last = [0u8; 1];
    reader.seek(SeekFrom::Start(len - 1))?;
    reader.read_exact(&mut last)?;
    if last[0] == b'\n' {
        end -= 1;
    }

    let mut seen = 0;
    let mut buf = vec![0u8; TAIL_CHUNK_SIZE];

    while end > 0 {
        let start = end.saturating_sub(TAIL_CHUNK_SIZE as u64);
        let chunk = &mut buf[..(end - start) as usize];

        reader.seek(SeekFrom::Start(start))?;
        reader.read_exact(chunk)?;

        for (i, b) in chunk.iter().enumerate().rev() {
            if *b == b'\n' {
                seen += 1;
                if seen == lines {
                    return Ok(start + i as u64 + 1);
                }
            }
        }

        end = start;
    }

    Ok(0)
}
