use crate::error::{FastqError, FormatError, IoContext, RecordLine};
use crate::policy::{ReaderOptions, TruncationPolicy};
use crate::record::ReadRecord;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum Source {
    Path(PathBuf),
    Reader,
}

/// Strict 4-line FASTQ reader (header, sequence, separator, quality).
///
/// Yields at most `max_reads` records. An empty header line ends the stream.
/// Sequence and quality lines are passed through untouched.
pub struct FastqReader {
    src: Source,
    rdr: Box<dyn BufRead + Send>,
    opts: ReaderOptions,
    line_num: u64,
    byte_pos: u64,
    emitted: usize,
    done: bool,
}

impl FastqReader {
    /// Open a plain FASTQ file. Gzip input is detected by magic bytes and rejected.
    pub fn from_path<P: AsRef<Path>>(path: P, opts: ReaderOptions) -> Result<Self, FastqError> {
        let path = path.as_ref();
        let start = IoContext {
            byte_pos: 0,
            line_num: 0,
        };
        let mut f = File::open(path).map_err(|e| FastqError::io_err(e, start))?;

        if sniff_gzip(&mut f).map_err(|e| FastqError::io_err(e, start))? {
            return Err(FastqError::fmt_err(FormatError::CompressedInput, start));
        }

        #[cfg(feature = "mmap")]
        let rdr: Box<dyn BufRead + Send> = {
            use memmap2::Mmap;
            // SAFETY: read-only mapping; the file is not modified while mapped.
            let mmap = unsafe { Mmap::map(&f) }.map_err(|e| FastqError::io_err(e, start))?;
            Box::new(BufReader::with_capacity(
                512 * 1024,
                io::Cursor::new(mmap),
            ))
        };
        #[cfg(not(feature = "mmap"))]
        let rdr: Box<dyn BufRead + Send> = Box::new(BufReader::with_capacity(256 * 1024, f));

        log::debug!("opened {}", path.display());
        Ok(Self::with_source(Source::Path(path.to_path_buf()), rdr, opts))
    }

    /// Wrap an arbitrary `BufRead` (stdin, in-memory buffers, ...).
    pub fn from_bufread<R: BufRead + Send + 'static>(reader: R, opts: ReaderOptions) -> Self {
        Self::with_source(Source::Reader, Box::new(reader), opts)
    }

    fn with_source(src: Source, rdr: Box<dyn BufRead + Send>, opts: ReaderOptions) -> Self {
        Self {
            src,
            rdr,
            opts,
            line_num: 0,
            byte_pos: 0,
            emitted: 0,
            done: false,
        }
    }

    pub fn source(&self) -> &Source {
        &self.src
    }

    /// Records emitted so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Drain the reader. Fails on the first error; no partial result is returned.
    pub fn read_all(self) -> Result<Vec<ReadRecord>, FastqError> {
        self.collect()
    }

    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        buf.clear();
        let n = self.rdr.read_line(buf)?;
        if n > 0 {
            self.line_num += 1;
            self.byte_pos += n as u64;
            if buf.ends_with('\n') {
                buf.pop();
                if buf.ends_with('\r') {
                    buf.pop();
                }
            }
        }
        Ok(n)
    }

    /// Reads one body line; `false` means the stream ended before it.
    fn read_body_line(&mut self, buf: &mut String) -> Result<bool, FastqError> {
        let n = self
            .read_line(buf)
            .map_err(|e| FastqError::io_err(e, self.ctx()))?;
        Ok(n > 0)
    }

    fn read_one(&mut self) -> Result<Option<ReadRecord>, FastqError> {
        let mut header = String::with_capacity(128);
        self.read_line(&mut header)
            .map_err(|e| FastqError::io_err(e, self.ctx()))?;
        if header.is_empty() {
            return Ok(None);
        }

        let mut seq = String::with_capacity(256);
        let mut line = String::with_capacity(256);
        let mut qual = String::with_capacity(256);

        if !self.read_body_line(&mut seq)? {
            return self.truncated(RecordLine::Sequence);
        }
        // separator content is ignored
        if !self.read_body_line(&mut line)? {
            return self.truncated(RecordLine::Separator);
        }
        if !self.read_body_line(&mut qual)? {
            return self.truncated(RecordLine::Quality);
        }

        Ok(Some(ReadRecord {
            header,
            seq: seq.into_bytes(),
            qual: qual.into_bytes(),
        }))
    }

    fn truncated(&mut self, missing: RecordLine) -> Result<Option<ReadRecord>, FastqError> {
        let err = FastqError::fmt_err(FormatError::TruncatedRecord { missing }, self.ctx());
        match self.opts.truncation {
            TruncationPolicy::Error => Err(err),
            TruncationPolicy::Drop => {
                log::warn!("dropping trailing partial record: {err}");
                Ok(None)
            }
        }
    }

    #[inline]
    fn ctx(&self) -> IoContext {
        IoContext {
            byte_pos: self.byte_pos,
            line_num: self.line_num,
        }
    }
}

impl Iterator for FastqReader {
    type Item = Result<ReadRecord, FastqError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.emitted >= self.opts.max_reads {
            return None;
        }
        match self.read_one() {
            Ok(Some(rec)) => {
                self.emitted += 1;
                Some(Ok(rec))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

fn sniff_gzip(f: &mut File) -> io::Result<bool> {
    let mut magic = [0u8; 2];
    let n = f.read(&mut magic)?;
    f.seek(SeekFrom::Start(0))?;
    Ok(n == 2 && magic == [0x1F, 0x8B])
}
