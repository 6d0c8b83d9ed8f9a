/// One parsed FASTQ block. The separator line is not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadRecord {
    /// Full identifier line, leading '@' and description included.
    pub header: String,
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
}

impl ReadRecord {
    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}
