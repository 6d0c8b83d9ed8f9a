use kira_fastq_qc::{FastqError, FastqReader, FormatError, ReaderOptions, RecordLine, TruncationPolicy};
use std::io::BufReader;

const SAMPLE: &str = "\
@read1 desc
ACGTN
+
!!!!!
@read2
ACGT
+read2
####
";

fn opts(max_reads: usize, truncation: TruncationPolicy) -> ReaderOptions {
    ReaderOptions {
        max_reads,
        truncation,
    }
}

fn five_records() -> String {
    (1..=5)
        .map(|i| format!("@r{i}\nACGT\n+\nIIII\n"))
        .collect()
}

#[test]
fn parse_two_records() {
    let rdr = BufReader::new(SAMPLE.as_bytes());
    let mut fq = FastqReader::from_bufread(rdr, ReaderOptions::default());

    let r1 = fq.next().unwrap().unwrap();
    assert_eq!(r1.header, "@read1 desc");
    assert_eq!(r1.seq, b"ACGTN");
    assert_eq!(r1.qual, b"!!!!!");

    let r2 = fq.next().unwrap().unwrap();
    assert_eq!(r2.header, "@read2");
    assert_eq!(r2.seq, b"ACGT");
    assert_eq!(r2.qual, b"####");

    assert!(fq.next().is_none());
}

#[test]
fn crlf_terminators_are_stripped() {
    let data = "@r1\r\nACGT\r\n+\r\nIIII\r\n";
    let recs = FastqReader::from_bufread(BufReader::new(data.as_bytes()), ReaderOptions::default())
        .read_all()
        .unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].header, "@r1");
    assert_eq!(recs[0].seq, b"ACGT");
    assert_eq!(recs[0].qual, b"IIII");
}

#[test]
fn all_records_in_file_order() {
    let data = five_records();
    let recs = FastqReader::from_bufread(
        BufReader::new(std::io::Cursor::new(data.into_bytes())),
        ReaderOptions::default(),
    )
    .read_all()
    .unwrap();
    let headers: Vec<_> = recs.iter().map(|r| r.header.as_str()).collect();
    assert_eq!(headers, ["@r1", "@r2", "@r3", "@r4", "@r5"]);
}

#[test]
fn max_reads_keeps_first_records() {
    let data = five_records();
    let mut fq = FastqReader::from_bufread(
        BufReader::new(std::io::Cursor::new(data.into_bytes())),
        opts(2, TruncationPolicy::Error),
    );
    let r1 = fq.next().unwrap().unwrap();
    let r2 = fq.next().unwrap().unwrap();
    assert_eq!(r1.header, "@r1");
    assert_eq!(r2.header, "@r2");
    assert!(fq.next().is_none());
    assert_eq!(fq.emitted(), 2);
}

#[test]
fn blank_header_line_ends_stream() {
    let data = "@r1\nACGT\n+\nIIII\n\n@r2\nACGT\n+\nIIII\n";
    let recs = FastqReader::from_bufread(BufReader::new(data.as_bytes()), ReaderOptions::default())
        .read_all()
        .unwrap();
    assert_eq!(recs.len(), 1);
}

#[test]
fn empty_sequence_is_a_valid_record() {
    let data = "@empty\n\n+\n\n";
    let recs = FastqReader::from_bufread(BufReader::new(data.as_bytes()), ReaderOptions::default())
        .read_all()
        .unwrap();
    assert_eq!(recs.len(), 1);
    assert!(recs[0].is_empty());
    assert!(recs[0].qual.is_empty());
}

#[test]
fn truncated_record_is_malformed() {
    let data = "@r1\nACGT\n+\nIIII\n@r2\nACGT\n";
    let err = FastqReader::from_bufread(BufReader::new(data.as_bytes()), ReaderOptions::default())
        .read_all()
        .unwrap_err();
    assert!(err.is_malformed());
    match err {
        FastqError::Malformed {
            source: FormatError::TruncatedRecord { missing },
            ctx,
        } => {
            assert_eq!(missing, RecordLine::Separator);
            assert_eq!(ctx.line_num, 6);
        }
        other => panic!("expected truncated record, got {other:?}"),
    }
}

#[test]
fn missing_quality_line_is_reported() {
    let data = "@r1\nACGT\n+\n";
    let err = FastqReader::from_bufread(BufReader::new(data.as_bytes()), ReaderOptions::default())
        .read_all()
        .unwrap_err();
    assert!(matches!(
        err,
        FastqError::Malformed {
            source: FormatError::TruncatedRecord {
                missing: RecordLine::Quality
            },
            ..
        }
    ));
}

#[test]
fn truncated_record_dropped_when_lenient() {
    let data = "@r1\nACGT\n+\nIIII\n@r2\nAC";
    let recs = FastqReader::from_bufread(
        BufReader::new(data.as_bytes()),
        opts(1000, TruncationPolicy::Drop),
    )
    .read_all()
    .unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].header, "@r1");
}

#[test]
fn no_validation_of_contents() {
    // quality shorter than sequence, odd characters, no '+' on separator
    let data = "@r1\nACGTxyz\n-\nII\n";
    let recs = FastqReader::from_bufread(BufReader::new(data.as_bytes()), ReaderOptions::default())
        .read_all()
        .unwrap();
    assert_eq!(recs[0].seq, b"ACGTxyz");
    assert_eq!(recs[0].qual, b"II");
}
