//! Integration tests for streamed input

use std::io::{self, Read};
use textstats_core::{AnalysisError, Config, Input, TextAnalyzer};

/// Reader that hands out data a few bytes at a time
struct ChunkedReader {
    data: Vec<u8>,
    position: usize,
    chunk_size: usize,
}

impl ChunkedReader {
    fn new(data: &str, chunk_size: usize) -> Self {
        Self {
            data: data.as_bytes().to_vec(),
            position: 0,
            chunk_size,
        }
    }
}

impl Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.position >= self.data.len() {
            return Ok(0);
        }

        let remaining = self.data.len() - self.position;
        let to_read = remaining.min(self.chunk_size).min(buf.len());

        buf[..to_read].copy_from_slice(&self.data[self.position..self.position + to_read]);
        self.position += to_read;

        Ok(to_read)
    }
}

/// Reader that delivers its data once and then fails
struct FailingReader {
    data: Option<Vec<u8>>,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.data.take() {
            Some(data) => {
                let n = data.len().min(buf.len());
                buf[..n].copy_from_slice(&data[..n]);
                Ok(n)
            }
            None => Err(io::Error::new(io::ErrorKind::BrokenPipe, "connection lost")),
        }
    }
}

#[test]
fn test_streaming_with_small_chunks() {
    let text = "First sentence. Second sentence! Third sentence? Fourth sentence.";
    let analyzer = TextAnalyzer::new();

    let streamed = analyzer
        .analyze(Input::Reader(Box::new(ChunkedReader::new(text, 3))))
        .unwrap();
    let direct = analyzer.analyze_str(text);

    assert_eq!(streamed.result, direct.result);
    assert_eq!(streamed.result.sentences, 4);
    assert_eq!(streamed.metadata.bytes_read, text.len() as u64);
}

#[test]
fn test_multibyte_split_across_reads() {
    let text = "Café naïve façade. Ünïcödé.";
    let config = Config::builder().chunk_size(4).build().unwrap();
    let analyzer = TextAnalyzer::with_config(config).unwrap();

    for chunk in 1..6 {
        let report = analyzer
            .analyze_reader(ChunkedReader::new(text, chunk))
            .unwrap();
        assert!(report.result.word_list.contains_key("Café"), "chunk {chunk}");
        assert!(report.result.word_list.contains_key("naïve"), "chunk {chunk}");
        assert_eq!(report.result.sentences, 2);
    }
}

#[test]
fn test_invalid_utf8_decodes_as_replacement() {
    let bytes = b"cat \xff\xfe dog".to_vec();
    let report = TextAnalyzer::new()
        .analyze(Input::from_bytes(bytes))
        .unwrap();

    assert_eq!(report.result.total_words, 2);
    assert_eq!(report.result.spaces, 2);
}

#[test]
fn test_stream_failure_returns_partial_result() {
    let reader = FailingReader {
        data: Some(b"Cat sat on th".to_vec()),
    };

    let err = TextAnalyzer::new().analyze_reader(reader).unwrap_err();
    assert!(matches!(err, AnalysisError::Stream { .. }));
    assert!(err.to_string().contains("connection lost"));

    let partial = err.into_partial_result().unwrap();
    // the word pending at the failure is still counted
    assert_eq!(partial.total_words, 4);
    assert!(partial.word_list.contains_key("th"));
    assert_eq!(partial.letters, 10);
    assert!(partial.invariants_hold());
}

#[test]
fn test_stream_failure_before_any_data() {
    let err = TextAnalyzer::new()
        .analyze(Input::from_reader(FailingReader { data: None }))
        .unwrap_err();

    let partial = err.partial_result().unwrap();
    assert_eq!(partial.total_words, 0);
}
