use std::io::{self, Read};

use encoding_rs::{CoderResult, Decoder, Encoding, UTF_8};

const INPUT_BUFFER_SIZE: usize = 8 * 1024;
const OUTPUT_BUFFER_SIZE: usize = 8 * 1024;

/// Resolve the charset announced in a Content-Type header, falling back to UTF-8.
pub fn charset_for(content_type: Option<&str>) -> &'static Encoding {
    content_type
        .and_then(extract_charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

fn extract_charset(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .filter_map(|part| {
            let (key, value) = part.trim().split_once('=')?;
            if key.trim().eq_ignore_ascii_case("charset") {
                Some(value.trim_matches([' ', '"', '\''].as_ref()))
            } else {
                None
            }
        })
        .next()
        .map(|s| s.to_string())
}

/// Incremental byte -> UTF-8 transcoder over any reader.
///
/// A leading BOM overrides `encoding`. Malformed sequences become U+FFFD.
pub struct DecodingReader<R> {
    inner: R,
    decoder: Decoder,
    input: Box<[u8]>,
    input_pos: usize,
    input_len: usize,
    output: Box<[u8]>,
    output_pos: usize,
    output_len: usize,
    eof: bool,
    finished: bool,
}

impl<R: Read> DecodingReader<R> {
    pub fn new(inner: R, encoding: &'static Encoding) -> Self {
        Self {
            inner,
            decoder: encoding.new_decoder(),
            input: vec![0; INPUT_BUFFER_SIZE].into_boxed_slice(),
            input_pos: 0,
            input_len: 0,
            output: vec![0; OUTPUT_BUFFER_SIZE].into_boxed_slice(),
            output_pos: 0,
            output_len: 0,
            eof: false,
            finished: false,
        }
    }

    /// Decode until some output is buffered or the input is exhausted.
    fn fill_output(&mut self) -> io::Result<()> {
        while self.output_pos == self.output_len && !self.finished {
            if self.input_pos == self.input_len && !self.eof {
                self.input_len = self.inner.read(&mut self.input)?;
                self.input_pos = 0;
                self.eof = self.input_len == 0;
            }

            let (result, read, written, _) = self.decoder.decode_to_utf8(
                &self.input[self.input_pos..self.input_len],
                &mut self.output,
                self.eof,
            );
            self.input_pos += read;
            self.output_pos = 0;
            self.output_len = written;

            if self.eof && matches!(result, CoderResult::InputEmpty) {
                self.finished = true;
            }
        }
        Ok(())
    }
}

impl<R: Read> Read for DecodingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        self.fill_output()?;
        let available = &self.output[self.output_pos..self.output_len];
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.output_pos += n;
        Ok(n)
    }
}
