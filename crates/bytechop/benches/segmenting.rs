#![allow(missing_docs)]

use bytechop::{ByteSet, segmenting};
use divan::{Bencher, black_box, counter::BytesCount};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

static ENGLISH_CORPUS: &str = include_str!("data/english.txt");
static ACCESS_LOG_CORPUS: &str = include_str!("data/access_log.txt");

fn prose_text() -> String {
    ENGLISH_CORPUS.repeat(16)
}

fn log_text() -> String {
    ACCESS_LOG_CORPUS.repeat(64)
}

mod splitting {
    use super::*;

    #[divan::bench]
    fn split_prose_on_whitespace(bencher: Bencher) {
        let text = prose_text();
        bencher.counter(BytesCount::new(text.len())).bench(|| {
            let mut longest = 0;
            for part in segmenting::split(black_box(&text), " \t\n") {
                longest = longest.max(part.len());
            }
            longest
        });
    }

    #[divan::bench]
    fn split_log_fields(bencher: Bencher) {
        let text = log_text();
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| segmenting::split(black_box(&text), " ").count());
    }
}

mod trimming {
    use super::*;

    #[divan::bench]
    fn trim_log_lines(bencher: Bencher) {
        let text = log_text();
        let lines: Vec<&str> = text.lines().collect();
        bencher.counter(BytesCount::new(text.len())).bench(|| {
            let mut kept = 0;
            for &line in &lines {
                kept += segmenting::trim(black_box(line), &ByteSet::ASCII_WHITESPACE).len();
            }
            kept
        });
    }

    #[divan::bench]
    fn trim_in_place_padded(bencher: Bencher) {
        let padded = {
            let mut buf = b"    ".to_vec();
            buf.extend_from_slice(prose_text().as_bytes());
            buf.extend_from_slice(b"  \t  ");
            buf
        };
        bencher.counter(BytesCount::new(padded.len())).bench(|| {
            let mut buf = black_box(padded.clone());
            segmenting::trim_in_place(&mut buf, &ByteSet::ASCII_WHITESPACE);
            buf
        });
    }
}
