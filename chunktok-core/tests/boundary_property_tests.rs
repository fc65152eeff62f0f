//! Property tests: chunk boundaries never change what callers observe

use chunktok_core::{ChunkAction, ChunkReader, ReaderConfig, Tokenizer};
use proptest::prelude::*;
use std::io::Cursor;

fn config(buffer: usize, threshold: usize) -> ReaderConfig {
    ReaderConfig::builder()
        .read_buffer_size(buffer)
        .chunk_size_threshold(threshold)
        .build()
        .unwrap()
}

fn delimiters() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![",", ",,", "é,", "日", "ab"])
}

proptest! {
    #[test]
    fn tokens_match_whole_file_split(
        text in "[abé日,]{0,120}",
        delimiter in delimiters(),
        buffer in 1usize..16,
        threshold in 0usize..32,
    ) {
        let tokenizer = Tokenizer::new(delimiter)
            .unwrap()
            .with_config(config(buffer, threshold));

        let mut tokens = Vec::new();
        let summary = tokenizer
            .tokenize_reader(Cursor::new(text.as_bytes()), text.len() as u64, |t| {
                tokens.push(t.to_string());
                Ok(())
            })
            .unwrap();

        let expected: Vec<&str> = text.split(delimiter).collect();
        prop_assert_eq!(&tokens, &expected);
        prop_assert_eq!(summary.tokens, expected.len());
    }

    #[test]
    fn chunks_reassemble_to_original(
        text in "\\PC{0,200}",
        buffer in 1usize..32,
        threshold in 0usize..64,
        keep in 0usize..4,
    ) {
        let reader = ChunkReader::new(config(buffer, threshold));
        let mut rebuilt = String::new();
        let mut saw_final = 0;

        reader
            .process_reader(Cursor::new(text.as_bytes()), text.len() as u64, |chunk, is_final| {
                if is_final {
                    saw_final += 1;
                    rebuilt.push_str(chunk);
                    return ChunkAction::consumed();
                }

                // Hold back up to `keep` trailing characters as the carry
                let split = chunk
                    .char_indices()
                    .rev()
                    .nth(keep.saturating_sub(1))
                    .filter(|_| keep > 0)
                    .map_or(chunk.len(), |(i, _)| i);
                rebuilt.push_str(&chunk[..split]);
                ChunkAction::carry(&chunk[split..])
            })
            .unwrap();

        prop_assert_eq!(saw_final, 1);
        prop_assert_eq!(rebuilt, text);
    }
}
