//! Splitting long text into bounded, overlapping chunks
//!
//! Text is first cut into small contiguous pieces, preferring paragraph
//! breaks, then line breaks, then spaces, and only then single characters.
//! Pieces are then packed greedily into windows of at most `max_chunk_size`
//! characters. When a window is full, its tail (up to `chunk_overlap`
//! characters) is carried into the next window.

use crate::config::ExtractorConfig;
use crate::error::ChunkError;
use std::collections::VecDeque;

/// Split boundaries, most preferred first. The empty separator splits
/// between characters.
const SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

/// A contiguous slice of the chunked text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Position in the chunk sequence
    pub index: usize,

    /// Byte offset of the first character in the source text
    pub start: usize,

    /// Byte offset one past the last character in the source text
    pub end: usize,

    /// The chunk content, `source[start..end]`
    pub text: String,
}

impl Chunk {
    /// Length of the chunk in characters
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// A run of text that is never cut further when packing windows
#[derive(Debug, Clone, Copy)]
struct Piece {
    start: usize,
    end: usize,
    chars: usize,
}

/// Chunks text into overlapping windows bounded by a character count
#[derive(Debug, Clone)]
pub struct TextChunker {
    max_chunk_size: usize,
    chunk_overlap: usize,
}

impl TextChunker {
    /// Create a new text chunker
    ///
    /// `chunk_overlap` must be strictly smaller than `max_chunk_size`.
    pub fn new(max_chunk_size: usize, chunk_overlap: usize) -> Result<Self, ChunkError> {
        if max_chunk_size == 0 {
            return Err(ChunkError::ZeroChunkSize);
        }
        if chunk_overlap >= max_chunk_size {
            return Err(ChunkError::OverlapTooLarge {
                overlap: chunk_overlap,
                max: max_chunk_size,
            });
        }
        Ok(Self {
            max_chunk_size,
            chunk_overlap,
        })
    }

    /// Create a chunker from the size and overlap in `config`
    pub fn from_config(config: &ExtractorConfig) -> Result<Self, ChunkError> {
        Self::new(config.max_chunk_size, config.chunk_overlap)
    }

    /// Maximum chunk size in characters
    pub fn max_chunk_size(&self) -> usize {
        self.max_chunk_size
    }

    /// Overlap between consecutive chunks in characters
    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    /// Chunk the given text
    ///
    /// Empty text yields no chunks. The first chunk starts at offset 0, the
    /// last ends at `text.len()`, and every chunk starts at or before the
    /// end of its predecessor.
    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut pieces = Vec::new();
        self.split_range(text, 0, text.len(), &SEPARATORS, &mut pieces);
        self.merge_pieces(text, &pieces)
    }

    /// Cut `text[start..end]` into pieces no longer than the chunk size
    fn split_range(
        &self,
        text: &str,
        start: usize,
        end: usize,
        separators: &[&str],
        out: &mut Vec<Piece>,
    ) {
        let segment = &text[start..end];
        let chars = segment.chars().count();

        let Some(level) = separators
            .iter()
            .position(|sep| sep.is_empty() || segment.contains(sep))
            .filter(|_| chars > self.max_chunk_size)
        else {
            out.push(Piece { start, end, chars });
            return;
        };

        let separator = separators[level];
        let finer = &separators[level + 1..];

        if separator.is_empty() {
            out.extend(segment.char_indices().map(|(offset, ch)| Piece {
                start: start + offset,
                end: start + offset + ch.len_utf8(),
                chars: 1,
            }));
            return;
        }

        // The separator stays at the end of the piece it terminates
        let mut piece_start = start;
        for (offset, _) in segment.match_indices(separator) {
            let piece_end = start + offset + separator.len();
            self.split_range(text, piece_start, piece_end, finer, out);
            piece_start = piece_end;
        }
        if piece_start < end {
            self.split_range(text, piece_start, end, finer, out);
        }
    }

    /// Pack consecutive pieces into overlapping windows
    fn merge_pieces(&self, text: &str, pieces: &[Piece]) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut window: VecDeque<Piece> = VecDeque::new();
        let mut total = 0;

        for &piece in pieces {
            if !window.is_empty() && total + piece.chars > self.max_chunk_size {
                chunks.push(Self::window_chunk(text, &window, chunks.len()));

                // Keep at most `chunk_overlap` chars, and leave room for the new piece
                while let Some(front) = window.front() {
                    if total > self.chunk_overlap || total + piece.chars > self.max_chunk_size {
                        total -= front.chars;
                        window.pop_front();
                    } else {
                        break;
                    }
                }
            }

            window.push_back(piece);
            total += piece.chars;
        }

        if !window.is_empty() {
            chunks.push(Self::window_chunk(text, &window, chunks.len()));
        }

        chunks
    }

    fn window_chunk(text: &str, window: &VecDeque<Piece>, index: usize) -> Chunk {
        let start = window.front().map_or(0, |p| p.start);
        let end = window.back().map_or(start, |p| p.end);
        Chunk {
            index,
            start,
            end,
            text: text[start..end].to_string(),
        }
    }
}

impl Default for TextChunker {
    fn default() -> Self {
        let config = ExtractorConfig::default();
        Self {
            max_chunk_size: config.max_chunk_size,
            chunk_overlap: config.chunk_overlap,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn reassemble(chunks: &[Chunk]) -> Option<String> {
        let mut out = String::new();
        let mut cursor = 0;
        for chunk in chunks {
            if chunk.start > cursor || cursor > chunk.end {
                return None;
            }
            out.push_str(&chunk.text[cursor - chunk.start..]);
            cursor = chunk.end;
        }
        Some(out)
    }

    proptest! {
        /// Property: chunks reassemble to the original and respect the bound
        #[test]
        fn test_chunks_cover_text(
            text in "[a-zé \n]{0,600}",
            max in 2usize..80,
            overlap_seed in 0usize..1000,
        ) {
            let overlap = overlap_seed % max;
            let chunker = TextChunker::new(max, overlap).unwrap();
            let chunks = chunker.chunk(&text);

            prop_assert_eq!(reassemble(&chunks), Some(text.clone()));
            for chunk in &chunks {
                prop_assert!(chunk.char_count() <= max);
                prop_assert_eq!(&chunk.text, &text[chunk.start..chunk.end]);
            }
        }

        /// Property: identical input and parameters give identical chunks
        #[test]
        fn test_chunking_is_deterministic(
            text in "[a-z \n]{0,400}",
            max in 2usize..60,
            overlap_seed in 0usize..1000,
        ) {
            let chunker = TextChunker::new(max, overlap_seed % max).unwrap();
            prop_assert_eq!(chunker.chunk(&text), chunker.chunk(&text));
        }
    }
}
