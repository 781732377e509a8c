//! The extraction → chunking → completion pipeline.
//!
//! ```text
//! inputs ─route─▶ documents ─combine─▶ corpus ─┬─(small)─▶ one completion ─────────────▶ summary
//!                                              └─(large)─▶ chunks ─▶ one completion each ─▶ reduce ─▶ summary
//! ```

use crate::error::{CliError, Result};
use docsift_domain::{CompletionProvider, Corpus, InputReference};
use docsift_extractor::{ExtractorConfig, SourceRouter, TextChunker};
use docsift_llm::prompt::COMBINE_INSTRUCTION;
use docsift_llm::{CompletionClient, LlmError};
use tracing::{info, warn};

/// The final answer and how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Text to show the user
    pub text: String,

    /// Number of chunks the corpus was split into (0 when not chunked)
    pub chunk_count: usize,

    /// Completion requests issued, including the reduce call
    pub completion_calls: usize,
}

/// Drives extraction, optional chunking and completion for one run.
pub struct Pipeline<P> {
    router: SourceRouter,
    client: CompletionClient<P>,
    chunker: TextChunker,
    chunk_threshold: usize,
}

impl<P> Pipeline<P>
where
    P: CompletionProvider<Error = LlmError>,
{
    /// Assemble a pipeline from its parts.
    pub fn new(
        router: SourceRouter,
        client: CompletionClient<P>,
        chunker: TextChunker,
        chunk_threshold: usize,
    ) -> Self {
        Self {
            router,
            client,
            chunker,
            chunk_threshold,
        }
    }

    /// Build the router and chunker described by `config`.
    pub fn from_config(config: &ExtractorConfig, client: CompletionClient<P>) -> Result<Self> {
        let router = SourceRouter::new(config)?;
        let chunker = TextChunker::from_config(config)?;
        Ok(Self::new(router, client, chunker, config.chunk_threshold))
    }

    /// The completion client used for every request.
    pub fn client(&self) -> &CompletionClient<P> {
        &self.client
    }

    /// Extract every input in order and combine the successes.
    ///
    /// Failed inputs are logged and skipped. Fails with
    /// [`CliError::NoContent`] only when nothing could be extracted.
    pub fn collect(&self, inputs: &[String]) -> Result<Corpus> {
        let mut documents = Vec::with_capacity(inputs.len());

        for input in inputs {
            let reference = InputReference::new(input.as_str());
            match self.router.route(&reference) {
                Ok(doc) => {
                    info!("Extracted {} characters from {}", doc.char_count(), reference);
                    documents.push(doc);
                }
                Err(e) => warn!("Skipping {}: {}", reference, e),
            }
        }

        if documents.is_empty() {
            return Err(CliError::NoContent);
        }

        let corpus = Corpus::combine(&documents);
        info!(
            documents = corpus.document_count(),
            chars = corpus.char_count(),
            "Combined extracted content"
        );
        Ok(corpus)
    }

    /// Answer `query` (or summarise) over the corpus.
    ///
    /// A corpus no longer than the chunk threshold takes exactly one call.
    /// Larger ones take one call per chunk and, when there is more than one
    /// chunk, a final call merging the partial results.
    pub fn summarize(&self, corpus: &Corpus, query: Option<&str>) -> Result<Summary> {
        let chars = corpus.char_count();

        if chars <= self.chunk_threshold {
            info!("Processing {} characters in a single request", chars);
            let text = self.client.process(corpus.text(), query)?;
            return Ok(Summary {
                text,
                chunk_count: 0,
                completion_calls: 1,
            });
        }

        info!(
            "Content size ({} chars) exceeds processing limit. Chunking content...",
            chars
        );
        let chunks = self.chunker.chunk(corpus.text());
        info!("Split content into {} chunks", chunks.len());

        let mut results = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            info!("Processing chunk {}/{}", chunk.index + 1, chunks.len());
            results.push(self.client.process(&chunk.text, query)?);
        }

        let mut completion_calls = results.len();
        let text = if results.len() > 1 {
            info!("Combining results from multiple chunks...");
            completion_calls += 1;
            self.client
                .process(&results.join("\n\n"), Some(COMBINE_INSTRUCTION))?
        } else {
            results.pop().unwrap_or_default()
        };

        Ok(Summary {
            text,
            chunk_count: chunks.len(),
            completion_calls,
        })
    }

    /// Collect the inputs, then summarise them.
    pub fn run(&self, inputs: &[String], query: Option<&str>) -> Result<Summary> {
        let corpus = self.collect(inputs)?;
        self.summarize(&corpus, query)
    }
}
