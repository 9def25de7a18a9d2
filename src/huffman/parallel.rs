use std::sync::mpsc;
use std::sync::Arc;

use threadpool::ThreadPool;

use super::{HuffmanCodec, Symbol};
use crate::error::Error;
use crate::Result;

pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Encodes fixed size chunks of a message concurrently against one codec.
pub struct ParallelEncoder {
    threadpool: ThreadPool,
    chunk_size: usize,
}

struct EncodedChunk {
    index: usize,
    result: Result<String>,
}

impl ParallelEncoder {
    pub fn new(number_of_threads: usize, chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::InvalidChunkSize);
        }
        Ok(Self {
            threadpool: ThreadPool::new(number_of_threads.max(1)),
            chunk_size,
        })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn number_of_threads(&self) -> usize {
        self.threadpool.max_count()
    }

    /// Produces the same bit-string as [`HuffmanCodec::encode`].
    ///
    /// When several chunks fail, the error of the first one in message order
    /// is returned.
    pub fn encode(&self, codec: &Arc<HuffmanCodec>, symbols: &[Symbol]) -> Result<String> {
        let (sender, receiver) = mpsc::channel();
        let mut number_of_chunks = 0;
        for (index, chunk) in symbols.chunks(self.chunk_size).enumerate() {
            let codec = Arc::clone(codec);
            let sender = sender.clone();
            let chunk = chunk.to_vec();
            let offset = index * self.chunk_size;
            self.threadpool.execute(move || {
                let result = codec.encode_at(&chunk, offset);
                // the receiver outlives every worker
                let _ = sender.send(EncodedChunk { index, result });
            });
            number_of_chunks += 1;
        }
        drop(sender);
        log::trace!(
            "Dispatched {} chunks of up to {} symbols",
            number_of_chunks,
            self.chunk_size
        );

        let mut encoded_chunks: Vec<Option<Result<String>>> =
            (0..number_of_chunks).map(|_| None).collect();
        for encoded_chunk in receiver.iter() {
            encoded_chunks[encoded_chunk.index] = Some(encoded_chunk.result);
        }

        let mut encoded = String::new();
        for encoded_chunk in encoded_chunks {
            match encoded_chunk {
                Some(result) => encoded.push_str(&result?),
                None => return Err(Error::ParallelEncodingFailed),
            }
        }
        Ok(encoded)
    }
}
