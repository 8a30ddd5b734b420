// Translation routing architecture
//
// Three backends with non-overlapping language coverage sit behind one seam:
// - Marian: dedicated bilingual opus-mt models for a fixed set of pairs
// - M2M100: one many-to-many model for languages with no bilingual pair
// - English pivot: chaining two bilingual hops when nothing else matches
//
// The router picks the cheapest available path and guarantees some path
// always exists by falling back to English as a hub.

pub mod common;
pub mod m2m;
pub mod marian;
pub mod pairs;
pub mod router;

use async_trait::async_trait;

pub use m2m::M2mTranslator;
pub use marian::MarianTranslator;
pub use router::{TranslationRouter, TranslationStrategy};

use crate::error::Result;

/// Capability interface for a single translation backend.
///
/// Implementations must be safe for concurrent invocation from multiple
/// simultaneous requests: no per-call mutable state, `Send + Sync`. The
/// shipped backends are stateless HTTP clients and satisfy this trivially.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SentenceTranslator: Send + Sync {
    /// Translate a single sentence from `src` to `tgt`.
    async fn translate_sentence(&self, sentence: &str, src: &str, tgt: &str) -> Result<String>;
}
