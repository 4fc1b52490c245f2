//! # Snowball stemming for search pipelines
//!
//! Suffix-stripping stemmers that reduce inflected word forms to a common
//! stem, as a normalization stage for indexing, retrieval and text
//! analysis. Two languages are built in:
//!
//! - **English**: possessives, the plural and `ed`/`ing` families,
//!   terminal `y -> i`, chained derivational suffixes and a final
//!   `e`/`ll` cleanup, gated by the R1/R2 suffix regions.
//! - **Russian**: perfective gerund, reflexive, adjectival, verb and noun
//!   suffix classes applied over the RV region, with the word
//!   transliterated into a one-symbol-per-letter working alphabet so
//!   suffix comparisons run over fixed-width characters.
//!
//! Stemming is total: any input comes back as text, characters outside an
//! engine's alphabet pass through untouched, and stop words come back
//! unchanged. Engines build their tables once at construction and are
//! freely shareable across threads afterwards.
//!
//! ## Example
//!
//! ```
//! use snowball_rs::Stemmer;
//!
//! let en = Stemmer::for_code("en").expect("supported language");
//! assert_eq!(en.stem("caresses"), "caress");
//! assert_eq!(en.stem("running"), "run");
//!
//! let ru = Stemmer::for_code("ru").expect("supported language");
//! assert_eq!(ru.stem("весна"), "весн");
//!
//! // Unknown languages are unsupported, not an error.
//! assert!(Stemmer::for_code("de").is_none());
//! ```

mod english;
mod rule;
mod russian;
mod stemmer;
mod translit;
mod word;

#[cfg(test)]
mod tests;

pub use english::EnglishStemmer;
pub use russian::RussianStemmer;
pub use stemmer::{Language, Stemmer};
