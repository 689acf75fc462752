//! Модуль обработки текста
//!
//! Включает:
//! - Нормализацию (упорядоченный pipeline именованных шагов)
//! - Стоп-слова и стемминг
//! - Частотный индекс (матрица терм-документ)
//! - Корреляции термов

mod correlation;
mod indexer;
mod normalizer;
mod stemmer;
mod stopwords;

pub use correlation::{correlations, pearson};
pub use indexer::{TermDocumentMatrix, TermFrequencyTable};
pub use normalizer::{Pipeline, TransformStep};
pub use stemmer::{SnowballStemmer, Stemmer};
pub use stopwords::StopwordSet;
