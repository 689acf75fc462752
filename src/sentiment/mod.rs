//! Модуль анализа настроений
//!
//! Включает:
//! - Лексикон эмоций (NRC-style, внедряемый через трейт)
//! - Скоринг документов и агрегацию векторов

mod lexicon;
mod scorer;

pub use lexicon::{EmotionLexicon, NrcLexicon};
pub use scorer::SentimentScorer;
