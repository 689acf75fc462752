//! Скоринг настроений
//!
//! Суммирует векторы эмоций лексикона по токенам документа.
//! На вход ожидается УЖЕ НОРМАЛИЗОВАННЫЙ текст (нижний регистр,
//! без пунктуации): скоринг разбивает его по пробелам и больше
//! никакой предобработки не делает.
//!
//! Токены вне лексикона дают нулевой вклад - это штатное поведение,
//! не ошибка. Нормализация по длине документа сознательно не
//! применяется: сырые счётчики смещены в пользу длинных отзывов,
//! и это известное ограничение.

use crate::models::{Document, SentimentVector};
use crate::sentiment::lexicon::{EmotionLexicon, NrcLexicon};

/// Скорер настроений на базе лексикона эмоций
#[derive(Debug, Clone)]
pub struct SentimentScorer<L: EmotionLexicon> {
    /// Лексикон (внедряемая capability)
    lexicon: L,
}

impl SentimentScorer<NrcLexicon> {
    /// Скорер со встроенным лексиконом по умолчанию
    pub fn new() -> Self {
        Self {
            lexicon: NrcLexicon::builtin(),
        }
    }
}

impl Default for SentimentScorer<NrcLexicon> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: EmotionLexicon> SentimentScorer<L> {
    /// Скорер с пользовательским лексиконом
    pub fn with_lexicon(lexicon: L) -> Self {
        Self { lexicon }
    }

    /// Используемый лексикон
    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    /// Оценить нормализованный текст
    pub fn score(&self, text: &str) -> SentimentVector {
        let mut total = SentimentVector::zero();
        for token in text.split_whitespace() {
            if let Some(vector) = self.lexicon.lookup(token) {
                total = total.merge(vector);
            }
        }
        total
    }

    /// Оценить документ
    pub fn score_document(&self, document: &Document) -> SentimentVector {
        self.score(&document.text)
    }

    /// Оценить коллекцию документов, вектор на документ
    pub fn score_batch(&self, documents: &[Document]) -> Vec<SentimentVector> {
        documents.iter().map(|d| self.score_document(d)).collect()
    }

    /// Суммарный вектор по коллекции документов
    ///
    /// Эквивалентен `SentimentVector::aggregate` от `score_batch`;
    /// порядок документов на результат не влияет.
    pub fn score_total(&self, documents: &[Document]) -> SentimentVector {
        let vectors = self.score_batch(documents);
        SentimentVector::aggregate(vectors.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmotionCategory;

    fn tiny_lexicon() -> NrcLexicon {
        let mut lexicon = NrcLexicon::empty();
        lexicon.insert(
            "hate",
            &[EmotionCategory::Anger, EmotionCategory::Disgust],
        );
        lexicon.insert("love", &[EmotionCategory::Joy, EmotionCategory::Trust]);
        lexicon
    }

    #[test]
    fn test_reference_scoring() {
        let scorer = SentimentScorer::with_lexicon(tiny_lexicon());

        let love = scorer.score("love game");
        assert_eq!(love.get(EmotionCategory::Joy), 1);
        assert_eq!(love.get(EmotionCategory::Trust), 1);
        assert_eq!(love.total(), 2);

        let hate = scorer.score("hate game");
        assert_eq!(hate.get(EmotionCategory::Anger), 1);
        assert_eq!(hate.get(EmotionCategory::Disgust), 1);
        assert_eq!(hate.total(), 2);

        let combined = SentimentVector::aggregate([&love, &hate]);
        assert_eq!(combined.get(EmotionCategory::Anger), 1);
        assert_eq!(combined.get(EmotionCategory::Disgust), 1);
        assert_eq!(combined.get(EmotionCategory::Joy), 1);
        assert_eq!(combined.get(EmotionCategory::Trust), 1);
    }

    #[test]
    fn test_unknown_tokens_score_zero() {
        let scorer = SentimentScorer::with_lexicon(tiny_lexicon());
        assert!(scorer.score("completely neutral words").is_zero());
        assert!(scorer.score("").is_zero());
    }

    #[test]
    fn test_repeated_token_counts_each_occurrence() {
        let scorer = SentimentScorer::with_lexicon(tiny_lexicon());
        let v = scorer.score("love love love");
        assert_eq!(v.get(EmotionCategory::Joy), 3);
    }

    #[test]
    fn test_total_order_independent() {
        let scorer = SentimentScorer::with_lexicon(tiny_lexicon());
        let docs_a = vec![
            Document::new("1", "love game"),
            Document::new("2", "hate game"),
        ];
        let docs_b = vec![
            Document::new("2", "hate game"),
            Document::new("1", "love game"),
        ];
        assert_eq!(scorer.score_total(&docs_a), scorer.score_total(&docs_b));
    }

    #[test]
    fn test_builtin_scorer() {
        let scorer = SentimentScorer::new();
        let v = scorer.score("great app but crashes");
        assert!(v.get(EmotionCategory::Positive) >= 1);
        assert!(v.get(EmotionCategory::Negative) >= 1);
    }
}
