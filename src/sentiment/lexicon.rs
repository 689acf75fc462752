//! Лексиконы эмоций
//!
//! Содержит:
//! - Трейт лексикона (внедряемая capability)
//! - NRC-style лексикон: слово -> вектор категорий эмоций
//!
//! Встроенный словарь покрывает частые слова из отзывов о приложениях;
//! полный NRC EmoLex загружается из TSV-файла тем же форматом
//! `слово<TAB>эмоция<TAB>0|1`.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{EmotionCategory, SentimentVector};

/// Трейт лексикона эмоций
///
/// Отдельный трейт позволяет подменять лексикон (другой язык,
/// другой словарь) без изменения скоринга.
pub trait EmotionLexicon: fmt::Debug + Send + Sync {
    /// Вектор эмоций слова; `None`, если слова нет в лексиконе
    fn lookup(&self, token: &str) -> Option<&SentimentVector>;

    /// Количество слов в лексиконе
    fn len(&self) -> usize;

    /// Лексикон пуст
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// NRC-style лексикон: слово -> счётчики по категориям эмоций
#[derive(Debug, Clone, Default)]
pub struct NrcLexicon {
    entries: HashMap<String, SentimentVector>,
}

impl NrcLexicon {
    /// Пустой лексикон
    pub fn empty() -> Self {
        Self::default()
    }

    /// Встроенный словарь по умолчанию
    ///
    /// Сокращённый NRC-подобный словарь, покрывающий типичную
    /// лексику отзывов App Store.
    pub fn builtin() -> Self {
        use EmotionCategory::*;

        let words: &[(&str, &[EmotionCategory])] = &[
            // Позитивная лексика
            ("love", &[Joy, Trust, Positive]),
            ("great", &[Joy, Positive]),
            ("good", &[Joy, Trust, Positive]),
            ("awesome", &[Joy, Surprise, Positive]),
            ("amazing", &[Joy, Surprise, Positive]),
            ("excellent", &[Joy, Trust, Positive]),
            ("fun", &[Joy, Anticipation, Positive]),
            ("enjoy", &[Joy, Positive]),
            ("happy", &[Joy, Anticipation, Positive]),
            ("perfect", &[Joy, Trust, Positive]),
            ("beautiful", &[Joy, Positive]),
            ("smooth", &[Positive]),
            ("fast", &[Positive]),
            ("easy", &[Positive]),
            ("helpful", &[Trust, Positive]),
            ("reliable", &[Trust, Positive]),
            ("recommend", &[Trust, Positive]),
            ("favorite", &[Joy, Trust, Positive]),
            ("addictive", &[Anticipation, Positive]),
            ("improvement", &[Anticipation, Positive]),
            ("friendly", &[Joy, Trust, Positive]),
            ("free", &[Joy, Positive]),
            ("win", &[Joy, Anticipation, Positive]),
            ("reward", &[Joy, Anticipation, Surprise, Positive]),
            ("challenge", &[Anticipation, Positive]),
            // Негативная лексика
            ("hate", &[Anger, Disgust, Fear, Negative]),
            ("terrible", &[Anger, Disgust, Fear, Sadness, Negative]),
            ("horrible", &[Anger, Disgust, Fear, Negative]),
            ("awful", &[Anger, Disgust, Fear, Sadness, Negative]),
            ("bad", &[Anger, Disgust, Fear, Sadness, Negative]),
            ("worst", &[Anger, Disgust, Negative]),
            ("crash", &[Anger, Fear, Surprise, Negative]),
            ("crashes", &[Anger, Fear, Surprise, Negative]),
            ("bug", &[Disgust, Fear, Negative]),
            ("bugs", &[Disgust, Fear, Negative]),
            ("broken", &[Anger, Fear, Sadness, Negative]),
            ("freeze", &[Fear, Negative]),
            ("slow", &[Negative]),
            ("annoying", &[Anger, Disgust, Negative]),
            ("boring", &[Sadness, Negative]),
            ("useless", &[Negative]),
            ("waste", &[Anger, Disgust, Negative]),
            ("scam", &[Anger, Disgust, Fear, Negative]),
            ("expensive", &[Anger, Sadness, Negative]),
            ("ads", &[Anger, Disgust, Negative]),
            ("spam", &[Anger, Disgust, Negative]),
            ("disappointed", &[Anger, Sadness, Negative]),
            ("disappointing", &[Sadness, Negative]),
            ("frustrating", &[Anger, Negative]),
            ("problem", &[Fear, Sadness, Negative]),
            ("error", &[Fear, Negative]),
            ("fail", &[Sadness, Negative]),
            ("lag", &[Anger, Negative]),
            ("stuck", &[Anger, Sadness, Negative]),
            ("lose", &[Anger, Fear, Sadness, Negative]),
            ("angry", &[Anger, Disgust, Negative]),
            ("sad", &[Sadness, Negative]),
            ("afraid", &[Fear, Negative]),
            // Смешанная/нейтральная лексика с эмоциональной окраской
            ("money", &[Anticipation, Trust]),
            ("pay", &[Anticipation]),
            ("update", &[Anticipation]),
            ("wait", &[Anticipation]),
            ("surprise", &[Surprise]),
            ("sudden", &[Surprise]),
            ("hope", &[Anticipation, Joy, Trust, Positive]),
            ("wish", &[Anticipation]),
        ];

        let mut lexicon = Self::empty();
        for (word, categories) in words {
            lexicon.insert(word, categories);
        }
        lexicon
    }

    /// Добавить слово с набором категорий
    ///
    /// Повторная вставка того же слова суммирует категории.
    pub fn insert(&mut self, word: &str, categories: &[EmotionCategory]) {
        let entry = self
            .entries
            .entry(word.to_lowercase())
            .or_insert_with(SentimentVector::zero);
        for &category in categories {
            entry.add(category, 1);
        }
    }

    /// Загрузить лексикон из строки в формате NRC EmoLex
    ///
    /// Формат: `слово<TAB>эмоция<TAB>0|1`, по строке на пару.
    /// Пары с флагом 0 пропускаются. Неизвестное имя эмоции или
    /// строка неверной структуры - `Error::Config`.
    pub fn from_tsv_str(data: &str) -> Result<Self> {
        let mut lexicon = Self::empty();

        for (line_no, line) in data.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split('\t');
            let (word, emotion, flag) = match (fields.next(), fields.next(), fields.next()) {
                (Some(w), Some(e), Some(f)) => (w, e, f),
                _ => {
                    return Err(Error::Config(format!(
                        "malformed lexicon line {}: `{}`",
                        line_no + 1,
                        line
                    )))
                }
            };

            let category = EmotionCategory::from_name(emotion).ok_or_else(|| {
                Error::Config(format!(
                    "unknown emotion `{}` at lexicon line {}",
                    emotion,
                    line_no + 1
                ))
            })?;

            if flag == "1" {
                lexicon.insert(word, &[category]);
            }
        }

        Ok(lexicon)
    }

    /// Загрузить лексикон из TSV-файла
    pub fn from_tsv_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read lexicon file {}: {}", path.display(), e))
        })?;
        Self::from_tsv_str(&data)
    }
}

impl EmotionLexicon for NrcLexicon {
    fn lookup(&self, token: &str) -> Option<&SentimentVector> {
        self.entries.get(token)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let lexicon = NrcLexicon::builtin();

        let love = lexicon.lookup("love").unwrap();
        assert_eq!(love.get(EmotionCategory::Joy), 1);
        assert_eq!(love.get(EmotionCategory::Trust), 1);
        assert_eq!(love.get(EmotionCategory::Anger), 0);

        assert!(lexicon.lookup("xylophone").is_none());
    }

    #[test]
    fn test_insert_is_case_folding() {
        let mut lexicon = NrcLexicon::empty();
        lexicon.insert("Great", &[EmotionCategory::Joy]);
        assert!(lexicon.lookup("great").is_some());
    }

    #[test]
    fn test_from_tsv() {
        let data = "abandon\tfear\t1\nabandon\tjoy\t0\nabandon\tnegative\t1\nabandon\tsadness\t1\n";
        let lexicon = NrcLexicon::from_tsv_str(data).unwrap();

        let v = lexicon.lookup("abandon").unwrap();
        assert_eq!(v.get(EmotionCategory::Fear), 1);
        assert_eq!(v.get(EmotionCategory::Joy), 0);
        assert_eq!(v.get(EmotionCategory::Negative), 1);
        assert_eq!(v.get(EmotionCategory::Sadness), 1);
    }

    #[test]
    fn test_from_tsv_unknown_emotion() {
        let err = NrcLexicon::from_tsv_str("word\tecstasy\t1\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_tsv_malformed_line() {
        let err = NrcLexicon::from_tsv_str("word only\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
