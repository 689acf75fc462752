//! Нормализация текста
//!
//! Упорядоченный pipeline из закрытого набора именованных шагов.
//! Pipeline чистый: один и тот же вход и набор шагов всегда дают
//! байт-идентичный результат, входная строка не мутируется.
//!
//! Порядок шагов значим и задаётся вызывающим кодом: например,
//! `Lowercase` должен стоять раньше `RemoveStopwords`, иначе
//! стоп-слова с заглавной буквы останутся в тексте. Pipeline
//! порядок НЕ исправляет - неверная конфигурация остаётся
//! ошибкой вызывающего кода.

use std::sync::Arc;

use regex::Regex;

use crate::error::{Error, Result};
use crate::models::Document;
use crate::nlp::stemmer::Stemmer;
use crate::nlp::stopwords::StopwordSet;

/// Один шаг нормализации
#[derive(Debug, Clone)]
pub enum TransformStep {
    /// Текстовая замена по регулярному выражению
    ///
    /// Выполняется до приведения регистра, если шаблон чувствителен
    /// к регистру - за порядок отвечает вызывающий код.
    ReplacePattern {
        /// Скомпилированный шаблон
        pattern: Regex,
        /// Строка замены
        replacement: String,
    },
    /// Полное приведение к нижнему регистру
    Lowercase,
    /// Удаление цифровых символов
    RemoveNumbers,
    /// Удаление всего, кроме букв, цифр и пробелов
    RemovePunctuation,
    /// Удаление целых токенов, входящих в набор стоп-слов
    RemoveStopwords(StopwordSet),
    /// Схлопывание пробельных последовательностей и обрезка краёв
    StripWhitespace,
    /// Стемминг каждого токена внедрённым стеммером
    Stem(Arc<dyn Stemmer>),
}

impl TransformStep {
    /// Шаг замены по шаблону; невалидный шаблон - `Error::Config`
    pub fn replace_pattern(pattern: &str, replacement: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| Error::Config(format!("invalid replace pattern `{}`: {}", pattern, e)))?;
        Ok(Self::ReplacePattern {
            pattern,
            replacement: replacement.to_string(),
        })
    }

    /// Параметрless-шаг по имени
    ///
    /// Для шагов, требующих параметров (`replace_pattern`,
    /// `remove_stopwords`, `stem`), и для неизвестных имён
    /// возвращает `Error::Config`.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "lowercase" => Ok(Self::Lowercase),
            "remove_numbers" => Ok(Self::RemoveNumbers),
            "remove_punctuation" => Ok(Self::RemovePunctuation),
            "strip_whitespace" => Ok(Self::StripWhitespace),
            "replace_pattern" | "remove_stopwords" | "stem" => Err(Error::Config(format!(
                "transform `{}` requires parameters and cannot be built by name",
                name
            ))),
            other => Err(Error::Config(format!("unknown transform name `{}`", other))),
        }
    }

    /// Имя шага
    pub fn name(&self) -> &'static str {
        match self {
            Self::ReplacePattern { .. } => "replace_pattern",
            Self::Lowercase => "lowercase",
            Self::RemoveNumbers => "remove_numbers",
            Self::RemovePunctuation => "remove_punctuation",
            Self::RemoveStopwords(_) => "remove_stopwords",
            Self::StripWhitespace => "strip_whitespace",
            Self::Stem(_) => "stem",
        }
    }

    /// Применить шаг к тексту, породив новую строку
    fn apply(&self, text: &str) -> String {
        match self {
            Self::ReplacePattern {
                pattern,
                replacement,
            } => pattern.replace_all(text, replacement.as_str()).into_owned(),
            Self::Lowercase => text.to_lowercase(),
            Self::RemoveNumbers => text.chars().filter(|c| !c.is_numeric()).collect(),
            Self::RemovePunctuation => text
                .chars()
                .filter(|c| c.is_alphanumeric() || c.is_whitespace())
                .collect(),
            Self::RemoveStopwords(stopwords) => text
                .split_whitespace()
                .filter(|token| !stopwords.contains(token))
                .collect::<Vec<_>>()
                .join(" "),
            Self::StripWhitespace => text.split_whitespace().collect::<Vec<_>>().join(" "),
            Self::Stem(stemmer) => text
                .split_whitespace()
                .map(|token| stemmer.stem(token))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Упорядоченный pipeline нормализации
#[derive(Debug, Clone)]
pub struct Pipeline {
    steps: Vec<TransformStep>,
}

impl Pipeline {
    /// Pipeline из заданной последовательности шагов
    ///
    /// Параметры каждого шага уже проверены его конструктором,
    /// поэтому дальше по ходу выполнения конфигурационных ошибок
    /// быть не может.
    pub fn new(steps: Vec<TransformStep>) -> Self {
        Self { steps }
    }

    /// Типовой pipeline для отзывов App Store
    ///
    /// Замена разделителей "/", "@", "|" на пробел, нижний регистр,
    /// удаление цифр и пунктуации, стоп-слова, схлопывание пробелов.
    pub fn standard(stopwords: StopwordSet) -> Result<Self> {
        Ok(Self::new(vec![
            TransformStep::replace_pattern(r"[/@|]", " ")?,
            TransformStep::Lowercase,
            TransformStep::RemoveNumbers,
            TransformStep::RemovePunctuation,
            TransformStep::RemoveStopwords(stopwords),
            TransformStep::StripWhitespace,
        ]))
    }

    /// Шаги pipeline
    pub fn steps(&self) -> &[TransformStep] {
        &self.steps
    }

    /// Нормализовать текст, применив шаги строго по порядку
    pub fn normalize(&self, body: &str) -> String {
        self.steps
            .iter()
            .fold(body.to_string(), |text, step| step.apply(&text))
    }

    /// Нормализовать документ (функциональное обновление)
    pub fn normalize_document(&self, document: &Document) -> Document {
        document.with_text(self.normalize(&document.text))
    }

    /// Нормализовать коллекцию документов
    ///
    /// Документы независимы друг от друга, порядок результата
    /// совпадает с порядком входа.
    pub fn normalize_all(&self, documents: &[Document]) -> Vec<Document> {
        documents
            .iter()
            .map(|doc| self.normalize_document(doc))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stemmer::SnowballStemmer;

    fn spec_pipeline() -> Pipeline {
        Pipeline::new(vec![
            TransformStep::Lowercase,
            TransformStep::RemoveNumbers,
            TransformStep::RemovePunctuation,
            TransformStep::RemoveStopwords(StopwordSet::from_words(["the", "i"])),
            TransformStep::StripWhitespace,
        ])
    }

    #[test]
    fn test_reference_normalization() {
        let pipeline = spec_pipeline();
        assert_eq!(pipeline.normalize("i love the GAME!! 123"), "love game");
        assert_eq!(pipeline.normalize("i HATE the game."), "hate game");
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let pipeline = spec_pipeline();
        let input = "Some MIXED text, with 42 numbers & punctuation!";
        let first = pipeline.normalize(input);
        for _ in 0..10 {
            assert_eq!(pipeline.normalize(input), first);
        }
    }

    #[test]
    fn test_order_matters() {
        // Стоп-слова до lowercase: "The" не совпадает с "the"
        let wrong_order = Pipeline::new(vec![
            TransformStep::RemoveStopwords(StopwordSet::from_words(["the"])),
            TransformStep::Lowercase,
        ]);
        assert_eq!(wrong_order.normalize("The game"), "the game");

        let right_order = Pipeline::new(vec![
            TransformStep::Lowercase,
            TransformStep::RemoveStopwords(StopwordSet::from_words(["the"])),
        ]);
        assert_eq!(right_order.normalize("The game"), "game");
    }

    #[test]
    fn test_replace_pattern_before_lowercase() {
        let pipeline = Pipeline::new(vec![
            TransformStep::replace_pattern(r"[/@|]", " ").unwrap(),
            TransformStep::Lowercase,
            TransformStep::StripWhitespace,
        ]);
        assert_eq!(pipeline.normalize("great/fun|App"), "great fun app");
    }

    #[test]
    fn test_strip_whitespace_collapses_runs() {
        let pipeline = Pipeline::new(vec![TransformStep::StripWhitespace]);
        assert_eq!(pipeline.normalize("  a \t b\n\nc  "), "a b c");
    }

    #[test]
    fn test_stem_step() {
        let pipeline = Pipeline::new(vec![
            TransformStep::Lowercase,
            TransformStep::Stem(SnowballStemmer::shared()),
        ]);
        assert_eq!(pipeline.normalize("playing games"), "play game");
    }

    #[test]
    fn test_invalid_pattern_fails_fast() {
        let err = TransformStep::replace_pattern("(unclosed", " ").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_name() {
        assert!(matches!(
            TransformStep::from_name("lowercase"),
            Ok(TransformStep::Lowercase)
        ));
        assert!(matches!(
            TransformStep::from_name("remove_stopwords"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            TransformStep::from_name("frobnicate"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_input_not_mutated() {
        let pipeline = spec_pipeline();
        let input = String::from("i love the GAME!! 123");
        let _ = pipeline.normalize(&input);
        assert_eq!(input, "i love the GAME!! 123");
    }

    #[test]
    fn test_standard_pipeline() {
        let pipeline = Pipeline::standard(StopwordSet::english()).unwrap();
        let out = pipeline.normalize("I love this App/Game 100%!");
        assert_eq!(out, "love app game");
    }
}
