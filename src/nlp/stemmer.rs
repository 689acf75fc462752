//! Стемминг
//!
//! Стеммер внедряется в pipeline как capability-трейт, поэтому
//! альтернативные алгоритмы и языки подключаются без изменения
//! самого pipeline. Реализация по умолчанию - Snowball (Porter 2).
//! Эвристическое отсечение суффиксов: over-/under-stemming -
//! известное ограничение, а не дефект.

use std::fmt;
use std::sync::Arc;

use rust_stemmers::{Algorithm, Stemmer as SnowballInner};

/// Приведение токена к эвристической основе
pub trait Stemmer: fmt::Debug + Send + Sync {
    /// Стеммировать один токен
    fn stem(&self, token: &str) -> String;
}

/// Snowball-стеммер на базе `rust-stemmers`
pub struct SnowballStemmer {
    inner: SnowballInner,
    language: &'static str,
}

impl SnowballStemmer {
    /// Английский стеммер
    pub fn english() -> Self {
        Self {
            inner: SnowballInner::create(Algorithm::English),
            language: "english",
        }
    }

    /// Стеммер для произвольного поддерживаемого алгоритма
    pub fn with_algorithm(algorithm: Algorithm, language: &'static str) -> Self {
        Self {
            inner: SnowballInner::create(algorithm),
            language,
        }
    }

    /// Готовый к внедрению в pipeline английский стеммер
    pub fn shared() -> Arc<dyn Stemmer> {
        Arc::new(Self::english())
    }
}

impl fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, token: &str) -> String {
        self.inner.stem(token).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stemming() {
        let stemmer = SnowballStemmer::english();
        assert_eq!(stemmer.stem("playing"), "play");
        assert_eq!(stemmer.stem("games"), "game");
        assert_eq!(stemmer.stem("updated"), "updat");
    }

    #[test]
    fn test_stem_is_idempotent_for_roots() {
        let stemmer = SnowballStemmer::english();
        let once = stemmer.stem("crashes");
        let twice = stemmer.stem(&once);
        assert_eq!(once, twice);
    }
}
