//! Стоп-слова
//!
//! Встроенный английский список по умолчанию плюс возможность
//! расширить или полностью заменить его. Именно здесь вызывающий
//! код добавляет доменные слова ("game", "app", "will" и т.п.).

use std::collections::HashSet;

/// Английские стоп-слова по умолчанию
const DEFAULT_ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an",
    "and", "any", "are", "aren't", "as", "at", "be", "because", "been",
    "before", "being", "below", "between", "both", "but", "by", "can't",
    "cannot", "could", "couldn't", "did", "didn't", "do", "does", "doesn't",
    "doing", "don't", "down", "during", "each", "few", "for", "from",
    "further", "had", "hadn't", "has", "hasn't", "have", "haven't", "having",
    "he", "he'd", "he'll", "he's", "her", "here", "here's", "hers", "herself",
    "him", "himself", "his", "how", "how's", "i", "i'd", "i'll", "i'm",
    "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself",
    "let's", "me", "more", "most", "mustn't", "my", "myself", "no", "nor",
    "not", "of", "off", "on", "once", "only", "or", "other", "ought", "our",
    "ours", "ourselves", "out", "over", "own", "same", "shan't", "she",
    "she'd", "she'll", "she's", "should", "shouldn't", "so", "some", "such",
    "than", "that", "that's", "the", "their", "theirs", "them", "themselves",
    "then", "there", "there's", "these", "they", "they'd", "they'll",
    "they're", "they've", "this", "those", "through", "to", "too", "under",
    "until", "up", "very", "was", "wasn't", "we", "we'd", "we'll", "we're",
    "we've", "were", "weren't", "what", "what's", "when", "when's", "where",
    "where's", "which", "while", "who", "who's", "whom", "why", "why's",
    "with", "won't", "would", "wouldn't", "you", "you'd", "you'll", "you're",
    "you've", "your", "yours", "yourself", "yourselves",
];

/// Набор стоп-слов для шага `RemoveStopwords`
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Стандартный английский набор
    pub fn english() -> Self {
        Self {
            words: DEFAULT_ENGLISH.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Пустой набор
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Набор из произвольного списка слов
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Добавить слова к набору (builder-стиль)
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Содержится ли токен в наборе
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Размер набора
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Набор пуст
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_english() {
        let set = StopwordSet::english();
        assert!(set.contains("the"));
        assert!(set.contains("i"));
        assert!(!set.contains("game"));
    }

    #[test]
    fn test_extend_with_domain_words() {
        let set = StopwordSet::english().with_words(["game", "will", "get"]);
        assert!(set.contains("game"));
        assert!(set.contains("will"));
        assert!(set.contains("the"));
    }

    #[test]
    fn test_custom_set_overrides_default() {
        let set = StopwordSet::from_words(["the", "i"]);
        assert_eq!(set.len(), 2);
        assert!(!set.contains("and"));
    }
}
