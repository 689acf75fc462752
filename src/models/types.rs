//! Типы данных для анализа отзывов App Store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Отзыв пользователя из фида App Store
///
/// Неизменяем после загрузки. Дубликаты (одинаковый `id` или текст)
/// в сыром фиде возможны и пайплайном не удаляются - см. `dedup_reviews`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Уникальный идентификатор отзыва
    pub id: String,
    /// Имя автора
    pub author: String,
    /// Версия приложения, к которой относится отзыв
    pub version: String,
    /// Оценка в звёздах (1-5), если фид её передал
    pub rating: Option<u8>,
    /// Заголовок отзыва
    pub title: String,
    /// Текст отзыва
    pub body: String,
    /// Время публикации/обновления
    pub updated: Option<DateTime<Utc>>,
}

/// Документ - текстовый буфер, производный от тела отзыва
///
/// Каждая стадия нормализации порождает новый `Document`
/// (функциональное обновление), поэтому состояние до/после
/// любой стадии можно инспектировать.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Идентификатор исходного отзыва
    pub source_id: String,
    /// Текущий текст документа
    pub text: String,
}

impl Document {
    /// Создать документ из тела отзыва
    pub fn from_review(review: &Review) -> Self {
        Self {
            source_id: review.id.clone(),
            text: review.body.clone(),
        }
    }

    /// Создать документ из произвольного текста
    pub fn new(source_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            text: text.into(),
        }
    }

    /// Новый документ с тем же источником и новым текстом
    pub fn with_text(&self, text: String) -> Self {
        Self {
            source_id: self.source_id.clone(),
            text,
        }
    }

    /// Токены документа (разбиение по пробелам)
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }
}

/// Категория эмоции лексикона NRC
///
/// Порядок фиксирован и стабилен в пределах запуска:
/// им определяется раскладка `SentimentVector`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmotionCategory {
    Anger,
    Anticipation,
    Disgust,
    Fear,
    Joy,
    Sadness,
    Surprise,
    Trust,
    Negative,
    Positive,
}

impl EmotionCategory {
    /// Количество категорий
    pub const COUNT: usize = 10;

    /// Все категории в фиксированном порядке
    pub const ALL: [EmotionCategory; Self::COUNT] = [
        EmotionCategory::Anger,
        EmotionCategory::Anticipation,
        EmotionCategory::Disgust,
        EmotionCategory::Fear,
        EmotionCategory::Joy,
        EmotionCategory::Sadness,
        EmotionCategory::Surprise,
        EmotionCategory::Trust,
        EmotionCategory::Negative,
        EmotionCategory::Positive,
    ];

    /// Имя категории, как оно записано в файлах NRC EmoLex
    pub fn name(&self) -> &'static str {
        match self {
            EmotionCategory::Anger => "anger",
            EmotionCategory::Anticipation => "anticipation",
            EmotionCategory::Disgust => "disgust",
            EmotionCategory::Fear => "fear",
            EmotionCategory::Joy => "joy",
            EmotionCategory::Sadness => "sadness",
            EmotionCategory::Surprise => "surprise",
            EmotionCategory::Trust => "trust",
            EmotionCategory::Negative => "negative",
            EmotionCategory::Positive => "positive",
        }
    }

    /// Категория по имени из файла лексикона
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// Индекс категории внутри `SentimentVector`
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

/// Вектор настроения: счётчик на каждую категорию эмоций
///
/// Счётчики - точные целые. Сложение поэлементное,
/// ассоциативное и коммутативное.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SentimentVector {
    counts: [u32; EmotionCategory::COUNT],
}

impl SentimentVector {
    /// Нулевой вектор
    pub fn zero() -> Self {
        Self::default()
    }

    /// Счётчик категории
    pub fn get(&self, category: EmotionCategory) -> u32 {
        self.counts[category.index()]
    }

    /// Увеличить счётчик категории
    pub fn add(&mut self, category: EmotionCategory, count: u32) {
        self.counts[category.index()] += count;
    }

    /// Поэлементная сумма двух векторов
    pub fn merge(&self, other: &Self) -> Self {
        let mut counts = self.counts;
        for (dst, src) in counts.iter_mut().zip(other.counts.iter()) {
            *dst += src;
        }
        Self { counts }
    }

    /// Сумма последовательности векторов
    ///
    /// Используется и для "все отзывы одного приложения",
    /// и для сравнения приложений между собой.
    pub fn aggregate<'a>(vectors: impl IntoIterator<Item = &'a SentimentVector>) -> Self {
        vectors
            .into_iter()
            .fold(Self::zero(), |acc, v| acc.merge(v))
    }

    /// Пары (категория, счётчик) в фиксированном порядке
    pub fn iter(&self) -> impl Iterator<Item = (EmotionCategory, u32)> + '_ {
        EmotionCategory::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    /// Суммарный счётчик по всем категориям
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Все счётчики нулевые
    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }
}

impl std::fmt::Display for SentimentVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (category, count) in self.iter() {
            if count == 0 {
                continue;
            }
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", category.name(), count)?;
            first = false;
        }
        if first {
            write!(f, "(empty)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        for category in EmotionCategory::ALL {
            assert_eq!(EmotionCategory::from_name(category.name()), Some(category));
        }
        assert_eq!(EmotionCategory::from_name("unknown"), None);
    }

    #[test]
    fn test_vector_merge() {
        let mut a = SentimentVector::zero();
        a.add(EmotionCategory::Joy, 2);
        a.add(EmotionCategory::Trust, 1);

        let mut b = SentimentVector::zero();
        b.add(EmotionCategory::Joy, 1);
        b.add(EmotionCategory::Anger, 3);

        let merged = a.merge(&b);
        assert_eq!(merged.get(EmotionCategory::Joy), 3);
        assert_eq!(merged.get(EmotionCategory::Trust), 1);
        assert_eq!(merged.get(EmotionCategory::Anger), 3);
        assert_eq!(merged.total(), 7);
    }

    #[test]
    fn test_aggregate_commutative() {
        let mut a = SentimentVector::zero();
        a.add(EmotionCategory::Fear, 1);
        let mut b = SentimentVector::zero();
        b.add(EmotionCategory::Joy, 2);
        let mut c = SentimentVector::zero();
        c.add(EmotionCategory::Fear, 4);

        let forward = SentimentVector::aggregate([&a, &b, &c]);
        let backward = SentimentVector::aggregate([&c, &b, &a]);
        assert_eq!(forward, backward);
        assert_eq!(forward.get(EmotionCategory::Fear), 5);
    }

    #[test]
    fn test_document_functional_update() {
        let doc = Document::new("r1", "Original Text");
        let updated = doc.with_text("original text".to_string());

        // Исходный документ не изменился
        assert_eq!(doc.text, "Original Text");
        assert_eq!(updated.text, "original text");
        assert_eq!(updated.source_id, "r1");
    }
}
