//! Работа со списками отзывов
//!
//! Фильтрация и явная дедупликация. Сам пайплайн дубликаты
//! не удаляет: дедупликация - сознательное решение вызывающего кода.

use crate::models::Review;
use std::collections::HashSet;

/// Фильтр отзывов
#[derive(Debug, Clone, Default)]
pub struct ReviewFilter {
    /// Фильтр по версии приложения
    pub version: Option<String>,
    /// Минимальная оценка в звёздах
    pub min_rating: Option<u8>,
    /// Максимальная оценка в звёздах
    pub max_rating: Option<u8>,
    /// Поиск по ключевым словам в заголовке/тексте
    pub keywords: Option<Vec<String>>,
}

impl ReviewFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_min_rating(mut self, rating: u8) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn with_max_rating(mut self, rating: u8) -> Self {
        self.max_rating = Some(rating);
        self
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = Some(keywords);
        self
    }

    /// Применить фильтр к списку отзывов
    pub fn apply(&self, reviews: &[Review]) -> Vec<Review> {
        reviews.iter().filter(|r| self.matches(r)).cloned().collect()
    }

    /// Проверить, соответствует ли отзыв фильтру
    fn matches(&self, review: &Review) -> bool {
        if let Some(ref version) = self.version {
            if &review.version != version {
                return false;
            }
        }

        if let Some(min) = self.min_rating {
            match review.rating {
                Some(rating) if rating >= min => {}
                _ => return false,
            }
        }

        if let Some(max) = self.max_rating {
            match review.rating {
                Some(rating) if rating <= max => {}
                _ => return false,
            }
        }

        if let Some(ref keywords) = self.keywords {
            let text = format!(
                "{} {}",
                review.title.to_lowercase(),
                review.body.to_lowercase()
            );
            let has_keyword = keywords.iter().any(|k| text.contains(&k.to_lowercase()));
            if !has_keyword && !keywords.is_empty() {
                return false;
            }
        }

        true
    }
}

/// Явная дедупликация отзывов
///
/// Отбрасывает повторные вхождения по `id`, затем по байт-идентичному
/// телу отзыва. Сохраняется первое вхождение, порядок остальных
/// не меняется.
pub fn dedup_reviews(reviews: &[Review]) -> Vec<Review> {
    let mut seen_ids: HashSet<&str> = HashSet::new();
    let mut seen_bodies: HashSet<&str> = HashSet::new();

    reviews
        .iter()
        .filter(|r| seen_ids.insert(r.id.as_str()) && seen_bodies.insert(r.body.as_str()))
        .cloned()
        .collect()
}
