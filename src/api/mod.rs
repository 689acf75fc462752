//! Модуль работы с фидом отзывов App Store
//!
//! Предоставляет:
//! - HTTP клиент публичного RSS JSON фида отзывов
//! - Фильтрацию и явную дедупликацию отзывов

mod client;
mod reviews;

pub use client::{FeedConfig, ReviewFeedClient};
pub use reviews::{dedup_reviews, ReviewFilter};
