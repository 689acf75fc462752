//! # Text mining отзывов App Store
//!
//! Библиотека для анализа текстов отзывов мобильных приложений:
//! загрузка отзывов из публичного фида, нормализация, частотный
//! индекс и лексикон-базированный анализ настроений.
//!
//! ## Модули
//!
//! - `api` - Работа с RSS JSON фидом отзывов iTunes
//! - `nlp` - Нормализация текста, частотный индекс, корреляции
//! - `sentiment` - Лексиконы эмоций и скоринг настроений
//! - `report` - Сводки по приложению и сравнение двух приложений
//! - `models` - Модели данных
//! - `error` - Таксономия ошибок

pub mod api;
pub mod error;
pub mod models;
pub mod nlp;
pub mod report;
pub mod sentiment;

pub use api::ReviewFeedClient;
pub use error::{Error, Result};
pub use nlp::{Pipeline, TermDocumentMatrix, TransformStep};
pub use report::ReportBuilder;
pub use sentiment::SentimentScorer;
