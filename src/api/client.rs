//! HTTP клиент фида отзывов iTunes
//!
//! Получает отзывы из публичного RSS JSON фида App Store
//! (`/rss/customerreviews`). Запрос одноразовый, без ретраев;
//! production-вариант должен добавить ограниченный retry с
//! backoff на транзиентных сетевых ошибках.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::Review;

/// Конфигурация фида отзывов
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Базовый URL фида
    pub base_url: String,
    /// Код страны витрины (us, gb, de, ...)
    pub country: String,
    /// Таймаут запроса в секундах
    pub timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: "https://itunes.apple.com".to_string(),
            country: "us".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Клиент фида отзывов App Store
#[derive(Debug, Clone)]
pub struct ReviewFeedClient {
    client: Client,
    config: FeedConfig,
}

impl ReviewFeedClient {
    /// Клиент с настройками по умолчанию
    pub fn new() -> Self {
        Self::with_config(FeedConfig::default())
    }

    /// Клиент с пользовательской конфигурацией
    pub fn with_config(config: FeedConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Получить страницу отзывов приложения
    ///
    /// Возвращает отзывы в порядке фида (страница обычно <= 50 записей;
    /// пустая страница - пустой список). Сетевая ошибка или битый JSON -
    /// `Error::Fetch`; отсутствие обязательного поля - `Error::Schema`.
    /// Дубликаты не удаляются - см. `dedup_reviews`.
    pub async fn fetch_reviews(&self, app_id: &str, page: u32) -> Result<Vec<Review>> {
        let endpoint = format!(
            "{}/{}/rss/customerreviews/page={}/id={}/sortby=mostrecent/json",
            self.config.base_url, self.config.country, page, app_id
        );

        debug!(endpoint = %endpoint, "fetching review feed page");

        let response = self
            .client
            .get(&endpoint)
            .send()
            .await
            .map_err(|e| Error::Fetch {
                endpoint: endpoint.clone(),
                reason: e.to_string(),
            })?;

        let payload = response.text().await.map_err(|e| Error::Fetch {
            endpoint: endpoint.clone(),
            reason: e.to_string(),
        })?;

        let feed: FeedResponse =
            serde_json::from_str(&payload).map_err(|e| Error::Fetch {
                endpoint: endpoint.clone(),
                reason: format!("malformed JSON: {}", e),
            })?;

        let reviews = parse_feed(feed, &endpoint, &payload)?;
        debug!(count = reviews.len(), "review feed page parsed");
        Ok(reviews)
    }
}

impl Default for ReviewFeedClient {
    fn default() -> Self {
        Self::new()
    }
}

// ============= Типы ответа фида =============

#[derive(Debug, Deserialize)]
struct FeedResponse {
    feed: Option<Feed>,
}

#[derive(Debug, Deserialize)]
struct Feed {
    // Пустая страница приходит вообще без `entry`
    #[serde(default)]
    entry: Option<Entries>,
}

/// Фид отдаёт объект вместо массива, когда запись одна
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Entries {
    Many(Vec<FeedEntry>),
    One(Box<FeedEntry>),
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FeedEntry {
    id: Option<Label>,
    author: Option<Author>,
    #[serde(rename = "im:version")]
    version: Option<Label>,
    #[serde(rename = "im:rating")]
    rating: Option<Label>,
    title: Option<Label>,
    content: Option<Label>,
    updated: Option<Label>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct Author {
    name: Option<Label>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct Label {
    label: Option<String>,
}

impl Label {
    fn into_value(self) -> Option<String> {
        self.label
    }
}

fn parse_feed(feed: FeedResponse, endpoint: &str, payload: &str) -> Result<Vec<Review>> {
    let schema_err = |field: &str| Error::Schema {
        endpoint: endpoint.to_string(),
        field: field.to_string(),
        snippet: Error::snippet(payload),
    };

    let feed = feed.feed.ok_or_else(|| schema_err("feed"))?;

    let entries = match feed.entry {
        Some(Entries::Many(entries)) => entries,
        Some(Entries::One(entry)) => vec![*entry],
        None => return Ok(Vec::new()),
    };

    entries
        .into_iter()
        .map(|entry| {
            let id = entry
                .id
                .and_then(Label::into_value)
                .ok_or_else(|| schema_err("entry.id.label"))?;
            let author = entry
                .author
                .and_then(|a| a.name)
                .and_then(Label::into_value)
                .ok_or_else(|| schema_err("entry.author.name.label"))?;
            let version = entry
                .version
                .and_then(Label::into_value)
                .ok_or_else(|| schema_err("entry.im:version.label"))?;
            let title = entry
                .title
                .and_then(Label::into_value)
                .ok_or_else(|| schema_err("entry.title.label"))?;
            let body = entry
                .content
                .and_then(Label::into_value)
                .ok_or_else(|| schema_err("entry.content.label"))?;

            // rating и updated фид отдаёт не всегда - оставляем опциональными
            let rating = entry
                .rating
                .and_then(Label::into_value)
                .and_then(|r| r.parse::<u8>().ok());
            let updated = entry
                .updated
                .and_then(Label::into_value)
                .and_then(|u| chrono::DateTime::parse_from_rfc3339(&u).ok())
                .map(|dt| dt.with_timezone(&chrono::Utc));

            Ok(Review {
                id,
                author,
                version,
                rating,
                title,
                body,
                updated,
            })
        })
        .collect()
}
