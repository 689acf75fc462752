//! Пример: Загрузка отзывов из App Store
//!
//! Демонстрирует работу с RSS JSON фидом iTunes: загрузку страницы
//! отзывов, фильтрацию и явную дедупликацию.
//!
//! Запуск:
//! ```bash
//! cargo run --example fetch_reviews
//! ```

use anyhow::Result;
use review_nlp::api::{dedup_reviews, ReviewFeedClient, ReviewFilter};

// Candy Crush Saga в американском App Store
const APP_ID: &str = "553834731";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    println!("═══════════════════════════════════════════════════════════");
    println!("   App Store Review Fetcher");
    println!("═══════════════════════════════════════════════════════════\n");

    // Создаём клиент
    let client = ReviewFeedClient::new();

    // Получаем первую страницу отзывов
    println!("📥 Fetching reviews for app {}...\n", APP_ID);
    let reviews = client.fetch_reviews(APP_ID, 1).await?;

    println!("Found {} reviews\n", reviews.len());

    for review in reviews.iter().take(10) {
        let stars = review
            .rating
            .map(|r| "★".repeat(r as usize))
            .unwrap_or_default();
        println!("───────────────────────────────────────");
        println!("📌 {} {}", review.title, stars);
        println!("   Author: {} (v{})", review.author, review.version);
        if let Some(updated) = review.updated {
            println!("   Date: {}", updated.format("%Y-%m-%d"));
        }
        let body: String = review.body.chars().take(120).collect();
        println!("   {}", body);
    }

    // Только негативные отзывы
    println!("\n🔻 Low-rated reviews (1-2 stars):");
    println!("──────────────────────────────────");
    let negative = ReviewFilter::new().with_max_rating(2).apply(&reviews);

    if negative.is_empty() {
        println!("   No low-rated reviews on this page");
    } else {
        for review in &negative {
            println!("   • {} — {}", review.title, review.author);
        }
    }

    // Отзывы, упоминающие краши
    println!("\n🔍 Reviews mentioning crashes:");
    println!("──────────────────────────────");
    let crashes = ReviewFilter::new()
        .with_keywords(vec!["crash".to_string(), "freeze".to_string()])
        .apply(&reviews);

    if crashes.is_empty() {
        println!("   No crash reports on this page");
    } else {
        for review in &crashes {
            println!("   • {}", review.title);
        }
    }

    // Явная дедупликация
    let deduped = dedup_reviews(&reviews);
    println!(
        "\n🧹 Deduplication: {} -> {} reviews",
        reviews.len(),
        deduped.len()
    );

    println!("\n✅ Done!\n");

    Ok(())
}
