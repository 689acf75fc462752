//! Пример: Сравнение двух приложений
//!
//! Полный pipeline: загрузка отзывов двух приложений, нормализация,
//! частотный индекс, корреляции термов и сравнение настроений.
//!
//! Запуск:
//! ```bash
//! cargo run --example compare_apps
//! ```

use anyhow::Result;
use review_nlp::api::ReviewFeedClient;
use review_nlp::models::Document;
use review_nlp::nlp::{correlations, Pipeline, StopwordSet, TermDocumentMatrix};
use review_nlp::report::ReportBuilder;

// Candy Crush Saga и Clash of Clans
const APP_A: &str = "553834731";
const APP_B: &str = "529479190";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    println!("═══════════════════════════════════════════════════════════");
    println!("   App Review Comparison");
    println!("═══════════════════════════════════════════════════════════\n");

    let client = ReviewFeedClient::new();

    println!("📥 Fetching reviews for both apps...\n");
    let reviews_a = client.fetch_reviews(APP_A, 1).await?;
    let reviews_b = client.fetch_reviews(APP_B, 1).await?;
    println!(
        "App {}: {} reviews, app {}: {} reviews\n",
        APP_A,
        reviews_a.len(),
        APP_B,
        reviews_b.len()
    );

    // Отчёты и сравнение настроений
    let builder = ReportBuilder::new()?;
    let comparison = builder.compare(APP_A, &reviews_a, APP_B, &reviews_b);

    println!("{}", comparison.left);
    println!("{}", comparison.right);
    println!("{}", comparison);

    // Данные для облака слов первого приложения
    println!("\n☁️  Word cloud data (app {}):", APP_A);
    println!("────────────────────────────────");
    for (term, count) in comparison.left.word_cloud.iter().take(15) {
        println!("   {:20} {}", term, count);
    }

    // Корреляции с самым частым термом
    if let Some((top_term, _)) = comparison.left.top_terms.first() {
        println!("\n🔗 Terms correlated with `{}` (r >= 0.3):", top_term);
        println!("──────────────────────────────────────────");

        let pipeline = Pipeline::standard(StopwordSet::english())?;
        let docs: Vec<Document> = reviews_a.iter().map(Document::from_review).collect();
        let matrix = TermDocumentMatrix::build(&pipeline.normalize_all(&docs));

        match correlations(&matrix, top_term, 0.3) {
            Ok(correlated) => {
                if correlated.is_empty() {
                    println!("   No terms above threshold");
                }
                for (term, r) in correlated.iter().take(10) {
                    println!("   {:20} r = {:.3}", term, r);
                }
            }
            Err(e) => println!("   Correlation unavailable: {}", e),
        }
    }

    println!("\n✅ Done!\n");

    Ok(())
}
