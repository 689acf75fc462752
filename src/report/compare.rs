//! Отчёты по приложениям
//!
//! Собирает из отзывов одного приложения сводку (топ термов, данные
//! для облака слов, суммарный вектор настроения) и сравнивает два
//! приложения между собой. Все результаты - простые структуры,
//! пригодные для любого слоя визуализации.

use tracing::debug;

use crate::models::{Document, EmotionCategory, Review, SentimentVector};
use crate::nlp::{Pipeline, TermDocumentMatrix};
use crate::sentiment::{EmotionLexicon, NrcLexicon, SentimentScorer};

/// Конфигурация отчёта
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Сколько термов включать в топ
    pub top_n: usize,
    /// Максимум термов в данных для облака слов
    pub cloud_max_terms: usize,
    /// Минимальная частота терма для облака слов
    pub cloud_min_count: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            cloud_max_terms: 100,
            cloud_min_count: 2,
        }
    }
}

/// Сводка по отзывам одного приложения
#[derive(Debug, Clone)]
pub struct AppReport {
    /// Идентификатор приложения
    pub app_id: String,
    /// Количество проанализированных отзывов
    pub reviews_analyzed: usize,
    /// Суммарное число токенов после нормализации
    pub total_tokens: u64,
    /// Топ термов по агрегированной частоте
    pub top_terms: Vec<(String, u32)>,
    /// Пары (терм, частота) для внешнего рендера облака слов
    pub word_cloud: Vec<(String, u32)>,
    /// Суммарный вектор настроения (без нормализации по длине)
    pub sentiment: SentimentVector,
}

/// Сравнение двух приложений
#[derive(Debug, Clone)]
pub struct AppComparison {
    pub left: AppReport,
    pub right: AppReport,
}

impl AppComparison {
    /// Разность счётчиков категории: left минус right
    pub fn sentiment_delta(&self, category: EmotionCategory) -> i64 {
        self.left.sentiment.get(category) as i64 - self.right.sentiment.get(category) as i64
    }
}

/// Построитель отчётов по отзывам
#[derive(Debug, Clone)]
pub struct ReportBuilder<L: EmotionLexicon> {
    /// Pipeline нормализации текста отзывов
    pipeline: Pipeline,
    /// Скорер настроений
    scorer: SentimentScorer<L>,
    /// Конфигурация
    config: ReportConfig,
}

impl ReportBuilder<NrcLexicon> {
    /// Построитель со стандартным pipeline и встроенным лексиконом
    pub fn new() -> crate::error::Result<Self> {
        Ok(Self {
            pipeline: Pipeline::standard(crate::nlp::StopwordSet::english())?,
            scorer: SentimentScorer::new(),
            config: ReportConfig::default(),
        })
    }
}

impl<L: EmotionLexicon> ReportBuilder<L> {
    /// Построитель из готовых частей
    pub fn with_parts(pipeline: Pipeline, scorer: SentimentScorer<L>, config: ReportConfig) -> Self {
        Self {
            pipeline,
            scorer,
            config,
        }
    }

    /// Построить сводку по отзывам одного приложения
    pub fn build_report(&self, app_id: &str, reviews: &[Review]) -> AppReport {
        let raw_docs: Vec<Document> = reviews.iter().map(Document::from_review).collect();
        let docs = self.pipeline.normalize_all(&raw_docs);

        let matrix = TermDocumentMatrix::build(&docs);
        let table = matrix.total_frequency();

        debug!(
            app_id = %app_id,
            documents = matrix.n_documents(),
            terms = matrix.n_terms(),
            "app report built"
        );

        AppReport {
            app_id: app_id.to_string(),
            reviews_analyzed: reviews.len(),
            total_tokens: matrix.total_tokens(),
            top_terms: table.top_n(self.config.top_n),
            word_cloud: table
                .word_cloud_data(self.config.cloud_max_terms, self.config.cloud_min_count),
            sentiment: self.scorer.score_total(&docs),
        }
    }

    /// Построить сравнение двух приложений
    pub fn compare(
        &self,
        left_app_id: &str,
        left_reviews: &[Review],
        right_app_id: &str,
        right_reviews: &[Review],
    ) -> AppComparison {
        AppComparison {
            left: self.build_report(left_app_id, left_reviews),
            right: self.build_report(right_app_id, right_reviews),
        }
    }
}

impl std::fmt::Display for AppReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "═══════════════════════════════════════")?;
        writeln!(f, "  App Report: {}", self.app_id)?;
        writeln!(f, "═══════════════════════════════════════")?;
        writeln!(f, "  Reviews analyzed: {}", self.reviews_analyzed)?;
        writeln!(f, "  Tokens after normalization: {}", self.total_tokens)?;
        writeln!(f, "  Sentiment: {}", self.sentiment)?;
        writeln!(f, "───────────────────────────────────────")?;
        writeln!(f, "  Top terms:")?;
        for (term, count) in &self.top_terms {
            writeln!(f, "    • {} ({})", term, count)?;
        }
        writeln!(f, "═══════════════════════════════════════")?;
        Ok(())
    }
}

impl std::fmt::Display for AppComparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Sentiment comparison: {} vs {}",
            self.left.app_id, self.right.app_id
        )?;
        writeln!(
            f,
            "  {:<14} {:>10} {:>10} {:>8}",
            "category", self.left.app_id, self.right.app_id, "delta"
        )?;
        for category in EmotionCategory::ALL {
            writeln!(
                f,
                "  {:<14} {:>10} {:>10} {:>+8}",
                category.name(),
                self.left.sentiment.get(category),
                self.right.sentiment.get(category),
                self.sentiment_delta(category)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{StopwordSet, TransformStep};

    fn review(id: &str, body: &str) -> Review {
        Review {
            id: id.to_string(),
            author: "tester".to_string(),
            version: "1.0".to_string(),
            rating: Some(4),
            title: String::new(),
            body: body.to_string(),
            updated: None,
        }
    }

    fn builder() -> ReportBuilder<NrcLexicon> {
        let pipeline = Pipeline::new(vec![
            TransformStep::Lowercase,
            TransformStep::RemoveNumbers,
            TransformStep::RemovePunctuation,
            TransformStep::RemoveStopwords(StopwordSet::english()),
            TransformStep::StripWhitespace,
        ]);
        ReportBuilder::with_parts(pipeline, SentimentScorer::new(), ReportConfig::default())
    }

    #[test]
    fn test_build_report() {
        let reviews = vec![
            review("1", "I love this game, great fun!"),
            review("2", "The game crashes all the time."),
            review("3", "Great game, love the new update."),
        ];

        let report = builder().build_report("app_a", &reviews);

        assert_eq!(report.reviews_analyzed, 3);
        assert_eq!(report.top_terms[0].0, "game");
        assert_eq!(report.top_terms[0].1, 3);
        assert!(report.sentiment.get(EmotionCategory::Positive) >= 2);
        assert!(report.sentiment.get(EmotionCategory::Negative) >= 1);
    }

    #[test]
    fn test_compare_deltas() {
        let happy = vec![review("1", "love love great"), review("2", "great fun")];
        let sad = vec![review("3", "terrible crashes"), review("4", "awful bugs")];

        let comparison = builder().compare("happy_app", &happy, "sad_app", &sad);

        assert!(comparison.sentiment_delta(EmotionCategory::Positive) > 0);
        assert!(comparison.sentiment_delta(EmotionCategory::Negative) < 0);
    }

    #[test]
    fn test_display_renders_all_categories() {
        let comparison = builder().compare("a", &[review("1", "love")], "b", &[]);
        let rendered = format!("{}", comparison);
        for category in EmotionCategory::ALL {
            assert!(rendered.contains(category.name()));
        }
    }

    #[test]
    fn test_empty_reviews() {
        let report = builder().build_report("empty", &[]);
        assert_eq!(report.reviews_analyzed, 0);
        assert_eq!(report.total_tokens, 0);
        assert!(report.top_terms.is_empty());
        assert!(report.sentiment.is_zero());
    }
}
