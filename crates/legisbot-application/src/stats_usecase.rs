//! Admin statistics use case.
//!
//! Three independent one-shot fetches, each mapped into a display-ready
//! `ChartSeries`. A failed fetch degrades to `None` ("no data") for that
//! chart only; the other charts are unaffected.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate};

use legisbot_core::api::LegisApi;
use legisbot_core::chart::ChartSeries;

/// Use case for the admin charts screen.
pub struct StatsUseCase {
    api: Arc<dyn LegisApi>,
}

impl StatsUseCase {
    pub fn new(api: Arc<dyn LegisApi>) -> Self {
        Self { api }
    }

    /// User demographics, one bucket per group.
    pub async fn demographics_series(&self) -> Option<ChartSeries> {
        match self.api.demographics().await {
            Ok(rows) => Some(ChartSeries::from_pairs(
                rows.into_iter().map(|row| (row.group, row.count)),
            )),
            Err(err) => {
                tracing::warn!("could not load demographics stats: {err}");
                None
            }
        }
    }

    /// Queries per day, with dates reformatted for display.
    pub async fn usage_series(&self) -> Option<ChartSeries> {
        match self.api.usage().await {
            Ok(rows) => Some(ChartSeries::from_pairs(
                rows.into_iter()
                    .map(|row| (format_usage_date(&row.date), row.count)),
            )),
            Err(err) => {
                tracing::warn!("could not load usage stats: {err}");
                None
            }
        }
    }

    /// Most frequent queries, one bucket per query text.
    pub async fn top_queries_series(&self) -> Option<ChartSeries> {
        match self.api.top_queries().await {
            Ok(rows) => Some(ChartSeries::from_pairs(
                rows.into_iter().map(|row| (row.group, row.count)),
            )),
            Err(err) => {
                tracing::warn!("could not load top queries: {err}");
                None
            }
        }
    }
}

/// Renders a usage date as a local date, passing the raw value through
/// when it cannot be parsed.
fn format_usage_date(raw: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return datetime.format("%d/%m/%Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use legisbot_core::LegisError;
    use legisbot_core::chart::{GroupCount, UsagePoint};
    use legisbot_core::chat::{ChatAnswer, DocumentContext};
    use legisbot_core::history::ChatSessionRecord;
    use legisbot_core::user::{OnboardingProfile, User};

    /// Mock where each stats endpoint can fail independently.
    #[derive(Default)]
    struct MockStatsApi {
        fail_demographics: bool,
        fail_usage: bool,
        fail_top_queries: bool,
    }

    #[async_trait::async_trait]
    impl LegisApi for MockStatsApi {
        fn set_token(&self, _token: &str) {}

        fn clear_token(&self) {}

        async fn obtain_token(&self, _u: &str, _p: &str) -> Result<String, LegisError> {
            unimplemented!("not exercised by stats tests")
        }

        async fn current_user(&self) -> Result<User, LegisError> {
            unimplemented!("not exercised by stats tests")
        }

        async fn register(&self, _e: &str, _p: &str) -> Result<(), LegisError> {
            unimplemented!("not exercised by stats tests")
        }

        async fn complete_onboarding(&self, _p: &OnboardingProfile) -> Result<User, LegisError> {
            unimplemented!("not exercised by stats tests")
        }

        async fn list_contexts(&self) -> Result<Vec<DocumentContext>, LegisError> {
            Ok(Vec::new())
        }

        async fn submit_query(&self, _q: &str, _h: Option<i64>) -> Result<ChatAnswer, LegisError> {
            unimplemented!("not exercised by stats tests")
        }

        async fn chat_history(&self) -> Result<Vec<ChatSessionRecord>, LegisError> {
            Ok(Vec::new())
        }

        async fn demographics(&self) -> Result<Vec<GroupCount>, LegisError> {
            if self.fail_demographics {
                return Err(LegisError::api(500, None));
            }
            Ok(vec![
                GroupCount {
                    group: "18-25".to_string(),
                    count: 4.0,
                },
                GroupCount {
                    group: "26-40".to_string(),
                    count: 9.0,
                },
            ])
        }

        async fn usage(&self) -> Result<Vec<UsagePoint>, LegisError> {
            if self.fail_usage {
                return Err(LegisError::api(500, None));
            }
            Ok(vec![UsagePoint {
                date: "2024-11-02".to_string(),
                count: 12.0,
            }])
        }

        async fn top_queries(&self) -> Result<Vec<GroupCount>, LegisError> {
            if self.fail_top_queries {
                return Err(LegisError::network("timeout"));
            }
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_demographics_maps_groups_to_series() {
        let stats = StatsUseCase::new(Arc::new(MockStatsApi::default()));
        let series = stats.demographics_series().await.unwrap();
        assert_eq!(series.labels, vec!["18-25", "26-40"]);
        assert_eq!(series.values, vec![4.0, 9.0]);
    }

    #[tokio::test]
    async fn test_usage_dates_are_reformatted() {
        let stats = StatsUseCase::new(Arc::new(MockStatsApi::default()));
        let series = stats.usage_series().await.unwrap();
        assert_eq!(series.labels, vec!["02/11/2024"]);
    }

    #[tokio::test]
    async fn test_empty_rows_yield_empty_series() {
        let stats = StatsUseCase::new(Arc::new(MockStatsApi::default()));
        let series = stats.top_queries_series().await.unwrap();
        assert!(series.is_empty());
    }

    #[tokio::test]
    async fn test_each_chart_degrades_independently() {
        let stats = StatsUseCase::new(Arc::new(MockStatsApi {
            fail_usage: true,
            ..MockStatsApi::default()
        }));
        assert!(stats.demographics_series().await.is_some());
        assert!(stats.usage_series().await.is_none());
        assert!(stats.top_queries_series().await.is_some());
    }

    #[test]
    fn test_format_usage_date_fallback() {
        assert_eq!(format_usage_date("2024-11-02"), "02/11/2024");
        assert_eq!(
            format_usage_date("2024-11-02T00:00:00Z"),
            "02/11/2024"
        );
        assert_eq!(format_usage_date("noviembre"), "noviembre");
    }
}
