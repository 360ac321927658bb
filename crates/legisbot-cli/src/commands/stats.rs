//! Admin statistics screen: three independent charts rendered as text bars.

use anyhow::Result;
use colored::Colorize;

use legisbot_application::StatsUseCase;
use legisbot_core::chart::ChartSeries;

use crate::app::App;

const BAR_WIDTH: f64 = 40.0;
const LABEL_WIDTH: usize = 24;

fn clip(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let clipped: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{clipped}…")
}

fn render_chart(title: &str, series: Option<&ChartSeries>, empty_message: &str) {
    println!();
    println!("{}", title.bold());

    let Some(series) = series.filter(|series| !series.is_empty()) else {
        println!("{}", empty_message.bright_black());
        return;
    };

    let max = series.max_value();
    for (label, value) in series.labels.iter().zip(&series.values) {
        let bar_len = if max > 0.0 {
            ((value / max) * BAR_WIDTH).round() as usize
        } else {
            0
        };
        println!(
            "{:>width$} | {} {}",
            clip(label, LABEL_WIDTH),
            "█".repeat(bar_len).cyan(),
            value,
            width = LABEL_WIDTH
        );
    }
}

pub async fn run(app: &App) -> Result<()> {
    app.require_access(true).await?;

    println!("{}", "=== Estadísticas de uso ===".bright_magenta().bold());

    let stats = StatsUseCase::new(app.api.clone());
    // Independent fetches; each chart degrades on its own.
    let demographics = stats.demographics_series().await;
    let usage = stats.usage_series().await;
    let top_queries = stats.top_queries_series().await;

    render_chart(
        "Estadísticas Demográficas",
        demographics.as_ref(),
        "No hay datos demográficos para mostrar.",
    );
    render_chart(
        "Uso del Sistema por Día",
        usage.as_ref(),
        "No hay datos de uso para mostrar.",
    );
    render_chart(
        "Consultas Más Frecuentes",
        top_queries.as_ref(),
        "No hay queries para mostrar.",
    );

    Ok(())
}
