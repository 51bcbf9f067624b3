use anyhow::Context;
use serde::Serialize;
use storms::{StormProfile, StormSource};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StormSummary<'a> {
    id: &'a str,
    name: &'a str,
    fixes: usize,
    peak_wind: Option<i32>,
    track_length_nm: f64,
    mean_speed_knots: Option<f64>,
}

impl<'a> From<&'a StormProfile> for StormSummary<'a> {
    fn from(storm: &'a StormProfile) -> Self {
        StormSummary {
            id: &storm.id,
            name: &storm.name,
            fixes: storm.route.len(),
            peak_wind: storm.peak_wind(),
            track_length_nm: storm.track_length_nm(),
            mean_speed_knots: storm.mean_speed_knots(),
        }
    }
}

pub fn exec<S: StormSource + ?Sized>(source: &S, json: bool) -> anyhow::Result<()> {
    let storms = source.storms().context("Failed to load storm tracks")?;
    let summaries: Vec<StormSummary> = storms.iter().map(StormSummary::from).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for summary in &summaries {
        println!("{}", line(summary));
    }
    println!("{} storms", summaries.len());
    Ok(())
}

fn line(summary: &StormSummary) -> String {
    let peak = summary
        .peak_wind
        .map(|kt| format!("{:>3} kt", kt))
        .unwrap_or_else(|| "  - kt".to_string());
    let speed = summary
        .mean_speed_knots
        .map(|kt| format!("{:>5.1} kt", kt))
        .unwrap_or_else(|| "    - kt".to_string());

    format!(
        "{:<10} {:<12} {:>3} fixes  peak {}  {:>7.1} nm  {}",
        summary.id, summary.name, summary.fixes, peak, summary.track_length_nm, speed
    )
}
