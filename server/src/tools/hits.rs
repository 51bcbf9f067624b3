use anyhow::Context;
use storms::{LatLon, StormSource};

use crate::cli::HitsArgs;

pub fn exec<S: StormSource + ?Sized>(source: &S, args: HitsArgs) -> anyhow::Result<()> {
    let point = LatLon::parse(&args.latitude, &args.longitude)?;
    let names = storms::search(source, &point).context("Failed to load storm tracks")?;

    print!("{}", render(&point, &names, args.json)?);
    Ok(())
}

fn render(point: &LatLon, names: &[String], json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(names)?));
    }
    if names.is_empty() {
        return Ok(format!("No storm hit {}, {}\n", point.lat(), point.lon()));
    }
    Ok(names.iter().map(|name| format!("{}\n", name)).collect())
}
