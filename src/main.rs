use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use listing_check::checks::run_all;
use listing_check::config::CheckParams;
use listing_check::data::loader::load_file;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (data_path, ref_path) = match (args.next(), args.next()) {
        (Some(d), Some(r)) => (PathBuf::from(d), PathBuf::from(r)),
        _ => bail!("usage: listing-check <data> <reference> [params.json]"),
    };
    let params = match args.next() {
        Some(p) => CheckParams::from_json_file(&PathBuf::from(p))?,
        None => CheckParams::default(),
    };

    let data = load_file(&data_path)
        .with_context(|| format!("loading {}", data_path.display()))?;
    let reference = load_file(&ref_path)
        .with_context(|| format!("loading {}", ref_path.display()))?;
    log::info!(
        "loaded {} rows ({} reference) from {}",
        data.len(),
        reference.len(),
        data_path.display()
    );

    let mut failures = 0;
    for report in run_all(&data, &reference, &params) {
        match &report.outcome {
            Ok(()) => log::info!("{}: ok", report.name),
            Err(e) => {
                failures += 1;
                log::error!("{}: {e}", report.name);
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of 6 checks failed");
    }
    Ok(())
}
