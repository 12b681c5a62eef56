use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, log, Level, LevelFilter};
use serde::Serialize;

use crate::time::EPOCH;

pub mod cli;
pub mod format;

pub fn write_json(value: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("could not create {path:?}"))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value)?;
    info!(
        "solution JSON written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap()
    );
    Ok(())
}

pub fn read_config(path: &Path) -> Result<crate::config::SolverConfig> {
    let file = File::open(path).with_context(|| format!("could not open config file {path:?}"))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context("config file is not valid JSON for SolverConfig")
}

/// fern logger init, in the style of `lbf::io::init_logger`: level, time
/// since epoch and thread name, chained to stdout.
pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    log!(Level::Info, "epoch: {}", jiff::Timestamp::now());
    Ok(())
}
