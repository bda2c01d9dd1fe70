mod config;
mod ledger;
mod models;
mod session;
mod storage;
mod types;

use std::io::{stderr, stdin, stdout, BufWriter};
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::{Args, Config, StorageBackend};
use crate::ledger::TransactionStore;
use crate::session::Session;
use crate::storage::{CsvStorage, MemoryStorage, Storage};

fn main() -> Result<()> {
    let config = Config::from(Args::parse());

    setup_logging(config.log_level);

    match config.backend {
        StorageBackend::Csv(path) => {
            let storage = CsvStorage::new(path);
            info!("Using data file [{}]", storage.path().display());
            run(storage, config.debug)
        }
        StorageBackend::Memory => run(MemoryStorage::new(), config.debug)
    }
}

fn run<S: Storage>(storage: S, debug: bool) -> Result<()> {
    let timer = Instant::now();
    let store = TransactionStore::from_transactions(storage.load()?);

    info!("Loaded {} transactions in: {:?}", store.len(), timer.elapsed());

    let mut session = Session::new(store, storage, debug);
    let mut output = BufWriter::new(stdout().lock());

    session.run(stdin().lock(), &mut output)?;

    info!("Session ended with {} transactions", session.store().len());

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the session replies, logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
