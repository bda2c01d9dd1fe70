mod commands;
mod errors;
mod random;
mod render;
#[cfg(test)]
mod tests;

use std::io;
use std::io::{BufRead, Write};

use clap::Parser;
use tracing::{debug, warn};

use crate::ledger::TransactionStore;
use crate::models::LedgerError;
use crate::session::commands::{split_line, SessionCommand, SessionLine};
use crate::session::random::random_transaction;
use crate::session::render::{render_list, render_totals, render_transaction, ABOUT};
use crate::storage::{Storage, StorageError};

pub use errors::SessionError;

const PROMPT: &str = "> ";

/// The response to one input line.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Reply {
    Continue(String),
    Exit(String)
}

/// Interactive request/response loop over an explicitly owned store.
///
/// Every input line is one complete command that maps to a single store operation.
/// Successful changes are written through `storage` before the reply is produced.
pub struct Session<S: Storage> {
    store: TransactionStore,
    storage: S,
    debug: bool
}

impl<S: Storage> Session<S> {
    pub fn new(store: TransactionStore, storage: S, debug: bool) -> Self {
        Self { store, storage, debug }
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    /// Answers lines from `input` until `exit` or the end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        for line in input.lines() {
            match self.execute(&line?) {
                Reply::Continue(text) => {
                    if !text.is_empty() {
                        writeln!(output, "{text}")?;
                    }
                }
                Reply::Exit(text) => {
                    writeln!(output, "{text}")?;
                    return output.flush();
                }
            }

            write!(output, "{PROMPT}")?;
            output.flush()?;
        }

        writeln!(output)?;
        output.flush()
    }

    /// Parses and runs a single command line. Errors are turned into a reply and never end the session.
    pub fn execute(&mut self, line: &str) -> Reply {
        let arguments = match split_line(line) {
            Ok(arguments) => arguments,
            Err(error) => return Reply::Continue(format!("Error: {error}"))
        };

        if arguments.is_empty() {
            return Reply::Continue(String::new());
        }

        let command = match SessionLine::try_parse_from(arguments) {
            Ok(parsed) => parsed.command,
            Err(error) => return Reply::Continue(error.render().to_string().trim_end().to_string())
        };

        debug!("{command:?}");

        match self.dispatch(command) {
            Ok(reply) => reply,
            Err(error) => {
                warn!("{error}");
                Reply::Continue(format!("Error: {error}"))
            }
        }
    }

    fn dispatch(&mut self, command: SessionCommand) -> Result<Reply, SessionError> {
        let text = match command {
            SessionCommand::Add(args) => {
                let transaction = self.store.add(args.into())?;
                self.persist()?;
                format!("Saved successfully!\n{}", render_transaction(&transaction))
            }
            SessionCommand::List(args) => {
                if self.store.is_empty() {
                    return Ok(Reply::Continue("No transactions added yet".to_string()));
                }

                let filter = args.filter();
                let transactions = self.store.list(&filter, args.sort);
                let totals = self.store.totals(&filter);
                render_list(args.category, &transactions, &totals)
            }
            SessionCommand::Show(args) => {
                let transaction = self.store.get(args.id).ok_or_else(|| LedgerError::not_found(args.id))?;
                render_transaction(transaction)
            }
            SessionCommand::Delete(args) => {
                let transaction = self.store.delete(args.id)?;
                self.persist()?;
                format!("Deleted successfully!\n{}", render_transaction(&transaction))
            }
            SessionCommand::Edit(args) => {
                let transaction = self.store.edit(args.id, &args.updates())?;
                self.persist()?;
                format!("Changed successfully!\n{}", render_transaction(&transaction))
            }
            SessionCommand::Totals(args) => {
                let totals = self.store.totals(&args.filter());
                render_totals(args.category, &totals)
            }
            SessionCommand::About => ABOUT.to_string(),
            SessionCommand::Random => {
                if !self.debug {
                    return Ok(Reply::Continue("Random transactions are only available in debug mode".to_string()));
                }

                let transaction = self.store.add(random_transaction(&mut rand::rng()))?;
                self.persist()?;
                format!("Saved successfully!\n{}", render_transaction(&transaction))
            }
            SessionCommand::Exit => return Ok(Reply::Exit("Goodbye!".to_string()))
        };

        Ok(Reply::Continue(text))
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.storage.save(self.store.transactions())
    }
}
