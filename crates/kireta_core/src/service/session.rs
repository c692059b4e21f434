//! Application-session owner of the store.
//!
//! # Responsibility
//! - Rebuild the store from the journal on open, seeding sample data on
//!   first launch when configured.
//! - Route every mutation through validate, journal append, apply.
//! - Offer the use cases screens trigger (add, rename, check for a date).
//!
//! # Invariants
//! - A command reaches the journal only after the store has validated it.
//! - A failed journal append leaves the store unchanged.
//! - Sample data reaches the journal as a single batch.
//! - The store is never handed out mutably.

use crate::config::SessionConfig;
use crate::model::check_list::CheckList;
use crate::model::date::DateString;
use crate::model::id::ItemId;
use crate::model::item::Item;
use crate::repo::journal_repo::{CommandJournal, NullJournal, RepoError, SqliteCommandJournal};
use crate::store::command::{handle, validate_command, Command};
use crate::store::query::{find_check_list_by_date, find_checked, find_item};
use crate::store::sample::sample_commands;
use crate::store::{Store, StoreError};
use log::{error, info};
use std::time::Instant;
use thiserror::Error;

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Repo(#[from] RepoError),
    /// A journaled command no longer applies; the journal is corrupt.
    #[error("journal replay failed at command {index}: {source}")]
    Replay { index: usize, source: StoreError },
}

/// Journal type used when the backend is chosen at runtime.
pub type DynJournal = Box<dyn CommandJournal + Send>;

pub struct Session<J: CommandJournal = NullJournal> {
    store: Store,
    journal: J,
}

impl Session<NullJournal> {
    /// Memory-only session; nothing outlives the process.
    pub fn in_memory(config: &SessionConfig) -> SessionResult<Self> {
        Self::open(NullJournal, config)
    }
}

impl Session<DynJournal> {
    /// Opens the journal named by `config.journal_path`, or a memory-only
    /// session when no path is set.
    pub fn from_config(config: &SessionConfig) -> SessionResult<Self> {
        let journal: DynJournal = match &config.journal_path {
            Some(path) => Box::new(SqliteCommandJournal::open(path)?),
            None => Box::new(NullJournal),
        };
        Self::open(journal, config)
    }
}

impl<J: CommandJournal> Session<J> {
    /// Replays `journal` into a fresh store.
    ///
    /// # Errors
    /// - `Repo` when the journal cannot be read or seeded.
    /// - `Replay` when a journaled command is rejected by the store.
    pub fn open(journal: J, config: &SessionConfig) -> SessionResult<Self> {
        let started_at = Instant::now();
        let commands = journal.load_all()?;
        let replayed = commands.len();

        let mut store = Store::new();
        for (index, command) in commands.into_iter().enumerate() {
            if let Err(source) = handle(&mut store, command) {
                error!("event=session_open module=service status=error index={index} error={source}");
                return Err(SessionError::Replay { index, source });
            }
        }

        let mut session = Self { store, journal };
        let seeded = replayed == 0 && config.seed_sample_data;
        if seeded {
            session.seed(sample_commands())?;
        }

        info!(
            "event=session_open module=service status=ok replayed={replayed} seeded={seeded} items={} check_lists={} duration_ms={}",
            session.store.item_count(),
            session.store.check_list_count(),
            started_at.elapsed().as_millis()
        );
        Ok(session)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn journal(&self) -> &J {
        &self.journal
    }

    /// Validates, journals, then applies one command.
    pub fn dispatch(&mut self, command: Command) -> SessionResult<()> {
        validate_command(&self.store, &command)?;
        self.journal.append(&command)?;
        handle(&mut self.store, command)?;
        Ok(())
    }

    /// Applies `commands` to a scratch copy of the store, journals them as one
    /// batch, then swaps the copy in. Any failure leaves both untouched.
    fn seed(&mut self, commands: Vec<Command>) -> SessionResult<()> {
        let mut seeded = self.store.clone();
        for command in &commands {
            handle(&mut seeded, command.clone())?;
        }
        if let Err(err) = self.journal.append_all(&commands) {
            error!("event=session_seed module=service status=error error={err}");
            return Err(err.into());
        }
        self.store = seeded;
        Ok(())
    }

    /// Creates and stores a new catalog item.
    pub fn add_item(&mut self, name: impl Into<String>) -> SessionResult<Item> {
        let item = Item::new(name);
        self.dispatch(Command::add_item(item.clone()))?;
        Ok(item)
    }

    /// Renames a known item. Returns `None` without touching the store for a
    /// stale id.
    pub fn rename_item(
        &mut self,
        item_id: &ItemId,
        name: impl Into<String>,
    ) -> SessionResult<Option<Item>> {
        let Some(renamed) = find_item(&self.store, item_id).map(|item| item.renamed(name)) else {
            return Ok(None);
        };
        self.dispatch(Command::set_item(renamed.clone()))?;
        Ok(Some(renamed))
    }

    /// Returns the check-list for `date`, creating it when missing.
    pub fn ensure_check_list(&mut self, date: DateString) -> SessionResult<CheckList> {
        if let Some(existing) = find_check_list_by_date(&self.store, &date) {
            return Ok(existing.clone());
        }
        let check_list = CheckList::new(date);
        self.dispatch(Command::add_check_list(check_list.clone()))?;
        Ok(check_list)
    }

    /// Marks `item_id` on the check-list of `date`, creating it if needed.
    pub fn set_checked_on(
        &mut self,
        date: DateString,
        item_id: &ItemId,
        checked: bool,
    ) -> SessionResult<()> {
        let check_list = self.ensure_check_list(date)?;
        self.dispatch(Command::set_checked(check_list.id, item_id.clone(), checked))
    }

    /// Flips the checked flag of `item_id` for `date` and returns the new
    /// value.
    pub fn toggle_checked_on(&mut self, date: DateString, item_id: &ItemId) -> SessionResult<bool> {
        let current = find_check_list_by_date(&self.store, &date)
            .is_some_and(|check_list| find_checked(&self.store, &check_list.id, item_id));
        self.set_checked_on(date, item_id, !current)?;
        Ok(!current)
    }
}
