//! Append-only command journal and its SQLite implementation.
//!
//! # Responsibility
//! - Record each accepted [`Command`] as one JSON row.
//! - Load the full command history for replay.
//!
//! # Invariants
//! - Rows are returned in `seq` (append) order.
//! - Read paths reject rows whose `kind` disagrees with the decoded payload.

use crate::db::{open_db, open_db_in_memory, DbError};
use crate::store::command::Command;
use log::error;
use rusqlite::{params, Connection};
use std::path::Path;
use thiserror::Error;

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error(transparent)]
    Db(#[from] DbError),
    #[error("failed to encode command `{kind}`: {source}")]
    Encode {
        kind: &'static str,
        source: serde_json::Error,
    },
    #[error("invalid journal data at seq {seq}: {message}")]
    InvalidData { seq: i64, message: String },
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Destination for accepted commands.
pub trait CommandJournal {
    fn append(&mut self, command: &Command) -> RepoResult<()>;

    /// Records a batch of commands. Durable implementations keep either all
    /// of them or none.
    fn append_all(&mut self, commands: &[Command]) -> RepoResult<()> {
        commands.iter().try_for_each(|command| self.append(command))
    }

    fn load_all(&self) -> RepoResult<Vec<Command>>;
}

impl<J: CommandJournal + ?Sized> CommandJournal for Box<J> {
    fn append(&mut self, command: &Command) -> RepoResult<()> {
        (**self).append(command)
    }

    fn append_all(&mut self, commands: &[Command]) -> RepoResult<()> {
        (**self).append_all(commands)
    }

    fn load_all(&self) -> RepoResult<Vec<Command>> {
        (**self).load_all()
    }
}

/// Journal that keeps nothing; sessions using it live only in memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullJournal;

impl CommandJournal for NullJournal {
    fn append(&mut self, _command: &Command) -> RepoResult<()> {
        Ok(())
    }

    fn load_all(&self) -> RepoResult<Vec<Command>> {
        Ok(Vec::new())
    }
}

/// SQLite-backed journal owning its connection.
pub struct SqliteCommandJournal {
    conn: Connection,
}

impl SqliteCommandJournal {
    /// Wraps an already migrated connection (see [`crate::db::open_db`]).
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        Ok(Self::new(open_db(path)?))
    }

    pub fn open_in_memory() -> RepoResult<Self> {
        Ok(Self::new(open_db_in_memory()?))
    }

    /// Number of recorded commands.
    pub fn len(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM commands;", [], |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or_default())
    }

    pub fn is_empty(&self) -> RepoResult<bool> {
        Ok(self.len()? == 0)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl CommandJournal for SqliteCommandJournal {
    fn append(&mut self, command: &Command) -> RepoResult<()> {
        insert_command(&self.conn, command)
    }

    /// Inserts the whole batch in one transaction.
    fn append_all(&mut self, commands: &[Command]) -> RepoResult<()> {
        let tx = self.conn.transaction()?;
        for command in commands {
            insert_command(&tx, command)?;
        }
        if let Err(err) = tx.commit() {
            error!(
                "event=journal_append_all module=repo status=error count={} error={err}",
                commands.len()
            );
            return Err(err.into());
        }
        Ok(())
    }

    fn load_all(&self) -> RepoResult<Vec<Command>> {
        let mut stmt = self
            .conn
            .prepare("SELECT seq, kind, payload FROM commands ORDER BY seq ASC;")?;
        let mut rows = stmt.query([])?;
        let mut commands = Vec::new();

        while let Some(row) = rows.next()? {
            let seq: i64 = row.get("seq")?;
            let kind: String = row.get("kind")?;
            let payload: String = row.get("payload")?;
            commands.push(parse_command_row(seq, &kind, &payload)?);
        }

        Ok(commands)
    }
}

fn insert_command(conn: &Connection, command: &Command) -> RepoResult<()> {
    let kind = command.kind();
    let payload =
        serde_json::to_string(command).map_err(|source| RepoError::Encode { kind, source })?;

    if let Err(err) = conn.execute(
        "INSERT INTO commands (kind, payload) VALUES (?1, ?2);",
        params![kind, payload],
    ) {
        error!("event=journal_append module=repo status=error command={kind} error={err}");
        return Err(err.into());
    }
    Ok(())
}

fn parse_command_row(seq: i64, kind: &str, payload: &str) -> RepoResult<Command> {
    let command = serde_json::from_str::<Command>(payload).map_err(|err| RepoError::InvalidData {
        seq,
        message: format!("undecodable payload: {err}"),
    })?;
    if command.kind() != kind {
        return Err(RepoError::InvalidData {
            seq,
            message: format!(
                "kind column `{kind}` does not match payload type `{}`",
                command.kind()
            ),
        });
    }
    Ok(command)
}
