//! Resolution of the invoking operating-system account.

use std::io;

use thiserror::Error;

/// Why the current account could not be determined.
#[derive(Debug, Error)]
pub enum AccountError {
    /// The OS lookup itself failed (no passwd entry, permission denied, ...).
    #[error("account lookup failed")]
    Lookup(#[from] io::Error),
}

/// The identity of the user running the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    username: String,
}

impl Account {
    /// Build an account from a username. An empty name is greeted as is.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    /// The name shown in the interactive greeting.
    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Source of the current account.
///
/// The launcher resolves the account exactly once per invocation through
/// this trait, so tests can substitute a fixed identity.
pub trait AccountResolver {
    fn resolve(&self) -> Result<Account, AccountError>;
}

/// Resolves the account of the running process from the OS user database.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsAccount;

impl AccountResolver for OsAccount {
    fn resolve(&self) -> Result<Account, AccountError> {
        let username = whoami::fallible::username()?;
        tracing::trace!(%username, "resolved OS account");
        Ok(Account::new(username))
    }
}
