//! Shared clock and environment guards for integration tests.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use mockable::Clock;
use std::env;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError, RwLock};

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Clock pinned to noon of a settable calendar day.
#[derive(Debug)]
pub struct FixedClock {
    now: RwLock<NaiveDateTime>,
}

impl FixedClock {
    /// Creates a clock showing noon of the `YYYYMMDD` day `date`.
    ///
    /// # Errors
    ///
    /// Returns an error when `date` is not a valid `YYYYMMDD` literal.
    pub fn on(date: &str) -> Result<Self, eyre::Report> {
        Ok(Self {
            now: RwLock::new(noon(date)?),
        })
    }

    /// Moves the clock to noon of `date`.
    ///
    /// # Errors
    ///
    /// Returns an error when `date` is invalid or the clock lock is poisoned.
    pub fn set(&self, date: &str) -> Result<(), eyre::Report> {
        let next = noon(date)?;
        *self
            .now
            .write()
            .map_err(|err| eyre::eyre!("clock lock poisoned: {err}"))? = next;
        Ok(())
    }

    fn current(&self) -> NaiveDateTime {
        *self.now.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for FixedClock {
    /// Starts at the current UTC time.
    fn default() -> Self {
        Self {
            now: RwLock::new(Utc::now().naive_utc()),
        }
    }
}

fn noon(date: &str) -> Result<NaiveDateTime, eyre::Report> {
    NaiveDate::parse_from_str(date, "%Y%m%d")?
        .and_hms_opt(12, 0, 0)
        .ok_or_else(|| eyre::eyre!("noon missing for {date}"))
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        let current = self.current();
        Local
            .from_local_datetime(&current)
            .earliest()
            .unwrap_or_else(|| Local.from_utc_datetime(&current))
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.current())
    }
}

/// Guard that applies a scoped environment variable update.
pub struct EnvVarGuard {
    previous: Vec<(String, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Sets or removes each variable for the guard lifetime.
    pub fn set_many(changes: &[(&str, Option<&str>)]) -> Self {
        let lock = ENV_MUTEX
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let mut previous = Vec::with_capacity(changes.len());

        for (key, value) in changes {
            previous.push(((*key).to_owned(), env::var(key).ok()));
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                match value {
                    Some(new_value) => env::set_var(key, new_value),
                    None => env::remove_var(key),
                }
            }
        }

        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..) {
            unsafe {
                // SAFETY: the global mutex serializes environment mutations in tests.
                match value {
                    Some(previous) => env::set_var(&key, previous),
                    None => env::remove_var(&key),
                }
            }
        }
    }
}
