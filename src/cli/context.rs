//! Per-invocation context: configuration plus the resolved clock.

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date::business_date;
use crate::utils::time::{parse_instant, parse_utc_offset};
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

use super::parser::Cli;

pub struct Context {
    pub cfg: Config,
    pub tz: FixedOffset,
    /// Resolved once per invocation.
    pub now: DateTime<Utc>,
}

impl Context {
    pub fn new(cfg: Config, tz: FixedOffset, now: DateTime<Utc>) -> Self {
        Self { cfg, tz, now }
    }

    /// Apply `--db`, `--tz` and `--at` on top of the loaded configuration.
    pub fn from_cli(cli: &Cli, mut cfg: Config) -> AppResult<Self> {
        if let Some(custom_db) = &cli.db {
            cfg.database = custom_db.clone();
        }

        let tz = match &cli.tz {
            Some(raw) => {
                parse_utc_offset(raw).ok_or_else(|| AppError::InvalidTimezone(raw.clone()))?
            }
            None => cfg.utc_offset()?,
        };

        let now = match &cli.at {
            Some(raw) => parse_instant(raw)?,
            None => Utc::now(),
        };

        Ok(Self::new(cfg, tz, now))
    }

    /// Business date of `now` in the display timezone.
    pub fn today(&self) -> NaiveDate {
        business_date(self.now, &self.tz)
    }

    /// Open the configured database, bringing its schema up to date.
    pub fn open_db(&self) -> AppResult<DbPool> {
        let pool = DbPool::new(&self.cfg.database)?;
        init_db(&pool.conn)?;
        Ok(pool)
    }
}
