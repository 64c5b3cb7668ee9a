//! Boxer repository for database operations.

use crate::db::DbPool;
use crate::error::{RegistryError, Result};
use ring_core::{
    validate_attributes, win_pct, Boxer, FightOutcome, LeaderboardEntry, SortKey, WeightClass,
};
use rusqlite::OptionalExtension;
use tracing::{debug, info};

/// Repository for boxer database operations.
///
/// Each method locks the pooled connection for its own unit of work and
/// releases it on every exit path.
pub struct BoxerRepo {
    db: DbPool,
}

impl BoxerRepo {
    /// Create a new boxer repository with the given database pool.
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// Register a new boxer.
    ///
    /// Attributes are validated before storage is touched. The `UNIQUE`
    /// constraint on `name` is authoritative for duplicate detection; the
    /// pre-insert lookup only short-circuits the common case, so a
    /// concurrent insert between the check and the insert still surfaces
    /// as the same conflict error.
    pub fn create(
        &self,
        name: &str,
        weight: i32,
        height: i32,
        reach: f64,
        age: i32,
    ) -> Result<()> {
        validate_attributes(weight, height, reach, age)?;

        let conn = self.db.lock().unwrap();

        let taken: Option<i64> = conn
            .query_row("SELECT id FROM boxers WHERE name = ?1", [name], |row| {
                row.get(0)
            })
            .optional()?;
        if taken.is_some() {
            return Err(RegistryError::NameTaken(name.to_string()));
        }

        match conn.execute(
            "INSERT INTO boxers (name, weight, height, reach, age)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            (name, weight, height, reach, age),
        ) {
            Ok(_) => {
                info!(name, weight, "registered boxer");
                Ok(())
            }
            Err(e) if is_unique_violation(&e) => Err(RegistryError::NameTaken(name.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a boxer by id.
    ///
    /// Fails with not-found when no row matches, so a repeated delete of
    /// the same id also fails.
    pub fn delete(&self, id: i64) -> Result<()> {
        let conn = self.db.lock().unwrap();
        let deleted = conn.execute("DELETE FROM boxers WHERE id = ?1", [id])?;
        if deleted == 0 {
            return Err(RegistryError::NotFoundById(id));
        }
        info!(id, "deleted boxer");
        Ok(())
    }

    /// Get a boxer by id.
    pub fn get_by_id(&self, id: i64) -> Result<Boxer> {
        let conn = self.db.lock().unwrap();
        let row = conn
            .query_row(
                "SELECT id, name, weight, height, reach, age FROM boxers WHERE id = ?1",
                [id],
                Self::map_attrs,
            )
            .optional()?;

        let (id, name, weight, height, reach, age) =
            row.ok_or(RegistryError::NotFoundById(id))?;
        Ok(Boxer::from_attrs(id, name, weight, height, reach, age)?)
    }

    /// Get a boxer by name.
    pub fn get_by_name(&self, name: &str) -> Result<Boxer> {
        let conn = self.db.lock().unwrap();
        let row = conn
            .query_row(
                "SELECT id, name, weight, height, reach, age FROM boxers WHERE name = ?1",
                [name],
                Self::map_attrs,
            )
            .optional()?;

        let (id, found_name, weight, height, reach, age) =
            row.ok_or_else(|| RegistryError::NotFoundByName(name.to_string()))?;
        Ok(Boxer::from_attrs(id, found_name, weight, height, reach, age)?)
    }

    /// Ranked list of boxers with at least one recorded fight.
    ///
    /// Ordered descending by the chosen metric; ties break on ascending
    /// id (creation order) so the ordering is deterministic. Boxers with
    /// zero fights are excluded from ranking.
    pub fn leaderboard(&self, sort: SortKey) -> Result<Vec<LeaderboardEntry>> {
        let sql = match sort {
            SortKey::Wins => {
                "SELECT id, name, weight, height, reach, age, fights, wins
                 FROM boxers WHERE fights > 0
                 ORDER BY wins DESC, id ASC"
            }
            SortKey::WinPct => {
                "SELECT id, name, weight, height, reach, age, fights, wins
                 FROM boxers WHERE fights > 0
                 ORDER BY (wins * 1.0 / fights) DESC, id ASC"
            }
        };

        let conn = self.db.lock().unwrap();
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                    row.get(5)?,
                    row.get(6)?,
                    row.get(7)?,
                ))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut entries = Vec::with_capacity(rows.len());
        for (id, name, weight, height, reach, age, fights, wins) in rows {
            entries.push(LeaderboardEntry {
                id,
                name,
                weight,
                height,
                reach,
                age,
                weight_class: WeightClass::for_weight(weight)?,
                fights,
                wins,
                win_pct: win_pct(wins, fights),
            });
        }
        debug!(count = entries.len(), ?sort, "built leaderboard");
        Ok(entries)
    }

    /// Record a match outcome against a boxer's cumulative counters.
    ///
    /// A win bumps both `fights` and `wins`; a loss bumps only `fights`.
    /// A single UPDATE statement performs the increment, so the
    /// `wins <= fights` invariant holds even under concurrent writers.
    pub fn record_result(&self, id: i64, outcome: FightOutcome) -> Result<()> {
        let sql = match outcome {
            FightOutcome::Win => {
                "UPDATE boxers SET fights = fights + 1, wins = wins + 1 WHERE id = ?1"
            }
            FightOutcome::Loss => "UPDATE boxers SET fights = fights + 1 WHERE id = ?1",
        };

        let conn = self.db.lock().unwrap();
        let updated = conn.execute(sql, [id])?;
        if updated == 0 {
            return Err(RegistryError::NotFoundById(id));
        }
        debug!(id, ?outcome, "recorded fight result");
        Ok(())
    }

    fn map_attrs(row: &rusqlite::Row<'_>) -> rusqlite::Result<(i64, String, i32, i32, f64, i32)> {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
            row.get(5)?,
        ))
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
