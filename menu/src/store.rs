use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Serialize, Deserialize};
use shared::{standard_roster, DrinkOrder, NewPerson, PersonRecord, Roster, Summary};
use time::OffsetDateTime;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};

pub const FORMAT_VERSION: u32 = 1;

/// On-disk layout of the roster file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreFile {
    pub version: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub saved_at: OffsetDateTime,
    pub people: Vec<PersonRecord>,
}

/// The roster together with the file it lives in. Every mutation is
/// written back before returning.
#[derive(Debug)]
pub struct AttendeeStore {
    path: PathBuf,
    roster: Roster,
}

impl AttendeeStore {
    /// Opens the roster at `path`, seeding and saving the standard roster
    /// when the file is missing or cannot be decoded.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn open(path: &Path) -> StoreResult<Self> {
        let roster = match load(path) {
            Ok(Some(roster)) => {
                info!(people = roster.len(), attendees = roster.attendee_count(), "Loaded roster");
                return Ok(Self { path: path.to_path_buf(), roster });
            }
            Ok(None) => {
                info!("No roster file yet, seeding the regulars");
                standard_roster()
            }
            Err(e) if e.is_corrupt() => {
                error!("Discarding unreadable roster: {}", e);
                standard_roster()
            }
            Err(e) => return Err(e),
        };

        let store = Self { path: path.to_path_buf(), roster };
        store.save()?;
        Ok(store)
    }

    pub fn roster(&self) -> &Roster { &self.roster }

    pub fn path(&self) -> &Path { &self.path }

    #[instrument(skip(self))]
    pub fn add_person(&mut self, name: &str, drink: &str, vegetarian: bool) -> StoreResult<Uuid> {
        let id = self.roster.add_person(NewPerson::new(name, drink, vegetarian))?;
        debug!(%id, "Added person");
        self.save()?;
        Ok(id)
    }

    /// Replaces the attendee set. Unknown ids leave both the roster and the
    /// file untouched.
    #[instrument(skip_all)]
    pub fn set_attendees<I>(&mut self, ids: I) -> StoreResult<()>
    where
        I: IntoIterator<Item = Uuid>,
    {
        self.roster.set_attendees(ids)?;
        debug!(attendees = self.roster.attendee_count(), "Selection replaced");
        self.save()
    }

    #[instrument(skip(self))]
    pub fn toggle_attendee(&mut self, id: Uuid) -> StoreResult<bool> {
        let attending = self.roster.toggle_attendee(id)?;
        debug!(attending, "Toggled attendee");
        self.save()?;
        Ok(attending)
    }

    pub fn summary(&self, order: DrinkOrder) -> Summary {
        self.roster.summary(order)
    }

    pub fn save(&self) -> StoreResult<()> {
        save(&self.path, &self.roster)
    }
}

/// Reads the roster file. `Ok(None)` means there is no file yet.
pub fn load(path: &Path) -> StoreResult<Option<Roster>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(StoreError::io(path, e)),
    };

    let file: StoreFile = serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    })?;

    if file.version != FORMAT_VERSION {
        warn!(version = file.version, expected = FORMAT_VERSION, "Roster file has an unexpected version");
    }

    Roster::from_records(file.people)
        .map(Some)
        .map_err(|source| StoreError::InvalidRecords { path: path.to_path_buf(), source })
}

/// Writes the whole roster, creating the parent directory if needed.
pub fn save(path: &Path, roster: &Roster) -> StoreResult<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        match fs::create_dir_all(dir) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
            Err(e) => return Err(StoreError::io(dir, e)),
        }
    }

    let file = StoreFile {
        version: FORMAT_VERSION,
        saved_at: OffsetDateTime::now_utc(),
        people: roster.to_records(),
    };
    let json = serde_json::to_vec_pretty(&file).map_err(StoreError::Encode)?;
    fs::write(path, json).map_err(|e| StoreError::io(path, e))?;

    debug!(path = %path.display(), people = file.people.len(), "Saved roster");
    Ok(())
}
