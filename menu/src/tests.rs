#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use uuid::Uuid;

    use crate::{
        config::Config,
        store::{self, AttendeeStore, StoreFile, FORMAT_VERSION},
        utils::{format_roster, resolve_selector, resolve_selectors},
        DrinkOrder, StoreError,
    };
    use shared::{standard_roster, NewPerson, Roster, STANDARD_PEOPLE};

    fn data_path(dir: &TempDir) -> PathBuf {
        dir.path().join("moomenu").join("people.json")
    }

    fn triples(roster: &Roster) -> Vec<(String, String, bool)> {
        roster.people().iter()
            .map(|p| (p.name.clone(), p.drink.clone(), p.vegetarian))
            .collect()
    }

    #[test]
    fn test_first_run_seeds_regulars() {
        let dir = TempDir::new().unwrap();
        let path = data_path(&dir);

        let store = AttendeeStore::open(&path).unwrap();
        assert!(path.exists(), "open should create the directory and file");
        assert_eq!(store.roster().len(), STANDARD_PEOPLE.len());
        assert_eq!(store.roster().attendee_count(), 12);

        let summary = store.summary(DrinkOrder::ByCount);
        assert_eq!(summary.people, 12);
        assert_eq!(summary.vegetarians, 2);
        assert_eq!(summary.drink_count("coke"), 6);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(store::load(&data_path(&dir)), Ok(None)));
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = data_path(&dir);

        let mut roster = standard_roster();
        roster.add_person(NewPerson::new("Zoe", "Ginger Beer", true)).unwrap();
        let ids = roster.ids_at(&[0, 3, 7]).unwrap();
        roster.set_attendees(ids).unwrap();

        store::save(&path, &roster).unwrap();
        let loaded = store::load(&path).unwrap().unwrap();

        assert_eq!(triples(&loaded), triples(&roster));
        assert_eq!(loaded.attendee_ids(), roster.attendee_ids());
        assert_eq!(loaded, roster);
    }

    #[test]
    fn test_mutations_are_persisted() {
        let dir = TempDir::new().unwrap();
        let path = data_path(&dir);

        let mut store = AttendeeStore::open(&path).unwrap();
        let alice = store.add_person("Alice", "Coke", false).unwrap();
        let bob = store.add_person("Bob", "Water", true).unwrap();
        store.set_attendees([alice, bob]).unwrap();

        let reopened = AttendeeStore::open(&path).unwrap();
        assert_eq!(reopened.roster().len(), STANDARD_PEOPLE.len() + 2);
        assert_eq!(reopened.roster().attendee_count(), 2);

        let summary = reopened.summary(DrinkOrder::ByCount);
        assert_eq!(summary.people, 2);
        assert_eq!(summary.vegetarians, 1);
        assert_eq!(summary.drink_count("coke"), 1);
        assert_eq!(summary.drink_count("water"), 1);

        let mut store = reopened;
        assert!(!store.toggle_attendee(alice).unwrap());
        let reopened = AttendeeStore::open(&path).unwrap();
        assert_eq!(reopened.roster().attendee_ids(), vec![bob]);
    }

    #[test]
    fn test_unknown_attendee_leaves_file_alone() {
        let dir = TempDir::new().unwrap();
        let path = data_path(&dir);

        let mut store = AttendeeStore::open(&path).unwrap();
        let before = fs::read(&path).unwrap();

        let err = store.set_attendees([Uuid::new_v4()]).unwrap_err();
        assert!(matches!(err, StoreError::Roster(ref e) if e.is_not_found()));
        assert_eq!(fs::read(&path).unwrap(), before);
        assert_eq!(store.roster().attendee_count(), 12);
    }

    #[test]
    fn test_invalid_person_not_saved() {
        let dir = TempDir::new().unwrap();
        let path = data_path(&dir);

        let mut store = AttendeeStore::open(&path).unwrap();
        assert!(store.add_person("", "Tea", false).is_err());
        let loaded = store::load(&path).unwrap().unwrap();
        assert_eq!(loaded.len(), STANDARD_PEOPLE.len());
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = data_path(&dir);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"\x80not json at all").unwrap();

        assert!(store::load(&path).unwrap_err().is_corrupt());

        let store = AttendeeStore::open(&path).unwrap();
        assert_eq!(store.roster().len(), STANDARD_PEOPLE.len());
        // the defaults replace the bad file
        assert!(store::load(&path).unwrap().is_some());
    }

    #[test]
    fn test_invalid_records_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = data_path(&dir);

        let mut records = standard_roster().to_records();
        records.push(records[0].clone());
        let file = StoreFile {
            version: FORMAT_VERSION,
            saved_at: time::OffsetDateTime::now_utc(),
            people: records,
        };
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, serde_json::to_vec(&file).unwrap()).unwrap();

        assert!(matches!(store::load(&path), Err(StoreError::InvalidRecords { .. })));
        let store = AttendeeStore::open(&path).unwrap();
        assert_eq!(store.roster().len(), STANDARD_PEOPLE.len());
    }

    #[test]
    fn test_records_outside_input_rules_are_kept() {
        let dir = TempDir::new().unwrap();
        let path = data_path(&dir);
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let json = format!(
            r#"{{"version":1,"savedAt":"2026-10-19T12:00:00Z","people":[
                {{"id":"{alice}","name":"Alice","drink":"Coke","vegetarian":false,"attendee":true}},
                {{"id":"{bob}","name":"Bob","drink":"","vegetarian":true,"attendee":true}}
            ]}}"#
        );
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, json).unwrap();

        let store = AttendeeStore::open(&path).unwrap();
        assert_eq!(store.roster().len(), 2);
        assert_eq!(store.roster().attendee_ids(), vec![alice, bob]);
        assert_eq!(store.roster().get(bob).unwrap().drink, "");

        let summary = store.summary(DrinkOrder::ByCount);
        assert_eq!(summary.people, 2);
        assert_eq!(summary.vegetarians, 1);

        // nothing was overwritten with the regulars
        let on_disk = store::load(&path).unwrap().unwrap();
        assert!(on_disk.contains(alice));
        assert_eq!(on_disk.len(), 2);
    }

    #[test]
    fn test_file_layout() {
        let dir = TempDir::new().unwrap();
        let path = data_path(&dir);
        AttendeeStore::open(&path).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(value["version"], FORMAT_VERSION);
        assert!(value["savedAt"].is_string());
        let first = &value["people"][0];
        assert_eq!(first["name"], "Alban");
        assert_eq!(first["drink"], "orange juice");
        assert_eq!(first["vegetarian"], false);
        assert_eq!(first["attendee"], true);
        assert!(first["id"].is_string());
    }

    #[test]
    fn test_save_into_missing_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("people.json");
        store::save(&path, &Roster::new()).unwrap();
        // saving again over an existing directory is fine
        store::save(&path, &standard_roster()).unwrap();
        assert_eq!(store::load(&path).unwrap().unwrap().len(), STANDARD_PEOPLE.len());
    }

    #[test]
    fn test_save_fails_when_parent_is_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"").unwrap();
        let path = blocker.join("people.json");
        assert!(matches!(store::save(&path, &Roster::new()), Err(StoreError::Io { .. })));
    }

    #[test]
    fn test_config_resolution_order() {
        let cli = PathBuf::from("/tmp/cli.json");
        let env = PathBuf::from("/tmp/env.json");
        let home = PathBuf::from("/home/u/.config");

        let config = Config::resolve_from(Some(cli.as_path()), Some(env.clone()), Some(home.clone())).unwrap();
        assert_eq!(config.data_file, cli);

        let config = Config::resolve_from(None, Some(env.clone()), Some(home.clone())).unwrap();
        assert_eq!(config.data_file, env);

        let config = Config::resolve_from(None, Some(PathBuf::new()), Some(home.clone())).unwrap();
        assert_eq!(config.data_file, home.join("moomenu").join("people.json"));

        assert!(matches!(Config::resolve_from(None, None, None), Err(StoreError::NoConfigDir)));
    }

    #[test]
    fn test_selectors() {
        let mut roster = standard_roster();
        let alban = roster.people()[0].id;

        assert_eq!(resolve_selector(&roster, "1").unwrap(), alban);
        assert_eq!(resolve_selector(&roster, " alban ").unwrap(), alban);
        assert_eq!(resolve_selector(&roster, &alban.to_string()).unwrap(), alban);

        assert!(matches!(resolve_selector(&roster, "0"), Err(StoreError::UnknownSelector(_))));
        assert!(matches!(resolve_selector(&roster, "99"), Err(StoreError::Roster(_))));
        assert!(matches!(resolve_selector(&roster, "nobody"), Err(StoreError::UnknownSelector(_))));
        assert!(matches!(
            resolve_selector(&roster, &Uuid::new_v4().to_string()),
            Err(StoreError::Roster(_))
        ));

        roster.add_person(NewPerson::new("ALBAN", "Tea", false)).unwrap();
        assert!(matches!(resolve_selector(&roster, "alban"), Err(StoreError::AmbiguousSelector(_))));

        let ids = resolve_selectors(&roster, &["3", "Will"]).unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(roster.get(ids[1]).unwrap().name, "Will");
    }

    #[test]
    fn test_numeric_names_past_the_end() {
        let mut roster = standard_roster();
        let agent = roster.add_person(NewPerson::new("42", "Martini", false)).unwrap();

        // "42" is past the end of a 24-person roster, so it is a name
        assert_eq!(resolve_selector(&roster, "42").unwrap(), agent);
        // "1" is still a position; "42" sorts first so it holds position 1
        assert_eq!(resolve_selector(&roster, "1").unwrap(), agent);
        let second = roster.people()[1].id;
        assert_eq!(resolve_selector(&roster, "2").unwrap(), second);
        assert!(matches!(resolve_selector(&roster, "43"), Err(StoreError::Roster(ref e)) if e.is_not_found()));
    }

    #[test]
    fn test_format_roster() {
        let mut roster = Roster::new();
        let bob = roster.add_person(NewPerson::new("Bob", "Water", true)).unwrap();
        roster.add_person(NewPerson::new("Alice", "Coke", false)).unwrap();
        roster.set_attendees([bob]).unwrap();

        assert_eq!(
            format_roster(&roster),
            "  1   Alice - Coke\n  2 * Bob - Water (v)\n"
        );
    }
}
