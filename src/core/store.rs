use crate::domain::model::{MapGenSettings, SettingKey};
use crate::domain::ports::SettingsReader;
use std::collections::HashMap;

/// In-memory map generation settings.
///
/// Constructed once at start-up and passed by reference to whatever needs it.
/// Every key starts at 0; `get` falls back to 0 for any key that has no entry.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    values: HashMap<SettingKey, i32>,
    debug: bool,
}

impl SettingsStore {
    pub fn new(debug: bool) -> Self {
        let values = SettingKey::ALL.into_iter().map(|key| (key, 0)).collect();
        Self { values, debug }
    }

    pub fn from_snapshot(settings: &MapGenSettings, debug: bool) -> Self {
        let mut store = Self::new(debug);
        store.apply(settings);
        store
    }

    /// Stores `value` truncated toward zero. Out-of-range values saturate and NaN stores 0.
    pub fn set(&mut self, key: SettingKey, value: f64) {
        self.values.insert(key, value as i32);
        if self.debug {
            tracing::debug!(setting = %key, value, "Updated setting {} to {}", key, value);
        }
    }

    pub fn set_int(&mut self, key: SettingKey, value: i32) {
        self.values.insert(key, value);
        if self.debug {
            tracing::debug!(setting = %key, value, "Updated setting {} to {}", key, value);
        }
    }

    pub fn get(&self, key: SettingKey) -> i32 {
        self.values.get(&key).copied().unwrap_or(0)
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn iter(&self) -> impl Iterator<Item = (SettingKey, i32)> + '_ {
        SettingKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    pub fn snapshot(&self) -> MapGenSettings {
        let mut settings = MapGenSettings::default();
        for (key, value) in self.iter() {
            settings.set_value(key, value);
        }
        settings
    }

    /// Overwrites every value with the ones in `settings`.
    pub fn apply(&mut self, settings: &MapGenSettings) {
        for key in SettingKey::ALL {
            self.set_int(key, settings.value(key));
        }
    }

    pub fn reset(&mut self) {
        self.apply(&MapGenSettings::default());
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(false)
    }
}

impl SettingsReader for SettingsStore {
    fn map_gen_value(&self, key: SettingKey) -> i32 {
        self.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn captured_logs(debug: bool) -> String {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut store = SettingsStore::new(debug);
            store.set(SettingKey::NumCities, 3.9);
        });

        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_fresh_store_returns_zero_for_every_key() {
        let store = SettingsStore::default();
        for key in SettingKey::ALL {
            assert_eq!(store.get(key), 0);
        }
    }

    #[test]
    fn test_set_truncates_toward_zero() {
        let mut store = SettingsStore::new(false);
        store.set(SettingKey::NumCities, 3.9);
        store.set(SettingKey::NumTowns, -2.7);
        store.set(SettingKey::NumRurals, 12.0);

        assert_eq!(store.get(SettingKey::NumCities), 3);
        assert_eq!(store.get(SettingKey::NumTowns), -2);
        assert_eq!(store.get(SettingKey::NumRurals), 12);
    }

    #[test]
    fn test_set_saturates_and_maps_nan_to_zero() {
        let mut store = SettingsStore::new(false);
        store.set(SettingKey::NumCities, 1e12);
        store.set(SettingKey::NumTowns, -1e12);
        store.set(SettingKey::NumRurals, 5.0);
        store.set(SettingKey::NumRurals, f64::NAN);

        assert_eq!(store.get(SettingKey::NumCities), i32::MAX);
        assert_eq!(store.get(SettingKey::NumTowns), i32::MIN);
        assert_eq!(store.get(SettingKey::NumRurals), 0);
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = SettingsStore::new(true);
        store.set(SettingKey::NumTowns, 1.0);
        store.set(SettingKey::NumTowns, 7.5);
        store.set_int(SettingKey::NumTowns, 4);

        assert_eq!(store.get(SettingKey::NumTowns), 4);
        assert_eq!(store.get(SettingKey::NumCities), 0);
    }

    #[test]
    fn test_missing_entry_reads_as_zero() {
        let mut store = SettingsStore::new(false);
        store.values.clear();
        assert_eq!(store.get(SettingKey::NumRurals), 0);
        assert_eq!(store.snapshot(), MapGenSettings::default());
    }

    #[test]
    fn test_snapshot_apply_and_reset() {
        let settings = MapGenSettings {
            num_cities: 2,
            num_towns: 6,
            num_rurals: 15,
        };
        let mut store = SettingsStore::from_snapshot(&settings, false);
        assert_eq!(store.snapshot(), settings);
        assert_eq!(store.num_towns(), 6);

        let pairs: Vec<_> = store.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (SettingKey::NumCities, 2),
                (SettingKey::NumTowns, 6),
                (SettingKey::NumRurals, 15)
            ]
        );

        store.reset();
        assert_eq!(store.snapshot(), MapGenSettings::default());
    }

    #[test]
    fn test_set_traces_untruncated_value_only_in_debug_mode() {
        let with_debug = captured_logs(true);
        assert!(with_debug.contains("Updated setting num_cities to 3.9"), "{}", with_debug);

        let without_debug = captured_logs(false);
        assert!(!without_debug.contains("Updated setting"), "{}", without_debug);
    }

    #[test]
    fn test_debug_toggle() {
        let mut store = SettingsStore::default();
        assert!(!store.is_debug());
        store.set_debug(true);
        assert!(store.is_debug());
    }
}
