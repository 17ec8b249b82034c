use anyhow::Context;
use uuid::Uuid;

use super::{AircraftModel, Configuration, Preset, PresetStore};

/// One aircraft type and its presets, in display order.
#[derive(Debug, Clone)]
pub struct Aircraft {
    model: AircraftModel,
    presets: Vec<Preset>,
}

impl Aircraft {
    pub fn new(model: AircraftModel) -> Self {
        Self {
            model,
            presets: Vec::new(),
        }
    }

    pub fn model(&self) -> AircraftModel {
        self.model
    }

    pub fn name(&self) -> &'static str {
        self.model.display_name()
    }

    pub fn model_name(&self) -> &'static str {
        self.model.model_name()
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn preset(&self, id: Uuid) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id() == id)
    }

    pub fn preset_mut(&mut self, id: Uuid) -> Option<&mut Preset> {
        self.presets.iter_mut().find(|p| p.id() == id)
    }

    /// Adds a new preset, with this model's empty configuration unless one is
    /// given.
    ///
    /// # Panics
    ///
    /// If the model has no configuration type, or `configuration` belongs to a
    /// different model.
    pub fn create_preset(&mut self, name: impl Into<String>, configuration: Option<Configuration>) -> &mut Preset {
        let configuration = configuration.unwrap_or_else(|| self.model.default_configuration());
        let preset = Preset::new(name, configuration);
        tracing::debug!(aircraft = %self.model, preset = %preset.id(), name = %preset.name, "Created preset");
        self.add_preset(preset)
    }

    /// Adds an existing preset, e.g. one read back from storage.
    ///
    /// # Panics
    ///
    /// If the preset's configuration belongs to a different model.
    pub fn add_preset(&mut self, preset: Preset) -> &mut Preset {
        self.assert_model(&preset.configuration);
        let idx = self.presets.len();
        self.presets.push(preset);
        &mut self.presets[idx]
    }

    /// Appends a deep copy of preset `id` and asks `store` to save it.
    ///
    /// If the store fails the copy is dropped again.
    pub fn clone_preset(&mut self, id: Uuid, store: &mut dyn PresetStore) -> anyhow::Result<&Preset> {
        let copy = self
            .preset(id)
            .with_context(|| format!("Preset {id} does not belong to the {}", self.name()))?
            .duplicate();
        tracing::debug!(aircraft = %self.model, source = %id, preset = %copy.id(), "Cloned preset");

        let idx = self.presets.len();
        self.presets.push(copy);

        let this = &*self;
        if let Err(e) = store.preset_changed(this, &this.presets[idx]) {
            self.presets.pop();
            return Err(e.context("Failed to save cloned preset"));
        }

        Ok(&self.presets[idx])
    }

    /// Renames preset `id` and asks `store` to save it.
    pub fn rename_preset(&mut self, id: Uuid, name: impl Into<String>, store: &mut dyn PresetStore) -> anyhow::Result<&Preset> {
        let aircraft = self.name();
        let preset = self
            .preset_mut(id)
            .with_context(|| format!("Preset {id} does not belong to the {aircraft}"))?;
        preset.name = name.into();

        let this = &*self;
        let preset = this.preset(id).with_context(|| format!("Preset {id} disappeared"))?;
        store.preset_changed(this, preset).context("Failed to save renamed preset")?;

        Ok(preset)
    }

    /// Removes preset `id` and asks `store` to erase it.
    ///
    /// If the store fails the preset is put back where it was, so memory and
    /// storage stay in step.
    pub fn delete_preset(&mut self, id: Uuid, store: &mut dyn PresetStore) -> anyhow::Result<Preset> {
        let idx = self
            .presets
            .iter()
            .position(|p| p.id() == id)
            .with_context(|| format!("Preset {id} does not belong to the {}", self.name()))?;
        let preset = self.presets.remove(idx);

        if let Err(e) = store.delete_preset(self, &preset) {
            let name = preset.name.clone();
            self.presets.insert(idx, preset);
            return Err(e.context(format!("Failed to delete stored preset '{name}'")));
        }

        tracing::debug!(aircraft = %self.model, preset = %id, "Deleted preset");
        Ok(preset)
    }

    fn assert_model(&self, configuration: &Configuration) {
        if configuration.model() != self.model {
            panic!(
                "{} configuration cannot be stored in a {} preset",
                configuration.model(),
                self.model
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::f16::F16Configuration;

    #[derive(Default)]
    struct RecordingStore {
        changed: Vec<(AircraftModel, Uuid, String)>,
        deleted: Vec<(AircraftModel, Uuid)>,
        fail: bool,
    }

    impl PresetStore for RecordingStore {
        fn preset_changed(&mut self, aircraft: &Aircraft, preset: &Preset) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("disk full");
            }
            self.changed.push((aircraft.model(), preset.id(), preset.name.clone()));
            Ok(())
        }

        fn delete_preset(&mut self, aircraft: &Aircraft, preset: &Preset) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("read only");
            }
            self.deleted.push((aircraft.model(), preset.id()));
            Ok(())
        }
    }

    #[test]
    fn test_create_preset_defaults() {
        let mut aircraft = Aircraft::new(AircraftModel::F16C);
        let preset = aircraft.create_preset("Default", None);
        assert_eq!(preset.configuration, Configuration::F16C(F16Configuration::default()));
        assert_eq!(aircraft.presets().len(), 1);
        assert_eq!(aircraft.name(), "F-16C");
    }

    #[test]
    fn test_create_preset_with_configuration() {
        let mut aircraft = Aircraft::new(AircraftModel::F16C);
        let mut cfg = F16Configuration::default();
        cfg.misc.bingo = 4000;
        let id = aircraft.create_preset("Heavy", Some(cfg.clone().into())).id();
        aircraft.create_preset("Heavy", None);

        assert_eq!(aircraft.presets().len(), 2);
        assert_eq!(aircraft.preset(id).unwrap().configuration.as_f16(), Some(&cfg));
    }

    #[test]
    #[should_panic]
    fn test_create_preset_for_unsupported_model_is_fatal() {
        let mut aircraft = Aircraft::new(AircraftModel::FA18C);
        aircraft.create_preset("Nope", None);
    }

    #[test]
    #[should_panic(expected = "cannot be stored in a FA18C preset")]
    fn test_mismatched_configuration_is_fatal() {
        let mut aircraft = Aircraft::new(AircraftModel::FA18C);
        aircraft.create_preset("Wrong", Some(F16Configuration::default().into()));
    }

    #[test]
    fn test_clone_preset() {
        let mut aircraft = Aircraft::new(AircraftModel::F16C);
        let mut store = RecordingStore::default();
        let source = aircraft.create_preset("SEAD", None).id();

        let copy = aircraft.clone_preset(source, &mut store).unwrap().id();

        assert_ne!(copy, source);
        assert_eq!(aircraft.presets().len(), 2);
        assert_eq!(aircraft.presets()[1].id(), copy);
        assert_eq!(store.changed, vec![(AircraftModel::F16C, copy, "SEAD".to_string())]);

        // The copy is independent of its source
        aircraft.preset_mut(copy).unwrap().configuration.as_f16_mut().unwrap().misc.bingo = 1;
        assert_eq!(aircraft.preset(source).unwrap().configuration.as_f16().unwrap().misc.bingo, 1500);
    }

    #[test]
    fn test_clone_unknown_preset() {
        let mut aircraft = Aircraft::new(AircraftModel::F16C);
        let mut store = RecordingStore::default();
        assert!(aircraft.clone_preset(Uuid::new_v4(), &mut store).is_err());
        assert!(store.changed.is_empty());
    }

    #[test]
    fn test_clone_preset_store_failure_drops_copy() {
        let mut aircraft = Aircraft::new(AircraftModel::F16C);
        let source = aircraft.create_preset("SEAD", None).id();
        let mut store = RecordingStore { fail: true, ..Default::default() };

        assert!(aircraft.clone_preset(source, &mut store).is_err());

        let ids: Vec<Uuid> = aircraft.presets().iter().map(Preset::id).collect();
        assert_eq!(ids, vec![source]);
    }

    #[test]
    fn test_rename_preset() {
        let mut aircraft = Aircraft::new(AircraftModel::F16C);
        let mut store = RecordingStore::default();
        let id = aircraft.create_preset("Old", None).id();

        assert_eq!(aircraft.rename_preset(id, "New", &mut store).unwrap().name, "New");
        assert_eq!(store.changed, vec![(AircraftModel::F16C, id, "New".to_string())]);
    }

    #[test]
    fn test_delete_preset() {
        let mut aircraft = Aircraft::new(AircraftModel::F16C);
        let mut store = RecordingStore::default();
        let keep = aircraft.create_preset("Keep", None).id();
        let drop = aircraft.create_preset("Drop", None).id();

        let removed = aircraft.delete_preset(drop, &mut store).unwrap();

        assert_eq!(removed.id(), drop);
        assert_eq!(aircraft.presets().len(), 1);
        assert_eq!(aircraft.presets()[0].id(), keep);
        assert_eq!(store.deleted, vec![(AircraftModel::F16C, drop)]);
    }

    #[test]
    fn test_delete_preset_store_failure_restores() {
        let mut aircraft = Aircraft::new(AircraftModel::F16C);
        let first = aircraft.create_preset("A", None).id();
        let second = aircraft.create_preset("B", None).id();
        let mut store = RecordingStore { fail: true, ..Default::default() };

        assert!(aircraft.delete_preset(first, &mut store).is_err());

        let ids: Vec<Uuid> = aircraft.presets().iter().map(Preset::id).collect();
        assert_eq!(ids, vec![first, second]);
    }
}
