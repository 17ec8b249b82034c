use super::{Aircraft, Preset};

/// Persistence for presets, supplied by the host application.
///
/// The registry only tells the store what happened; where and how presets are
/// kept is entirely up to the implementation.
pub trait PresetStore {
    /// `preset` was added to or modified in `aircraft` and should be saved.
    fn preset_changed(&mut self, aircraft: &Aircraft, preset: &Preset) -> anyhow::Result<()>;

    /// `preset` was removed from `aircraft`; drop anything persisted for it.
    fn delete_preset(&mut self, aircraft: &Aircraft, preset: &Preset) -> anyhow::Result<()>;
}
