pub mod field;
pub mod settings;

pub use field::{FieldCategory, FieldId, FieldPatch, FieldRecord, FieldType};
pub use settings::{SettingsPatch, SettingsRecord, SettingsStore};
