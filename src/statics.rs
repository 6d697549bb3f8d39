// Central place for UI strings and other non-localized constants.
// Keep these out of gui.rs and template.rs to reduce duplication and make tweaks safer.

// English UI strings (EN_ prefix to make future localization easier)
pub const EN_APP_TITLE: &str = "Mod Profile Editor";

pub const EN_BTN_NEW: &str = "New";
pub const EN_BTN_OPEN: &str = "Open...";
pub const EN_BTN_SAVE: &str = "Save";
pub const EN_BTN_SAVE_AS: &str = "Save As...";
pub const EN_BTN_VALIDATE: &str = "Validate";
pub const EN_BTN_CLOSE: &str = "Close";

pub const EN_FILTER_PROFILE: &str = "Mod Profile";

pub const EN_DIALOG_UNSAVED_TITLE: &str = "Unsaved Changes";
pub const EN_DIALOG_UNSAVED_BODY: &str =
    "The profile has unsaved changes. Save them before continuing?";
pub const EN_DIALOG_ERROR_TITLE: &str = "Error";
pub const EN_DIALOG_VALIDATION_TITLE: &str = "Validation Error";

pub const EN_STATUS_READY: &str = "Ready";
pub const EN_STATUS_NEW_TEMPLATE: &str = "New profile template created";
pub const EN_STATUS_CANCELLED: &str = "Cancelled";
pub const EN_STATUS_VALID: &str = "JSON structure looks valid";
pub const EN_STATUS_NO_PATH: &str = "No file selected";
pub const EN_STATUS_UNSAVED: &str = "Unsaved changes";

pub const EN_LABEL_LINES: &str = "lines:";
pub const EN_LABEL_CHARS: &str = "chars:";

pub const EN_UNKNOWN_USER: &str = "Unknown";

// Title decorations.
pub const TITLE_FILE_SEPARATOR: &str = " - ";
pub const TITLE_DIRTY_MARKER: &str = " *";

// Persisted format.
pub const JSON_EXTENSION: &str = "json";
pub const JSON_SUFFIX: &str = ".json";
pub const DEFAULT_FILE_NAME: &str = "profile.json";
pub const CONFIG_FILE_NAME: &str = "ndf-profile-editor.json";

// Structural markers the validator looks for (quoted, as they appear as JSON keys).
pub const KEY_META: &str = "\"_meta\"";
pub const KEY_INPUT: &str = "\"_input\"";
pub const KEY_PROFILE_NAME: &str = "\"profileName\"";
pub const KEY_FORMAT_VERSION: &str = "\"formatVersion\"";
pub const KEY_MODIFICATIONS: &str = "\"modifications\"";

// Template literals.
pub const TPL_META_DESCRIPTION: &str = "Custom mod profile";
pub const TPL_VERSION: &str = "1.0";
pub const TPL_TAGS: [&str; 2] = ["custom", "modification"];
pub const TPL_PROFILE_NAME: &str = "New Profile";
pub const TPL_INPUT_DESCRIPTION: &str = "Describe what this profile changes";
pub const TPL_GAME_VERSION: &str = "Current";
pub const TPL_SOURCE_FILE_NAME: &str = "UniteDescriptor.ndf";

pub const TPL_MOD_UNIT_NAME: &str = "Descriptor_Unit_ExampleTank";
pub const TPL_MOD_PROPERTY_PATH: &str = "ModulesDescriptors[TDamageModuleDescriptor].MaxPhysicalDamages";
pub const TPL_MOD_OLD_VALUE: &str = "10";
pub const TPL_MOD_OLD_VALUE_TYPE: &str = "Integer";
pub const TPL_MOD_NEW_VALUE: &str = "12";
pub const TPL_MOD_NEW_VALUE_TYPE: &str = "Integer";
pub const TPL_MOD_TYPE: &str = "ValueChange";
pub const TPL_MOD_DETAILS: &str = "Example: increase max physical damage";

// Timestamp layout: ISO-8601 local date-time, no offset.
pub const ISO_LOCAL_DATE_TIME: &str = "%Y-%m-%dT%H:%M:%S";
