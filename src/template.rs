use crate::statics;
use chrono::NaiveDateTime;

/// Build the starter profile document for `current_user` at local time `now`.
pub fn create_template(current_user: &str, now: NaiveDateTime) -> String {
    let user = escape_json(current_user);
    let now = now.format(statics::ISO_LOCAL_DATE_TIME).to_string();
    let tags = statics::TPL_TAGS
        .iter()
        .map(|t| format!("\"{}\"", escape_json(t)))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"{{
  "_meta": {{
    "description": "{meta_description}",
    "author": "{user}",
    "created": "{now}",
    "version": "{version}",
    "tags": [{tags}]
  }},
  "_input": {{
    "profileName": "{profile_name}",
    "description": "{input_description}",
    "gameVersion": "{game_version}",
    "sourceFileName": "{source_file_name}",
    "createdBy": "{user}",
    "createdDate": "{now}",
    "lastModified": "{now}",
    "modifications": [
      {{
        "unitName": "{unit_name}",
        "propertyPath": "{property_path}",
        "oldValue": "{old_value}",
        "oldValueType": "{old_value_type}",
        "newValue": "{new_value}",
        "newValueType": "{new_value_type}",
        "modificationType": "{modification_type}",
        "modificationDetails": "{modification_details}"
      }}
    ]
  }}
}}
"#,
        meta_description = statics::TPL_META_DESCRIPTION,
        version = statics::TPL_VERSION,
        profile_name = statics::TPL_PROFILE_NAME,
        input_description = statics::TPL_INPUT_DESCRIPTION,
        game_version = statics::TPL_GAME_VERSION,
        source_file_name = statics::TPL_SOURCE_FILE_NAME,
        unit_name = statics::TPL_MOD_UNIT_NAME,
        property_path = statics::TPL_MOD_PROPERTY_PATH,
        old_value = statics::TPL_MOD_OLD_VALUE,
        old_value_type = statics::TPL_MOD_OLD_VALUE_TYPE,
        new_value = statics::TPL_MOD_NEW_VALUE,
        new_value_type = statics::TPL_MOD_NEW_VALUE_TYPE,
        modification_type = statics::TPL_MOD_TYPE,
        modification_details = statics::TPL_MOD_DETAILS,
    )
}

// User names come from the environment/config and may contain quotes or backslashes.
fn escape_json(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
