//! Query output formatting.

use std::fs;
use std::io::Write;

use anyhow::Result;
use serde_json::{Map, Value as JsonValue};

use crate::cli::QueryArgs;
use crate::log;

pub(super) fn write_output(value: &JsonValue, args: &QueryArgs) -> Result<()> {
    let output = if let Some(ref fields) = args.fields {
        filter_fields(value, fields)
    } else {
        value.clone()
    };

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Project objects onto the requested fields, keeping request order.
///
/// Arrays are filtered element-wise; a requested field that does not
/// exist shows as null so its absence is visible.
fn filter_fields(value: &JsonValue, fields: &[String]) -> JsonValue {
    match value {
        JsonValue::Object(map) => {
            let mut obj = Map::new();
            for field in fields {
                obj.insert(
                    field.clone(),
                    map.get(field).cloned().unwrap_or(JsonValue::Null),
                );
            }
            JsonValue::Object(obj)
        }
        JsonValue::Array(items) => JsonValue::Array(
            items
                .iter()
                .map(|item| filter_fields(item, fields))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_fields_object() {
        let value = json!({"site": {"title": "t"}, "theme": {}, "plugins": {}});
        let filtered = filter_fields(&value, &["site".into(), "missing".into()]);

        assert_eq!(filtered["site"]["title"], "t");
        assert_eq!(filtered["missing"], JsonValue::Null);
        assert_eq!(filtered.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_filter_fields_array() {
        let value = json!([{"route": "/", "url": "/x/"}, {"route": "/a/", "url": "/x/a/"}]);
        let filtered = filter_fields(&value, &["route".into()]);

        assert_eq!(filtered[0].as_object().unwrap().len(), 1);
        assert_eq!(filtered[1]["route"], "/a/");
    }
}
