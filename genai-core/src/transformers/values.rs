//! Structured-value coercion: schemas, tools, speech configuration.

use serde_json::Value;

use super::parse_json;
use genai_spec::types::{Origin, Schema, SpeechConfig, Tool};
use genai_spec::{GenAiError, Result};

pub fn normalize_schema(origin: Option<Origin<Schema>>) -> Result<Option<Schema>> {
    match origin {
        None | Some(Origin::Json(Value::Null)) => Ok(None),
        Some(Origin::Typed(schema)) => Ok(Some(schema)),
        Some(Origin::Json(object @ Value::Object(_))) => parse_json("schema", object).map(Some),
        Some(other) => Err(GenAiError::unsupported_type("schema", other.shape())),
    }
}

/// Resolve one tool.
///
/// Typed tools are serialized and parsed back, which drops extension fields the
/// wire type does not know and gives raw and typed input the same treatment.
pub fn normalize_tool(origin: Option<Origin<Tool>>) -> Result<Option<Tool>> {
    match origin {
        None | Some(Origin::Json(Value::Null)) => Ok(None),
        Some(Origin::Typed(tool)) => {
            let value = serde_json::to_value(&tool)?;
            parse_json("tool", value).map(Some)
        }
        Some(Origin::Json(object @ Value::Object(_))) => parse_json("tool", object).map(Some),
        Some(other) => Err(GenAiError::unsupported_type("tool", other.shape())),
    }
}

/// Resolve a tool list. Every element goes through [`normalize_tool`]; a null
/// element is an error rather than a gap in the list.
pub fn normalize_tools(origin: Option<Origin<Tool>>) -> Result<Option<Vec<Tool>>> {
    let items: Vec<Origin<Tool>> = match origin {
        None | Some(Origin::Json(Value::Null)) => return Ok(None),
        Some(Origin::List(tools)) => tools.into_iter().map(Origin::Typed).collect(),
        Some(Origin::Json(Value::Array(values))) => values.into_iter().map(Origin::Json).collect(),
        Some(single @ (Origin::Typed(_) | Origin::Json(Value::Object(_)))) => vec![single],
        Some(other) => return Err(GenAiError::unsupported_type("tools", other.shape())),
    };

    let mut tools = Vec::with_capacity(items.len());
    for item in items {
        let tool = normalize_tool(Some(item))?
            .ok_or_else(|| GenAiError::unsupported_type("tool", "json null"))?;
        tools.push(tool);
    }
    Ok(Some(tools))
}

pub fn normalize_speech_config(origin: Option<Origin<SpeechConfig>>) -> Result<Option<SpeechConfig>> {
    match origin {
        None | Some(Origin::Json(Value::Null)) => Ok(None),
        Some(Origin::Typed(speech)) => Ok(Some(speech)),
        Some(Origin::Json(object @ Value::Object(_))) => {
            parse_json("speech config", object).map(Some)
        }
        Some(other) => Err(GenAiError::unsupported_type("speech config", other.shape())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genai_spec::types::{FunctionDeclaration, Type};
    use serde_json::json;

    #[test]
    fn schema_from_json_and_typed() {
        let typed = Schema::of(Type::String).with_description("a name");
        assert_eq!(
            normalize_schema(Some(typed.clone().into())).unwrap(),
            Some(typed.clone())
        );
        let parsed = normalize_schema(Some(
            json!({ "type": "STRING", "description": "a name" }).into(),
        ))
        .unwrap();
        assert_eq!(parsed, Some(typed));

        let err = normalize_schema(Some("string".into())).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported schema type: string");
    }

    #[test]
    fn typed_tool_round_trips() {
        let tool = Tool::functions(vec![
            FunctionDeclaration::new("get_weather").with_description("Look up the weather"),
        ]);
        assert_eq!(normalize_tool(Some(tool.clone().into())).unwrap(), Some(tool));
    }

    #[test]
    fn json_tool_drops_unknown_extension_fields() {
        let tool = normalize_tool(Some(
            json!({ "googleSearch": {}, "x-internal": true }).into(),
        ))
        .unwrap()
        .unwrap();
        assert_eq!(tool, Tool::google_search());
    }

    #[test]
    fn tool_lists_accept_every_shape() {
        let list = normalize_tools(Some(
            vec![Tool::google_search(), Tool::code_execution()].into(),
        ))
        .unwrap()
        .unwrap();
        assert_eq!(list.len(), 2);

        let json_list = normalize_tools(Some(
            json!([{ "googleSearch": {} }, { "codeExecution": {} }]).into(),
        ))
        .unwrap()
        .unwrap();
        assert_eq!(json_list, list);

        let single = normalize_tools(Some(Tool::google_search().into())).unwrap();
        assert_eq!(single, Some(vec![Tool::google_search()]));

        let err = normalize_tools(Some("search".into())).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported tools type: string");
    }

    #[test]
    fn null_inside_a_tool_list_is_rejected() {
        let err = normalize_tools(Some(json!([{ "googleSearch": {} }, null]).into())).unwrap_err();
        assert_eq!(
            err,
            GenAiError::UnsupportedType {
                field: "tool",
                shape: "json null".to_string()
            }
        );
        assert_eq!(err.to_string(), "Unsupported tool type: json null");
    }

    #[test]
    fn speech_config_accepts_typed_and_json_only() {
        let typed =
            normalize_speech_config(Some(SpeechConfig::prebuilt_voice("Kore").into())).unwrap();
        assert_eq!(typed, Some(SpeechConfig::prebuilt_voice("Kore")));

        let err = normalize_speech_config(Some("Kore".into())).unwrap_err();
        assert_eq!(
            err,
            GenAiError::UnsupportedType {
                field: "speech config",
                shape: "string".to_string()
            }
        );
        let err = normalize_speech_config(Some(json!("Kore").into())).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported speech config type: json string");

        let parsed = normalize_speech_config(Some(
            json!({ "voiceConfig": { "prebuiltVoiceConfig": { "voiceName": "Puck" } } }).into(),
        ))
        .unwrap();
        assert_eq!(parsed, Some(SpeechConfig::prebuilt_voice("Puck")));
    }

    #[test]
    fn structured_values_propagate_absence() {
        assert_eq!(normalize_schema(None).unwrap(), None);
        assert_eq!(normalize_tool(Some(Value::Null.into())).unwrap(), None);
        assert_eq!(normalize_tools(None).unwrap(), None);
        assert_eq!(normalize_speech_config(None).unwrap(), None);
    }
}
