use crate::registry::ParamSpec;
use serde_json::{Map, Value};

/// Builds `?k=v&k2=v2` from the declared query parameters present in `args`.
/// Pairs follow declaration order; the result is empty when none are present.
pub fn build_query_string(args: &Map<String, Value>, params: &[ParamSpec]) -> String {
    let pairs: Vec<String> = params
        .iter()
        .filter_map(|param| {
            let value = args.get(param.name)?;
            render_query_value(value).map(|text| format!("{}={}", param.name, text))
        })
        .collect();
    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}

/// Strings go out verbatim, scalars in their JSON form, `null` is treated as
/// absent.
pub fn render_query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        other => Some(other.to_string()),
    }
}
