use serde_json::Value;

/// Print just the key answer value from the output.
///
/// A quote prints its fee. A schedule or sweep prints one
/// `amount fee` line per row.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        if let Some(val) = map.get("fee").filter(|v| !v.is_null()) {
            println!("{}", format_minimal(val));
            return;
        }

        if let Some(Value::Array(rows)) = map.get("rows") {
            for row in rows {
                let amount = row.get("amount").map(format_minimal).unwrap_or_default();
                let fee = row.get("fee").map(format_minimal).unwrap_or_default();
                println!("{} {}", amount, fee);
            }
            return;
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
