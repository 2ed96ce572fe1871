//! Lookups into an effective-config JSON value.

use serde_json::Value;

pub(crate) fn json_f64(v: &Value) -> Option<f64> {
    v.as_f64()
        .or_else(|| v.as_i64().map(|n| n as f64))
        .or_else(|| v.as_u64().map(|n| n as f64))
}

pub(crate) fn config_value<'v>(cfg: &'v Value, path: &[&str]) -> Option<&'v Value> {
    let mut cur = cfg;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}
