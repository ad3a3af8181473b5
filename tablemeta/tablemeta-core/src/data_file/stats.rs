//! Conversions between statistic maps and their association-list form.

use std::collections::HashMap;

use crate::{error::ValueTypeError, value::Value};

/// Map → association list, sorted by key so the encoded form is stable.
pub fn stats_to_pairs(stats: &HashMap<i32, i64>) -> Vec<(i32, i64)> {
    let mut pairs: Vec<(i32, i64)> = stats.iter().map(|(&k, &v)| (k, v)).collect();
    pairs.sort_unstable_by_key(|&(k, _)| k);
    pairs
}

/// Association list → map. A repeated key keeps its last value.
pub fn pairs_to_stats(pairs: &[(i32, i64)]) -> HashMap<i32, i64> {
    let mut stats = HashMap::with_capacity(pairs.len());
    for &(key, value) in pairs {
        if let Some(previous) = stats.insert(key, value) {
            tracing::debug!(key, previous, value, "duplicate statistic key, keeping last value");
        }
    }
    stats
}

/// Encode pairs as a list of `{key, value}` records.
pub(crate) fn pairs_to_value(pairs: &[(i32, i64)]) -> Value {
    Value::List(
        pairs
            .iter()
            .map(|&(k, v)| Value::Struct(vec![Value::I32(k), Value::I64(v)]))
            .collect(),
    )
}

/// Decode a list of `{key, value}` records, or a map value, into pairs.
///
/// `Null` decodes to `None`.
pub(crate) fn pairs_from_value(value: &Value) -> Result<Option<Vec<(i32, i64)>>, ValueTypeError> {
    match value {
        Value::Null => Ok(None),
        Value::List(records) => records
            .iter()
            .map(|record| match record.try_struct()? {
                Some([key, value]) => pair_from_values(key, value),
                _ => Err(record.type_mismatch("Struct{key: I32, value: I64}")),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        Value::Map(entries) => entries
            .iter()
            .map(|(key, value)| pair_from_values(key, value))
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        other => Err(other.type_mismatch("List")),
    }
}

fn pair_from_values(key: &Value, value: &Value) -> Result<(i32, i64), ValueTypeError> {
    let key = key.try_i32()?.ok_or_else(|| key.type_mismatch("I32"))?;
    let value = value.try_i64()?.ok_or_else(|| value.type_mismatch("I64"))?;
    Ok((key, value))
}
