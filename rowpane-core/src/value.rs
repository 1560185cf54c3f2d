//! Deterministic total ordering over JSON field values.
//!
//! Sorting a table by a column compares whatever runtime values the rows
//! happen to carry, so the comparator must impose a total order across
//! types and never panic. Absent fields sort lowest, below null.

use std::cmp::Ordering;

use serde_json::Value;

/// Rank of a value's type in the total order.
fn type_rank(value: Option<&Value>) -> u8 {
    match value {
        None => 0,
        Some(Value::Null) => 1,
        Some(Value::Bool(_)) => 2,
        Some(Value::Number(_)) => 3,
        Some(Value::String(_)) => 4,
        Some(Value::Array(_)) => 5,
        Some(Value::Object(_)) => 6,
    }
}

/// Compare two optional field values under a total order.
///
/// Order: absent < null < booleans < numbers < strings < arrays <
/// objects. Within a type: `false < true`, numbers by `f64::total_cmp`,
/// strings lexicographically, arrays elementwise then by length,
/// objects by key-sorted `(key, value)` pairs.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let rank = type_rank(a).cmp(&type_rank(b));
    if rank != Ordering::Equal {
        return rank;
    }

    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.total_cmp(&y)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Array(x)), Some(Value::Array(y))) => {
            for (xv, yv) in x.iter().zip(y.iter()) {
                let ord = compare_values(Some(xv), Some(yv));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            x.len().cmp(&y.len())
        }
        (Some(Value::Object(x)), Some(Value::Object(y))) => {
            // serde_json maps iterate in key order, so pairwise
            // comparison is deterministic.
            for ((xk, xv), (yk, yv)) in x.iter().zip(y.iter()) {
                let ord = xk.cmp(yk);
                if ord != Ordering::Equal {
                    return ord;
                }
                let ord = compare_values(Some(xv), Some(yv));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            x.len().cmp(&y.len())
        }
        // Same rank: absent vs absent or null vs null.
        _ => Ordering::Equal,
    }
}
