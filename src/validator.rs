use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::{ActivePlayersPayload, PlayerRecord};

/// Checks that `payload` carries a non-empty `activeplayers.playerentry`
/// sequence. Nothing is modified.
pub fn validate(payload: &Value) -> Result<&Value> {
    let entries = payload
        .get("activeplayers")
        .and_then(|players| players.get("playerentry"))
        .and_then(Value::as_array)
        .ok_or_else(|| Error::InvalidPayloadShape("No Player Entries".into()))?;

    match entries.first() {
        Some(first) if !is_blank(first) => Ok(payload),
        _ => Err(Error::InvalidPayloadShape("Player not found".into())),
    }
}

/// `null`, `false`, `0` and `""` stand for "no entry".
fn is_blank(entry: &Value) -> bool {
    match entry {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Validates `payload` and pulls out each entry's `player`, in order.
pub fn extract_players(payload: Value) -> Result<Vec<PlayerRecord>> {
    validate(&payload)?;
    let payload: ActivePlayersPayload = serde_json::from_value(payload)
        .map_err(|e| Error::InvalidPayloadShape(e.to_string()))?;
    Ok(payload.into_players())
}
