// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use error::Error;
use serde_json::Value;
use tracing::warn;

/// Decodes a response body. A body with nothing but whitespace carries no
/// payload and decodes to `Value::Null`.
pub fn decode(body: &str) -> Result<Value, Error> {
  if body.trim().is_empty() {
    return Ok(Value::Null);
  }
  Ok(serde_json::from_str(body)?)
}

/// Collapses a failed fetch into `Value::Null`, for callers that only care
/// whether a payload arrived.
pub trait OrNull {
  fn or_null(self) -> Value;
}

impl OrNull for Result<Value, Error> {
  fn or_null(self) -> Value {
    self.unwrap_or_else(|e| {
      warn!("NOAH request failed, returning null: {}", e);
      Value::Null
    })
  }
}
