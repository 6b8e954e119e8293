//! Persisted Cart Codec
//!
//! Decoding is lenient: the stored JSON may have been written by an older
//! page script, edited by hand, or truncated. Anything unusable is dropped
//! and the rest of the cart survives.

use serde::Deserialize;
use serde_json::Value;

use crate::error::CartResult;
use crate::models::{sanitize_price, LineItem};

/// Ids were written as strings or bare numbers depending on the catalog page
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredId {
    Text(String),
    Number(serde_json::Number),
}

impl StoredId {
    fn into_string(self) -> String {
        match self {
            StoredId::Text(text) => text,
            StoredId::Number(number) => number.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct StoredLineItem {
    id: StoredId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    quantity: Option<f64>,
}

impl StoredLineItem {
    /// `None` when the record has no positive quantity
    fn into_line_item(self) -> Option<LineItem> {
        let quantity = match self.quantity {
            None => 1,
            Some(q) if q.is_finite() && q >= 1.0 => q.floor().min(f64::from(u32::MAX)) as u32,
            Some(_) => return None,
        };
        Some(LineItem {
            id: self.id.into_string(),
            name: self.name.unwrap_or_default(),
            price: sanitize_price(self.price.unwrap_or(0.0)),
            image: self.image.unwrap_or_default(),
            quantity,
        })
    }
}

/// Serialize the cart as a JSON array of line item records
pub fn encode_cart(items: &[LineItem]) -> CartResult<String> {
    Ok(serde_json::to_string(items)?)
}

/// Parse stored cart JSON, repairing what can be repaired.
///
/// Returns an empty cart for anything that is not a JSON array. Within the
/// array, records without an id or with a quantity below one are skipped, and
/// repeated ids are folded into their first occurrence.
pub fn decode_cart(raw: &str) -> Vec<LineItem> {
    let records = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(records)) => records,
        Ok(Value::Null) => return Vec::new(),
        Ok(other) => {
            log::warn!("stored cart is not an array ({}), starting empty", json_kind(&other));
            return Vec::new();
        }
        Err(e) => {
            log::warn!("stored cart is not valid JSON, starting empty: {}", e);
            return Vec::new();
        }
    };

    let mut items: Vec<LineItem> = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let stored = match serde_json::from_value::<StoredLineItem>(record) {
            Ok(stored) => stored,
            Err(e) => {
                log::warn!("dropping stored cart record {}: {}", index, e);
                continue;
            }
        };
        let Some(item) = stored.into_line_item() else {
            log::warn!("dropping stored cart record {}: quantity below 1", index);
            continue;
        };
        match items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => {
                log::warn!("merging duplicate stored cart id {}", item.id);
                existing.quantity = existing.quantity.saturating_add(item.quantity);
            }
            None => items.push(item),
        }
    }
    items
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uses_page_field_names() {
        let mut item = LineItem::new("A", "Card", 9.99, "a.png");
        item.quantity = 2;
        let json = encode_cart(&[item]).unwrap();
        assert_eq!(
            json,
            r#"[{"id":"A","name":"Card","price":9.99,"image":"a.png","quantity":2}]"#
        );
    }

    #[test]
    fn test_decode_round_trip() {
        let mut first = LineItem::new("A", "Card", 9.99, "a.png");
        first.quantity = 3;
        let second = LineItem::new("B", "Logo Card", 0.1, "https://cdn.example/b.png");
        let items = vec![first, second];

        let decoded = decode_cart(&encode_cart(&items).unwrap());
        assert_eq!(decoded, items);
    }

    #[test]
    fn test_round_trip_preserves_price_bits() {
        let prices = [910336.1529267369, 0.1 + 0.2, 1.0 / 3.0, 123.456789012345, 5e-324, 999_999_999.999_999_9];
        let items: Vec<LineItem> = prices
            .iter()
            .enumerate()
            .map(|(i, &price)| LineItem::new(format!("p{}", i), "Card", price, ""))
            .collect();

        let decoded = decode_cart(&encode_cart(&items).unwrap());
        assert_eq!(decoded.len(), items.len());
        for (before, after) in items.iter().zip(&decoded) {
            assert_eq!(before.price.to_bits(), after.price.to_bits(), "price {} drifted", before.price);
        }
    }

    #[test]
    fn test_decode_clamps_huge_price() {
        let items = decode_cart(r#"[{"id":"big","price":1e308,"quantity":10}]"#);
        assert_eq!(items[0].price, crate::models::MAX_PRICE);
    }

    #[test]
    fn test_decode_garbage_is_empty() {
        assert!(decode_cart("").is_empty());
        assert!(decode_cart("{oops").is_empty());
        assert!(decode_cart("null").is_empty());
        assert!(decode_cart(r#"{"id":"A"}"#).is_empty());
    }

    #[test]
    fn test_decode_defaults_missing_fields() {
        let items = decode_cart(r#"[{"id":"A"}]"#);
        assert_eq!(items, vec![LineItem { id: "A".into(), name: String::new(), price: 0.0, image: String::new(), quantity: 1 }]);
    }

    #[test]
    fn test_decode_ignores_unknown_fields_and_numeric_ids() {
        let items = decode_cart(r#"[{"id":42,"name":"N","price":5,"quantity":2,"color":"red"}]"#);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "42");
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[0].price, 5.0);
    }

    #[test]
    fn test_decode_skips_bad_records() {
        let raw = r#"[
            {"name":"no id"},
            {"id":"zero","quantity":0},
            {"id":"neg","quantity":-4},
            {"id":"ok","price":-1,"quantity":1},
            7
        ]"#;
        let items = decode_cart(raw);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "ok");
        assert_eq!(items[0].price, 0.0);
    }

    #[test]
    fn test_decode_merges_duplicate_ids() {
        let raw = r#"[{"id":"A","quantity":1},{"id":"B"},{"id":"A","quantity":2}]"#;
        let items = decode_cart(raw);
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
        assert_eq!(items[0].quantity, 3);
    }
}
