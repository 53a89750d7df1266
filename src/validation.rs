//! Per-route validator chains.
//!
//! A chain is an ordered list of [`Rule`]s. Every rule runs; failures accumulate into a list of
//! [`FieldError`] so one response reports all problems with a submission.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::LazyLock;

pub const MSG_NAME_EMPTY: &str = "El nombre de producto no puede ir vacio";
pub const MSG_PRICE_NOT_NUMERIC: &str = "Valor no válido";
pub const MSG_PRICE_EMPTY: &str = "El precio de producto no puede ir vacio";
pub const MSG_PRICE_INVALID: &str = "Precio no válido";
pub const MSG_AVAILABILITY_INVALID: &str = "Valor para disponibilidad no válido";
pub const MSG_ID_INVALID: &str = "ID no valido";

static NUMERIC: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[+-]?([0-9]*[.])?[0-9]+$").expect("numeric pattern"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Body,
    Params,
}

/// One validation failure.
#[derive(Clone, Debug, Serialize, utoipa::ToSchema)]
pub struct FieldError {
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "field")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub value: Option<Value>,
    #[schema(value_type = String)]
    pub msg: &'static str,
    #[schema(value_type = String)]
    pub path: &'static str,
    pub location: Location,
}

/// A single check on one field. `check` receives the raw value (`None` when absent).
#[derive(Clone, Copy)]
pub struct Rule {
    pub location: Location,
    pub field: &'static str,
    pub check: fn(Option<&Value>) -> bool,
    pub message: &'static str,
}

impl Rule {
    const fn body(field: &'static str, check: fn(Option<&Value>) -> bool, message: &'static str) -> Self {
        Rule {
            location: Location::Body,
            field,
            check,
            message,
        }
    }

    const fn param(field: &'static str, check: fn(Option<&Value>) -> bool, message: &'static str) -> Self {
        Rule {
            location: Location::Params,
            field,
            check,
            message,
        }
    }
}

pub type RuleSet = &'static [Rule];

/// POST /api/products
pub static CREATE_PRODUCT: &[Rule] = &[
    Rule::body("name", is_text, MSG_NAME_EMPTY),
    Rule::body("price", is_numeric, MSG_PRICE_NOT_NUMERIC),
    Rule::body("price", not_empty, MSG_PRICE_EMPTY),
    Rule::body("price", is_positive, MSG_PRICE_INVALID),
    Rule::body("availability", optional_boolean, MSG_AVAILABILITY_INVALID),
];

/// GET, PATCH and DELETE on /api/products/:id
pub static PRODUCT_ID: &[Rule] = &[Rule::param("id", is_int, MSG_ID_INVALID)];

/// PUT /api/products/:id
pub static REPLACE_PRODUCT: &[Rule] = &[
    Rule::param("id", is_int, MSG_ID_INVALID),
    Rule::body("name", is_text, MSG_NAME_EMPTY),
    Rule::body("price", is_numeric, MSG_PRICE_NOT_NUMERIC),
    Rule::body("price", not_empty, MSG_PRICE_EMPTY),
    Rule::body("price", is_positive, MSG_PRICE_INVALID),
    Rule::body("availability", is_boolean, MSG_AVAILABILITY_INVALID),
];

/// Path parameters and JSON body of one request.
pub struct RequestInput<'a> {
    pub params: &'a HashMap<String, String>,
    pub body: &'a Map<String, Value>,
}

impl RequestInput<'_> {
    fn get(&self, location: Location, field: &str) -> Option<Value> {
        match location {
            Location::Body => self.body.get(field).cloned(),
            Location::Params => self.params.get(field).map(|s| Value::String(s.clone())),
        }
    }
}

pub struct RequestValidator;

impl RequestValidator {
    /// Run every rule in order and collect the failures. Empty means the request may proceed.
    pub fn check(rules: &[Rule], input: &RequestInput<'_>) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for rule in rules {
            let value = input.get(rule.location, rule.field);
            if !(rule.check)(value.as_ref()) {
                errors.push(FieldError {
                    kind: "field",
                    value,
                    msg: rule.message,
                    path: rule.field,
                    location: rule.location,
                });
            }
        }
        errors
    }
}

pub fn not_empty(v: Option<&Value>) -> bool {
    match v {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(_) => true,
    }
}

/// Non-empty string, or a number or boolean that reads as text.
pub fn is_text(v: Option<&Value>) -> bool {
    text_value(v).is_some()
}

pub fn is_numeric(v: Option<&Value>) -> bool {
    numeric_value(v).is_some()
}

pub fn is_positive(v: Option<&Value>) -> bool {
    numeric_value(v).is_some_and(|n| n > 0.0)
}

pub fn is_boolean(v: Option<&Value>) -> bool {
    boolean_value(v).is_some()
}

fn optional_boolean(v: Option<&Value>) -> bool {
    v.is_none() || is_boolean(v)
}

pub fn is_int(v: Option<&Value>) -> bool {
    match v {
        Some(Value::String(s)) => s.parse::<i32>().is_ok(),
        Some(Value::Number(n)) => n.as_i64().is_some_and(|n| i32::try_from(n).is_ok()),
        _ => false,
    }
}

/// Finite numbers, or strings shaped like `[+-]digits[.digits]` that parse to a finite value.
pub fn numeric_value(v: Option<&Value>) -> Option<f64> {
    let n = match v? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if NUMERIC.is_match(s) => s.parse().ok(),
        _ => None,
    };
    n.filter(|n: &f64| n.is_finite())
}

pub fn boolean_value(v: Option<&Value>) -> Option<bool> {
    match v? {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        Value::Number(n) => match n.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Strings as-is; numbers and booleans in their JSON text form.
pub fn text_value(v: Option<&Value>) -> Option<String> {
    match v? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(rules: &[Rule], id: Option<&str>, body: Value) -> Vec<FieldError> {
        let mut params = HashMap::new();
        if let Some(id) = id {
            params.insert("id".to_string(), id.to_string());
        }
        let body = match body {
            Value::Object(m) => m,
            _ => Map::new(),
        };
        RequestValidator::check(rules, &RequestInput { params: &params, body: &body })
    }

    #[test]
    fn empty_create_body_reports_four_errors() {
        let errors = run(CREATE_PRODUCT, None, json!({}));
        let msgs: Vec<_> = errors.iter().map(|e| e.msg).collect();
        assert_eq!(msgs, vec![MSG_NAME_EMPTY, MSG_PRICE_NOT_NUMERIC, MSG_PRICE_EMPTY, MSG_PRICE_INVALID]);
    }

    #[test]
    fn zero_price_reports_only_price_invalid() {
        let errors = run(CREATE_PRODUCT, None, json!({ "name": "Monitor curvo", "price": 0 }));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].msg, MSG_PRICE_INVALID);
        assert_eq!(errors[0].path, "price");
        assert_eq!(errors[0].value, Some(json!(0)));
    }

    #[test]
    fn numeric_strings_are_accepted_as_price() {
        assert!(run(CREATE_PRODUCT, None, json!({ "name": "Teclado", "price": "12.50" })).is_empty());
        assert_eq!(run(CREATE_PRODUCT, None, json!({ "name": "Teclado", "price": "12,50" })).len(), 2);
    }

    #[test]
    fn overflowing_price_is_neither_numeric_nor_positive() {
        let huge = "9".repeat(400);
        assert_eq!(numeric_value(Some(&json!(huge.clone()))), None);
        let errors = run(CREATE_PRODUCT, None, json!({ "name": "Big", "price": huge }));
        let msgs: Vec<_> = errors.iter().map(|e| e.msg).collect();
        assert_eq!(msgs, vec![MSG_PRICE_NOT_NUMERIC, MSG_PRICE_INVALID]);
    }

    #[test]
    fn name_must_read_as_text() {
        for name in [json!({ "a": 1 }), json!(["x"]), json!(""), json!(null)] {
            let errors = run(CREATE_PRODUCT, None, json!({ "name": name, "price": 10 }));
            assert_eq!(errors.len(), 1, "{name}");
            assert_eq!(errors[0].msg, MSG_NAME_EMPTY);
        }
        assert!(run(REPLACE_PRODUCT, Some("1"), json!({ "name": 42, "price": 10, "availability": true })).is_empty());
    }

    #[test]
    fn create_rejects_non_boolean_availability_only_when_present() {
        let errors = run(CREATE_PRODUCT, None, json!({ "name": "Mouse", "price": 10, "availability": "yes" }));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].msg, MSG_AVAILABILITY_INVALID);
    }

    #[test]
    fn empty_replace_body_reports_five_errors() {
        let errors = run(REPLACE_PRODUCT, Some("1"), json!({}));
        assert_eq!(errors.len(), 5);
        assert!(errors.iter().all(|e| e.location == Location::Body));
    }

    #[test]
    fn invalid_id_reports_single_error() {
        let errors = run(PRODUCT_ID, Some("not-valid-url"), json!({}));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].msg, MSG_ID_INVALID);
        assert_eq!(errors[0].location, Location::Params);
        let body = json!({ "name": "Monitor Curvo", "availability": true, "price": 300 });
        assert_eq!(run(REPLACE_PRODUCT, Some("1.5"), body).len(), 1);
    }

    #[test]
    fn id_must_fit_in_i32() {
        assert!(is_int(Some(&json!("2000"))));
        assert!(is_int(Some(&json!("-3"))));
        assert!(!is_int(Some(&json!("99999999999"))));
        assert!(!is_int(Some(&json!(""))));
        assert!(!is_int(None));
    }

    #[test]
    fn boolean_accepts_loose_forms() {
        assert_eq!(boolean_value(Some(&json!("0"))), Some(false));
        assert_eq!(boolean_value(Some(&json!(1))), Some(true));
        assert_eq!(boolean_value(Some(&json!("yes"))), None);
        assert_eq!(boolean_value(Some(&json!(2))), None);
    }

    #[test]
    fn field_error_serializes_like_a_validator_entry() {
        let errors = run(PRODUCT_ID, Some("abc"), json!({}));
        let v = serde_json::to_value(&errors[0]).unwrap();
        assert_eq!(
            v,
            json!({ "type": "field", "value": "abc", "msg": "ID no valido", "path": "id", "location": "params" })
        );
        let missing = serde_json::to_value(&run(CREATE_PRODUCT, None, json!({}))[0]).unwrap();
        assert!(missing.get("value").is_none());
    }
}
