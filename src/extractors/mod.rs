mod json;

pub use json::{parse_json_object, JsonObject};
