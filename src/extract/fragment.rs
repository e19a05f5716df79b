//! Embedded YAML fragment inside a lab block.
//!
//! The fragment follows a `Data` header line and starts with the root key:
//!
//! ```text
//! Data
//! openshift-cnv.osp-on-ocp-cnv.dev:
//!   bastion_ssh_user_name: lab-user
//!   guid: abc123
//! ```
//!
//! It ends before the next line that starts with a non-whitespace character.

use crate::config::FRAGMENT_ROOT_KEY;
use crate::models::scalar_text;
use regex::Regex;
use serde::de::{self, EnumAccess, MapAccess, SeqAccess, VariantAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_yaml::value::{Tag, TaggedValue};
use serde_yaml::{Mapping, Value};
use std::error::Error;
use std::fmt;
use std::sync::OnceLock;

static HEADER_REGEX: OnceLock<Regex> = OnceLock::new();
static END_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_header_regex() -> &'static Regex {
    HEADER_REGEX.get_or_init(|| {
        let pattern = format!(r"Data\s*\n({}:)", regex::escape(FRAGMENT_ROOT_KEY));
        Regex::new(&pattern).expect("Invalid Regex")
    })
}

fn get_end_regex() -> &'static Regex {
    END_REGEX.get_or_init(|| Regex::new(r"\n\S").expect("Invalid Regex"))
}

/// Find the raw fragment text in a block body, root key line included.
pub fn locate_fragment(body: &str) -> Option<&str> {
    let root = get_header_regex().captures(body)?.get(1)?;
    let end = get_end_regex()
        .find_at(body, root.end())
        .map_or(body.len(), |m| m.start());
    Some(&body[root.start()..end])
}

/// Parse fragment text and return the fields nested under the root key.
///
/// `Ok(None)` when the document has no root key, or the root key is empty.
/// Repeated keys keep the last value. Keys at every depth become strings.
pub fn parse_fragment(text: &str) -> Result<Option<Vec<(String, Value)>>, Box<dyn Error>> {
    let FragmentValue(doc) =
        serde_yaml::from_str(text).map_err(|e| format!("Failed to parse YAML data: {e}"))?;

    let nested = match doc.as_mapping().and_then(|m| m.get(FRAGMENT_ROOT_KEY)) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Mapping(nested)) => nested,
        Some(other) => {
            return Err(format!(
                "Fragment root '{FRAGMENT_ROOT_KEY}' is not a mapping: {}",
                value_kind(other)
            )
            .into())
        }
    };

    Ok(Some(
        nested
            .iter()
            .map(|(k, v)| (key_text(k), v.clone()))
            .collect(),
    ))
}

/// Mapping key as text. Null becomes `null`, collections their flow YAML.
fn key_text(key: &Value) -> String {
    match key {
        Value::Null => "null".to_string(),
        other => scalar_text(other).unwrap_or_else(|| {
            serde_yaml::to_string(other)
                .map(|s| s.trim_end().to_string())
                .unwrap_or_default()
        }),
    }
}

/// A YAML value built with `Mapping::insert`, so a repeated key overwrites
/// instead of failing, and every mapping key is a string.
struct FragmentValue(Value);

impl<'de> Deserialize<'de> for FragmentValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FragmentVisitor)
    }
}

struct FragmentVisitor;

impl<'de> Visitor<'de> for FragmentVisitor {
    type Value = FragmentValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any YAML value")
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<FragmentValue, E> {
        Ok(FragmentValue(Value::Bool(b)))
    }

    fn visit_i64<E: de::Error>(self, i: i64) -> Result<FragmentValue, E> {
        Ok(FragmentValue(Value::Number(i.into())))
    }

    fn visit_u64<E: de::Error>(self, u: u64) -> Result<FragmentValue, E> {
        Ok(FragmentValue(Value::Number(u.into())))
    }

    fn visit_f64<E: de::Error>(self, f: f64) -> Result<FragmentValue, E> {
        Ok(FragmentValue(Value::Number(f.into())))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<FragmentValue, E> {
        Ok(FragmentValue(Value::String(s.to_string())))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<FragmentValue, E> {
        Ok(FragmentValue(Value::String(s)))
    }

    fn visit_unit<E: de::Error>(self) -> Result<FragmentValue, E> {
        Ok(FragmentValue(Value::Null))
    }

    fn visit_none<E: de::Error>(self) -> Result<FragmentValue, E> {
        Ok(FragmentValue(Value::Null))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<FragmentValue, D::Error> {
        FragmentValue::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<FragmentValue, A::Error> {
        let mut items = Vec::new();
        while let Some(FragmentValue(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(FragmentValue(Value::Sequence(items)))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<FragmentValue, A::Error> {
        let mut mapping = Mapping::new();
        while let Some((FragmentValue(key), FragmentValue(value))) = map.next_entry()? {
            let key = key_text(&key);
            if mapping.contains_key(key.as_str()) {
                log::debug!("repeated fragment key '{key}', last value wins");
            }
            mapping.insert(Value::String(key), value);
        }
        Ok(FragmentValue(Value::Mapping(mapping)))
    }

    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<FragmentValue, A::Error> {
        let (tag, variant) = data.variant::<String>()?;
        let FragmentValue(value) = variant.newtype_variant()?;
        Ok(FragmentValue(Value::Tagged(Box::new(TaggedValue {
            tag: Tag::new(tag),
            value,
        }))))
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}
