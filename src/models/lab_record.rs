//! Lab record extracted from one provisioning block.

use regex::Regex;
use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::sync::OnceLock;

/// Regex deriving the lab guid from the trailing token of a service name.
static GUID_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_guid_regex() -> &'static Regex {
    GUID_REGEX.get_or_init(|| Regex::new(r"-(\w+)$").expect("Invalid Regex"))
}

/// Derive the lab guid from a service name, `""` when there is no trailing `-token`.
///
/// # Examples
/// ```
/// use lab_inventory::models::derive_lab_guid;
/// assert_eq!(derive_lab_guid("openshift-cnv.osp-on-ocp-cnv.dev-abc123"), "abc123");
/// assert_eq!(derive_lab_guid("nodash"), "");
/// ```
pub fn derive_lab_guid(service_name: &str) -> &str {
    get_guid_regex()
        .captures(service_name)
        .and_then(|c| c.get(1))
        .map_or("", |m| m.as_str())
}

/// Text form of a scalar: strings as-is, numbers and bools via `Display`.
///
/// `None` for null and collections.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// How fragment fields are merged over pattern-extracted fields of the same name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum MergePolicy {
    /// Fragment values overwrite pattern-extracted ones (last write wins).
    #[default]
    FragmentWins,
    /// Fragment values only fill fields no pattern produced.
    KeepExtracted,
}

/// One lab's extracted fields, in insertion order.
///
/// `service_name` and `lab_guid` are always present. Every other field is absent
/// when nothing in the block produced it.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct LabRecord {
    fields: Mapping,
}

impl LabRecord {
    /// Start a record holding only `service_name` and its derived `lab_guid`.
    pub fn new(service_name: &str) -> Self {
        let mut fields = Mapping::new();
        fields.insert("service_name".into(), service_name.into());
        fields.insert("lab_guid".into(), derive_lab_guid(service_name).into());
        LabRecord { fields }
    }

    pub fn service_name(&self) -> String {
        self.get_text("service_name").unwrap_or_default()
    }

    /// Guid as text, also when a fragment replaced it with a number or bool.
    ///
    /// This one accessor feeds the file name, the header and the key path.
    pub fn lab_guid(&self) -> String {
        self.get_text("lab_guid").unwrap_or_default()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// The field as a string slice, `None` if absent or not a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// The field as text if it is a scalar, see [`scalar_text`].
    pub fn get_text(&self, field: &str) -> Option<String> {
        self.get(field).and_then(scalar_text)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn insert(&mut self, field: &str, value: impl Into<Value>) {
        self.fields.insert(Value::String(field.to_string()), value.into());
    }

    /// Merge an already string-keyed fragment into the record under `policy`.
    pub(crate) fn merge_fragment(&mut self, fragment: Vec<(String, Value)>, policy: MergePolicy) {
        for (field, value) in fragment {
            if policy == MergePolicy::KeepExtracted && self.contains(&field) {
                log::debug!(
                    "keep extracted '{field}' for {}, fragment value ignored",
                    self.service_name()
                );
                continue;
            }
            self.insert(&field, value);
        }
    }
}
