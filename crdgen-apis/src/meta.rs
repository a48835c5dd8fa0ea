//! `metav1` object metadata and timestamps.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use crdgen_ir::{FieldDescriptor, Quote, TypeDescriptor, TypeName, Value, quote_named, quote_record};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{META_V1, TYPES};

/// Seconds between 0001-01-01 and the Unix epoch, the offset Go stores in
/// `time.Time.ext`.
const UNIX_TO_INTERNAL: i64 = 62_135_596_800;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeMeta {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_version: String,
}

quote_record!(TypeMeta => META_V1, "TypeMeta" {
    "Kind" => kind: String,
    "APIVersion" => api_version: String,
});

/// `types.UID`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uid(pub String);

quote_named!(Uid => TYPES, "UID", String);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectMeta {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub generate_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub self_link: String,
    #[serde(skip_serializing_if = "uid_is_empty")]
    pub uid: Uid,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource_version: String,
    #[serde(skip_serializing_if = "is_zero_i64")]
    pub generation: i64,
    #[serde(skip_serializing_if = "Time::is_zero")]
    pub creation_timestamp: Time,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_timestamp: Option<Time>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_grace_period_seconds: Option<i64>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub finalizers: Vec<String>,
}

quote_record!(ObjectMeta => META_V1, "ObjectMeta" {
    "Name" => name: String,
    "GenerateName" => generate_name: String,
    "Namespace" => namespace: String,
    "SelfLink" => self_link: String,
    "UID" => uid: Uid,
    "ResourceVersion" => resource_version: String,
    "Generation" => generation: i64,
    "CreationTimestamp" => creation_timestamp: Time,
    "DeletionTimestamp" => deletion_timestamp: Option<Time>,
    "DeletionGracePeriodSeconds" => deletion_grace_period_seconds: Option<i64>,
    "Labels" => labels: BTreeMap<String, String>,
    "Annotations" => annotations: BTreeMap<String, String>,
    "Finalizers" => finalizers: Vec<String>,
});

fn uid_is_empty(uid: &Uid) -> bool {
    uid.0.is_empty()
}

fn is_zero_i64(n: &i64) -> bool {
    *n == 0
}

/// `metav1.Time`: a wrapper around Go's `time.Time`, serialized as an
/// RFC 3339 timestamp with second precision. `None` is the zero time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Time(pub Option<DateTime<Utc>>);

impl Time {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(Some(at))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_none()
    }
}

impl Serialize for Time {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(at) => serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Secs, true)),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) if !text.is_empty() => DateTime::parse_from_rfc3339(&text)
                .map(|at| Time(Some(at.with_timezone(&Utc))))
                .map_err(de::Error::custom),
            _ => Ok(Time(None)),
        }
    }
}

impl Quote for Time {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::record(
            Some(TypeName::new(META_V1, "Time")),
            vec![FieldDescriptor::visible("Time", go_time)],
        )
    }

    fn quote(&self) -> Value {
        Value::record(Self::descriptor(), vec![quote_go_time(self.0.as_ref())])
    }
}

/// Go's `time.Time` keeps all of its state in unexported fields.
fn go_time() -> TypeDescriptor {
    TypeDescriptor::record(
        Some(TypeName::new("time", "Time")),
        vec![
            FieldDescriptor::hidden("wall", u64::descriptor),
            FieldDescriptor::hidden("ext", i64::descriptor),
            FieldDescriptor::hidden("loc", go_location),
        ],
    )
}

fn go_location() -> TypeDescriptor {
    TypeDescriptor::pointer(TypeDescriptor::record(
        Some(TypeName::new("time", "Location")),
        vec![FieldDescriptor::hidden("name", String::descriptor)],
    ))
}

fn quote_go_time(at: Option<&DateTime<Utc>>) -> Value {
    let (wall, ext) = match at {
        Some(at) => (
            u64::from(at.timestamp_subsec_nanos()),
            at.timestamp() + UNIX_TO_INTERNAL,
        ),
        None => (0, 0),
    };
    let fields = vec![wall.quote(), ext.quote(), Value::pointer(go_location(), None)];
    Value::record(go_time(), fields).with_encoding(marshal_go_time(at))
}

/// `time.Time.MarshalJSON`: RFC 3339 with nanoseconds, restricted to
/// four-digit years.
fn marshal_go_time(at: Option<&DateTime<Utc>>) -> Result<String, String> {
    let Some(at) = at else {
        return Ok("\"0001-01-01T00:00:00Z\"".to_string());
    };
    if !(0..=9999).contains(&at.year()) {
        return Err("Time.MarshalJSON: year outside of range [0,9999]".to_string());
    }
    serde_json::to_string(&at.to_rfc3339_opts(SecondsFormat::AutoSi, true)).map_err(|e| e.to_string())
}
