//! `apiextensions.k8s.io/v1` CustomResourceDefinition.

use std::collections::BTreeMap;

use crdgen_ir::{Resource, quote_named, quote_record};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::APIEXTENSIONS_V1;
use crate::meta::{ObjectMeta, Time, TypeMeta};

/// `kind` of a CustomResourceDefinition manifest.
pub const KIND: &str = "CustomResourceDefinition";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomResourceDefinition {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    pub metadata: ObjectMeta,
    pub spec: CustomResourceDefinitionSpec,
    #[serde(skip_serializing_if = "CustomResourceDefinitionStatus::is_empty")]
    pub status: CustomResourceDefinitionStatus,
}

quote_record!(CustomResourceDefinition => APIEXTENSIONS_V1, "CustomResourceDefinition" {
    "TypeMeta" => type_meta: TypeMeta,
    "ObjectMeta" => metadata: ObjectMeta,
    "Spec" => spec: CustomResourceDefinitionSpec,
    "Status" => status: CustomResourceDefinitionStatus,
});

impl Resource for CustomResourceDefinition {
    fn definition_name(&self) -> &str {
        &self.spec.names.kind
    }

    fn group(&self) -> &str {
        &self.spec.group
    }

    fn annotate(&mut self, key: &str, value: &str) {
        self.metadata.annotations.insert(key.to_string(), value.to_string());
    }
}

impl CustomResourceDefinition {
    /// Every schema attached to a served version, with the version name.
    pub fn schemas_mut(&mut self) -> impl Iterator<Item = (&str, &mut JsonSchemaProps)> {
        self.spec.versions.iter_mut().filter_map(|v| {
            let schema = v.schema.as_mut()?.open_api_v3_schema.as_deref_mut()?;
            Some((v.name.as_str(), schema))
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomResourceDefinitionSpec {
    pub group: String,
    pub names: CustomResourceDefinitionNames,
    pub scope: ResourceScope,
    pub versions: Vec<CustomResourceDefinitionVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion: Option<CustomResourceConversion>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub preserve_unknown_fields: bool,
}

quote_record!(CustomResourceDefinitionSpec => APIEXTENSIONS_V1, "CustomResourceDefinitionSpec" {
    "Group" => group: String,
    "Names" => names: CustomResourceDefinitionNames,
    "Scope" => scope: ResourceScope,
    "Versions" => versions: Vec<CustomResourceDefinitionVersion>,
    "Conversion" => conversion: Option<CustomResourceConversion>,
    "PreserveUnknownFields" => preserve_unknown_fields: bool,
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomResourceDefinitionNames {
    pub plural: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub singular: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub short_names: Vec<String>,
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub list_kind: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
}

quote_record!(CustomResourceDefinitionNames => APIEXTENSIONS_V1, "CustomResourceDefinitionNames" {
    "Plural" => plural: String,
    "Singular" => singular: String,
    "ShortNames" => short_names: Vec<String>,
    "Kind" => kind: String,
    "ListKind" => list_kind: String,
    "Categories" => categories: Vec<String>,
});

/// `Namespaced` or `Cluster`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceScope(pub String);

quote_named!(ResourceScope => APIEXTENSIONS_V1, "ResourceScope", String);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomResourceDefinitionVersion {
    pub name: String,
    pub served: bool,
    pub storage: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<CustomResourceValidation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subresources: Option<CustomResourceSubresources>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional_printer_columns: Vec<CustomResourceColumnDefinition>,
}

quote_record!(CustomResourceDefinitionVersion => APIEXTENSIONS_V1, "CustomResourceDefinitionVersion" {
    "Name" => name: String,
    "Served" => served: bool,
    "Storage" => storage: bool,
    "Deprecated" => deprecated: bool,
    "DeprecationWarning" => deprecation_warning: Option<String>,
    "Schema" => schema: Option<CustomResourceValidation>,
    "Subresources" => subresources: Option<CustomResourceSubresources>,
    "AdditionalPrinterColumns" => additional_printer_columns: Vec<CustomResourceColumnDefinition>,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomResourceValidation {
    #[serde(rename = "openAPIV3Schema", skip_serializing_if = "Option::is_none")]
    pub open_api_v3_schema: Option<Box<JsonSchemaProps>>,
}

quote_record!(CustomResourceValidation => APIEXTENSIONS_V1, "CustomResourceValidation" {
    "OpenAPIV3Schema" => open_api_v3_schema: Option<Box<JsonSchemaProps>>,
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomResourceSubresources {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CustomResourceSubresourceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<CustomResourceSubresourceScale>,
}

quote_record!(CustomResourceSubresources => APIEXTENSIONS_V1, "CustomResourceSubresources" {
    "Status" => status: Option<CustomResourceSubresourceStatus>,
    "Scale" => scale: Option<CustomResourceSubresourceScale>,
});

/// Enables the `/status` subresource. Carries no fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomResourceSubresourceStatus {}

quote_record!(CustomResourceSubresourceStatus => APIEXTENSIONS_V1, "CustomResourceSubresourceStatus" {});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomResourceSubresourceScale {
    pub spec_replicas_path: String,
    pub status_replicas_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_selector_path: Option<String>,
}

quote_record!(CustomResourceSubresourceScale => APIEXTENSIONS_V1, "CustomResourceSubresourceScale" {
    "SpecReplicasPath" => spec_replicas_path: String,
    "StatusReplicasPath" => status_replicas_path: String,
    "LabelSelectorPath" => label_selector_path: Option<String>,
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomResourceColumnDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub format: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "is_zero_i32")]
    pub priority: i32,
    #[serde(rename = "jsonPath")]
    pub json_path: String,
}

quote_record!(CustomResourceColumnDefinition => APIEXTENSIONS_V1, "CustomResourceColumnDefinition" {
    "Name" => name: String,
    "Type" => type_: String,
    "Format" => format: String,
    "Description" => description: String,
    "Priority" => priority: i32,
    "JSONPath" => json_path: String,
});

fn is_zero_i32(n: &i32) -> bool {
    *n == 0
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomResourceConversion {
    pub strategy: ConversionStrategyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook: Option<WebhookConversion>,
}

quote_record!(CustomResourceConversion => APIEXTENSIONS_V1, "CustomResourceConversion" {
    "Strategy" => strategy: ConversionStrategyType,
    "Webhook" => webhook: Option<WebhookConversion>,
});

/// `None` or `Webhook`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversionStrategyType(pub String);

quote_named!(ConversionStrategyType => APIEXTENSIONS_V1, "ConversionStrategyType", String);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebhookConversion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_config: Option<WebhookClientConfig>,
    pub conversion_review_versions: Vec<String>,
}

quote_record!(WebhookConversion => APIEXTENSIONS_V1, "WebhookConversion" {
    "ClientConfig" => client_config: Option<WebhookClientConfig>,
    "ConversionReviewVersions" => conversion_review_versions: Vec<String>,
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebhookClientConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceReference>,
    #[serde(rename = "caBundle", with = "crate::bytes", skip_serializing_if = "Vec::is_empty")]
    pub ca_bundle: Vec<u8>,
}

quote_record!(WebhookClientConfig => APIEXTENSIONS_V1, "WebhookClientConfig" {
    "URL" => url: Option<String>,
    "Service" => service: Option<ServiceReference>,
    "CABundle" => ca_bundle: Vec<u8>,
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceReference {
    pub namespace: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
}

quote_record!(ServiceReference => APIEXTENSIONS_V1, "ServiceReference" {
    "Namespace" => namespace: String,
    "Name" => name: String,
    "Path" => path: Option<String>,
    "Port" => port: Option<i32>,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomResourceDefinitionStatus {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<CustomResourceDefinitionCondition>,
    pub accepted_names: CustomResourceDefinitionNames,
    pub stored_versions: Vec<String>,
}

quote_record!(CustomResourceDefinitionStatus => APIEXTENSIONS_V1, "CustomResourceDefinitionStatus" {
    "Conditions" => conditions: Vec<CustomResourceDefinitionCondition>,
    "AcceptedNames" => accepted_names: CustomResourceDefinitionNames,
    "StoredVersions" => stored_versions: Vec<String>,
});

impl CustomResourceDefinitionStatus {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomResourceDefinitionCondition {
    #[serde(rename = "type")]
    pub type_: CustomResourceDefinitionConditionType,
    pub status: ConditionStatus,
    #[serde(skip_serializing_if = "Time::is_zero")]
    pub last_transition_time: Time,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reason: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

quote_record!(CustomResourceDefinitionCondition => APIEXTENSIONS_V1, "CustomResourceDefinitionCondition" {
    "Type" => type_: CustomResourceDefinitionConditionType,
    "Status" => status: ConditionStatus,
    "LastTransitionTime" => last_transition_time: Time,
    "Reason" => reason: String,
    "Message" => message: String,
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomResourceDefinitionConditionType(pub String);

quote_named!(
    CustomResourceDefinitionConditionType => APIEXTENSIONS_V1,
    "CustomResourceDefinitionConditionType",
    String
);

/// `True`, `False` or `Unknown`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionStatus(pub String);

quote_named!(ConditionStatus => APIEXTENSIONS_V1, "ConditionStatus", String);

/// OpenAPI v3 schema object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JsonSchemaProps {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "$schema", skip_serializing_if = "JsonSchemaUrl::is_empty")]
    pub schema: JsonSchemaUrl,
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub ref_: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub format: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub exclusive_maximum: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub exclusive_minimum: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<i64>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub unique_items: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_: Vec<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<JsonSchemaPropsOrArray>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub all_of: Vec<JsonSchemaProps>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub one_of: Vec<JsonSchemaProps>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub any_of: Vec<JsonSchemaProps>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<JsonSchemaProps>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, JsonSchemaProps>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<Box<JsonSchemaPropsOrBool>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub pattern_properties: BTreeMap<String, JsonSchemaProps>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_items: Option<Box<JsonSchemaPropsOrBool>>,
    #[serde(skip_serializing_if = "JsonSchemaDefinitions::is_empty")]
    pub definitions: JsonSchemaDefinitions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Json>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub nullable: bool,
    #[serde(rename = "x-kubernetes-preserve-unknown-fields", skip_serializing_if = "Option::is_none")]
    pub x_preserve_unknown_fields: Option<bool>,
    #[serde(rename = "x-kubernetes-embedded-resource", skip_serializing_if = "std::ops::Not::not")]
    pub x_embedded_resource: bool,
    #[serde(rename = "x-kubernetes-int-or-string", skip_serializing_if = "std::ops::Not::not")]
    pub x_int_or_string: bool,
    #[serde(rename = "x-kubernetes-list-map-keys", skip_serializing_if = "Vec::is_empty")]
    pub x_list_map_keys: Vec<String>,
    #[serde(rename = "x-kubernetes-list-type", skip_serializing_if = "Option::is_none")]
    pub x_list_type: Option<String>,
    #[serde(rename = "x-kubernetes-map-type", skip_serializing_if = "Option::is_none")]
    pub x_map_type: Option<String>,
    #[serde(rename = "x-kubernetes-validations", skip_serializing_if = "ValidationRules::is_empty")]
    pub x_validations: ValidationRules,
}

quote_record!(JsonSchemaProps => APIEXTENSIONS_V1, "JSONSchemaProps" {
    "ID" => id: String,
    "Schema" => schema: JsonSchemaUrl,
    "Ref" => ref_: Option<String>,
    "Description" => description: String,
    "Type" => type_: String,
    "Format" => format: String,
    "Title" => title: String,
    "Default" => default: Option<Json>,
    "Maximum" => maximum: Option<f64>,
    "ExclusiveMaximum" => exclusive_maximum: bool,
    "Minimum" => minimum: Option<f64>,
    "ExclusiveMinimum" => exclusive_minimum: bool,
    "MaxLength" => max_length: Option<i64>,
    "MinLength" => min_length: Option<i64>,
    "Pattern" => pattern: String,
    "MaxItems" => max_items: Option<i64>,
    "MinItems" => min_items: Option<i64>,
    "UniqueItems" => unique_items: bool,
    "MultipleOf" => multiple_of: Option<f64>,
    "Enum" => enum_: Vec<Json>,
    "MaxProperties" => max_properties: Option<i64>,
    "MinProperties" => min_properties: Option<i64>,
    "Required" => required: Vec<String>,
    "Items" => items: Option<Box<JsonSchemaPropsOrArray>>,
    "AllOf" => all_of: Vec<JsonSchemaProps>,
    "OneOf" => one_of: Vec<JsonSchemaProps>,
    "AnyOf" => any_of: Vec<JsonSchemaProps>,
    "Not" => not: Option<Box<JsonSchemaProps>>,
    "Properties" => properties: BTreeMap<String, JsonSchemaProps>,
    "AdditionalProperties" => additional_properties: Option<Box<JsonSchemaPropsOrBool>>,
    "PatternProperties" => pattern_properties: BTreeMap<String, JsonSchemaProps>,
    "AdditionalItems" => additional_items: Option<Box<JsonSchemaPropsOrBool>>,
    "Definitions" => definitions: JsonSchemaDefinitions,
    "ExternalDocs" => external_docs: Option<ExternalDocumentation>,
    "Example" => example: Option<Json>,
    "Nullable" => nullable: bool,
    "XPreserveUnknownFields" => x_preserve_unknown_fields: Option<bool>,
    "XEmbeddedResource" => x_embedded_resource: bool,
    "XIntOrString" => x_int_or_string: bool,
    "XListMapKeys" => x_list_map_keys: Vec<String>,
    "XListType" => x_list_type: Option<String>,
    "XMapType" => x_map_type: Option<String>,
    "XValidations" => x_validations: ValidationRules,
});

impl JsonSchemaProps {
    /// Visit this schema and every schema nested below it, depth first.
    /// The callback receives a JSON-pointer-like path (`.properties.spec`).
    pub fn walk_mut(&mut self, path: &str, f: &mut dyn FnMut(&str, &mut JsonSchemaProps)) {
        f(path, self);
        if let Some(items) = self.items.as_deref_mut() {
            if let Some(schema) = items.schema.as_deref_mut() {
                schema.walk_mut(&format!("{path}.items"), f);
            }
            for (i, schema) in items.json_schemas.iter_mut().enumerate() {
                schema.walk_mut(&format!("{path}.items[{i}]"), f);
            }
        }
        for (key, list) in [
            ("allOf", &mut self.all_of),
            ("oneOf", &mut self.one_of),
            ("anyOf", &mut self.any_of),
        ] {
            for (i, schema) in list.iter_mut().enumerate() {
                schema.walk_mut(&format!("{path}.{key}[{i}]"), f);
            }
        }
        if let Some(not) = self.not.as_deref_mut() {
            not.walk_mut(&format!("{path}.not"), f);
        }
        for (key, map) in [
            ("properties", &mut self.properties),
            ("patternProperties", &mut self.pattern_properties),
            ("definitions", &mut self.definitions.0),
        ] {
            for (name, schema) in map.iter_mut() {
                schema.walk_mut(&format!("{path}.{key}.{name}"), f);
            }
        }
        for (key, or_bool) in [
            ("additionalProperties", self.additional_properties.as_deref_mut()),
            ("additionalItems", self.additional_items.as_deref_mut()),
        ] {
            if let Some(schema) = or_bool.and_then(|b| b.schema.as_deref_mut()) {
                schema.walk_mut(&format!("{path}.{key}"), f);
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonSchemaUrl(pub String);

quote_named!(JsonSchemaUrl => APIEXTENSIONS_V1, "JSONSchemaURL", String);

impl JsonSchemaUrl {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonSchemaDefinitions(pub BTreeMap<String, JsonSchemaProps>);

quote_named!(JsonSchemaDefinitions => APIEXTENSIONS_V1, "JSONSchemaDefinitions", BTreeMap<String, JsonSchemaProps>);

impl JsonSchemaDefinitions {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationRules(pub Vec<ValidationRule>);

quote_named!(ValidationRules => APIEXTENSIONS_V1, "ValidationRules", Vec<ValidationRule>);

impl ValidationRules {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationRule {
    pub rule: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message_expression: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<FieldValueErrorReason>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub field_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional_old_self: Option<bool>,
}

quote_record!(ValidationRule => APIEXTENSIONS_V1, "ValidationRule" {
    "Rule" => rule: String,
    "Message" => message: String,
    "MessageExpression" => message_expression: String,
    "Reason" => reason: Option<FieldValueErrorReason>,
    "FieldPath" => field_path: String,
    "OptionalOldSelf" => optional_old_self: Option<bool>,
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValueErrorReason(pub String);

quote_named!(FieldValueErrorReason => APIEXTENSIONS_V1, "FieldValueErrorReason", String);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalDocumentation {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
}

quote_record!(ExternalDocumentation => APIEXTENSIONS_V1, "ExternalDocumentation" {
    "Description" => description: String,
    "URL" => url: String,
});

/// Arbitrary JSON, kept as the raw bytes it was read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Json {
    pub raw: Vec<u8>,
}

quote_record!(Json => APIEXTENSIONS_V1, "JSON" {
    "Raw" => raw: Vec<u8>,
});

impl Json {
    pub fn from_value(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        Ok(Self {
            raw: serde_json::to_vec(value)?,
        })
    }

    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_slice(&self.raw)
    }
}

impl Serialize for Json {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.raw.is_empty() {
            return serializer.serialize_none();
        }
        self.to_value()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Json {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        Self::from_value(&value).map_err(de::Error::custom)
    }
}

/// Either a single schema or a list of schemas (`items`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonSchemaPropsOrArray {
    pub schema: Option<Box<JsonSchemaProps>>,
    pub json_schemas: Vec<JsonSchemaProps>,
}

quote_record!(JsonSchemaPropsOrArray => APIEXTENSIONS_V1, "JSONSchemaPropsOrArray" {
    "Schema" => schema: Option<Box<JsonSchemaProps>>,
    "JSONSchemas" => json_schemas: Vec<JsonSchemaProps>,
});

#[derive(Deserialize)]
#[serde(untagged)]
enum OrArrayRepr {
    Array(Vec<JsonSchemaProps>),
    Schema(Box<JsonSchemaProps>),
}

impl Serialize for JsonSchemaPropsOrArray {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.json_schemas.is_empty() {
            return self.json_schemas.serialize(serializer);
        }
        match &self.schema {
            Some(schema) => schema.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for JsonSchemaPropsOrArray {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match OrArrayRepr::deserialize(deserializer)? {
            OrArrayRepr::Array(json_schemas) => Self {
                schema: None,
                json_schemas,
            },
            OrArrayRepr::Schema(schema) => Self {
                schema: Some(schema),
                json_schemas: Vec::new(),
            },
        })
    }
}

/// Either a boolean or a schema (`additionalProperties`). A schema implies
/// `allows = true`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonSchemaPropsOrBool {
    pub allows: bool,
    pub schema: Option<Box<JsonSchemaProps>>,
}

quote_record!(JsonSchemaPropsOrBool => APIEXTENSIONS_V1, "JSONSchemaPropsOrBool" {
    "Allows" => allows: bool,
    "Schema" => schema: Option<Box<JsonSchemaProps>>,
});

#[derive(Deserialize)]
#[serde(untagged)]
enum OrBoolRepr {
    Allows(bool),
    Schema(Box<JsonSchemaProps>),
}

impl Serialize for JsonSchemaPropsOrBool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.schema {
            Some(schema) => schema.serialize(serializer),
            None => serializer.serialize_bool(self.allows),
        }
    }
}

impl<'de> Deserialize<'de> for JsonSchemaPropsOrBool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match OrBoolRepr::deserialize(deserializer)? {
            OrBoolRepr::Allows(allows) => Self { allows, schema: None },
            OrBoolRepr::Schema(schema) => Self {
                allows: true,
                schema: Some(schema),
            },
        })
    }
}
