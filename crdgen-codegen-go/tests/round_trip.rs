//! Emitted expressions evaluate back to the values they were built from.

use std::collections::{BTreeMap, HashMap};

use chrono::{TimeZone, Utc};
use crdgen_apis::CustomResourceDefinition;
use crdgen_apis::apiextensions::{
    CustomResourceDefinitionCondition, CustomResourceDefinitionVersion, CustomResourceValidation, Json,
    JsonSchemaProps, ResourceScope,
};
use crdgen_apis::meta::Time;
use crdgen_codegen_go::testing::{assert_round_trip, equivalent, eval_constructor};
use crdgen_codegen_go::{Generator, GeneratorOptions};
use crdgen_ir::{Group, Package, Quote, Resource, Uintptr, quote_named, quote_record};

const PKG: &str = "example.com/apis/apps/v1";

#[derive(Debug, Clone, Default)]
struct Phase(String);

quote_named!(Phase => PKG, "Phase", String);

#[derive(Debug, Clone, Default)]
struct Limits {
    cpu: f64,
    memory: Option<u64>,
}

quote_record!(Limits => PKG, "Limits" {
    "CPU" => cpu: f64,
    "Memory" => memory: Option<u64>,
});

#[derive(Debug, Clone, Default)]
struct Gadget {
    name: String,
    phase: Phase,
    previous: Option<Phase>,
    ratio: f32,
    offsets: [i8; 3],
    tags: Vec<String>,
    limits: Option<Limits>,
    by_zone: BTreeMap<String, Limits>,
    history: Vec<Option<Limits>>,
    nested: Option<Box<Option<i16>>>,
    handle: Uintptr,
    created: Time,
}

quote_record!(Gadget => PKG, "Gadget" {
    "Phase" => phase: Phase,
    "Previous" => previous: Option<Phase>,
    "Ratio" => ratio: f32,
    "Offsets" => offsets: [i8; 3],
    "Tags" => tags: Vec<String>,
    "Limits" => limits: Option<Limits>,
    "ByZone" => by_zone: BTreeMap<String, Limits>,
    "History" => history: Vec<Option<Limits>>,
    "Nested" => nested: Option<Box<Option<i16>>>,
    "Handle" => handle: Uintptr,
    "Created" => created: Time,
});

impl Resource for Gadget {
    fn definition_name(&self) -> &str {
        &self.name
    }

    fn group(&self) -> &str {
        "apps.example.com"
    }

    fn annotate(&mut self, _key: &str, _value: &str) {}
}

fn full_gadget() -> Gadget {
    Gadget {
        name: "Gadget".into(),
        phase: Phase("Running".into()),
        previous: Some(Phase("Pending \"soon\"\n".into())),
        ratio: 0.1,
        offsets: [-1, 0, 7],
        tags: vec!["a".into(), String::new(), "ünïcode".into()],
        limits: Some(Limits {
            cpu: 1e-7,
            memory: Some(0),
        }),
        by_zone: BTreeMap::from([
            ("west".to_string(), Limits { cpu: 2.5, memory: None }),
            ("east".to_string(), Limits::default()),
        ]),
        history: vec![None, Some(Limits::default())],
        nested: Some(Box::new(Some(-3))),
        handle: Uintptr(0xdead),
        created: Time::new(Utc.timestamp_opt(1_600_000_000, 5).single().unwrap()),
    }
}

#[test]
fn test_scalars_round_trip() {
    assert_round_trip(&true.quote());
    assert_round_trip(&i64::MIN.quote());
    assert_round_trip(&u64::MAX.quote());
    assert_round_trip(&Uintptr(1).quote());
    assert_round_trip(&"tab\tand \\ slash".quote());
    for f in [0.0, -0.0, 1e21, 1e-7, 123456.0, f64::MAX, f64::MIN_POSITIVE, f64::NAN, f64::INFINITY] {
        assert_round_trip(&f.quote());
    }
    for f in [0.1f32, -2.0, f32::MAX, f32::NEG_INFINITY] {
        assert_round_trip(&f.quote());
    }
}

#[test]
fn test_collections_round_trip() {
    assert_round_trip(&vec![Some(1i32), None].quote());
    assert_round_trip(&[[1u8, 2], [3, 4]].quote());
    assert_round_trip(&HashMap::from([(1u16, vec!["x".to_string()]), (2, Vec::new())]).quote());
    assert_round_trip(&Some(vec![Phase("a".into())]).quote());
    assert_round_trip(&Some(BTreeMap::from([("k".to_string(), 1.5f64)])).quote());
}

#[test]
fn test_pointer_to_pointer_round_trip() {
    assert_round_trip(&Some(Box::new(Some(5i32))).quote());
    assert_round_trip(&Some(Box::new(None::<i32>)).quote());
}

#[test]
fn test_record_round_trip() {
    assert_round_trip(&full_gadget().quote());
    assert_round_trip(&Gadget::default().quote());
}

#[test]
fn test_constructor_round_trip() {
    let gadget = full_gadget();
    let mut group = Group::new("apps.example.com");
    group.insert(gadget.clone());
    let generator = Generator::new(
        vec![group],
        vec![Package::new(PKG, "apps.example.com", "v1")],
        GeneratorOptions::default(),
    );
    let registry = generator.render().unwrap();
    let source = &registry.get("apps/zz.generated.crd.go").unwrap().content;

    let evaluated = eval_constructor(source, "NewGadgetCRD", &Option::<Gadget>::descriptor()).unwrap();
    assert!(equivalent(&Some(gadget).quote(), &evaluated));
}

#[test]
fn test_custom_resource_definition_round_trip() {
    let mut schema = JsonSchemaProps {
        type_: "object".into(),
        description: "A widget.".into(),
        ..Default::default()
    };
    schema.properties.insert(
        "replicas".into(),
        JsonSchemaProps {
            type_: "integer".into(),
            minimum: Some(1.0),
            default: Some(Json::from_value(&serde_json::json!(3)).unwrap()),
            ..Default::default()
        },
    );

    let mut crd = CustomResourceDefinition::default();
    crd.metadata.name = "widgets.apps.example.com".into();
    crd.spec.group = "apps.example.com".into();
    crd.spec.names.kind = "Widget".into();
    crd.spec.names.plural = "widgets".into();
    crd.spec.scope = ResourceScope("Namespaced".into());
    crd.spec.versions.push(CustomResourceDefinitionVersion {
        name: "v1".into(),
        served: true,
        storage: true,
        schema: Some(CustomResourceValidation {
            open_api_v3_schema: Some(Box::new(schema)),
        }),
        ..Default::default()
    });
    crd.status.conditions.push(CustomResourceDefinitionCondition {
        last_transition_time: Time::new(Utc.timestamp_opt(1_700_000_000, 0).single().unwrap()),
        ..Default::default()
    });

    assert_round_trip(&crd.quote());
}
