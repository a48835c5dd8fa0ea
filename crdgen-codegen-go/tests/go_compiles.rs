//! Generated Go source is checked by the Go toolchain.
//!
//! The emitted files are placed in a throwaway Go module next to stub
//! versions of the packages they import, then `go vet` type checks the lot.
//! The tests pass trivially when `go` is not installed.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::process::Command;

use chrono::{TimeZone, Utc};
use crdgen_apis::meta::Time;
use crdgen_codegen_go::{Generator, GeneratorOptions};
use crdgen_ir::{Group, Package, Resource, quote_named, quote_record};
use tempfile::TempDir;

const APPS_V1: &str = "example.com/apis/apps/v1";

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
struct Phase(String);

quote_named!(Phase => APPS_V1, "Phase", String);

#[derive(Debug, Clone, Default)]
struct Limits(BTreeMap<String, i64>);

quote_named!(Limits => APPS_V1, "Limits", BTreeMap<String, i64>);

#[derive(Debug, Clone, Default)]
struct Port {
    name: String,
    number: u16,
    protocol: Option<Phase>,
}

quote_record!(Port => APPS_V1, "Port" {
    "Name" => name: String,
    "Number" => number: u16,
    "Protocol" => protocol: Option<Phase>,
});

#[derive(Debug, Clone, Default)]
struct Spec {
    replicas: Option<i32>,
    tolerance: Option<Option<i32>>,
    ports: Vec<Port>,
    backups: Vec<Option<Port>>,
    owners: BTreeMap<String, Port>,
    selector: BTreeMap<String, String>,
    priorities: BTreeMap<Phase, i32>,
    limits: Limits,
    tags: Vec<Vec<String>>,
    checksum: [u8; 4],
    ratio: f64,
    scale: f32,
    ceiling: u64,
}

quote_record!(Spec => APPS_V1, "Spec" {
    "Replicas" => replicas: Option<i32>,
    "Tolerance" => tolerance: Option<Option<i32>>,
    "Ports" => ports: Vec<Port>,
    "Backups" => backups: Vec<Option<Port>>,
    "Owners" => owners: BTreeMap<String, Port>,
    "Selector" => selector: BTreeMap<String, String>,
    "Priorities" => priorities: BTreeMap<Phase, i32>,
    "Limits" => limits: Limits,
    "Tags" => tags: Vec<Vec<String>>,
    "Checksum" => checksum: [u8; 4],
    "Ratio" => ratio: f64,
    "Scale" => scale: f32,
    "Ceiling" => ceiling: u64,
});

#[derive(Debug, Clone, Default)]
struct Status {
    observed: i64,
    history: Vec<Phase>,
}

quote_record!(Status => APPS_V1, "Status" {
    "Observed" => observed: i64,
    "History" => history: Vec<Phase>,
});

#[derive(Debug, Clone, Default)]
struct Gadget {
    name: String,
    group: String,
    spec: Spec,
    status: Option<Box<Status>>,
    phase: Phase,
    previous: Option<Phase>,
    weights: HashMap<String, i32>,
    ready: bool,
    created: Time,
}

quote_record!(Gadget => APPS_V1, "Gadget" {
    "Spec" => spec: Spec,
    "Status" => status: Option<Box<Status>>,
    "Phase" => phase: Phase,
    "Previous" => previous: Option<Phase>,
    "Weights" => weights: HashMap<String, i32>,
    "Ready" => ready: bool,
    "Created" => created: Time,
});

impl Resource for Gadget {
    fn definition_name(&self) -> &str {
        &self.name
    }

    fn group(&self) -> &str {
        &self.group
    }

    fn annotate(&mut self, _key: &str, _value: &str) {}
}

const GO_MOD: &str = "module example.com

go 1.17

require (
\tgithub.com/zoumo/golib v0.0.0
\tk8s.io/apimachinery v0.0.0
)

replace github.com/zoumo/golib => ./stubs/golib

replace k8s.io/apimachinery => ./stubs/apimachinery
";

const APPS_V1_GO: &str = "package v1

import (
\tmetav1 \"k8s.io/apimachinery/pkg/apis/meta/v1\"
\t\"k8s.io/apimachinery/pkg/runtime\"
)

type Phase string

type Limits map[string]int64

type Port struct {
\tName     string
\tNumber   uint16
\tProtocol *Phase
}

type Spec struct {
\tReplicas   *int32
\tTolerance  **int32
\tPorts      []Port
\tBackups    []*Port
\tOwners     map[string]Port
\tSelector   map[string]string
\tPriorities map[Phase]int32
\tLimits     Limits
\tTags       [][]string
\tChecksum   [4]uint8
\tRatio      float64
\tScale      float32
\tCeiling    uint64
}

type Status struct {
\tObserved int64
\tHistory  []Phase
}

type Gadget struct {
\tSpec     Spec
\tStatus   *Status
\tPhase    Phase
\tPrevious *Phase
\tWeights  map[string]int32
\tReady    bool
\tCreated  metav1.Time
}

func AddToScheme(scheme *runtime.Scheme) error { return nil }
";

const ADD_TO_SCHEME_GO: &str = "import \"k8s.io/apimachinery/pkg/runtime\"

func AddToScheme(scheme *runtime.Scheme) error { return nil }
";

const POINTER_GO: &str = "package pointer

func Bool(v bool) *bool { return &v }
func Int(v int) *int { return &v }
func Int8(v int8) *int8 { return &v }
func Int16(v int16) *int16 { return &v }
func Int32(v int32) *int32 { return &v }
func Int64(v int64) *int64 { return &v }
func Uint(v uint) *uint { return &v }
func Uint8(v uint8) *uint8 { return &v }
func Uint16(v uint16) *uint16 { return &v }
func Uint32(v uint32) *uint32 { return &v }
func Uint64(v uint64) *uint64 { return &v }
func Uintptr(v uintptr) *uintptr { return &v }
func Float32(v float32) *float32 { return &v }
func Float64(v float64) *float64 { return &v }
func String(v string) *string { return &v }
";

/// Lay out a Go module holding the API packages and stub dependencies the
/// generated code imports.
fn write_module(root: &Path) {
    let files = [
        ("go.mod", GO_MOD.to_string()),
        ("apis/apps/v1/types.go", APPS_V1_GO.to_string()),
        ("apis/apps/v1beta1/register.go", format!("package v1beta1\n\n{ADD_TO_SCHEME_GO}")),
        ("apis/batch/v1/register.go", format!("package v1\n\n{ADD_TO_SCHEME_GO}")),
        ("stubs/golib/go.mod", "module github.com/zoumo/golib\n\ngo 1.17\n".to_string()),
        ("stubs/golib/pointer/pointer.go", POINTER_GO.to_string()),
        ("stubs/apimachinery/go.mod", "module k8s.io/apimachinery\n\ngo 1.17\n".to_string()),
        (
            "stubs/apimachinery/pkg/runtime/scheme.go",
            "package runtime\n\ntype Scheme struct{}\n".to_string(),
        ),
        (
            "stubs/apimachinery/pkg/util/runtime/runtime.go",
            "package runtime\n\nfunc Must(err error) {\n\tif err != nil {\n\t\tpanic(err)\n\t}\n}\n".to_string(),
        ),
        (
            "stubs/apimachinery/pkg/apis/meta/v1/time.go",
            "package v1\n\nimport \"time\"\n\ntype Time struct {\n\ttime.Time\n}\n".to_string(),
        ),
    ];
    for (path, content) in files {
        let path = root.join(path);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }
}

fn go_available() -> bool {
    Command::new("go")
        .arg("version")
        .output()
        .is_ok_and(|output| output.status.success())
}

/// Generate into `<module>/gen` and run `go vet` over the module. The
/// buildtag analyzer is off: the header uses the legacy `// +build` form.
fn assert_generated_code_compiles(generator: &Generator<Gadget>) {
    if !go_available() {
        eprintln!("go not found on PATH, skipping");
        return;
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    write_module(root);
    generator.generate(&root.join("gen")).expect("Failed to generate code");

    let mut command = Command::new("go");
    command
        .args(["vet", "-buildtag=false", "./..."])
        .current_dir(root)
        .env("GOFLAGS", "-mod=mod")
        .env("GOPROXY", "off")
        .env("GOWORK", "off")
        .env("GOTOOLCHAIN", "local");
    if std::env::var_os("GOCACHE").is_none() && std::env::var_os("HOME").is_none() {
        command.env("GOCACHE", root.join(".cache"));
    }
    let output = command.output().expect("Failed to run go vet");

    if !output.status.success() {
        eprintln!("\n=== Generated files ===");
        print_generated_files(&root.join("gen"));
        panic!(
            "Generated code failed to compile!\n\nstdout:\n{}\n\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

fn print_generated_files(dir: &Path) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            print_generated_files(&path);
        } else if let Ok(content) = std::fs::read_to_string(&path) {
            eprintln!("--- {}", path.display());
            for line in content.lines() {
                eprintln!("  | {line}");
            }
        }
    }
}

fn packages() -> Vec<Package> {
    vec![
        Package::new(APPS_V1, "apps.example.com", "v1"),
        Package::new("example.com/apis/apps/v1beta1", "apps.example.com", "v1beta1"),
        Package::new("example.com/apis/batch/v1", "batch.example.com", "v1"),
    ]
}

fn generator(definitions: Vec<Gadget>) -> Generator<Gadget> {
    let mut groups: Vec<Group<Gadget>> = Vec::new();
    for gadget in definitions {
        match groups.iter_mut().find(|g| g.name() == gadget.group) {
            Some(group) => {
                group.insert(gadget);
            }
            None => {
                let mut group = Group::new(gadget.group.clone());
                group.insert(gadget);
                groups.push(group);
            }
        }
    }
    Generator::new(groups, packages(), GeneratorOptions::default())
}

fn port(name: &str, number: u16) -> Port {
    Port {
        name: name.into(),
        number,
        protocol: Some(Phase("TCP".into())),
    }
}

fn full_gadget() -> Gadget {
    Gadget {
        name: "Gadget".into(),
        group: "apps.example.com".into(),
        spec: Spec {
            replicas: Some(3),
            tolerance: Some(Some(-7)),
            ports: vec![port("http", 80), port("https", 443)],
            backups: vec![Some(port("admin", 9000)), None],
            owners: [("alice".to_string(), port("ssh", 22))].into(),
            selector: [("app".to_string(), "gadget".to_string())].into(),
            priorities: [(Phase("Running".into()), 2), (Phase("Pending".into()), 1)].into(),
            limits: Limits([("cpu".to_string(), i64::MIN), ("memory".to_string(), 1 << 40)].into()),
            tags: vec![vec!["a".into(), "b\"quoted\"".into()], Vec::new()],
            checksum: [0xde, 0xad, 0xbe, 0xef],
            ratio: f64::NAN,
            scale: f32::INFINITY,
            ceiling: u64::MAX,
        },
        status: Some(Box::new(Status {
            observed: 42,
            history: vec![Phase("Pending".into()), Phase("Running".into())],
        })),
        phase: Phase("Running".into()),
        previous: Some(Phase("Pending".into())),
        weights: (0..8).map(|i| (format!("w{i}"), i)).collect(),
        ready: true,
        created: Time::new(Utc.timestamp_opt(1_700_000_000, 0).single().unwrap()),
    }
}

#[test]
fn test_full_definition_compiles() {
    assert_generated_code_compiles(&generator(vec![full_gadget()]));
}

#[test]
fn test_zero_definition_compiles() {
    assert_generated_code_compiles(&generator(vec![Gadget {
        name: "Empty".into(),
        group: "apps.example.com".into(),
        ..Default::default()
    }]));
}

#[test]
fn test_several_groups_compile() {
    let batch = Gadget {
        name: "Job".into(),
        group: "batch.example.com".into(),
        ..full_gadget()
    };
    let fractional = Gadget {
        name: "Fractional".into(),
        spec: Spec {
            ratio: -0.25,
            scale: 1.5e-7,
            ..Default::default()
        },
        ..full_gadget()
    };
    assert_generated_code_compiles(&generator(vec![full_gadget(), fractional, batch]));
}
