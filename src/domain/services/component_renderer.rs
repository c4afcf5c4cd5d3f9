//! Component renderer
//!
//! Turns a [`ComponentSpec`] into Kubernetes objects: one `apps/v1` Deployment,
//! plus a `v1` Service when the component declares one.

use serde_yaml_ng::{Mapping, Value};

use crate::domain::entities::{ComponentSpec, ContainerSpec, ServiceSpec};

pub const NAME_LABEL: &str = "app.kubernetes.io/name";
pub const MANAGED_BY_LABEL: &str = "app.kubernetes.io/managed-by";
pub const MANAGED_BY: &str = "berth";

/// Render the objects for component `name`, in apply order
pub fn render_component(name: &str, spec: &ComponentSpec) -> Vec<Value> {
    let mut objects = vec![render_deployment(name, spec)];
    if let Some(service) = &spec.service {
        objects.push(render_service(name, spec, service));
    }
    objects
}

fn render_deployment(name: &str, spec: &ComponentSpec) -> Value {
    let containers = spec
        .containers
        .iter()
        .enumerate()
        .map(|(index, container)| render_container(index, container))
        .collect();

    object(
        "apps/v1",
        "Deployment",
        name,
        labels(name, spec),
        mapping([
            ("replicas", Value::from(spec.replicas)),
            (
                "selector",
                mapping([("matchLabels", selector(name))]),
            ),
            (
                "template",
                mapping([
                    ("metadata", mapping([("labels", labels(name, spec))])),
                    ("spec", mapping([("containers", Value::Sequence(containers))])),
                ]),
            ),
        ]),
    )
}

fn render_container(index: usize, container: &ContainerSpec) -> Value {
    let name = container
        .name
        .clone()
        .unwrap_or_else(|| format!("container-{index}"));

    let mut out = Mapping::new();
    out.insert("name".into(), name.into());
    out.insert("image".into(), container.image.clone().into());
    if !container.command.is_empty() {
        out.insert("command".into(), strings(&container.command));
    }
    if !container.args.is_empty() {
        out.insert("args".into(), strings(&container.args));
    }
    if !container.env.is_empty() {
        let env = container
            .env
            .iter()
            .map(|(k, v)| mapping([("name", k.clone().into()), ("value", v.clone().into())]))
            .collect();
        out.insert("env".into(), Value::Sequence(env));
    }
    if !container.ports.is_empty() {
        let ports = container
            .ports
            .iter()
            .map(|p| mapping([("containerPort", Value::from(*p))]))
            .collect();
        out.insert("ports".into(), Value::Sequence(ports));
    }
    Value::Mapping(out)
}

fn render_service(name: &str, spec: &ComponentSpec, service: &ServiceSpec) -> Value {
    let ports = service
        .ports
        .iter()
        .map(|p| {
            mapping([
                ("name", format!("port-{}", p.port).into()),
                ("port", Value::from(p.port)),
                ("targetPort", Value::from(p.container_port.unwrap_or(p.port))),
                (
                    "protocol",
                    p.protocol.clone().unwrap_or_else(|| "TCP".to_string()).into(),
                ),
            ])
        })
        .collect();

    object(
        "v1",
        "Service",
        name,
        labels(name, spec),
        mapping([
            (
                "type",
                service
                    .service_type
                    .clone()
                    .unwrap_or_else(|| "ClusterIP".to_string())
                    .into(),
            ),
            ("selector", selector(name)),
            ("ports", Value::Sequence(ports)),
        ]),
    )
}

fn object(api_version: &str, kind: &str, name: &str, labels: Value, spec: Value) -> Value {
    mapping([
        ("apiVersion", api_version.into()),
        ("kind", kind.into()),
        (
            "metadata",
            mapping([("name", name.into()), ("labels", labels)]),
        ),
        ("spec", spec),
    ])
}

fn selector(name: &str) -> Value {
    mapping([(NAME_LABEL, name.into())])
}

fn labels(name: &str, spec: &ComponentSpec) -> Value {
    let mut out = Mapping::new();
    out.insert(NAME_LABEL.into(), name.into());
    out.insert(MANAGED_BY_LABEL.into(), MANAGED_BY.into());
    for (k, v) in &spec.labels {
        out.insert(k.clone().into(), v.clone().into());
    }
    Value::Mapping(out)
}

fn strings(items: &[String]) -> Value {
    Value::Sequence(items.iter().cloned().map(Value::from).collect())
}

fn mapping<const N: usize>(entries: [(&str, Value); N]) -> Value {
    let mut out = Mapping::with_capacity(N);
    for (k, v) in entries {
        out.insert(k.into(), v);
    }
    Value::Mapping(out)
}
