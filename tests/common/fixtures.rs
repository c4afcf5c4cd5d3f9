//! Test fixtures - fake cluster tools and manifest content.

/// Records `ARGS <argv>`, the full stdin and `END` into `kubectl.log` next to
/// the script. Fails when the streamed manifests mention `fail-me`.
pub const FAKE_KUBECTL: &str = r#"#!/bin/sh
log="$(dirname "$0")/kubectl.log"
input="$(cat)"
echo "ARGS $*" >> "$log"
printf '%s\n' "$input" >> "$log"
echo "END" >> "$log"
case "$input" in
  *fail-me*)
    echo "error: rejected by admission webhook" >&2
    exit 1
    ;;
esac
echo "configured"
"#;

/// Records calls like the fake kubectl; answers `status` with a release status.
pub const FAKE_HELM: &str = r#"#!/bin/sh
log="$(dirname "$0")/helm.log"
echo "ARGS $*" >> "$log"
echo "END" >> "$log"
if [ "$1" = "status" ]; then
  echo "NAME: $2"
  echo "STATUS: deployed"
fi
"#;

pub const DB_MANIFEST: &str = r#"apiVersion: apps/v1
kind: StatefulSet
metadata:
  name: db
spec:
  template:
    spec:
      containers:
      - name: db
        image: postgres
"#;

pub const API_MANIFESTS: &str = r#"apiVersion: apps/v1
kind: Deployment
metadata:
  name: api
spec:
  template:
    spec:
      containers:
      - name: api
        image: api
---
apiVersion: v1
kind: Service
metadata:
  name: api
spec:
  ports:
  - port: 80
"#;

pub const FAILING_MANIFEST: &str = r#"apiVersion: v1
kind: ConfigMap
metadata:
  name: fail-me
"#;

pub const GENERATED: &str = r#"deploy:
  image_tags:
    api: "7c1e0f2"
dev:
  image_tags:
    api: dev-42
"#;
