#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use serde_json::{json, Value};
use std::path::{Path, PathBuf};

pub mod fixtures {
    use super::*;

    fn gvk(group: &str, version: &str, kind: &str) -> Value {
        json!({"group": group, "version": version, "kind": kind})
    }

    fn ok(definition: &str) -> Value {
        json!({"200": {"description": "OK", "schema": {"$ref": format!("#/definitions/{definition}")}}})
    }

    /// A trimmed Kubernetes swagger document covering namespaced and
    /// cluster-wide paths, sub-resources, connect and watch endpoints and a
    /// resource without group/version/kind.
    pub fn swagger() -> Value {
        let pod = gvk("", "v1", "Pod");
        json!({
            "swagger": "2.0",
            "info": {"title": "Kubernetes", "version": "v1.30.0"},
            "paths": {
                "/api/": {
                    "get": {"operationId": "getCoreAPIVersions", "tags": ["core"]}
                },
                "/api/v1/namespaces/{namespace}/pods": {
                    "parameters": [
                        {"$ref": "#/parameters/namespace"},
                        {"$ref": "#/parameters/pretty"}
                    ],
                    "get": {
                        "operationId": "listCoreV1NamespacedPod",
                        "x-kubernetes-action": "list",
                        "x-kubernetes-group-version-kind": pod,
                        "tags": ["core_v1"],
                        "parameters": [
                            {"$ref": "#/parameters/limit"},
                            {"$ref": "#/parameters/watch"}
                        ],
                        "responses": ok("io.k8s.api.core.v1.PodList")
                    },
                    "post": {
                        "operationId": "createCoreV1NamespacedPod",
                        "x-kubernetes-action": "post",
                        "x-kubernetes-group-version-kind": pod,
                        "tags": ["core_v1"],
                        "responses": ok("io.k8s.api.core.v1.Pod")
                    },
                    "delete": {
                        "operationId": "deleteCoreV1CollectionNamespacedPod",
                        "x-kubernetes-action": "deletecollection",
                        "x-kubernetes-group-version-kind": pod,
                        "tags": ["core_v1"],
                        "responses": ok("io.k8s.apimachinery.pkg.apis.meta.v1.Status")
                    }
                },
                "/api/v1/namespaces/{namespace}/pods/{name}": {
                    "parameters": [{"$ref": "#/parameters/namespace"}],
                    "get": {
                        "x-kubernetes-action": "get",
                        "x-kubernetes-group-version-kind": pod,
                        "tags": ["core_v1"],
                        "responses": ok("io.k8s.api.core.v1.Pod")
                    },
                    "put": {"x-kubernetes-action": "put", "x-kubernetes-group-version-kind": pod, "tags": ["core_v1"]},
                    "patch": {"x-kubernetes-action": "patch", "x-kubernetes-group-version-kind": pod, "tags": ["core_v1"]},
                    "delete": {"x-kubernetes-action": "delete", "x-kubernetes-group-version-kind": pod, "tags": ["core_v1"]}
                },
                "/api/v1/namespaces/{namespace}/pods/{name}/status": {
                    "get": {
                        "x-kubernetes-action": "get",
                        "x-kubernetes-group-version-kind": pod,
                        "tags": ["core_v1"],
                        "responses": ok("io.k8s.api.core.v1.Pod")
                    },
                    "put": {"x-kubernetes-action": "put", "x-kubernetes-group-version-kind": pod, "tags": ["core_v1"]}
                },
                "/api/v1/namespaces/{namespace}/pods/{name}/exec": {
                    "get": {
                        "x-kubernetes-action": "connect",
                        "x-kubernetes-group-version-kind": gvk("", "v1", "PodExecOptions"),
                        "tags": ["core_v1"],
                        "responses": {"200": {"schema": {"type": "string"}}}
                    },
                    "post": {
                        "x-kubernetes-action": "connect",
                        "x-kubernetes-group-version-kind": gvk("", "v1", "PodExecOptions"),
                        "tags": ["core_v1"]
                    }
                },
                "/api/v1/pods": {
                    "parameters": [{"$ref": "#/parameters/watch"}],
                    "get": {
                        "x-kubernetes-action": "list",
                        "x-kubernetes-group-version-kind": pod,
                        "tags": ["core_v1"],
                        "responses": ok("io.k8s.api.core.v1.PodList")
                    }
                },
                "/api/v1/watch/namespaces/{namespace}/pods": {
                    "get": {
                        "x-kubernetes-action": "watchlist",
                        "x-kubernetes-group-version-kind": pod,
                        "tags": ["core_v1"]
                    }
                },
                "/api/v1/nodes": {
                    "get": {
                        "x-kubernetes-action": "list",
                        "x-kubernetes-group-version-kind": gvk("", "v1", "Node"),
                        "tags": ["core_v1"],
                        "responses": ok("io.k8s.api.core.v1.NodeList")
                    },
                    "post": {
                        "x-kubernetes-action": "post",
                        "x-kubernetes-group-version-kind": gvk("", "v1", "Node"),
                        "tags": ["core_v1"],
                        "responses": ok("io.k8s.api.core.v1.Node")
                    }
                },
                "/apis/apps/v1/namespaces/{namespace}/deployments": {
                    "get": {
                        "x-kubernetes-action": "list",
                        "x-kubernetes-group-version-kind": gvk("apps", "v1", "Deployment"),
                        "tags": ["apps_v1"],
                        "responses": ok("io.k8s.api.apps.v1.DeploymentList")
                    },
                    "post": {
                        "x-kubernetes-action": "post",
                        "x-kubernetes-group-version-kind": gvk("apps", "v1", "Deployment"),
                        "tags": ["apps_v1"],
                        "responses": ok("io.k8s.api.apps.v1.Deployment")
                    }
                },
                "/apis/apps/v1/namespaces/{namespace}/deployments/{name}/scale": {
                    "get": {
                        "x-kubernetes-action": "get",
                        "x-kubernetes-group-version-kind": gvk("autoscaling", "v1", "Scale"),
                        "tags": ["apps_v1"],
                        "responses": ok("io.k8s.api.autoscaling.v1.Scale")
                    },
                    "put": {"x-kubernetes-action": "put", "x-kubernetes-group-version-kind": gvk("autoscaling", "v1", "Scale"), "tags": ["apps_v1"]},
                    "patch": {"x-kubernetes-action": "patch", "x-kubernetes-group-version-kind": gvk("autoscaling", "v1", "Scale"), "tags": ["apps_v1"]}
                },
                "/apis/apps/v1/deployments": {
                    "get": {
                        "x-kubernetes-action": "list",
                        "x-kubernetes-group-version-kind": gvk("apps", "v1", "Deployment"),
                        "tags": ["apps_v1"],
                        "responses": ok("io.k8s.api.apps.v1.DeploymentList")
                    }
                },
                "/apis/metrics.k8s.io/v1beta1/nodes": {
                    "get": {"x-kubernetes-action": "list", "tags": ["metrics_v1beta1"]}
                },
                "/version/": {
                    "get": {"operationId": "getCodeVersion", "tags": ["version"]}
                }
            },
            "parameters": {
                "namespace": {"name": "namespace", "in": "path", "required": true, "type": "string"},
                "pretty": {"name": "pretty", "in": "query", "type": "string"},
                "limit": {"name": "limit", "in": "query", "type": "integer"},
                "watch": {"name": "watch", "in": "query", "type": "boolean"}
            },
            "definitions": {
                "io.k8s.api.core.v1.Pod": {"type": "object"},
                "io.k8s.api.core.v1.PodList": {"type": "object"},
                "io.k8s.api.core.v1.Node": {"type": "object"},
                "io.k8s.api.core.v1.NodeList": {"type": "object"},
                "io.k8s.api.apps.v1.Deployment": {"type": "object"},
                "io.k8s.api.apps.v1.DeploymentList": {"type": "object"},
                "io.k8s.api.autoscaling.v1.Scale": {"type": "object"},
                "io.k8s.apimachinery.pkg.apis.meta.v1.Status": {"type": "object"}
            }
        })
    }

    /// The two-path Pod scenario: a namespaced collection plus the
    /// cluster-wide list.
    pub fn pod_scenario() -> Value {
        let pod = gvk("", "v1", "Pod");
        json!({
            "paths": {
                "/api/v1/namespaces/{namespace}/pods": {
                    "get": {"x-kubernetes-action": "list", "x-kubernetes-group-version-kind": pod, "tags": ["Pod"]},
                    "post": {"x-kubernetes-action": "post", "x-kubernetes-group-version-kind": pod, "tags": ["Pod"]}
                },
                "/api/v1/pods": {
                    "get": {"x-kubernetes-action": "list", "x-kubernetes-group-version-kind": pod}
                }
            }
        })
    }

    /// Adds the `status` sub-resource to [`pod_scenario`].
    pub fn pod_status_scenario() -> Value {
        let mut doc = pod_scenario();
        doc["paths"]["/api/v1/namespaces/{namespace}/pods/{name}/status"] = json!({
            "get": {"x-kubernetes-action": "get", "x-kubernetes-group-version-kind": gvk("", "v1", "Pod")},
            "put": {"x-kubernetes-action": "put", "x-kubernetes-group-version-kind": gvk("", "v1", "Pod")}
        });
        doc
    }
}

pub mod temp_files {
    use super::*;

    /// Write `doc` into `dir` as JSON, or as YAML when `name` ends in `.yaml`/`.yml`.
    pub fn write_spec(dir: &Path, name: &str, doc: &Value) -> PathBuf {
        let path = dir.join(name);
        let contents = if name.ends_with(".yaml") || name.ends_with(".yml") {
            serde_yaml::to_string(doc).unwrap()
        } else {
            serde_json::to_string_pretty(doc).unwrap()
        };
        std::fs::write(&path, contents).unwrap();
        path
    }
}
