//! Object metadata and the shared building blocks of every resource.

use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use crate::inspect::{AsField, FieldRef, FieldValue, Inspect};
use crate::inspect_struct;

/// A timestamp. It has no exported fields of its own, so the walker descends
/// into it and records nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Time;

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer)?;
        Ok(Time)
    }
}

impl Inspect for Time {
    fn fields(&self) -> Vec<FieldRef<'_>> {
        Vec::new()
    }
}

impl AsField for Time {
    fn as_field(&self) -> FieldValue<'_> {
        FieldValue::Struct(self)
    }
}

inspect_struct! {
    /// Kind and API version, inlined into the resource JSON.
    pub struct TypeMeta {
        pub kind: String => "Kind",
        pub api_version: String => "APIVersion",
    }
}

inspect_struct! {
    pub struct OwnerReference {
        pub api_version: String => "APIVersion",
        pub kind: String => "Kind",
        pub name: String => "Name",
        pub uid: String => "UID",
        pub controller: Option<bool> => "Controller",
        pub block_owner_deletion: Option<bool> => "BlockOwnerDeletion",
    }
}

inspect_struct! {
    pub struct ObjectMeta {
        pub name: String => "Name",
        pub generate_name: String => "GenerateName",
        pub namespace: String => "Namespace",
        pub self_link: String => "SelfLink",
        pub uid: String => "UID",
        pub resource_version: String => "ResourceVersion",
        pub generation: i64 => "Generation",
        pub creation_timestamp: Time => "CreationTimestamp",
        pub deletion_timestamp: Option<Time> => "DeletionTimestamp",
        pub deletion_grace_period_seconds: Option<i64> => "DeletionGracePeriodSeconds",
        pub labels: BTreeMap<String, String> => "Labels",
        pub annotations: BTreeMap<String, String> => "Annotations",
        pub owner_references: Vec<OwnerReference> => "OwnerReferences",
        pub finalizers: Vec<String> => "Finalizers",
        pub cluster_name: String => "ClusterName",
    }
}

inspect_struct! {
    /// A status condition as reported by the serving controllers.
    pub struct Condition {
        #[serde(rename = "type")]
        pub condition_type: String => "Type",
        pub status: String => "Status",
        pub severity: String => "Severity",
        pub last_transition_time: Time => "LastTransitionTime",
        pub reason: String => "Reason",
        pub message: String => "Message",
    }
}

inspect_struct! {
    pub struct TrafficTarget {
        pub name: String => "Name",
        pub configuration_name: String => "ConfigurationName",
        pub revision_name: String => "RevisionName",
        pub percent: i32 => "Percent",
    }
}

inspect_struct! {
    pub struct Addressable {
        pub hostname: String => "Hostname",
    }
}

inspect_struct! {
    pub struct ContainerPort {
        pub name: String => "Name",
        pub host_port: i32 => "HostPort",
        pub container_port: i32 => "ContainerPort",
        pub protocol: String => "Protocol",
        #[serde(rename = "hostIP")]
        pub host_ip: String => "HostIP",
    }
}

inspect_struct! {
    pub struct EnvVar {
        pub name: String => "Name",
        pub value: String => "Value",
        pub value_from: Option<serde_json::Value> => "ValueFrom",
    }
}

inspect_struct! {
    pub struct ResourceRequirements {
        pub limits: BTreeMap<String, String> => "Limits",
        pub requests: BTreeMap<String, String> => "Requests",
    }
}

inspect_struct! {
    pub struct VolumeMount {
        pub name: String => "Name",
        pub read_only: bool => "ReadOnly",
        pub mount_path: String => "MountPath",
        pub sub_path: String => "SubPath",
    }
}

inspect_struct! {
    /// The user container of a revision.
    pub struct Container {
        pub name: String => "Name",
        pub image: String => "Image",
        pub command: Vec<String> => "Command",
        pub args: Vec<String> => "Args",
        pub working_dir: String => "WorkingDir",
        pub ports: Vec<ContainerPort> => "Ports",
        pub env_from: Vec<serde_json::Value> => "EnvFrom",
        pub env: Vec<EnvVar> => "Env",
        pub resources: ResourceRequirements => "Resources",
        pub volume_mounts: Vec<VolumeMount> => "VolumeMounts",
        pub liveness_probe: Option<serde_json::Value> => "LivenessProbe",
        pub readiness_probe: Option<serde_json::Value> => "ReadinessProbe",
        pub lifecycle: Option<serde_json::Value> => "Lifecycle",
        pub termination_message_path: String => "TerminationMessagePath",
        pub termination_message_policy: String => "TerminationMessagePolicy",
        pub image_pull_policy: String => "ImagePullPolicy",
        pub security_context: Option<serde_json::Value> => "SecurityContext",
        pub stdin: bool => "Stdin",
        pub stdin_once: bool => "StdinOnce",
        pub tty: bool => "TTY",
    }
}
