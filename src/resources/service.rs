//! `Service`: a Route and Configuration managed together.

use super::configuration::ConfigurationSpec;
use super::meta::{Addressable, Condition, ObjectMeta, TrafficTarget, TypeMeta};
use crate::inspect_struct;

inspect_struct! {
    pub struct RunLatestType {
        pub configuration: ConfigurationSpec => "Configuration",
    }
}

inspect_struct! {
    pub struct PinnedType {
        pub revision_name: String => "RevisionName",
        pub configuration: ConfigurationSpec => "Configuration",
    }
}

inspect_struct! {
    /// Exactly one of the modes is set on a valid service.
    pub struct ServiceSpec {
        pub generation: i64 => "Generation",
        pub run_latest: Option<RunLatestType> => "RunLatest",
        pub pinned: Option<PinnedType> => "Pinned",
    }
}

inspect_struct! {
    pub struct ServiceStatus {
        pub conditions: Vec<Condition> => "Conditions",
        pub domain: String => "Domain",
        pub domain_internal: String => "DomainInternal",
        pub address: Option<Addressable> => "Address",
        pub traffic: Vec<TrafficTarget> => "Traffic",
        pub latest_ready_revision_name: String => "LatestReadyRevisionName",
        pub latest_created_revision_name: String => "LatestCreatedRevisionName",
        pub observed_generation: i64 => "ObservedGeneration",
    }
}

inspect_struct! {
    pub struct Service {
        #[serde(flatten)]
        pub type_meta: TypeMeta => "TypeMeta",
        #[serde(rename = "metadata")]
        pub object_meta: ObjectMeta => "ObjectMeta",
        pub spec: ServiceSpec => "Spec",
        pub status: ServiceStatus => "Status",
    }
}
