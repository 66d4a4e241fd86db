//! `Configuration`: the desired state of the latest revision.

use super::meta::{Condition, Container, ObjectMeta, TypeMeta};
use crate::inspect_struct;

inspect_struct! {
    pub struct RevisionSpec {
        pub generation: i64 => "Generation",
        pub serving_state: String => "ServingState",
        pub concurrency_model: String => "ConcurrencyModel",
        pub service_account_name: String => "ServiceAccountName",
        pub build_name: String => "BuildName",
        pub container: Container => "Container",
    }
}

inspect_struct! {
    /// Template stamped out into a new revision on every spec change.
    pub struct RevisionTemplateSpec {
        #[serde(rename = "metadata")]
        pub object_meta: ObjectMeta => "ObjectMeta",
        pub spec: RevisionSpec => "Spec",
    }
}

inspect_struct! {
    pub struct ConfigurationSpec {
        pub generation: i64 => "Generation",
        pub build: Option<serde_json::Value> => "Build",
        pub revision_template: RevisionTemplateSpec => "RevisionTemplate",
    }
}

inspect_struct! {
    pub struct ConfigurationStatus {
        pub conditions: Vec<Condition> => "Conditions",
        pub latest_ready_revision_name: String => "LatestReadyRevisionName",
        pub latest_created_revision_name: String => "LatestCreatedRevisionName",
        pub observed_generation: i64 => "ObservedGeneration",
    }
}

inspect_struct! {
    pub struct Configuration {
        #[serde(flatten)]
        pub type_meta: TypeMeta => "TypeMeta",
        #[serde(rename = "metadata")]
        pub object_meta: ObjectMeta => "ObjectMeta",
        pub spec: ConfigurationSpec => "Spec",
        pub status: ConfigurationStatus => "Status",
    }
}
