//! `Route`: a named endpoint splitting traffic across revisions.

use super::meta::{Addressable, Condition, ObjectMeta, TrafficTarget, TypeMeta};
use crate::inspect_struct;

inspect_struct! {
    pub struct RouteSpec {
        pub generation: i64 => "Generation",
        pub traffic: Vec<TrafficTarget> => "Traffic",
    }
}

inspect_struct! {
    pub struct RouteStatus {
        pub domain: String => "Domain",
        pub domain_internal: String => "DomainInternal",
        pub address: Option<Addressable> => "Address",
        pub traffic: Vec<TrafficTarget> => "Traffic",
        pub conditions: Vec<Condition> => "Conditions",
        pub observed_generation: i64 => "ObservedGeneration",
    }
}

inspect_struct! {
    pub struct Route {
        #[serde(flatten)]
        pub type_meta: TypeMeta => "TypeMeta",
        #[serde(rename = "metadata")]
        pub object_meta: ObjectMeta => "ObjectMeta",
        pub spec: RouteSpec => "Spec",
        pub status: RouteStatus => "Status",
    }
}
