//! Knative Serving resources as they appear in integration-test logs.
//!
//! Every struct here implements [`Inspect`] through
//! [`inspect_struct!`](crate::inspect_struct), so field paths use the
//! exported names (`route.Spec.Traffic`), not the JSON keys.

pub mod configuration;
pub mod meta;
pub mod route;
pub mod service;

use serde::Deserialize;

pub use configuration::Configuration;
pub use route::Route;
pub use service::Service;

use crate::inspect::Inspect;
use crate::model::Category;

/// One logged record. A valid record populates exactly one kind.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResourceObjects {
    #[serde(rename = "Route", alias = "route", default)]
    pub route: Option<Route>,
    #[serde(rename = "Configuration", alias = "configuration", default)]
    pub configuration: Option<Configuration>,
    #[serde(rename = "Service", alias = "service", default)]
    pub service: Option<Service>,
}

impl ResourceObjects {
    /// The populated kinds, in `Route`, `Configuration`, `Service` order.
    pub fn populated(&self) -> Vec<(Category, &dyn Inspect)> {
        let mut kinds: Vec<(Category, &dyn Inspect)> = Vec::new();
        if let Some(route) = &self.route {
            kinds.push((Category::Route, route as &dyn Inspect));
        }
        if let Some(configuration) = &self.configuration {
            kinds.push((Category::Configuration, configuration as &dyn Inspect));
        }
        if let Some(service) = &self.service {
            kinds.push((Category::Service, service as &dyn Inspect));
        }
        kinds
    }
}
