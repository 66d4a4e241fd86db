// `inspect_struct!` expands to `::apicov::...` paths, here as in dependents.
extern crate self as apicov;

pub mod auth;
pub mod cli;
pub mod dispatch;
pub mod error;
pub mod gcs;
pub mod inspect;
pub mod logs;
pub mod model;
pub mod report;
pub mod resources;
pub mod tally;
pub mod testgrid;
pub mod walk;
