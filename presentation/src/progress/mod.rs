//! Progress reporting for deliberations

pub mod reporter;
