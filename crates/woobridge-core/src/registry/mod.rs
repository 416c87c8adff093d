//! The static method registry.
//!
//! Every operation the gateway supports is one `MethodDescriptor` in a
//! per-family table below. Dispatch looks names up here, `tools/list`
//! flattens the same tables into schemas, and the SSE side reads the
//! `resource` field of mutation descriptors. One source of truth.

mod coupons;
mod customers;
mod data;
mod descriptor;
mod orders;
mod payments;
mod posts;
mod products;
mod reports;
mod reviews;
mod settings;
mod shipping;
mod system;
mod taxes;
mod taxonomy;
mod variations;

pub use descriptor::{Family, MethodDescriptor, OpKind, ParamRole, ParamSpec, Verb};

use once_cell::sync::Lazy;
use std::collections::HashMap;

const TABLES: &[&[MethodDescriptor]] = &[
    posts::DESCRIPTORS,
    products::DESCRIPTORS,
    taxonomy::DESCRIPTORS,
    variations::DESCRIPTORS,
    reviews::DESCRIPTORS,
    orders::DESCRIPTORS,
    customers::DESCRIPTORS,
    shipping::DESCRIPTORS,
    taxes::DESCRIPTORS,
    coupons::DESCRIPTORS,
    payments::DESCRIPTORS,
    reports::DESCRIPTORS,
    settings::DESCRIPTORS,
    system::DESCRIPTORS,
    data::DESCRIPTORS,
];

static INDEX: Lazy<HashMap<&'static str, &'static MethodDescriptor>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for table in TABLES {
        for descriptor in *table {
            index.insert(descriptor.name, descriptor);
        }
    }
    index
});

/// Iterates every registered descriptor in table order.
pub fn all() -> impl Iterator<Item = &'static MethodDescriptor> {
    TABLES.iter().flat_map(|table| table.iter())
}

/// Looks up a descriptor by method name.
pub fn find(name: &str) -> Option<&'static MethodDescriptor> {
    INDEX.get(name).copied()
}

/// Number of registered methods.
pub fn count() -> usize {
    INDEX.len()
}
