//! Customer CRUD and customer meta operations.

use super::descriptor::{Family, MethodDescriptor, ParamSpec};

pub(super) const DESCRIPTORS: &[MethodDescriptor] = &[
    MethodDescriptor::create(
        "create_customer",
        "Creates a new customer",
        Family::Store,
        "customers",
        &[ParamSpec::payload(
            "customerData",
            "Customer fields, e.g. email, first_name, billing",
        )],
        "customers",
    ),
    MethodDescriptor::list(
        "get_customers",
        "Lists customers",
        Family::Store,
        "customers",
        &[],
    ),
    MethodDescriptor::fetch(
        "get_customer",
        "Fetches a single customer",
        Family::Store,
        "customers/{customerId}",
        &[ParamSpec::id("customerId", "Customer ID")],
    ),
    MethodDescriptor::update(
        "update_customer",
        "Updates a customer",
        Family::Store,
        "customers/{customerId}",
        &[
            ParamSpec::id("customerId", "Customer ID"),
            ParamSpec::payload("customerData", "Customer fields to change"),
        ],
        "customers",
    ),
    MethodDescriptor::remove(
        "delete_customer",
        "Deletes a customer",
        Family::Store,
        "customers/{customerId}",
        &[
            ParamSpec::id("customerId", "Customer ID"),
            ParamSpec::field("force", "force", "boolean", "Required by the store for customer deletion"),
        ],
        "customers",
    ),
    MethodDescriptor::meta_read(
        "get_customer_meta",
        "Reads a customer's meta_data entries",
        Family::Store,
        "customers/{customerId}",
        &[
            ParamSpec::id("customerId", "Customer ID"),
            ParamSpec::META_KEY_FILTER,
        ],
    ),
    MethodDescriptor::meta_upsert(
        "create_customer_meta",
        "Adds or replaces a customer meta entry",
        Family::Store,
        "customers/{customerId}",
        &[
            ParamSpec::id("customerId", "Customer ID"),
            ParamSpec::META_KEY,
            ParamSpec::META_VALUE,
        ],
        "customers",
    ),
    MethodDescriptor::meta_upsert(
        "update_customer_meta",
        "Updates a customer meta entry",
        Family::Store,
        "customers/{customerId}",
        &[
            ParamSpec::id("customerId", "Customer ID"),
            ParamSpec::META_KEY,
            ParamSpec::META_VALUE,
        ],
        "customers",
    ),
    MethodDescriptor::meta_remove(
        "delete_customer_meta",
        "Removes customer meta entries by key",
        Family::Store,
        "customers/{customerId}",
        &[
            ParamSpec::id("customerId", "Customer ID"),
            ParamSpec::META_KEY,
        ],
        "customers",
    ),
];
