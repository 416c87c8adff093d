//! Product CRUD and product meta operations.

use super::descriptor::{Family, MethodDescriptor, ParamSpec};

pub(super) const DESCRIPTORS: &[MethodDescriptor] = &[
    MethodDescriptor::list(
        "get_products",
        "Lists products in the store",
        Family::Store,
        "products",
        &[],
    ),
    MethodDescriptor::fetch(
        "get_product",
        "Fetches a single product",
        Family::Store,
        "products/{productId}",
        &[ParamSpec::id("productId", "Product ID")],
    ),
    MethodDescriptor::create(
        "create_product",
        "Creates a new product",
        Family::Store,
        "products",
        &[ParamSpec::payload(
            "productData",
            "Product fields, e.g. name, type, regular_price",
        )],
        "products",
    ),
    MethodDescriptor::update(
        "update_product",
        "Updates an existing product",
        Family::Store,
        "products/{productId}",
        &[
            ParamSpec::id("productId", "Product ID"),
            ParamSpec::payload("productData", "Product fields to change"),
        ],
        "products",
    ),
    MethodDescriptor::remove(
        "delete_product",
        "Deletes a product",
        Family::Store,
        "products/{productId}",
        &[
            ParamSpec::id("productId", "Product ID"),
            ParamSpec::field("force", "force", "boolean", "Bypass trash and delete permanently"),
        ],
        "products",
    ),
    MethodDescriptor::meta_read(
        "get_product_meta",
        "Reads a product's meta_data entries",
        Family::Store,
        "products/{productId}",
        &[
            ParamSpec::id("productId", "Product ID"),
            ParamSpec::META_KEY_FILTER,
        ],
    ),
    MethodDescriptor::meta_upsert(
        "create_product_meta",
        "Adds or replaces a product meta entry",
        Family::Store,
        "products/{productId}",
        &[
            ParamSpec::id("productId", "Product ID"),
            ParamSpec::META_KEY,
            ParamSpec::META_VALUE,
        ],
        "products",
    ),
    MethodDescriptor::meta_upsert(
        "update_product_meta",
        "Updates a product meta entry",
        Family::Store,
        "products/{productId}",
        &[
            ParamSpec::id("productId", "Product ID"),
            ParamSpec::META_KEY,
            ParamSpec::META_VALUE,
        ],
        "products",
    ),
    MethodDescriptor::meta_remove(
        "delete_product_meta",
        "Removes product meta entries by key",
        Family::Store,
        "products/{productId}",
        &[ParamSpec::id("productId", "Product ID"), ParamSpec::META_KEY],
        "products",
    ),
];
