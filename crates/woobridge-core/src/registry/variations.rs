//! Product variation operations (nested under a parent product).

use super::descriptor::{Family, MethodDescriptor, ParamSpec};

pub(super) const DESCRIPTORS: &[MethodDescriptor] = &[
    MethodDescriptor::create(
        "create_product_variation",
        "Creates a variation of a product",
        Family::Store,
        "products/{productId}/variations",
        &[
            ParamSpec::id("productId", "Parent product ID"),
            ParamSpec::payload("variationData", "Variation fields, e.g. regular_price, attributes"),
        ],
        "product_variations",
    ),
    MethodDescriptor::list(
        "get_product_variations",
        "Lists the variations of a product",
        Family::Store,
        "products/{productId}/variations",
        &[ParamSpec::id("productId", "Parent product ID")],
    ),
    MethodDescriptor::fetch(
        "get_product_variation",
        "Fetches a single product variation",
        Family::Store,
        "products/{productId}/variations/{variationId}",
        &[
            ParamSpec::id("productId", "Parent product ID"),
            ParamSpec::id("variationId", "Variation ID"),
        ],
    ),
    MethodDescriptor::update(
        "update_product_variation",
        "Updates a product variation",
        Family::Store,
        "products/{productId}/variations/{variationId}",
        &[
            ParamSpec::id("productId", "Parent product ID"),
            ParamSpec::id("variationId", "Variation ID"),
            ParamSpec::payload("variationData", "Variation fields to change"),
        ],
        "product_variations",
    ),
    MethodDescriptor::remove(
        "delete_product_variation",
        "Deletes a product variation",
        Family::Store,
        "products/{productId}/variations/{variationId}",
        &[
            ParamSpec::id("productId", "Parent product ID"),
            ParamSpec::id("variationId", "Variation ID"),
            ParamSpec::field("force", "force", "boolean", "Bypass trash and delete permanently"),
        ],
        "product_variations",
    ),
];
