//! Product review operations.

use super::descriptor::{Family, MethodDescriptor, ParamSpec};

pub(super) const DESCRIPTORS: &[MethodDescriptor] = &[
    MethodDescriptor::create(
        "create_product_review",
        "Creates a product review",
        Family::Store,
        "products/reviews",
        &[ParamSpec::payload(
            "reviewData",
            "Review fields, e.g. product_id, review, reviewer, rating",
        )],
        "product_reviews",
    ),
    MethodDescriptor::list(
        "get_product_reviews",
        "Lists product reviews",
        Family::Store,
        "products/reviews",
        &[],
    ),
    MethodDescriptor::fetch(
        "get_product_review",
        "Fetches a single product review",
        Family::Store,
        "products/reviews/{reviewId}",
        &[ParamSpec::id("reviewId", "Review ID")],
    ),
    MethodDescriptor::update(
        "update_product_review",
        "Updates a product review",
        Family::Store,
        "products/reviews/{reviewId}",
        &[
            ParamSpec::id("reviewId", "Review ID"),
            ParamSpec::payload("reviewData", "Review fields to change"),
        ],
        "product_reviews",
    ),
    MethodDescriptor::remove(
        "delete_product_review",
        "Deletes a product review",
        Family::Store,
        "products/reviews/{reviewId}",
        &[
            ParamSpec::id("reviewId", "Review ID"),
            ParamSpec::field("force", "force", "boolean", "Bypass trash and delete permanently"),
        ],
        "product_reviews",
    ),
];
