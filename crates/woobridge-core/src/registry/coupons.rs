//! Coupon operations.

use super::descriptor::{Family, MethodDescriptor, ParamSpec};

pub(super) const DESCRIPTORS: &[MethodDescriptor] = &[
    MethodDescriptor::create(
        "create_coupon",
        "Creates a coupon",
        Family::Store,
        "coupons",
        &[ParamSpec::payload(
            "couponData",
            "Coupon fields, e.g. code, discount_type, amount",
        )],
        "coupons",
    ),
    MethodDescriptor::list(
        "get_coupons",
        "Lists coupons",
        Family::Store,
        "coupons",
        &[],
    ),
    MethodDescriptor::fetch(
        "get_coupon",
        "Fetches a single coupon",
        Family::Store,
        "coupons/{couponId}",
        &[ParamSpec::id("couponId", "Coupon ID")],
    ),
    MethodDescriptor::update(
        "update_coupon",
        "Updates a coupon",
        Family::Store,
        "coupons/{couponId}",
        &[
            ParamSpec::id("couponId", "Coupon ID"),
            ParamSpec::payload("couponData", "Coupon fields to change"),
        ],
        "coupons",
    ),
    MethodDescriptor::remove(
        "delete_coupon",
        "Deletes a coupon",
        Family::Store,
        "coupons/{couponId}",
        &[
            ParamSpec::id("couponId", "Coupon ID"),
            ParamSpec::field("force", "force", "boolean", "Bypass trash and delete permanently"),
        ],
        "coupons",
    ),
];
