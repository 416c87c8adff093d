//! Payment gateway operations. Gateways are installed by the store;
//! only listing, inspection and settings updates exist upstream.

use super::descriptor::{Family, MethodDescriptor, ParamSpec};

pub(super) const DESCRIPTORS: &[MethodDescriptor] = &[
    MethodDescriptor::fetch(
        "get_payment_gateways",
        "Lists the store's payment gateways",
        Family::Store,
        "payment_gateways",
        &[],
    ),
    MethodDescriptor::fetch(
        "get_payment_gateway",
        "Fetches a single payment gateway",
        Family::Store,
        "payment_gateways/{gatewayId}",
        &[ParamSpec::slug("gatewayId", "Gateway ID, e.g. bacs, paypal")],
    ),
    MethodDescriptor::update(
        "update_payment_gateway",
        "Updates a payment gateway's settings",
        Family::Store,
        "payment_gateways/{gatewayId}",
        &[
            ParamSpec::slug("gatewayId", "Gateway ID, e.g. bacs, paypal"),
            ParamSpec::payload("gatewayData", "Gateway fields, e.g. enabled, settings"),
        ],
        "payment_gateways",
    ),
];
