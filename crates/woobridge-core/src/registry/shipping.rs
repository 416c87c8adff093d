//! Shipping zones, zone methods and the global method catalog.

use super::descriptor::{Family, MethodDescriptor, ParamSpec};

pub(super) const DESCRIPTORS: &[MethodDescriptor] = &[
    MethodDescriptor::create(
        "create_shipping_zone",
        "Creates a shipping zone",
        Family::Store,
        "shipping/zones",
        &[ParamSpec::payload("zoneData", "Zone fields, e.g. name, order")],
        "shipping",
    ),
    MethodDescriptor::fetch(
        "get_shipping_zones",
        "Lists all shipping zones",
        Family::Store,
        "shipping/zones",
        &[],
    ),
    MethodDescriptor::fetch(
        "get_shipping_zone",
        "Fetches a single shipping zone",
        Family::Store,
        "shipping/zones/{zoneId}",
        &[ParamSpec::id("zoneId", "Zone ID")],
    ),
    MethodDescriptor::update(
        "update_shipping_zone",
        "Updates a shipping zone",
        Family::Store,
        "shipping/zones/{zoneId}",
        &[
            ParamSpec::id("zoneId", "Zone ID"),
            ParamSpec::payload("zoneData", "Zone fields to change"),
        ],
        "shipping",
    ),
    MethodDescriptor::remove(
        "delete_shipping_zone",
        "Deletes a shipping zone",
        Family::Store,
        "shipping/zones/{zoneId}",
        &[
            ParamSpec::id("zoneId", "Zone ID"),
            ParamSpec::field("force", "force", "boolean", "Required by the store for zone deletion"),
        ],
        "shipping",
    ),
    MethodDescriptor::fetch(
        "get_shipping_methods",
        "Lists the shipping methods the store supports",
        Family::Store,
        "shipping_methods",
        &[],
    ),
    MethodDescriptor::fetch(
        "get_shipping_zone_methods",
        "Lists the methods enabled in a zone",
        Family::Store,
        "shipping/zones/{zoneId}/methods",
        &[ParamSpec::id("zoneId", "Zone ID")],
    ),
    MethodDescriptor::create(
        "create_shipping_zone_method",
        "Enables a shipping method in a zone",
        Family::Store,
        "shipping/zones/{zoneId}/methods",
        &[
            ParamSpec::id("zoneId", "Zone ID"),
            ParamSpec::payload("methodData", "Method fields, e.g. method_id, settings"),
        ],
        "shipping",
    ),
    MethodDescriptor::update(
        "update_shipping_zone_method",
        "Updates a zone's shipping method instance",
        Family::Store,
        "shipping/zones/{zoneId}/methods/{instanceId}",
        &[
            ParamSpec::id("zoneId", "Zone ID"),
            ParamSpec::id("instanceId", "Method instance ID"),
            ParamSpec::payload("methodData", "Method fields to change"),
        ],
        "shipping",
    ),
    MethodDescriptor::remove(
        "delete_shipping_zone_method",
        "Removes a shipping method from a zone",
        Family::Store,
        "shipping/zones/{zoneId}/methods/{instanceId}",
        &[
            ParamSpec::id("zoneId", "Zone ID"),
            ParamSpec::id("instanceId", "Method instance ID"),
            ParamSpec::field("force", "force", "boolean", "Required by the store for method removal"),
        ],
        "shipping",
    ),
];
