//! Order operations: CRUD, order meta, order notes and refunds.

use super::descriptor::{Family, MethodDescriptor, ParamSpec};

pub(super) const DESCRIPTORS: &[MethodDescriptor] = &[
    // Orders
    MethodDescriptor::create(
        "create_order",
        "Creates a new order",
        Family::Store,
        "orders",
        &[ParamSpec::payload(
            "orderData",
            "Order fields, e.g. line_items, billing, status",
        )],
        "orders",
    ),
    MethodDescriptor::list(
        "get_orders",
        "Lists orders in the store",
        Family::Store,
        "orders",
        &[],
    ),
    MethodDescriptor::fetch(
        "get_order",
        "Fetches a single order",
        Family::Store,
        "orders/{orderId}",
        &[ParamSpec::id("orderId", "Order ID")],
    ),
    MethodDescriptor::update(
        "update_order",
        "Updates an existing order",
        Family::Store,
        "orders/{orderId}",
        &[
            ParamSpec::id("orderId", "Order ID"),
            ParamSpec::payload("orderData", "Order fields to change"),
        ],
        "orders",
    ),
    MethodDescriptor::remove(
        "delete_order",
        "Deletes an order",
        Family::Store,
        "orders/{orderId}",
        &[
            ParamSpec::id("orderId", "Order ID"),
            ParamSpec::field("force", "force", "boolean", "Bypass trash and delete permanently"),
        ],
        "orders",
    ),
    // Order meta
    MethodDescriptor::meta_read(
        "get_order_meta",
        "Reads an order's meta_data entries",
        Family::Store,
        "orders/{orderId}",
        &[
            ParamSpec::id("orderId", "Order ID"),
            ParamSpec::META_KEY_FILTER,
        ],
    ),
    MethodDescriptor::meta_upsert(
        "create_order_meta",
        "Adds or replaces an order meta entry",
        Family::Store,
        "orders/{orderId}",
        &[
            ParamSpec::id("orderId", "Order ID"),
            ParamSpec::META_KEY,
            ParamSpec::META_VALUE,
        ],
        "orders",
    ),
    MethodDescriptor::meta_upsert(
        "update_order_meta",
        "Updates an order meta entry",
        Family::Store,
        "orders/{orderId}",
        &[
            ParamSpec::id("orderId", "Order ID"),
            ParamSpec::META_KEY,
            ParamSpec::META_VALUE,
        ],
        "orders",
    ),
    MethodDescriptor::meta_remove(
        "delete_order_meta",
        "Removes order meta entries by key",
        Family::Store,
        "orders/{orderId}",
        &[ParamSpec::id("orderId", "Order ID"), ParamSpec::META_KEY],
        "orders",
    ),
    // Order notes
    MethodDescriptor::create(
        "create_order_note",
        "Adds a note to an order",
        Family::Store,
        "orders/{orderId}/notes",
        &[
            ParamSpec::id("orderId", "Order ID"),
            ParamSpec::payload("noteData", "Note fields, e.g. note, customer_note"),
        ],
        "order_notes",
    ),
    MethodDescriptor::list(
        "get_order_notes",
        "Lists the notes of an order",
        Family::Store,
        "orders/{orderId}/notes",
        &[ParamSpec::id("orderId", "Order ID")],
    ),
    MethodDescriptor::fetch(
        "get_order_note",
        "Fetches a single order note",
        Family::Store,
        "orders/{orderId}/notes/{noteId}",
        &[
            ParamSpec::id("orderId", "Order ID"),
            ParamSpec::id("noteId", "Note ID"),
        ],
    ),
    MethodDescriptor::remove(
        "delete_order_note",
        "Deletes an order note",
        Family::Store,
        "orders/{orderId}/notes/{noteId}",
        &[
            ParamSpec::id("orderId", "Order ID"),
            ParamSpec::id("noteId", "Note ID"),
            ParamSpec::field("force", "force", "boolean", "Bypass trash and delete permanently"),
        ],
        "order_notes",
    ),
    // Refunds
    MethodDescriptor::create(
        "create_order_refund",
        "Creates a refund for an order",
        Family::Store,
        "orders/{orderId}/refunds",
        &[
            ParamSpec::id("orderId", "Order ID"),
            ParamSpec::payload("refundData", "Refund fields, e.g. amount, reason"),
        ],
        "order_refunds",
    ),
    MethodDescriptor::list(
        "get_order_refunds",
        "Lists the refunds of an order",
        Family::Store,
        "orders/{orderId}/refunds",
        &[ParamSpec::id("orderId", "Order ID")],
    ),
    MethodDescriptor::fetch(
        "get_order_refund",
        "Fetches a single refund",
        Family::Store,
        "orders/{orderId}/refunds/{refundId}",
        &[
            ParamSpec::id("orderId", "Order ID"),
            ParamSpec::id("refundId", "Refund ID"),
        ],
    ),
    MethodDescriptor::remove(
        "delete_order_refund",
        "Deletes a refund",
        Family::Store,
        "orders/{orderId}/refunds/{refundId}",
        &[
            ParamSpec::id("orderId", "Order ID"),
            ParamSpec::id("refundId", "Refund ID"),
            ParamSpec::field("force", "force", "boolean", "Bypass trash and delete permanently"),
        ],
        "order_refunds",
    ),
];
