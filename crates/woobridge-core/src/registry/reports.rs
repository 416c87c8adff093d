//! Read-only report endpoints. Period selectors (`period`, `date_min`,
//! `date_max`) ride in via `filters`.

use super::descriptor::{Family, MethodDescriptor};

pub(super) const DESCRIPTORS: &[MethodDescriptor] = &[
    MethodDescriptor::fetch(
        "get_sales_report",
        "Sales totals over a period",
        Family::Store,
        "reports/sales",
        &[],
    ),
    MethodDescriptor::fetch(
        "get_products_report",
        "Product count totals by type",
        Family::Store,
        "reports/products/totals",
        &[],
    ),
    MethodDescriptor::fetch(
        "get_orders_report",
        "Order count totals by status",
        Family::Store,
        "reports/orders/totals",
        &[],
    ),
    MethodDescriptor::fetch(
        "get_categories_report",
        "Category count totals",
        Family::Store,
        "reports/categories/totals",
        &[],
    ),
    MethodDescriptor::fetch(
        "get_customers_report",
        "Customer count totals",
        Family::Store,
        "reports/customers/totals",
        &[],
    ),
    MethodDescriptor::fetch(
        "get_stock_report",
        "Low-stock and out-of-stock listing",
        Family::Store,
        "reports/stock",
        &[],
    ),
    MethodDescriptor::fetch(
        "get_coupons_report",
        "Coupon count totals",
        Family::Store,
        "reports/coupons/totals",
        &[],
    ),
    MethodDescriptor::fetch(
        "get_taxes_report",
        "Tax totals",
        Family::Store,
        "reports/taxes/totals",
        &[],
    ),
];
