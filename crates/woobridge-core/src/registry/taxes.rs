//! Tax rates and tax classes.

use super::descriptor::{Family, MethodDescriptor, ParamSpec};

pub(super) const DESCRIPTORS: &[MethodDescriptor] = &[
    // Rates
    MethodDescriptor::create(
        "create_tax_rate",
        "Creates a tax rate",
        Family::Store,
        "taxes",
        &[ParamSpec::payload(
            "taxRateData",
            "Rate fields, e.g. country, rate, name, class",
        )],
        "taxes",
    ),
    MethodDescriptor::list(
        "get_tax_rates",
        "Lists tax rates",
        Family::Store,
        "taxes",
        &[],
    ),
    MethodDescriptor::fetch(
        "get_tax_rate",
        "Fetches a single tax rate",
        Family::Store,
        "taxes/{rateId}",
        &[ParamSpec::id("rateId", "Tax rate ID")],
    ),
    MethodDescriptor::update(
        "update_tax_rate",
        "Updates a tax rate",
        Family::Store,
        "taxes/{rateId}",
        &[
            ParamSpec::id("rateId", "Tax rate ID"),
            ParamSpec::payload("taxRateData", "Rate fields to change"),
        ],
        "taxes",
    ),
    MethodDescriptor::remove(
        "delete_tax_rate",
        "Deletes a tax rate",
        Family::Store,
        "taxes/{rateId}",
        &[
            ParamSpec::id("rateId", "Tax rate ID"),
            ParamSpec::field("force", "force", "boolean", "Required by the store for rate deletion"),
        ],
        "taxes",
    ),
    // Classes
    MethodDescriptor::fetch(
        "get_tax_classes",
        "Lists tax classes",
        Family::Store,
        "taxes/classes",
        &[],
    ),
    MethodDescriptor::create(
        "create_tax_class",
        "Creates a tax class",
        Family::Store,
        "taxes/classes",
        &[ParamSpec::payload("taxClassData", "Class fields, e.g. name")],
        "taxes",
    ),
    MethodDescriptor::remove(
        "delete_tax_class",
        "Deletes a tax class by slug",
        Family::Store,
        "taxes/classes/{slug}",
        &[
            ParamSpec::slug("slug", "Tax class slug"),
            ParamSpec::field("force", "force", "boolean", "Required by the store for class deletion"),
        ],
        "taxes",
    ),
];
