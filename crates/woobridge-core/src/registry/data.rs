//! Reference data: continents, countries, currencies.

use super::descriptor::{Family, MethodDescriptor, ParamSpec};

pub(super) const DESCRIPTORS: &[MethodDescriptor] = &[
    MethodDescriptor::fetch(
        "get_data",
        "Lists the available data endpoints",
        Family::Store,
        "data",
        &[],
    ),
    MethodDescriptor::fetch(
        "get_continents",
        "Lists continents and their countries",
        Family::Store,
        "data/continents",
        &[],
    ),
    MethodDescriptor::fetch(
        "get_countries",
        "Lists countries and their states",
        Family::Store,
        "data/countries",
        &[],
    ),
    MethodDescriptor::fetch(
        "get_currencies",
        "Lists all known currencies",
        Family::Store,
        "data/currencies",
        &[],
    ),
    MethodDescriptor::fetch(
        "get_currency",
        "Fetches a single currency",
        Family::Store,
        "data/currencies/{currency}",
        &[ParamSpec::slug("currency", "Currency code (ISO 4217)")],
    ),
    MethodDescriptor::fetch(
        "get_current_currency",
        "Fetches the store's active currency",
        Family::Store,
        "data/currencies/current",
        &[],
    ),
];
