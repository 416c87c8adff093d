//! Store settings groups and options.

use super::descriptor::{Family, MethodDescriptor, ParamSpec};

pub(super) const DESCRIPTORS: &[MethodDescriptor] = &[
    MethodDescriptor::fetch(
        "get_settings",
        "Lists the store's settings groups",
        Family::Store,
        "settings",
        &[],
    ),
    MethodDescriptor::fetch(
        "get_setting_options",
        "Lists the options of a settings group",
        Family::Store,
        "settings/{group}",
        &[ParamSpec::slug("group", "Settings group ID, e.g. general, tax")],
    ),
    MethodDescriptor::update(
        "update_setting_option",
        "Updates one option in a settings group",
        Family::Store,
        "settings/{group}/{settingId}",
        &[
            ParamSpec::slug("group", "Settings group ID, e.g. general, tax"),
            ParamSpec::slug("settingId", "Option ID within the group"),
            ParamSpec::payload("settingData", "Option fields, e.g. value"),
        ],
        "settings",
    ),
];
