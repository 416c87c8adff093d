//! System status inspection and maintenance tools.

use super::descriptor::{Family, MethodDescriptor, ParamSpec};

pub(super) const DESCRIPTORS: &[MethodDescriptor] = &[
    MethodDescriptor::fetch(
        "get_system_status",
        "Fetches the store's system status report",
        Family::Store,
        "system_status",
        &[],
    ),
    MethodDescriptor::fetch(
        "get_system_status_tools",
        "Lists the available maintenance tools",
        Family::Store,
        "system_status/tools",
        &[],
    ),
    MethodDescriptor::update(
        "run_system_status_tool",
        "Runs a maintenance tool, e.g. clear_transients",
        Family::Store,
        "system_status/tools/{toolId}",
        &[ParamSpec::slug("toolId", "Tool identifier")],
        "system_status",
    ),
];
