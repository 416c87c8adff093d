//! Shapes a descriptor plus request params into one upstream REST call.

use serde_json::{Map, Value};

use crate::credentials::{Auth, Credentials};
use crate::error::DispatchError;
use crate::registry::{Family, MethodDescriptor, OpKind, ParamRole, Verb};

/// A fully-shaped upstream call, ready for the HTTP client.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamRequest {
    pub verb: Verb,
    /// Absolute URL without the query string.
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub basic_auth: Option<(String, String)>,
}

/// Checks descriptor-declared required params; the first missing one
/// fails the request. Presence only, `null` counts as absent.
pub(crate) fn ensure_required(
    descriptor: &MethodDescriptor,
    args: &Map<String, Value>,
) -> Result<(), DispatchError> {
    for param in descriptor.params.iter().filter(|p| p.required) {
        match args.get(param.name) {
            Some(value) if !value.is_null() => {}
            _ => return Err(DispatchError::MissingParameter(param.name.to_string())),
        }
    }
    Ok(())
}

/// Builds the upstream call for every non-meta operation.
///
/// Routing: path params substitute into the template; `filters` merges
/// verbatim first so declared params win on collision; declared fields
/// go to the query (GET/DELETE) or body (POST/PUT) under their wire
/// names; a payload param becomes the body itself. Pagination defaults
/// apply to list methods, `force=true` to store deletes.
pub(crate) fn build_request(
    descriptor: &MethodDescriptor,
    args: &Map<String, Value>,
    credentials: &Credentials,
) -> UpstreamRequest {
    let url = entity_url(descriptor, args, credentials);
    let to_body = matches!(descriptor.verb, Verb::Post | Verb::Put);

    let mut query = Map::new();
    let mut fields = Map::new();
    let mut payload: Option<Value> = None;

    if let Some(filters) = args.get("filters").and_then(Value::as_object) {
        let target = if to_body { &mut fields } else { &mut query };
        for (key, value) in filters {
            if !value.is_null() {
                target.insert(key.clone(), value.clone());
            }
        }
    }

    for param in descriptor.params {
        let Some(value) = args.get(param.name) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        match param.role {
            ParamRole::Path | ParamRole::Meta => {}
            ParamRole::Payload => payload = Some(value.clone()),
            ParamRole::Field => {
                let target = if to_body { &mut fields } else { &mut query };
                target.insert(param.wire.to_string(), value.clone());
            }
        }
    }

    if descriptor.kind == OpKind::List {
        if let Some(value) = args.get("perPage") {
            query.insert("per_page".to_string(), value.clone());
        } else if !query.contains_key("per_page") {
            query.insert("per_page".to_string(), Value::from(10));
        }
        if let Some(value) = args.get("page") {
            query.insert("page".to_string(), value.clone());
        } else if !query.contains_key("page") {
            query.insert("page".to_string(), Value::from(1));
        }
    }

    // The upstream keeps most deletions in a trash bin unless forced.
    if descriptor.kind == OpKind::Remove
        && descriptor.family == Family::Store
        && !query.contains_key("force")
    {
        query.insert("force".to_string(), Value::Bool(true));
    }

    let basic_auth = apply_auth(&mut query, credentials);

    let body = match payload {
        Some(Value::Object(mut object)) => {
            // Declared fields and filters ride along, payload fields win.
            for (key, value) in fields {
                object.entry(key).or_insert(value);
            }
            Some(Value::Object(object))
        }
        Some(other) => Some(other),
        None if !fields.is_empty() => Some(Value::Object(fields)),
        None => None,
    };

    UpstreamRequest {
        verb: descriptor.verb,
        url,
        query: render_query(&query),
        body,
        basic_auth,
    }
}

/// Builds a read or write of the parent entity for the meta flows.
///
/// Content-family reads add `context=edit`; the `meta` map is hidden
/// from the default view context.
pub(crate) fn build_parent_request(
    descriptor: &MethodDescriptor,
    args: &Map<String, Value>,
    credentials: &Credentials,
    verb: Verb,
    body: Option<Value>,
) -> UpstreamRequest {
    let url = entity_url(descriptor, args, credentials);
    let mut query = Map::new();
    if verb == Verb::Get && descriptor.family == Family::Content {
        query.insert("context".to_string(), Value::String("edit".to_string()));
    }
    let basic_auth = apply_auth(&mut query, credentials);

    UpstreamRequest {
        verb,
        url,
        query: render_query(&query),
        body,
        basic_auth,
    }
}

fn entity_url(
    descriptor: &MethodDescriptor,
    args: &Map<String, Value>,
    credentials: &Credentials,
) -> String {
    let mut path = descriptor.path.to_string();
    for param in descriptor.params.iter().filter(|p| p.role == ParamRole::Path) {
        if let Some(value) = args.get(param.name) {
            path = path.replace(&format!("{{{}}}", param.name), &scalar(value));
        }
    }
    format!(
        "{}/wp-json/{}/{}",
        credentials.site_url,
        descriptor.family.namespace(),
        path
    )
}

/// Store-family auth rides in the query string; content-family auth
/// becomes HTTP Basic. Inserted last so nothing can shadow it.
fn apply_auth(query: &mut Map<String, Value>, credentials: &Credentials) -> Option<(String, String)> {
    match &credentials.auth {
        Auth::Query {
            consumer_key,
            consumer_secret,
        } => {
            query.insert(
                "consumer_key".to_string(),
                Value::String(consumer_key.clone()),
            );
            query.insert(
                "consumer_secret".to_string(),
                Value::String(consumer_secret.clone()),
            );
            None
        }
        Auth::Basic { username, password } => Some((username.clone(), password.clone())),
    }
}

fn render_query(query: &Map<String, Value>) -> Vec<(String, String)> {
    query
        .iter()
        .map(|(key, value)| (key.clone(), scalar(value)))
        .collect()
}

/// Query-string rendering: strings stay raw, arrays join with commas
/// (the upstream's multi-value convention), everything else serializes
/// as compact JSON.
fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(scalar).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}
