//! Method descriptor types.
//!
//! One static descriptor per supported operation: upstream family, verb,
//! path template and declared parameters. The table is shared by
//! dispatch, `tools/list` schema generation and mutation broadcasting.

use serde_json::{Map, Value};

/// Upstream API family a method belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// WooCommerce store API (`wc/v3`), query-string auth.
    Store,
    /// WordPress content API (`wp/v2`), HTTP Basic auth.
    Content,
}

impl Family {
    /// REST namespace under `/wp-json/`.
    pub fn namespace(self) -> &'static str {
        match self {
            Family::Store => "wc/v3",
            Family::Content => "wp/v2",
        }
    }
}

/// HTTP verb of the upstream call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}

/// Operation shape, driving query defaults and the dispatch flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    /// Collection GET with pagination defaults.
    List,
    /// Plain GET.
    Fetch,
    /// POST creating a resource.
    Create,
    /// PUT updating a resource.
    Update,
    /// DELETE; store-family deletes default `force=true`.
    Remove,
    /// Read of a parent entity's meta field.
    MetaRead,
    /// Read-modify-write upsert of one meta key.
    MetaUpsert,
    /// Read-modify-write removal of one meta key.
    MetaRemove,
}

impl OpKind {
    /// Whether a successful dispatch is re-broadcast to subscribers.
    pub fn is_mutation(self) -> bool {
        matches!(
            self,
            OpKind::Create
                | OpKind::Update
                | OpKind::Remove
                | OpKind::MetaUpsert
                | OpKind::MetaRemove
        )
    }
}

/// How a declared parameter flows into the upstream call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamRole {
    /// Substituted into the path template by name.
    Path,
    /// Sent under its wire name: query for GET/DELETE, body for POST/PUT.
    Field,
    /// The parameter's value becomes the request body.
    Payload,
    /// Consumed by the meta read-modify-write flow.
    Meta,
}

/// One declared parameter of a method. `name` is the inbound camelCase
/// spelling; `wire` is the upstream field name (`Field` role only).
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub wire: &'static str,
    pub role: ParamRole,
    /// JSON Schema type for `tools/list`; empty means untyped.
    pub ty: &'static str,
    pub description: &'static str,
    pub required: bool,
}

impl ParamSpec {
    /// Required numeric path parameter.
    pub const fn id(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            wire: name,
            role: ParamRole::Path,
            ty: "integer",
            description,
            required: true,
        }
    }

    /// Required string path parameter.
    pub const fn slug(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            wire: name,
            role: ParamRole::Path,
            ty: "string",
            description,
            required: true,
        }
    }

    /// Required object parameter forming the request body.
    pub const fn payload(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            wire: name,
            role: ParamRole::Payload,
            ty: "object",
            description,
            required: true,
        }
    }

    /// Optional value forwarded under `wire`.
    pub const fn field(
        name: &'static str,
        wire: &'static str,
        ty: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            wire,
            role: ParamRole::Field,
            ty,
            description,
            required: false,
        }
    }

    /// The meta key targeted by a read-modify-write operation.
    pub const META_KEY: Self = Self {
        name: "metaKey",
        wire: "metaKey",
        role: ParamRole::Meta,
        ty: "string",
        description: "Meta key to target",
        required: true,
    };

    /// Optional key filter on meta reads.
    pub const META_KEY_FILTER: Self = Self {
        name: "metaKey",
        wire: "metaKey",
        role: ParamRole::Meta,
        ty: "string",
        description: "Return only entries with this key",
        required: false,
    };

    /// The value written by a meta upsert (any JSON type).
    pub const META_VALUE: Self = Self {
        name: "metaValue",
        wire: "metaValue",
        role: ParamRole::Meta,
        ty: "",
        description: "Value to store under the meta key",
        required: true,
    };
}

/// Static mapping from one method name to an upstream REST call.
#[derive(Debug, Clone, Copy)]
pub struct MethodDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub family: Family,
    pub verb: Verb,
    /// Path template relative to the family namespace, with `{param}`
    /// placeholders named after path parameters.
    pub path: &'static str,
    pub kind: OpKind,
    pub params: &'static [ParamSpec],
    /// Broadcast channel / polling resource for mutations.
    pub resource: Option<&'static str>,
}

impl MethodDescriptor {
    pub const fn list(
        name: &'static str,
        description: &'static str,
        family: Family,
        path: &'static str,
        params: &'static [ParamSpec],
    ) -> Self {
        Self {
            name,
            description,
            family,
            verb: Verb::Get,
            path,
            kind: OpKind::List,
            params,
            resource: None,
        }
    }

    pub const fn fetch(
        name: &'static str,
        description: &'static str,
        family: Family,
        path: &'static str,
        params: &'static [ParamSpec],
    ) -> Self {
        Self {
            name,
            description,
            family,
            verb: Verb::Get,
            path,
            kind: OpKind::Fetch,
            params,
            resource: None,
        }
    }

    pub const fn create(
        name: &'static str,
        description: &'static str,
        family: Family,
        path: &'static str,
        params: &'static [ParamSpec],
        resource: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            family,
            verb: Verb::Post,
            path,
            kind: OpKind::Create,
            params,
            resource: Some(resource),
        }
    }

    pub const fn update(
        name: &'static str,
        description: &'static str,
        family: Family,
        path: &'static str,
        params: &'static [ParamSpec],
        resource: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            family,
            verb: Verb::Put,
            path,
            kind: OpKind::Update,
            params,
            resource: Some(resource),
        }
    }

    pub const fn remove(
        name: &'static str,
        description: &'static str,
        family: Family,
        path: &'static str,
        params: &'static [ParamSpec],
        resource: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            family,
            verb: Verb::Delete,
            path,
            kind: OpKind::Remove,
            params,
            resource: Some(resource),
        }
    }

    pub const fn meta_read(
        name: &'static str,
        description: &'static str,
        family: Family,
        path: &'static str,
        params: &'static [ParamSpec],
    ) -> Self {
        Self {
            name,
            description,
            family,
            verb: Verb::Get,
            path,
            kind: OpKind::MetaRead,
            params,
            resource: None,
        }
    }

    pub const fn meta_upsert(
        name: &'static str,
        description: &'static str,
        family: Family,
        path: &'static str,
        params: &'static [ParamSpec],
        resource: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            family,
            verb: Verb::Put,
            path,
            kind: OpKind::MetaUpsert,
            params,
            resource: Some(resource),
        }
    }

    pub const fn meta_remove(
        name: &'static str,
        description: &'static str,
        family: Family,
        path: &'static str,
        params: &'static [ParamSpec],
        resource: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            family,
            verb: Verb::Put,
            path,
            kind: OpKind::MetaRemove,
            params,
            resource: Some(resource),
        }
    }

    /// Builds the JSON Schema `inputSchema` advertised by `tools/list`.
    ///
    /// Declared params come first, then the universal extras: pagination
    /// on list methods, the pass-through `filters` object, and the
    /// per-request credential overrides for the method's family.
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in self.params {
            properties.insert(param.name.to_string(), prop(param.ty, param.description));
            if param.required {
                required.push(Value::String(param.name.to_string()));
            }
        }

        if self.kind == OpKind::List {
            properties.insert(
                "perPage".to_string(),
                prop("integer", "Results per page (default 10)"),
            );
            properties.insert("page".to_string(), prop("integer", "Page number (default 1)"));
        }

        properties.insert(
            "filters".to_string(),
            prop("object", "Extra fields merged verbatim into the upstream call"),
        );

        properties.insert(
            "siteUrl".to_string(),
            prop("string", "Store URL (falls back to WORDPRESS_SITE_URL)"),
        );
        match self.family {
            Family::Store => {
                properties.insert(
                    "consumerKey".to_string(),
                    prop("string", "Consumer key (falls back to WOOCOMMERCE_CONSUMER_KEY)"),
                );
                properties.insert(
                    "consumerSecret".to_string(),
                    prop(
                        "string",
                        "Consumer secret (falls back to WOOCOMMERCE_CONSUMER_SECRET)",
                    ),
                );
            }
            Family::Content => {
                properties.insert(
                    "username".to_string(),
                    prop("string", "Username (falls back to WORDPRESS_USERNAME)"),
                );
                properties.insert(
                    "password".to_string(),
                    prop(
                        "string",
                        "Application password (falls back to WORDPRESS_PASSWORD)",
                    ),
                );
            }
        }

        let mut schema = Map::new();
        schema.insert("type".to_string(), Value::String("object".to_string()));
        schema.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".to_string(), Value::Array(required));
        }
        Value::Object(schema)
    }
}

/// One JSON Schema property. An empty type means any JSON value.
fn prop(ty: &str, description: &str) -> Value {
    let mut prop = Map::new();
    if !ty.is_empty() {
        prop.insert("type".to_string(), Value::String(ty.to_string()));
    }
    prop.insert(
        "description".to_string(),
        Value::String(description.to_string()),
    );
    Value::Object(prop)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO: MethodDescriptor = MethodDescriptor::update(
        "update_order",
        "Updates an order",
        Family::Store,
        "orders/{orderId}",
        &[
            ParamSpec::id("orderId", "Order ID"),
            ParamSpec::payload("orderData", "Order fields to change"),
        ],
        "orders",
    );

    #[test]
    fn update_ctor_sets_verb_and_kind() {
        assert_eq!(DEMO.verb, Verb::Put);
        assert_eq!(DEMO.kind, OpKind::Update);
        assert_eq!(DEMO.resource, Some("orders"));
        assert!(DEMO.kind.is_mutation());
    }

    #[test]
    fn schema_declares_required_params() {
        let schema = DEMO.input_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["orderId"]["type"], "integer");
        let required = schema["required"].as_array().expect("required array");
        assert!(required.contains(&Value::String("orderId".into())));
        assert!(required.contains(&Value::String("orderData".into())));
    }

    #[test]
    fn store_schema_offers_consumer_credentials() {
        let schema = DEMO.input_schema();
        assert!(schema["properties"]["consumerKey"].is_object());
        assert!(schema["properties"]["consumerSecret"].is_object());
        assert!(schema["properties"]["username"].is_null());
    }

    #[test]
    fn content_schema_offers_user_credentials() {
        let descriptor = MethodDescriptor::list(
            "get_posts",
            "Lists posts",
            Family::Content,
            "posts",
            &[],
        );
        let schema = descriptor.input_schema();
        assert!(schema["properties"]["username"].is_object());
        assert!(schema["properties"]["password"].is_object());
        assert!(schema["properties"]["consumerKey"].is_null());
    }

    #[test]
    fn list_schema_adds_pagination() {
        let descriptor = MethodDescriptor::list(
            "get_posts",
            "Lists posts",
            Family::Content,
            "posts",
            &[],
        );
        let schema = descriptor.input_schema();
        assert_eq!(schema["properties"]["perPage"]["type"], "integer");
        assert_eq!(schema["properties"]["page"]["type"], "integer");
        // No required params at all.
        assert!(schema.get("required").is_none());
    }

    #[test]
    fn meta_value_is_untyped_in_schema() {
        const DESCRIPTOR: MethodDescriptor = MethodDescriptor::meta_upsert(
            "create_order_meta",
            "Upserts order meta",
            Family::Store,
            "orders/{orderId}",
            &[
                ParamSpec::id("orderId", "Order ID"),
                ParamSpec::META_KEY,
                ParamSpec::META_VALUE,
            ],
            "orders",
        );
        let schema = DESCRIPTOR.input_schema();
        assert!(schema["properties"]["metaValue"].get("type").is_none());
        assert!(schema["properties"]["metaValue"]["description"].is_string());
    }

    #[test]
    fn reads_are_not_mutations() {
        assert!(!OpKind::List.is_mutation());
        assert!(!OpKind::Fetch.is_mutation());
        assert!(!OpKind::MetaRead.is_mutation());
        assert!(OpKind::MetaRemove.is_mutation());
    }

    #[test]
    fn family_namespaces() {
        assert_eq!(Family::Store.namespace(), "wc/v3");
        assert_eq!(Family::Content.namespace(), "wp/v2");
    }
}
