//! Method dispatch: registry lookup, credential resolution, validation
//! and the upstream round trips, including the meta read-modify-write
//! flows.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Map, Value};
use tracing::debug;

use crate::client::StoreClient;
use crate::credentials::{Credentials, StoreDefaults};
use crate::error::DispatchError;
use crate::meta;
use crate::registry::{self, Family, MethodDescriptor, OpKind, Verb};
use crate::request::{build_parent_request, build_request, ensure_required};

/// Receives every successful mutation, keyed by resource. The HTTP
/// transport plugs its event hub in here; stdio runs without one.
pub trait MutationSink: Send + Sync {
    fn publish(&self, resource: &str, method: &str, payload: &Value);
}

/// Resolves method names to upstream calls and executes them.
pub struct Dispatcher {
    client: StoreClient,
    defaults: StoreDefaults,
    sink: Option<Arc<dyn MutationSink>>,
}

impl Dispatcher {
    pub fn new(defaults: StoreDefaults, timeout: Duration) -> Self {
        Self {
            client: StoreClient::new(timeout),
            defaults,
            sink: None,
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn MutationSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Executes one method end to end.
    ///
    /// Credentials resolve before required-parameter validation, so a
    /// caller with no usable site learns that first. `params` may be
    /// anything; non-objects count as no arguments.
    pub async fn dispatch(&self, method: &str, params: &Value) -> Result<Value, DispatchError> {
        let descriptor = registry::find(method)
            .ok_or_else(|| DispatchError::UnknownMethod(method.to_string()))?;

        let empty = Map::new();
        let args = params.as_object().unwrap_or(&empty);

        let credentials = Credentials::resolve(args, &self.defaults, descriptor.family)?;
        ensure_required(descriptor, args)?;

        debug!(%method, verb = descriptor.verb.as_str(), "dispatching");

        let result = match descriptor.kind {
            OpKind::MetaRead => self.meta_read(descriptor, args, &credentials).await,
            OpKind::MetaUpsert | OpKind::MetaRemove => {
                self.meta_write(descriptor, args, &credentials).await
            }
            _ => {
                let request = build_request(descriptor, args, &credentials);
                self.client.execute(&request).await
            }
        }?;

        if descriptor.kind.is_mutation() {
            if let (Some(resource), Some(sink)) = (descriptor.resource, &self.sink) {
                sink.publish(resource, descriptor.name, &result);
            }
        }
        Ok(result)
    }

    /// Fetches the parent entity and projects its meta field.
    async fn meta_read(
        &self,
        descriptor: &MethodDescriptor,
        args: &Map<String, Value>,
        credentials: &Credentials,
    ) -> Result<Value, DispatchError> {
        let request = build_parent_request(descriptor, args, credentials, Verb::Get, None);
        let entity = self.client.execute(&request).await?;

        match descriptor.family {
            Family::Store => {
                let sequence = meta::sequence_of(&entity);
                match args.get("metaKey") {
                    Some(key) => Ok(Value::Array(meta::entries_for_key(
                        &sequence,
                        &scalar_key(key),
                    ))),
                    None => Ok(Value::Array(sequence)),
                }
            }
            Family::Content => {
                let map = meta::map_of(&entity);
                match args.get("metaKey") {
                    Some(key) => Ok(map.get(&scalar_key(key)).cloned().unwrap_or(Value::Null)),
                    None => Ok(Value::Object(map)),
                }
            }
        }
    }

    /// The read-modify-write cycle: fetch the parent, edit its meta
    /// locally, write the whole field back, return the updated meta
    /// (the upstream's echo when present, the local edit otherwise).
    async fn meta_write(
        &self,
        descriptor: &MethodDescriptor,
        args: &Map<String, Value>,
        credentials: &Credentials,
    ) -> Result<Value, DispatchError> {
        let key = args
            .get("metaKey")
            .map(scalar_key)
            .ok_or_else(|| DispatchError::MissingParameter("metaKey".to_string()))?;

        let read = build_parent_request(descriptor, args, credentials, Verb::Get, None);
        let entity = self.client.execute(&read).await?;

        match descriptor.family {
            Family::Store => {
                let mut sequence = meta::sequence_of(&entity);
                match descriptor.kind {
                    OpKind::MetaUpsert => {
                        let value = args
                            .get("metaValue")
                            .cloned()
                            .ok_or_else(|| DispatchError::MissingParameter("metaValue".into()))?;
                        meta::upsert_entry(&mut sequence, &key, value);
                    }
                    _ => meta::remove_entries(&mut sequence, &key),
                }

                let write = build_parent_request(
                    descriptor,
                    args,
                    credentials,
                    Verb::Put,
                    Some(json!({ "meta_data": sequence })),
                );
                let updated = self.client.execute(&write).await?;
                match updated.get("meta_data") {
                    Some(Value::Array(echoed)) => Ok(Value::Array(echoed.clone())),
                    _ => Ok(Value::Array(sequence)),
                }
            }
            Family::Content => {
                let mut map = meta::map_of(&entity);
                match descriptor.kind {
                    OpKind::MetaUpsert => {
                        let value = args
                            .get("metaValue")
                            .cloned()
                            .ok_or_else(|| DispatchError::MissingParameter("metaValue".into()))?;
                        map.insert(key, value);
                    }
                    // Writing null is how the content API deletes a key.
                    _ => {
                        map.insert(key, Value::Null);
                    }
                }

                let write = build_parent_request(
                    descriptor,
                    args,
                    credentials,
                    Verb::Put,
                    Some(json!({ "meta": map })),
                );
                let updated = self.client.execute(&write).await?;
                match updated.get("meta") {
                    Some(Value::Object(echoed)) => Ok(Value::Object(echoed.clone())),
                    _ => Ok(Value::Object(map)),
                }
            }
        }
    }
}

/// Meta keys are strings on the wire, but tolerate numeric keys.
fn scalar_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
