//! Success envelopes shared by the resource handlers.
//!
//! Every success body carries `"success": true` plus keys named after the
//! resource, e.g. `actors` / `total_actors` or `updated_movie`. The key names
//! depend on the resource, so the envelopes are built as JSON objects rather
//! than fixed structs.

use axum::Json;
use casting_core::types::DbId;
use serde::Serialize;
use serde_json::{json, Map, Value};

/// A managed resource type, used to name envelope keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Actor,
    Movie,
}

impl Resource {
    pub const fn singular(self) -> &'static str {
        match self {
            Resource::Actor => "actor",
            Resource::Movie => "movie",
        }
    }

    pub const fn plural(self) -> &'static str {
        match self {
            Resource::Actor => "actors",
            Resource::Movie => "movies",
        }
    }

    fn total_key(self) -> String {
        format!("total_{}", self.plural())
    }
}

fn envelope(fields: impl IntoIterator<Item = (String, Value)>) -> Json<Value> {
    let mut body = Map::new();
    body.insert("success".into(), Value::Bool(true));
    body.extend(fields);
    Json(Value::Object(body))
}

/// `{ success, <resource>s: [...], total_<resource>s }`
pub fn listed<T: Serialize>(resource: Resource, items: &[T]) -> Json<Value> {
    envelope([
        (resource.plural().to_string(), json!(items)),
        (resource.total_key(), json!(items.len())),
    ])
}

/// `{ success, created, total_<resource>s }`
pub fn created(resource: Resource, id: DbId, total: i64) -> Json<Value> {
    envelope([
        ("created".to_string(), json!(id)),
        (resource.total_key(), json!(total)),
    ])
}

/// `{ success, updated_<resource> }`
pub fn updated(resource: Resource, id: DbId) -> Json<Value> {
    envelope([(format!("updated_{}", resource.singular()), json!(id))])
}

/// `{ success, deleted, total_<resource>s }`
pub fn deleted(resource: Resource, id: DbId, total: i64) -> Json<Value> {
    envelope([
        ("deleted".to_string(), json!(id)),
        (resource.total_key(), json!(total)),
    ])
}
