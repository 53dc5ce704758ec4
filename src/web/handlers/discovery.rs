// GET|POST /api/discovery: the static tool-registry schema.

use axum::Json;

use crate::discovery::{DiscoverySchema, DISCOVERY_SCHEMA};

pub async fn get_discovery() -> Json<&'static DiscoverySchema> {
    Json(&DISCOVERY_SCHEMA)
}
