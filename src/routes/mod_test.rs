use super::*;

#[tokio::test]
async fn healthz_reports_ok_with_crate_version() {
    let Json(health) = healthz().await;
    assert_eq!(health.status, "ok");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn health_serializes_as_flat_object() {
    let health = Health { status: "ok", version: "1.2.3" };
    let json = serde_json::to_value(&health).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "ok", "version": "1.2.3" }));
}
