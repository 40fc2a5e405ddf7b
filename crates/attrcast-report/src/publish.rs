//! Field-by-field attribute publishing

use std::sync::Arc;

use attrcast_exec::traits::CommandRunner;
use attrcast_store::traits::AttributeStore;
use chrono::{SecondsFormat, Utc};
use tracing::{debug, error, info, instrument};

use crate::encode::encode_record;
use crate::fields::{FIELDS, FieldValue};
use crate::snapshot::{self, InstanceInventory};

/// Publish a snapshot field-by-field under `base`
///
/// Writes a `Timestamp` attribute, then one attribute per table field in
/// declared order, then the quoted error log as `Errors`. Every failure is
/// appended to the snapshot's error log and returned; none stops the walk.
/// A failure writing `Errors` itself is log-only, since the log has already
/// been rendered at that point.
#[instrument(skip(snapshot, store))]
pub async fn write_inventory(
    snapshot: &mut InstanceInventory,
    store: &dyn AttributeStore,
    base: &str,
) -> Vec<String> {
    info!("writing instance inventory");

    let mut failures = Vec::new();

    let path = format!("{base}/Timestamp");
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    if let Err(e) = store.put(&path, now.into_bytes()).await {
        error!(%path, error = %e, "attribute write failed");
        failures.push(format!("{path}: {e}"));
    }

    for field in FIELDS {
        let path = format!("{base}/{}", field.name);

        let outcome = match (field.get)(snapshot) {
            FieldValue::Text(text) => {
                debug!(%path, "writing text attribute");
                store
                    .put(&path, text.as_bytes().to_vec())
                    .await
                    .map_err(|e| format!("{path}: {e}"))
            }
            FieldValue::Record(record) => {
                debug!(%path, "writing record attribute");
                match encode_record(record) {
                    Ok(body) => store
                        .put(&path, body)
                        .await
                        .map_err(|e| format!("{path}: {e}")),
                    Err(e) => Err(format!("{path}: {e}")),
                }
            }
            FieldValue::Skip => continue,
        };

        if let Err(e) = outcome {
            error!(error = %e, "attribute write failed");
            failures.push(e);
        }
    }

    snapshot.errors.extend(failures.iter().cloned());

    let path = format!("{base}/Errors");
    let rendered = format!("{:?}", snapshot.errors);
    if let Err(e) = store.put(&path, rendered.into_bytes()).await {
        // The log was rendered before this write; its own failure stays local
        error!(%path, error = %e, "error log write failed");
    }

    failures
}

/// Run one full report cycle: collect a fresh snapshot and publish it
///
/// Returns the published snapshot so callers can inspect the error log.
pub async fn run_report(
    runner: Arc<dyn CommandRunner>,
    store: &dyn AttributeStore,
    base: &str,
) -> InstanceInventory {
    let mut inventory = snapshot::collect(runner).await;
    write_inventory(&mut inventory, store, base).await;
    inventory
}
