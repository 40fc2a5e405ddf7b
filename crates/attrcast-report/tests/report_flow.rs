use std::io::Read;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use flate2::read::GzDecoder;

use attrcast_exec::error::ExecError;
use attrcast_exec::result::CommandResult;
use attrcast_exec::traits::CommandRunner;
use attrcast_report::{collect, run_report, write_inventory};
use attrcast_store::error::{Result as StoreResult, StoreError};
use attrcast_store::traits::AttributeStore;

const OS_RELEASE: &str = r#"PRETTY_NAME="Debian GNU/Linux 12 (bookworm)"
NAME="Debian GNU/Linux"
VERSION_ID="12"
ID=debian
"#;

// Mock implementations

struct MockRunner {
    responses: Vec<(&'static str, CommandResult)>,
}

fn ok(stdout: &str) -> CommandResult {
    CommandResult {
        status: 0,
        stdout: stdout.to_string(),
        stderr: String::new(),
        duration: Duration::from_millis(1),
    }
}

fn failed(status: i32, stderr: &str) -> CommandResult {
    CommandResult {
        status,
        stdout: String::new(),
        stderr: stderr.to_string(),
        duration: Duration::from_millis(1),
    }
}

#[async_trait]
impl CommandRunner for MockRunner {
    async fn run(&self, cmd: &str) -> Result<CommandResult, ExecError> {
        for (pattern, result) in &self.responses {
            if cmd.contains(pattern) {
                return Ok(result.clone());
            }
        }
        Ok(failed(127, "not found"))
    }

    async fn run_with_timeout(
        &self,
        cmd: &str,
        _timeout: Duration,
    ) -> Result<CommandResult, ExecError> {
        self.run(cmd).await
    }
}

/// Runner for a healthy debian host
fn healthy_runner() -> Arc<dyn CommandRunner> {
    Arc::new(MockRunner {
        responses: vec![
            ("uname -n", ok("web-01\n")),
            ("uname -r", ok("6.1.0-18-amd64\n")),
            ("uname -m", ok("x86_64\n")),
            ("cat /etc/os-release", ok(OS_RELEASE)),
            ("which dpkg-query", ok("/usr/bin/dpkg-query")),
            ("dpkg-query -W", ok("vim amd64 2:9.0.1378-2\n")),
            (
                "apt list",
                ok("Listing... Done\ncurl/stable 7.88.1-10+deb12u6 amd64 [upgradable from: 7.88.1-10+deb12u5]\n"),
            ),
        ],
    })
}

struct RecordingStore {
    writes: Mutex<Vec<(String, Vec<u8>)>>,
    fail_suffixes: Vec<&'static str>,
}

impl RecordingStore {
    fn new() -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            fail_suffixes: Vec::new(),
        }
    }

    fn failing_on(suffixes: Vec<&'static str>) -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            fail_suffixes: suffixes,
        }
    }

    fn paths(&self) -> Vec<String> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .map(|(path, _)| path.clone())
            .collect()
    }

    fn body_of(&self, suffix: &str) -> Option<Vec<u8>> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .find(|(path, _)| path.ends_with(suffix))
            .map(|(_, body)| body.clone())
    }
}

#[async_trait]
impl AttributeStore for RecordingStore {
    async fn put(&self, path: &str, content: Vec<u8>) -> StoreResult<()> {
        if self.fail_suffixes.iter().any(|s| path.ends_with(s)) {
            return Err(StoreError::Api {
                status: 503,
                message: "unavailable".to_string(),
            });
        }
        self.writes
            .lock()
            .unwrap()
            .push((path.to_string(), content));
        Ok(())
    }
}

fn decode_record(payload: &[u8]) -> serde_json::Value {
    let compressed = STANDARD.decode(payload).unwrap();
    let mut json = String::new();
    GzDecoder::new(&compressed[..])
        .read_to_string(&mut json)
        .unwrap();
    serde_json::from_str(&json).unwrap()
}

#[tokio::test]
async fn test_healthy_cycle_writes_every_attribute_in_order() {
    let store = RecordingStore::new();

    let inventory = run_report(healthy_runner(), &store, "/guestInventory").await;

    assert!(inventory.errors.is_empty());
    assert_eq!(
        store.paths(),
        vec![
            "/guestInventory/Timestamp",
            "/guestInventory/Hostname",
            "/guestInventory/LongName",
            "/guestInventory/ShortName",
            "/guestInventory/Version",
            "/guestInventory/Architecture",
            "/guestInventory/KernelVersion",
            "/guestInventory/InstalledPackages",
            "/guestInventory/PackageUpdates",
            "/guestInventory/Errors",
        ]
    );

    // empty error log renders as the literal []
    assert_eq!(store.body_of("/Errors").unwrap(), b"[]");
}

#[tokio::test]
async fn test_scalar_attributes_are_raw_text() {
    let store = RecordingStore::new();

    run_report(healthy_runner(), &store, "/guestInventory").await;

    assert_eq!(store.body_of("/Hostname").unwrap(), b"web-01");
    assert_eq!(
        store.body_of("/LongName").unwrap(),
        b"Debian GNU/Linux 12 (bookworm)"
    );
    assert_eq!(store.body_of("/ShortName").unwrap(), b"debian");
    assert_eq!(store.body_of("/Version").unwrap(), b"12");
    assert_eq!(store.body_of("/Architecture").unwrap(), b"x86_64");
    assert_eq!(store.body_of("/KernelVersion").unwrap(), b"6.1.0-18-amd64");
}

#[tokio::test]
async fn test_timestamp_is_rfc3339_utc() {
    let store = RecordingStore::new();

    run_report(healthy_runner(), &store, "/guestInventory").await;

    let body = store.body_of("/Timestamp").unwrap();
    let text = String::from_utf8(body).unwrap();

    assert!(text.ends_with('Z'));
    assert!(chrono::DateTime::parse_from_rfc3339(&text).is_ok());
}

#[tokio::test]
async fn test_composite_attributes_round_trip() {
    let store = RecordingStore::new();

    let inventory = run_report(healthy_runner(), &store, "/guestInventory").await;

    let decoded = decode_record(&store.body_of("/InstalledPackages").unwrap());
    assert_eq!(
        decoded,
        serde_json::to_value(&inventory.installed_packages).unwrap()
    );
    assert_eq!(
        decoded,
        serde_json::json!({
            "deb": [{"name": "vim", "arch": "amd64", "version": "2:9.0.1378-2"}]
        })
    );

    let decoded = decode_record(&store.body_of("/PackageUpdates").unwrap());
    assert_eq!(
        decoded,
        serde_json::to_value(&inventory.package_updates).unwrap()
    );
}

#[tokio::test]
async fn test_hostname_failure_does_not_block_anything_else() {
    let runner: Arc<dyn CommandRunner> = Arc::new(MockRunner {
        responses: vec![
            ("uname -n", failed(1, "permission denied")),
            ("uname -r", ok("6.1.0-18-amd64\n")),
            ("uname -m", ok("x86_64\n")),
            ("cat /etc/os-release", ok(OS_RELEASE)),
            ("which dpkg-query", ok("/usr/bin/dpkg-query")),
            ("dpkg-query -W", ok("vim amd64 2:9.0.1378-2\n")),
            ("apt list", ok("Listing... Done\n")),
        ],
    });
    let store = RecordingStore::new();

    let inventory = run_report(runner, &store, "/guestInventory").await;

    assert_eq!(inventory.hostname, "");
    assert_eq!(inventory.errors.len(), 1);
    assert!(inventory.errors[0].contains("permission denied"));

    // the empty hostname is still published, as empty text
    assert_eq!(store.body_of("/Hostname").unwrap(), b"");
    assert_eq!(store.body_of("/ShortName").unwrap(), b"debian");
    assert_eq!(store.paths().len(), 10);

    // and the error log carries the failure to the store
    let errors_body = String::from_utf8(store.body_of("/Errors").unwrap()).unwrap();
    assert!(errors_body.contains("permission denied"));
}

#[tokio::test]
async fn test_distro_failure_leaves_identity_fields_empty() {
    let runner: Arc<dyn CommandRunner> = Arc::new(MockRunner {
        responses: vec![
            ("uname -n", ok("web-01\n")),
            ("cat /etc/os-release", failed(1, "No such file or directory")),
            ("which dpkg-query", ok("/usr/bin/dpkg-query")),
            ("dpkg-query -W", ok("vim amd64 2:9.0.1378-2\n")),
            ("apt list", ok("Listing... Done\n")),
        ],
    });

    let inventory = collect(runner).await;

    assert_eq!(inventory.hostname, "web-01");
    assert_eq!(inventory.long_name, "");
    assert_eq!(inventory.short_name, "");
    assert_eq!(inventory.errors.len(), 1);
    // one collector failing does not block the package collectors
    assert_eq!(inventory.installed_packages.deb.len(), 1);
}

#[tokio::test]
async fn test_transport_failure_on_one_field_is_isolated() {
    let store = RecordingStore::failing_on(vec!["/InstalledPackages"]);

    let inventory = run_report(healthy_runner(), &store, "/guestInventory").await;

    assert_eq!(inventory.errors.len(), 1);
    assert!(inventory.errors[0].contains("InstalledPackages"));

    let paths = store.paths();
    assert!(!paths.iter().any(|p| p.ends_with("/InstalledPackages")));
    assert!(paths.iter().any(|p| p.ends_with("/Timestamp")));
    assert!(paths.iter().any(|p| p.ends_with("/PackageUpdates")));
    assert!(paths.iter().any(|p| p.ends_with("/Hostname")));

    // the failure is visible in the published error log
    let errors_body = String::from_utf8(store.body_of("/Errors").unwrap()).unwrap();
    assert!(errors_body.contains("InstalledPackages"));
}

#[tokio::test]
async fn test_timestamp_failure_does_not_stop_the_walk() {
    let store = RecordingStore::failing_on(vec!["/Timestamp"]);

    let inventory = run_report(healthy_runner(), &store, "/guestInventory").await;

    assert_eq!(inventory.errors.len(), 1);
    assert!(inventory.errors[0].contains("Timestamp"));
    assert_eq!(store.paths().len(), 9);
    assert_eq!(store.paths()[0], "/guestInventory/Hostname");
}

#[tokio::test]
async fn test_errors_write_failure_cannot_self_append() {
    let store = RecordingStore::failing_on(vec!["/Errors"]);

    let inventory = run_report(healthy_runner(), &store, "/guestInventory").await;

    // the failed Errors write leaves the in-memory log untouched
    assert!(inventory.errors.is_empty());
    assert_eq!(store.paths().len(), 9);
}

#[tokio::test]
async fn test_publish_failures_are_returned_and_merged() {
    let store = RecordingStore::failing_on(vec!["/Hostname", "/PackageUpdates"]);
    let mut inventory = collect(healthy_runner()).await;

    let failures = write_inventory(&mut inventory, &store, "/guestInventory").await;

    assert_eq!(failures.len(), 2);
    assert_eq!(inventory.errors, failures);
}
