//! Static snapshot field table
//!
//! The publisher walks this table instead of inspecting the snapshot at
//! runtime: field order and wire names are declared here, once, and dispatch
//! happens on the accessor's returned variant.

use attrcast_pkg::Packages;

use crate::snapshot::InstanceInventory;

/// A snapshot field's value, as the publisher sees it
pub enum FieldValue<'a> {
    /// Plain text, published as raw bytes
    Text(&'a str),
    /// Structured record, published gzip-compressed and base64-encoded
    Record(&'a Packages),
    /// A shape the publisher does not handle; silently skipped
    Skip,
}

/// One entry of the field table
pub struct FieldSpec {
    /// Attribute name under the base path. Wire contract: exact case.
    pub name: &'static str,
    /// Accessor into the snapshot
    pub get: fn(&InstanceInventory) -> FieldValue<'_>,
}

/// Snapshot fields in declared order
///
/// The errors list is in the table to keep the declared order complete, but
/// its shape is neither text nor record, so the walk skips it; the error log
/// is published separately after the walk.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "Hostname",
        get: |s| FieldValue::Text(&s.hostname),
    },
    FieldSpec {
        name: "LongName",
        get: |s| FieldValue::Text(&s.long_name),
    },
    FieldSpec {
        name: "ShortName",
        get: |s| FieldValue::Text(&s.short_name),
    },
    FieldSpec {
        name: "Version",
        get: |s| FieldValue::Text(&s.version),
    },
    FieldSpec {
        name: "Architecture",
        get: |s| FieldValue::Text(&s.architecture),
    },
    FieldSpec {
        name: "KernelVersion",
        get: |s| FieldValue::Text(&s.kernel_version),
    },
    FieldSpec {
        name: "InstalledPackages",
        get: |s| FieldValue::Record(&s.installed_packages),
    },
    FieldSpec {
        name: "PackageUpdates",
        get: |s| FieldValue::Record(&s.package_updates),
    },
    FieldSpec {
        name: "Errors",
        get: |_| FieldValue::Skip,
    },
];
