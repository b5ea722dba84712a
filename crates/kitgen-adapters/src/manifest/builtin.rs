//! Compiled-in manifests.
//!
//! Bodies live as plain markdown under `content/` in this crate and are
//! embedded with `include_str!`, so the binary needs no data files at runtime.

use tracing::debug;

use kitgen_core::{application::ports::ManifestSource, domain::Manifest, error::KitResult};

/// Name of the ACME Pharmacy Analytics spec kit.
pub const ACME_PHARMACY: &str = "acme-pharmacy-analytics";

/// Entries of the ACME Pharmacy Analytics spec kit, in write order.
const ACME_PHARMACY_ENTRIES: &[(&str, &str)] = &[
    (
        "security_privacy.md",
        include_str!("../../content/acme-pharmacy-analytics/security_privacy.md"),
    ),
    (
        "architecture_overview.md",
        include_str!("../../content/acme-pharmacy-analytics/architecture_overview.md"),
    ),
    (
        "acceptance_tests.md",
        include_str!("../../content/acme-pharmacy-analytics/acceptance_tests.md"),
    ),
    (
        "personas/client_data_analyst.md",
        include_str!("../../content/acme-pharmacy-analytics/personas/client_data_analyst.md"),
    ),
    (
        "personas/client_exec.md",
        include_str!("../../content/acme-pharmacy-analytics/personas/client_exec.md"),
    ),
    (
        "personas/internal_ops_lead.md",
        include_str!("../../content/acme-pharmacy-analytics/personas/internal_ops_lead.md"),
    ),
    (
        "personas/product_manager.md",
        include_str!("../../content/acme-pharmacy-analytics/personas/product_manager.md"),
    ),
    (
        "personas/compliance_analyst.md",
        include_str!("../../content/acme-pharmacy-analytics/personas/compliance_analyst.md"),
    ),
    (
        "user_stories/client_analytics.md",
        include_str!("../../content/acme-pharmacy-analytics/user_stories/client_analytics.md"),
    ),
    (
        "user_stories/exec_overview.md",
        include_str!("../../content/acme-pharmacy-analytics/user_stories/exec_overview.md"),
    ),
    (
        "user_stories/internal_ops.md",
        include_str!("../../content/acme-pharmacy-analytics/user_stories/internal_ops.md"),
    ),
    (
        "user_stories/product_metrics.md",
        include_str!("../../content/acme-pharmacy-analytics/user_stories/product_metrics.md"),
    ),
    (
        "user_stories/insights_alerts.md",
        include_str!("../../content/acme-pharmacy-analytics/user_stories/insights_alerts.md"),
    ),
    (
        "user_stories/ai_chat_agent.md",
        include_str!("../../content/acme-pharmacy-analytics/user_stories/ai_chat_agent.md"),
    ),
    (
        "requirements/functional.md",
        include_str!("../../content/acme-pharmacy-analytics/requirements/functional.md"),
    ),
    (
        "requirements/non_functional.md",
        include_str!("../../content/acme-pharmacy-analytics/requirements/non_functional.md"),
    ),
    (
        "requirements/rbac.md",
        include_str!("../../content/acme-pharmacy-analytics/requirements/rbac.md"),
    ),
    (
        "requirements/auditability.md",
        include_str!("../../content/acme-pharmacy-analytics/requirements/auditability.md"),
    ),
    (
        "requirements/accessibility.md",
        include_str!("../../content/acme-pharmacy-analytics/requirements/accessibility.md"),
    ),
    (
        "requirements/observability.md",
        include_str!("../../content/acme-pharmacy-analytics/requirements/observability.md"),
    ),
];

/// A manifest whose entries are embedded in the binary.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinManifest {
    name: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl BuiltinManifest {
    /// The ACME Pharmacy Analytics spec kit: personas, user stories,
    /// requirements and the top-level security, architecture and acceptance
    /// documents.
    pub fn acme_pharmacy() -> Self {
        Self {
            name: ACME_PHARMACY,
            entries: ACME_PHARMACY_ENTRIES,
        }
    }
}

impl ManifestSource for BuiltinManifest {
    fn name(&self) -> &str {
        self.name
    }

    fn load(&self) -> KitResult<Manifest> {
        let manifest = self
            .entries
            .iter()
            .try_fold(Manifest::new(self.name), |m, (path, body)| {
                m.with_entry(path, *body)
            })?;
        debug!(manifest = self.name, entries = manifest.len(), "Built-in manifest loaded");
        Ok(manifest)
    }
}
