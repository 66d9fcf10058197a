//! Proposed design: secrets installed by the Phalanx CLI

use anyhow::Result;

use crate::core::{NodeKind, RenderConfig};
use crate::graph::{ArchitectureDiagram, DiagramBuilder};

use super::Blueprint;

/// The CLI-driven secret installation flow
#[derive(Debug, Clone, Copy, Default)]
pub struct ProposedDesign;

impl Blueprint for ProposedDesign {
    fn name(&self) -> &'static str {
        "proposed"
    }

    fn title(&self) -> &'static str {
        "Proposed design"
    }

    fn description(&self) -> &'static str {
        "Secrets generated and installed by the phalanx CLI"
    }

    fn build(&self) -> Result<ArchitectureDiagram> {
        let mut d = DiagramBuilder::new(RenderConfig::phalanx(self.title(), self.name()));

        d.node("admin", NodeKind::User, "Administrator")?;

        d.cluster("Kubernetes", |c| {
            c.node("token", NodeKind::Secret, "Vault token")?;
            c.node("vso", NodeKind::KubernetesEngine, "Vault Secrets Operator")?;
            c.node("secrets", NodeKind::Secret, "Kubernetes secrets")
        })?;

        d.cluster("Phalanx CLI", |c| {
            c.node("generate", NodeKind::Python, "phalanx generate")?;
            c.node("install", NodeKind::Python, "phalanx install")
        })?;

        d.cluster("Secret storage", |c| {
            c.node("vault", NodeKind::Vault, "Vault")?;
            c.node("connect", NodeKind::Rack, "1Password Connect")?;
            c.node("onepassword", NodeKind::Storage, "1Password")
        })?;

        d.chain(&["admin", "install", "token"])?;
        d.back_chain(&["install", "connect", "onepassword"])?;
        d.edge("admin", "onepassword")?;
        d.chain(&["admin", "generate", "vault"])?;
        d.back_edge("generate", "connect")?;
        d.chain(&["token", "vso", "secrets"])?;
        d.back_edge("vso", "vault")?;

        Ok(d.finish())
    }
}
