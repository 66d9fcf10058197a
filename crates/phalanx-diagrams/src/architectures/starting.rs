//! Starting point: secrets installed by shell scripts

use anyhow::Result;

use crate::core::{NodeKind, RenderConfig};
use crate::graph::{ArchitectureDiagram, DiagramBuilder};

use super::Blueprint;

/// The shell-script-driven secret installation flow
#[derive(Debug, Clone, Copy, Default)]
pub struct StartingPoint;

impl Blueprint for StartingPoint {
    fn name(&self) -> &'static str {
        "starting"
    }

    fn title(&self) -> &'static str {
        "Starting point"
    }

    fn description(&self) -> &'static str {
        "Secrets installed by install.sh and update_secrets.sh"
    }

    fn build(&self) -> Result<ArchitectureDiagram> {
        let mut d = DiagramBuilder::new(RenderConfig::phalanx(self.title(), self.name()));

        d.node("admin", NodeKind::User, "Administrator")?;

        d.cluster("Kubernetes", |c| {
            c.node("token", NodeKind::Secret, "Vault token")?;
            c.node("vso", NodeKind::KubernetesEngine, "Vault Secrets Operator")?;
            c.node("secrets", NodeKind::Secret, "Kubernetes secrets")
        })?;

        d.cluster("Phalanx installer", |c| {
            c.node("installer", NodeKind::Bash, "install.sh")?;
            c.node("update", NodeKind::Bash, "update_secrets.sh")
        })?;

        d.cluster("Secret storage", |c| {
            c.node("vault", NodeKind::Vault, "Vault")?;
            c.node("connect", NodeKind::Rack, "1Password Connect")?;
            c.node("onepassword", NodeKind::Storage, "1Password")
        })?;

        d.chain(&["admin", "installer", "token"])?;
        d.chain(&["admin", "update", "vault"])?;
        d.back_chain(&["update", "connect", "onepassword"])?;
        d.edge("admin", "onepassword")?;
        d.edge("token", "vso")?;
        d.back_edge("vso", "vault")?;
        d.edge("vso", "secrets")?;

        Ok(d.finish())
    }
}
