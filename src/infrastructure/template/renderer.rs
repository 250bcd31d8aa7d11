//! HAProxy config renderer
//!
//! Applies a minijinja template to a rendering context. Rendering is pure:
//! the same context and settings always produce byte-identical text.

use std::fs;

use minijinja::{context, Environment, UndefinedBehavior};

use crate::config::RendererSettings;
use crate::domain::value_objects::LoadBalancerContext;
use crate::error::{LbError, LbResult};

/// Built-in template
pub const DEFAULT_TEMPLATE: &str = include_str!("haproxy.cfg.j2");

/// Renders `LoadBalancerContext` values into HAProxy configuration text
#[derive(Debug)]
pub struct ConfigRenderer {
    env: Environment<'static>,
    template: String,
    settings: RendererSettings,
}

impl Default for ConfigRenderer {
    fn default() -> Self {
        Self::new(RendererSettings::default())
    }
}

impl ConfigRenderer {
    /// Renderer using the built-in template
    pub fn new(settings: RendererSettings) -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        Self {
            env,
            template: DEFAULT_TEMPLATE.to_string(),
            settings,
        }
    }

    /// Renderer using the template named in `settings`, or the built-in one
    pub fn from_settings(settings: RendererSettings) -> LbResult<Self> {
        let template = match &settings.template {
            Some(path) => Some(fs::read_to_string(path)?),
            None => None,
        };
        let renderer = Self::new(settings);
        Ok(match template {
            Some(source) => renderer.with_template(source),
            None => renderer,
        })
    }

    /// Replace the template source
    pub fn with_template(mut self, source: impl Into<String>) -> Self {
        self.template = source.into();
        self
    }

    pub fn settings(&self) -> &RendererSettings {
        &self.settings
    }

    /// Render the full configuration file for one load balancer
    pub fn render(&self, loadbalancer: &LoadBalancerContext) -> LbResult<String> {
        if loadbalancer.vip_address.is_none() {
            return Err(LbError::incomplete(
                "load balancer",
                loadbalancer.name.clone(),
                "vip address",
            ));
        }

        let rendered = self.env.render_str(
            &self.template,
            context! {
                loadbalancer => loadbalancer,
                settings => &self.settings,
            },
        )?;
        Ok(rendered)
    }
}
