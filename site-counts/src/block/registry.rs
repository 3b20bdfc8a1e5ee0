//! Block registry: the host-facing dispatch table
//!
//! The host keeps one registry for the process, fills it during startup, and
//! dispatches every placement it encounters during page assembly through
//! [`BlockRegistry::render`].

use std::collections::HashMap;

use anyhow::{Result, bail};

use super::attributes::BlockAttributes;
use super::render::BlockContext;
use crate::host::ContentHost;

/// Render callback invoked once per placement
pub type RenderFn =
    fn(&dyn ContentHost, &BlockAttributes, &str, &BlockContext) -> Result<String>;

/// Dispatch table from block name to render callback
#[derive(Default)]
pub struct BlockRegistry {
    blocks: HashMap<String, RenderFn>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a render callback under a block name
    ///
    /// Registering the same name twice replaces the earlier callback; the
    /// caller owns single-registration.
    pub fn register(&mut self, name: &str, render: RenderFn) {
        log::debug!("registering block {}", name);
        self.blocks.insert(name.to_string(), render);
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.blocks.contains_key(name)
    }

    /// Render one placement of the named block
    pub fn render(
        &self,
        name: &str,
        host: &dyn ContentHost,
        attributes: &BlockAttributes,
        content: &str,
        context: &BlockContext,
    ) -> Result<String> {
        let Some(render) = self.blocks.get(name) else {
            bail!("no block registered under '{}'", name);
        };
        render(host, attributes, content, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{self, BLOCK_NAME};
    use crate::host::{MemoryHost, Site};

    fn empty_host() -> MemoryHost {
        MemoryHost::new(Site::default())
    }

    #[test]
    fn test_init_registers_the_counts_block() {
        let mut registry = BlockRegistry::new();
        assert!(!registry.is_registered(BLOCK_NAME));
        block::init(&mut registry);
        assert!(registry.is_registered(BLOCK_NAME));
    }

    #[test]
    fn test_render_dispatches_to_registered_callback() {
        let mut registry = BlockRegistry::new();
        block::init(&mut registry);
        let markup = registry
            .render(
                BLOCK_NAME,
                &empty_host(),
                &BlockAttributes::default(),
                "",
                &BlockContext::default(),
            )
            .unwrap();
        assert!(markup.starts_with("<div"));
    }

    #[test]
    fn test_unknown_block_name_is_an_error() {
        let registry = BlockRegistry::new();
        let result = registry.render(
            "site-counts/missing",
            &empty_host(),
            &BlockAttributes::default(),
            "",
            &BlockContext::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_second_registration_replaces_the_first() {
        fn stub(
            _: &dyn ContentHost,
            _: &BlockAttributes,
            _: &str,
            _: &BlockContext,
        ) -> Result<String> {
            Ok("stub".to_string())
        }

        let mut registry = BlockRegistry::new();
        block::init(&mut registry);
        registry.register(BLOCK_NAME, stub);
        let markup = registry
            .render(
                BLOCK_NAME,
                &empty_host(),
                &BlockAttributes::default(),
                "",
                &BlockContext::default(),
            )
            .unwrap();
        assert_eq!(markup, "stub");
    }
}
