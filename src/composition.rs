use crate::config::AppConfig;
use crate::content::StaticContent;
use crate::units::UnitRegistry;
use crate::validate::ensure_valid;

/// The composition root: the one artifact a host application consumes.
/// Construction validates the configuration against the registry, so a
/// `Customization` that exists is internally consistent. Hot reconfiguration
/// means building a new triple and swapping it as a whole.
#[derive(Debug)]
pub struct Customization {
    pub config: AppConfig,
    pub registry: UnitRegistry,
    pub content: StaticContent,
}

impl Customization {
    /// Compose configuration, registry and content. Fails with the full list
    /// of integrity errors when the configuration references tabs the
    /// registry cannot resolve or charts with inconsistent data keys.
    pub fn new(
        config: AppConfig,
        registry: UnitRegistry,
        content: StaticContent,
    ) -> anyhow::Result<Self> {
        ensure_valid(&config, &registry)?;
        Ok(Self {
            config,
            registry,
            content,
        })
    }

    /// The seeded installation with the default registry and content bundle.
    pub fn default_install() -> anyhow::Result<Self> {
        Self::new(
            AppConfig::default(),
            UnitRegistry::with_defaults(),
            StaticContent::default(),
        )
    }
}
