use crate::context::BootContext;
use crate::error::AliasError;
use crate::record::{AliasId, AliasRecord, DEFAULT_ENVIRONMENT};
use crate::registry::AliasRegistry;

/// Resolves reference strings (`@[group.]site[.environment]`) against a built
/// registry and the live local context.
pub struct Resolver<'a> {
    pub registry: &'a AliasRegistry,
    pub ctx: &'a BootContext,
    default_environment: &'a str,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a AliasRegistry, ctx: &'a BootContext) -> Self {
        Self {
            registry,
            ctx,
            default_environment: DEFAULT_ENVIRONMENT,
        }
    }

    /// Override the environment assumed when a reference omits one.
    pub fn with_default_environment(mut self, env: &'a str) -> Self {
        self.default_environment = env;
        self
    }

    /// Resolve one reference. Pure apart from the `@self` context read.
    pub fn resolve(&self, reference: &str) -> Result<AliasRecord, AliasError> {
        let name = reference.strip_prefix('@').unwrap_or(reference);

        match name {
            "self" => self
                .ctx
                .self_record()
                .ok_or(AliasError::NoBootstrappedSite),
            "none" => Ok(AliasRecord::none()),
            _ => {
                let id = parse_reference(name, self.default_environment)?;
                self.registry
                    .lookup(&id.fq_name())
                    .cloned()
                    .ok_or_else(|| AliasError::NotFound(name.to_string()))
            }
        }
    }
}

/// Split a sigil-stripped reference into an identity.
/// One segment is a bare site, two are `site.env`, three are `group.site.env`.
pub fn parse_reference(name: &str, default_environment: &str) -> Result<AliasId, AliasError> {
    let invalid = || AliasError::InvalidReference(name.to_string());

    let parts: Vec<&str> = name.split('.').collect();
    if parts.iter().any(|p| p.trim().is_empty()) {
        return Err(invalid());
    }

    match parts.as_slice() {
        [site] => Ok(AliasId::new(None, site, default_environment)),
        [site, env] => Ok(AliasId::new(None, site, env)),
        [group, site, env] => Ok(AliasId::new(Some(group), site, env)),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::OptionMap;
    use serde_yaml::Value;
    use std::path::PathBuf;

    fn registry_with(entries: &[(&str, &str)]) -> AliasRegistry {
        let records = entries
            .iter()
            .map(|(name, root)| {
                let id = parse_reference(name, DEFAULT_ENVIRONMENT).unwrap();
                let mut options = OptionMap::new();
                options.insert("root".to_string(), Value::String(root.to_string()));
                AliasRecord::new(id, options)
            })
            .collect();
        AliasRegistry::build(vec![records])
    }

    #[test]
    fn bare_site_defaults_to_dev() {
        let reg = registry_with(&[("earth.dev", "/var/www/earth")]);
        let ctx = BootContext::default();
        let resolver = Resolver::new(&reg, &ctx);

        let bare = resolver.resolve("@earth").unwrap();
        let explicit = resolver.resolve("@earth.dev").unwrap();
        assert_eq!(bare, explicit);
    }

    #[test]
    fn sigil_is_optional() {
        let reg = registry_with(&[("earth.dev", "/var/www/earth")]);
        let ctx = BootContext::default();
        let resolver = Resolver::new(&reg, &ctx);
        assert!(resolver.resolve("earth.dev").is_ok());
    }

    #[test]
    fn grouped_references_resolve() {
        let reg = registry_with(&[("elements.earth.live", "/srv/earth")]);
        let ctx = BootContext::default();
        let resolver = Resolver::new(&reg, &ctx);
        let rec = resolver.resolve("@elements.earth.live").unwrap();
        assert_eq!(rec.id.group.as_deref(), Some("elements"));
    }

    #[test]
    fn unknown_reference_is_not_found() {
        let reg = registry_with(&[]);
        let ctx = BootContext::default();
        let resolver = Resolver::new(&reg, &ctx);
        assert!(matches!(resolver.resolve("@mars"), Err(AliasError::NotFound(_))));
    }

    #[test]
    fn self_requires_a_bootstrapped_site() {
        let reg = registry_with(&[]);
        let ctx = BootContext::default();
        let resolver = Resolver::new(&reg, &ctx);
        assert!(matches!(resolver.resolve("@self"), Err(AliasError::NoBootstrappedSite)));
    }

    #[test]
    fn self_synthesizes_from_the_context() {
        let reg = registry_with(&[]);
        let ctx = BootContext::default()
            .with_overrides(Some(PathBuf::from("/var/www/app")), Some("https://app.test".into()));
        let resolver = Resolver::new(&reg, &ctx);

        let rec = resolver.resolve("@self").unwrap();
        assert_eq!(rec.root(), Some(PathBuf::from("/var/www/app")));
        assert_eq!(rec.uri(), Some("https://app.test"));
    }

    #[test]
    fn none_always_resolves_and_has_no_root() {
        let reg = registry_with(&[]);
        let ctx = BootContext::default();
        let resolver = Resolver::new(&reg, &ctx);

        let rec = resolver.resolve("@none").unwrap();
        assert_eq!(rec.root(), None);
    }

    #[test]
    fn empty_segments_are_invalid() {
        let reg = registry_with(&[]);
        let ctx = BootContext::default();
        let resolver = Resolver::new(&reg, &ctx);

        for bad in ["@", "@.dev", "@earth..live", "@a.b.c.d"] {
            assert!(
                matches!(resolver.resolve(bad), Err(AliasError::InvalidReference(_))),
                "expected {bad:?} to be invalid"
            );
        }
    }

    #[test]
    fn default_environment_is_configurable() {
        let reg = registry_with(&[("earth.live", "/srv/earth")]);
        let ctx = BootContext::default();
        let resolver = Resolver::new(&reg, &ctx).with_default_environment("live");
        assert!(resolver.resolve("@earth").is_ok());
    }
}
