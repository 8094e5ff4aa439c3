use crate::{
    Capabilities, CapabilitiesBuilder, Context, Db2Dictionary, Db2Platform, Dictionary, Error,
    GenericDictionary, Result,
};
use std::{collections::BTreeMap, sync::Arc};
use url::Url;

/// Dictionary shared by every query building thread of a database.
pub type SharedDictionary = Arc<dyn Dictionary>;

/// Builds a dictionary from the dialect defaults, once the caller applied its overrides.
pub trait DictionaryFactory: Send + Sync {
    fn defaults(&self) -> CapabilitiesBuilder;
    fn construct(&self, capabilities: Capabilities) -> SharedDictionary;
}

struct GenericFactory;

impl DictionaryFactory for GenericFactory {
    fn defaults(&self) -> CapabilitiesBuilder {
        Capabilities::builder()
    }
    fn construct(&self, capabilities: Capabilities) -> SharedDictionary {
        Arc::new(GenericDictionary::with_capabilities(capabilities))
    }
}

impl DictionaryFactory for Db2Platform {
    fn defaults(&self) -> CapabilitiesBuilder {
        self.capabilities()
    }
    fn construct(&self, capabilities: Capabilities) -> SharedDictionary {
        Arc::new(Db2Dictionary::with_capabilities(*self, capabilities))
    }
}

pub const GENERIC: &str = "generic";

/// Dialects known by name, resolved into ready to share dictionaries.
pub struct DictionaryRegistry {
    factories: BTreeMap<String, Arc<dyn DictionaryFactory>>,
}

impl DictionaryRegistry {
    /// Registry holding the generic dictionary and the DB2 family.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(GENERIC, GenericFactory);
        for platform in Db2Platform::ALL {
            registry.register(platform.name(), platform);
        }
        registry
    }

    pub fn empty() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Register (or replace) a dialect. Names are case insensitive.
    pub fn register(&mut self, name: &str, factory: impl DictionaryFactory + 'static) {
        self.factories
            .insert(name.to_ascii_lowercase(), Arc::new(factory));
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    fn factory(&self, name: &str) -> Result<&Arc<dyn DictionaryFactory>> {
        self.factories.get(&name.to_ascii_lowercase()).ok_or_else(|| {
            Error::msg(format!(
                "Unknown dictionary `{}`, expected one of: {}",
                name,
                self.names().collect::<Vec<_>>().join(", ")
            ))
        })
    }

    /// Dictionary registered under `name`, with its default capabilities.
    pub fn get(&self, name: &str) -> Result<SharedDictionary> {
        let factory = self.factory(name)?;
        log::debug!("Resolved dictionary `{}`", name);
        Ok(factory.construct(factory.defaults().build()))
    }

    /// Dictionary matching the product name and version reported by the database driver.
    ///
    /// Falls back to the generic dictionary when the product is not recognized.
    pub fn detect(&self, product_name: &str, product_version: &str) -> Result<SharedDictionary> {
        match Db2Platform::detect(product_name, product_version) {
            Some(platform) => self.get(platform.name()),
            None => {
                log::warn!(
                    "No dictionary matches the database product `{} {}`, using the generic one",
                    product_name,
                    product_version
                );
                self.get(GENERIC)
            }
        }
    }

    /// Dictionary configured by a url: `derby://localhost?varchar_cast_length=4000&supports_auto_assign=false`.
    ///
    /// The scheme names the dictionary, every query pair overrides the capability with the same
    /// name, in order.
    pub fn from_url(&self, url: &str) -> Result<SharedDictionary> {
        let context = || format!("While configuring a dictionary from `{}`", url);
        let result = (|| -> Result<SharedDictionary> {
            let url = Url::parse(url).with_context(context)?;
            let factory = self.factory(url.scheme()).with_context(context)?;
            let mut builder = factory.defaults();
            let mut overrides = 0;
            for (name, value) in url.query_pairs() {
                builder.set_property(&name, &value).with_context(context)?;
                overrides += 1;
            }
            log::debug!(
                "Resolved dictionary `{}` with {} override(s)",
                url.scheme(),
                overrides
            );
            Ok(factory.construct(builder.build()))
        })();
        if let Err(error) = &result {
            log::error!("{:#}", error);
        }
        result
    }
}

impl Default for DictionaryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
