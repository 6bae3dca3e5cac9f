//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_commerce::cart::CartStore;
use storefront_commerce::catalog::{Catalog, Product};
use storefront_commerce::reviews::{MockReviewService, ReviewStore};
use storefront_commerce::wishlist::WishlistStore;
use storefront_commerce::{Currency, Money, ProductId};
use storefront_store::FileStore;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Review store used by the CLI.
pub type Reviews = ReviewStore<MockReviewService, FileStore>;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Config file in use, if any.
    pub config_path: Option<PathBuf>,
    /// Product catalog.
    pub catalog: Catalog,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                (CliConfig::load(&path)?, Some(path))
            }
            None => match find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };
        if let Some(ref path) = config_path {
            tracing::debug!(path = %path.display(), "loaded config");
        }

        let base = base_dir(&cwd, config_path.as_deref());
        let catalog = match config.catalog.path {
            Some(ref path) => {
                let path = resolve(&base, path);
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
                Catalog::from_json(&json)
                    .with_context(|| format!("Invalid catalog: {}", path.display()))?
            }
            None => Catalog::builtin().context("Bundled catalog is invalid")?,
        };

        Ok(Self {
            config,
            output,
            cwd,
            config_path,
            catalog,
        })
    }

    /// Directory relative paths in the config are resolved against.
    pub fn base_dir(&self) -> PathBuf {
        base_dir(&self.cwd, self.config_path.as_deref())
    }

    /// Directory holding persisted state.
    pub fn storage_dir(&self) -> PathBuf {
        resolve(&self.base_dir(), &self.config.storage.dir)
    }

    /// Open the state directory.
    pub fn storage(&self) -> Result<FileStore> {
        let dir = self.storage_dir();
        FileStore::open(&dir)
            .with_context(|| format!("Failed to open storage: {}", dir.display()))
    }

    pub fn cart(&self) -> Result<CartStore<FileStore>> {
        Ok(CartStore::open(self.storage()?))
    }

    pub fn wishlist(&self) -> Result<WishlistStore<FileStore>> {
        Ok(WishlistStore::open(self.storage()?))
    }

    /// Review store backed by the bundled review data, cached in the state directory.
    pub fn reviews(&self) -> Result<Reviews> {
        let service = MockReviewService::builtin()
            .context("Bundled review data is invalid")?
            .with_delay(self.config.reviews.delay());
        Ok(ReviewStore::open(service, self.storage()?).with_ttl(self.config.reviews.cache_ttl()))
    }

    /// Resolve a product id from the command line.
    pub fn product(&self, id: u32) -> Result<&Product> {
        Ok(self.catalog.require(ProductId::new(id))?)
    }

    pub fn currency(&self) -> Currency {
        self.config.display.currency
    }

    /// Format a decimal amount in the display currency.
    pub fn price(&self, amount: f64) -> String {
        Money::from_decimal(amount, self.currency()).display()
    }
}

/// Find a config file in the directory tree.
fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

fn base_dir(cwd: &Path, config_path: Option<&Path>) -> PathBuf {
    config_path
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| cwd.to_path_buf())
}

/// Resolve a path relative to `base`.
fn resolve(base: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("storefront.toml"), "").unwrap();

        assert_eq!(
            find_config(&nested),
            Some(dir.path().join("storefront.toml"))
        );
    }

    #[test]
    fn test_paths_resolve_against_config_dir() {
        let config = Path::new("/srv/shop/storefront.toml");
        let base = base_dir(Path::new("/home/me"), Some(config));
        assert_eq!(base, PathBuf::from("/srv/shop"));
        assert_eq!(resolve(&base, ".storefront"), PathBuf::from("/srv/shop/.storefront"));
        assert_eq!(resolve(&base, "/var/state"), PathBuf::from("/var/state"));
        assert_eq!(base_dir(Path::new("/home/me"), None), PathBuf::from("/home/me"));
    }
}
