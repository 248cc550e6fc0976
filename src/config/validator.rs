//! Configuration validation

use super::*;
use anyhow::Result;
use tracing::warn;

/// Validate complete configuration
///
/// Returns the number of configurations the search will evaluate.
pub fn validate_config(config: &Config) -> Result<u64> {
    let configurations = validate_search(&config.search)?;
    validate_runtime(&config.runtime)?;

    if configurations > config.runtime.warn_configurations {
        warn!(
            configurations,
            threshold = config.runtime.warn_configurations,
            "search space is very large; the exhaustive search may not finish in practical time"
        );
    }

    Ok(configurations)
}

/// Validate search parameters and return the search-space size
pub fn validate_search(search: &SearchConfig) -> Result<u64> {
    if search.gateways == 0 {
        anyhow::bail!("gateways must be at least 1");
    }

    if search.k == 0 {
        anyhow::bail!("k must be at least 1");
    }

    if search.k > search.gateways {
        anyhow::bail!(
            "k ({}) cannot exceed the number of gateways ({})",
            search.k,
            search.gateways
        );
    }

    let grid = search.grid();
    let configurations = grid.search_space(search.gateways).ok_or_else(|| {
        anyhow::anyhow!(
            "search space of a {} grid with {} gateways does not fit in 64 bits; reduce width, height or gateways",
            grid,
            search.gateways
        )
    })?;

    if search.exclusion == Exclusion::Coordinate && search.k > 1 {
        warn!(
            k = search.k,
            "coordinate exclusion with k > 1 fails on co-located gateways, which the enumeration always produces"
        );
    }

    Ok(configurations)
}

/// Validate runtime configuration
pub fn validate_runtime(runtime: &RuntimeConfig) -> Result<()> {
    if runtime.warn_configurations == 0 {
        anyhow::bail!("warn_configurations must be at least 1");
    }

    if runtime.threads > 4096 {
        anyhow::bail!("threads must be at most 4096, got {}", runtime.threads);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(width: u32, height: u32, gateways: usize, k: usize) -> SearchConfig {
        SearchConfig {
            width,
            height,
            gateways,
            k,
            exclusion: Exclusion::Slot,
        }
    }

    #[test]
    fn test_validate_default_config() {
        let configurations = validate_config(&Config::default()).unwrap();
        assert_eq!(configurations, 25 * 25 * 25);
    }

    #[test]
    fn test_validate_gateways() {
        assert!(validate_search(&search(2, 2, 0, 1)).is_err());
        assert!(validate_search(&search(2, 2, 1, 1)).is_ok());
    }

    #[test]
    fn test_validate_k_range() {
        assert!(validate_search(&search(2, 2, 3, 0)).is_err());
        assert!(validate_search(&search(2, 2, 3, 3)).is_ok());
        assert!(validate_search(&search(2, 2, 3, 4)).is_err());
    }

    #[test]
    fn test_validate_search_space_size() {
        assert_eq!(validate_search(&search(1, 1, 1, 1)).unwrap(), 4);
        assert_eq!(validate_search(&search(0, 0, 5, 2)).unwrap(), 1);
    }

    #[test]
    fn test_validate_search_space_overflow() {
        let err = validate_search(&search(100, 100, 8, 3)).unwrap_err();
        assert!(err.to_string().contains("does not fit in 64 bits"));
    }

    #[test]
    fn test_validate_full_range_grid() {
        let mut config = Config::default();
        config.search = search(u32::MAX, u32::MAX, 1, 1);

        let err = validate_config(&config).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("does not fit in 64 bits"));
        assert!(message.contains("4294967296x4294967296"));
    }

    #[test]
    fn test_validate_coordinate_exclusion_allowed() {
        let mut s = search(1, 1, 2, 2);
        s.exclusion = Exclusion::Coordinate;
        assert!(validate_search(&s).is_ok());
    }

    #[test]
    fn test_validate_runtime() {
        let mut runtime = RuntimeConfig::default();
        assert!(validate_runtime(&runtime).is_ok());

        runtime.threads = 5000;
        assert!(validate_runtime(&runtime).is_err());

        runtime.threads = 0;
        runtime.warn_configurations = 0;
        assert!(validate_runtime(&runtime).is_err());
    }
}
