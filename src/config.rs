// src/config.rs
use county_domain::{CountConfig, config::DEFAULT_CHUNK_SIZE};
use county_infra::default_worker_count;
use county_shared_kernel::DomainError;

use crate::args::Args;

impl TryFrom<&Args> for CountConfig {
    type Error = DomainError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let workers = args.workers.unwrap_or_else(default_worker_count);
        let chunk_size = args.chunk_size.map_or(DEFAULT_CHUNK_SIZE, |size| size.0);
        CountConfig::new(args.file.clone(), chunk_size, workers)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn defaults_fill_missing_values() {
        let args = Args::try_parse_from(["county", "data.txt"]).unwrap();
        let config = CountConfig::try_from(&args).unwrap();
        assert_eq!(config.chunk_size().get(), DEFAULT_CHUNK_SIZE);
        assert_eq!(config.worker_count().get(), default_worker_count());
    }

    #[test]
    fn explicit_values_win() {
        let args = Args::try_parse_from(["county", "data.txt", "3", "64K"]).unwrap();
        let config = CountConfig::try_from(&args).unwrap();
        assert_eq!(config.worker_count().get(), 3);
        assert_eq!(config.chunk_size().get(), 64 * 1024);
        assert_eq!(config.file_path().to_string(), "data.txt");
    }
}
