// SPDX-FileCopyrightText: 2024 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};

use dapp_runtime::RuntimeConfig;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Loads the runtime configuration from a YAML file. Missing fields take
/// their default value.
pub fn load(path: &Path) -> Result<RuntimeConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse(contents: &str) -> Result<RuntimeConfig, serde_yaml::Error> {
    serde_yaml::from_str(contents)
}

/// Configuration file, if any, with the command line URL on top.
pub fn resolve(
    path: Option<&Path>,
    rollup_url: Option<String>,
) -> Result<RuntimeConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load(path)?,
        None => RuntimeConfig::default(),
    };
    if let Some(rollup_url) = rollup_url {
        config.rollup_url = rollup_url;
    }
    Ok(config)
}

#[cfg(test)]
mod test {
    use super::*;
    use dapp_runtime::H160;
    use hex_literal::hex;
    use dapp_runtime::{AddressBook, ProtocolFlags};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(parse("{}").unwrap(), RuntimeConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = parse(
            r#"
rollup_url: http://127.0.0.1:5004
address_book:
  ether_portal: "0x0000000000000000000000000000000000000001"
  app_address_relay: null
flags:
  token_deposit_success_flag: false
"#,
        )
        .unwrap();

        assert_eq!(config.rollup_url, "http://127.0.0.1:5004");
        assert_eq!(
            config.address_book.ether_portal,
            H160(hex!("0000000000000000000000000000000000000001"))
        );
        assert_eq!(config.address_book.app_address_relay, None);
        assert_eq!(
            config.address_book.erc20_portal,
            AddressBook::default().erc20_portal
        );
        assert_eq!(
            config.flags,
            ProtocolFlags {
                token_deposit_success_flag: false,
                app_address_from_metadata: false,
            }
        );
    }

    #[test]
    fn test_command_line_url_wins() {
        let config = resolve(None, Some("http://rollup:5004".to_string())).unwrap();
        assert_eq!(config.rollup_url, "http://rollup:5004");
        assert_eq!(config.address_book, AddressBook::default());
    }

    #[test]
    fn test_missing_file() {
        let error = load(Path::new("/nonexistent/dapp-node.yaml")).unwrap_err();
        assert!(matches!(error, ConfigError::Read { .. }));
    }
}
