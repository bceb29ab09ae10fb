//! Error types for the Bitcoin-like parser

use std::fmt;

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Parser errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Address could not be decoded
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Address is well formed but belongs to another network
    #[error("Address not valid for network {network}: {address}")]
    AddressNetworkMismatch {
        /// The offending address
        address: String,
        /// Name of the parser's network
        network: String,
    },

    /// Address descriptor could not be turned into an address
    #[error("Invalid address descriptor: {0}")]
    InvalidDescriptor(String),

    /// Coin configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network parameter error
    #[error(transparent)]
    Params(#[from] coin_params::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Check if error is caused by caller input (vs internal error)
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidAddress(_) | Error::AddressNetworkMismatch { .. } | Error::InvalidDescriptor(_)
        )
    }

    /// Get error category for logging
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::InvalidAddress(_) | Error::AddressNetworkMismatch { .. } => {
                ErrorCategory::Address
            }
            Error::InvalidDescriptor(_) => ErrorCategory::Script,
            Error::Config(_) | Error::Params(_) => ErrorCategory::Config,
            Error::Io(_) | Error::Serialization(_) => ErrorCategory::Internal,
        }
    }
}

/// Error categories for classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Address-related errors
    Address,
    /// Output-script-related errors
    Script,
    /// Configuration errors
    Config,
    /// Internal/system errors
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Address => write!(f, "Address"),
            ErrorCategory::Script => write!(f, "Script"),
            ErrorCategory::Config => write!(f, "Config"),
            ErrorCategory::Internal => write!(f, "Internal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_error_detection() {
        assert!(Error::InvalidAddress("test".to_string()).is_user_error());
        assert!(Error::InvalidDescriptor("test".to_string()).is_user_error());
        assert!(!Error::Config("test".to_string()).is_user_error());
    }

    #[test]
    fn test_error_categories() {
        let mismatch = Error::AddressNetworkMismatch {
            address: "1abc".to_string(),
            network: "mainnet".to_string(),
        };
        assert_eq!(mismatch.category(), ErrorCategory::Address);
        assert_eq!(
            Error::InvalidDescriptor("x".to_string()).category(),
            ErrorCategory::Script
        );
        assert_eq!(
            Error::Params(coin_params::Error::InvalidNetwork("x".to_string())).category(),
            ErrorCategory::Config
        );
    }

    #[test]
    fn test_display() {
        let mismatch = Error::AddressNetworkMismatch {
            address: "1abc".to_string(),
            network: "testnet3".to_string(),
        };
        assert_eq!(mismatch.to_string(), "Address not valid for network testnet3: 1abc");
        assert_eq!(ErrorCategory::Script.to_string(), "Script");
    }
}
