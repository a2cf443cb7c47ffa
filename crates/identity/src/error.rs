use libp2p::identity::{DecodingError, ParseError};

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),
    #[error("Peer ID derivation failed: {0}")]
    IdentifierDerivation(String),
    #[error("Invalid private key encoding: {0}")]
    KeyEncoding(String),
    #[error("Invalid multiaddress: {0}")]
    AddressFormat(String),
}

impl From<rand::Error> for IdentityError {
    fn from(err: rand::Error) -> Self {
        Self::KeyGeneration(err.to_string())
    }
}

impl From<ParseError> for IdentityError {
    fn from(err: ParseError) -> Self {
        Self::IdentifierDerivation(err.to_string())
    }
}

impl From<DecodingError> for IdentityError {
    fn from(err: DecodingError) -> Self {
        Self::KeyEncoding(err.to_string())
    }
}

impl From<hex::FromHexError> for IdentityError {
    fn from(err: hex::FromHexError) -> Self {
        Self::KeyEncoding(err.to_string())
    }
}

impl From<libp2p::multiaddr::Error> for IdentityError {
    fn from(err: libp2p::multiaddr::Error) -> Self {
        Self::AddressFormat(err.to_string())
    }
}
