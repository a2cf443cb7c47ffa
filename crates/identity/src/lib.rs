use std::net::Ipv4Addr;

use libp2p::identity::ed25519;
use libp2p::multiaddr::Protocol;

pub use libp2p::{Multiaddr, PeerId};
use rand::rngs::OsRng;
use rand::RngCore;

pub use crate::error::IdentityError;
pub use crate::report::write_report;

mod error;
mod report;

/// Raw Ed25519 private key size: 32-byte seed followed by the 32-byte public key.
/// Matches the `priv.Raw()` encoding used by Go libp2p nodes.
pub const RAW_KEY_LEN: usize = 64;

/// Default libp2p TCP port for bootstrap nodes.
pub const DEFAULT_BOOTSTRAP_PORT: u16 = 4001;

/// A freshly generated or loaded node identity: an Ed25519 keypair
/// together with the peer ID derived from its public key.
#[derive(Debug)]
pub struct NodeIdentity {
    keypair: ed25519::Keypair,
    peer_id: PeerId,
}

impl NodeIdentity {
    /// Generate a new identity from the OS random source.
    pub fn generate() -> Result<Self, IdentityError> {
        Self::generate_from_rng(&mut OsRng)
    }

    /// Generate a new identity from the given random source.
    pub fn generate_from_rng(rng: &mut impl RngCore) -> Result<Self, IdentityError> {
        let mut seed = [0u8; 32];
        rng.try_fill_bytes(&mut seed)?;
        let secret = ed25519::SecretKey::try_from_bytes(&mut seed)
            .map_err(|e| IdentityError::KeyGeneration(e.to_string()))?;
        Self::from_keypair(ed25519::Keypair::from(secret))
    }

    /// Load an identity from its raw 64-byte private key encoding.
    pub fn from_raw_bytes(bytes: &[u8]) -> Result<Self, IdentityError> {
        let mut buf: [u8; RAW_KEY_LEN] = bytes.try_into().map_err(|_| {
            IdentityError::KeyEncoding(format!(
                "expected {RAW_KEY_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;
        let keypair = ed25519::Keypair::try_from_bytes(&mut buf)?;
        Self::from_keypair(keypair)
    }

    /// Load an identity from a 128-character hex private key,
    /// e.g. the `LOCAL_COLLECTOR_PRIVATE_KEY` value of an existing node.
    pub fn from_hex(hex_key: &str) -> Result<Self, IdentityError> {
        let bytes = hex::decode(hex_key.trim())?;
        Self::from_raw_bytes(&bytes)
    }

    fn from_keypair(keypair: ed25519::Keypair) -> Result<Self, IdentityError> {
        let public = libp2p::identity::PublicKey::from(keypair.public());
        let peer_id = public.to_peer_id();
        // The base58 form must parse back to the same ID, otherwise the
        // printed identity would be unusable in node configs.
        let reparsed: PeerId = peer_id.to_base58().parse()?;
        if reparsed != peer_id {
            return Err(IdentityError::IdentifierDerivation(format!(
                "peer ID {peer_id} does not survive a base58 round trip"
            )));
        }
        Ok(Self { keypair, peer_id })
    }

    pub fn peer_id(&self) -> PeerId {
        self.peer_id
    }

    /// The raw 64-byte private key encoding (seed ++ public key).
    pub fn raw_key_bytes(&self) -> [u8; RAW_KEY_LEN] {
        self.keypair.to_bytes()
    }

    /// Lowercase hex of the raw private key, 128 characters.
    pub fn private_key_hex(&self) -> String {
        hex::encode(self.raw_key_bytes())
    }

    /// Build the `/ip4/<ip>/tcp/<port>/p2p/<peer id>` multiaddress for this
    /// identity and validate it by parsing the formatted string back.
    pub fn bootstrap_multiaddr(
        &self,
        ip: Ipv4Addr,
        port: u16,
    ) -> Result<Multiaddr, IdentityError> {
        let addr: Multiaddr = format!("/ip4/{ip}/tcp/{port}/p2p/{}", self.peer_id).parse()?;
        match addr.iter().last() {
            Some(Protocol::P2p(peer_id)) if peer_id == self.peer_id => Ok(addr),
            _ => Err(IdentityError::AddressFormat(format!(
                "address {addr} does not end with peer ID {}",
                self.peer_id
            ))),
        }
    }
}
