use std::io::{self, Write};

use libp2p::Multiaddr;

use crate::NodeIdentity;

/// Write the key report, one labeled item per line. With `bootstrap_addr`
/// set, prints the placeholder multiaddress and the IP replacement reminder;
/// otherwise prints the key length and compatibility note. With `env_format`,
/// additionally prints the key as an environment file line.
pub fn write_report(
    mut out: impl Write,
    identity: &NodeIdentity,
    bootstrap_addr: Option<&Multiaddr>,
    env_format: bool,
) -> io::Result<()> {
    let key_hex = identity.private_key_hex();
    writeln!(out, "Generated Private Key (hex): {key_hex}")?;
    writeln!(out, "Derived Peer ID: {}", identity.peer_id())?;
    if env_format {
        writeln!(out, "LOCAL_COLLECTOR_PRIVATE_KEY={key_hex}")?;
    }
    match bootstrap_addr {
        Some(addr) => {
            writeln!(out, "Expected Multiaddress (local placeholder): {addr}")?;
            writeln!(out)?;
            writeln!(out, "Remember to replace '127.0.0.1' with your bootstrap node's public IP address when configuring other nodes.")?;
        }
        None => {
            writeln!(out, "Key length: {} characters", key_hex.len())?;
            writeln!(out, "Note: This is libp2p-compatible and will generate correct peer IDs")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::*;
    use crate::tests::BrokenRng;
    use crate::DEFAULT_BOOTSTRAP_PORT;

    #[test]
    fn test_plain_report() {
        let identity = NodeIdentity::generate().unwrap();
        let mut buf = Vec::new();
        write_report(&mut buf, &identity, None, false).unwrap();

        let expected = format!(
            "Generated Private Key (hex): {}\n\
             Derived Peer ID: {}\n\
             Key length: 128 characters\n\
             Note: This is libp2p-compatible and will generate correct peer IDs\n",
            identity.private_key_hex(),
            identity.peer_id(),
        );
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[test]
    fn test_bootstrap_report() {
        let identity = NodeIdentity::generate().unwrap();
        let addr = identity
            .bootstrap_multiaddr(Ipv4Addr::LOCALHOST, DEFAULT_BOOTSTRAP_PORT)
            .unwrap();
        let mut buf = Vec::new();
        write_report(&mut buf, &identity, Some(&addr), false).unwrap();

        let expected = format!(
            "Generated Private Key (hex): {}\n\
             Derived Peer ID: {}\n\
             Expected Multiaddress (local placeholder): /ip4/127.0.0.1/tcp/4001/p2p/{}\n\
             \n\
             Remember to replace '127.0.0.1' with your bootstrap node's public IP address when configuring other nodes.\n",
            identity.private_key_hex(),
            identity.peer_id(),
            identity.peer_id(),
        );
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[test]
    fn test_env_format_line() {
        let identity = NodeIdentity::generate().unwrap();
        let mut buf = Vec::new();
        write_report(&mut buf, &identity, None, true).unwrap();

        let output = String::from_utf8(buf).unwrap();
        let env_line = format!("LOCAL_COLLECTOR_PRIVATE_KEY={}", identity.private_key_hex());
        assert_eq!(output.lines().nth(2), Some(env_line.as_str()));
    }

    #[test]
    fn test_no_output_on_generation_failure() {
        // The report stage only runs after generation succeeded, so a dead
        // entropy source must leave the output empty.
        let mut buf = Vec::new();
        match NodeIdentity::generate_from_rng(&mut BrokenRng) {
            Ok(identity) => write_report(&mut buf, &identity, None, false).unwrap(),
            Err(err) => assert!(matches!(err, crate::IdentityError::KeyGeneration(_))),
        }
        assert!(buf.is_empty());
    }
}
