// Copyright 2025 sssh contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Strict field validation for new-host input

use super::error::ConfigError;

/// Validate a dotted-quad IPv4 address with octets 0-255.
pub fn validate_ip(ip: &str) -> Result<String, ConfigError> {
    let ip = ip.trim();
    let parts: Vec<&str> = ip.split('.').collect();
    let invalid = || ConfigError::InvalidIp {
        value: ip.to_string(),
    };

    if parts.len() != 4 {
        return Err(invalid());
    }
    for part in &parts {
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let num: u32 = part.parse().map_err(|_| invalid())?;
        if num > 255 {
            return Err(invalid());
        }
    }

    Ok(ip.to_string())
}

/// Validate a port in 1-65535. Empty input defaults to 22.
pub fn validate_port(port: &str) -> Result<u16, ConfigError> {
    let port = port.trim();
    if port.is_empty() {
        return Ok(22);
    }
    let invalid = || ConfigError::InvalidPort {
        value: port.to_string(),
    };

    if !port.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let num: u32 = port.parse().map_err(|_| invalid())?;
    if num < 1 || num > 65535 {
        return Err(invalid());
    }

    Ok(num as u16)
}

/// Validate a short name: non-empty, no embedded whitespace.
pub fn validate_short_name(name: &str) -> Result<String, ConfigError> {
    let name = name.trim();
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidShortName {
            name: name.to_string(),
        });
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ip() {
        assert_eq!(validate_ip("10.0.0.5").unwrap(), "10.0.0.5");
        assert_eq!(validate_ip(" 255.255.255.255 ").unwrap(), "255.255.255.255");
        assert!(validate_ip("10.0.0").is_err());
        assert!(validate_ip("10.0.0.256").is_err());
        assert!(validate_ip("10.0.0.-1").is_err());
        assert!(validate_ip("example.com").is_err());
        assert!(validate_ip("1.2.3.4.5").is_err());
        assert!(validate_ip("").is_err());
    }

    #[test]
    fn test_validate_port() {
        assert_eq!(validate_port("22").unwrap(), 22);
        assert_eq!(validate_port("65535").unwrap(), 65535);
        assert_eq!(validate_port("").unwrap(), 22);
        assert!(validate_port("0").is_err());
        assert!(validate_port("65536").is_err());
        assert!(validate_port("2a").is_err());
        assert!(validate_port("-1").is_err());
    }

    #[test]
    fn test_validate_short_name() {
        assert_eq!(validate_short_name("web-1").unwrap(), "web-1");
        assert_eq!(validate_short_name("  db  ").unwrap(), "db");
        assert!(validate_short_name("").is_err());
        assert!(validate_short_name("   ").is_err());
        assert!(validate_short_name("my host").is_err());
    }
}
