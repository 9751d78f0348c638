/// Persisted location fragment
///
/// A web gallery would keep the active category in the URL hash so the
/// selection survives reload and bookmarking. The desktop analog is a
/// one-line token file in the user's data directory:
/// - Linux: ~/.local/share/art-catalog/location
/// - macOS: ~/Library/Application Support/art-catalog/location
/// - Windows: %APPDATA%\art-catalog\location
///
/// Reading and writing are best effort: failures are logged and degrade to
/// "no token", they never become user-visible errors.
use std::fs;
use std::path::PathBuf;

/// Handle to the stored fragment token.
#[derive(Debug, Clone)]
pub struct Location {
    path: Option<PathBuf>,
}

impl Location {
    pub fn new() -> Self {
        let path = dirs::data_dir().or_else(dirs::home_dir).map(|mut dir| {
            dir.push("art-catalog");
            dir.push("location");
            dir
        });
        Location { path }
    }

    /// A location backed by an explicit file, for tests.
    #[cfg(test)]
    pub fn at(path: PathBuf) -> Self {
        Location { path: Some(path) }
    }

    /// Read the stored fragment token, still percent-encoded.
    /// Absent, unreadable or blank ⇒ `None`.
    pub fn read_fragment(&self) -> Option<String> {
        let path = self.path.as_ref()?;
        match fs::read_to_string(path) {
            Ok(raw) => {
                let token = raw.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(token.to_owned())
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read location");
                None
            }
        }
    }

    /// Store a (percent-encoded) fragment token.
    pub fn write_fragment(&self, fragment: &str) {
        let Some(path) = self.path.as_ref() else {
            return;
        };
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!(path = %parent.display(), error = %e, "could not create data dir");
                return;
            }
        }
        if let Err(e) = fs::write(path, fragment) {
            tracing::warn!(path = %path.display(), error = %e, "could not write location");
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new()
    }
}

/// Percent-encode a fragment token. Unreserved characters (RFC 3986) pass
/// through, everything else becomes `%XX`.
pub fn encode_fragment(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    for byte in token.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}

/// Percent-decode a fragment token. Total: malformed escapes pass through
/// verbatim, so encoded and unencoded input decode identically and no input
/// ever fails.
pub fn decode_fragment(token: &str) -> String {
    let bytes = token.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_then_decode_round_trips() {
        for token in ["Paintings", "Oil & Ink", "čaj", "100%"] {
            assert_eq!(decode_fragment(&encode_fragment(token)), token);
        }
    }

    #[test]
    fn test_decode_tolerates_unencoded_input() {
        // Encoded and unencoded forms of the same token decode identically.
        assert_eq!(decode_fragment("Oil%20%26%20Ink"), "Oil & Ink");
        assert_eq!(decode_fragment("Oil & Ink"), "Oil & Ink");
    }

    #[test]
    fn test_decode_is_total_on_malformed_escapes() {
        assert_eq!(decode_fragment("100%"), "100%");
        assert_eq!(decode_fragment("%zz"), "%zz");
        assert_eq!(decode_fragment("%4"), "%4");
    }

    #[test]
    fn test_read_write_fragment() {
        let path = std::env::temp_dir()
            .join("art-catalog-test-location")
            .join("location");
        std::fs::remove_file(&path).ok();

        let location = Location::at(path.clone());
        assert_eq!(location.read_fragment(), None);

        location.write_fragment("Paintings");
        assert_eq!(location.read_fragment(), Some("Paintings".to_owned()));

        location.write_fragment("   ");
        assert_eq!(location.read_fragment(), None);

        std::fs::remove_file(&path).ok();
    }
}
