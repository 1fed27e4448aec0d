/// Namespaced identifier handling — validation and file-stem derivation.
///
/// Add-on content is named `namespace:name` inside its document, but the
/// file the document lands in needs a filesystem-safe stem. The optional
/// override form `namespace:name@name<stem>` decouples the two.
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("invalid identifier '{raw}': {reason}")]
    Invalid { raw: String, reason: &'static str },
}

impl IdentifierError {
    fn new(raw: &str, reason: &'static str) -> Self {
        Self::Invalid {
            raw: raw.to_string(),
            reason,
        }
    }
}

/// A validated content identifier.
///
/// `stored()` is what goes into the document's `description.identifier`;
/// `file_base()` is the derived output file stem. Parsing is pure — no
/// builder state is touched until `build`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    stored: String,
    file_base: String,
}

impl Identifier {
    /// Parse `namespace:name` or `namespace:name@name<stem>`.
    ///
    /// The namespace is alphanumeric, the name is word characters
    /// (`[A-Za-z0-9_]`). Without an override, the file stem is the
    /// identifier with `:` replaced by `_`; with one, the stem is the
    /// override capture (also made filesystem-safe).
    pub fn parse(raw: &str) -> Result<Identifier, IdentifierError> {
        let (id_part, override_part) = match raw.find("@name<") {
            Some(at) => {
                let rest = &raw[at + "@name<".len()..];
                let close = rest
                    .find('>')
                    .ok_or_else(|| IdentifierError::new(raw, "unclosed override marker"))?;
                if !rest[close + 1..].is_empty() {
                    return Err(IdentifierError::new(
                        raw,
                        "trailing characters after override marker",
                    ));
                }
                let stem = &rest[..close];
                if stem.is_empty() {
                    return Err(IdentifierError::new(raw, "empty override file name"));
                }
                (&raw[..at], Some(stem))
            }
            None => (raw, None),
        };

        let (namespace, name) = id_part
            .split_once(':')
            .ok_or_else(|| IdentifierError::new(raw, "expected 'namespace:name'"))?;

        if namespace.is_empty() || !namespace.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(IdentifierError::new(raw, "namespace must be alphanumeric"));
        }
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(IdentifierError::new(
                raw,
                "name must be word characters (letters, digits, underscore)",
            ));
        }

        let file_base = match override_part {
            Some(stem) => stem.replace(':', "_"),
            None => format!("{}_{}", namespace, name),
        };

        Ok(Identifier {
            stored: id_part.to_string(),
            file_base,
        })
    }

    /// The canonical identifier stored in the document, override markup
    /// stripped.
    pub fn stored(&self) -> &str {
        &self.stored
    }

    /// The derived output file stem, without extension.
    pub fn file_base(&self) -> &str {
        &self.file_base
    }
}
