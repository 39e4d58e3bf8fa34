//! Data literals.

use crate::iri::Iri;
use crate::vocab;

/// A data literal: a lexical form with a datatype and an optional
/// language tag.
///
/// Language-tagged literals always carry the `rdf:langString` datatype.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Literal {
    /// The lexical form.
    pub lexical: String,
    /// The datatype IRI.
    #[cfg_attr(feature = "serde", serde(default = "default_datatype"))]
    pub datatype: Iri,
    /// The language tag, if any.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub lang: Option<String>,
}

#[cfg(feature = "serde")]
fn default_datatype() -> Iri {
    Iri::new(vocab::XSD_STRING)
}

impl Literal {
    /// Creates an `xsd:string` literal.
    #[must_use]
    pub fn string(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Iri::new(vocab::XSD_STRING),
            lang: None,
        }
    }

    /// Creates a typed literal.
    #[must_use]
    pub fn typed(lexical: impl Into<String>, datatype: impl Into<Iri>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: datatype.into(),
            lang: None,
        }
    }

    /// Creates a language-tagged literal. The tag is lower-cased.
    #[must_use]
    pub fn lang_tagged(lexical: impl Into<String>, lang: &str) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Iri::new(vocab::RDF_LANG_STRING),
            lang: Some(lang.to_ascii_lowercase()),
        }
    }

    /// Returns `true` for `xsd:string` literals without a language tag.
    #[must_use]
    pub fn is_plain_string(&self) -> bool {
        self.lang.is_none() && self.datatype.as_str() == vocab::XSD_STRING
    }

    /// Returns `true` if the literal has the given language tag
    /// (case-insensitive).
    #[must_use]
    pub fn has_lang(&self, lang: &str) -> bool {
        self.lang
            .as_deref()
            .is_some_and(|l| l.eq_ignore_ascii_case(lang))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_tag_is_normalized() {
        let lit = Literal::lang_tagged("Pizza", "EN");
        assert_eq!(lit.lang.as_deref(), Some("en"));
        assert!(lit.has_lang("en"));
        assert_eq!(lit.datatype.as_str(), vocab::RDF_LANG_STRING);
    }

    #[test]
    fn plain_string_detection() {
        assert!(Literal::string("x").is_plain_string());
        assert!(!Literal::typed("3", vocab::XSD_INTEGER).is_plain_string());
        assert!(!Literal::lang_tagged("x", "fr").is_plain_string());
    }
}
