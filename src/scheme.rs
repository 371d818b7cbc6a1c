use crate::error::ConstructionError;
use std::fmt;
use std::str::FromStr;

/// The supported block cipher paddings.
///
/// All schemes except [`PaddingScheme::ArbitraryTailByte`] and [`PaddingScheme::NotLastByte`]
/// can fail to unpad and are therefore susceptible to a padding oracle attack. They should only
/// be used together with integrity protection.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PaddingScheme {
    /// Zero padding (ISO 10118-1 and ISO 9797-1 method 1), i.e. zero bytes are appended.
    ///
    /// Data to be padded *must not* end with a 0 byte. Padding such data panics.
    #[cfg_attr(feature = "serde", serde(rename = "zero"))]
    Zero = 0,
    /// PKCS#7 padding (RFC 5652). Every pad byte holds the pad length.
    #[cfg_attr(feature = "serde", serde(rename = "pkcs7"))]
    Pkcs7 = 1,
    /// ANSI X.923 padding. Zero bytes followed by the pad length.
    #[cfg_attr(feature = "serde", serde(rename = "x923"))]
    X923 = 2,
    /// ISO 10126 padding. Random bytes followed by the pad length.
    #[cfg_attr(feature = "serde", serde(rename = "iso10126"))]
    Iso10126 = 3,
    /// RFC 4303 (IPsec ESP) padding. The bytes `1, 2, ..., p`.
    #[cfg_attr(feature = "serde", serde(rename = "rfc4303"))]
    Rfc4303 = 4,
    /// ISO 7816-4 padding (ISO 9797-1 method 2, smart cards). A `0x80` marker followed by zero
    /// bytes.
    #[cfg_attr(feature = "serde", serde(rename = "iso7816-4"))]
    Iso78164 = 5,
    /// Arbitrary tail byte padding. Every pad byte holds a random value that differs from the
    /// last data byte.
    #[cfg_attr(feature = "serde", serde(rename = "arbitrary-tail-byte"))]
    ArbitraryTailByte = 6,
    /// Same layout as [`PaddingScheme::ArbitraryTailByte`] with a cheaper removal.
    #[cfg_attr(feature = "serde", serde(rename = "not-last-byte"))]
    NotLastByte = 7,
}

impl PaddingScheme {
    /// All schemes, ordered by their identifier.
    pub const ALL: [PaddingScheme; 8] = [
        PaddingScheme::Zero,
        PaddingScheme::Pkcs7,
        PaddingScheme::X923,
        PaddingScheme::Iso10126,
        PaddingScheme::Rfc4303,
        PaddingScheme::Iso78164,
        PaddingScheme::ArbitraryTailByte,
        PaddingScheme::NotLastByte,
    ];

    /// The numeric identifier of the scheme.
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Human readable name, e.g. `PKCS#7`.
    pub fn name(self) -> &'static str {
        crate::registry::algorithm(self).name
    }

    /// Short lowercase key used in configuration, e.g. `pkcs7`.
    pub const fn key(self) -> &'static str {
        match self {
            PaddingScheme::Zero => "zero",
            PaddingScheme::Pkcs7 => "pkcs7",
            PaddingScheme::X923 => "x923",
            PaddingScheme::Iso10126 => "iso10126",
            PaddingScheme::Rfc4303 => "rfc4303",
            PaddingScheme::Iso78164 => "iso7816-4",
            PaddingScheme::ArbitraryTailByte => "arbitrary-tail-byte",
            PaddingScheme::NotLastByte => "not-last-byte",
        }
    }

    /// Whether unpadding never fails, which makes the scheme immune to padding oracles.
    pub const fn is_oracle_immune(self) -> bool {
        matches!(self, PaddingScheme::ArbitraryTailByte | PaddingScheme::NotLastByte)
    }
}

impl TryFrom<u8> for PaddingScheme {
    type Error = ConstructionError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        PaddingScheme::ALL
            .get(id as usize)
            .copied()
            .ok_or(ConstructionError::InvalidPaddingScheme(id))
    }
}

impl From<PaddingScheme> for u8 {
    fn from(scheme: PaddingScheme) -> Self {
        scheme.id()
    }
}

impl FromStr for PaddingScheme {
    type Err = UnknownSchemeName;

    /// Accepts either the key (`iso7816-4`) or the display name (`ISO 7816-4`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaddingScheme::ALL
            .into_iter()
            .find(|scheme| scheme.key().eq_ignore_ascii_case(s) || scheme.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSchemeName(s.to_string()))
    }
}

impl fmt::Display for PaddingScheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing a [`PaddingScheme`] from an unknown name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown padding scheme \"{0}\"")]
pub struct UnknownSchemeName(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_table_order() {
        for (i, scheme) in PaddingScheme::ALL.into_iter().enumerate() {
            assert_eq!(scheme.id() as usize, i);
            assert_eq!(PaddingScheme::try_from(i as u8), Ok(scheme));
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert_eq!(
            PaddingScheme::try_from(8),
            Err(ConstructionError::InvalidPaddingScheme(8))
        );
        assert_eq!(
            PaddingScheme::try_from(255),
            Err(ConstructionError::InvalidPaddingScheme(255))
        );
    }

    #[test]
    fn parse_key_and_name() {
        assert_eq!("pkcs7".parse::<PaddingScheme>(), Ok(PaddingScheme::Pkcs7));
        assert_eq!("PKCS#7".parse::<PaddingScheme>(), Ok(PaddingScheme::Pkcs7));
        assert_eq!("ISO 7816-4".parse::<PaddingScheme>(), Ok(PaddingScheme::Iso78164));
        assert_eq!("Not-Last-Byte".parse::<PaddingScheme>(), Ok(PaddingScheme::NotLastByte));
        assert!("pkcs5".parse::<PaddingScheme>().is_err());
        for scheme in PaddingScheme::ALL {
            assert_eq!(scheme.key().parse::<PaddingScheme>(), Ok(scheme));
            assert_eq!(scheme.to_string().parse::<PaddingScheme>(), Ok(scheme));
        }
    }

    #[test]
    fn only_tail_byte_schemes_are_oracle_immune() {
        let immune: Vec<_> = PaddingScheme::ALL.into_iter().filter(|s| s.is_oracle_immune()).collect();
        assert_eq!(immune, [PaddingScheme::ArbitraryTailByte, PaddingScheme::NotLastByte]);
    }
}
