//! Macro for implementing Display and FromStr for wire-level enums
//!
//! Wire enums (HTTP methods, link relations) have one canonical spelling on
//! output but are accepted in any case on input.
//!
//! # Example
//!
//! ```rust
//! use suitelink_domain::impl_wire_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Verb {
//!     Get,
//!     Post,
//! }
//!
//! impl_wire_enum_conversions!(Verb {
//!     Get => "GET",
//!     Post => "POST",
//! });
//!
//! assert_eq!(Verb::Get.to_string(), "GET");
//! assert_eq!("post".parse::<Verb>(), Ok(Verb::Post));
//! ```

/// Implements Display, FromStr and `as_str` for wire-level enums
///
/// This macro generates:
/// - `as_str`: the canonical spelling as a `&'static str`
/// - Display trait: writes the canonical spelling
/// - FromStr trait: ASCII case-insensitive parse back to the variant
#[macro_export]
macro_rules! impl_wire_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical wire spelling.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestRel {
        Next,
        Previous,
        SelfLink,
    }

    impl_wire_enum_conversions!(TestRel {
        Next => "next",
        Previous => "prev",
        SelfLink => "self",
    });

    #[test]
    fn test_display_uses_canonical_spelling() {
        assert_eq!(TestRel::Next.to_string(), "next");
        assert_eq!(TestRel::Previous.to_string(), "prev");
        assert_eq!(TestRel::SelfLink.as_str(), "self");
    }

    #[test]
    fn test_fromstr_ignores_case() {
        assert_eq!(TestRel::from_str("NEXT").unwrap(), TestRel::Next);
        assert_eq!(TestRel::from_str("Prev").unwrap(), TestRel::Previous);
        assert_eq!(TestRel::from_str("self").unwrap(), TestRel::SelfLink);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestRel::from_str("last");
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Invalid TestRel: last");
    }
}
