/// Declares a `String` newtype that can only be built from a value with
/// non-whitespace content. Serde goes through the same check.
#[macro_export]
macro_rules! non_empty_string {
    ($TypeName: ident) => {
        #[derive(
            Clone,
            Debug,
            Eq,
            Hash,
            Ord,
            PartialEq,
            PartialOrd,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $TypeName(String);

        impl $TypeName {
            pub fn inner(&self) -> String {
                self.0.clone()
            }
        }

        impl PartialEq<str> for $TypeName {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl std::fmt::Display for $TypeName {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl AsRef<str> for $TypeName {
            fn as_ref(&self) -> &str {
                self.0.as_ref()
            }
        }

        impl TryFrom<String> for $TypeName {
            type Error = String;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                if value.trim().is_empty() {
                    return Err("value cannot be empty".to_string());
                }
                Ok($TypeName(value))
            }
        }

        impl TryFrom<&str> for $TypeName {
            type Error = String;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                $TypeName::try_from(value.to_owned())
            }
        }

        impl From<$TypeName> for String {
            fn from(value: $TypeName) -> Self {
                value.0
            }
        }
    };
}

#[cfg(test)]
mod tests {
    non_empty_string!(AreaName);

    #[test]
    fn test_blank_values_are_rejected() {
        assert!(AreaName::try_from("   ".to_string()).is_err());
        assert!(AreaName::try_from("").is_err());
    }

    #[test]
    fn test_value_is_kept_as_given() {
        let name = AreaName::try_from(" Vila Esperança ").unwrap();
        assert_eq!(name.as_ref(), " Vila Esperança ");
        assert!(name == *" Vila Esperança ");
    }
}
