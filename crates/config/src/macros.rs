/// Declares a fieldless enum that is parsed from and displayed as a fixed string per variant.
///
/// The strings come from the `strum` attributes on the enum. With the `clap` feature the enum is a
/// `clap::ValueEnum` whose help is the variant's doc comment; with `serde` it (de)serializes as
/// that string.
macro_rules! str_enum {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident {
            $(
                #[doc = $doc:literal]
                $(#[$var_attr:meta])*
                $var:ident
            ),* $(,)?
        }
    ) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[derive(strum::IntoStaticStr, strum::EnumIter, strum::EnumString, strum::VariantNames)]
        $(#[$attr])*
        $vis enum $name {
            $(
                #[doc = $doc]
                $(#[$var_attr])*
                $var
            ),*
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.to_str())
            }
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$var),*];

            /// Returns the string representation of `self`.
            pub fn to_str(self) -> &'static str {
                self.into()
            }
        }

        #[cfg(feature = "clap")]
        impl clap::ValueEnum for $name {
            fn value_variants<'a>() -> &'a [Self] {
                Self::ALL
            }

            fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
                let help = match self {
                    $(Self::$var => $doc.trim(),)*
                };
                Some(clap::builder::PossibleValue::new(self.to_str()).help(help))
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.to_str())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                use strum::VariantNames;

                let s = <std::borrow::Cow<'de, str> as serde::Deserialize<'de>>::deserialize(
                    deserializer,
                )?;
                s.parse().map_err(|_| serde::de::Error::unknown_variant(&s, Self::VARIANTS))
            }
        }
    };
}
