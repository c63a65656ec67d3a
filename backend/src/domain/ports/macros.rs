//! `define_port_error!`: error enums for driven ports.
//!
//! Every variant carries a single adapter-supplied description. The macro
//! derives `thiserror::Error` with the given display format, a snake_case
//! constructor per variant, and a `message()` accessor returning the bare
//! description without the category prefix.
//!
//! ```ignore
//! define_port_error! {
//!     /// Errors raised by the mail relay.
//!     pub enum RelayError {
//!         /// Relay unreachable.
//!         Down { message } => "relay down: {message}",
//!     }
//! }
//!
//! let err = RelayError::down("timeout");
//! assert_eq!(err.to_string(), "relay down: timeout");
//! assert_eq!(err.message(), "timeout");
//! ```

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $field:ident } => $display:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($display)]
                $variant {
                    #[doc = "Adapter-supplied description."]
                    $field: String,
                },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = concat!("Build a `", stringify!($variant), "` error.")]
                    #[must_use]
                    pub fn [<$variant:snake>]($field: impl Into<String>) -> Self {
                        Self::$variant { $field: $field.into() }
                    }
                }
            )+

            /// Adapter-supplied description, without the category prefix.
            #[must_use]
            #[allow(clippy::match_same_arms, reason = "one arm per generated variant")]
            pub fn message(&self) -> &str {
                match self {
                    $( Self::$variant { $field } => $field.as_str(), )+
                }
            }
        }
    };
}

pub(crate) use define_port_error;
