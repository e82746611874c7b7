//! Helper macro for declaring port error enums.
//!
//! Each variant carries named fields and a display message. The macro derives
//! `thiserror::Error` and adds one snake-case constructor per variant whose
//! parameters accept anything convertible into the field types.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),* },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                }
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    define_port_error! {
        pub enum LedgerError {
            Unreachable { message: String } => "ledger unreachable: {message}",
            Rejected { table: String, attempts: u32 } => "{table} rejected after {attempts} attempts",
        }
    }

    #[rstest]
    fn constructor_converts_str_into_string() {
        let err = LedgerError::unreachable("socket closed");
        assert_eq!(
            err,
            LedgerError::Unreachable {
                message: "socket closed".to_owned()
            }
        );
        assert_eq!(err.to_string(), "ledger unreachable: socket closed");
    }

    #[rstest]
    fn constructor_takes_fields_in_declaration_order() {
        let err = LedgerError::rejected("offers", 3_u32);
        assert_eq!(err.to_string(), "offers rejected after 3 attempts");
    }
}
