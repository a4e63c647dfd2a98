//! `define_port_error!` declares the error enum of a driven port.
//!
//! Every variant is a struct variant with a display string. The macro adds a
//! `thiserror` derive and one snake_case constructor per variant taking
//! `impl Into<T>` for each field, so adapters can write
//! `AuthProviderError::transport(err.to_string())` or pass a `&str`.

macro_rules! define_port_error {
    (
        $(#[$enum_meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $display:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($display)]
                $variant { $($field: $ty),* },
            )+
        }

        ::paste::paste! {
            impl $name {
                $(
                    #[doc = concat!("Build [`", stringify!($name), "::", stringify!($variant), "`].")]
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                )+
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    define_port_error! {
        pub enum ProbeError {
            Offline {} => "provider offline",
            Rejected { message: String } => "rejected: {message}",
            Throttled { message: String, retry_after: u32 } => "throttled: {message} ({retry_after}s)",
        }
    }

    #[rstest]
    #[case(ProbeError::offline(), "provider offline")]
    #[case(ProbeError::rejected("Email not confirmed"), "rejected: Email not confirmed")]
    #[case(ProbeError::throttled("slow down", 30_u32), "throttled: slow down (30s)")]
    fn constructors_render_their_message(#[case] err: ProbeError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }

    #[rstest]
    fn fields_are_converted_into_declared_types() {
        assert_eq!(
            ProbeError::throttled(String::from("slow down"), 5_u8),
            ProbeError::Throttled {
                message: "slow down".to_owned(),
                retry_after: 5
            }
        );
    }
}
