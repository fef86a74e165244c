//! `define_port_error!` generates a port error enum with a `thiserror`
//! message per variant and a snake_case constructor per variant whose
//! fields accept `impl Into<T>`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum ProbeError {
            Offline => "probe offline",
            Refused { reason: String } => "probe refused: {reason}",
            Throttled { reason: String, retry_after: u64 } => "throttled ({retry_after}s): {reason}",
        }
    }

    #[test]
    fn unit_variant_gets_nullary_constructor() {
        assert_eq!(ProbeError::offline(), ProbeError::Offline);
        assert_eq!(ProbeError::offline().to_string(), "probe offline");
    }

    #[test]
    fn string_fields_take_borrowed_text() {
        let err = ProbeError::refused("quota");
        assert_eq!(err.to_string(), "probe refused: quota");
    }

    #[test]
    fn fields_keep_declaration_order() {
        let err = ProbeError::throttled("slow down", 30_u64);
        assert_eq!(err.to_string(), "throttled (30s): slow down");
    }
}
