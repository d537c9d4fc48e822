/// Runs `$body` with `$T` bound to the payload type of element type `$ty`.
///
/// ```
/// use arrayc_values::{ElementType, dispatch_element, typed::Element};
///
/// let size = dispatch_element!(ElementType::Int, T => core::mem::size_of::<T>());
/// assert_eq!(size, 8);
/// let zero = dispatch_element!(ElementType::Text, T => T::default_value().into_value());
/// assert_eq!(zero.as_text(), Some(""));
/// ```
#[macro_export]
macro_rules! dispatch_element {
    ($ty:expr, $T:ident => $body:expr) => {
        match $ty {
            $crate::ElementType::Bool => {
                #[allow(unused)]
                type $T = bool;
                $body
            }
            $crate::ElementType::Int => {
                #[allow(unused)]
                type $T = i64;
                $body
            }
            $crate::ElementType::Float => {
                #[allow(unused)]
                type $T = f64;
                $body
            }
            $crate::ElementType::Text => {
                #[allow(unused)]
                type $T = $crate::shim::String;
                $body
            }
            $crate::ElementType::Bytes => {
                #[allow(unused)]
                type $T = $crate::shim::Vec<u8>;
                $body
            }
            $crate::ElementType::Pointer => {
                #[allow(unused)]
                type $T = $crate::Pointer;
                $body
            }
        }
    };
}
