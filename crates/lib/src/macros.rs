/// Helper macro to implement [FromInput][crate::input::FromInput] for a type
/// by converting from something that can already be parsed.
///
/// On error the input is rewound and the error is reported against the span
/// of the consumed value.
///
/// # Examples
///
/// ```
/// use lib::prelude::*;
///
/// struct Turn(bool);
///
/// lib::from_input! {
///     |B(b): B| -> Turn {
///         match b {
///             b'L' => Ok(Turn(false)),
///             b'R' => Ok(Turn(true)),
///             b => bail!("bad turn {:?}", b as char),
///         }
///     }
/// }
///
/// let mut input = IStr::new(b"LRX", 0);
/// assert!(!input.next::<Turn>()?.0);
/// assert!(input.next::<Turn>()?.0);
/// assert!(input.next::<Turn>().is_err());
/// assert_eq!(input.index(), 2);
/// # Ok::<_, Error>(())
/// ```
#[macro_export]
macro_rules! from_input {
    (|$($value:ident)? $(($pat:pat))?: $ty:ty| -> $($rest:tt)*) => {
        $crate::from_input!(|[$($value)? $(($pat))?]: $ty| -> $($rest)*);
    };

    (|[$($value:tt)*]: $ty:ty| -> $out:ident $block:block) => {
        impl $crate::input::FromInput for $out {
            #[inline]
            fn try_from_input(
                p: &mut $crate::input::IStr,
            ) -> core::result::Result<Option<Self>, $crate::input::IStrError> {
                let original = *p;

                let Some(value) = $crate::input::FromInput::try_from_input(p)? else {
                    return Ok(None);
                };

                match (|$($value)*: $ty| -> core::result::Result<$out, $crate::macro_support::Error> {
                    $block
                })(value)
                {
                    Ok(value) => Ok(Some(value)),
                    Err(e) => {
                        let span = original.index()..p.index();
                        *p = original;
                        Err($crate::input::IStrError::new(span, $crate::input::ErrorKind::Boxed(e)))
                    }
                }
            }
        }
    };
}
