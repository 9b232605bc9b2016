/// Type alias for builtin function handlers.
///
/// A builtin receives the two evaluated argument values and returns its
/// result. Builtins cannot fail: every handler is total over `f64`.
pub type BuiltinFn = fn(f64, f64) -> f64;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides a string name and a function pointer implementing the
/// builtin. The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    ( $( $name:literal => $func:expr ),* $(,)? ) => {
        struct BuiltinDef {
            name: &'static str,
            func: BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        /// Names of every builtin, in dispatch order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "pow" => pow,
    "abs" => abs,
    "max" => f64::max,
    "min" => f64::min,
}

/// Raises `base` to the power `exponent`.
fn pow(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Absolute value of `value`.
///
/// The second argument exists only because every call in the language
/// supplies exactly two; it is evaluated by the caller and discarded here.
fn abs(value: f64, _second: f64) -> f64 {
    value.abs()
}

/// Finds the handler registered under `name`.
///
/// # Example
/// ```
/// use dyad::interpreter::evaluator::function::builtin::lookup;
///
/// let pow = lookup("pow").unwrap();
/// assert_eq!(pow(2.0, 10.0), 1024.0);
/// assert!(lookup("sqrt").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<BuiltinFn> {
    BUILTIN_TABLE.iter()
                 .find(|builtin| builtin.name == name)
                 .map(|builtin| builtin.func)
}
