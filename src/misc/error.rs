use derive_more::Display;

#[derive(Clone, PartialEq, Eq, Debug, Display)]
pub enum Error {
    #[display("invalid configuration: {_0}")]
    InvalidConfig(String),

    #[display("invalid element: {_0}")]
    InvalidElement(String),

    #[display("invalid argument: {_0}")]
    InvalidArgument(String),

    #[display("unsupported operation: {_0}")]
    Unsupported(&'static str),
}

impl std::error::Error for Error {}

macro_rules! err {
    ($kind:ident, $($arg:tt)*) => {{
        let e = $crate::Error::$kind(format!($($arg)*));
        Err(e)
    }}
}

macro_rules! ensure {
    ($cond:expr, $kind:ident, $($arg:tt)*) => {{
        if !$cond {
            return $crate::misc::err!($kind, $($arg)*);
        }
    }}
}

pub(crate) use {err, ensure};
