pub(crate) use self::parse::ParseErrors;

mod cook;
mod names;
mod parse;
mod reshape;
