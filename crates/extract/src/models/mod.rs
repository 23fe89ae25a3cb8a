mod parse;
mod residual;

pub use self::parse::TitleParseResult;
pub use self::residual::ResidualInfo;
