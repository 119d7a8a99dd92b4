use crate::cli::TranslateArgs;
use crate::error::Result;
use reaction_web::core::translate::translate;
use tracing::debug;

pub fn run(args: TranslateArgs) -> Result<()> {
    debug!("Translating '{}' to {}.", args.formula, args.to);
    println!("{}", translate(&args.formula, args.to)?);
    Ok(())
}
