use crate::cli::ConvertArgs;
use crate::error::Result;
use reaction_web::core::units::energy_conversion;
use tracing::debug;

pub fn run(args: ConvertArgs) -> Result<()> {
    let factor = energy_conversion(&args.from, &args.to)?;
    debug!("1 {} = {} {}", args.from, factor, args.to);
    println!("{}", factor);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn unknown_units_fail() {
        let args = ConvertArgs {
            from: "hartree".to_string(),
            to: "J".to_string(),
        };
        assert!(matches!(run(args), Err(CliError::Unit(_))));
    }
}
