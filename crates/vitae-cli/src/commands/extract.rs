//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::Result;
use crate::input::read_text;
use crate::output::Formatter;
use vitae_domain::Locale;
use vitae_extractor::Extractor;
use vitae_gatekeeper::Gatekeeper;

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let locale = Locale::from_code(&args.locale)?;
    let extractor = Extractor::new(locale, Gatekeeper::new(config.validation.clone())?)?;

    let text = read_text(args.file.as_deref())?;
    let extraction = extractor.extract_all(&text);

    for line in formatter.extraction(&extraction) {
        println!("{}", line);
    }
    Ok(())
}
