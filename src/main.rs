use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};
use tetris_stack::prelude::*;

fn main() -> Result<()>
{
    // Read the dotenv file.
    dotenvy::dotenv().ok();

    // Parse the cli options.
    let options = MenuOptions::parse();

    // Log straight to stderr so records land between prompts rather than after them.
    let _logger = Logger::try_with_env_or_str(options.log_level.clone())?
        .write_mode(WriteMode::Direct)
        .log_to_stderr()
        .adaptive_format_for_stderr(AdaptiveFormat::Default)
        .set_palette("b196;208;195;111;67".to_owned())
        .start()?;

    log::info!("starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    // Run the menu loop.
    let result = Menu::new(&options).and_then(|mut menu| menu.run(std::io::stdin().lock(), std::io::stdout().lock()));
    if let Err(e) = result
    {
        log::error!("fatal error: {}", e);
    }

    Ok(())
}
